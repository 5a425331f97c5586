pub mod cabin;
pub mod engine;
pub mod hold;
pub mod models;
pub mod policy;
pub mod report;

pub use cabin::{evaluate_cabin, CabinOutcome};
pub use engine::ComplianceEngine;
pub use hold::{evaluate_hold, HoldOutcome};
pub use models::*;
pub use policy::{
    AgeOverlay, CabinRules, ClassPolicy, FeeSchedule, HoldRules, PolicyTable,
    CARGO_TOTAL_SIZE_LIMIT_CM, CARGO_WEIGHT_LIMIT_KG,
};
pub use report::{build_report, ComplianceReport};
