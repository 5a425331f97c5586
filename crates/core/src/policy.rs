use serde::Serialize;

use crate::models::{AgeCategory, TravelClass};

/// Weight above which a checked item is refused and routed to cargo.
pub const CARGO_WEIGHT_LIMIT_KG: f64 = 32.0;
/// Total linear size above which a checked item is refused and routed to cargo.
pub const CARGO_TOTAL_SIZE_LIMIT_CM: f64 = 203.0;

/// Cabin (carry-on + personal) limits for one travel class.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CabinRules {
    /// Carry-on pieces allowed; one personal item comes on top of this.
    pub quantity: u32,
    pub weight_limit_kg: f64,
    /// Per-dimension ceiling `[height, width, depth]` in centimeters.
    pub size_limit_cm: [f64; 3],
}

/// Checked-baggage limits for one travel class.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HoldRules {
    pub allowance: u32,
    pub weight_limit_kg: f64,
    /// Ceiling on height + width + depth in centimeters.
    pub total_size_limit_cm: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassPolicy {
    pub cabin: CabinRules,
    pub hold: HoldRules,
}

/// Additive checked-allowance adjustment for child/infant passengers.
/// The weight limit replaces the class limit only when it is higher.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgeOverlay {
    pub extra_allowance: u32,
    pub weight_limit_kg: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeeSchedule {
    pub overweight: f64,
    pub oversize: f64,
    pub extra_piece: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            overweight: 75.0,
            oversize: 100.0,
            extra_piece: 150.0,
        }
    }
}

/// Immutable per-class baggage policy lookup. Keys are the typed enums, so
/// an unknown class or age can never reach the evaluators.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyTable {
    economy: ClassPolicy,
    business: ClassPolicy,
    first: ClassPolicy,
    child: AgeOverlay,
    infant: AgeOverlay,
    fees: FeeSchedule,
}

impl Default for PolicyTable {
    fn default() -> Self {
        let cabin_size = [55.0, 40.0, 23.0];
        Self {
            economy: ClassPolicy {
                cabin: CabinRules {
                    quantity: 1,
                    weight_limit_kg: 7.0,
                    size_limit_cm: cabin_size,
                },
                hold: HoldRules {
                    allowance: 1,
                    weight_limit_kg: 23.0,
                    total_size_limit_cm: 158.0,
                },
            },
            business: ClassPolicy {
                cabin: CabinRules {
                    quantity: 2,
                    weight_limit_kg: 12.0,
                    size_limit_cm: cabin_size,
                },
                hold: HoldRules {
                    allowance: 2,
                    weight_limit_kg: 32.0,
                    total_size_limit_cm: 158.0,
                },
            },
            first: ClassPolicy {
                cabin: CabinRules {
                    quantity: 2,
                    weight_limit_kg: 12.0,
                    size_limit_cm: cabin_size,
                },
                hold: HoldRules {
                    allowance: 3,
                    weight_limit_kg: 32.0,
                    total_size_limit_cm: 158.0,
                },
            },
            child: AgeOverlay {
                extra_allowance: 1,
                weight_limit_kg: 23.0,
            },
            infant: AgeOverlay {
                extra_allowance: 1,
                weight_limit_kg: 10.0,
            },
            fees: FeeSchedule::default(),
        }
    }
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_policy(&self, travel_class: TravelClass) -> &ClassPolicy {
        match travel_class {
            TravelClass::Economy => &self.economy,
            TravelClass::Business => &self.business,
            TravelClass::First => &self.first,
        }
    }

    pub fn age_overlay(&self, age: AgeCategory) -> Option<&AgeOverlay> {
        match age {
            AgeCategory::Adult => None,
            AgeCategory::Child => Some(&self.child),
            AgeCategory::Infant => Some(&self.infant),
        }
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }
}

impl HoldRules {
    /// Copy of these rules with a child/infant overlay folded in.
    pub fn with_overlay(&self, overlay: &AgeOverlay) -> Self {
        Self {
            allowance: self.allowance + overlay.extra_allowance,
            weight_limit_kg: self.weight_limit_kg.max(overlay.weight_limit_kg),
            total_size_limit_cm: self.total_size_limit_cm,
        }
    }
}
