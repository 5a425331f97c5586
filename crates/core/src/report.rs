use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{AgeCategory, EvaluationResult, LuggageRecord, StorageCategory, TravelClass};

#[derive(Debug, Clone, Serialize)]
pub struct RequestInfo {
    pub travel_class: TravelClass,
    pub age_category: AgeCategory,
    pub total_luggage: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub valid: bool,
    pub message: String,
    pub fees: f64,
}

/// Per-category and per-flag counts over the terminal item set.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub carry_on: usize,
    pub personal: usize,
    pub checked: usize,
    pub special: usize,
    pub excess: usize,
    pub compliant: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionCounts {
    pub moved_to_checked: usize,
    pub sent_to_cargo: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDetails {
    pub moved_items: Vec<LuggageRecord>,
    pub cargo_items: Vec<LuggageRecord>,
}

/// Structured aggregate of one evaluation, suitable for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub request_info: RequestInfo,
    pub result: ResultSummary,
    pub statistics: CategoryStats,
    pub actions: ActionCounts,
    pub details: ReportDetails,
}

pub fn build_report(
    travel_class: TravelClass,
    age_category: AgeCategory,
    total_luggage: usize,
    result: &EvaluationResult,
) -> ComplianceReport {
    let statistics = CategoryStats {
        carry_on: count_category(result, StorageCategory::CarryOn),
        personal: count_category(result, StorageCategory::Personal),
        checked: count_category(result, StorageCategory::Checked),
        special: result.items.iter().filter(|i| i.is_special()).count(),
        excess: result.items.iter().filter(|i| i.is_excess()).count(),
        compliant: result.items.iter().filter(|i| i.is_compliant()).count(),
    };

    ComplianceReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        request_info: RequestInfo {
            travel_class,
            age_category,
            total_luggage,
        },
        result: ResultSummary {
            valid: result.valid,
            message: result.message.clone(),
            fees: result.fees,
        },
        statistics,
        actions: ActionCounts {
            moved_to_checked: result.moved_to_checked.len(),
            sent_to_cargo: result.cargo.len(),
        },
        details: ReportDetails {
            moved_items: result.moved_to_checked.iter().map(|i| i.to_record()).collect(),
            cargo_items: result.cargo.iter().map(|i| i.to_record()).collect(),
        },
    }
}

fn count_category(result: &EvaluationResult, category: StorageCategory) -> usize {
    result
        .items
        .iter()
        .filter(|i| i.category() == category)
        .count()
}
