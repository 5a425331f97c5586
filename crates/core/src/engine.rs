use std::collections::HashSet;

use anyhow::Result;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::cabin::evaluate_cabin;
use crate::hold::evaluate_hold;
use crate::models::{ComplianceRequest, EvaluationResult, LuggageItem, StorageCategory};
use crate::policy::PolicyTable;
use crate::report::{build_report, ComplianceReport};

const ALL_COMPLIANT: &str = "All baggage is compliant.";

/// Sequences the cabin and hold evaluators over one traveler's items and
/// assembles the final verdict, fee total and reallocation lists.
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    table: PolicyTable,
}

impl ComplianceEngine {
    pub fn new(table: PolicyTable) -> Self {
        Self { table }
    }

    pub fn policy_table(&self) -> &PolicyTable {
        &self.table
    }

    /// Evaluate one traveler's full item list. This never panics past its
    /// own boundary: any internal failure becomes a failed result so one
    /// malformed traveler cannot abort a caller's batch.
    #[instrument(skip_all, fields(
        travel_class = request.travel_class.as_code(),
        age_category = request.age_category.as_code(),
        items = request.items.len(),
    ))]
    pub fn evaluate(&self, request: ComplianceRequest) -> EvaluationResult {
        match self.evaluate_inner(request) {
            Ok(result) => {
                info!(
                    valid = result.valid,
                    fees = result.fees,
                    moved = result.moved_to_checked.len(),
                    cargo = result.cargo.len(),
                    "evaluation complete"
                );
                result
            }
            Err(error) => {
                error!(error = %error, "evaluation aborted");
                EvaluationResult::failed(format!("evaluation failed: {error:#}"))
            }
        }
    }

    /// Evaluate and aggregate the outcome into a structured report.
    pub fn evaluate_with_report(
        &self,
        request: ComplianceRequest,
    ) -> (EvaluationResult, ComplianceReport) {
        let travel_class = request.travel_class;
        let age_category = request.age_category;
        let total_luggage = request.items.len();

        let result = self.evaluate(request);
        let report = build_report(travel_class, age_category, total_luggage, &result);
        (result, report)
    }

    fn evaluate_inner(&self, request: ComplianceRequest) -> Result<EvaluationResult> {
        let policy = self.table.class_policy(request.travel_class);
        let overlay = self.table.age_overlay(request.age_category);

        // Partition by current storage category. Items already tagged
        // special are not re-evaluated; they pass straight through.
        // Every item gets a fresh id so clones in the input are still
        // tracked as distinct bags.
        let mut cabin_items = Vec::new();
        let mut personal_items = Vec::new();
        let mut checked_items = Vec::new();
        let mut passthrough = Vec::new();
        for mut item in request.items {
            item.assign_fresh_id();
            match item.category() {
                StorageCategory::CarryOn => cabin_items.push(item),
                StorageCategory::Personal => personal_items.push(item),
                StorageCategory::Checked => checked_items.push(item),
                StorageCategory::Special => passthrough.push(item),
            }
        }

        let cabin_count = cabin_items.len();
        let personal_count = personal_items.len();

        let cabin_outcome = evaluate_cabin(&policy.cabin, cabin_items, personal_items);

        let moved_ids: HashSet<Uuid> = cabin_outcome.to_checked.iter().map(|i| i.id()).collect();
        let moved_count = moved_ids.len();

        // Combined checked set: original hold items first, then the
        // reclassified cabin overflow.
        let mut combined = checked_items;
        for mut item in cabin_outcome.to_checked {
            item.move_to_checked();
            combined.push(item);
        }

        // Theoretical cabin slots minus whatever actually stayed on board.
        let allowed = policy.cabin.quantity as i64 + 1;
        let occupied = (cabin_count + personal_count - moved_count) as i64;
        let cabin_capacity = (allowed - occupied).max(0) as u32;

        let hold_outcome = evaluate_hold(
            policy,
            overlay,
            self.table.fees(),
            combined,
            cabin_capacity,
        );

        // Redundant by construction, kept as an explicit double-check.
        let valid = hold_outcome.passed && hold_outcome.cargo.is_empty();

        let message = {
            let parts: Vec<String> = [cabin_outcome.message, hold_outcome.message]
                .into_iter()
                .flatten()
                .collect();
            if parts.is_empty() {
                ALL_COMPLIANT.to_string()
            } else {
                parts.join(" | ")
            }
        };

        let cargo = hold_outcome.cargo;
        let mut items = cabin_outcome.retained;
        items.extend(hold_outcome.reclaimed);
        items.extend(hold_outcome.retained);
        items.extend(cargo.iter().cloned());
        items.extend(passthrough);

        // The moved list reflects each item's terminal state, recovered by
        // identity after the hold stage possibly reclassified it again.
        let moved_to_checked: Vec<LuggageItem> = items
            .iter()
            .filter(|item| moved_ids.contains(&item.id()))
            .cloned()
            .collect();

        Ok(EvaluationResult {
            valid,
            message,
            moved_to_checked,
            cargo,
            fees: hold_outcome.fees,
            items,
        })
    }
}
