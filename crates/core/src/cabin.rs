use std::cmp::Ordering;

use tracing::debug;

use crate::models::LuggageItem;
use crate::policy::CabinRules;

/// Outcome of the cabin stage. This stage never hard-fails: anything that
/// cannot stay in the cabin becomes a checked-candidate instead.
#[derive(Debug)]
pub struct CabinOutcome {
    /// `None` when every item stays in the cabin.
    pub message: Option<String>,
    /// Items staying in the cabin, marked compliant.
    pub retained: Vec<LuggageItem>,
    /// Items that must move to checked storage. Their storage category is
    /// left untouched here; the orchestrator performs the reclassification.
    pub to_checked: Vec<LuggageItem>,
}

/// Validate carry-on and personal items against the cabin rules and evict
/// whatever exceeds the limits or the piece ceiling.
pub fn evaluate_cabin(
    rules: &CabinRules,
    cabin_items: Vec<LuggageItem>,
    personal_items: Vec<LuggageItem>,
) -> CabinOutcome {
    let mut compliant = Vec::new();
    let mut to_checked = Vec::new();

    for mut item in cabin_items.into_iter().chain(personal_items) {
        if fits_cabin(&item, rules) {
            item.mark_cabin_compliant();
            compliant.push(item);
        } else {
            debug!(
                category = item.category().as_code(),
                weight_kg = item.weight_kg(),
                total_size_cm = item.total_size_cm(),
                "cabin item out of limits, becomes checked-candidate"
            );
            item.mark_noncompliant();
            to_checked.push(item);
        }
    }

    // Piece ceiling: class quantity plus the single personal-item slot.
    // The heaviest compliant items are evicted first.
    let max_items = rules.quantity as usize + 1;
    if compliant.len() > max_items {
        compliant.sort_by(|a, b| {
            b.weight_kg()
                .partial_cmp(&a.weight_kg())
                .unwrap_or(Ordering::Equal)
        });
        let overflow = compliant.split_off(max_items);
        for mut item in overflow {
            item.mark_cabin_overflow();
            debug!(
                weight_kg = item.weight_kg(),
                "cabin quota exceeded, heaviest item displaced"
            );
            to_checked.push(item);
        }
    }

    let message = if to_checked.is_empty() {
        None
    } else {
        Some(format!(
            "{} item(s) must move to checked storage",
            to_checked.len()
        ))
    };

    CabinOutcome {
        message,
        retained: compliant,
        to_checked,
    }
}

/// Per-dimension and weight check against the cabin limits. A non-finite
/// reading counts as a failure, so the item falls through to checked.
fn fits_cabin(item: &LuggageItem, rules: &CabinRules) -> bool {
    let dims_cm = item.dimensions_cm();
    let readable = item.weight_kg().is_finite() && dims_cm.iter().all(|d| d.is_finite());
    if !readable {
        return false;
    }

    let size_ok = dims_cm
        .iter()
        .zip(rules.size_limit_cm)
        .all(|(dim, limit)| *dim <= limit);
    size_ok && item.weight_kg() <= rules.weight_limit_kg
}
