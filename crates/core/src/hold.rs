use std::cmp::Ordering;

use tracing::{debug, info};

use crate::models::LuggageItem;
use crate::policy::{
    AgeOverlay, ClassPolicy, FeeSchedule, CARGO_TOTAL_SIZE_LIMIT_CM, CARGO_WEIGHT_LIMIT_KG,
};

#[derive(Debug)]
pub struct HoldOutcome {
    /// False iff at least one item had to be routed to cargo.
    pub passed: bool,
    /// `None` when the checked set is clean and no overlay applied.
    pub message: Option<String>,
    /// Items kept as checked baggage, in reclaim-pass order.
    pub retained: Vec<LuggageItem>,
    /// Items re-admitted into freed cabin capacity.
    pub reclaimed: Vec<LuggageItem>,
    /// Items refused as baggage and routed to freight handling. Never fee-charged.
    pub cargo: Vec<LuggageItem>,
    pub fees: f64,
}

/// Validate the combined checked set: reclaim light bags into freed cabin
/// capacity, divert anything beyond the cargo thresholds, and accumulate
/// fees for the rest.
pub fn evaluate_hold(
    policy: &ClassPolicy,
    overlay: Option<&AgeOverlay>,
    fee_schedule: &FeeSchedule,
    mut items: Vec<LuggageItem>,
    mut cabin_capacity: u32,
) -> HoldOutcome {
    let mut message_parts = Vec::new();

    let hold_rules = match overlay {
        Some(overlay) => {
            message_parts.push(format!(
                "age allowance applied (+{} piece)",
                overlay.extra_allowance
            ));
            policy.hold.with_overlay(overlay)
        }
        None => policy.hold,
    };

    // Reclaim pass: lightest first maximizes the number of bags that fit
    // back into the remaining cabin slots.
    items.sort_by(|a, b| {
        a.weight_kg()
            .partial_cmp(&b.weight_kg())
            .unwrap_or(Ordering::Equal)
    });

    let mut checked = Vec::new();
    let mut reclaimed = Vec::new();
    for mut item in items {
        if cabin_capacity > 0 && fits_cabin(&item, policy) {
            item.reclaim_to_cabin();
            cabin_capacity -= 1;
            debug!(weight_kg = item.weight_kg(), "checked item reclaimed to cabin");
            reclaimed.push(item);
        } else {
            checked.push(item);
        }
    }

    let mut fees = 0.0;
    let mut cargo = Vec::new();
    let mut retained = Vec::new();

    for mut item in checked {
        let weight = item.weight_kg();
        let (total_size_cm, dims_cm) = checked_metrics(&item);

        if weight > CARGO_WEIGHT_LIMIT_KG || total_size_cm > CARGO_TOTAL_SIZE_LIMIT_CM {
            item.route_to_cargo();
            info!(
                weight_kg = weight,
                total_size_cm, "checked item beyond cargo thresholds, refused"
            );
            cargo.push(item);
            continue;
        }

        if weight > hold_rules.weight_limit_kg {
            fees += fee_schedule.overweight;
            item.mark_fee_excess();
            message_parts.push(format!(
                "overweight {:.0}x{:.0}x{:.0}cm ({}kg > {}kg)",
                dims_cm[0], dims_cm[1], dims_cm[2], weight, hold_rules.weight_limit_kg
            ));
        }

        // Both fees can apply to the same item.
        if total_size_cm > hold_rules.total_size_limit_cm
            && total_size_cm <= CARGO_TOTAL_SIZE_LIMIT_CM
        {
            fees += fee_schedule.oversize;
            item.mark_fee_excess();
            message_parts.push(format!(
                "oversize {:.0}x{:.0}x{:.0}cm ({:.1}cm > {}cm)",
                dims_cm[0], dims_cm[1], dims_cm[2], total_size_cm, hold_rules.total_size_limit_cm
            ));
        }

        retained.push(item);
    }

    // Piece-count fee over the non-cargo items. The last N in current list
    // order are marked excess; the order carries over from the passes above
    // and is deliberately not re-sorted.
    let excess_count = retained.len().saturating_sub(hold_rules.allowance as usize);
    if excess_count > 0 {
        fees += fee_schedule.extra_piece * excess_count as f64;
        message_parts.push(format!("{} extra piece(s)", excess_count));
        let start = retained.len() - excess_count;
        for item in &mut retained[start..] {
            item.mark_fee_excess();
        }
    }

    let fee_message = if message_parts.is_empty() {
        None
    } else {
        Some(format!("Fees apply: {}", message_parts.join("; ")))
    };

    let passed = cargo.is_empty();
    let message = if passed {
        fee_message
    } else {
        Some(match fee_message {
            Some(rest) => format!(
                "REFUSED: {} item(s) must be shipped as cargo. {}",
                cargo.len(),
                rest
            ),
            None => format!("REFUSED: {} item(s) must be shipped as cargo", cargo.len()),
        })
    };

    HoldOutcome {
        passed,
        message,
        retained,
        reclaimed,
        cargo,
        fees,
    }
}

/// Whether a checked item would fit the cabin limits of its class.
fn fits_cabin(item: &LuggageItem, policy: &ClassPolicy) -> bool {
    let dims_cm = item.dimensions_cm();
    if !item.weight_kg().is_finite() || dims_cm.iter().any(|d| !d.is_finite()) {
        return false;
    }
    dims_cm
        .iter()
        .zip(policy.cabin.size_limit_cm)
        .all(|(dim, limit)| *dim <= limit)
        && item.weight_kg() <= policy.cabin.weight_limit_kg
}

/// Total linear size and per-dimension list in cm. A failed computation
/// forces an infinite total (guaranteed cargo routing) and zeroed dimensions.
fn checked_metrics(item: &LuggageItem) -> (f64, [f64; 3]) {
    let dims_cm = item.dimensions_cm();
    let total = item.total_size_cm();
    if total.is_finite() && dims_cm.iter().all(|d| d.is_finite()) {
        (total, dims_cm)
    } else {
        (f64::INFINITY, [0.0; 3])
    }
}
