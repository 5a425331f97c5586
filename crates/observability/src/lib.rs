use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Counters over evaluation outcomes. Fee totals are tracked in whole fee
/// units; the schedule only uses integral amounts.
#[derive(Debug, Default)]
pub struct EngineMetrics {
    evaluations_total: AtomicU64,
    failed_evaluations_total: AtomicU64,
    items_evaluated_total: AtomicU64,
    moved_to_checked_total: AtomicU64,
    cargo_routed_total: AtomicU64,
    fee_units_total: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub evaluations_total: u64,
    pub failed_evaluations_total: u64,
    pub items_evaluated_total: u64,
    pub moved_to_checked_total: u64,
    pub cargo_routed_total: u64,
    pub fee_units_total: u64,
}

impl EngineMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record_evaluation(&self, valid: bool, items: usize, moved: usize, cargo: usize, fees: f64) {
        self.evaluations_total.fetch_add(1, Ordering::Relaxed);
        if !valid {
            self.failed_evaluations_total.fetch_add(1, Ordering::Relaxed);
        }
        self.items_evaluated_total
            .fetch_add(items as u64, Ordering::Relaxed);
        self.moved_to_checked_total
            .fetch_add(moved as u64, Ordering::Relaxed);
        self.cargo_routed_total
            .fetch_add(cargo as u64, Ordering::Relaxed);
        self.fee_units_total
            .fetch_add(fees.max(0.0).round() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluations_total: self.evaluations_total.load(Ordering::Relaxed),
            failed_evaluations_total: self.failed_evaluations_total.load(Ordering::Relaxed),
            items_evaluated_total: self.items_evaluated_total.load(Ordering::Relaxed),
            moved_to_checked_total: self.moved_to_checked_total.load(Ordering::Relaxed),
            cargo_routed_total: self.cargo_routed_total.load(Ordering::Relaxed),
            fee_units_total: self.fee_units_total.load(Ordering::Relaxed),
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=info,stowage_core=info", service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
