//! Prometheus metrics for the purchase flow.
//!
//! This module provides metrics for:
//! - Purchase outcomes and rejection reasons
//! - Tickets sold, seats reserved and revenue taken

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts};

// =============================================================================
// Purchase Metrics
// =============================================================================

/// Purchases total by result.
pub static PURCHASES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("turnstile_purchases_total", "Total purchase attempts"),
        &["result"], // "fulfilled", "rejected"
    )
    .unwrap()
});

/// Rejected purchases by the rule they broke.
pub static PURCHASE_REJECTIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "turnstile_purchase_rejections_total",
            "Total rejected purchases by reason",
        ),
        &["reason"],
    )
    .unwrap()
});

// =============================================================================
// Fulfilment Metrics
// =============================================================================

/// Tickets sold by type.
pub static TICKETS_SOLD: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("turnstile_tickets_sold_total", "Total tickets sold"),
        &["type"], // "adult", "child", "infant"
    )
    .unwrap()
});

/// Seats reserved total.
pub static SEATS_RESERVED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("turnstile_seats_reserved_total", "Total seats reserved").unwrap()
});

/// Revenue total, in the smallest currency unit.
pub static REVENUE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "turnstile_revenue_total",
        "Total amount charged for fulfilled purchases",
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(PURCHASES_TOTAL.clone()),
        Box::new(PURCHASE_REJECTIONS.clone()),
        Box::new(TICKETS_SOLD.clone()),
        Box::new(SEATS_RESERVED.clone()),
        Box::new(REVENUE_TOTAL.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        PURCHASES_TOTAL.with_label_values(&["fulfilled"]).inc();
        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"turnstile_purchases_total".to_string()));
    }
}
