//! Dashboard counters over hand-built product sets

use pretty_assertions::assert_eq;
use quantika::analysis::{build_dashboard_snapshot, calculate_dashboard_stats, is_critical, summarize_quality};
use quantika::models::{DashboardStats, QualityStatus, StockStatus};
use test_log::test;

use crate::common::logging::{init_test_logging, log_test_data, log_test_step};
use crate::common::test_data::{create_test_product, date};

#[test]
fn test_empty_inventory_yields_zero_counters() {
    init_test_logging();
    let stats = calculate_dashboard_stats(&[], date(2024, 1, 20));
    assert_eq!(stats, DashboardStats::default());
}

#[test]
fn test_counters_stay_within_total() {
    init_test_logging();
    log_test_step("Mixing statuses, qualities and expiry dates");

    let statuses = [StockStatus::Normal, StockStatus::Low, StockStatus::Critical];
    let qualities = [QualityStatus::Approved, QualityStatus::Pending, QualityStatus::Rejected];
    let products: Vec<_> = (0..12)
        .map(|i| {
            let mut p = create_test_product(i, &format!("Reagente {}", i));
            p.status = statuses[i as usize % 3];
            p.quality = qualities[i as usize % 3];
            p.expiration_date = date(2024, 1, 1) + chrono::Duration::days(i * 10);
            p
        })
        .collect();

    let snapshot = build_dashboard_snapshot(&products, date(2024, 1, 20), 30);
    log_test_data("Snapshot stats", &snapshot.stats);

    assert_eq!(snapshot.stats.total_products, 12);
    assert_eq!(snapshot.stats.low_stock, 8);
    assert_eq!(snapshot.stats.approved, 4);
    // 2024-01-01 + 0..=40 days falls on or before 2024-02-19
    assert_eq!(snapshot.stats.expiring_soon, 5);

    // Every product is critical unless normal and non-pending
    let expected: Vec<i64> = products.iter().filter(|p| is_critical(p)).map(|p| p.id).collect();
    let actual: Vec<i64> = snapshot.critical.iter().map(|p| p.id).collect();
    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 8);
}

#[test]
fn test_pending_product_with_healthy_stock_is_critical() {
    let mut product = create_test_product(1, "Etanol");
    assert!(!is_critical(&product));
    product.quality = QualityStatus::Pending;
    assert!(is_critical(&product));
    product.quality = QualityStatus::Rejected;
    assert!(!is_critical(&product));
}

#[test]
fn test_quality_summary_partitions_products() {
    let mut products: Vec<_> = (1..=5).map(|i| create_test_product(i, "Base")).collect();
    products[0].quality = QualityStatus::Pending;
    products[1].quality = QualityStatus::Rejected;
    products[2].quality = QualityStatus::Rejected;

    let summary = summarize_quality(&products);
    assert_eq!(summary.approved, 2);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.approved + summary.pending + summary.rejected, products.len());
}
