use chrono::{Days, NaiveDate};

use crate::models::{DashboardStats, Product, QualityStatus, QualitySummary};

/// Products expiring within this many days of today count as "expiring soon"
pub const EXPIRY_WINDOW_DAYS: u32 = 30;

/// Dashboard counters plus the products that need attention
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub critical: Vec<Product>,
}

/// A product needs attention when its stock is low/critical or its quality is still pending
pub fn is_critical(product: &Product) -> bool {
    product.status.needs_restock() || product.quality == QualityStatus::Pending
}

/// Expiring on or before `today + window_days`; already expired products count too.
/// A window reaching past the last representable date covers every product.
pub fn is_expiring(product: &Product, today: NaiveDate, window_days: u32) -> bool {
    match today.checked_add_days(Days::new(u64::from(window_days))) {
        Some(limit) => product.expiration_date <= limit,
        None => true,
    }
}

/// Compute dashboard counters with an explicit expiry window
pub fn calculate_dashboard_stats_with_window(
    products: &[Product],
    today: NaiveDate,
    window_days: u32,
) -> DashboardStats {
    DashboardStats {
        total_products: products.len(),
        low_stock: products.iter().filter(|p| p.status.needs_restock()).count(),
        expiring_soon: products
            .iter()
            .filter(|p| is_expiring(p, today, window_days))
            .count(),
        approved: products
            .iter()
            .filter(|p| p.quality == QualityStatus::Approved)
            .count(),
    }
}

/// Compute dashboard counters using the standard 30-day expiry window
pub fn calculate_dashboard_stats(products: &[Product], today: NaiveDate) -> DashboardStats {
    calculate_dashboard_stats_with_window(products, today, EXPIRY_WINDOW_DAYS)
}

/// Products needing attention, in input order
pub fn select_critical_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| is_critical(p)).cloned().collect()
}

/// Counters and critical subset in one pass over the same collection
pub fn build_dashboard_snapshot(
    products: &[Product],
    today: NaiveDate,
    window_days: u32,
) -> DashboardSnapshot {
    DashboardSnapshot {
        stats: calculate_dashboard_stats_with_window(products, today, window_days),
        critical: select_critical_products(products),
    }
}

pub fn summarize_quality(products: &[Product]) -> QualitySummary {
    let mut summary = QualitySummary::default();
    for product in products {
        match product.quality {
            QualityStatus::Approved => summary.approved += 1,
            QualityStatus::Pending => summary.pending += 1,
            QualityStatus::Rejected => summary.rejected += 1,
        }
    }
    summary
}
