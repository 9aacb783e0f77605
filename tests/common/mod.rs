//! Common test utilities and helpers

/// Test data utilities
pub mod test_data {
    use chrono::NaiveDate;
    use quantika::models::{Movement, MovementType, Product, QualityStatus, StockStatus};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A product with healthy stock, approved quality and a distant expiry
    pub fn create_test_product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: "Ácidos".to_string(),
            concentration: "65%".to_string(),
            batch: format!("LOT-TEST-{:03}", id),
            supplier: "Fornecedor Teste".to_string(),
            expiration_date: date(2030, 1, 1),
            quantity: 100,
            unit: "L".to_string(),
            minimum_stock: 20,
            status: StockStatus::Normal,
            quality: QualityStatus::Approved,
            last_analysis: date(2024, 1, 1),
            price: 10.0,
            location: "A-01".to_string(),
        }
    }

    pub fn create_test_movement(id: i64, product_id: i64, kind: MovementType) -> Movement {
        Movement {
            id,
            product_id,
            kind,
            quantity: 5,
            date: date(2024, 1, 10),
            user: "Operador Teste".to_string(),
            notes: String::new(),
        }
    }
}

/// Logging utilities for tests
pub mod logging {
    use std::sync::Once;
    use tracing::{debug, info};

    static INIT: Once = Once::new();

    /// Initialize test logging
    pub fn init_test_logging() {
        INIT.call_once(|| {
            // Another test may already have installed a subscriber
            let _ = tracing::subscriber::set_global_default(
                tracing_subscriber::fmt()
                    .with_env_filter("quantika=debug,main=debug")
                    .with_test_writer()
                    .finish(),
            );
        });
    }

    pub fn log_test_step(step: &str) {
        info!("🧪 Test Step: {}", step);
    }

    pub fn log_test_data<T: std::fmt::Debug>(label: &str, data: &T) {
        debug!("📊 {}: {:?}", label, data);
    }
}
