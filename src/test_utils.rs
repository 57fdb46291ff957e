#[cfg(test)]
pub mod test_utils {
    use crate::config::{app_state_from_dataset, AppConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use model::{DEFAULT_DATE_FORMATS, Dataset, OrderRecord};
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Configuration used by the test app; nothing is read from disk.
    pub fn test_config() -> AppConfig {
        AppConfig {
            data_path: PathBuf::from("test-orders.csv"),
            bind_address: "127.0.0.1:0".to_string(),
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            skip_malformed_rows: true,
            cache_max_capacity: 100,
            cache_ttl_secs: 60,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn order(
        id: &str,
        (year, month, day): (i32, u32, u32),
        (country, market, iso): (&str, &str, &str),
        segment: &str,
        category: &str,
        sales: Decimal,
        profit: Decimal,
        quantity: u32,
        discount: Decimal,
    ) -> OrderRecord {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date");
        OrderRecord::new(id, date, sales)
            .with_location(country, market, iso)
            .with_classification(segment, category)
            .with_profit(profit)
            .with_quantity(quantity)
            .with_discount(discount)
    }

    /// Five order lines over 2011-2013, two markets and three countries.
    ///
    /// Totals: sales 2130.50, profit 489.75, quantity 15, discount 0.45.
    pub fn test_dataset() -> Dataset {
        Dataset::new(vec![
            order(
                "CA-1", (2011, 1, 10), ("France", "EU", "FRA"), "Consumer", "Technology",
                Decimal::new(100, 0), Decimal::new(20, 0), 2, Decimal::new(10, 2),
            ),
            order(
                "CA-2", (2011, 3, 5), ("Germany", "EU", "DEU"), "Corporate", "Furniture",
                Decimal::new(2505, 1), Decimal::new(-1025, 2), 3, Decimal::new(20, 2),
            ),
            order(
                "CA-3", (2012, 1, 20), ("Brazil", "LATAM", "BRA"), "Consumer", "Office Supplies",
                Decimal::new(80, 0), Decimal::new(30, 0), 1, Decimal::ZERO,
            ),
            order(
                "CA-4", (2012, 7, 14), ("France", "EU", "FRA"), "Home Office", "Technology",
                Decimal::new(1200, 0), Decimal::new(300, 0), 5, Decimal::new(15, 2),
            ),
            order(
                "CA-5", (2013, 12, 1), ("Brazil", "LATAM", "BRA"), "Corporate", "Technology",
                Decimal::new(500, 0), Decimal::new(150, 0), 4, Decimal::ZERO,
            ),
        ])
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        app_state_from_dataset(test_dataset(), &test_config())
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG and defaults to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        create_router(setup_test_app_state())
    }
}
