use anyhow::{Context, Result};
use model::{DEFAULT_DATE_FORMATS, Dataset, LoadOptions, LoadedDataset};
use moka::future::Cache;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "superstore";

/// Prefix of the environment variables overriding the config file.
pub const ENV_PREFIX: &str = "SUPERSTORE";

/// Application configuration.
///
/// Layered from lowest to highest priority: built-in defaults, the config
/// file, `SUPERSTORE_*` environment variables (`main` loads `.env` first),
/// then explicit command-line flags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Path of the orders CSV
    pub data_path: PathBuf,
    /// Bind address for the web server (IP:PORT)
    pub bind_address: String,
    /// `chrono` formats tried in order for the order date
    pub date_formats: Vec<String>,
    /// Skip malformed CSV rows instead of refusing to start
    pub skip_malformed_rows: bool,
    /// Maximum number of cached responses
    pub cache_max_capacity: u64,
    /// Lifetime of a cached response in seconds
    pub cache_ttl_secs: u64,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicit `config_file` must exist; the default `superstore.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let builder = config::Config::builder()
            .set_default("data_path", "data/data_complete_with_iso.csv")?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default(
                "date_formats",
                DEFAULT_DATE_FORMATS
                    .iter()
                    .map(|f| f.to_string())
                    .collect::<Vec<_>>(),
            )?
            .set_default("skip_malformed_rows", true)?
            .set_default("cache_max_capacity", 1000)?
            .set_default("cache_ttl_secs", 300)?;

        let builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("date_formats"),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, bind_address: Option<String>) -> Self {
        if let Some(data_path) = data_path {
            self.data_path = data_path;
        }
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        self
    }

    /// Dataset loading options derived from this configuration.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            date_formats: self.date_formats.clone(),
            skip_malformed_rows: self.skip_malformed_rows,
        }
    }
}

/// Load the dataset described by the configuration.
///
/// The CSV is read on the blocking thread pool.
pub async fn load_dataset(config: &AppConfig) -> Result<LoadedDataset> {
    let path = config.data_path.clone();
    let options = config.load_options();
    info!("Loading dataset from {}", path.display());

    let loaded = tokio::task::spawn_blocking(move || model::load_orders(&path, &options))
        .await
        .context("Dataset loading task failed")??;

    Ok(loaded)
}

/// Initialize application state: load the dataset and build the response cache.
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    let loaded = load_dataset(config).await?;
    info!(
        "Dataset ready: {} rows loaded, {} skipped, {} inconsistencies",
        loaded.report.rows_loaded,
        loaded.report.rows_skipped,
        loaded.report.inconsistencies.len()
    );
    Ok(app_state_from_dataset(loaded.dataset, config))
}

/// Build application state around an already loaded dataset.
pub fn app_state_from_dataset(dataset: Dataset, config: &AppConfig) -> AppState {
    let cache = Cache::builder()
        .max_capacity(config.cache_max_capacity)
        .time_to_live(Duration::from_secs(config.cache_ttl_secs))
        .build();

    AppState {
        dataset: Arc::new(dataset),
        cache,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "data_path = \"/srv/orders.csv\"").unwrap();
        writeln!(file, "cache_ttl_secs = 60").unwrap();
        writeln!(file, "date_formats = [\"%Y-%m-%d\"]").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.data_path, PathBuf::from("/srv/orders.csv"));
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.date_formats, vec!["%Y-%m-%d"]);
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert!(config.skip_malformed_rows);
        assert_eq!(config.cache_max_capacity, 1000);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).is_err());
    }

    #[test]
    #[serial]
    fn test_cli_overrides_win() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:8080\"").unwrap();

        let config = AppConfig::load(Some(file.path()))
            .unwrap()
            .with_overrides(Some(PathBuf::from("orders.csv")), None);

        assert_eq!(config.data_path, PathBuf::from("orders.csv"));
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.load_options().date_formats.len(), DEFAULT_DATE_FORMATS.len());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "cache_ttl_secs = 60").unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:8080\"").unwrap();

        // SAFETY: config tests are serialised and no other test reads SUPERSTORE_* variables
        unsafe {
            std::env::set_var("SUPERSTORE_CACHE_TTL_SECS", "15");
            std::env::set_var("SUPERSTORE_DATE_FORMATS", "%Y-%m-%d,%d/%m/%Y");
        }
        let loaded = AppConfig::load(Some(file.path()));
        unsafe {
            std::env::remove_var("SUPERSTORE_CACHE_TTL_SECS");
            std::env::remove_var("SUPERSTORE_DATE_FORMATS");
        }

        let config = loaded.unwrap().with_overrides(None, Some("0.0.0.0:9000".to_string()));
        assert_eq!(config.cache_ttl_secs, 15);
        assert_eq!(config.date_formats, vec!["%Y-%m-%d", "%d/%m/%Y"]);
        assert_eq!(config.bind_address, "0.0.0.0:9000");
    }
}
