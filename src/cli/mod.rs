use anyhow::Result;
use clap::{Parser, Subcommand};
use common::Metric;
use std::path::PathBuf;

pub mod commands;

use crate::config::AppConfig;
use commands::{serve, summary, validate};

#[derive(Parser)]
#[command(name = "superstore")]
#[command(about = "Superstore sales analytics: dashboard API and CLI reports")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    ///
    /// Defaults to `superstore.toml` in the working directory when present.
    #[arg(short, long, global = true, env = "SUPERSTORE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the orders CSV and start the dashboard API server
    Serve {
        /// Path of the orders CSV
        #[arg(short, long)]
        data_path: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Print the dashboard aggregates for one filter selection
    Summary {
        /// Path of the orders CSV
        #[arg(short, long)]
        data_path: Option<PathBuf>,

        /// Order year; all years when omitted
        #[arg(short, long)]
        year: Option<i32>,

        /// Customer segment (e.g., Consumer)
        #[arg(long)]
        segment: Option<String>,

        /// Product category (e.g., Technology)
        #[arg(long)]
        category: Option<String>,

        /// Metric of the monthly performance table
        #[arg(short, long, default_value = "sales")]
        metric: Metric,
    },
    /// Check the orders CSV for malformed rows and inconsistent countries
    ///
    /// Exits with an error when any row was skipped or any country maps to
    /// more than one market or ISO code.
    Validate {
        /// Path of the orders CSV
        #[arg(short, long)]
        data_path: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Serve { data_path, bind_address } => {
                serve(config.with_overrides(data_path, bind_address)).await?;
            }
            Commands::Summary { data_path, year, segment, category, metric } => {
                let filter = compute::OrderFilter::new(year, segment, category);
                summary(config.with_overrides(data_path, None), filter, metric).await?;
            }
            Commands::Validate { data_path } => {
                validate(config.with_overrides(data_path, None)).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_summary_arguments() {
        let cli = Cli::try_parse_from([
            "superstore", "summary", "-y", "2013", "--segment", "Consumer", "-m", "profit",
        ])
        .unwrap();

        match cli.command {
            Commands::Summary { year, segment, category, metric, data_path } => {
                assert_eq!(year, Some(2013));
                assert_eq!(segment.as_deref(), Some("Consumer"));
                assert_eq!(category, None);
                assert_eq!(metric, Metric::Profit);
                assert_eq!(data_path, None);
            }
            _ => panic!("expected the summary command"),
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["superstore", "validate", "--config", "prod.toml"]).unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("prod.toml")));
        assert!(matches!(cli.command, Commands::Validate { data_path: None }));
    }

    #[test]
    #[serial_test::serial]
    fn test_config_path_from_dotenv_file() {
        use std::io::Write;

        let mut env_file = tempfile::NamedTempFile::new().unwrap();
        writeln!(env_file, "SUPERSTORE_CONFIG=from-dotenv.toml").unwrap();

        // main loads .env the same way before parsing
        dotenvy::from_path(env_file.path()).unwrap();
        let parsed = Cli::try_parse_from(["superstore", "validate"]);
        // SAFETY: tests touching SUPERSTORE_* variables are serialised
        unsafe { std::env::remove_var("SUPERSTORE_CONFIG") };

        assert_eq!(parsed.unwrap().config, Some(PathBuf::from("from-dotenv.toml")));
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        assert!(Cli::try_parse_from(["superstore", "summary", "-m", "margin"]).is_err());
    }
}
