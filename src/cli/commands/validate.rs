use anyhow::{bail, Result};
use tracing::{info, trace};

use crate::config::{load_dataset, AppConfig};

/// Loads the dataset and reports skipped rows and country inconsistencies.
pub async fn validate(config: AppConfig) -> Result<()> {
    trace!("Entering validate function");

    let loaded = load_dataset(&config).await?;
    let report = &loaded.report;

    println!("{}", config.data_path.display());
    println!("  rows loaded:  {}", report.rows_loaded);
    println!("  rows skipped: {}", report.rows_skipped);
    println!("  years:        {:?}", loaded.dataset.years());
    for inconsistency in &report.inconsistencies {
        println!("  {}", inconsistency);
    }

    if report.rows_skipped > 0 || !report.inconsistencies.is_empty() {
        bail!(
            "{} rows skipped, {} inconsistencies found",
            report.rows_skipped,
            report.inconsistencies.len()
        );
    }

    info!("Dataset is valid");
    Ok(())
}
