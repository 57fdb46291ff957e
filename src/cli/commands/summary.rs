use anyhow::{Context, Result};
use common::{Dimension, Metric};
use compute::frames::{breakdown_frame, country_map_frame, market_frame, performance_frame};
use compute::{DashboardComputer, OrderFilter};
use tracing::{info, trace, warn};

use crate::config::{load_dataset, AppConfig};

/// Prints the KPI panel and every chart table for one filter selection.
///
/// The pies and geography tables follow the year only, as on the dashboard.
pub async fn summary(config: AppConfig, filter: OrderFilter, metric: Metric) -> Result<()> {
    trace!("Entering summary function");

    let loaded = load_dataset(&config).await?;
    if loaded.report.rows_skipped > 0 {
        warn!("{} malformed rows were skipped", loaded.report.rows_skipped);
    }
    info!("{} orders loaded", loaded.report.rows_loaded);

    let dataset = loaded.dataset;
    let computer = DashboardComputer::new(&dataset);

    let kpis = computer.kpis(&filter).context("Failed to compute KPIs")?;
    println!(
        "Sales {}  Profit {}  Quantity {}  Discount {}",
        kpis.sales_display, kpis.profit_display, kpis.quantity_display, kpis.discount_display
    );

    let series = computer.performance(&filter, metric);
    println!("\n{}\n{}", series.title, performance_frame(&series)?);

    for dimension in [Dimension::Segment, Dimension::Category] {
        let breakdown = computer.breakdown(dimension, filter.year);
        println!("\nSales by {}\n{}", dimension.name(), breakdown_frame(&breakdown)?);
    }

    let map = computer
        .country_map(filter.year)
        .context("Failed to compute country map")?;
    println!("\n{}\n{}", map.title, country_map_frame(&map.countries)?);

    let profit = computer
        .market_profit(filter.year)
        .context("Failed to compute market profit")?;
    println!("\n{}\n{}", profit.title, market_frame(&profit.markets)?);

    Ok(())
}
