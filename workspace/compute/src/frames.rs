//! Tabular views of the dashboard aggregates.
//!
//! Each aggregate converts to a polars `DataFrame` with fixed column names so
//! it can be printed or post-processed like any other frame.

use common::{CountryMapPoint, MarketSummary, PerformanceSeries, SalesBreakdown};
use polars::prelude::*;

use crate::error::Result;

/// Columns: month, label, and the metric name (`sales`, `profit`, ...)
pub fn performance_frame(series: &PerformanceSeries) -> Result<DataFrame> {
    let months: Vec<u32> = series.points.iter().map(|p| p.month).collect();
    let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();

    let df = DataFrame::new(vec![
        Series::new("month".into(), months).into(),
        Series::new("label".into(), labels).into(),
        Series::new(series.metric.name().to_lowercase().into(), values).into(),
    ])?;

    Ok(df)
}

/// Columns: the dimension name (`segment` or `category`), sales, share
pub fn breakdown_frame(breakdown: &SalesBreakdown) -> Result<DataFrame> {
    let names: Vec<&str> = breakdown.slices.iter().map(|s| s.name.as_str()).collect();
    let sales: Vec<f64> = breakdown.slices.iter().map(|s| s.sales).collect();
    let shares: Vec<f64> = breakdown.slices.iter().map(|s| s.share).collect();

    let df = DataFrame::new(vec![
        Series::new(breakdown.dimension.name().to_lowercase().into(), names).into(),
        Series::new("sales".into(), sales).into(),
        Series::new("share".into(), shares).into(),
    ])?;

    Ok(df)
}

/// Columns: country, market, iso_alpha, order_count, total_sales,
/// market_order_count, market_total_sales, market_total_profit
pub fn country_map_frame(points: &[CountryMapPoint]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Series::new(
            "country".into(),
            points.iter().map(|p| p.country.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "market".into(),
            points.iter().map(|p| p.market.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "iso_alpha".into(),
            points.iter().map(|p| p.iso_alpha.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "order_count".into(),
            points.iter().map(|p| p.order_count).collect::<Vec<u64>>(),
        )
        .into(),
        Series::new(
            "total_sales".into(),
            points.iter().map(|p| p.total_sales).collect::<Vec<i64>>(),
        )
        .into(),
        Series::new(
            "market_order_count".into(),
            points.iter().map(|p| p.market_order_count).collect::<Vec<Option<u64>>>(),
        )
        .into(),
        Series::new(
            "market_total_sales".into(),
            points.iter().map(|p| p.market_total_sales).collect::<Vec<Option<i64>>>(),
        )
        .into(),
        Series::new(
            "market_total_profit".into(),
            points.iter().map(|p| p.market_total_profit).collect::<Vec<Option<i64>>>(),
        )
        .into(),
    ])?;

    Ok(df)
}

/// Columns: market, order_count, total_sales, total_profit
pub fn market_frame(markets: &[MarketSummary]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Series::new(
            "market".into(),
            markets.iter().map(|m| m.market.as_str()).collect::<Vec<_>>(),
        )
        .into(),
        Series::new(
            "order_count".into(),
            markets.iter().map(|m| m.order_count).collect::<Vec<u64>>(),
        )
        .into(),
        Series::new(
            "total_sales".into(),
            markets.iter().map(|m| m.total_sales).collect::<Vec<i64>>(),
        )
        .into(),
        Series::new(
            "total_profit".into(),
            markets.iter().map(|m| m.total_profit).collect::<Vec<i64>>(),
        )
        .into(),
    ])?;

    Ok(df)
}
