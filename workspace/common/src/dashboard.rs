use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::metrics::{Dimension, Metric};

/// Values offered by the dashboard's dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FilterOptions {
    /// Distinct order years, ascending
    pub years: Vec<i32>,
    /// Customer segments in dataset order
    pub segments: Vec<String>,
    /// Product categories in dataset order
    pub categories: Vec<String>,
    /// Markets in dataset order
    pub markets: Vec<String>,
}

/// Totals shown on the KPI panel for the current filter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct KpiSummary {
    pub total_sales: i64,
    pub total_profit: i64,
    pub total_quantity: i64,
    pub total_discount: i64,
    /// e.g. `$2,297,201`
    pub sales_display: String,
    pub profit_display: String,
    /// e.g. `37,873`
    pub quantity_display: String,
    pub discount_display: String,
}

/// One point of the monthly performance line.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlyPoint {
    /// Calendar month (1-12)
    pub month: u32,
    /// Axis label of the month
    pub label: String,
    /// Sum of the metric over the month
    pub value: f64,
}

/// Monthly performance of one metric for the current filter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PerformanceSeries {
    pub metric: Metric,
    /// e.g. `Performance of Sales`
    pub title: String,
    /// Line colour of the metric
    pub color: String,
    pub points: Vec<MonthlyPoint>,
}

/// One slice of a sales breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BreakdownSlice {
    pub name: String,
    pub sales: f64,
    /// Fraction of the breakdown total (0-1)
    pub share: f64,
}

/// Sales per segment or per category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SalesBreakdown {
    pub dimension: Dimension,
    pub slices: Vec<BreakdownSlice>,
    /// Slice colours
    pub colors: Vec<String>,
}

/// One country marker of the sales map.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountryMapPoint {
    pub country: String,
    pub market: String,
    /// ISO alpha-3 code locating the marker
    pub iso_alpha: String,
    pub order_count: u64,
    pub total_sales: i64,
    pub market_order_count: Option<u64>,
    pub market_total_sales: Option<i64>,
    pub market_total_profit: Option<i64>,
}

/// Sales per country, with the totals of each country's market.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CountryMap {
    /// e.g. `Sales Per Country in 2013 Year`
    pub title: String,
    pub countries: Vec<CountryMapPoint>,
}

/// Order count and totals of one market.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarketSummary {
    pub market: String,
    pub order_count: u64,
    pub total_sales: i64,
    pub total_profit: i64,
}

/// Profit per market, most profitable first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MarketProfit {
    /// e.g. `Profit Per Market from 2011 to 2014`
    pub title: String,
    pub markets: Vec<MarketSummary>,
}
