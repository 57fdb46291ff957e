use common::{
    BreakdownSlice, CountryMap, CountryMapPoint, Dimension, FilterOptions, KpiSummary,
    MarketProfit, MarketSummary, Metric, MonthlyPoint, PerformanceSeries, SalesBreakdown,
};
use model::Dataset;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

use crate::helpers::query::empty_string_as_none;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded order table, read-only
    pub dataset: Arc<Dataset>,
    /// Cache for computed responses
    pub cache: Cache<String, CachedData>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("orders", &self.dataset.len())
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Kpis(KpiSummary),
    Performance(PerformanceSeries),
    Breakdown(SalesBreakdown),
    CountryMap(CountryMap),
    MarketProfit(MarketProfit),
}

/// Query parameters shared by the KPI and performance endpoints
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Order year (e.g., 2013); all years when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    /// Customer segment (e.g., Consumer); all segments when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100))]
    pub segment: Option<String>,
    /// Product category (e.g., Technology); all categories when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100))]
    pub category: Option<String>,
}

/// Query parameters for the performance endpoint
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PerformanceQuery {
    /// Order year (e.g., 2013); all years when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    /// Customer segment; all segments when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100))]
    pub segment: Option<String>,
    /// Product category; all categories when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = 100))]
    pub category: Option<String>,
    /// Plotted metric (default: sales)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub metric: Option<Metric>,
}

/// Query parameters for endpoints filtered by year only
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct YearQuery {
    /// Order year (e.g., 2013); all years when absent
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of order lines loaded
    pub orders: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::filters::get_filter_options,
        crate::handlers::kpis::get_kpis,
        crate::handlers::performance::get_performance,
        crate::handlers::breakdown::get_breakdown,
        crate::handlers::geography::get_country_map,
        crate::handlers::geography::get_market_profit,
    ),
    components(
        schemas(
            ApiResponse<FilterOptions>,
            ApiResponse<KpiSummary>,
            ApiResponse<PerformanceSeries>,
            ApiResponse<SalesBreakdown>,
            ApiResponse<CountryMap>,
            ApiResponse<MarketProfit>,
            ErrorResponse,
            HealthResponse,
            DashboardQuery,
            PerformanceQuery,
            YearQuery,
            FilterOptions,
            KpiSummary,
            Metric,
            Dimension,
            MonthlyPoint,
            PerformanceSeries,
            BreakdownSlice,
            SalesBreakdown,
            CountryMapPoint,
            CountryMap,
            MarketSummary,
            MarketProfit,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "filters", description = "Dashboard filter options"),
        (name = "performance", description = "KPI and monthly performance endpoints"),
        (name = "breakdown", description = "Sales per segment and category"),
        (name = "geography", description = "Country and market aggregates"),
    ),
    info(
        title = "Superstore Sales API",
        description = "Sales analytics over the Superstore orders dataset: KPIs, monthly performance, segment and category breakdowns, country and market aggregates",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
