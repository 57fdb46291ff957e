//! Common transport-layer types shared by the compute crate, the API and the CLI.
//! These structs are the JSON payloads of the dashboard endpoints, shaped so a
//! charting frontend can plot them without further processing.

mod dashboard;
pub mod format;
mod metrics;

pub use dashboard::{
    BreakdownSlice, CountryMap, CountryMapPoint, FilterOptions, KpiSummary, MarketProfit,
    MarketSummary, MonthlyPoint, PerformanceSeries, SalesBreakdown,
};
pub use metrics::{Dimension, Metric};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by every data endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
