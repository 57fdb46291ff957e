use axum::{Json, http::StatusCode};
use compute::OrderFilter;
use compute::error::ComputeError;
use tracing::error;

use crate::schemas::{DashboardQuery, ErrorResponse, PerformanceQuery};

/// Builds the order filter selected by a dashboard query.
pub fn dashboard_filter(query: &DashboardQuery) -> OrderFilter {
    OrderFilter::new(query.year, query.segment.clone(), query.category.clone())
}

/// Builds the order filter selected by a performance query.
pub fn performance_filter(query: &PerformanceQuery) -> OrderFilter {
    OrderFilter::new(query.year, query.segment.clone(), query.category.clone())
}

/// Maps a compute failure onto a 500 response.
pub fn compute_error_response(context: &str, err: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: context.to_string(),
            code: "COMPUTE_ERROR".to_string(),
            success: false,
        }),
    )
}
