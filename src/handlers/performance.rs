use axum::{extract::{Query, State}, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::PerformanceSeries;
use compute::DashboardComputer;
use tracing::{debug, instrument, trace};
use crate::helpers::converters::performance_filter;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, PerformanceQuery};

/// Get the monthly performance line of one metric
///
/// Months without matching orders are left out of the series.
#[utoipa::path(
    get,
    path = "/api/v1/performance",
    tag = "performance",
    params(PerformanceQuery),
    responses(
        (status = 200, description = "Performance series computed successfully", body = ApiResponse<PerformanceSeries>),
        (status = 400, description = "Invalid query parameters", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn get_performance(
    Valid(Query(query)): Valid<Query<PerformanceQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<PerformanceSeries>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_performance function");

    let filter = performance_filter(&query);
    let metric = query.metric.unwrap_or_default();
    let cache_key = format!("performance_{}_{:?}", metric, filter);

    if let Some(CachedData::Performance(series)) = state.cache.get(&cache_key).await {
        debug!("Performance series served from cache");
        let response = ApiResponse {
            data: series,
            message: "Performance series retrieved from cache".to_string(),
            success: true,
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let series = DashboardComputer::new(&state.dataset).performance(&filter, metric);
    debug!("{} monthly points for {}", series.points.len(), metric);

    state.cache.insert(cache_key, CachedData::Performance(series.clone())).await;

    let response = ApiResponse {
        data: series,
        message: "Performance series computed successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}
