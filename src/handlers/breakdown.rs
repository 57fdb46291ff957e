use axum::{extract::{Path, Query, State}, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{Dimension, SalesBreakdown};
use compute::DashboardComputer;
use tracing::{debug, instrument, trace};
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, YearQuery};

/// Get sales per segment or per category
///
/// Covers every year unless `year` is given.
#[utoipa::path(
    get,
    path = "/api/v1/breakdown/{dimension}",
    tag = "breakdown",
    params(
        ("dimension" = Dimension, Path, description = "Breakdown dimension: segment or category"),
        YearQuery,
    ),
    responses(
        (status = 200, description = "Sales breakdown computed successfully", body = ApiResponse<SalesBreakdown>),
        (status = 400, description = "Unknown dimension or invalid year", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn get_breakdown(
    Path(dimension): Path<Dimension>,
    Valid(Query(query)): Valid<Query<YearQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<SalesBreakdown>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_breakdown function");

    let cache_key = format!("breakdown_{}_{:?}", dimension, query.year);

    if let Some(CachedData::Breakdown(breakdown)) = state.cache.get(&cache_key).await {
        debug!("Breakdown by {} served from cache", dimension);
        let response = ApiResponse {
            data: breakdown,
            message: "Sales breakdown retrieved from cache".to_string(),
            success: true,
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let breakdown = DashboardComputer::new(&state.dataset).breakdown(dimension, query.year);
    debug!("{} slices by {}", breakdown.slices.len(), dimension);

    state.cache.insert(cache_key, CachedData::Breakdown(breakdown.clone())).await;

    let response = ApiResponse {
        data: breakdown,
        message: "Sales breakdown computed successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}
