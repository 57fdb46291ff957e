use axum::{extract::State, http::StatusCode, response::Json};
use common::FilterOptions;
use compute::DashboardComputer;
use tracing::{debug, instrument, trace};
use crate::schemas::{ApiResponse, AppState};

/// Get the values offered by the year, segment and category dropdowns
#[utoipa::path(
    get,
    path = "/api/v1/filters",
    tag = "filters",
    responses(
        (status = 200, description = "Filter options retrieved successfully", body = ApiResponse<FilterOptions>)
    )
)]
#[instrument(skip(state))]
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<FilterOptions>>) {
    trace!("Entering get_filter_options function");

    let options = DashboardComputer::new(&state.dataset).filter_options();
    debug!(
        "{} years, {} segments, {} categories available",
        options.years.len(),
        options.segments.len(),
        options.categories.len()
    );

    let response = ApiResponse {
        data: options,
        message: "Filter options retrieved successfully".to_string(),
        success: true,
    };
    (StatusCode::OK, Json(response))
}
