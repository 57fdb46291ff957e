use axum::{extract::{Query, State}, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::KpiSummary;
use compute::DashboardComputer;
use tracing::{debug, info, instrument, trace};
use crate::helpers::converters::{compute_error_response, dashboard_filter};
use crate::schemas::{ApiResponse, AppState, CachedData, DashboardQuery, ErrorResponse};

/// Get the KPI panel totals for the selected year, segment and category
#[utoipa::path(
    get,
    path = "/api/v1/kpis",
    tag = "performance",
    params(DashboardQuery),
    responses(
        (status = 200, description = "KPIs computed successfully", body = ApiResponse<KpiSummary>),
        (status = 400, description = "Invalid query parameters", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_kpis(
    Valid(Query(query)): Valid<Query<DashboardQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<KpiSummary>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_kpis function");

    let filter = dashboard_filter(&query);
    let cache_key = format!("kpis_{:?}", filter);

    if let Some(CachedData::Kpis(kpis)) = state.cache.get(&cache_key).await {
        debug!("KPIs served from cache");
        let response = ApiResponse {
            data: kpis,
            message: "KPIs retrieved from cache".to_string(),
            success: true,
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let kpis = DashboardComputer::new(&state.dataset)
        .kpis(&filter)
        .map_err(|e| compute_error_response("Failed to compute KPIs", e))?;
    info!("KPIs computed: sales {}, profit {}", kpis.sales_display, kpis.profit_display);

    state.cache.insert(cache_key, CachedData::Kpis(kpis.clone())).await;

    let response = ApiResponse {
        data: kpis,
        message: "KPIs computed successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}
