use axum::{extract::{Query, State}, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{CountryMap, MarketProfit};
use compute::DashboardComputer;
use tracing::{debug, info, instrument, trace};
use crate::helpers::converters::compute_error_response;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, YearQuery};

/// Get order count and sales per country, joined with their market totals
#[utoipa::path(
    get,
    path = "/api/v1/geography/countries",
    tag = "geography",
    params(YearQuery),
    responses(
        (status = 200, description = "Country map computed successfully", body = ApiResponse<CountryMap>),
        (status = 400, description = "Invalid year", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_country_map(
    Valid(Query(query)): Valid<Query<YearQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<CountryMap>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_country_map function");

    let cache_key = format!("country_map_{:?}", query.year);

    if let Some(CachedData::CountryMap(map)) = state.cache.get(&cache_key).await {
        debug!("Country map served from cache");
        let response = ApiResponse {
            data: map,
            message: "Country map retrieved from cache".to_string(),
            success: true,
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let map = DashboardComputer::new(&state.dataset)
        .country_map(query.year)
        .map_err(|e| compute_error_response("Failed to compute country map", e))?;
    info!("{}: {} countries", map.title, map.countries.len());

    state.cache.insert(cache_key, CachedData::CountryMap(map.clone())).await;

    let response = ApiResponse {
        data: map,
        message: "Country map computed successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}

/// Get market totals ranked by profit, most profitable first
#[utoipa::path(
    get,
    path = "/api/v1/geography/markets",
    tag = "geography",
    params(YearQuery),
    responses(
        (status = 200, description = "Market profit computed successfully", body = ApiResponse<MarketProfit>),
        (status = 400, description = "Invalid year", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_market_profit(
    Valid(Query(query)): Valid<Query<YearQuery>>,
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<MarketProfit>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_market_profit function");

    let cache_key = format!("market_profit_{:?}", query.year);

    if let Some(CachedData::MarketProfit(profit)) = state.cache.get(&cache_key).await {
        debug!("Market profit served from cache");
        let response = ApiResponse {
            data: profit,
            message: "Market profit retrieved from cache".to_string(),
            success: true,
        };
        return Ok((StatusCode::OK, Json(response)));
    }

    let profit = DashboardComputer::new(&state.dataset)
        .market_profit(query.year)
        .map_err(|e| compute_error_response("Failed to compute market profit", e))?;
    info!("{}: {} markets", profit.title, profit.markets.len());

    state.cache.insert(cache_key, CachedData::MarketProfit(profit.clone())).await;

    let response = ApiResponse {
        data: profit,
        message: "Market profit computed successfully".to_string(),
        success: true,
    };
    Ok((StatusCode::OK, Json(response)))
}
