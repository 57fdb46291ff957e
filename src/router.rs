use crate::handlers::{
    breakdown::get_breakdown,
    filters::get_filter_options,
    geography::{get_country_map, get_market_profit},
    health::health_check,
    kpis::get_kpis,
    performance::get_performance,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dropdown values
        .route("/api/v1/filters", get(get_filter_options))
        // KPI panel and monthly line chart
        .route("/api/v1/kpis", get(get_kpis))
        .route("/api/v1/performance", get(get_performance))
        // Pie charts
        .route("/api/v1/breakdown/:dimension", get(get_breakdown))
        // Map and market bar chart
        .route("/api/v1/geography/countries", get(get_country_map))
        .route("/api/v1/geography/markets", get(get_market_profit))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
