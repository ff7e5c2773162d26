// HTTP request handlers
use crate::domain::metric::{MetricCard, StationDashboard};
use crate::domain::navigation::NavLink;
use crate::infrastructure::http_response::{css_response, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::views::{
    home::render_home, layout::render_layout, not_found::render_not_found,
    station_analytics::render_station_analytics, stylesheet::render_stylesheet,
};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness endpoint; content is loaded before the listener binds
pub async fn readiness_check() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}

fn page(state: &AppState, status: StatusCode, content: String) -> axum::response::Response {
    let service = &state.site_service;
    let document = render_layout(service.metadata(), service.navigation(), &content);

    match html_response(status, document) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn home_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let panels = match state.site_service.home_panels().await {
        Ok(panels) => panels,
        Err(e) => {
            tracing::error!("Error loading home panels: {}", e);
            Vec::new()
        }
    };

    page(&state, StatusCode::OK, render_home(&panels))
}

pub async fn station_analytics_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.site_service.station_dashboard().await {
        Ok(StationDashboard { intro, cards }) => page(
            &state,
            StatusCode::OK,
            render_station_analytics(&intro, &cards),
        ),
        Err(e) => {
            tracing::error!("Error loading station dashboard: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Theme stylesheet built from the configured color tokens
pub async fn theme_stylesheet(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let css = render_stylesheet(state.site_service.theme());

    match css_response(css) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn list_navigation(State(state): State<Arc<AppState>>) -> Json<Vec<NavLink>> {
    Json(state.site_service.navigation().links().to_vec())
}

pub async fn list_station_cards(State(state): State<Arc<AppState>>) -> Json<Vec<MetricCard>> {
    match state.site_service.station_cards().await {
        Ok(cards) => Json(cards),
        Err(e) => {
            tracing::error!("Error fetching station cards: {}", e);
            // Return empty list on error
            Json(Vec::new())
        }
    }
}

/// Fallback for every path without a registered page, including navigation
/// entries whose dashboards are not served here.
pub async fn not_found(uri: Uri, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("No page registered for {}", uri.path());
    page(&state, StatusCode::NOT_FOUND, render_not_found(uri.path()))
}
