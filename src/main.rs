// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::site_service::SiteService;
use crate::infrastructure::config::load_site_config;
use crate::infrastructure::static_content::StaticSiteContent;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, home_page, list_navigation, list_station_cards, not_found, readiness_check,
    station_analytics_page, theme_stylesheet,
};
use crate::presentation::views::layout::STYLESHEET_PATH;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let site_config = load_site_config()?;
    let addr: SocketAddr = site_config.server.addr.parse()?;

    // Create content source (infrastructure layer)
    let content = Arc::new(StaticSiteContent::from_config(&site_config)?);

    // Create services (application layer)
    let site_service = SiteService::new(content);
    tracing::info!(
        links = site_service.navigation().len(),
        cards = site_config.station.cards.len(),
        tokens = site_service.theme().colors().len(),
        content_globs = ?site_service.theme().content(),
        "Site content loaded"
    );

    // Create application state
    let state = Arc::new(AppState { site_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(home_page))
        .route("/dashboards/station-analytics", get(station_analytics_page))
        .route(STYLESHEET_PATH, get(theme_stylesheet))
        .route("/api/navigation", get(list_navigation))
        .route("/api/dashboards/station-analytics/cards", get(list_station_cards))
        .route("/healthz", get(health_check))
        .route("/readyz", get(readiness_check))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!("Starting nexuscargo-web on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
