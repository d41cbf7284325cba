//! Navigation API router using Axum

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use propnav_core::{
    render_header, HeaderView, LucideIcons, MenuState, NavConfig, RenderInputs, RouteContext,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// Create the navigation API router
pub fn create_router(config: Arc<NavConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/navigation", get(navigation_handler))
        .route("/api/header", get(header_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(config)
}

/// Per-render inputs for a stateless header projection
#[derive(Debug, Deserialize)]
pub struct HeaderQuery {
    #[serde(default = "default_path")]
    pub path: String,
    /// Defaults to the wide breakpoint
    pub width: Option<u32>,
    #[serde(default)]
    pub favorites: u32,
    #[serde(default)]
    pub open: bool,
}

fn default_path() -> String {
    "/".to_string()
}

async fn navigation_handler(State(config): State<Arc<NavConfig>>) -> Json<NavConfig> {
    Json(config.as_ref().clone())
}

async fn header_handler(
    State(config): State<Arc<NavConfig>>,
    Query(query): Query<HeaderQuery>,
) -> Json<HeaderView> {
    debug!(?query, "Rendering header projection");

    let menu = if query.open {
        MenuState::Open
    } else {
        MenuState::Closed
    };
    let inputs = RenderInputs {
        route: RouteContext::new(query.path),
        favorites_count: query.favorites,
        viewport_width: query.width.unwrap_or(config.breakpoints.wide),
    };

    Json(render_header(&config, &inputs, menu, &LucideIcons))
}

async fn health_handler(State(config): State<Arc<NavConfig>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "items": config.items.len(),
    }))
}
