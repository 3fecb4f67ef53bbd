// Presentation layer - HTTP surface
pub mod api_error;
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/healthz", get(handlers::health_check))
        .route("/species", get(handlers::list_species))
        .route("/views/graph/:species", get(handlers::graph_view))
        .route("/views/map/:species", get(handlers::map_view))
        .route("/views/stats/:species", get(handlers::stats_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
