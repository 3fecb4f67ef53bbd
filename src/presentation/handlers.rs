// HTTP request handlers
use crate::domain::chart::{GraphOverlays, LineShape};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Deserialize)]
pub struct GraphParams {
    pub shape: Option<LineShape>,
    pub overlays: Option<String>,
}

#[derive(Serialize)]
struct SpeciesResponse {
    species: Vec<String>,
    default: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page itself
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_HTML.replace("{{title}}", &state.title))
}

/// List selectable species plus the initial selection
pub async fn list_species(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.species_service.catalog().await {
        Ok(catalog) => {
            let payload = SpeciesResponse {
                species: catalog.species,
                default: catalog.default,
            };
            match json_response(&payload, compress).await {
                Ok(response) => response,
                Err(status) => status.into_response(),
            }
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Counts-over-months graph view for one species
pub async fn graph_view(
    Path(species): Path<String>,
    Query(params): Query<GraphParams>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);
    let shape = params.shape.unwrap_or_default();
    let overlays = params
        .overlays
        .as_deref()
        .map(GraphOverlays::parse)
        .unwrap_or_default();

    match state
        .dashboard_service
        .graph_view(&species, shape, overlays)
        .await
    {
        Ok(Some(view)) => match json_response(&view, compress).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Ok(None) => ApiError::NotFound(format!("unknown species '{species}'")).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Per-month stats table for one species
pub async fn stats_view(
    Path(species): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.stats_view(&species).await {
        Ok(Some(view)) => match json_response(&view, compress).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Ok(None) => ApiError::NotFound(format!("unknown species '{species}'")).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Per-area choropleth view for one species
pub async fn map_view(
    Path(species): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.dashboard_service.map_view(&species).await {
        Ok(Some(view)) => match json_response(&view, compress).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
        Ok(None) => ApiError::NotFound(format!("unknown species '{species}'")).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
