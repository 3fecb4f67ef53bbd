// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, path::Path, sync::Arc};

use crate::application::dashboard_service::DashboardService;
use crate::application::species_service::SpeciesService;
use crate::infrastructure::areas::load_areas;
use crate::infrastructure::config::{load_dashboard_config, load_server_config};
use crate::infrastructure::csv_repository::CsvObservationRepository;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let dashboard_config = load_dashboard_config()?;

    // Load the dataset and count areas (infrastructure layer); a missing or
    // malformed source is fatal at startup
    let repository = Arc::new(CsvObservationRepository::load(Path::new(
        &dashboard_config.data.count_csv,
    ))?);
    if repository.dataset().is_empty() {
        tracing::warn!("count dataset is empty, the dashboard will render no series");
    }
    let areas = load_areas(Path::new(&dashboard_config.data.areas_geojson))?;

    // Create services (application layer)
    let species_service = SpeciesService::new(
        repository.clone(),
        dashboard_config.dashboard.default_species.clone(),
    );
    let dashboard_service =
        DashboardService::new(repository, areas, dashboard_config.map.to_display());

    // Create application state
    let state = Arc::new(AppState {
        species_service,
        dashboard_service,
        title: dashboard_config.dashboard.title.clone(),
    });

    // Build router (presentation layer)
    let router = presentation::router(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        server_config.server.host, server_config.server.port
    )
    .parse()?;
    println!("Starting birdcount-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
