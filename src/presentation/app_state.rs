// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::species_service::SpeciesService;

#[derive(Clone)]
pub struct AppState {
    pub species_service: SpeciesService,
    pub dashboard_service: DashboardService,
    pub title: String,
}
