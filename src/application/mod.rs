// Application layer - Use cases over the repository seam
pub mod dashboard_service;
pub mod observation_repository;
pub mod species_service;
