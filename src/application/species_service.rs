// Species service - Use case for listing selectable species
use crate::application::observation_repository::ObservationRepository;
use crate::domain::dataset::SpeciesCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct SpeciesService {
    repository: Arc<dyn ObservationRepository>,
    default_species: String,
}

impl SpeciesService {
    pub fn new(repository: Arc<dyn ObservationRepository>, default_species: String) -> Self {
        Self {
            repository,
            default_species,
        }
    }

    pub async fn catalog(&self) -> anyhow::Result<SpeciesCatalog> {
        let species = self.repository.list_species().await?;
        Ok(SpeciesCatalog {
            species,
            default: self.default_species.clone(),
        })
    }
}
