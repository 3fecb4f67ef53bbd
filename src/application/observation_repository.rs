// Repository trait for observation data access
use crate::domain::observation::Observation;
use async_trait::async_trait;

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Sorted, de-duplicated species names present in the dataset
    async fn list_species(&self) -> anyhow::Result<Vec<String>>;

    /// Whether any record exists for this species
    async fn species_exists(&self, species: &str) -> anyhow::Result<bool>;

    /// Whole-count (site ALL) observations for a species
    async fn aggregate_observations(&self, species: &str) -> anyhow::Result<Vec<Observation>>;

    /// Per-area observations for a species, excluding the ALL aggregate
    async fn site_observations(&self, species: &str) -> anyhow::Result<Vec<Observation>>;
}
