// Dataset domain model
use super::observation::Observation;

/// All observation records available to the dashboard, loaded wholesale at
/// process start. Read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Sorted, de-duplicated species names.
    pub fn species(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .observations
            .iter()
            .map(|o| o.species.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn contains_species(&self, species: &str) -> bool {
        self.observations.iter().any(|o| o.species == species)
    }

    /// Whole-count records (site ALL) for one species, for the graph view.
    pub fn aggregates_for(&self, species: &str) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|o| o.species == species && o.is_aggregate())
            .cloned()
            .collect()
    }

    /// Per-area records (everything but site ALL) for one species, for the
    /// map view.
    pub fn sites_for(&self, species: &str) -> Vec<Observation> {
        self.observations
            .iter()
            .filter(|o| o.species == species && !o.is_aggregate())
            .cloned()
            .collect()
    }
}

/// Species names offered by the dashboard plus the initial selection.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    pub species: Vec<String>,
    pub default: String,
}
