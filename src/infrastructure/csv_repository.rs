// CSV-backed observation repository
use crate::application::observation_repository::ObservationRepository;
use crate::domain::dataset::Dataset;
use crate::domain::observation::{Month, Observation};
use async_trait::async_trait;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read count data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse count data: {0}")]
    Csv(#[from] csv::Error),

    #[error("count data has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: unknown month '{value}'")]
    UnknownMonth { row: usize, value: String },

    #[error("row {row}: invalid {field} '{value}'")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Loads the whole count CSV into memory at startup and serves reads from
/// there. The source file is never written back.
#[derive(Debug)]
pub struct CsvObservationRepository {
    dataset: Dataset,
}

impl CsvObservationRepository {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::load_from_reader(file)
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut observations = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            // 1-based file row, counting the header line
            observations.push(columns.parse_row(&record, i + 2)?);
        }

        let dataset = Dataset::new(observations);
        tracing::info!(records = dataset.len(), "loaded count dataset");
        Ok(Self { dataset })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

/// Header-name to column-index mapping. Exports vary: the site column shows
/// up as "site", "id", or "area", and extra columns (row index, date) are
/// ignored.
struct ColumnMap {
    month: usize,
    year: usize,
    species: usize,
    site: usize,
    count: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DatasetError> {
        let find = |names: &[&str], label: &'static str| {
            headers
                .iter()
                .position(|h| names.contains(&h.to_lowercase().as_str()))
                .ok_or(DatasetError::MissingColumn(label))
        };

        Ok(Self {
            month: find(&["month"], "month")?,
            year: find(&["year"], "year")?,
            species: find(&["species"], "species")?,
            site: find(&["site", "id", "area"], "site")?,
            count: find(&["count"], "count")?,
        })
    }

    fn parse_row(&self, record: &csv::StringRecord, row: usize) -> Result<Observation, DatasetError> {
        let field = |idx: usize, name: &'static str| {
            record
                .get(idx)
                .filter(|v| !v.is_empty())
                .ok_or(DatasetError::MissingField { row, field: name })
        };

        let month_raw = field(self.month, "month")?;
        let month = Month::parse(month_raw).ok_or_else(|| DatasetError::UnknownMonth {
            row,
            value: month_raw.to_string(),
        })?;

        let year_raw = field(self.year, "year")?;
        let year: i32 = year_raw.parse().map_err(|_| DatasetError::InvalidNumber {
            row,
            field: "year",
            value: year_raw.to_string(),
        })?;

        // u32 rejects negative counts at parse time
        let count_raw = field(self.count, "count")?;
        let count: u32 = count_raw.parse().map_err(|_| DatasetError::InvalidNumber {
            row,
            field: "count",
            value: count_raw.to_string(),
        })?;

        Ok(Observation::new(
            month,
            year,
            field(self.species, "species")?.to_string(),
            field(self.site, "site")?.to_string(),
            count,
        ))
    }
}

#[async_trait]
impl ObservationRepository for CsvObservationRepository {
    async fn list_species(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.dataset.species())
    }

    async fn species_exists(&self, species: &str) -> anyhow::Result<bool> {
        Ok(self.dataset.contains_species(species))
    }

    async fn aggregate_observations(&self, species: &str) -> anyhow::Result<Vec<Observation>> {
        Ok(self.dataset.aggregates_for(species))
    }

    async fn site_observations(&self, species: &str) -> anyhow::Result<Vec<Observation>> {
        Ok(self.dataset.sites_for(species))
    }
}
