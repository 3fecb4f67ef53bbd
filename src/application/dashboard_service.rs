// Dashboard service - Use cases for building the chart views
use crate::application::observation_repository::ObservationRepository;
use crate::domain::chart::{
    BandSeries, GraphOverlays, GraphView, LineShape, MapDisplay, MapFrame, MapView, MonthlyPoint,
    SeriesData, SiteCount,
};
use crate::domain::observation::{Month, Observation};
use crate::domain::stats::{monthly_stats, MonthlyStats, StatsView};
use std::collections::BTreeMap;
use std::sync::Arc;

const AVERAGE_COLOR: &str = "white";
const BAND_FILL: &str = "rgba(255,255,255,0.3)";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn ObservationRepository>,
    areas: serde_json::Value,
    display: MapDisplay,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn ObservationRepository>,
        areas: serde_json::Value,
        display: MapDisplay,
    ) -> Self {
        Self {
            repository,
            areas,
            display,
        }
    }

    /// Counts-over-months graph for one species: one series per recorded
    /// year, with optional average and standard-deviation overlays. Returns
    /// `None` for a species the dataset has never seen.
    pub async fn graph_view(
        &self,
        species: &str,
        shape: LineShape,
        overlays: GraphOverlays,
    ) -> anyhow::Result<Option<GraphView>> {
        if !self.repository.species_exists(species).await? {
            return Ok(None);
        }

        let observations = self.repository.aggregate_observations(species).await?;
        let stats = monthly_stats(&observations);

        let average = overlays.average.then(|| Self::average_series(&stats));
        let std_band = overlays.std_band.then(|| Self::std_band(&stats));

        Ok(Some(GraphView {
            species: species.to_string(),
            shape,
            month_order: Month::ALL.iter().map(|m| m.abbr()).collect(),
            series: Self::yearly_series(&observations),
            average,
            std_band,
        }))
    }

    /// Per-area choropleth for one species, one frame per count date.
    pub async fn map_view(&self, species: &str) -> anyhow::Result<Option<MapView>> {
        if !self.repository.species_exists(species).await? {
            return Ok(None);
        }

        let observations = self.repository.site_observations(species).await?;
        let max_count = observations.iter().map(|o| o.count).max().unwrap_or(0);

        Ok(Some(MapView {
            species: species.to_string(),
            areas: self.areas.clone(),
            frames: Self::date_frames(&observations),
            max_count,
            display: self.display.clone(),
        }))
    }

    /// Per-month stats table (mean/median/std/min/max) over the species'
    /// whole-count totals.
    pub async fn stats_view(&self, species: &str) -> anyhow::Result<Option<StatsView>> {
        if !self.repository.species_exists(species).await? {
            return Ok(None);
        }

        let observations = self.repository.aggregate_observations(species).await?;
        Ok(Some(StatsView {
            species: species.to_string(),
            rows: monthly_stats(&observations),
        }))
    }

    /// One series per year, points in calendar-month order.
    fn yearly_series(observations: &[Observation]) -> Vec<SeriesData> {
        let mut by_year: BTreeMap<i32, Vec<MonthlyPoint>> = BTreeMap::new();
        for obs in observations {
            by_year
                .entry(obs.year)
                .or_default()
                .push(MonthlyPoint::new(obs.month, obs.count as f64));
        }

        by_year
            .into_iter()
            .map(|(year, mut points)| {
                points.sort_by_key(|p| p.month);
                SeriesData::new(format!("year-{year}"), year.to_string(), None, points)
            })
            .collect()
    }

    fn average_series(stats: &[MonthlyStats]) -> SeriesData {
        let points = stats
            .iter()
            .map(|s| MonthlyPoint::new(s.month, s.mean))
            .collect();
        SeriesData::new(
            "average".to_string(),
            "Average".to_string(),
            Some(AVERAGE_COLOR.to_string()),
            points,
        )
    }

    /// Band between mean + std and mean - std. Counts cannot go negative,
    /// so the lower edge is clamped at zero.
    fn std_band(stats: &[MonthlyStats]) -> BandSeries {
        let upper = stats
            .iter()
            .map(|s| MonthlyPoint::new(s.month, s.mean + s.std))
            .collect();
        let lower = stats
            .iter()
            .map(|s| MonthlyPoint::new(s.month, (s.mean - s.std).max(0.0)))
            .collect();
        BandSeries {
            id: "std-band".to_string(),
            name: "Standard Deviation".to_string(),
            fill_color: BAND_FILL.to_string(),
            upper,
            lower,
        }
    }

    /// Group per-area observations into date-ordered frames, sites sorted
    /// within each frame for stable payloads.
    fn date_frames(observations: &[Observation]) -> Vec<MapFrame> {
        let mut by_date: BTreeMap<(i32, Month), Vec<SiteCount>> = BTreeMap::new();
        for obs in observations {
            by_date
                .entry((obs.year, obs.month))
                .or_default()
                .push(SiteCount {
                    site: obs.site.clone(),
                    count: obs.count,
                });
        }

        by_date
            .into_iter()
            .map(|((year, month), mut counts)| {
                counts.sort_by(|a, b| a.site.cmp(&b.site));
                MapFrame {
                    date: format!("{}-{}", year, month.abbr()),
                    counts,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Dataset;
    use async_trait::async_trait;
    use serde_json::json;

    struct InMemoryRepository {
        dataset: Dataset,
    }

    #[async_trait]
    impl ObservationRepository for InMemoryRepository {
        async fn list_species(&self) -> anyhow::Result<Vec<String>> {
            Ok(self.dataset.species())
        }

        async fn species_exists(&self, species: &str) -> anyhow::Result<bool> {
            Ok(self.dataset.contains_species(species))
        }

        async fn aggregate_observations(
            &self,
            species: &str,
        ) -> anyhow::Result<Vec<Observation>> {
            Ok(self.dataset.aggregates_for(species))
        }

        async fn site_observations(&self, species: &str) -> anyhow::Result<Vec<Observation>> {
            Ok(self.dataset.sites_for(species))
        }
    }

    fn obs(species: &str, site: &str, month: Month, year: i32, count: u32) -> Observation {
        Observation::new(month, year, species.to_string(), site.to_string(), count)
    }

    fn service(observations: Vec<Observation>) -> DashboardService {
        let repository = Arc::new(InMemoryRepository {
            dataset: Dataset::new(observations),
        });
        let display = MapDisplay {
            center_lat: 49.7,
            center_lon: -123.15,
            zoom: 12.5,
            style: "satellite-streets".to_string(),
            access_token: String::new(),
        };
        DashboardService::new(
            repository,
            json!({"type": "FeatureCollection", "features": []}),
            display,
        )
    }

    #[tokio::test]
    async fn test_unknown_species_is_none() {
        let svc = service(vec![obs("Bald Eagle", "ALL", Month::Jan, 2021, 40)]);
        let view = svc
            .graph_view("Harpy Eagle", LineShape::Spline, GraphOverlays::default())
            .await
            .unwrap();
        assert!(view.is_none());
        assert!(svc.map_view("Harpy Eagle").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_single_record_yields_single_point() {
        let svc = service(vec![obs("Bald Eagle", "ALL", Month::Jan, 2021, 40)]);
        let view = svc
            .graph_view("Bald Eagle", LineShape::Spline, GraphOverlays::default())
            .await
            .unwrap()
            .expect("species exists");

        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].name, "2021");
        assert_eq!(view.series[0].points.len(), 1);
        assert_eq!(view.series[0].points[0].month, Month::Jan);
        assert_eq!(view.series[0].points[0].value, 40.0);
        assert!(view.average.is_none());
        assert!(view.std_band.is_none());
    }

    #[tokio::test]
    async fn test_series_split_by_year_and_month_ordered() {
        let svc = service(vec![
            obs("Bald Eagle", "ALL", Month::Dec, 2020, 55),
            obs("Bald Eagle", "ALL", Month::Jan, 2020, 30),
            obs("Bald Eagle", "ALL", Month::Jan, 2021, 42),
        ]);
        let view = svc
            .graph_view("Bald Eagle", LineShape::Linear, GraphOverlays::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(view.shape, LineShape::Linear);
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.series[0].name, "2020");
        let months: Vec<Month> = view.series[0].points.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![Month::Jan, Month::Dec]);
        assert_eq!(view.series[1].name, "2021");
    }

    #[tokio::test]
    async fn test_average_overlay() {
        let svc = service(vec![
            obs("Bald Eagle", "ALL", Month::Jan, 2020, 30),
            obs("Bald Eagle", "ALL", Month::Jan, 2021, 50),
        ]);
        let view = svc
            .graph_view(
                "Bald Eagle",
                LineShape::Spline,
                GraphOverlays {
                    average: true,
                    std_band: false,
                },
            )
            .await
            .unwrap()
            .unwrap();

        let average = view.average.expect("requested overlay");
        assert_eq!(average.points.len(), 1);
        assert_eq!(average.points[0].value, 40.0);
        assert_eq!(average.color.as_deref(), Some("white"));
        assert!(view.std_band.is_none());
    }

    #[tokio::test]
    async fn test_std_band_lower_edge_clamped_at_zero() {
        // mean 5, sample std ~5.66: mean - std is negative
        let svc = service(vec![
            obs("Varied Thrush", "ALL", Month::Feb, 2020, 1),
            obs("Varied Thrush", "ALL", Month::Feb, 2021, 9),
        ]);
        let view = svc
            .graph_view(
                "Varied Thrush",
                LineShape::Spline,
                GraphOverlays {
                    average: false,
                    std_band: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        let band = view.std_band.expect("requested overlay");
        assert_eq!(band.lower[0].value, 0.0);
        assert!(band.upper[0].value > 5.0);
    }

    #[tokio::test]
    async fn test_species_without_aggregates_renders_empty_series() {
        let svc = service(vec![obs("American Dipper", "estuary", Month::Jan, 2021, 4)]);
        let view = svc
            .graph_view(
                "American Dipper",
                LineShape::Spline,
                GraphOverlays {
                    average: true,
                    std_band: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(view.series.is_empty());
        assert!(view.average.unwrap().points.is_empty());
        assert!(view.std_band.unwrap().upper.is_empty());
    }

    #[tokio::test]
    async fn test_stats_view_rows() {
        let svc = service(vec![
            obs("Bald Eagle", "ALL", Month::Jan, 2020, 30),
            obs("Bald Eagle", "ALL", Month::Jan, 2021, 50),
            obs("Bald Eagle", "ALL", Month::Feb, 2021, 12),
        ]);
        let stats = svc.stats_view("Bald Eagle").await.unwrap().unwrap();

        assert_eq!(stats.species, "Bald Eagle");
        assert_eq!(stats.rows.len(), 2);
        assert_eq!(stats.rows[0].month, Month::Jan);
        assert_eq!(stats.rows[0].mean, 40.0);
        assert_eq!(stats.rows[0].median, 40.0);
        assert_eq!(stats.rows[0].min, 30);
        assert_eq!(stats.rows[0].max, 50);
        assert!(svc.stats_view("Harpy Eagle").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_map_frames_grouped_and_ordered() {
        let svc = service(vec![
            obs("Bald Eagle", "river-north", Month::Feb, 2021, 12),
            obs("Bald Eagle", "estuary", Month::Feb, 2021, 20),
            obs("Bald Eagle", "estuary", Month::Jan, 2021, 25),
            obs("Bald Eagle", "ALL", Month::Jan, 2021, 40),
        ]);
        let view = svc.map_view("Bald Eagle").await.unwrap().unwrap();

        assert_eq!(view.max_count, 25);
        assert_eq!(view.frames.len(), 2);
        assert_eq!(view.frames[0].date, "2021-Jan");
        // the ALL aggregate never shows up on the map
        assert_eq!(
            view.frames[0].counts,
            vec![SiteCount {
                site: "estuary".to_string(),
                count: 25
            }]
        );
        assert_eq!(view.frames[1].date, "2021-Feb");
        assert_eq!(view.frames[1].counts[0].site, "estuary");
        assert_eq!(view.frames[1].counts[1].site, "river-north");
    }
}
