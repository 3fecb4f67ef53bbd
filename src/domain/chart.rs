// Chart view domain models
use super::observation::Month;
use serde::{Deserialize, Serialize};

/// One point on the categorical month axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: Month,
    pub value: f64,
}

impl MonthlyPoint {
    pub fn new(month: Month, value: f64) -> Self {
        Self { month, value }
    }
}

/// A single line on the graph view. Per-year series carry no color and get
/// one from the client palette; overlay series pin their own.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<MonthlyPoint>,
}

impl SeriesData {
    pub fn new(id: String, name: String, color: Option<String>, points: Vec<MonthlyPoint>) -> Self {
        Self {
            id,
            name,
            color,
            points,
        }
    }
}

/// Filled band between two month-aligned edges. The lower edge is clamped
/// at zero; counts cannot go negative.
#[derive(Debug, Clone, Serialize)]
pub struct BandSeries {
    pub id: String,
    pub name: String,
    pub fill_color: String,
    pub upper: Vec<MonthlyPoint>,
    pub lower: Vec<MonthlyPoint>,
}

/// Line interpolation hint passed through to the client renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineShape {
    #[default]
    Spline,
    Linear,
}

/// Which overlay series the graph view should include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOverlays {
    pub average: bool,
    pub std_band: bool,
}

impl GraphOverlays {
    /// Parse a comma-separated overlay list, e.g. "average,std-band".
    /// Unknown entries are ignored.
    pub fn parse(value: &str) -> Self {
        let mut overlays = GraphOverlays::default();
        for entry in value.split(',') {
            match entry.trim() {
                "average" => overlays.average = true,
                "std-band" => overlays.std_band = true,
                _ => {}
            }
        }
        overlays
    }
}

/// Counts-over-months chart for one species: one series per recorded year,
/// plus optional overlays.
#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub species: String,
    pub shape: LineShape,
    pub month_order: Vec<&'static str>,
    pub series: Vec<SeriesData>,
    pub average: Option<SeriesData>,
    pub std_band: Option<BandSeries>,
}

/// Per-area counts for one species in one count date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteCount {
    pub site: String,
    pub count: u32,
}

/// One animation frame of the map view.
#[derive(Debug, Clone, Serialize)]
pub struct MapFrame {
    pub date: String,
    pub counts: Vec<SiteCount>,
}

/// Base-map rendering parameters, sourced from configuration.
#[derive(Debug, Clone, Serialize)]
pub struct MapDisplay {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub style: String,
    pub access_token: String,
}

/// Choropleth map of per-area counts for one species, one frame per count
/// date, colored over [0, max_count].
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub species: String,
    pub areas: serde_json::Value,
    pub frames: Vec<MapFrame>,
    pub max_count: u32,
    pub display: MapDisplay,
}
