use crate::domain::chart::MapDisplay;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub data: DataSettings,
    pub dashboard: DashboardSettings,
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub count_csv: String,
    pub areas_geojson: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub title: String,
    pub default_species: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub style: String,
    #[serde(default)]
    pub access_token: String,
}

impl MapSettings {
    pub fn to_display(&self) -> MapDisplay {
        MapDisplay {
            center_lat: self.center_lat,
            center_lon: self.center_lon,
            zoom: self.zoom,
            style: self.style.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
