// GeoJSON count-area loader
use anyhow::Context;
use std::path::Path;

/// Load the count-area FeatureCollection served verbatim inside the map
/// view payload. Area features are keyed to observation site ids via
/// `properties.id`.
pub fn load_areas(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read area file {}", path.display()))?;
    let geojson: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))?;

    anyhow::ensure!(
        geojson
            .get("features")
            .map_or(false, serde_json::Value::is_array),
        "{} is not a GeoJSON FeatureCollection",
        path.display()
    );

    Ok(geojson)
}
