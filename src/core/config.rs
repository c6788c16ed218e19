//! Configuration for map behavior and page layout
//!
//! `MapOptions` covers the knobs Leaflet exposes on map construction plus
//! the size of the map element. Options can be built in code or loaded
//! from JSON, where every field is optional and falls back to its default.

use crate::{
    core::constants::{MAX_ZOOM, MIN_ZOOM},
    Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Page title of the exported document
    pub title: String,
    /// CSS width of the map element
    pub width: String,
    /// CSS height of the map element
    pub height: String,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub zoom_control: bool,
    /// Show a metric/imperial scale bar
    pub control_scale: bool,
    pub prefer_canvas: bool,
    pub scroll_wheel_zoom: bool,
    pub dragging: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: "Map".to_string(),
            width: "100.0%".to_string(),
            height: "100.0%".to_string(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_control: true,
            control_scale: false,
            prefer_canvas: false,
            scroll_wheel_zoom: true,
            dragging: true,
        }
    }
}

impl MapOptions {
    /// Parses options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses options from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded map options from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_control_scale(mut self, control_scale: bool) -> Self {
        self.control_scale = control_scale;
        self
    }

    pub fn with_zoom_limits(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Leaflet's constructor options object
    pub fn to_leaflet_options(&self) -> serde_json::Value {
        serde_json::json!({
            "dragging": self.dragging,
            "maxZoom": self.max_zoom,
            "minZoom": self.min_zoom,
            "preferCanvas": self.prefer_canvas,
            "scrollWheelZoom": self.scroll_wheel_zoom,
            "zoomControl": self.zoom_control,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.min_zoom, 0);
        assert_eq!(options.max_zoom, 18);
        assert!(options.zoom_control);
        assert!(!options.control_scale);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options =
            MapOptions::from_json_str(r#"{ "height": "500px", "control_scale": true }"#).unwrap();

        assert_eq!(options.height, "500px");
        assert!(options.control_scale);
        assert_eq!(options.width, "100.0%");
        assert_eq!(options.max_zoom, 18);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = MapOptions::from_json_str("{ not json");
        assert!(matches!(result, Err(crate::MapError::Serialization(_))));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "title": "Madrid", "max_zoom": 16 }"#).unwrap();

        let options = MapOptions::from_json_file(&path).unwrap();
        assert_eq!(options.title, "Madrid");
        assert_eq!(options.max_zoom, 16);
        assert_eq!(options.min_zoom, 0);
    }

    #[test]
    fn test_from_missing_json_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MapOptions::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(crate::MapError::Io(_))));
    }

    #[test]
    fn test_leaflet_options_keys() {
        let value = MapOptions::default()
            .with_zoom_limits(2, 12)
            .to_leaflet_options();
        assert_eq!(value["minZoom"], 2);
        assert_eq!(value["maxZoom"], 12);
        assert_eq!(value["zoomControl"], true);
    }
}
