use crate::{
    core::constants::{MAX_ZOOM, MIN_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::{to_js, RenderContext},
    Result,
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<String>,
    /// Attribution text
    pub attribution: String,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
    /// Deepest zoom the server actually has tiles for; Leaflet upscales beyond it
    pub max_native_zoom: Option<u8>,
    pub opacity: f32,
    /// Render the world once instead of repeating it horizontally
    pub no_wrap: bool,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL.to_string(),
            subdomains: vec!["abc".to_string()],
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: MAX_ZOOM,
            min_zoom: MIN_ZOOM,
            max_native_zoom: None,
            opacity: 1.0,
            no_wrap: false,
        }
    }
}

/// Base map imagery fetched by Leaflet from a tile server
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// Base layer properties
    properties: LayerProperties,
    /// Tile layer specific options
    options: TileLayerOptions,
}

impl TileLayer {
    /// Create a new tile layer with default OpenStreetMap tiles
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, TileLayerOptions::default())
    }

    /// Create a new tile layer with custom options
    pub fn with_options(name: impl Into<String>, options: TileLayerOptions) -> Self {
        let mut properties = LayerProperties::new(String::new(), name.into(), LayerType::Tile);
        // Base tiles sit below every marker
        properties.z_index = -1;
        Self {
            properties,
            options,
        }
    }

    /// Create a tile layer for any XYZ tile server
    pub fn custom(
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        let options = TileLayerOptions {
            url_template: url_template.into(),
            attribution: attribution.into(),
            ..TileLayerOptions::default()
        };
        Self::with_options(name, options)
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap() -> Self {
        Self::new("openstreetmap")
    }

    /// Create a tile layer for the light CartoDB Positron style
    pub fn cartodb_positron() -> Self {
        let options = TileLayerOptions {
            url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>".to_string(),
            subdomains: vec!["abcd".to_string()],
            max_zoom: 20,
            ..TileLayerOptions::default()
        };
        Self::with_options("cartodbpositron", options)
    }

    /// Create a tile layer for the dark CartoDB Dark Matter style
    pub fn cartodb_dark_matter() -> Self {
        let options = TileLayerOptions {
            url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"
                .to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>".to_string(),
            subdomains: vec!["abcd".to_string()],
            max_zoom: 20,
            ..TileLayerOptions::default()
        };
        Self::with_options("cartodbdark_matter", options)
    }

    /// Create a tile layer for satellite imagery
    pub fn satellite() -> Self {
        let options = TileLayerOptions {
            url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}".to_string(),
            // ArcGIS doesn't use subdomains
            subdomains: vec![],
            attribution: "Tiles &copy; Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community".to_string(),
            ..TileLayerOptions::default()
        };
        Self::with_options("esri_worldimagery", options)
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn url_template(&self) -> &str {
        &self.options.url_template
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        let mut options = serde_json::json!({
            "attribution": self.options.attribution,
            "maxZoom": self.options.max_zoom,
            "minZoom": self.options.min_zoom,
            "noWrap": self.options.no_wrap,
            "opacity": self.options.opacity,
            "subdomains": self.options.subdomains.concat(),
        });
        if let Some(max_native_zoom) = self.options.max_native_zoom {
            options["maxNativeZoom"] = serde_json::json!(max_native_zoom);
        }
        options
    }

    fn render(&self, context: &mut RenderContext) -> Result<()> {
        let name = context.next_name("tile_layer");
        let map_var = context.map_var().to_string();
        context.push_line(format!(
            "var {} = L.tileLayer({}, {}).addTo({});",
            name,
            to_js(&self.options.url_template)?,
            to_js(&self.options())?,
            map_var
        ));
        Ok(())
    }
}
