use crate::{
    core::{
        config::MapOptions,
        geo::{LatLng, LatLngBounds},
    },
    layers::{base::LayerTrait, manager::LayerManager, marker::Marker, tile::TileLayer},
    rendering::{
        context::{to_js, RenderContext},
        document::HtmlDocument,
    },
    Result,
};
use std::path::Path;

/// A web map view: a center, a zoom level, base tiles and attached layers
///
/// `Map` only records state. [`Map::to_html`] turns it into a Leaflet page
/// and [`Map::save`] writes that page to disk.
pub struct Map {
    center: LatLng,
    zoom: u8,
    options: MapOptions,
    tile_layer: Option<TileLayer>,
    layers: LayerManager,
    fit_bounds: Option<LatLngBounds>,
}

impl Map {
    /// Creates a map over OpenStreetMap tiles
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self::with_options(center, zoom, MapOptions::default())
    }

    pub fn with_options(center: LatLng, zoom: u8, options: MapOptions) -> Self {
        if !center.is_valid() {
            log::warn!("Map center ({}) is outside the valid range", center);
        }

        Self {
            center,
            zoom,
            options,
            tile_layer: Some(TileLayer::openstreetmap()),
            layers: LayerManager::new(),
            fit_bounds: None,
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Moves the initial view
    pub fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut MapOptions {
        &mut self.options
    }

    pub fn tile_layer(&self) -> Option<&TileLayer> {
        self.tile_layer.as_ref()
    }

    /// Replaces the base tiles; `None` renders a blank map
    pub fn set_tile_layer(&mut self, tile_layer: Option<TileLayer>) {
        self.tile_layer = tile_layer;
    }

    /// Attaches a layer and returns its id
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<String> {
        self.layers.add_layer(layer)
    }

    /// Attaches a marker and returns its id
    pub fn add_marker(&mut self, marker: Marker) -> Result<String> {
        self.add_layer(Box::new(marker))
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.layers.remove_layer(layer_id)
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerManager {
        &mut self.layers
    }

    /// Attached markers, in render order
    pub fn markers(&self) -> Vec<&Marker> {
        self.layers.layers_of::<Marker>()
    }

    /// Makes the page open zoomed to `bounds` instead of the center/zoom pair
    pub fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.fit_bounds = Some(bounds);
    }

    /// Fits the view to every attached layer with an extent; no-op without one
    pub fn fit_layers(&mut self) {
        let bounds = LatLngBounds::from_points(
            self.layers
                .layers()
                .into_iter()
                .filter_map(|layer| layer.bounds())
                .flat_map(|bounds| [bounds.south_west, bounds.north_east]),
        );
        if let Some(bounds) = bounds {
            self.fit_bounds = Some(bounds);
        }
    }

    pub fn bounds(&self) -> Option<&LatLngBounds> {
        self.fit_bounds.as_ref()
    }

    /// Emits the script that builds this map and returns the map variable
    pub fn render(&self, context: &mut RenderContext) -> Result<String> {
        let map_var = context.next_name("map");
        context.set_map_var(map_var.clone());

        let mut options = self.options.to_leaflet_options();
        options["center"] = serde_json::json!(self.center.to_array());
        options["zoom"] = serde_json::json!(self.zoom);
        context.push_line(format!(
            "var {} = L.map({}, {});",
            map_var,
            to_js(&map_var)?,
            to_js(&options)?
        ));
        if self.options.control_scale {
            context.push_line(format!("L.control.scale().addTo({});", map_var));
        }
        context.push_blank();

        if let Some(tile_layer) = self.tile_layer.as_ref().filter(|t| t.is_visible()) {
            tile_layer.render(context)?;
        }
        self.layers.render(context)?;

        if let Some(bounds) = &self.fit_bounds {
            context.push_blank();
            context.push_line(format!(
                "{}.fitBounds({}, {{}});",
                map_var,
                to_js(&bounds.to_array())?
            ));
        }

        log::debug!(
            "Rendered map at ({}) zoom {} with {} layers",
            self.center,
            self.zoom,
            self.layers.len()
        );
        Ok(map_var)
    }

    /// Renders the map as a self-contained HTML page
    pub fn to_html(&self) -> Result<String> {
        HtmlDocument::new()?.render(self)
    }

    /// Writes the page to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::export::save(self, path)
    }
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("options", &self.options)
            .field("tile_layer", &self.tile_layer)
            .field("layers", &self.layers.len())
            .field("fit_bounds", &self.fit_bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::icon::Icon;

    #[test]
    fn test_map_records_view() {
        let map = Map::new(LatLng::new(40.4168, -3.7038), 15);
        assert_eq!(map.center(), LatLng::new(40.4168, -3.7038));
        assert_eq!(map.zoom(), 15);
        assert!(map.tile_layer().is_some());
        assert!(map.markers().is_empty());
    }

    #[test]
    fn test_set_view() {
        let mut map = Map::new(LatLng::new(40.4168, -3.7038), 15);
        map.set_view(LatLng::new(51.5074, -0.1278), 10);
        assert_eq!(map.center(), LatLng::new(51.5074, -0.1278));
        assert_eq!(map.zoom(), 10);

        let mut context = RenderContext::new();
        map.render(&mut context).unwrap();
        assert!(context.script().contains("\"center\":[51.5074,-0.1278]"));
        assert!(context.script().contains("\"zoom\":10"));
    }

    #[test]
    fn test_markers_are_attached() {
        let mut map = Map::new(LatLng::new(0.0, 0.0), 3);
        map.add_marker(Marker::new(LatLng::new(1.0, 2.0)).with_popup_text("A"))
            .unwrap();
        map.add_marker(Marker::new(LatLng::new(3.0, 4.0)).with_popup_text("B"))
            .unwrap();

        let labels: Vec<_> = map
            .markers()
            .into_iter()
            .filter_map(|m| m.popup_text())
            .collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_render_script() {
        let mut map = Map::new(LatLng::new(40.4168, -3.7038), 15);
        map.add_marker(
            Marker::new(LatLng::new(40.4168, -3.7038))
                .with_popup_text("Madrid")
                .with_icon(Icon::new("blue")),
        )
        .unwrap();

        let mut context = RenderContext::new();
        let map_var = map.render(&mut context).unwrap();
        let script = context.script();

        assert_eq!(map_var, "map_0");
        assert!(script.contains("var map_0 = L.map(\"map_0\", {"));
        assert!(script.contains("\"center\":[40.4168,-3.7038]"));
        assert!(script.contains("\"zoom\":15"));
        assert!(script.contains("var tile_layer_0 = L.tileLayer("));
        assert!(script.contains(".addTo(map_0);"));
        assert!(script.find("tile_layer_0").unwrap() < script.find("marker_0").unwrap());
    }

    #[test]
    fn test_render_without_tiles() {
        let mut map = Map::new(LatLng::new(0.0, 0.0), 2);
        map.set_tile_layer(None);

        let mut context = RenderContext::new();
        map.render(&mut context).unwrap();
        assert!(!context.script().contains("L.tileLayer"));
    }

    #[test]
    fn test_fit_layers() {
        let mut map = Map::new(LatLng::new(0.0, 0.0), 2);
        map.fit_layers();
        assert!(map.bounds().is_none());

        map.add_marker(Marker::new(LatLng::new(40.0, -4.0))).unwrap();
        map.add_marker(Marker::new(LatLng::new(41.0, -3.0))).unwrap();
        map.fit_layers();

        let bounds = map.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(40.0, -4.0));
        assert_eq!(bounds.north_east, LatLng::new(41.0, -3.0));

        let mut context = RenderContext::new();
        map.render(&mut context).unwrap();
        assert!(context
            .script()
            .contains("map_0.fitBounds([[40.0,-4.0],[41.0,-3.0]], {});"));
    }

    #[test]
    fn test_scale_control() {
        let map = Map::with_options(
            LatLng::new(0.0, 0.0),
            2,
            MapOptions::default().with_control_scale(true),
        );
        let mut context = RenderContext::new();
        map.render(&mut context).unwrap();
        assert!(context.script().contains("L.control.scale().addTo(map_0);"));
    }
}
