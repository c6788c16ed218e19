//! Map builder for fluent API configuration
//!
//! This module provides a MapBuilder that allows for fluent configuration
//! of map instances with options, base tiles and markers in one expression.

use crate::{
    core::{
        config::MapOptions,
        constants::DEFAULT_ZOOM,
        geo::{LatLng, LatLngBounds},
        map::Map,
    },
    layers::{marker::Marker, tile::TileLayer},
    Result,
};

/// Builder for creating and configuring Map instances
pub struct MapBuilder {
    center: LatLng,
    zoom: u8,
    /// Page and interaction options
    options: MapOptions,
    /// `None` keeps the default OpenStreetMap tiles
    tile_layer: Option<Option<TileLayer>>,
    markers: Vec<Marker>,
    fit_bounds: Option<LatLngBounds>,
    fit_markers: bool,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self {
            center: LatLng::default(),
            zoom: DEFAULT_ZOOM,
            options: MapOptions::default(),
            tile_layer: None,
            markers: Vec::new(),
            fit_bounds: None,
            fit_markers: false,
        }
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: u8) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set map options wholesale
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.title = title.into();
        self
    }

    /// Set the CSS size of the map element
    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.options = self.options.with_size(width, height);
        self
    }

    /// Set zoom limits
    pub fn with_zoom_limits(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.options = self.options.with_zoom_limits(min_zoom, max_zoom);
        self
    }

    /// Enable or disable the scale bar
    pub fn with_control_scale(mut self, enabled: bool) -> Self {
        self.options.control_scale = enabled;
        self
    }

    /// Enable or disable the +/- zoom buttons
    pub fn with_zoom_control(mut self, enabled: bool) -> Self {
        self.options.zoom_control = enabled;
        self
    }

    /// Set the base tiles
    pub fn with_tile_layer(mut self, tile_layer: TileLayer) -> Self {
        self.tile_layer = Some(Some(tile_layer));
        self
    }

    /// Build a map with no base tiles
    pub fn without_tiles(mut self) -> Self {
        self.tile_layer = Some(None);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_fit_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.fit_bounds = Some(bounds);
        self
    }

    /// Open the page zoomed to the markers instead of center/zoom
    pub fn fit_to_markers(mut self) -> Self {
        self.fit_markers = true;
        self
    }

    /// Build the map, attaching markers in the order they were given
    pub fn build(self) -> Result<Map> {
        let mut map = Map::with_options(self.center, self.zoom, self.options);
        if let Some(tile_layer) = self.tile_layer {
            map.set_tile_layer(tile_layer);
        }
        for marker in self.markers {
            map.add_marker(marker)?;
        }
        if let Some(bounds) = self.fit_bounds {
            map.fit_bounds(bounds);
        }
        if self.fit_markers {
            map.fit_layers();
        }
        Ok(map)
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
