//! One-call shortcuts for the common case: a map, some pins, a browser tab
//!
//! ```no_run
//! use pinmap::helpers::{create_map, create_marker, save_and_open};
//!
//! let mut map = create_map(40.4168, -3.7038, Some(15));
//! map.add_marker(create_marker(40.4168, -3.7038, "Madrid", None))?;
//! save_and_open(&map, "madrid.html")?;
//! # Ok::<(), pinmap::MapError>(())
//! ```

use crate::{
    core::{
        constants::{DEFAULT_MARKER_COLOR, DEFAULT_ZOOM},
        geo::LatLng,
        map::Map,
    },
    export::browser::SystemBrowser,
    layers::{icon::Icon, marker::Marker},
    Result,
};
use std::path::Path;

/// Map centered on `(latitude, longitude)`, zoom 15 unless given
pub fn create_map(latitude: f64, longitude: f64, zoom: Option<u8>) -> Map {
    Map::new(
        LatLng::new(latitude, longitude),
        zoom.unwrap_or(DEFAULT_ZOOM),
    )
}

/// Marker at `(latitude, longitude)` with `label` as popup text and an
/// `info-sign` icon in `color` (red unless given)
pub fn create_marker(
    latitude: f64,
    longitude: f64,
    label: impl Into<String>,
    color: Option<&str>,
) -> Marker {
    Marker::new(LatLng::new(latitude, longitude))
        .with_popup_text(label)
        .with_icon(Icon::new(color.unwrap_or(DEFAULT_MARKER_COLOR)))
}

/// Writes `map` to `path` as HTML and opens it in the default browser
pub fn save_and_open(map: &Map, path: impl AsRef<Path>) -> Result<()> {
    save_and_open_with(map, path, &SystemBrowser)
}

pub use crate::export::save_and_open_with;
