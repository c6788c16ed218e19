//! Prelude module for common pinmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use pinmap::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::MapOptions,
    geo::{LatLng, LatLngBounds},
    map::Map,
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    icon::Icon,
    manager::LayerManager,
    marker::Marker,
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::ui::popup::Popup;

pub use crate::export::{file_uri, save, save_and_open_with, BrowserLauncher, SystemBrowser};

pub use crate::helpers::{create_map, create_marker, save_and_open};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
