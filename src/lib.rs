//! # pinmap
//!
//! Build interactive Leaflet web maps from Rust, pin labeled markers on
//! them, and hand the result to the browser.
//!
//! The crate records map state in plain Rust values and renders it as a
//! self-contained HTML page. Tiles and interaction are handled by Leaflet
//! inside the browser.
//!
//! ```no_run
//! use pinmap::helpers::{create_map, create_marker, save_and_open};
//!
//! let mut map = create_map(40.4168, -3.7038, None);
//! let marker = create_marker(40.4168, -3.7038, "Madrid", Some("blue"));
//! map.add_marker(marker)?;
//! save_and_open(&map, "madrid.html")?;
//! # Ok::<(), pinmap::MapError>(())
//! ```

pub mod core;
pub mod export;
pub mod helpers;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::MapOptions,
    geo::{LatLng, LatLngBounds},
    map::Map,
};

pub use crate::layers::{
    base::LayerTrait, icon::Icon, manager::LayerManager, marker::Marker, tile::TileLayer,
};

pub use crate::ui::popup::Popup;

pub use crate::rendering::{context::RenderContext, document::HtmlDocument};

pub use crate::export::{BrowserLauncher, SystemBrowser, save};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Failed to open {uri} in a browser: {source}")]
    Browser {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Cannot express {0} as a file URI")]
    FileUri(std::path::PathBuf),
}

/// Error type alias for convenience
pub type Error = MapError;
