//! Core constants derived from Leaflet defaults and common web-map conventions.
//! Keeping them in a single place makes it easier to tweak crate-wide defaults.

/// Zoom level used when the caller does not pick one.
pub const DEFAULT_ZOOM: u8 = 15;

/// Lowest zoom level Leaflet accepts.
pub const MIN_ZOOM: u8 = 0;

/// Highest zoom level served by the default OpenStreetMap tiles.
pub const MAX_ZOOM: u8 = 18;

/// Marker color used when the caller does not pick one.
pub const DEFAULT_MARKER_COLOR: &str = "red";

/// Glyph drawn inside marker icons.
pub const DEFAULT_ICON_GLYPH: &str = "info-sign";

/// Color of the glyph drawn inside marker icons.
pub const DEFAULT_ICON_GLYPH_COLOR: &str = "white";

/// Icon font prefix (`glyphicon` for Bootstrap 3 glyphs, `fa` for Font Awesome).
pub const DEFAULT_ICON_PREFIX: &str = "glyphicon";

/// Marker colors understood by Leaflet.awesome-markers.
pub const MARKER_COLORS: [&str; 19] = [
    "beige",
    "black",
    "blue",
    "cadetblue",
    "darkblue",
    "darkgreen",
    "darkpurple",
    "darkred",
    "gray",
    "green",
    "lightblue",
    "lightgray",
    "lightgreen",
    "lightred",
    "orange",
    "pink",
    "purple",
    "red",
    "white",
];

/// OpenStreetMap tile template.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// OpenStreetMap attribution.
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Scripts loaded in the page head, in order.
pub const DEFAULT_JS: [(&str, &str); 4] = [
    (
        "leaflet",
        "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js",
    ),
    ("jquery", "https://code.jquery.com/jquery-1.12.4.min.js"),
    (
        "bootstrap",
        "https://cdn.jsdelivr.net/npm/bootstrap@5.2.2/dist/js/bootstrap.bundle.min.js",
    ),
    (
        "awesome_markers",
        "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js",
    ),
];

/// Stylesheets loaded in the page head, in order.
pub const DEFAULT_CSS: [(&str, &str); 5] = [
    (
        "leaflet_css",
        "https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css",
    ),
    (
        "bootstrap_css",
        "https://cdn.jsdelivr.net/npm/bootstrap@5.2.2/dist/css/bootstrap.min.css",
    ),
    (
        "glyphicons_css",
        "https://netdna.bootstrapcdn.com/bootstrap/3.0.0/css/bootstrap.min.css",
    ),
    (
        "awesome_markers_font_css",
        "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.2.0/css/all.min.css",
    ),
    (
        "awesome_markers_css",
        "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css",
    ),
];

/// Checks a color name against [`MARKER_COLORS`].
pub fn is_known_marker_color(color: &str) -> bool {
    MARKER_COLORS.contains(&color)
}
