use crate::{
    core::constants::{
        is_known_marker_color, DEFAULT_ICON_GLYPH, DEFAULT_ICON_GLYPH_COLOR, DEFAULT_ICON_PREFIX,
        DEFAULT_MARKER_COLOR,
    },
    rendering::context::{to_js, RenderContext},
    Result,
};

/// Pin-shaped marker icon drawn by Leaflet.awesome-markers
///
/// Color names are not validated. A name outside the plugin's palette is
/// logged and written to the page unchanged, where the plugin falls back
/// to its own styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub color: String,
    pub glyph: String,
    pub glyph_color: String,
    pub prefix: String,
}

impl Icon {
    pub fn new(color: impl Into<String>) -> Self {
        let color = color.into();
        if !is_known_marker_color(&color) {
            log::warn!(
                "Marker color '{}' is not in the awesome-markers palette, passing it through",
                color
            );
        }

        Self {
            color,
            glyph: DEFAULT_ICON_GLYPH.to_string(),
            glyph_color: DEFAULT_ICON_GLYPH_COLOR.to_string(),
            prefix: DEFAULT_ICON_PREFIX.to_string(),
        }
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    pub fn with_glyph_color(mut self, glyph_color: impl Into<String>) -> Self {
        self.glyph_color = glyph_color.into();
        self
    }

    /// Switches the glyph font, e.g. `fa` for Font Awesome
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "icon": self.glyph,
            "iconColor": self.glyph_color,
            "markerColor": self.color,
            "prefix": self.prefix,
        })
    }

    /// Emits the icon and assigns it to the marker held in `marker_var`
    pub fn render_on(&self, context: &mut RenderContext, marker_var: &str) -> Result<()> {
        let name = context.next_name("icon");
        context.push_line(format!(
            "var {} = L.AwesomeMarkers.icon({});",
            name,
            to_js(&self.options())?
        ));
        context.push_line(format!("{}.setIcon({});", marker_var, name));
        Ok(())
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_COLOR)
    }
}
