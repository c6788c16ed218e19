use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        icon::Icon,
    },
    rendering::context::{to_js, RenderContext},
    ui::popup::Popup,
    Result,
};

/// A pin at a fixed coordinate, optionally carrying a popup and a tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    popup: Option<Popup>,
    tooltip: Option<String>,
    icon: Option<Icon>,
}

impl Marker {
    /// Creates an unattached marker; the map assigns an id unless one is set
    pub fn new(position: LatLng) -> Self {
        if !position.is_valid() {
            log::warn!("Marker position ({}) is outside the valid range", position);
        }

        let properties =
            LayerProperties::new(String::new(), "Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            popup: None,
            tooltip: None,
            icon: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.properties.id = id.into();
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    /// Shorthand for an escaped text popup
    pub fn with_popup_text(self, text: impl Into<String>) -> Self {
        self.with_popup(Popup::new(text))
    }

    /// Text shown while hovering the marker
    pub fn with_tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Text of the attached popup, if any
    pub fn popup_text(&self) -> Option<&str> {
        self.popup.as_ref().map(Popup::text)
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Color of the attached icon, if any
    pub fn color(&self) -> Option<&str> {
        self.icon.as_ref().map(|icon| icon.color.as_str())
    }
}

impl LayerTrait for Marker {
    crate::impl_layer_trait!(properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({})
    }

    fn render(&self, context: &mut RenderContext) -> Result<()> {
        let name = context.next_name("marker");
        let map_var = context.map_var().to_string();
        context.push_line(format!(
            "var {} = L.marker({}, {}).addTo({});",
            name,
            to_js(&self.position.to_array())?,
            to_js(&self.options())?,
            map_var
        ));

        if let Some(icon) = &self.icon {
            icon.render_on(context, &name)?;
        }
        if let Some(popup) = &self.popup {
            popup.render_on(context, &name)?;
        }
        if let Some(tooltip) = &self.tooltip {
            let content = format!("<div>{}</div>", handlebars::html_escape(tooltip));
            context.push_line(format!(
                "{}.bindTooltip({}, {});",
                name,
                to_js(&content)?,
                to_js(&serde_json::json!({ "sticky": true }))?
            ));
        }
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_records_state() {
        let marker = Marker::new(LatLng::new(40.4168, -3.7038))
            .with_popup_text("Madrid")
            .with_icon(Icon::new("blue"))
            .with_tooltip("Capital");

        assert_eq!(marker.position(), LatLng::new(40.4168, -3.7038));
        assert_eq!(marker.popup_text(), Some("Madrid"));
        assert_eq!(marker.color(), Some("blue"));
        assert_eq!(marker.tooltip(), Some("Capital"));
        assert_eq!(marker.layer_type(), LayerType::Marker);
        assert_eq!(marker.id(), "");
    }

    #[test]
    fn test_render_order() {
        let marker = Marker::new(LatLng::new(40.4168, -3.7038))
            .with_popup_text("Madrid")
            .with_icon(Icon::new("blue"));

        let mut context = RenderContext::new();
        context.set_map_var("map_0".to_string());
        marker.render(&mut context).unwrap();

        let script = context.script();
        let created = script
            .find("var marker_0 = L.marker([40.4168,-3.7038], {}).addTo(map_0);")
            .unwrap();
        let icon = script.find("marker_0.setIcon(icon_0);").unwrap();
        let popup = script.find("marker_0.bindPopup(popup_0);").unwrap();
        assert!(created < icon && icon < popup);
    }

    #[test]
    fn test_tooltip_is_escaped() {
        let marker = Marker::new(LatLng::new(0.0, 0.0)).with_tooltip("<script>");
        let mut context = RenderContext::new();
        context.set_map_var("map_0".to_string());
        marker.render(&mut context).unwrap();

        assert!(context.script().contains("&lt;script&gt;"));
        assert!(!context.script().contains("<script>"));
    }

    #[test]
    fn test_bounds_is_single_point() {
        let marker = Marker::new(LatLng::new(1.0, 2.0));
        let bounds = marker.bounds().unwrap();
        assert_eq!(bounds.south_west, bounds.north_east);
    }
}
