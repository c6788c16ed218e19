use crate::{core::geo::LatLngBounds, rendering::context::RenderContext, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tile,
    Marker,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile_layer"),
            LayerType::Marker => write!(f, "marker"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
            visible: true,
        }
    }
}

/// Anything that can be attached to a map and rendered into its script
pub trait LayerTrait: Send {
    /// Unique id within the owning map; empty until attached
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Leaflet options object for this layer
    fn options(&self) -> serde_json::Value;

    /// Emits the JavaScript that creates this layer and adds it to the map
    fn render(&self, context: &mut RenderContext) -> Result<()>;

    /// Geographic extent covered by the layer, if it has one
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
