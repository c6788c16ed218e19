use crate::{
    layers::base::LayerTrait, prelude::HashMap, rendering::context::RenderContext, MapError,
    Result,
};

/// Manages layers for the map, handling ids and ordering
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index, then insertion)
    render_order: Vec<String>,
    /// Next generated id suffix, per layer type
    next_seq: HashMap<String, usize>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
            next_seq: HashMap::default(),
        }
    }

    /// Adds a layer to the manager and returns its id
    ///
    /// A layer without an id is given `<type>_<n>`. Adding a layer whose id
    /// is already taken fails with [`MapError::Layer`].
    pub fn add_layer(&mut self, mut layer: Box<dyn LayerTrait>) -> Result<String> {
        if layer.id().is_empty() {
            let id = self.generate_id(&layer.layer_type().to_string());
            layer.set_id(id);
        } else if self.layers.contains_key(layer.id()) {
            return Err(MapError::Layer(format!(
                "a layer with id '{}' already exists",
                layer.id()
            )));
        }

        let layer_id = layer.id().to_string();
        let z_index = layer.z_index();
        log::debug!("Adding {} layer '{}'", layer.layer_type(), layer_id);

        self.layers.insert(layer_id.clone(), layer);

        // Insert in sorted order by z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id.clone());
        Ok(layer_id)
    }

    fn generate_id(&mut self, prefix: &str) -> String {
        let seq = self.next_seq.entry(prefix.to_string()).or_insert(0);
        loop {
            let candidate = format!("{}_{}", prefix, seq);
            *seq += 1;
            if !self.layers.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Layers of concrete type `T`, in render order
    pub fn layers_of<T: 'static>(&self) -> Vec<&T> {
        self.layers()
            .into_iter()
            .filter_map(|layer| layer.as_any().downcast_ref::<T>())
            .collect()
    }

    /// Renders all visible layers in order
    pub fn render(&self, context: &mut RenderContext) -> Result<()> {
        for layer in self.layers() {
            if layer.is_visible() {
                layer.render(context)?;
            }
        }
        Ok(())
    }

    /// Updates the render order based on current z-indices
    pub fn update_render_order(&mut self) {
        let layers = &self.layers;
        // Stable sort keeps insertion order among equal z-indices
        self.render_order.sort_by_key(|id| layers.get(id).map(|l| l.z_index()).unwrap_or(0));
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}
