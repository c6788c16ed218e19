//! Macros to reduce boilerplate in layer implementations

/// Implements the `LayerTrait` accessors backed by a `LayerProperties` field
///
/// This generates implementations for:
/// - id(), set_id(), name(), layer_type()
/// - z_index(), set_z_index()
/// - is_visible(), set_visible()
/// - as_any(), as_any_mut()
#[macro_export]
macro_rules! impl_layer_trait {
    ($properties_field:ident) => {
        fn id(&self) -> &str {
            &self.$properties_field.id
        }

        fn set_id(&mut self, id: String) {
            self.$properties_field.id = id;
        }

        fn name(&self) -> &str {
            &self.$properties_field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$properties_field.layer_type
        }

        fn z_index(&self) -> i32 {
            self.$properties_field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$properties_field.z_index = z_index;
        }

        fn is_visible(&self) -> bool {
            self.$properties_field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$properties_field.visible = visible;
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}
