//! The capability contract between RIMO and a host object model.

use rimo_core::{FieldResult, ModelId, Value};
use rimo_registry::{ModelDef, Registry};
use std::sync::Arc;

use crate::FieldNameCache;

/// An object whose fields can be reached by name.
///
/// Field names passed to these methods are concrete names that have already
/// been resolved; implementations do no mapping or policy checks of their own.
/// Hand-written structs can implement this with a `match` on the name.
pub trait Model {
    /// The registered model type this instance belongs to.
    fn model_id(&self) -> ModelId;

    /// The instance's definition cache.
    fn field_cache(&self) -> &FieldNameCache;

    /// Read a field. `None` means the field is declared but holds no value.
    fn read_field(&self, field: &str) -> Option<&Value>;

    /// Mutable access to a field's current value.
    fn field_mut(&mut self, field: &str) -> Option<&mut Value>;

    /// Overwrite a field.
    fn write_field(&mut self, field: &str, value: Value);

    /// The model definition, loaded through the instance cache.
    fn model_def(&self, registry: &Registry) -> FieldResult<Arc<ModelDef>> {
        self.field_cache().load(registry, self.model_id())
    }
}
