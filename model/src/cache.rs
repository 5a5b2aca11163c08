//! Per-instance cache of the model definition.

use rimo_core::{FieldError, FieldResult, ModelId};
use rimo_registry::{ModelDef, Registry};
use std::sync::{Arc, OnceLock};

/// Memoizes an instance's model definition, and with it whether the model
/// declares an access map and which field names it declares.
///
/// The cache is never serialized. A deserialized instance starts with an
/// empty cache and repopulates it on its first access call.
#[derive(Debug, Clone, Default)]
pub struct FieldNameCache {
    def: OnceLock<Arc<ModelDef>>,
}

impl FieldNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache already holding `def`.
    pub fn primed(def: Arc<ModelDef>) -> Self {
        let cache = Self::new();
        let _ = cache.def.set(def);
        cache
    }

    /// Return the definition of model `id`, loading it from `registry` on
    /// first use.
    ///
    /// A cached definition for a different model id is bypassed, not
    /// replaced; call [`invalidate`](Self::invalidate) to reset it.
    pub fn load(&self, registry: &Registry, id: ModelId) -> FieldResult<Arc<ModelDef>> {
        if let Some(def) = self.def.get() {
            if def.id == id {
                return Ok(Arc::clone(def));
            }
        }

        let def = registry
            .get_model(id)
            .ok_or_else(|| FieldError::unknown_model(id.to_string()))?;

        if self.def.set(Arc::clone(def)).is_ok() {
            tracing::trace!(model = %def.name, "field cache populated");
        }
        Ok(Arc::clone(def))
    }

    /// The cached definition, if populated.
    pub fn cached(&self) -> Option<&Arc<ModelDef>> {
        self.def.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.def.get().is_some()
    }

    /// Whether the cached model declares an access map. `None` until loaded.
    pub fn has_access_map(&self) -> Option<bool> {
        self.def.get().map(|def| def.has_access_map())
    }

    /// Drop the cached definition.
    pub fn invalidate(&mut self) {
        self.def.take();
    }
}
