//! The Registry - immutable model lookup.

use crate::ModelDef;
use rimo_core::ModelId;
use std::collections::HashMap;
use std::sync::Arc;

/// The Registry provides runtime lookup of model definitions.
/// It is immutable after construction and can be shared across threads.
#[derive(Debug, Default)]
pub struct Registry {
    /// Model definitions by ID.
    models: HashMap<ModelId, Arc<ModelDef>>,
    /// Model ID lookup by name.
    model_names: HashMap<String, ModelId>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        models: HashMap<ModelId, Arc<ModelDef>>,
        model_names: HashMap<String, ModelId>,
    ) -> Self {
        Self {
            models,
            model_names,
        }
    }

    /// Get a model definition by ID.
    pub fn get_model(&self, id: ModelId) -> Option<&Arc<ModelDef>> {
        self.models.get(&id)
    }

    /// Get a model definition by name.
    pub fn get_model_by_name(&self, name: &str) -> Option<&Arc<ModelDef>> {
        self.model_names.get(name).and_then(|id| self.models.get(id))
    }

    /// Get a model ID by name.
    pub fn get_model_id(&self, name: &str) -> Option<ModelId> {
        self.model_names.get(name).copied()
    }

    /// Get all model definitions.
    pub fn all_models(&self) -> impl Iterator<Item = &Arc<ModelDef>> {
        self.models.values()
    }

    /// Get the number of models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
