//! RegistryBuilder for constructing an immutable Registry.

use crate::{validation, AccessMap, FieldDef, ModelDef, Registry};
use rimo_core::ModelId;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate model name: {0}")]
    DuplicateModelName(String),

    #[error("Duplicate field {field} on model {model}")]
    DuplicateField { model: String, field: String },

    #[error("Empty field name on model {0}")]
    EmptyFieldName(String),

    #[error("Field name {field} on model {model} is reserved")]
    ReservedFieldName { model: String, field: String },

    #[error("Malformed access map sentinel: {0}")]
    MalformedSentinel(String),

    #[error("Access map entry {0} has no target field")]
    MissingMapTarget(String),

    #[error("Empty access map key on model {0}")]
    EmptyMapKey(String),

    #[error("Access map key {key} on model {model} can never match (starts with an upper-case letter)")]
    UnreachableMapKey { model: String, key: String },

    #[error("Duplicate access map key {key} on model {model}")]
    DuplicateMapKey { model: String, key: String },

    #[error("Access map of model {model} maps both {first} and {second} to {target}; declare one as an alias")]
    DuplicateMapTarget {
        model: String,
        target: String,
        first: String,
        second: String,
    },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next model ID to allocate.
    next_model_id: u32,
    /// Models being built.
    models: HashMap<ModelId, ModelDef>,
    /// Model name to ID mapping.
    model_names: HashMap<String, ModelId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model definition.
    pub fn add_model(&mut self, name: impl Into<String>) -> ModelBuilder<'_> {
        let name = name.into();
        let id = ModelId::new(self.next_model_id);
        self.next_model_id += 1;

        ModelBuilder {
            builder: self,
            id,
            name,
            fields: Vec::new(),
            access_map: None,
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let mut models = HashMap::with_capacity(self.models.len());
        for (id, def) in self.models {
            for entry in validation::dangling_entries(&def) {
                tracing::warn!(
                    model = %def.name,
                    logical = %entry.logical,
                    target = %entry.target,
                    "access map target is not a declared field"
                );
            }
            models.insert(id, Arc::new(def));
        }

        Ok(Registry::new(models, self.model_names))
    }
}

/// Builder for a model definition.
pub struct ModelBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: ModelId,
    name: String,
    fields: Vec<FieldDef>,
    access_map: Option<AccessMap>,
}

impl<'a> ModelBuilder<'a> {
    /// Add a field.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add several plain fields at once.
    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(FieldDef::new));
        self
    }

    /// Attach the model's access map.
    pub fn access_map(mut self, map: AccessMap) -> Self {
        self.access_map = Some(map);
        self
    }

    /// Finish building this model.
    pub fn done(self) -> Result<ModelId, RegistryError> {
        // Check for duplicate name
        if self.builder.model_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateModelName(self.name));
        }

        validation::check_fields(&self.name, &self.fields)?;
        if let Some(map) = &self.access_map {
            validation::check_access_map(&self.name, map)?;
        }

        let mut def = ModelDef::new(self.id, self.name.clone());
        for field in self.fields {
            def = def.with_field(field);
        }
        if let Some(map) = self.access_map {
            def = def.with_access_map(map);
        }

        tracing::debug!(
            model = %def.name,
            id = %def.id,
            fields = def.fields.len(),
            access_map = def.has_access_map(),
            "registered model"
        );

        self.builder.model_names.insert(self.name, self.id);
        self.builder.models.insert(self.id, def);

        Ok(self.id)
    }
}
