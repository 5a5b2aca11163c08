//! Record - a dynamic model instance.

use rimo_core::{is_reserved_field, Attributes, FieldError, FieldResult, ModelId, Value};
use rimo_registry::{ModelDef, Registry};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

use crate::{FieldNameCache, Model};

/// A model instance stored as a field map.
///
/// Serializes as `{"model": <id>, "fields": {...}}`. The definition cache is
/// skipped and reserved field names are filtered in both directions. Once
/// the definition is cached, fields the model does not declare are left out
/// of the serialized form as well.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Model type of this record.
    model: ModelId,
    /// Field values by concrete name.
    #[serde(deserialize_with = "deserialize_fields")]
    fields: Attributes,
    #[serde(skip)]
    cache: FieldNameCache,
}

impl Record {
    /// Create a record of the given model, seeded with field defaults.
    pub fn new(def: &Arc<ModelDef>) -> Self {
        let fields = def
            .fields
            .iter()
            .filter_map(|f| f.default.clone().map(|v| (f.name.clone(), v)))
            .collect();
        Self {
            model: def.id,
            fields,
            cache: FieldNameCache::primed(Arc::clone(def)),
        }
    }

    /// Create a record of the named model.
    pub fn from_registry(registry: &Registry, model: &str) -> FieldResult<Self> {
        registry
            .get_model_by_name(model)
            .map(Self::new)
            .ok_or_else(|| FieldError::unknown_model(model))
    }

    /// Set raw field values, bypassing resolution.
    pub fn with_fields(mut self, fields: Attributes) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Get a field value by concrete name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Declared field values that belong in a serialized form of this
    /// record, in declaration order. Unset fields and keys the model does
    /// not declare are skipped.
    pub fn serializable_fields(&self, registry: &Registry) -> FieldResult<Vec<(&str, &Value)>> {
        let def = self.model_def(registry)?;
        Ok(def
            .field_names()
            .filter(|name| !is_reserved_field(name))
            .filter_map(|name| self.fields.get_key_value(name))
            .map(|(name, value)| (name.as_str(), value))
            .collect())
    }

    /// Whether `field` goes into the serialized form.
    fn is_serialized(&self, field: &str) -> bool {
        !is_reserved_field(field) && self.cache.cached().map_or(true, |def| def.declares(field))
    }

    /// Drop the cached model definition.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.model == other.model && self.fields == other.fields
    }
}

impl Model for Record {
    fn model_id(&self) -> ModelId {
        self.model
    }

    fn field_cache(&self) -> &FieldNameCache {
        &self.cache
    }

    fn read_field(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut Value> {
        self.fields.get_mut(field)
    }

    fn write_field(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 2)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("fields", &SerializedFields(self))?;
        state.end()
    }
}

struct SerializedFields<'a>(&'a Record);

impl Serialize for SerializedFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.0;
        serializer.collect_map(
            record
                .fields
                .iter()
                .filter(|(name, _)| record.is_serialized(name)),
        )
    }
}

fn deserialize_fields<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Attributes, D::Error> {
    let mut fields = Attributes::deserialize(deserializer)?;
    fields.retain(|name, _| !is_reserved_field(name));
    Ok(fields)
}
