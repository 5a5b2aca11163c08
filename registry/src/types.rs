//! Model definition types.

use rimo_core::{ModelId, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::builder::RegistryError;

/// Access map key that turns on strict mode.
pub const STRICT_KEY: &str = "+strict";

/// Access map key that makes every instance of the model read-only.
pub const READONLY_KEY: &str = "+readonly";

/// Field definition within a model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Concrete field name.
    pub name: String,
    /// Initial value for new records. `None` means the field starts unset.
    pub default: Option<Value>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A field that starts out as an empty list.
    pub fn collection(name: impl Into<String>) -> Self {
        Self::new(name).with_default(Value::List(Vec::new()))
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Where an access map was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapScope {
    /// Shared by every instance of the model. The only valid scope.
    #[default]
    Class,
    /// Attached to individual instances. Rejected by the resolver.
    Instance,
}

/// One logical → concrete mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Name used by callers (lower camel case).
    pub logical: String,
    /// Field the logical name resolves to.
    pub target: String,
    /// Whether sharing `target` with another entry is intended.
    pub alias: bool,
}

/// Per-model table remapping logical names to concrete fields.
///
/// Entries keep declaration order. The lookup index is built on first use
/// and published once, so concurrent first lookups are harmless.
#[derive(Debug, Clone, Default)]
pub struct AccessMap {
    entries: Vec<MapEntry>,
    strict: bool,
    readonly: bool,
    scope: MapScope,
    index: OnceLock<HashMap<String, usize>>,
}

impl AccessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// An access map declared on individual instances instead of the model.
    pub fn per_instance() -> Self {
        Self {
            scope: MapScope::Instance,
            ..Self::default()
        }
    }

    /// Build a map from raw `(key, target)` pairs, sentinels included.
    ///
    /// Sentinel keys (`+strict`, `+readonly`) must carry no target; every
    /// other key must carry one.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (key, target) in entries {
            let key = key.into();
            match (key.as_str(), target) {
                (STRICT_KEY, None) => map.strict = true,
                (READONLY_KEY, None) => map.readonly = true,
                (k, _) if k.starts_with('+') => {
                    return Err(RegistryError::MalformedSentinel(key));
                }
                (_, None) => return Err(RegistryError::MissingMapTarget(key)),
                (_, Some(target)) => map = map.map(key, target),
            }
        }
        Ok(map)
    }

    /// Map a logical name onto a concrete field.
    pub fn map(mut self, logical: impl Into<String>, target: impl Into<String>) -> Self {
        self.push(logical.into(), target.into(), false);
        self
    }

    /// Like [`map`](Self::map), but the target may be shared with other entries.
    pub fn alias(mut self, logical: impl Into<String>, target: impl Into<String>) -> Self {
        self.push(logical.into(), target.into(), true);
        self
    }

    /// Reject logical names that have no entry.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Reject every mutating verb.
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn push(&mut self, logical: String, target: String, alias: bool) {
        self.entries.push(MapEntry {
            logical,
            target,
            alias,
        });
        self.index = OnceLock::new();
    }

    /// Look up the concrete field for a logical name.
    pub fn target(&self, logical: &str) -> Option<&str> {
        self.index()
            .get(logical)
            .map(|&i| self.entries[i].target.as_str())
    }

    /// Check if a logical name has an entry.
    pub fn contains(&self, logical: &str) -> bool {
        self.index().contains_key(logical)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn scope(&self) -> MapScope {
        self.scope
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            self.entries
                .iter()
                .enumerate()
                .map(|(i, entry)| (entry.logical.clone(), i))
                .collect()
        })
    }
}

/// Model type definition.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Unique identifier.
    pub id: ModelId,
    /// Model name.
    pub name: String,
    /// Field definitions in declaration order.
    pub fields: Vec<FieldDef>,
    /// Position of each field in `fields`.
    field_index: HashMap<String, usize>,
    /// Optional access map.
    pub access_map: Option<AccessMap>,
}

impl ModelDef {
    pub fn new(id: ModelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            fields: Vec::new(),
            field_index: HashMap::new(),
            access_map: None,
        }
    }

    /// Append a field definition, replacing any previous one with the same name.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        match self.field_index.get(&field.name) {
            Some(&i) => self.fields[i] = field,
            None => {
                self.field_index.insert(field.name.clone(), self.fields.len());
                self.fields.push(field);
            }
        }
        self
    }

    pub fn with_access_map(mut self, map: AccessMap) -> Self {
        self.access_map = Some(map);
        self
    }

    /// Check if the model declares a field with exactly this name.
    pub fn declares(&self, name: &str) -> bool {
        self.field_index.contains_key(name)
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.field_index.get(name).map(|&i| &self.fields[i])
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn access_map(&self) -> Option<&AccessMap> {
        self.access_map.as_ref()
    }

    pub fn has_access_map(&self) -> bool {
        self.access_map.is_some()
    }

    /// True when the access map carries the read-only sentinel.
    pub fn is_readonly(&self) -> bool {
        self.access_map.as_ref().is_some_and(|m| m.is_readonly())
    }
}
