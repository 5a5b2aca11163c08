//! Shape checks run once when a model is registered.

use rimo_core::is_reserved_field;
use std::collections::{HashMap, HashSet};

use crate::builder::RegistryError;
use crate::{AccessMap, FieldDef, MapEntry, ModelDef};

/// Check declared fields: non-empty, unique, not reserved.
pub fn check_fields(model: &str, fields: &[FieldDef]) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(RegistryError::EmptyFieldName(model.to_string()));
        }
        if is_reserved_field(&field.name) {
            return Err(RegistryError::ReservedFieldName {
                model: model.to_string(),
                field: field.name.clone(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(RegistryError::DuplicateField {
                model: model.to_string(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}

/// Check the shape of an access map.
///
/// Every key must be reachable (callers' names are lower-cased at the first
/// character before lookup), keys are unique, and two entries may only share
/// a target when one of them is declared as an alias.
pub fn check_access_map(model: &str, map: &AccessMap) -> Result<(), RegistryError> {
    let mut keys = HashSet::new();
    let mut targets: HashMap<&str, &MapEntry> = HashMap::new();

    for entry in map.entries() {
        let key = entry.logical.as_str();
        if key.starts_with('+') {
            return Err(RegistryError::MalformedSentinel(entry.logical.clone()));
        }
        if key.is_empty() {
            return Err(RegistryError::EmptyMapKey(model.to_string()));
        }
        if entry.target.is_empty() {
            return Err(RegistryError::MissingMapTarget(entry.logical.clone()));
        }
        if key.chars().next().is_some_and(char::is_uppercase) {
            return Err(RegistryError::UnreachableMapKey {
                model: model.to_string(),
                key: entry.logical.clone(),
            });
        }
        if !keys.insert(key) {
            return Err(RegistryError::DuplicateMapKey {
                model: model.to_string(),
                key: entry.logical.clone(),
            });
        }
        if let Some(first) = targets.get(entry.target.as_str()) {
            if !first.alias && !entry.alias {
                return Err(RegistryError::DuplicateMapTarget {
                    model: model.to_string(),
                    target: entry.target.clone(),
                    first: first.logical.clone(),
                    second: entry.logical.clone(),
                });
            }
        } else {
            targets.insert(entry.target.as_str(), entry);
        }
    }
    Ok(())
}

/// Entries whose target is not a declared field. These are legal but will
/// fail every resolution that reaches them.
pub fn dangling_entries(def: &ModelDef) -> Vec<&MapEntry> {
    def.access_map()
        .map(|map| {
            map.entries()
                .iter()
                .filter(|entry| !def.declares(&entry.target))
                .collect()
        })
        .unwrap_or_default()
}
