//! ADD and REMOVE operations - mutate a list field in place.

use rimo_core::{AccessResult, CollectionError, Value};
use rimo_model::Model;
use rimo_registry::ModelDef;

use crate::result::Outcome;

/// Borrow the list stored in `field`, or report what the field holds instead.
fn list_of<'a>(
    instance: &'a mut dyn Model,
    def: &ModelDef,
    field: &str,
) -> Result<&'a mut Vec<Value>, CollectionError> {
    let actual = instance
        .read_field(field)
        .map(Value::type_name)
        .unwrap_or("Null");
    if actual != "List" {
        return Err(CollectionError::new(&def.name, field, actual));
    }
    instance
        .field_mut(field)
        .and_then(Value::as_list_mut)
        .ok_or_else(|| CollectionError::new(&def.name, field, actual))
}

/// Execute an ADD request: append to the list.
pub fn execute_add(
    instance: &mut dyn Model,
    def: &ModelDef,
    field: &str,
    arg: Option<Value>,
) -> AccessResult<Outcome> {
    let list = list_of(instance, def, field)?;
    list.push(arg.unwrap_or(Value::Null));
    tracing::trace!(model = %def.name, field, len = list.len(), "appended to collection");
    Ok(Outcome::Updated)
}

/// Execute a REMOVE request: drop the first equal element, if any.
///
/// Scalars match by value, object references by identity.
pub fn execute_remove(
    instance: &mut dyn Model,
    def: &ModelDef,
    field: &str,
    arg: Option<Value>,
) -> AccessResult<Outcome> {
    let needle = arg.unwrap_or(Value::Null);
    let list = list_of(instance, def, field)?;
    if let Some(pos) = list.iter().position(|item| *item == needle) {
        list.remove(pos);
        tracing::trace!(model = %def.name, field, pos, "removed from collection");
    }
    Ok(Outcome::Updated)
}
