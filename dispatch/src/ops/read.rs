//! GET and IS operations - pure reads.

use rimo_core::{AccessResult, Value};
use rimo_model::Model;
use rimo_registry::ModelDef;

use crate::result::Outcome;

/// Current value of `field`; an unset field reads as null.
pub fn read_value(instance: &dyn Model, field: &str) -> Value {
    instance.read_field(field).cloned().unwrap_or(Value::Null)
}

/// True only if `field` holds `Bool(true)`. Unset, null and non-boolean
/// values read as false.
pub fn read_flag(instance: &dyn Model, field: &str) -> bool {
    instance.read_field(field).is_some_and(Value::is_true)
}

/// Execute a GET request.
pub fn execute_get(
    instance: &mut dyn Model,
    _def: &ModelDef,
    field: &str,
    _arg: Option<Value>,
) -> AccessResult<Outcome> {
    Ok(Outcome::Value(read_value(instance, field)))
}

/// Execute an IS request.
pub fn execute_is(
    instance: &mut dyn Model,
    _def: &ModelDef,
    field: &str,
    _arg: Option<Value>,
) -> AccessResult<Outcome> {
    Ok(Outcome::Flag(read_flag(instance, field)))
}
