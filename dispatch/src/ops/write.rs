//! SET operation - overwrites a field.

use rimo_core::{AccessResult, Value};
use rimo_model::Model;
use rimo_registry::ModelDef;

use crate::result::Outcome;

/// Execute a SET request.
pub fn execute_set(
    instance: &mut dyn Model,
    def: &ModelDef,
    field: &str,
    arg: Option<Value>,
) -> AccessResult<Outcome> {
    let value = arg.unwrap_or(Value::Null);
    tracing::trace!(model = %def.name, field, value = %value, "set field");
    instance.write_field(field, value);
    Ok(Outcome::Updated)
}
