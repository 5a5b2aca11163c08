//! Fallback for requests that match no verb.

use rimo_core::{AccessResult, FieldError, Value};
use rimo_model::Model;
use rimo_resolver::FieldResolver;

use crate::config::DispatchConfig;
use crate::ops::read_value;
use crate::result::Outcome;

/// Handle a request no verb matched.
///
/// With the legacy fallback enabled, a zero-argument request naming a
/// declared field returns that field, and any other zero-argument request
/// returns null. Everything else is an unrecognized request.
pub fn execute_fallback(
    resolver: &FieldResolver<'_>,
    config: &DispatchConfig,
    instance: &mut dyn Model,
    request: &str,
    arg_count: usize,
) -> AccessResult<Outcome> {
    if !config.legacy_field_fallback || arg_count > 0 {
        return Err(FieldError::unrecognized_request(request, arg_count).into());
    }

    let def = instance.model_def(resolver.registry())?;
    if def.declares(request) {
        tracing::debug!(model = %def.name, field = request, "legacy field fallback");
        return Ok(Outcome::Value(read_value(instance, request)));
    }
    Ok(Outcome::Value(Value::Null))
}
