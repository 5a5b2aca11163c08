//! Field resolution against a model definition.

use rimo_core::{FieldError, FieldResult};
use rimo_model::Model;
use rimo_registry::{MapScope, ModelDef, Registry};

use crate::naming::lower_first;

/// Resolve `logical` to a concrete field of `def`.
pub fn resolve_field(def: &ModelDef, logical: &str) -> FieldResult<String> {
    let expected = lower_first(logical);

    let candidate = match def.access_map() {
        None => expected,
        Some(map) => {
            if map.scope() == MapScope::Instance {
                return Err(FieldError::misdeclared_access_map(&def.name));
            }
            match map.target(&expected) {
                Some(target) => target.to_string(),
                None if !map.is_strict() => expected,
                None => return Err(FieldError::strict_rejected(&def.name, logical)),
            }
        }
    };

    if candidate.is_empty() || !def.declares(&candidate) {
        let attempted = (!candidate.is_empty()).then_some(candidate);
        return Err(FieldError::unresolved(&def.name, logical, attempted));
    }

    tracing::trace!(model = %def.name, logical, field = %candidate, "resolved field");
    Ok(candidate)
}

/// Resolves logical names for model instances, loading each instance's
/// definition through its field cache.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'r> {
    registry: &'r Registry,
}

impl<'r> FieldResolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Resolve `logical` to a concrete field of `instance`'s model.
    pub fn resolve<M: Model + ?Sized>(&self, instance: &M, logical: &str) -> FieldResult<String> {
        let def = instance.model_def(self.registry)?;
        resolve_field(&def, logical)
    }

    /// Existence probe: whether `logical` resolves on `instance`.
    ///
    /// Resolution errors are reported as `false`, never propagated.
    pub fn has<M: Model + ?Sized>(&self, instance: &M, logical: &str) -> bool {
        match self.resolve(instance, logical) {
            Ok(_) => true,
            Err(err) => {
                tracing::trace!(logical, error = %err, "existence probe miss");
                false
            }
        }
    }
}
