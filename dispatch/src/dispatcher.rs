//! Dispatcher - coordinates accessor requests.
//!
//! The dispatcher parses a request against the verb table and delegates to
//! the operation modules in `ops/`:
//! - `ops/read.rs` - GET, IS
//! - `ops/write.rs` - SET
//! - `ops/collection.rs` - ADD, REMOVE
//! - `ops/legacy.rs` - requests no verb matches

use rimo_core::{AccessResult, FieldError, FieldResult, Value};
use rimo_model::Model;
use rimo_registry::{ModelDef, Registry};
use rimo_resolver::{resolve_field, upper_first, FieldResolver};

use crate::config::DispatchConfig;
use crate::ops;
use crate::result::Outcome;
use crate::verb::{handler_for, Request, Verb};

/// Accessor dispatcher.
#[derive(Debug, Clone)]
pub struct Dispatcher<'r> {
    resolver: FieldResolver<'r>,
    config: DispatchConfig,
}

impl<'r> Dispatcher<'r> {
    /// Create a dispatcher with default options.
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, DispatchConfig::default())
    }

    pub fn with_config(registry: &'r Registry, config: DispatchConfig) -> Self {
        Self {
            resolver: FieldResolver::new(registry),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn resolver(&self) -> &FieldResolver<'r> {
        &self.resolver
    }

    /// Execute a request such as `getAmount` or `addTag` against `instance`.
    pub fn dispatch(
        &self,
        instance: &mut dyn Model,
        request: &str,
        args: Vec<Value>,
    ) -> AccessResult<Outcome> {
        let arg_count = args.len();
        match Request::parse(request, arg_count) {
            Some(parsed) => {
                tracing::debug!(
                    request,
                    verb = ?parsed.verb,
                    logical = parsed.logical,
                    "dispatching request"
                );
                self.run(instance, parsed.verb, parsed.logical, request, args.into_iter().next())
            }
            None => {
                ops::execute_fallback(&self.resolver, &self.config, instance, request, arg_count)
            }
        }
    }

    /// Execute `verb` on `logical` without going through request parsing.
    pub fn apply(
        &self,
        instance: &mut dyn Model,
        verb: Verb,
        logical: &str,
        arg: Option<Value>,
    ) -> AccessResult<Outcome> {
        let request = format!("{}{}", verb.prefix(), upper_first(logical));
        if arg.is_some() != verb.mutates() {
            let arg_count = usize::from(arg.is_some());
            return Err(FieldError::unrecognized_request(request, arg_count).into());
        }
        self.run(instance, verb, logical, &request, arg)
    }

    /// Read the field `logical` resolves to.
    pub fn get(&self, instance: &dyn Model, logical: &str) -> FieldResult<Value> {
        let field = self.resolver.resolve(instance, logical)?;
        Ok(ops::read_value(instance, &field))
    }

    /// Whether the field `logical` resolves to holds `true`.
    pub fn is(&self, instance: &dyn Model, logical: &str) -> FieldResult<bool> {
        let field = self.resolver.resolve(instance, logical)?;
        Ok(ops::read_flag(instance, &field))
    }

    fn run(
        &self,
        instance: &mut dyn Model,
        verb: Verb,
        logical: &str,
        request: &str,
        arg: Option<Value>,
    ) -> AccessResult<Outcome> {
        let def = instance.model_def(self.resolver.registry())?;

        // Read-only wins over resolution and collection checks.
        if verb.mutates() && def.is_readonly() {
            tracing::debug!(model = %def.name, request, "rejected write to read-only model");
            return Err(FieldError::read_only(&def.name, request).into());
        }

        let field = if verb.targets_collection() {
            self.resolve_collection(&def, logical)?
        } else {
            resolve_field(&def, logical)?
        };

        handler_for(verb)(instance, &def, &field, arg)
    }

    /// Resolve the collection field for ADD/REMOVE: the logical name as
    /// given, then with the collection suffix appended. Only an unknown
    /// name moves on to the suffixed form, and if that fails too the error
    /// for the name as given is returned.
    fn resolve_collection(&self, def: &ModelDef, logical: &str) -> FieldResult<String> {
        let err = match resolve_field(def, logical) {
            Ok(field) => return Ok(field),
            Err(err) if err.is_unknown_name() => err,
            Err(err) => return Err(err),
        };

        let suffix = self.config.collection_suffix.as_deref().filter(|s| !s.is_empty());
        match suffix {
            Some(suffix) => resolve_field(def, &format!("{logical}{suffix}")).map_err(|_| err),
            None => Err(err),
        }
    }
}
