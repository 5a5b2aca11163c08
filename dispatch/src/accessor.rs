//! Explicit property-style access to one model instance.

use rimo_core::{AccessResult, FieldResult, Value};
use rimo_model::Model;

use crate::dispatcher::Dispatcher;
use crate::result::Outcome;
use crate::verb::Verb;

/// Binds a dispatcher to a single instance.
///
/// Names are logical names; their first character is case-insensitive.
/// Mutating methods return `&mut Self` so calls can be chained.
pub struct Accessor<'a, 'r> {
    dispatcher: &'a Dispatcher<'r>,
    instance: &'a mut dyn Model,
}

impl<'a, 'r> Accessor<'a, 'r> {
    pub fn new(dispatcher: &'a Dispatcher<'r>, instance: &'a mut dyn Model) -> Self {
        Self {
            dispatcher,
            instance,
        }
    }

    pub fn get(&self, name: &str) -> FieldResult<Value> {
        self.dispatcher.get(&*self.instance, name)
    }

    pub fn is(&self, name: &str) -> FieldResult<bool> {
        self.dispatcher.is(&*self.instance, name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> AccessResult<&mut Self> {
        self.apply(Verb::Set, name, value.into())
    }

    pub fn add(&mut self, name: &str, value: impl Into<Value>) -> AccessResult<&mut Self> {
        self.apply(Verb::Add, name, value.into())
    }

    pub fn remove(&mut self, name: &str, value: impl Into<Value>) -> AccessResult<&mut Self> {
        self.apply(Verb::Remove, name, value.into())
    }

    /// Whether `name` resolves to a field. Never fails.
    pub fn has(&self, name: &str) -> bool {
        self.dispatcher.resolver().has(&*self.instance, name)
    }

    /// Dispatch a raw request such as `getAmount`.
    pub fn call(&mut self, request: &str, args: Vec<Value>) -> AccessResult<Outcome> {
        self.dispatcher.dispatch(&mut *self.instance, request, args)
    }

    pub fn instance(&self) -> &dyn Model {
        &*self.instance
    }

    /// Release the instance.
    pub fn into_inner(self) -> &'a mut dyn Model {
        self.instance
    }

    fn apply(&mut self, verb: Verb, name: &str, value: Value) -> AccessResult<&mut Self> {
        self.dispatcher
            .apply(&mut *self.instance, verb, name, Some(value))?;
        Ok(self)
    }
}
