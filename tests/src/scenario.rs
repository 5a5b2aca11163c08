//! Scenario definition.

use rimo_core::{Attributes, Value};
use rimo_dispatch::DispatchConfig;
use rimo_model::Record;
use rimo_registry::Registry;

use crate::assertion::Assertion;
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// A single request and what it must produce.
#[derive(Debug)]
pub struct Step {
    pub request: String,
    pub args: Vec<Value>,
    pub assertion: Assertion,
}

/// A sequence of requests against one fresh instance of a model.
#[derive(Debug, Default)]
pub struct Scenario {
    name: String,
    model: Option<String>,
    config: DispatchConfig,
    seed: Attributes,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The model the scenario instantiates.
    pub fn model(mut self, name: impl Into<String>) -> Self {
        self.model = Some(name.into());
        self
    }

    pub fn config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Raw field values written before the first step.
    pub fn seed(mut self, fields: Attributes) -> Self {
        self.seed.extend(fields);
        self
    }

    /// Add a zero-argument step.
    pub fn step<F>(self, request: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.step_args(request, Vec::new(), f)
    }

    /// Add a one-argument step.
    pub fn step_with<F>(self, request: impl Into<String>, arg: impl Into<Value>, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.step_args(request, vec![arg.into()], f)
    }

    /// Add a step with any number of arguments.
    pub fn step_args<F>(mut self, request: impl Into<String>, args: Vec<Value>, f: F) -> Self
    where
        F: FnOnce(Assertion) -> Assertion,
    {
        self.steps.push(Step {
            request: request.into(),
            args,
            assertion: f(Assertion::new()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn dispatch_config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn seed_fields(&self) -> &Attributes {
        &self.seed
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run against `registry`, returning the instance in its final state.
    pub fn run(&self, registry: &Registry) -> ScenarioResult<Record> {
        Runner::new(self, registry).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_steps() {
        let scenario = Scenario::new("deposit")
            .model("Account")
            .step_with("setAmount", 100i64, |a| a.updated())
            .step("getAmount", |a| a.value(100i64))
            .step_args("setAmount", vec![], |a| a);

        assert_eq!(scenario.name(), "deposit");
        assert_eq!(scenario.model_name(), Some("Account"));
        assert_eq!(scenario.steps().len(), 3);
        assert_eq!(scenario.steps()[0].args, vec![Value::Int(100)]);
        assert!(scenario.steps()[2].args.is_empty());
    }
}
