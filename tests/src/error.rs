//! Error types for scenario runs.

use rimo_core::FieldError;
use rimo_registry::RegistryError;
use thiserror::Error;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Registry build failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Cannot create instance of {model}: {source}")]
    Instance {
        model: String,
        #[source]
        source: FieldError,
    },

    #[error("Scenario {0} names no model")]
    NoModel(String),

    #[error("Step {step}: {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn instance(model: impl Into<String>, source: FieldError) -> Self {
        Self::Instance {
            model: model.into(),
            source,
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
