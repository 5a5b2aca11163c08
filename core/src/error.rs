//! Error types raised by field resolution and accessor dispatch.

use thiserror::Error;

/// Result type for field resolution.
pub type FieldResult<T> = Result<T, FieldError>;

/// Result type for accessor dispatch.
pub type AccessResult<T> = Result<T, AccessError>;

/// A request could not be mapped to a usable field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown model: {model}")]
    UnknownModel { model: String },

    #[error("Cannot resolve field '{logical}' on model {model}{}", describe_candidate(.candidate))]
    Unresolved {
        model: String,
        logical: String,
        candidate: Option<String>,
    },

    #[error("Field '{logical}' is not listed in the strict access map of model {model}")]
    StrictRejected { model: String, logical: String },

    #[error("Model {model} is read-only: {request} rejected")]
    ReadOnly { model: String, request: String },

    #[error("Access map of model {model} must be declared at model level, not per instance")]
    MisdeclaredAccessMap { model: String },

    #[error("Unrecognized request '{request}' with {arg_count} argument(s)")]
    UnrecognizedRequest { request: String, arg_count: usize },
}

fn describe_candidate(candidate: &Option<String>) -> String {
    match candidate {
        Some(c) => format!(" (tried '{}')", c),
        None => String::new(),
    }
}

impl FieldError {
    pub fn unknown_model(model: impl Into<String>) -> Self {
        Self::UnknownModel {
            model: model.into(),
        }
    }

    pub fn unresolved(
        model: impl Into<String>,
        logical: impl Into<String>,
        candidate: Option<String>,
    ) -> Self {
        Self::Unresolved {
            model: model.into(),
            logical: logical.into(),
            candidate,
        }
    }

    pub fn strict_rejected(model: impl Into<String>, logical: impl Into<String>) -> Self {
        Self::StrictRejected {
            model: model.into(),
            logical: logical.into(),
        }
    }

    pub fn read_only(model: impl Into<String>, request: impl Into<String>) -> Self {
        Self::ReadOnly {
            model: model.into(),
            request: request.into(),
        }
    }

    pub fn misdeclared_access_map(model: impl Into<String>) -> Self {
        Self::MisdeclaredAccessMap {
            model: model.into(),
        }
    }

    pub fn unrecognized_request(request: impl Into<String>, arg_count: usize) -> Self {
        Self::UnrecognizedRequest {
            request: request.into(),
            arg_count,
        }
    }

    /// The logical name the caller asked for, when the error concerns one.
    pub fn logical_name(&self) -> Option<&str> {
        match self {
            Self::Unresolved { logical, .. } | Self::StrictRejected { logical, .. } => {
                Some(logical)
            }
            _ => None,
        }
    }

    /// True when the model simply has no field for the requested name, as
    /// opposed to a policy or configuration failure.
    pub fn is_unknown_name(&self) -> bool {
        matches!(self, Self::Unresolved { .. } | Self::StrictRejected { .. })
    }

    /// The concrete field name that was tried, if any.
    pub fn candidate(&self) -> Option<&str> {
        match self {
            Self::Unresolved { candidate, .. } => candidate.as_deref(),
            _ => None,
        }
    }
}

/// A collection verb targeted a field that does not hold a list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{field}' on model {model} is not a collection (holds {actual})")]
pub struct CollectionError {
    pub model: String,
    pub field: String,
    pub actual: String,
}

impl CollectionError {
    pub fn new(
        model: impl Into<String>,
        field: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            field: field.into(),
            actual: actual.into(),
        }
    }
}

/// Any failure surfaced by accessor dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

impl AccessError {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    pub fn as_field(&self) -> Option<&FieldError> {
        match self {
            Self::Field(e) => Some(e),
            Self::Collection(_) => None,
        }
    }
}
