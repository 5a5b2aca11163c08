//! Dispatch result types.

use rimo_core::Value;

/// Outcome of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A field value (GET, or the legacy fallback).
    Value(Value),
    /// A predicate result (IS).
    Flag(bool),
    /// The instance was modified in place (SET, ADD, REMOVE). The caller
    /// still holds the instance and can keep issuing requests.
    Updated,
}

impl Outcome {
    /// Get the value if this is a Value outcome.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Take the value if this is a Value outcome.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Get the flag if this is a Flag outcome.
    pub fn flag(&self) -> Option<bool> {
        match self {
            Outcome::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, Outcome::Updated)
    }
}
