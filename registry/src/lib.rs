//! RIMO Registry
//!
//! Runtime lookup of model definitions: declared fields and access maps.
//! The registry is immutable after construction via RegistryBuilder, which
//! runs the one-time shape validation of every access map.

mod builder;
mod registry;
mod types;
mod validation;

pub use builder::{ModelBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::*;
