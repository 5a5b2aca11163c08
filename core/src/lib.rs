//! RIMO Core Types
//!
//! This crate provides the foundational types used throughout RIMO:
//! - Model identifiers (ModelId)
//! - Value types (the Value enum with scalars, lists and object references)
//! - The error types raised by resolution and dispatch
//! - Reserved internal field names

mod error;
mod id;
mod names;
mod value;

pub use error::*;
pub use id::*;
pub use names::*;
pub use value::*;
