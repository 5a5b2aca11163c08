//! RIMO Model
//!
//! The capability contract a host object model must satisfy, and a
//! dynamic implementation of it.
//!
//! # Module Structure
//!
//! - `host` - The `Model` trait: model id, field cache, raw field access
//! - `cache` - Per-instance `FieldNameCache`
//! - `record` - `Record`, a field map bound to a registered model

mod cache;
mod host;
mod record;

pub use cache::FieldNameCache;
pub use host::Model;
pub use record::Record;
