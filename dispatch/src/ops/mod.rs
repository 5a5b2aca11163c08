//! Verb operation implementations.
//!
//! Each group of verbs (read, write, collection) is implemented in its own
//! module, plus the legacy fallback for requests no verb matches.

mod collection;
mod legacy;
mod read;
mod write;

pub use collection::{execute_add, execute_remove};
pub use legacy::execute_fallback;
pub use read::{execute_get, execute_is, read_flag, read_value};
pub use write::execute_set;
