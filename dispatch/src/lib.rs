//! RIMO Dispatch
//!
//! Execute accessor-style requests (get/is/set/add/remove) against model
//! instances without a hand-written accessor per field.
//!
//! Responsibilities:
//! - Parse a request name into a verb and a logical field name
//! - Enforce the read-only policy before any mutation
//! - Resolve the logical name and run the verb's operation
//!
//! # Module Structure
//!
//! - `dispatcher` - Main Dispatcher that coordinates requests
//! - `verb` - Verb table and request parsing
//! - `ops/` - Individual verb implementations (read, write, collection, legacy)
//! - `accessor` - Explicit get/set/has wrapper around one instance
//! - `config` - Dispatch options
//! - `result` - Outcome of a dispatched request

mod accessor;
mod config;
mod dispatcher;
mod ops;
mod result;
mod verb;

pub use accessor::Accessor;
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use result::Outcome;
pub use verb::{Request, Verb};
