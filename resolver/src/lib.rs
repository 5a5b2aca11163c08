//! RIMO Resolver
//!
//! Maps the logical field name a caller uses onto the concrete field a
//! model stores, applying the model's access map policy.
//!
//! Resolution steps:
//! 1. Lower-case the first character of the logical name.
//! 2. Without an access map, that name is the candidate.
//! 3. With one, a matching entry supplies the candidate; otherwise the
//!    lower-cased name is used unless the map is strict.
//! 4. The candidate must name a declared field.

mod naming;
mod resolver;

pub use naming::{lower_first, upper_first};
pub use resolver::{resolve_field, FieldResolver};
