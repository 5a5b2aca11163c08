//! RIMO scenario tests.
//!
//! A scenario names a model, optionally seeds field values, and lists
//! requests with the outcome each one must produce:
//!
//! ```ignore
//! Scenario::new("deposit")
//!     .model("Account")
//!     .step_with("setAmount", 100i64, |a| a.updated().field("balance", 100i64))
//!     .step("getBalance", |a| a.value(100i64))
//!     .run(&registry)?;
//! ```

mod error;
pub mod fixtures;
mod scenario;

pub use assertion::{Assertion, ErrorKind};
pub use error::{ScenarioError, ScenarioResult};
pub use runner::Runner;
pub use scenario::{Scenario, Step};

pub mod prelude {
    pub use crate::fixtures;
    pub use crate::{Assertion, ErrorKind, Runner, Scenario, ScenarioError, ScenarioResult};
    pub use rimo_core::{attrs, Value};
    pub use rimo_dispatch::DispatchConfig;
}
