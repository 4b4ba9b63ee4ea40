//! Misuse of the outcome types.
//!
//! Violations are programming errors. Public constructors and accessors turn
//! them into panics; the `try_*` constructors and deserialisation return them
//! as values instead.

mod signal;
mod types;

pub use types::ContractViolation;

pub(crate) use signal::{check_parts, raise};
