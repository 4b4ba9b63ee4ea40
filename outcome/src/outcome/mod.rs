//! Success-or-failure values, with and without a payload.

mod constructors;
mod conversions;
mod types;
#[cfg(feature = "serde")]
mod wire;

pub use types::{Outcome, ValueOutcome};

#[cfg(test)]
mod tests;
