//! Enumeration of the ways an outcome can be misused.

use thiserror::Error;

/// A broken outcome invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A success was paired with a real error.
    #[error("an outcome cannot be successful and contain an error")]
    SuccessWithError,

    /// A failure was paired with the `none` sentinel.
    #[error("an outcome cannot be a failure and not contain an error")]
    FailureWithoutError,

    /// A successful value outcome was rebuilt without its value.
    #[error("a successful outcome must carry a value")]
    MissingValue,

    /// The value of a failed outcome was requested.
    #[error("the value of a failure outcome can not be accessed")]
    ValueOfFailure,
}
