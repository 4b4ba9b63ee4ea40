//! Conversions between outcomes, options, and results.

use crate::ErrorInfo;

use super::{Outcome, ValueOutcome};

/// Same as [`ValueOutcome::create`].
///
/// ```
/// use outcome::ValueOutcome;
///
/// let greeting: ValueOutcome<&str> = Some("x").into();
/// assert_eq!(*greeting.value(), "x");
/// ```
impl<T, E: ErrorInfo> From<Option<T>> for ValueOutcome<T, E> {
    #[track_caller]
    fn from(maybe_value: Option<T>) -> Self {
        Self::create(maybe_value)
    }
}

/// Drops the payload, keeping the status and error.
impl<T, E> From<ValueOutcome<T, E>> for Outcome<E> {
    fn from(outcome: ValueOutcome<T, E>) -> Self {
        outcome.status
    }
}

impl<E> From<Outcome<E>> for Result<(), E> {
    fn from(outcome: Outcome<E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<ValueOutcome<T, E>> for Result<T, E> {
    fn from(outcome: ValueOutcome<T, E>) -> Self {
        outcome.into_result()
    }
}
