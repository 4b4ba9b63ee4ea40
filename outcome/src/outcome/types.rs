//! Outcome types and their accessors.

use crate::{
    DomainError, ErrorInfo,
    violation::{ContractViolation, raise},
};

/// Completion status of an operation that produces no value.
///
/// Fields are private and only reachable through validating constructors, so
/// an `Outcome` is either successful with [`ErrorInfo::none`] or failed with a
/// real error.
///
/// # Examples
///
/// ```
/// use outcome::{DomainError, Outcome};
///
/// let done: Outcome = Outcome::success();
/// assert!(done.is_success());
/// assert_eq!(done.error(), &DomainError::NONE);
///
/// let cancelled: Outcome = Outcome::failure(DomainError::new("Booking.Cancelled", "Booking was cancelled"));
/// assert!(cancelled.is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<E = DomainError> {
    pub(super) is_success: bool,
    pub(super) error: E,
}

impl<E> Outcome<E> {
    /// Returns `true` when the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` when the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// The error describing the failure, or the `none` sentinel on success.
    #[must_use]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the outcome, returning its error.
    #[must_use]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Converts into a [`Result`] so failures can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is a failure.
    pub fn into_result(self) -> Result<(), E> {
        if self.is_success {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

/// Outcome of an operation that produces a `T` on success.
///
/// The value is only reachable while [`ValueOutcome::is_success`] holds;
/// asking a failure for its value is a programming error and panics.
///
/// # Examples
///
/// ```
/// use outcome::{DomainError, ValueOutcome};
///
/// fn find_guest(id: u32) -> ValueOutcome<String> {
///     if id == 7 {
///         ValueOutcome::success(String::from("Ada"))
///     } else {
///         ValueOutcome::failure(DomainError::new("Guest.NotFound", "Guest was not found"))
///     }
/// }
///
/// let guest = find_guest(7);
/// assert_eq!(guest.value(), "Ada");
///
/// let missing = find_guest(8);
/// assert_eq!(missing.error().code(), "Guest.NotFound");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueOutcome<T, E = DomainError> {
    pub(super) status: Outcome<E>,
    pub(super) value: Option<T>,
}

impl<T, E> ValueOutcome<T, E> {
    /// Returns `true` when the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns `true` when the operation failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    /// The error describing the failure, or the `none` sentinel on success.
    #[must_use]
    pub const fn error(&self) -> &E {
        self.status.error()
    }

    /// The payload-free view of this outcome.
    #[must_use]
    pub const fn status(&self) -> &Outcome<E> {
        &self.status
    }

    /// Converts into a [`Result`] so failures can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is a failure.
    pub fn into_result(self) -> Result<T, E> {
        let Self { status, value } = self;
        value.ok_or_else(|| status.into_error())
    }
}

impl<T, E: ErrorInfo> ValueOutcome<T, E> {
    /// The value produced by a successful operation.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. Check [`Self::is_success`] first.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        let Some(value) = self.value.as_ref() else {
            raise(ContractViolation::ValueOfFailure, self.error())
        };
        value
    }

    /// Consumes the outcome, returning the value of a successful operation.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is a failure. Check [`Self::is_success`] first.
    #[must_use]
    #[track_caller]
    pub fn into_value(self) -> T {
        let Self {
            status,
            value: maybe_value,
        } = self;
        let Some(value) = maybe_value else {
            raise(ContractViolation::ValueOfFailure, status.error())
        };
        value
    }
}
