//! Validating constructors for [`Outcome`] and [`ValueOutcome`].
//!
//! Every constructor ends in `check_parts`, including the factories whose
//! arguments are valid by construction.

use crate::{
    ErrorInfo,
    violation::{ContractViolation, check_parts, raise},
};

use super::{Outcome, ValueOutcome};

impl<E: ErrorInfo> Outcome<E> {
    /// A successful outcome carrying the `none` error.
    #[must_use]
    #[track_caller]
    pub fn success() -> Self {
        Self::from_parts(true, E::none())
    }

    /// A failed outcome carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics when `error` is the `none` sentinel.
    ///
    /// ```should_panic
    /// use outcome::{DomainError, Outcome};
    ///
    /// let _ = Outcome::failure(DomainError::NONE);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn failure(error: E) -> Self {
        Self::from_parts(false, error)
    }

    /// Builds an outcome from a success flag and an error.
    ///
    /// # Panics
    ///
    /// Panics when a success carries a real error or a failure carries the
    /// `none` sentinel. Use [`Self::try_from_parts`] for untrusted input.
    #[must_use]
    #[track_caller]
    pub fn from_parts(is_success: bool, error: E) -> Self {
        if let Err(violation) = check_parts(is_success, &error) {
            raise(violation, &error)
        }
        Self { is_success, error }
    }

    /// Builds an outcome from a success flag and an error, reporting an
    /// inconsistent pair instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::SuccessWithError`] or
    /// [`ContractViolation::FailureWithoutError`] when the pair is
    /// inconsistent.
    pub fn try_from_parts(is_success: bool, error: E) -> Result<Self, ContractViolation> {
        check_parts(is_success, &error)?;
        Ok(Self { is_success, error })
    }
}

impl<T, E: ErrorInfo> ValueOutcome<T, E> {
    /// A successful outcome carrying `value`.
    ///
    /// The value is taken as given; use [`Self::create`] to classify an
    /// absent value as a failure.
    #[must_use]
    #[track_caller]
    pub fn success(value: T) -> Self {
        Self::from_parts(Some(value), true, E::none())
    }

    /// A failed outcome carrying `error` and no value.
    ///
    /// # Panics
    ///
    /// Panics when `error` is the `none` sentinel.
    #[must_use]
    #[track_caller]
    pub fn failure(error: E) -> Self {
        Self::from_parts(None, false, error)
    }

    /// Wraps a possibly absent value.
    ///
    /// A present value becomes a success; an absent one becomes a failure
    /// tagged with [`ErrorInfo::null_value`].
    ///
    /// ```
    /// use outcome::{DomainError, ValueOutcome};
    ///
    /// let hello: ValueOutcome<&str> = ValueOutcome::create(Some("hello"));
    /// assert_eq!(*hello.value(), "hello");
    ///
    /// let absent: ValueOutcome<&str> = ValueOutcome::create(None);
    /// assert_eq!(absent.error(), &DomainError::NULL_VALUE);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn create(maybe_value: Option<T>) -> Self {
        match maybe_value {
            Some(value) => Self::success(value),
            None => {
                tracing::debug!("absent value wrapped as a null-value failure");
                Self::failure(E::null_value())
            }
        }
    }

    /// Rebuilds an outcome from its three stored fields.
    ///
    /// This is the path used when restoring outcomes from a cache or another
    /// trusted store. A value supplied alongside a failure is dropped.
    ///
    /// # Panics
    ///
    /// Panics when the flag and error are inconsistent, or when a success has
    /// no value. Use [`Self::try_from_parts`] for untrusted input.
    #[must_use]
    #[track_caller]
    pub fn from_parts(value: Option<T>, is_success: bool, error: E) -> Self {
        let status = Outcome::from_parts(is_success, error);
        if status.is_success() && value.is_none() {
            raise(ContractViolation::MissingValue, status.error())
        }
        Self::attach(status, value)
    }

    /// Rebuilds an outcome from its three stored fields, reporting any
    /// inconsistency instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] when the flag and error disagree or a
    /// success has no value.
    pub fn try_from_parts(
        value: Option<T>,
        is_success: bool,
        error: E,
    ) -> Result<Self, ContractViolation> {
        let status = Outcome::try_from_parts(is_success, error)?;
        if status.is_success() && value.is_none() {
            return Err(ContractViolation::MissingValue);
        }
        Ok(Self::attach(status, value))
    }

    /// Pairs a validated status with its value, dropping the value of a failure.
    fn attach(status: Outcome<E>, value: Option<T>) -> Self {
        Self {
            value: value.filter(|_| status.is_success()),
            status,
        }
    }
}
