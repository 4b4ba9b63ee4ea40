//! Error descriptors carried by outcomes.

use std::{borrow::Cow, error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes why an operation failed.
///
/// Outcomes only rely on equality and two reserved values: [`ErrorInfo::none`],
/// stored by every successful outcome, and [`ErrorInfo::null_value`], used when
/// [`crate::ValueOutcome::create`] receives an absent value. Implementors must
/// keep `none() != null_value()`. `Debug` is required so contract violations
/// can be logged with the offending error.
pub trait ErrorInfo: PartialEq + fmt::Debug + Sized {
    /// The sentinel meaning "no error".
    fn none() -> Self;

    /// The error reported when an absent value is wrapped.
    fn null_value() -> Self;

    /// Returns `true` when `self` is the [`ErrorInfo::none`] sentinel.
    #[must_use]
    fn is_none(&self) -> bool {
        *self == Self::none()
    }
}

/// Code and name pair describing a domain failure.
///
/// Codes are short, stable identifiers such as `"Booking.Overlap"`; names are
/// the human-readable explanation.
///
/// # Examples
///
/// ```
/// use outcome::{DomainError, ErrorInfo};
///
/// let overlap = DomainError::new("Booking.Overlap", "The booking overlaps an existing one");
/// assert_eq!(overlap.code(), "Booking.Overlap");
/// assert!(!overlap.is_none());
/// assert!(DomainError::NONE.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainError {
    code: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl DomainError {
    /// The "no error" sentinel: empty code and empty name.
    pub const NONE: Self = Self::from_static("", "");

    /// Reserved error for absent values.
    pub const NULL_VALUE: Self = Self::from_static("Error.NullValue", "Null value was provided");

    /// Build an error from a code and a name.
    #[must_use]
    pub fn new(code: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Build an error from static strings, usable in `const` items.
    ///
    /// ```
    /// use outcome::DomainError;
    ///
    /// const NOT_FOUND: DomainError = DomainError::from_static("Apartment.NotFound", "Apartment was not found");
    /// assert_eq!(NOT_FOUND.name(), "Apartment was not found");
    /// ```
    #[must_use]
    pub const fn from_static(code: &'static str, name: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
        }
    }

    /// Stable identifier of the failure.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable explanation of the failure.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ErrorInfo for DomainError {
    fn none() -> Self {
        Self::NONE
    }

    fn null_value() -> Self {
        Self::NULL_VALUE
    }

    fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for DomainError {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("no error");
        }
        write!(f, "{}: {}", self.code, self.name)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DomainError, ErrorInfo};

    #[rstest]
    #[case(DomainError::NONE, "no error")]
    #[case(DomainError::NULL_VALUE, "Error.NullValue: Null value was provided")]
    #[case(DomainError::new("User.Banned", String::from("User is banned")), "User.Banned: User is banned")]
    fn displays_code_and_name(#[case] error: DomainError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn reserved_values_are_distinct() {
        assert_ne!(DomainError::none(), DomainError::null_value());
        assert!(DomainError::none().is_none());
        assert!(!DomainError::null_value().is_none());
    }

    #[test]
    fn owned_and_borrowed_strings_compare_equal() {
        let owned = DomainError::new(String::from("Error.NullValue"), String::from("Null value was provided"));
        assert_eq!(owned, DomainError::NULL_VALUE);
    }

    #[test]
    fn default_is_the_sentinel() {
        assert!(DomainError::default().is_none());
    }
}
