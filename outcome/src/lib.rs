//! Success-or-failure values for domain operations.
//!
//! An [`Outcome`] records whether an operation completed, and a
//! [`ValueOutcome`] additionally carries the value produced on success. Both
//! pair a success flag with an [`ErrorInfo`] descriptor and refuse to exist in
//! an inconsistent state:
//!
//! * a successful outcome always carries the `none` error; and
//! * a failed outcome always carries a real error.
//!
//! Business failures are ordinary return values to branch on. Misusing the
//! types themselves (building an inconsistent outcome, or reading the value of
//! a failure) is a programming error and panics at the offending call site.
//!
//! # Examples
//!
//! ```
//! use outcome::{DomainError, ValueOutcome};
//!
//! let found: ValueOutcome<&str> = ValueOutcome::create(Some("hello"));
//! assert!(found.is_success());
//! assert_eq!(*found.value(), "hello");
//!
//! let missing: ValueOutcome<&str> = ValueOutcome::create(None);
//! assert!(missing.is_failure());
//! assert_eq!(missing.error(), &DomainError::NULL_VALUE);
//! ```

mod error_info;
mod outcome;
mod violation;

pub use error_info::{DomainError, ErrorInfo};
pub use outcome::{Outcome, ValueOutcome};
pub use violation::ContractViolation;
