//! Detection and reporting of contract violations.

use crate::ErrorInfo;

use super::ContractViolation;

/// Checks the success flag against the error.
///
/// Every construction path funnels through here.
pub(crate) fn check_parts<E: ErrorInfo>(
    is_success: bool,
    error: &E,
) -> Result<(), ContractViolation> {
    match (is_success, error.is_none()) {
        (true, false) => Err(ContractViolation::SuccessWithError),
        (false, true) => Err(ContractViolation::FailureWithoutError),
        _ => Ok(()),
    }
}

/// Logs `violation` and panics at the caller's location.
#[cold]
#[track_caller]
pub(crate) fn raise<E: ErrorInfo>(violation: ContractViolation, error: &E) -> ! {
    tracing::error!(violation = %violation, error = ?error, "outcome contract violated");
    panic!("{violation}");
}
