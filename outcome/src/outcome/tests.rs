//! Unit tests for outcome construction, access, and conversion.

use rstest::{fixture, rstest};

use super::{Outcome, ValueOutcome};
use crate::{ContractViolation, DomainError};

#[fixture]
fn overlap() -> DomainError {
    DomainError::new("Booking.Overlap", "The current booking is overlapping with an existing one")
}

#[rstest]
fn success_has_no_error() {
    let outcome: Outcome = Outcome::success();
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.error(), &DomainError::NONE);
}

#[rstest]
fn failure_keeps_its_error(overlap: DomainError) {
    let outcome = Outcome::failure(overlap.clone());
    assert!(outcome.is_failure());
    assert_eq!(outcome.into_error(), overlap);
}

#[rstest]
#[should_panic(expected = "an outcome cannot be a failure and not contain an error")]
fn failure_rejects_the_sentinel() {
    let _outcome = Outcome::failure(DomainError::NONE);
}

#[rstest]
#[should_panic(expected = "an outcome cannot be successful and contain an error")]
fn success_with_error_panics(overlap: DomainError) {
    let _outcome = Outcome::from_parts(true, overlap);
}

#[rstest]
fn try_from_parts_reports_instead_of_panicking(overlap: DomainError) {
    assert_eq!(
        Outcome::try_from_parts(true, overlap),
        Err(ContractViolation::SuccessWithError)
    );
    assert_eq!(
        Outcome::try_from_parts(false, DomainError::NONE),
        Err(ContractViolation::FailureWithoutError)
    );
}

#[rstest]
fn value_success_exposes_the_value() {
    let outcome: ValueOutcome<u32> = ValueOutcome::success(42);
    assert!(outcome.is_success());
    assert_eq!(*outcome.value(), 42);
    assert_eq!(outcome.into_value(), 42);
}

#[rstest]
fn success_accepts_an_empty_payload() {
    let outcome: ValueOutcome<Option<u32>> = ValueOutcome::success(None);
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), &None);
}

#[rstest]
#[should_panic(expected = "the value of a failure outcome can not be accessed")]
fn value_of_failure_panics(overlap: DomainError) {
    let outcome: ValueOutcome<u32> = ValueOutcome::failure(overlap);
    let _outcome = outcome.value();
}

#[rstest]
#[should_panic(expected = "the value of a failure outcome can not be accessed")]
fn into_value_of_failure_panics(overlap: DomainError) {
    let outcome: ValueOutcome<u32> = ValueOutcome::failure(overlap);
    let _outcome = outcome.into_value();
}

#[rstest]
fn create_classifies_absent_values() {
    let present: ValueOutcome<&str> = ValueOutcome::create(Some("hello"));
    assert_eq!(*present.value(), "hello");

    let absent: ValueOutcome<&str> = ValueOutcome::create(None);
    assert!(absent.is_failure());
    assert_eq!(absent.error(), &DomainError::NULL_VALUE);
}

#[rstest]
fn from_parts_discards_the_value_of_a_failure(overlap: DomainError) {
    let outcome = ValueOutcome::from_parts(Some("stale"), false, overlap.clone());
    assert_eq!(outcome, ValueOutcome::failure(overlap));
}

#[rstest]
#[should_panic(expected = "a successful outcome must carry a value")]
fn from_parts_requires_a_value_on_success() {
    let _outcome: ValueOutcome<u8> = ValueOutcome::from_parts(None, true, DomainError::NONE);
}

#[rstest]
#[case(None, true, DomainError::NONE, ContractViolation::MissingValue)]
#[case(Some(1), true, DomainError::NULL_VALUE, ContractViolation::SuccessWithError)]
#[case(Some(1), false, DomainError::NONE, ContractViolation::FailureWithoutError)]
fn try_from_parts_rejects_inconsistent_triples(
    #[case] value: Option<u8>,
    #[case] is_success: bool,
    #[case] error: DomainError,
    #[case] expected: ContractViolation,
) {
    assert_eq!(
        ValueOutcome::try_from_parts(value, is_success, error),
        Err(expected)
    );
}

#[rstest]
fn option_conversion_matches_create() {
    let converted: ValueOutcome<String> = Some(String::from("x")).into();
    assert_eq!(converted, ValueOutcome::create(Some(String::from("x"))));

    let absent: ValueOutcome<String> = None.into();
    assert_eq!(absent, ValueOutcome::create(None));
}

#[rstest]
fn status_drops_the_payload(overlap: DomainError) {
    let ok: Outcome = ValueOutcome::<_, DomainError>::success('a').into();
    assert_eq!(ok, Outcome::success());

    let failed = ValueOutcome::<char>::failure(overlap.clone());
    assert_eq!(failed.status(), &Outcome::failure(overlap.clone()));
    assert_eq!(Outcome::from(failed), Outcome::failure(overlap));
}

#[rstest]
fn results_bridge_both_forms(overlap: DomainError) {
    assert_eq!(Outcome::<DomainError>::success().into_result(), Ok(()));
    assert_eq!(
        Result::<(), _>::from(Outcome::failure(overlap.clone())),
        Err(overlap.clone())
    );

    assert_eq!(ValueOutcome::<_, DomainError>::success(3).into_result(), Ok(3));
    assert_eq!(
        Result::<u8, _>::from(ValueOutcome::failure(overlap.clone())),
        Err(overlap)
    );
}
