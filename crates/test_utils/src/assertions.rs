//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use baggage_service::ServiceError;
use core_kernel::{ErrorKind, Money};
use domain_baggage::Checkpoint;

/// Asserts that a result failed with the given kind and returns the error
///
/// # Panics
///
/// Panics if the result is `Ok` or the error is of another kind
pub fn assert_error_kind<T: Debug>(result: Result<T, ServiceError>, expected: ErrorKind) -> ServiceError {
    match result {
        Ok(value) => panic!("Expected {expected}, got Ok({value:?})"),
        Err(err) => {
            assert_eq!(err.kind(), expected, "Unexpected error kind for: {err}");
            err
        }
    }
}

/// Asserts that two Money values have the same currency and amount
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts that a route visits exactly `names`, in order
pub fn assert_route(route: &[Checkpoint], names: &[&str]) {
    let actual: Vec<&str> = route.iter().map(Checkpoint::name).collect();
    assert_eq!(actual, names, "Route mismatch");
}

/// Asserts that route timestamps never go backwards
pub fn assert_route_ordered(route: &[Checkpoint]) {
    for pair in route.windows(2) {
        assert!(
            pair[0].recorded_at() <= pair[1].recorded_at(),
            "Checkpoint {} at {} recorded after {} at {}",
            pair[1].name(),
            pair[1].recorded_at(),
            pair[0].name(),
            pair[0].recorded_at()
        );
    }
}
