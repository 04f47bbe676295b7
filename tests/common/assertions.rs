//! Assertions that log both sides before checking.
//!
//! When a byte-exact escape sequence or a palette index mismatches, the
//! debug event shows the escaped strings, which plain `assert_eq!` output
//! makes hard to read.

#![allow(dead_code)]

use std::fmt::Debug;

/// `assert_eq!` that logs expected and actual first.
///
/// ```rust,ignore
/// assert_eq_logged("palette size", colorizer.palette_size(), 232);
/// ```
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );

    tracing::trace!(context = context, "assertion passed");
}

/// Unwrap an `Ok`, logging the error before panicking otherwise.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");

    match result {
        Ok(value) => {
            tracing::trace!(context = context, value = ?value, "assertion passed: got Ok");
            value
        }
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Unwrap an `Err`, for checking which `ColorError` came back.
///
/// ```rust,ignore
/// let error = assert_err_logged("malformed hex", colorizer.quantize("zzzzzz"));
/// ```
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => {
            tracing::trace!(context = context, error = ?e, "assertion passed: got Err");
            e
        }
        Ok(ref value) => {
            tracing::error!(
                context = context,
                value = ?value,
                "assertion failed: expected Err, got Ok"
            );
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Check that an emitted sequence contains a fragment such as `\x1b[38;5;`.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(
        context = context,
        haystack = ?haystack,
        needle = ?needle,
        "asserting contains"
    );

    let found = haystack.contains(needle);
    if !found {
        tracing::error!(
            context = context,
            haystack = ?haystack,
            needle = ?needle,
            "assertion failed: substring not found"
        );
    }

    assert!(found, "{context}: expected {haystack:?} to contain {needle:?}");

    tracing::trace!(context = context, "assertion passed");
}
