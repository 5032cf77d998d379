// src/test_utils.rs

//! This module contains utilities for testing.

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f32 = 1e-5;

/// Checks if a command or state value matches its expected value within
/// `TEST_TOLERANCE`.
///
/// # Arguments
/// * `target` - The expected value.
/// * `value` - The value produced by the controller.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`. NaN never compares close.
pub fn value_close(target: f32, value: f32) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// Checks if each component of a triple, such as (roll, pitch, yaw)
/// commands or an `(err0, err1, err2)` error window, matches its target.
///
/// # Arguments
/// * `target` - The expected triple.
/// * `value` - The triple produced by the controller.
///
/// # Returns
/// `true` if every component is close as per `value_close`, otherwise `false`.
pub fn triple_close(target: (f32, f32, f32), value: (f32, f32, f32)) -> bool {
    value_close(target.0, value.0)
        && value_close(target.1, value.1)
        && value_close(target.2, value.2)
}
