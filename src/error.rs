// src/error.rs

//! Configuration errors.
//!
//! None of the per-tick calculations can fail. The only fallible
//! operations are the ones that install new limits on a channel.

#[cfg(feature = "std")]
use thiserror::Error;

/// Error returned when a limit pair cannot be installed on a channel.
///
/// A limit pair is valid when `min <= max`. Pairs containing NaN are
/// unordered and therefore rejected as well.
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LimitsError {
    /// The integral term limits are flipped or unordered.
    #[cfg_attr(feature = "std", error("Integral limits are flipped or NAN"))]
    InvalidIntegralLimits = 1,

    /// The output limits are flipped or unordered.
    #[cfg_attr(feature = "std", error("Output limits are flipped or NAN"))]
    InvalidOutputLimits = 2,
}
