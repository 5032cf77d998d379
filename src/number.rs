// src/number.rs

//! Numeric requirements shared by every controller in the crate.
//!
//! The controllers are generic so the same code runs on `f32`, `f64`
//! or a fixed-point type such as `fixed::types::I16F16`.

use num_traits::{Bounded, FromPrimitive};
use piddiy::Number as PiddiyNumber;

/// Custom trait to encapsulate base number requirements.
pub trait Number: PiddiyNumber + FromPrimitive + Bounded {
    /// Clamps generic PartialOrd values within a given range.
    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if max < self {
            max
        } else {
            self
        }
    }

    /// Absolute value built from comparison and negation only.
    fn magnitude(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }

    /// Adds `rhs`, saturating at the type's bounds instead of overflowing.
    ///
    /// Fixed-point types panic or wrap on overflow, which would flip the
    /// sign of a long-running accumulator. NaN operands still yield NaN.
    fn bounded_add(self, rhs: Self) -> Self {
        let zero = Self::zero();
        if rhs > zero && self > Self::max_value() - rhs {
            Self::max_value()
        } else if rhs < zero && self < Self::min_value() - rhs {
            Self::min_value()
        } else {
            self + rhs
        }
    }

    /// Converts a small integer constant, saturating at the type's bounds
    /// when the value is not representable.
    fn saturating_from_int(value: i16) -> Self {
        Self::from_i16(value).unwrap_or_else(|| {
            if value < 0 {
                Self::min_value()
            } else {
                Self::max_value()
            }
        })
    }
}

impl<T: PiddiyNumber + FromPrimitive + Bounded> Number for T {}
