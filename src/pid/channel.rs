// src/pid/channel.rs

//! # PID Channel State
//!
//! This module provides the state held by one control channel (yaw, roll or
//! pitch). A channel is a plain value: it owns its gains, limits, error
//! history and integral accumulator, and it only changes when its owner calls
//! one of the calculation methods or one of the setters below. Channels never
//! reference each other.

use core::cmp::Ordering;

use crate::{ChannelConfig, LimitsError, Number};

/// Default magnitude of the integral term limits.
pub const DEFAULT_INTEGRAL_LIMIT: i16 = 400;

/// Default magnitude of the output limits.
pub const DEFAULT_OUTPUT_LIMIT: i16 = 800;

/// State of a single PID control channel.
///
/// The error window `err0, err1, err2` (oldest to newest) is used in full
/// by the incremental strategy. The positional strategy uses `err1` and
/// `err2`, and the attitude strategies only use `err1`. The accumulator
/// `sum_err` is never touched by the incremental strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidChannel<T: Number> {
    pub(super) kp: T,
    pub(super) ki: T,
    pub(super) kd: T,
    pub(super) err0: T,
    pub(super) err1: T,
    pub(super) err2: T,
    pub(super) sum_err: T,
    pub(super) set_point: T,
    pub(super) output: T,
    pub(super) ki_min: T,
    pub(super) ki_max: T,
    pub(super) out_min: T,
    pub(super) out_max: T,
}

impl<T: Number> PidChannel<T> {
    /// Creates a channel with zero gains, zero state and default limits.
    pub fn new() -> Self {
        let integral_limit = T::saturating_from_int(DEFAULT_INTEGRAL_LIMIT);
        let output_limit = T::saturating_from_int(DEFAULT_OUTPUT_LIMIT);
        PidChannel {
            kp: T::zero(),
            ki: T::zero(),
            kd: T::zero(),
            err0: T::zero(),
            err1: T::zero(),
            err2: T::zero(),
            sum_err: T::zero(),
            set_point: T::zero(),
            output: T::zero(),
            ki_min: -integral_limit,
            ki_max: integral_limit,
            out_min: -output_limit,
            out_max: output_limit,
        }
    }

    /// Creates a channel and applies gains, set point and limits from `config`.
    ///
    /// Fails if either limit pair in `config` is flipped or unordered.
    pub fn with_config(config: ChannelConfig<T>) -> Result<Self, LimitsError> {
        let mut pid = Self::new();
        pid.set_gains(config.kp, config.ki, config.kd);
        pid.set_set_point(config.set_point);
        pid.set_integral_limits(config.integral_min, config.integral_max)?;
        pid.set_output_limits(config.output_min, config.output_max)?;
        Ok(pid)
    }

    /// Restores every gain, error term, accumulator, set point and output
    /// to zero and the limits to their defaults.
    ///
    /// This must be called before reusing a channel for a new session.
    pub fn reset(&mut self) {
        *self = Self::new();

        #[cfg(feature = "defmt")]
        defmt::debug!("pid channel reset to defaults");
    }

    /// Proportional gain.
    pub fn kp(&self) -> T {
        self.kp
    }

    /// Integral gain.
    pub fn ki(&self) -> T {
        self.ki
    }

    /// Derivative (or rate damping) gain.
    pub fn kd(&self) -> T {
        self.kd
    }

    /// Replaces all three gains at once.
    pub fn set_gains(&mut self, kp: T, ki: T, kd: T) -> &mut Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }

    /// Sets the proportional gain.
    pub fn set_kp(&mut self, kp: T) -> &mut Self {
        self.kp = kp;
        self
    }

    /// Sets the integral gain.
    pub fn set_ki(&mut self, ki: T) -> &mut Self {
        self.ki = ki;
        self
    }

    /// Sets the derivative gain.
    pub fn set_kd(&mut self, kd: T) -> &mut Self {
        self.kd = kd;
        self
    }

    /// Reference value measurements are compared against.
    pub fn set_point(&self) -> T {
        self.set_point
    }

    /// Sets the reference value measurements are compared against.
    pub fn set_set_point(&mut self, set_point: T) -> &mut Self {
        self.set_point = set_point;
        self
    }

    /// Error window as `(err0, err1, err2)`, oldest first.
    pub fn error_window(&self) -> (T, T, T) {
        (self.err0, self.err1, self.err2)
    }

    /// Running error accumulation used by the positional and attitude strategies.
    pub fn integral_sum(&self) -> T {
        self.sum_err
    }

    /// Last saturated output.
    ///
    /// For the attitude strategies this is the value before the final sign
    /// flip applied to the returned command.
    pub fn output(&self) -> T {
        self.output
    }

    /// Integral term limits as `(min, max)`.
    pub fn integral_limits(&self) -> (T, T) {
        (self.ki_min, self.ki_max)
    }

    /// Output limits as `(min, max)`.
    pub fn output_limits(&self) -> (T, T) {
        (self.out_min, self.out_max)
    }

    /// Installs new integral term limits.
    ///
    /// The previous limits are kept if `min > max` or either bound is NaN.
    pub fn set_integral_limits(&mut self, min: T, max: T) -> Result<&mut Self, LimitsError> {
        if !ordered(min, max) {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected integral limits");
            return Err(LimitsError::InvalidIntegralLimits);
        }
        self.ki_min = min;
        self.ki_max = max;
        Ok(self)
    }

    /// Installs new output limits.
    ///
    /// The previous limits are kept if `min > max` or either bound is NaN.
    pub fn set_output_limits(&mut self, min: T, max: T) -> Result<&mut Self, LimitsError> {
        if !ordered(min, max) {
            #[cfg(feature = "defmt")]
            defmt::warn!("rejected output limits");
            return Err(LimitsError::InvalidOutputLimits);
        }
        self.out_min = min;
        self.out_max = max;
        Ok(self)
    }

    /// Returns true if the last output sits on one of the output limits.
    pub fn is_saturated(&self) -> bool {
        self.output <= self.out_min || self.out_max <= self.output
    }

    /// Clamps an integral term to the integral limits.
    pub(super) fn clamp_integral(&self, term: T) -> T {
        term.clamp(self.ki_min, self.ki_max)
    }

    /// Clamps `value` to the output limits and stores it as the new output.
    pub(super) fn saturate(&mut self, value: T) -> T {
        self.output = value.clamp(self.out_min, self.out_max);
        self.output
    }
}

impl<T: Number> Default for PidChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered<T: Number>(min: T, max: T) -> bool {
    matches!(
        min.partial_cmp(&max),
        Some(Ordering::Less | Ordering::Equal)
    )
}
