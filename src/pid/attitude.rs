// src/pid/attitude.rs

//! # Attitude PID
//!
//! Rate-feedback form for attitude axes. The angle error drives the
//! proportional and integral terms while the gyroscope rate replaces the
//! discrete derivative as a damping term. Both methods return the negated
//! saturated output to match the actuator polarity of these axes.

use crate::{Number, PidChannel};

/// Maps a raw heading error onto the wrap-aware error used by
/// [`PidChannel::compute_attitude_yaw`].
///
/// For `m = |error|`:
/// - `m > 180`, `error < 0` gives `m - 360`
/// - `m > 180`, `error > 0` gives `360 - m`
/// - `m < 180`, `error < 0` gives `m`
/// - otherwise gives `-m`
///
/// Taken together this is the shortest angular path with its sign flipped,
/// so the yaw channel has the opposite polarity to the roll and pitch
/// channels. Errors of exactly 180 degrees map to -180.
///
/// `T` must represent 360 and the largest expected raw error. On narrower
/// types such as `I8F8` both wrap constants saturate to the type's maximum
/// and no wrapping takes place; `I16F16`, `f32` and `f64` are wide enough.
pub fn wrap_heading_error<T: Number>(error: T) -> T {
    let half_turn = T::saturating_from_int(180);
    let full_turn = T::saturating_from_int(360);
    let zero = T::zero();
    let m = error.magnitude();

    if m > half_turn && error < zero {
        m - full_turn
    } else if m > half_turn && error > zero {
        full_turn - m
    } else if m < half_turn && error < zero {
        m
    } else {
        zero - m
    }
}

impl<T: Number> PidChannel<T> {
    /// Advances the attitude strategy for a non-wrapping axis (roll, pitch).
    ///
    /// `err1 = set_point - angle` is accumulated without rollback. The
    /// integral term is clamped to the integral limits while the accumulator
    /// itself keeps growing, saturating at the bounds of `T` rather than
    /// overflowing. The gain products must fit in `T`. Returns
    /// `-clamp(kp * err1 + clamp(ki * sum) - kd * gyro_rate)`.
    pub fn compute_attitude(&mut self, angle: T, gyro_rate: T) -> T {
        let error = self.set_point - angle;
        self.rate_feedback(error, gyro_rate)
    }

    /// Advances the attitude strategy for a heading axis that wraps at
    /// +/-180 degrees.
    ///
    /// Identical to [`compute_attitude`](Self::compute_attitude) except that
    /// the error first goes through [`wrap_heading_error`].
    pub fn compute_attitude_yaw(&mut self, angle: T, gyro_rate: T) -> T {
        let error = wrap_heading_error(self.set_point - angle);
        self.rate_feedback(error, gyro_rate)
    }

    fn rate_feedback(&mut self, error: T, gyro_rate: T) -> T {
        self.err1 = error;
        self.sum_err = self.sum_err.bounded_add(self.err1);

        let p = self.kp * self.err1;
        let i = self.clamp_integral(self.ki * self.sum_err);
        let d = self.kd * gyro_rate;

        -self.saturate(p + i - d)
    }
}
