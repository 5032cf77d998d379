// src/stabilizer/config.rs

//! Configuration structures for channels and stabilizers.
//!
//! The crate never persists configuration. An external configuration layer
//! builds these values (optionally through `serde`) and re-applies them on
//! every cold start.

use crate::pid::{DEFAULT_INTEGRAL_LIMIT, DEFAULT_OUTPUT_LIMIT};
use crate::{Axis, Number, Strategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gains, set point and limits for one PID channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelConfig<T: Number> {
    /// Proportional gain.
    pub kp: T,
    /// Integral gain.
    pub ki: T,
    /// Derivative gain, or rate damping gain for the attitude strategies.
    pub kd: T,
    /// Reference value measurements are compared against.
    pub set_point: T,
    /// Lower limit for the integral term.
    pub integral_min: T,
    /// Upper limit for the integral term.
    pub integral_max: T,
    /// Lower limit for the output.
    pub output_min: T,
    /// Upper limit for the output.
    pub output_max: T,
}

impl<T: Number> ChannelConfig<T> {
    /// Creates a configuration with zero gains, a zero set point and the
    /// default limits of +/-400 for the integral term and +/-800 for the
    /// output.
    ///
    /// Example Usage
    /// ```
    /// use channel_pid::{ChannelConfig, PidChannel};
    ///
    /// let mut config = ChannelConfig::<f32>::new();
    /// config.kp = 2.0;
    /// config.ki = 0.1;
    /// config.kd = 0.5;
    ///
    /// let mut pid = PidChannel::with_config(config).unwrap();
    /// assert!((pid.compute_positional(1.0) - 2.6).abs() < 1e-5);
    /// ```
    pub fn new() -> Self {
        let integral_limit = T::saturating_from_int(DEFAULT_INTEGRAL_LIMIT);
        let output_limit = T::saturating_from_int(DEFAULT_OUTPUT_LIMIT);
        Self {
            kp: T::zero(),
            ki: T::zero(),
            kd: T::zero(),
            set_point: T::zero(),
            integral_min: -integral_limit,
            integral_max: integral_limit,
            output_min: -output_limit,
            output_max: output_limit,
        }
    }

    /// Sets all three gains.
    pub fn with_gains(mut self, kp: T, ki: T, kd: T) -> Self {
        self.kp = kp;
        self.ki = ki;
        self.kd = kd;
        self
    }
}

impl<T: Number> Default for ChannelConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a three-axis stabilizer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilizerConfig<T: Number> {
    /// Roll channel configuration.
    pub roll: ChannelConfig<T>,
    /// Pitch channel configuration.
    pub pitch: ChannelConfig<T>,
    /// Yaw channel configuration.
    pub yaw: ChannelConfig<T>,
    /// Strategy run by the roll channel.
    pub roll_strategy: Strategy,
    /// Strategy run by the pitch channel.
    pub pitch_strategy: Strategy,
    /// Strategy run by the yaw channel.
    pub yaw_strategy: Strategy,
}

impl<T: Number> StabilizerConfig<T> {
    /// Creates a configuration with default channels. Roll and pitch run the
    /// attitude strategy and yaw runs the heading-wrapping attitude strategy.
    ///
    /// Example Usage
    /// ```
    /// use channel_pid::{AttitudeStabilizer, FlightStabilizer, StabilizerConfig};
    ///
    /// let mut config = StabilizerConfig::<f32>::new();
    ///
    /// // Set the PID gains for roll, pitch, and yaw.
    /// config.roll = config.roll.with_gains(2.0, 0.01, 0.3);
    /// config.pitch = config.roll;
    /// config.yaw = config.yaw.with_gains(1.5, 0.0, 0.2);
    ///
    /// let mut stabilizer = AttitudeStabilizer::with_config(config).unwrap();
    /// let command = stabilizer.control((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    /// assert_eq!((0.0, 0.0, 0.0), command);
    /// ```
    pub fn new() -> Self {
        Self {
            roll: ChannelConfig::new(),
            pitch: ChannelConfig::new(),
            yaw: ChannelConfig::new(),
            roll_strategy: Strategy::Attitude,
            pitch_strategy: Strategy::Attitude,
            yaw_strategy: Strategy::AttitudeYaw,
        }
    }

    /// Channel configuration for `axis`.
    pub fn channel(&self, axis: Axis) -> &ChannelConfig<T> {
        match axis {
            Axis::Roll => &self.roll,
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
        }
    }

    /// Strategy configured for `axis`.
    pub fn strategy(&self, axis: Axis) -> Strategy {
        match axis {
            Axis::Roll => self.roll_strategy,
            Axis::Pitch => self.pitch_strategy,
            Axis::Yaw => self.yaw_strategy,
        }
    }
}

impl<T: Number> Default for StabilizerConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_config_defaults() {
        let config = ChannelConfig::<f32>::new();
        assert_eq!((0.0, 0.0, 0.0), (config.kp, config.ki, config.kd));
        assert_eq!(0.0, config.set_point);
        assert_eq!((-400.0, 400.0), (config.integral_min, config.integral_max));
        assert_eq!((-800.0, 800.0), (config.output_min, config.output_max));
    }

    #[test]
    fn test_stabilizer_config_strategies() {
        let config = StabilizerConfig::<f32>::default();
        assert_eq!(Strategy::Attitude, config.strategy(Axis::Roll));
        assert_eq!(Strategy::Attitude, config.strategy(Axis::Pitch));
        assert_eq!(Strategy::AttitudeYaw, config.strategy(Axis::Yaw));
        assert_eq!(&ChannelConfig::new(), config.channel(Axis::Yaw));
    }
}
