// src/strategy.rs

//! # Strategy Selection
//!
//! A channel runs exactly one calculation strategy, chosen when the channel
//! is configured rather than on every tick. [`Channel`] binds a
//! [`PidChannel`] to its [`Strategy`] and exposes the single capability the
//! scheduler needs through [`ChannelController`].

use crate::{ChannelConfig, LimitsError, Number, PidChannel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calculation strategy for one channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Velocity form. The command is a change to apply to the actuator.
    /// See [`PidChannel::compute_incremental`].
    Incremental,
    /// Absolute command with single-tick integral rollback.
    /// See [`PidChannel::compute_positional`].
    Positional,
    /// Angle error with gyro rate damping for roll and pitch.
    /// See [`PidChannel::compute_attitude`].
    Attitude,
    /// Attitude form for a heading that wraps at +/-180 degrees.
    /// See [`PidChannel::compute_attitude_yaw`].
    AttitudeYaw,
}

impl Strategy {
    /// Runs this strategy on `pid` for one tick.
    ///
    /// The incremental and positional strategies only read the
    /// `measurement` field of the sample.
    pub fn compute<T: Number>(self, pid: &mut PidChannel<T>, sample: Sample<T>) -> T {
        match self {
            Strategy::Incremental => pid.compute_incremental(sample.measurement),
            Strategy::Positional => pid.compute_positional(sample.measurement),
            Strategy::Attitude => pid.compute_attitude(sample.measurement, sample.rate),
            Strategy::AttitudeYaw => pid.compute_attitude_yaw(sample.measurement, sample.rate),
        }
    }

    /// Returns true if the strategy consumes [`Sample::rate`].
    pub fn uses_rate(self) -> bool {
        matches!(self, Strategy::Attitude | Strategy::AttitudeYaw)
    }
}

/// Inputs for one control tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    /// Measured process variable, an angle for the attitude strategies.
    pub measurement: T,
    /// Angular rate, typically reported by a gyro.
    pub rate: T,
}

impl<T: Number> Sample<T> {
    /// A sample for strategies that do not use a rate.
    pub fn measurement(measurement: T) -> Self {
        Sample {
            measurement,
            rate: T::zero(),
        }
    }

    /// A sample carrying an angle and an angular rate.
    pub fn attitude(angle: T, rate: T) -> Self {
        Sample {
            measurement: angle,
            rate,
        }
    }
}

/// Advance one tick, produce a bounded command.
pub trait ChannelController<T: Number> {
    /// Consumes the latest sample and returns the new command.
    fn advance(&mut self, sample: Sample<T>) -> T;
}

/// A PID channel bound to the strategy it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel<T: Number> {
    pid: PidChannel<T>,
    strategy: Strategy,
}

impl<T: Number> Channel<T> {
    /// Creates a channel with default gains and limits.
    pub fn new(strategy: Strategy) -> Self {
        Channel {
            pid: PidChannel::new(),
            strategy,
        }
    }

    /// Creates a channel from a config.
    pub fn with_config(strategy: Strategy, config: ChannelConfig<T>) -> Result<Self, LimitsError> {
        Ok(Channel {
            pid: PidChannel::with_config(config)?,
            strategy,
        })
    }

    /// Strategy this channel runs.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Controller state, for telemetry.
    pub fn pid(&self) -> &PidChannel<T> {
        &self.pid
    }

    /// Controller state, for gain scheduling and limit overrides.
    pub fn pid_mut(&mut self) -> &mut PidChannel<T> {
        &mut self.pid
    }

    /// Returns true if the last command sits on an output limit.
    pub fn is_saturated(&self) -> bool {
        self.pid.is_saturated()
    }
}

impl<T: Number> ChannelController<T> for Channel<T> {
    fn advance(&mut self, sample: Sample<T>) -> T {
        self.strategy.compute(&mut self.pid, sample)
    }
}

impl<T: Number> ChannelController<T> for PidChannel<T> {
    /// Runs the positional strategy, the default absolute-command form.
    fn advance(&mut self, sample: Sample<T>) -> T {
        self.compute_positional(sample.measurement)
    }
}
