// src/stabilizer/attitude.rs

//! # Attitude Flight Stabilizer
//!
//! Three independently owned PID channels, one per axis. Each call to
//! [`FlightStabilizer::control`] applies the set points and advances every
//! channel exactly once. No data flows between axes: the roll channel never
//! reads pitch or yaw state, and so on.

use crate::{
    Axis, Channel, ChannelController, FlightStabilizer, LimitsError, Number, Sample,
    StabilizerConfig,
};

/// Struct representing the three-axis attitude stabilizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeStabilizer<T: Number> {
    roll: Channel<T>,
    pitch: Channel<T>,
    yaw: Channel<T>,
}

impl<T: Number> AttitudeStabilizer<T> {
    /// Creates a new stabilizer using the provided configuration.
    pub fn with_config(config: StabilizerConfig<T>) -> Result<Self, LimitsError> {
        Ok(AttitudeStabilizer {
            roll: Channel::with_config(config.roll_strategy, config.roll)?,
            pitch: Channel::with_config(config.pitch_strategy, config.pitch)?,
            yaw: Channel::with_config(config.yaw_strategy, config.yaw)?,
        })
    }

    /// Creates a new stabilizer with default settings.
    pub fn new() -> Self {
        let config = StabilizerConfig::<T>::new();
        AttitudeStabilizer {
            roll: Channel::new(config.roll_strategy),
            pitch: Channel::new(config.pitch_strategy),
            yaw: Channel::new(config.yaw_strategy),
        }
    }

    /// Channel driving `axis`.
    pub fn channel(&self, axis: Axis) -> &Channel<T> {
        match axis {
            Axis::Roll => &self.roll,
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
        }
    }

    /// Mutable channel driving `axis`, for gain scheduling.
    pub fn channel_mut(&mut self, axis: Axis) -> &mut Channel<T> {
        match axis {
            Axis::Roll => &mut self.roll,
            Axis::Pitch => &mut self.pitch,
            Axis::Yaw => &mut self.yaw,
        }
    }

    /// Resets every channel to defaults. Strategies are kept.
    pub fn reset(&mut self) {
        for axis in Axis::ALL {
            self.channel_mut(axis).pid_mut().reset();
        }
    }

    fn tick(&mut self, axis: Axis, set_point: T, angle: T, rate: T) -> T {
        let channel = self.channel_mut(axis);
        channel.pid_mut().set_set_point(set_point);
        let command = channel.advance(Sample::attitude(angle, rate));

        #[cfg(feature = "defmt")]
        {
            if channel.is_saturated() {
                defmt::trace!("{} output saturated", axis);
            }
        }

        command
    }
}

impl<T: Number> Default for AttitudeStabilizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> FlightStabilizer<T> for AttitudeStabilizer<T> {
    fn control(
        &mut self,
        set_point: (T, T, T),
        imu_attitude: (T, T, T),
        gyro_rate: (T, T, T),
    ) -> (T, T, T) {
        let (set_point_roll, set_point_pitch, set_point_yaw) = set_point;
        let (imu_roll, imu_pitch, imu_yaw) = imu_attitude;
        let (gyro_roll, gyro_pitch, gyro_yaw) = gyro_rate;

        let roll_output = self.tick(Axis::Roll, set_point_roll, imu_roll, gyro_roll);
        let pitch_output = self.tick(Axis::Pitch, set_point_pitch, imu_pitch, gyro_pitch);
        let yaw_output = self.tick(Axis::Yaw, set_point_yaw, imu_yaw, gyro_yaw);

        (roll_output, pitch_output, yaw_output)
    }
}
