// src/stabilizer/flight_stabilizer.rs

//! A module specifying the shared interface for PID-based flight stabilizers.
//! This module is designed for embedded systems in no_std environments. The
//! stabilizer knows nothing about time: the loop period is whatever rate the
//! caller ticks it at, and the gains must be tuned for that rate.

use crate::Number;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Control axis. Each axis owns exactly one channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rotation about the longitudinal axis.
    Roll,
    /// Rotation about the lateral axis.
    Pitch,
    /// Heading.
    Yaw,
}

impl Axis {
    /// All axes in (roll, pitch, yaw) order.
    pub const ALL: [Axis; 3] = [Axis::Roll, Axis::Pitch, Axis::Yaw];
}

/// A trait for PID-based flight stabilizers that handle roll, pitch,
/// and yaw control based on attitude and gyro data.
pub trait FlightStabilizer<T: Number> {
    /// Takes desired setpoints, current IMU attitude, and gyro rates, then computes the control outputs.
    ///
    /// - `set_point`: A tuple of (roll, pitch, yaw) desired setpoints.
    /// - `imu_attitude`: A tuple of (roll, pitch, yaw) current IMU measurements.
    /// - `gyro_rate`: A tuple of (roll rate, pitch rate, yaw rate) from the gyroscope.
    ///
    /// Returns a tuple of (roll control, pitch control, yaw control) bounded commands.
    fn control(
        &mut self,
        set_point: (T, T, T),
        imu_attitude: (T, T, T),
        gyro_rate: (T, T, T),
    ) -> (T, T, T);
}
