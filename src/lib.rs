// src/lib.rs

//! # Channel PID Controllers
//!
//! This crate provides `no_std`, no-alloc PID (Proportional, Integral,
//! Derivative) controllers for the inner loop of a flight controller. Each
//! control channel (yaw, roll, pitch) is an independent value that turns a
//! periodic measurement into a bounded actuator command using one of four
//! strategies: incremental, positional, attitude, or heading-wrapping
//! attitude.
//!
//! The controllers do not know the loop period. Gains are tuned for the rate
//! at which the caller invokes them, and that rate is assumed constant.
//! Non-finite measurements are not filtered and will poison the channel
//! state, so callers should only feed finite sensor values.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

pub mod error;
pub mod number;
pub mod pid;
pub mod stabilizer;
pub mod strategy;

#[doc(inline)]
pub use error::LimitsError;
#[doc(inline)]
pub use number::Number;
#[doc(inline)]
pub use pid::{wrap_heading_error, PidChannel};
#[doc(inline)]
pub use stabilizer::{
    AttitudeStabilizer, Axis, ChannelConfig, FlightStabilizer, StabilizerConfig,
};
#[doc(inline)]
pub use strategy::{Channel, ChannelController, Sample, Strategy};

#[cfg(test)]
mod test_utils;
