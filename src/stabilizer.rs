// src/stabilizer.rs

//! # Flight Stabilizer Module
//!
//! This module composes three independent PID channels (roll, pitch and
//! yaw) into a stabilizer driven once per control tick by the caller's
//! scheduler.

pub mod attitude;
pub use attitude::*;
pub mod config;
pub use config::*;
pub mod flight_stabilizer;
pub use flight_stabilizer::*;
