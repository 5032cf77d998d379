// src/pid.rs

//! # PID Control Module
//!
//! This module provides the per-channel controller state and the four
//! calculation strategies that advance it: incremental, positional,
//! attitude and yaw attitude.

pub mod attitude;
pub use attitude::*;
pub mod channel;
pub use channel::*;
pub mod incremental;
pub mod positional;
