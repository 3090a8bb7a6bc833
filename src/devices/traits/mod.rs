//! Device traits
//!
//! This module contains hardware-independent trait definitions for the two
//! acquisition strategies. These traits enable:
//! - Unit testing with mock implementations
//! - Strategy independence for the acquisition cycle
//! - Swapping the raw-register path for a vendor driver without touching
//!   the cycle or the frame emitter

pub mod ahrs;
pub mod attitude;

pub use ahrs::{AhrsDriver, AhrsSource};
pub use attitude::{AttitudeSample, AttitudeSource};
