#![cfg_attr(not(test), no_std)]

//! navx-bridge - Telemetry bridge for the navX2 inertial sensor
//!
//! Polls the sensor's register file over a register-based bus, decodes the
//! fixed little-endian register layout into physical units, suppresses
//! duplicate samples, and streams one fixed-width text frame per new sample
//! over a serial sink for a host-side parser.

#[cfg(any(test, feature = "mock"))]
extern crate std;

// Platform abstraction layer (bus, sink and timer seams + mocks)
pub mod platform;

// Device drivers and acquisition strategies using platform abstraction
pub mod devices;

// Core systems (acquisition cycle, logging)
pub mod core;

// Output framing for the host-side consumer
pub mod communication;
