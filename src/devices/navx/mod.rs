//! navX2 Register-Bus Driver
//!
//! I2C driver for the Kauai Labs navX2 orientation sensor, polling the
//! device register file directly rather than going through a vendor AHRS
//! object.
//!
//! ## Features
//!
//! - Single-transaction contiguous register-block reads
//! - Runtime-read full-scale ranges: accel ±2..±16 g, gyro up to ±2000 °/s
//! - Degraded startup: missing config or a slow device never aborts the
//!   bridge, it only logs a warning
//!
//! ## Usage
//!
//! ```ignore
//! use navx_bridge::devices::navx::{NavxConfig, NavxRegisterSource};
//! use navx_bridge::devices::traits::AttitudeSource;
//!
//! let mut source = NavxRegisterSource::new(i2c, timer, NavxConfig::default());
//! source.start();
//! if let Some(sample) = source.try_acquire() {
//!     // sample.yaw_deg, sample.gyro, ...
//! }
//! ```

mod driver;
pub mod protocol;
pub mod registers;

pub use driver::{BoardInfo, NavxConfig, NavxRegisterSource, ScaleFactors};
