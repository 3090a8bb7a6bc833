//! Adapters from ecosystem HAL traits to the platform traits
//!
//! Real hardware exposes buses and serial ports through `embedded-hal` and
//! `embedded-io`; these wrappers make any such peripheral usable behind the
//! platform abstraction without a platform-specific module per chip.

mod i2c;
mod uart;

pub use i2c::HalI2c;
pub use uart::IoUart;
