//! `embedded-hal` I2C adapter

use crate::platform::{
    error::I2cError,
    traits::I2cInterface,
    PlatformError, Result,
};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Wraps any blocking `embedded_hal::i2c::I2c` bus as an [`I2cInterface`].
///
/// HAL reads either fill the whole buffer or fail, so a successful read
/// always reports the full requested length.
pub struct HalI2c<T> {
    bus: T,
}

impl<T> HalI2c<T>
where
    T: I2c,
{
    /// Wrap a HAL I2C bus
    pub fn new(bus: T) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn release(self) -> T {
        self.bus
    }

    fn map_err<E: embedded_hal::i2c::Error>(err: E) -> PlatformError {
        match err.kind() {
            ErrorKind::NoAcknowledge(_) => PlatformError::I2c(I2cError::Nack),
            ErrorKind::ArbitrationLoss => PlatformError::I2c(I2cError::ArbitrationLost),
            _ => PlatformError::I2c(I2cError::BusError),
        }
    }
}

impl<T> I2cInterface for HalI2c<T>
where
    T: I2c,
{
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.bus.write(addr, data).map_err(Self::map_err)
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<usize> {
        self.bus.read(addr, buffer).map_err(Self::map_err)?;
        Ok(buffer.len())
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> Result<usize> {
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(Self::map_err)?;
        Ok(read_buffer.len())
    }

    fn set_frequency(&mut self, _frequency: u32) -> Result<()> {
        // Bus frequency is fixed at HAL construction time
        Err(PlatformError::InvalidConfig)
    }
}
