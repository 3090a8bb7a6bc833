//! `embedded-io` serial sink adapter

use crate::platform::{
    error::UartError,
    traits::UartInterface,
    PlatformError, Result,
};
use embedded_io::Write;

/// Wraps any blocking `embedded_io::Write` as a transmit-only [`UartInterface`].
///
/// The bridge only ever writes frames to its sink, so the receive side
/// reports no data and baud-rate changes are rejected (the wrapped writer
/// owns its own line configuration).
pub struct IoUart<W> {
    writer: W,
}

impl<W> IoUart<W>
where
    W: Write,
{
    /// Wrap a serial writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> UartInterface for IoUart<W>
where
    W: Write,
{
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.writer
            .write(data)
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }

    fn read(&mut self, _buffer: &mut [u8]) -> Result<usize> {
        // Transmit-only adapter
        Ok(0)
    }

    fn set_baud_rate(&mut self, _baud: u32) -> Result<()> {
        Err(PlatformError::Uart(UartError::InvalidBaudRate))
    }

    fn available(&self) -> bool {
        false
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// In-memory embedded-io writer
    struct VecWriter {
        data: Vec<u8>,
    }

    impl embedded_io::ErrorType for VecWriter {
        type Error = core::convert::Infallible;
    }

    impl Write for VecWriter {
        fn write(&mut self, buf: &[u8]) -> core::result::Result<usize, Self::Error> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> core::result::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_write_passes_through() {
        let mut uart = IoUart::new(VecWriter { data: Vec::new() });
        let n = uart.write(b"$ frame\n").unwrap();
        assert_eq!(n, 8);
        assert_eq!(uart.writer.data, b"$ frame\n");
    }

    #[test]
    fn test_read_side_is_empty() {
        let mut uart = IoUart::new(VecWriter { data: Vec::new() });
        let mut buf = [0u8; 4];
        assert_eq!(uart.read(&mut buf).unwrap(), 0);
        assert!(!uart.available());
    }
}
