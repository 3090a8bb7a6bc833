//! Mock I2C implementation for testing

use crate::platform::{
    error::I2cError,
    traits::{I2cConfig, I2cInterface},
    PlatformError, Result,
};
use core::cell::RefCell;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification and allows
/// pre-programming expected read data. Reads drain the programmed
/// data FIFO; when it runs dry a read returns fewer bytes than
/// requested, which is how tests simulate short reads and transport
/// faults.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    fail_reads: bool,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
            fail_reads: false,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Append data to be returned by subsequent read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data.borrow_mut().extend_from_slice(data);
    }

    /// Make every read fail with a bus error
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn drain_into(&self, buffer: &mut [u8]) -> usize {
        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);
        to_read
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<usize> {
        self.transactions.borrow_mut().push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });

        if self.fail_reads {
            return Err(PlatformError::I2c(I2cError::BusError));
        }
        Ok(self.drain_into(buffer))
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> Result<usize> {
        self.transactions
            .borrow_mut()
            .push(I2cTransaction::WriteRead {
                addr,
                write_data: write_data.to_vec(),
                read_len: read_buffer.len(),
            });

        if self.fail_reads {
            return Err(PlatformError::I2c(I2cError::BusError));
        }
        Ok(self.drain_into(read_buffer))
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        self.config.frequency = frequency;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.write(0x50, &[0x01, 0x02, 0x03]).unwrap();

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            I2cTransaction::Write {
                addr: 0x50,
                data: vec![0x01, 0x02, 0x03]
            }
        );
    }

    #[test]
    fn test_mock_i2c_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&[0xAA, 0xBB, 0xCC]);

        let mut buffer = [0u8; 3];
        let n = i2c.read(0x51, &mut buffer).unwrap();

        assert_eq!(n, 3);
        assert_eq!(buffer, [0xAA, 0xBB, 0xCC]);

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0], I2cTransaction::Read { addr: 0x51, len: 3 });
    }

    #[test]
    fn test_mock_i2c_short_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&[0x12, 0x34]);

        let mut buffer = [0u8; 8];
        let n = i2c.read(0x51, &mut buffer).unwrap();

        assert_eq!(n, 2);
        assert_eq!(&buffer[..2], &[0x12, 0x34]);
    }

    #[test]
    fn test_mock_i2c_failed_read() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        i2c.set_read_data(&[0x12]);
        i2c.fail_reads(true);

        let mut buffer = [0u8; 1];
        assert!(i2c.read(0x51, &mut buffer).is_err());
    }

    #[test]
    fn test_mock_i2c_frequency() {
        let mut i2c = MockI2c::new(I2cConfig::default());
        assert_eq!(i2c.frequency(), 400_000);

        i2c.set_frequency(100_000).unwrap();
        assert_eq!(i2c.frequency(), 100_000);
    }
}
