//! navX2 Register Definitions
//!
//! This module defines the navX2 register map as seen over the register-based
//! bus protocol, plus the contiguous read windows the bridge fetches.
//!
//! ## Register Layout
//!
//! - 0x00..=0x0C: identity and configuration (read once at startup)
//! - 0x12..=0x3F: processed and raw sensor data (read every cycle)
//!
//! All multi-byte registers are little-endian, low byte at the lower address.

use bitflags::bitflags;

// =============================================================================
// I2C Address
// =============================================================================

/// navX2 7-bit I2C address
pub const NAVX_ADDR: u8 = 0x32;

// =============================================================================
// Identity / Configuration Registers
// =============================================================================

/// Device ID (WHO_AM_I)
pub const WHOAMI: u8 = 0x00;

/// Board hardware revision
pub const HW_REV: u8 = 0x01;

/// Firmware major version
pub const FW_VER_MAJOR: u8 = 0x02;

/// Firmware minor version
pub const FW_VER_MINOR: u8 = 0x03;

/// Sensor update rate in Hz
pub const UPDATE_RATE_HZ: u8 = 0x04;

/// Accelerometer full-scale range in g
pub const ACCEL_FSR_G: u8 = 0x05;

/// Gyroscope full-scale range in °/s, low byte
pub const GYRO_FSR_DPS_L: u8 = 0x06;

/// Gyroscope full-scale range in °/s, high byte
pub const GYRO_FSR_DPS_H: u8 = 0x07;

/// Operational status
pub const OP_STATUS: u8 = 0x08;

/// Calibration status
pub const CAL_STATUS: u8 = 0x09;

/// Self-test status
pub const SELFTEST_STATUS: u8 = 0x0A;

/// Capability flags, low byte
pub const CAPABILITY_FLAGS_L: u8 = 0x0B;

/// Capability flags, high byte
pub const CAPABILITY_FLAGS_H: u8 = 0x0C;

// =============================================================================
// Data Registers
// =============================================================================

/// Sample timestamp in ms, lowest byte (uint32)
pub const TIMESTAMP_L_L: u8 = 0x12;

/// Sample timestamp in ms, highest byte
pub const TIMESTAMP_H_H: u8 = 0x15;

/// Yaw angle, signed hundredths of a degree, low byte
pub const YAW_L: u8 = 0x16;

/// Roll angle, signed hundredths of a degree, low byte
pub const ROLL_L: u8 = 0x18;

/// Pitch angle, signed hundredths of a degree, low byte
pub const PITCH_L: u8 = 0x1A;

/// Compass heading, unsigned hundredths of a degree, low byte
pub const HEADING_L: u8 = 0x1C;

/// Fused (9-axis) heading, unsigned hundredths of a degree, low byte
pub const FUSED_HEADING_L: u8 = 0x1E;

/// Altitude in meters, signed 16:16 fixed point, lowest byte
pub const ALTITUDE_I_L: u8 = 0x20;

/// Quaternion W, low byte
pub const QUAT_W_L: u8 = 0x24;

/// Quaternion Z, high byte
pub const QUAT_Z_H: u8 = 0x2B;

/// Sensor die temperature, signed hundredths of °C, low byte
pub const MPU_TEMP_C_L: u8 = 0x2C;

/// World-frame linear acceleration X, signed thousandths of g, low byte
pub const LINEAR_ACC_X_L: u8 = 0x2E;

/// World-frame linear acceleration Y, signed thousandths of g, low byte
pub const LINEAR_ACC_Y_L: u8 = 0x30;

/// World-frame linear acceleration Z, signed thousandths of g, low byte
pub const LINEAR_ACC_Z_L: u8 = 0x32;

/// Raw gyroscope X, device units, low byte
pub const GYRO_X_L: u8 = 0x34;

/// Raw gyroscope Y, device units, low byte
pub const GYRO_Y_L: u8 = 0x36;

/// Raw gyroscope Z, device units, low byte
pub const GYRO_Z_L: u8 = 0x38;

/// Raw accelerometer X, device units, low byte
pub const ACC_X_L: u8 = 0x3A;

/// Raw accelerometer Y, device units, low byte
pub const ACC_Y_L: u8 = 0x3C;

/// Raw accelerometer Z, device units, low byte
pub const ACC_Z_L: u8 = 0x3E;

/// Raw accelerometer Z, device units, high byte (last fetched register)
pub const ACC_Z_H: u8 = 0x3F;

// =============================================================================
// WHO_AM_I Values
// =============================================================================

/// navX2 WHO_AM_I expected value
pub const NAVX_WHO_AM_I_VALUE: u8 = 0x32;

// =============================================================================
// Operational Status Values (OP_STATUS)
// =============================================================================

/// Device is initializing
pub const OP_STATUS_INITIALIZING: u8 = 0x00;

/// Self-test running
pub const OP_STATUS_SELFTEST_IN_PROGRESS: u8 = 0x01;

/// Unrecoverable device error
pub const OP_STATUS_ERROR: u8 = 0x02;

/// Gyro auto-calibration running
pub const OP_STATUS_IMU_AUTOCAL_IN_PROGRESS: u8 = 0x03;

/// Normal operation, sensor data valid
pub const OP_STATUS_NORMAL: u8 = 0x04;

// =============================================================================
// Calibration Status Values (CAL_STATUS)
// =============================================================================

/// Mask for the IMU calibration state bits
pub const IMU_CAL_STATE_MASK: u8 = 0x03;

/// IMU calibration in progress
pub const IMU_CAL_INPROGRESS: u8 = 0x00;

/// IMU calibration accumulating samples
pub const IMU_CAL_ACCUMULATE: u8 = 0x01;

/// IMU calibration complete
pub const IMU_CAL_COMPLETE: u8 = 0x02;

bitflags! {
    /// Self-test results (SELFTEST_STATUS)
    ///
    /// `COMPLETE` indicates the self-test ran; the per-sensor bits report
    /// which sensors passed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SelfTestStatus: u8 {
        /// Gyroscope passed
        const GYRO_PASSED = 0x01;
        /// Accelerometer passed
        const ACCEL_PASSED = 0x02;
        /// Magnetometer passed
        const MAG_PASSED = 0x04;
        /// Barometer passed
        const BARO_PASSED = 0x08;
        /// Self-test complete
        const COMPLETE = 0x80;
    }
}

bitflags! {
    /// Board capability flags (CAPABILITY_FLAGS)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CapabilityFlags: u16 {
        /// Omnimount orientation configuration supported
        const OMNIMOUNT = 0x0004;
        /// Velocity and displacement integration supported
        const VEL_AND_DISP = 0x0040;
        /// Yaw reset supported
        const YAW_RESET = 0x0080;
        /// Timestamped AHRS + position data supported
        const AHRSPOS_TS = 0x0100;
    }
}

// =============================================================================
// Register Windows
// =============================================================================

/// One field of a register window: start address and byte width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Register address of the field's lowest byte
    pub addr: u8,
    /// Field width in bytes
    pub width: u8,
}

/// A contiguous register range fetched in one bus transaction
///
/// Covers the lowest through the highest address of its fields; gaps between
/// fields are fetched too, since one larger read is cheaper than several
/// small transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWindow {
    /// First register address of the window
    pub start: u8,
    /// Window length in bytes
    pub len: u8,
}

impl RegisterWindow {
    /// Compute the minimal window covering every field in `fields`
    pub const fn spanning(fields: &[Field]) -> Self {
        let mut start = u8::MAX;
        let mut end = 0u8;
        let mut i = 0;
        while i < fields.len() {
            let field = fields[i];
            if field.addr < start {
                start = field.addr;
            }
            if field.addr + field.width > end {
                end = field.addr + field.width;
            }
            i += 1;
        }
        Self {
            start,
            len: end - start,
        }
    }

    /// Byte offset of `field` within the fetched block
    pub const fn offset_of(&self, field: Field) -> usize {
        (field.addr - self.start) as usize
    }
}

/// Timestamp field (uint32 ms)
pub const F_TIMESTAMP: Field = Field { addr: TIMESTAMP_L_L, width: 4 };
/// Yaw field (signed hundredths of a degree)
pub const F_YAW: Field = Field { addr: YAW_L, width: 2 };
/// Roll field (signed hundredths of a degree)
pub const F_ROLL: Field = Field { addr: ROLL_L, width: 2 };
/// Pitch field (signed hundredths of a degree)
pub const F_PITCH: Field = Field { addr: PITCH_L, width: 2 };
/// Compass heading field (unsigned hundredths of a degree)
pub const F_HEADING: Field = Field { addr: HEADING_L, width: 2 };
/// Fused heading field (unsigned hundredths of a degree)
pub const F_FUSED_HEADING: Field = Field { addr: FUSED_HEADING_L, width: 2 };
/// Altitude field (signed 16:16 m)
pub const F_ALTITUDE: Field = Field { addr: ALTITUDE_I_L, width: 4 };
/// Die temperature field (signed hundredths of °C)
pub const F_MPU_TEMP: Field = Field { addr: MPU_TEMP_C_L, width: 2 };
/// World linear acceleration X field (signed thousandths of g)
pub const F_LINEAR_ACC_X: Field = Field { addr: LINEAR_ACC_X_L, width: 2 };
/// World linear acceleration Y field (signed thousandths of g)
pub const F_LINEAR_ACC_Y: Field = Field { addr: LINEAR_ACC_Y_L, width: 2 };
/// World linear acceleration Z field (signed thousandths of g)
pub const F_LINEAR_ACC_Z: Field = Field { addr: LINEAR_ACC_Z_L, width: 2 };
/// Raw gyro X field (device units)
pub const F_GYRO_X: Field = Field { addr: GYRO_X_L, width: 2 };
/// Raw gyro Y field (device units)
pub const F_GYRO_Y: Field = Field { addr: GYRO_Y_L, width: 2 };
/// Raw gyro Z field (device units)
pub const F_GYRO_Z: Field = Field { addr: GYRO_Z_L, width: 2 };
/// Raw accel X field (device units)
pub const F_ACC_X: Field = Field { addr: ACC_X_L, width: 2 };
/// Raw accel Y field (device units)
pub const F_ACC_Y: Field = Field { addr: ACC_Y_L, width: 2 };
/// Raw accel Z field (device units)
pub const F_ACC_Z: Field = Field { addr: ACC_Z_L, width: 2 };

/// Every field decoded from the per-cycle data window
pub const SAMPLE_FIELDS: [Field; 17] = [
    F_TIMESTAMP,
    F_YAW,
    F_ROLL,
    F_PITCH,
    F_HEADING,
    F_FUSED_HEADING,
    F_ALTITUDE,
    F_MPU_TEMP,
    F_LINEAR_ACC_X,
    F_LINEAR_ACC_Y,
    F_LINEAR_ACC_Z,
    F_GYRO_X,
    F_GYRO_Y,
    F_GYRO_Z,
    F_ACC_X,
    F_ACC_Y,
    F_ACC_Z,
];

/// Per-cycle data window: TIMESTAMP through ACC_Z, 46 bytes
pub const SAMPLE_WINDOW: RegisterWindow = RegisterWindow::spanning(&SAMPLE_FIELDS);

/// Per-cycle data window length in bytes
pub const SAMPLE_WINDOW_LEN: usize = SAMPLE_WINDOW.len as usize;

/// Identity/configuration fields read once at startup
pub const IDENTITY_FIELDS: [Field; 9] = [
    Field { addr: WHOAMI, width: 1 },
    Field { addr: HW_REV, width: 1 },
    Field { addr: FW_VER_MAJOR, width: 1 },
    Field { addr: FW_VER_MINOR, width: 1 },
    Field { addr: UPDATE_RATE_HZ, width: 1 },
    Field { addr: ACCEL_FSR_G, width: 1 },
    Field { addr: GYRO_FSR_DPS_L, width: 2 },
    Field { addr: CAL_STATUS, width: 1 },
    Field { addr: SELFTEST_STATUS, width: 1 },
];

/// Startup identity/configuration window: WHOAMI through CAPABILITY_FLAGS
pub const IDENTITY_WINDOW: RegisterWindow = RegisterWindow::spanning(&[
    Field { addr: WHOAMI, width: 1 },
    Field { addr: CAPABILITY_FLAGS_L, width: 2 },
]);

/// Startup identity/configuration window length in bytes
pub const IDENTITY_WINDOW_LEN: usize = IDENTITY_WINDOW.len as usize;

// =============================================================================
// Unit Conversion Constants
// =============================================================================

/// Fixed full-scale denominator for raw device units (always 32768,
/// independent of the configured full-scale range)
pub const DEV_UNITS_MAX: f32 = 32768.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Standard gravity in m/s²
pub const GRAVITY: f32 = 9.80665;
