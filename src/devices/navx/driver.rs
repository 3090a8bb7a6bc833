//! navX2 Register-Polling Driver Implementation
//!
//! Core driver implementation for reading sensor data directly from the
//! device register file. Every acquisition is one contiguous block read;
//! decoding and unit conversion happen on the host side of the bus.
//!
//! This driver is platform-agnostic and works with any
//! [`I2cInterface`]/[`TimerInterface`] implementation.

use super::protocol;
use super::registers::{
    self, CapabilityFlags, SelfTestStatus, DEG_TO_RAD, DEV_UNITS_MAX, GRAVITY, IDENTITY_WINDOW_LEN,
    SAMPLE_WINDOW, SAMPLE_WINDOW_LEN,
};
use crate::devices::traits::{AttitudeSample, AttitudeSource};
use crate::platform::{I2cInterface, Result, TimerInterface};
use nalgebra::Vector3;

// Byte offsets within the fetched sample block
const OFF_TIMESTAMP: usize = SAMPLE_WINDOW.offset_of(registers::F_TIMESTAMP);
const OFF_YAW: usize = SAMPLE_WINDOW.offset_of(registers::F_YAW);
const OFF_ROLL: usize = SAMPLE_WINDOW.offset_of(registers::F_ROLL);
const OFF_PITCH: usize = SAMPLE_WINDOW.offset_of(registers::F_PITCH);
const OFF_HEADING: usize = SAMPLE_WINDOW.offset_of(registers::F_HEADING);
const OFF_FUSED_HEADING: usize = SAMPLE_WINDOW.offset_of(registers::F_FUSED_HEADING);
const OFF_ALTITUDE: usize = SAMPLE_WINDOW.offset_of(registers::F_ALTITUDE);
const OFF_MPU_TEMP: usize = SAMPLE_WINDOW.offset_of(registers::F_MPU_TEMP);
const OFF_LINEAR_ACC_X: usize = SAMPLE_WINDOW.offset_of(registers::F_LINEAR_ACC_X);
const OFF_LINEAR_ACC_Y: usize = SAMPLE_WINDOW.offset_of(registers::F_LINEAR_ACC_Y);
const OFF_LINEAR_ACC_Z: usize = SAMPLE_WINDOW.offset_of(registers::F_LINEAR_ACC_Z);
const OFF_GYRO_X: usize = SAMPLE_WINDOW.offset_of(registers::F_GYRO_X);
const OFF_GYRO_Y: usize = SAMPLE_WINDOW.offset_of(registers::F_GYRO_Y);
const OFF_GYRO_Z: usize = SAMPLE_WINDOW.offset_of(registers::F_GYRO_Z);
const OFF_ACC_X: usize = SAMPLE_WINDOW.offset_of(registers::F_ACC_X);
const OFF_ACC_Y: usize = SAMPLE_WINDOW.offset_of(registers::F_ACC_Y);
const OFF_ACC_Z: usize = SAMPLE_WINDOW.offset_of(registers::F_ACC_Z);

/// Driver configuration
#[derive(Debug, Clone, Copy)]
pub struct NavxConfig {
    /// 7-bit I2C device address
    pub i2c_address: u8,
    /// Ceiling for the operational-status wait at startup (ms)
    pub startup_timeout_ms: u32,
    /// Operational-status poll interval at startup (ms)
    pub status_poll_interval_ms: u32,
}

impl Default for NavxConfig {
    fn default() -> Self {
        Self {
            i2c_address: registers::NAVX_ADDR,
            startup_timeout_ms: 10_000,
            status_poll_interval_ms: 100,
        }
    }
}

/// Sensor full-scale ranges, read from the device at startup
///
/// Written once during the startup handshake and treated as read-only for
/// every subsequent decode. Raw device units always span ±32768 regardless
/// of the configured range; these values set what that span means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactors {
    /// Accelerometer full-scale range in g
    pub accel_fsr_g: u8,
    /// Gyroscope full-scale range in °/s
    pub gyro_fsr_dps: u16,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            accel_fsr_g: 2,
            gyro_fsr_dps: 2000,
        }
    }
}

impl ScaleFactors {
    /// Gyro conversion factor: raw device units to rad/s
    pub fn gyro_rad_per_lsb(&self) -> f32 {
        self.gyro_fsr_dps as f32 / DEV_UNITS_MAX * DEG_TO_RAD
    }

    /// Accel conversion factor: raw device units to m/s²
    pub fn accel_mps2_per_lsb(&self) -> f32 {
        self.accel_fsr_g as f32 / DEV_UNITS_MAX * GRAVITY
    }
}

/// Board identity read during the startup handshake
#[derive(Debug, Clone, Copy)]
pub struct BoardInfo {
    /// Hardware revision
    pub hw_rev: u8,
    /// Firmware major version
    pub fw_major: u8,
    /// Firmware minor version
    pub fw_minor: u8,
    /// Configured sensor update rate in Hz
    pub update_rate_hz: u8,
    /// Self-test results
    pub selftest: SelfTestStatus,
    /// Board capability flags
    pub capabilities: CapabilityFlags,
}

/// navX2 register-polling acquisition strategy
///
/// Owns the bus and a timer. `start()` performs the degraded-allowed
/// startup handshake; `try_acquire()` fetches and decodes one sample
/// block, returning `None` on any transient bus fault.
///
/// # Type Parameters
///
/// * `I2C` - Register bus, any [`I2cInterface`]
/// * `T` - Clock for the bounded startup wait, any [`TimerInterface`]
pub struct NavxRegisterSource<I2C, T> {
    /// I2C bus handle
    i2c: I2C,

    /// Startup-wait clock
    timer: T,

    /// Driver configuration
    config: NavxConfig,

    /// Full-scale ranges (defaults until the startup read succeeds)
    scale: ScaleFactors,

    /// Board identity, if the startup read succeeded
    board: Option<BoardInfo>,
}

impl<I2C, T> NavxRegisterSource<I2C, T>
where
    I2C: I2cInterface,
    T: TimerInterface,
{
    /// Create a new register-polling source (not yet started)
    ///
    /// Call [`AttitudeSource::start`] once before acquiring; the
    /// acquisition cycle does this on its first invocation.
    pub fn new(i2c: I2C, timer: T, config: NavxConfig) -> Self {
        Self {
            i2c,
            timer,
            config,
            scale: ScaleFactors::default(),
            board: None,
        }
    }

    /// Current scale factors (defaults until startup has read the device)
    pub fn scale_factors(&self) -> ScaleFactors {
        self.scale
    }

    /// Board identity, if the startup handshake reached the device
    pub fn board_info(&self) -> Option<&BoardInfo> {
        self.board.as_ref()
    }

    /// Access the owned bus
    pub fn i2c(&self) -> &I2C {
        &self.i2c
    }

    /// Release the bus and timer
    pub fn release(self) -> (I2C, T) {
        (self.i2c, self.timer)
    }

    /// Read a contiguous register block in one bus transaction
    ///
    /// Issues the device's register-select write (`[start, count]`) followed
    /// by a block read. Returns the number of bytes actually read; callers
    /// must treat a short count as a transient transport fault.
    pub fn read_register_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len() as u8;
        self.i2c.write(self.config.i2c_address, &[reg, count])?;
        self.i2c.read(self.config.i2c_address, buf)
    }

    /// Decode a full sample block into physical units
    ///
    /// `block` must be exactly [`SAMPLE_WINDOW_LEN`] bytes as fetched from
    /// the sample window.
    pub fn decode_sample(&self, block: &[u8]) -> AttitudeSample {
        let gyro_scale = self.scale.gyro_rad_per_lsb();
        let accel_scale = self.scale.accel_mps2_per_lsb();

        AttitudeSample {
            timestamp_ms: protocol::decode_u32(&block[OFF_TIMESTAMP..]),
            yaw_deg: protocol::decode_signed_hundredths(&block[OFF_YAW..]),
            pitch_deg: protocol::decode_signed_hundredths(&block[OFF_PITCH..]),
            roll_deg: protocol::decode_signed_hundredths(&block[OFF_ROLL..]),
            heading_deg: protocol::decode_unsigned_hundredths(&block[OFF_HEADING..]),
            fused_heading_deg: protocol::decode_unsigned_hundredths(&block[OFF_FUSED_HEADING..]),
            altitude_m: protocol::decode_q16_16(&block[OFF_ALTITUDE..]),
            temp_c: protocol::decode_signed_hundredths(&block[OFF_MPU_TEMP..]),
            gyro: Vector3::new(
                protocol::decode_i16(&block[OFF_GYRO_X..]) as f32 * gyro_scale,
                protocol::decode_i16(&block[OFF_GYRO_Y..]) as f32 * gyro_scale,
                protocol::decode_i16(&block[OFF_GYRO_Z..]) as f32 * gyro_scale,
            ),
            accel: Vector3::new(
                protocol::decode_i16(&block[OFF_ACC_X..]) as f32 * accel_scale,
                protocol::decode_i16(&block[OFF_ACC_Y..]) as f32 * accel_scale,
                protocol::decode_i16(&block[OFF_ACC_Z..]) as f32 * accel_scale,
            ),
            linear_accel: Vector3::new(
                protocol::decode_signed_thousandths(&block[OFF_LINEAR_ACC_X..]) * GRAVITY,
                protocol::decode_signed_thousandths(&block[OFF_LINEAR_ACC_Y..]) * GRAVITY,
                protocol::decode_signed_thousandths(&block[OFF_LINEAR_ACC_Z..]) * GRAVITY,
            ),
        }
    }

    /// Read the identity/configuration block and capture scale factors
    ///
    /// A failed or short read keeps the default ranges; the bridge still
    /// streams, just with possibly wrong unit conversion, which beats
    /// streaming nothing on an unattended system.
    fn read_configuration(&mut self) {
        let mut block = [0u8; IDENTITY_WINDOW_LEN];
        match self.read_register_block(registers::WHOAMI, &mut block) {
            Ok(n) if n == IDENTITY_WINDOW_LEN => {
                // Identity window starts at register 0x00, so offsets equal addresses
                let whoami = block[registers::WHOAMI as usize];
                if whoami != registers::NAVX_WHO_AM_I_VALUE {
                    crate::log_warn!(
                        "navX WHO_AM_I mismatch: expected {:#x}, got {:#x}",
                        registers::NAVX_WHO_AM_I_VALUE,
                        whoami
                    );
                }

                self.scale = ScaleFactors {
                    accel_fsr_g: block[registers::ACCEL_FSR_G as usize],
                    gyro_fsr_dps: protocol::decode_u16(
                        &block[registers::GYRO_FSR_DPS_L as usize..],
                    ),
                };

                let selftest =
                    SelfTestStatus::from_bits_truncate(block[registers::SELFTEST_STATUS as usize]);
                if !selftest.contains(SelfTestStatus::COMPLETE) {
                    crate::log_warn!("navX self-test not complete (status {:#x})", selftest.bits());
                }

                let board = BoardInfo {
                    hw_rev: block[registers::HW_REV as usize],
                    fw_major: block[registers::FW_VER_MAJOR as usize],
                    fw_minor: block[registers::FW_VER_MINOR as usize],
                    update_rate_hz: block[registers::UPDATE_RATE_HZ as usize],
                    selftest,
                    capabilities: CapabilityFlags::from_bits_truncate(protocol::decode_u16(
                        &block[registers::CAPABILITY_FLAGS_L as usize..],
                    )),
                };
                crate::log_info!(
                    "navX fw {}.{}, {} Hz, accel FSR {} g, gyro FSR {} dps",
                    board.fw_major,
                    board.fw_minor,
                    board.update_rate_hz,
                    self.scale.accel_fsr_g,
                    self.scale.gyro_fsr_dps
                );
                self.board = Some(board);
            }
            _ => {
                crate::log_warn!(
                    "navX configuration read failed; using default scale factors ({} g, {} dps)",
                    self.scale.accel_fsr_g,
                    self.scale.gyro_fsr_dps
                );
            }
        }
    }

    /// Poll the operational status until the device reports normal operation
    ///
    /// Bounded by `startup_timeout_ms`; a timeout is a warning, not a
    /// failure — the device may still come up later and the steady-state
    /// cycle tolerates missing data.
    fn wait_operational(&mut self) {
        let deadline = self.timer.now_ms() + self.config.startup_timeout_ms as u64;
        let mut status = registers::OP_STATUS_INITIALIZING;

        loop {
            let mut buf = [0u8; 1];
            if let Ok(1) = self.read_register_block(registers::OP_STATUS, &mut buf) {
                status = buf[0];
                if status == registers::OP_STATUS_NORMAL {
                    crate::log_info!("navX operational");
                    return;
                }
            }
            if self.timer.now_ms() >= deadline {
                break;
            }
            let _ = self.timer.delay_ms(self.config.status_poll_interval_ms);
        }

        crate::log_warn!("navX op_status={} after startup timeout; streaming anyway", status);
    }
}

impl<I2C, T> AttitudeSource for NavxRegisterSource<I2C, T>
where
    I2C: I2cInterface,
    T: TimerInterface,
{
    fn start(&mut self) {
        self.read_configuration();
        self.wait_operational();
    }

    fn try_acquire(&mut self) -> Option<AttitudeSample> {
        let mut block = [0u8; SAMPLE_WINDOW_LEN];
        let n = self
            .read_register_block(SAMPLE_WINDOW.start, &mut block)
            .ok()?;
        if n != SAMPLE_WINDOW_LEN {
            // Transport fault; next cycle starts over
            return None;
        }
        Some(self.decode_sample(&block))
    }
}
