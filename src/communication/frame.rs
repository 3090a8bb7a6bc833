//! Telemetry Frame Emitter
//!
//! Formats decoded samples as fixed-width text lines and writes them to the
//! serial sink.
//!
//! # Wire Format
//!
//! One line per sample: a `$` marker, then each enabled field right-justified
//! to its fixed width with two decimal places, single-space separated,
//! `\n` terminated:
//!
//! ```text
//! $<ts:10> <yaw:8> <pitch:8> <roll:8> <gyroX:10> <gyroY:10> <gyroZ:10> <accelX:10> <accelY:10> <accelZ:10>
//! ```
//!
//! Units on the wire: timestamp seconds, angles degrees, angular rate rad/s,
//! acceleration m/s². The marker exists so the host-side parser can find
//! frame boundaries in a partially received stream.
//!
//! Field order and widths are a contract with the host-side parser; the
//! parser's active-field list must mirror the list configured here.

use crate::devices::traits::AttitudeSample;
use crate::platform::UartInterface;
use heapless::{String, Vec};

/// Frame boundary marker
pub const FRAME_MARKER: char = '$';

/// Maximum number of fields in one frame
pub const MAX_FIELDS: usize = 17;

/// Line buffer capacity in bytes
///
/// All seventeen fields at nominal widths total 176 bytes; the headroom
/// absorbs values that outgrow their fixed width.
pub const LINE_CAPACITY: usize = 224;

/// One emittable field of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    /// Sample timestamp, seconds
    Timestamp,
    /// Yaw, degrees
    Yaw,
    /// Pitch, degrees
    Pitch,
    /// Roll, degrees
    Roll,
    /// Compass heading, degrees
    Heading,
    /// Fused heading, degrees
    FusedHeading,
    /// Altitude, meters
    Altitude,
    /// Die temperature, °C
    Temperature,
    /// Angular rate X, rad/s
    GyroX,
    /// Angular rate Y, rad/s
    GyroY,
    /// Angular rate Z, rad/s
    GyroZ,
    /// Acceleration X, m/s²
    AccelX,
    /// Acceleration Y, m/s²
    AccelY,
    /// Acceleration Z, m/s²
    AccelZ,
    /// World linear acceleration X, m/s²
    LinearAccelX,
    /// World linear acceleration Y, m/s²
    LinearAccelY,
    /// World linear acceleration Z, m/s²
    LinearAccelZ,
}

impl FieldName {
    /// Fixed field width on the wire
    pub const fn width(self) -> usize {
        match self {
            FieldName::Timestamp | FieldName::Altitude => 10,
            FieldName::Yaw
            | FieldName::Pitch
            | FieldName::Roll
            | FieldName::Heading
            | FieldName::FusedHeading
            | FieldName::Temperature => 8,
            FieldName::GyroX
            | FieldName::GyroY
            | FieldName::GyroZ
            | FieldName::AccelX
            | FieldName::AccelY
            | FieldName::AccelZ
            | FieldName::LinearAccelX
            | FieldName::LinearAccelY
            | FieldName::LinearAccelZ => 10,
        }
    }

    /// Extract this field's wire value from a sample
    pub fn value(self, sample: &AttitudeSample) -> f32 {
        match self {
            FieldName::Timestamp => sample.timestamp_ms as f32 / 1000.0,
            FieldName::Yaw => sample.yaw_deg,
            FieldName::Pitch => sample.pitch_deg,
            FieldName::Roll => sample.roll_deg,
            FieldName::Heading => sample.heading_deg,
            FieldName::FusedHeading => sample.fused_heading_deg,
            FieldName::Altitude => sample.altitude_m,
            FieldName::Temperature => sample.temp_c,
            FieldName::GyroX => sample.gyro.x,
            FieldName::GyroY => sample.gyro.y,
            FieldName::GyroZ => sample.gyro.z,
            FieldName::AccelX => sample.accel.x,
            FieldName::AccelY => sample.accel.y,
            FieldName::AccelZ => sample.accel.z,
            FieldName::LinearAccelX => sample.linear_accel.x,
            FieldName::LinearAccelY => sample.linear_accel.y,
            FieldName::LinearAccelZ => sample.linear_accel.z,
        }
    }
}

/// Default field list: the stable consumer contract
pub const DEFAULT_FIELDS: [FieldName; 10] = [
    FieldName::Timestamp,
    FieldName::Yaw,
    FieldName::Pitch,
    FieldName::Roll,
    FieldName::GyroX,
    FieldName::GyroY,
    FieldName::GyroZ,
    FieldName::AccelX,
    FieldName::AccelY,
    FieldName::AccelZ,
];

/// Emitter statistics for monitoring and diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitterStats {
    /// Frames successfully handed to the sink
    pub frames_sent: u32,
    /// Sink write errors (frame dropped)
    pub write_errors: u32,
    /// Frames that outgrew the line buffer (frame dropped)
    pub overflows: u32,
}

/// Fixed-width text frame emitter
///
/// Owns the serial sink and the enabled-field list. The field list is set
/// at construction and never changes at runtime, matching the host-side
/// parser's expectations.
pub struct FrameEmitter<U> {
    /// Serial sink
    uart: U,
    /// Enabled fields, in wire order
    fields: Vec<FieldName, MAX_FIELDS>,
    /// Emitter statistics
    stats: EmitterStats,
}

impl<U> FrameEmitter<U>
where
    U: UartInterface,
{
    /// Create an emitter with the default field list
    pub fn new(uart: U) -> Self {
        Self::with_fields(uart, &DEFAULT_FIELDS)
    }

    /// Create an emitter with a custom field list
    ///
    /// Fields beyond [`MAX_FIELDS`] are ignored; the host-side parser must
    /// be configured with the same list.
    pub fn with_fields(uart: U, fields: &[FieldName]) -> Self {
        let mut enabled = Vec::new();
        for &field in fields.iter().take(MAX_FIELDS) {
            // Capacity bounded by the take() above
            let _ = enabled.push(field);
        }
        Self {
            uart,
            fields: enabled,
            stats: EmitterStats::default(),
        }
    }

    /// Get emitter statistics
    pub fn stats(&self) -> EmitterStats {
        self.stats
    }

    /// Enabled fields, in wire order
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Access the owned sink
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Format and emit one frame
    ///
    /// Sink errors are absorbed and counted: the stream has no
    /// acknowledgment channel, so a lost frame is simply superseded by the
    /// next sample.
    pub fn emit(&mut self, sample: &AttitudeSample) {
        let mut line: String<LINE_CAPACITY> = String::new();
        if Self::render(&self.fields, sample, &mut line).is_err() {
            self.stats.overflows += 1;
            return;
        }

        match self.uart.write(line.as_bytes()) {
            Ok(_) => self.stats.frames_sent += 1,
            Err(_) => {
                self.stats.write_errors += 1;
                crate::log_debug!("frame write failed");
            }
        }
    }

    /// Render one frame into `line`
    fn render(
        fields: &[FieldName],
        sample: &AttitudeSample,
        line: &mut String<LINE_CAPACITY>,
    ) -> core::fmt::Result {
        use core::fmt::Write;

        line.push(FRAME_MARKER).map_err(|_| core::fmt::Error)?;
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(' ').map_err(|_| core::fmt::Error)?;
            }
            write!(line, "{:w$.2}", field.value(sample), w = field.width())?;
        }
        line.push('\n').map_err(|_| core::fmt::Error)
    }
}
