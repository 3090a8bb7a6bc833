//! Attitude Sample Source Trait and Data Types
//!
//! Strategy-independent interface between the acquisition cycle and whatever
//! produces decoded samples: the raw-register driver or a higher-level
//! vendor driver object.

use nalgebra::Vector3;

/// One decoded sensor sample in physical units
///
/// Derived deterministically from a raw register block and the scale
/// factors; its identity is its device timestamp.
#[derive(Debug, Clone, Copy)]
pub struct AttitudeSample {
    /// Device sample timestamp: milliseconds, as reported by the sensor
    pub timestamp_ms: u32,

    /// Yaw: degrees
    pub yaw_deg: f32,

    /// Pitch: degrees
    pub pitch_deg: f32,

    /// Roll: degrees
    pub roll_deg: f32,

    /// Compass heading: degrees, 0.00..=359.99
    pub heading_deg: f32,

    /// Fused 9-axis heading: degrees
    pub fused_heading_deg: f32,

    /// Barometric altitude: meters
    pub altitude_m: f32,

    /// Sensor die temperature: °C
    pub temp_c: f32,

    /// Angular rate: rad/s, body frame
    pub gyro: Vector3<f32>,

    /// Acceleration: m/s², body frame (includes gravity)
    pub accel: Vector3<f32>,

    /// Linear acceleration: m/s², world frame (gravity removed)
    pub linear_accel: Vector3<f32>,
}

impl Default for AttitudeSample {
    fn default() -> Self {
        Self {
            timestamp_ms: 0,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
            heading_deg: 0.0,
            fused_heading_deg: 0.0,
            altitude_m: 0.0,
            temp_c: 25.0,
            gyro: Vector3::zeros(),
            accel: Vector3::zeros(),
            linear_accel: Vector3::zeros(),
        }
    }
}

/// A source of decoded attitude samples
///
/// One capability interface with two implementations: register polling
/// (`NavxRegisterSource`) and a vendor driver wrapper (`AhrsSource`). The
/// acquisition cycle is written against this trait only.
pub trait AttitudeSource {
    /// One-time bring-up before the first acquisition
    ///
    /// Never fatal: degraded startup (missing configuration, device not yet
    /// operational) logs a warning and the source proceeds with defaults.
    fn start(&mut self);

    /// Fetch the most recent sample, if one is available
    ///
    /// Returns `None` on any transient condition — transport fault, short
    /// read, device not ready. The caller simply tries again next cycle;
    /// duplicate suppression is the caller's job.
    fn try_acquire(&mut self) -> Option<AttitudeSample>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned-sample source for exercising the trait surface
    struct CannedSource {
        sample: Option<AttitudeSample>,
        started: bool,
    }

    impl AttitudeSource for CannedSource {
        fn start(&mut self) {
            self.started = true;
        }

        fn try_acquire(&mut self) -> Option<AttitudeSample> {
            self.sample
        }
    }

    #[test]
    fn test_sample_default() {
        let sample = AttitudeSample::default();
        assert_eq!(sample.timestamp_ms, 0);
        assert_eq!(sample.gyro, Vector3::zeros());
        assert_eq!(sample.temp_c, 25.0);
    }

    #[test]
    fn test_source_yields_nothing_until_programmed() {
        let mut source = CannedSource {
            sample: None,
            started: false,
        };
        source.start();
        assert!(source.started);
        assert!(source.try_acquire().is_none());

        source.sample = Some(AttitudeSample {
            timestamp_ms: 42,
            ..Default::default()
        });
        assert_eq!(source.try_acquire().unwrap().timestamp_ms, 42);
    }
}
