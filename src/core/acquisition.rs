//! Acquisition Cycle
//!
//! One iteration of the bridge: fetch a sample from the configured source,
//! suppress duplicates by device timestamp, and emit a frame for every
//! genuinely new sample.
//!
//! # State Machine
//!
//! `WaitingForDevice` (initial) runs the source's one-time bring-up on the
//! first invocation, then the cycle stays in `Streaming` for the rest of the
//! session. Every fault inside a cycle degrades to "no frame this cycle";
//! the caller just keeps invoking `run_once()` at its polling rate.

use crate::communication::frame::FrameEmitter;
use crate::devices::traits::AttitudeSource;
use crate::platform::UartInterface;

/// Acquisition state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Startup handshake not yet run
    WaitingForDevice,
    /// Steady-state polling
    Streaming,
}

/// The bridge's acquisition loop body
///
/// Owns the sample source, the frame emitter and all per-stream state, so
/// several independent bridges can coexist and tests stay isolated.
pub struct AcquisitionCycle<S, U> {
    /// Sample source strategy
    source: S,
    /// Frame output
    emitter: FrameEmitter<U>,
    /// Startup state
    state: CycleState,
    /// Device timestamp of the last emitted sample (`None` = nothing emitted yet)
    last_timestamp: Option<u32>,
}

impl<S, U> AcquisitionCycle<S, U>
where
    S: AttitudeSource,
    U: UartInterface,
{
    /// Create a cycle from a source strategy and an emitter
    pub fn new(source: S, emitter: FrameEmitter<U>) -> Self {
        Self {
            source,
            emitter,
            state: CycleState::WaitingForDevice,
            last_timestamp: None,
        }
    }

    /// Current acquisition state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Device timestamp of the last emitted sample
    pub fn last_timestamp(&self) -> Option<u32> {
        self.last_timestamp
    }

    /// Access the frame emitter (statistics, field list)
    pub fn emitter(&self) -> &FrameEmitter<U> {
        &self.emitter
    }

    /// Access the sample source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one acquisition cycle
    ///
    /// Returns `true` if a frame was emitted. `false` covers the normal
    /// quiet cases: no new sample yet (polling faster than the sensor
    /// updates), and transient bus faults that resolve themselves on a
    /// later invocation.
    pub fn run_once(&mut self) -> bool {
        if self.state == CycleState::WaitingForDevice {
            self.source.start();
            self.state = CycleState::Streaming;
        }

        let Some(sample) = self.source.try_acquire() else {
            return false;
        };

        // No new sample yet: the sensor's clock has not advanced
        if self.last_timestamp == Some(sample.timestamp_ms) {
            return false;
        }

        self.last_timestamp = Some(sample.timestamp_ms);
        self.emitter.emit(&sample);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::traits::AttitudeSample;
    use crate::platform::mock::MockUart;
    use std::vec::Vec;

    /// Scripted source: yields a fixed sequence of acquisition results
    struct ScriptedSource {
        script: Vec<Option<AttitudeSample>>,
        starts: u32,
    }

    impl ScriptedSource {
        fn new(script: Vec<Option<AttitudeSample>>) -> Self {
            Self { script, starts: 0 }
        }
    }

    impl AttitudeSource for ScriptedSource {
        fn start(&mut self) {
            self.starts += 1;
        }

        fn try_acquire(&mut self) -> Option<AttitudeSample> {
            if self.script.is_empty() {
                None
            } else {
                self.script.remove(0)
            }
        }
    }

    fn ts(ms: u32) -> Option<AttitudeSample> {
        Some(AttitudeSample {
            timestamp_ms: ms,
            ..Default::default()
        })
    }

    fn cycle(script: Vec<Option<AttitudeSample>>) -> AcquisitionCycle<ScriptedSource, MockUart> {
        AcquisitionCycle::new(
            ScriptedSource::new(script),
            FrameEmitter::new(MockUart::new(Default::default())),
        )
    }

    #[test]
    fn test_startup_runs_exactly_once() {
        let mut cycle = cycle(vec![None, None, None]);
        assert_eq!(cycle.state(), CycleState::WaitingForDevice);

        cycle.run_once();
        assert_eq!(cycle.state(), CycleState::Streaming);

        cycle.run_once();
        cycle.run_once();
        assert_eq!(cycle.source().starts, 1);
    }

    #[test]
    fn test_duplicate_timestamp_emits_once() {
        // Two consecutive fetches with the same device timestamp: one frame
        let mut cycle = cycle(vec![ts(1000), ts(1000)]);

        assert!(cycle.run_once());
        assert!(!cycle.run_once());

        assert_eq!(cycle.emitter().stats().frames_sent, 1);
        assert_eq!(cycle.last_timestamp(), Some(1000));
    }

    #[test]
    fn test_new_timestamp_emits_again() {
        let mut cycle = cycle(vec![ts(1000), ts(1000), ts(1005), ts(1005)]);

        assert!(cycle.run_once());
        assert!(!cycle.run_once());
        assert!(cycle.run_once());
        assert!(!cycle.run_once());

        assert_eq!(cycle.emitter().stats().frames_sent, 2);
        assert_eq!(cycle.last_timestamp(), Some(1005));
    }

    #[test]
    fn test_failed_fetch_leaves_dedup_state_unchanged() {
        let mut cycle = cycle(vec![ts(1000), None, ts(1000)]);

        assert!(cycle.run_once());
        // Transport fault: nothing emitted, last timestamp untouched
        assert!(!cycle.run_once());
        assert_eq!(cycle.last_timestamp(), Some(1000));
        // Same timestamp after recovery is still a duplicate
        assert!(!cycle.run_once());
        assert_eq!(cycle.emitter().stats().frames_sent, 1);
    }

    #[test]
    fn test_quiet_source_emits_nothing() {
        let mut cycle = cycle(vec![]);
        for _ in 0..5 {
            assert!(!cycle.run_once());
        }
        assert_eq!(cycle.emitter().stats().frames_sent, 0);
        assert_eq!(cycle.last_timestamp(), None);
    }

    #[test]
    fn test_timestamp_zero_is_a_valid_sample() {
        // A device timestamp of 0 must still produce a frame the first time
        let mut cycle = cycle(vec![ts(0), ts(0)]);
        assert!(cycle.run_once());
        assert!(!cycle.run_once());
        assert_eq!(cycle.emitter().stats().frames_sent, 1);
    }
}
