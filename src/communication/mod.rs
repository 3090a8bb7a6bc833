//! Host-Side Communication
//!
//! This module implements the output side of the bridge: the fixed-width
//! text frame protocol consumed by the host-side serial parser.

pub mod frame;

pub use frame::{FieldName, FrameEmitter, EmitterStats, DEFAULT_FIELDS, FRAME_MARKER};
