//! Core bridge functionality
//!
//! This module contains the acquisition cycle that drives the bridge and the
//! logging infrastructure shared by the rest of the crate.

pub mod acquisition;
pub mod logging;
