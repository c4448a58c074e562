//! Domain models for soreness logging.
//!
//! # Core Concepts
//!
//! The catalog and the editing session live in `soreness-core` and are
//! re-exported here. This module adds the wire types for the external
//! soreness-log endpoint:
//!
//! - [`CreateSorenessLogInput`]: One log row, sent per selected muscle at submit.
//! - [`SorenessLog`]: The endpoint's acknowledgement, kept opaque.

mod soreness_log;

pub use soreness_core::{
    Action, BodyZone, MuscleGroup, OverrideProvenance, SelectedMuscle, SelectionSession,
    SessionError, Severity, Side, SorenessLevel,
};
pub use soreness_log::*;
