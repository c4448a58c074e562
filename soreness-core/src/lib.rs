//! Domain core for soreness tracking.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! - [`MuscleGroup`]: An atomic anatomical area a user can mark as sore.
//! - [`BodyZone`]: A named, possibly overlapping collection of muscle groups.
//!   Six of them ([`BodyZone::REGIONS`]) partition the anatomical muscles.
//! - [`SorenessLevel`]: Severity rating from 0 (none) to 5 (severe).
//!
//! ## Session
//!
//! - [`SelectionSession`]: The editing state for one soreness entry. Levels can be
//!   set at four granularities (full body, side, region, muscle) and cascade down
//!   to the muscles they cover.
//! - [`OverrideProvenance`]: Which granularity last decided a muscle's level.
//!   Setters never overwrite a `manual` muscle; the full-body and side toggles do.
//! - [`Action`]: A single user input event, applied with [`SelectionSession::apply`].

mod action;
mod level;
mod muscle;
mod provenance;
mod session;
mod zone;

pub use action::*;
pub use level::*;
pub use muscle::*;
pub use provenance::*;
pub use session::*;
pub use zone::*;
