//! Muscle soreness logging.
//!
//! The cascade engine lives in `soreness-core`; this crate wires it to the
//! soreness-log API, renders it, and drives it from the command line.

pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod tracker;
pub mod views;
