//! Error types for chordlib operations.
//!
//! [`ChordError`] wraps every failure the public API can report. Layout itself
//! is infallible: once a [`ChordFingering`](crate::model::ChordFingering)
//! exists, positions outside the fret window are dropped rather than raised.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::model::MalformedInput;
use crate::source::AcquisitionError;

/// The main error type for chordlib operations.
#[derive(Debug, Error)]
pub enum ChordError {
    #[error("Malformed chord: {0}")]
    Malformed(#[from] MalformedInput),

    #[error("Chord lookup failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
