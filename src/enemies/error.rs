//! Error types for virus behavior and data loading.

use thiserror::Error;

/// Errors raised by the virus state machine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VirusError {
    /// A reference the virus needs this tick is not available.
    #[error("Required reference unavailable: {0}")]
    InvalidReference(&'static str),

    /// An attack was requested while the virus could not start one.
    #[error("Cannot start attack: {reason}")]
    InvalidState { reason: &'static str },

    /// The player sits exactly on the virus, so there is no attack direction.
    #[error("Player is on top of the virus, no attack direction")]
    DegenerateTrajectory,
}

impl VirusError {
    /// True for errors the state machine should make unreachable.
    ///
    /// A degenerate trajectory is an ordinary situation and retried next tick.
    pub fn is_defect(&self) -> bool {
        !matches!(self, VirusError::DegenerateTrajectory)
    }
}

/// Errors that can occur when loading enemy definitions.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}
