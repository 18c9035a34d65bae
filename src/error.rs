//! Centralized error types.
//!
//! The simulation itself cannot fail; these cover the input the headless
//! driver accepts from the outside.

/// Main error type for the crate.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Key script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Errors raised while parsing a key script.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Entry {0:?} is not of the form <timestamp>:<direction>")]
    MissingSeparator(String),

    #[error("Invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("Unknown direction {0:?}")]
    UnknownDirection(String),
}

/// Result type for fallible operations.
pub type GameResult<T> = Result<T, GameError>;
