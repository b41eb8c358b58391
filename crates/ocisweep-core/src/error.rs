//! Error types for ocisweep

use thiserror::Error;

/// Main error type for ocisweep-core operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// The oci CLI could not be spawned (not installed or not in PATH)
    #[error("oci CLI not available: {0}")]
    CliUnavailable(String),

    /// An oci CLI invocation exited with a non-zero status
    #[error("`oci {command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// oci CLI output was not valid JSON
    #[error("Failed to parse oci CLI output: {0}")]
    Parse(#[from] serde_json::Error),

    /// oci CLI output parsed but did not have the expected shape
    #[error("Malformed oci CLI output: {0}")]
    MalformedOutput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ocisweep-core operations
pub type Result<T> = std::result::Result<T, SweepError>;
