//! Error types for Vidgate Core

use thiserror::Error;

/// Result type alias using VidgateError
pub type Result<T> = std::result::Result<T, VidgateError>;

/// Top-level error type for all Vidgate operations
#[derive(Debug, Error)]
pub enum VidgateError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The shared HTTP session was used outside the startup/shutdown window.
///
/// This is a precondition violation by the caller, not a recoverable runtime
/// condition.
#[derive(Debug, Error)]
#[error("HTTP session is not open")]
pub struct SessionError;

/// Raw bytes that match neither the primary nor the fallback encoding
#[derive(Debug, Error)]
#[error("bytes are not valid UTF-8 or GBK")]
pub struct DecodeError;

/// Errors from checking an external command-line tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// The command exited non-zero; decoded output attached for diagnostics
    #[error("{command} not found: {output}")]
    NotFound { command: String, output: String },

    /// No version token could be located in the tool's output
    #[error("{command} version not found")]
    VersionNotFound { command: String },

    /// A version token was found but did not parse as either format
    #[error("failed to match {command} version: {version}")]
    VersionNotMatched { command: String, version: String },

    /// The version parsed but falls below the supported minimum
    #[error("{command} version too low ({version}), must be 2022+ or above 4.x")]
    TooOld { command: String, version: String },

    #[error("failed to decode tool output: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

/// Neither the trusted header nor the transport peer is a usable address
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid client address: {0}")]
    Invalid(String),

    #[error("no client address available")]
    Missing,
}
