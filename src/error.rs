use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Every failure ends the session; there is no way to resynchronize the
/// byte stream once something went wrong.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Could not establish the connection, or reading from it failed.
    #[error("connection error: {0}")]
    Connection(#[source] io::Error),
    /// A write or flush did not go through.
    #[error("write error: {0}")]
    Write(#[source] io::Error),
    /// The server sent something that could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("strategy error: {0:#}")]
    Strategy(anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port {0:?}: {1}")]
    InvalidPort(String, #[source] ParseIntError),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("failed to read params file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse params file: {0}")]
    Json(#[from] serde_json::Error),
}
