//! Error types for the SMTP client.

use std::io;

use thiserror::Error;

use super::response::Response;

/// Everything that can end a session early.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Dialing the server failed.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// IO error while writing a command or reading a reply.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The server closed the connection instead of replying.
    #[error("Connection closed unexpectedly")]
    ConnectionClosed,

    /// The session deadline passed.
    #[error("session deadline exceeded after {0:?}")]
    Timeout(std::time::Duration),

    /// The reply did not start with `<code> `.
    #[error("{0}")]
    Parse(String),

    /// The reply code is outside the success range.
    #[error("server rejected command: {0}")]
    Rejected(Response),
}

/// Specialized `Result` type for SMTP client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
