//! Scripted SMTP delivery check.
//!
//! Connects to a mail server over plain TCP, walks a fixed
//! `HELO`/`MAIL FROM`/`RCPT TO`/`DATA`/`QUIT` conversation and fails on the
//! first reply outside the success range.

pub mod client;
pub mod config;
pub mod logging;
pub mod session;

pub use client::{ClientError, Result};
pub use config::Config;
pub use session::run;
pub use tracing;

/// Process exit status for any failed session.
pub const EXIT_FAILURE: u8 = 2;

/// Maps the outcome of a session onto the process exit status.
pub const fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => EXIT_FAILURE,
    }
}
