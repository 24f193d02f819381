//! Minimal SMTP client used by the scripted session.
//!
//! One plain TCP [`Connection`], one write and one read per step. Replies are
//! reduced to a [`Response`] and checked against the success range.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use smtptest::client::{Connection, Response};
//!
//! # async fn example() -> smtptest::Result<()> {
//! let mut connection = Connection::connect("localhost:2525", Duration::from_secs(30)).await?;
//! let greeting = Response::parse(&connection.exchange(b"").await?)?;
//! assert!(greeting.is_ok());
//! # Ok(())
//! # }
//! ```

mod connection;
mod error;
mod message;
mod response;
mod script;

pub use connection::{Connection, READ_BUFFER_SIZE};
pub use error::{ClientError, Result};
pub use message::TestMessage;
pub use response::Response;
pub use script::{Step, script};
