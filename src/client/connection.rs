//! Plain TCP connection and the write-then-read exchange.

use std::time::Duration;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time::{Instant, timeout_at},
};

use crate::{incoming, internal, outgoing};

use super::error::{ClientError, Result};

/// Size of the single read performed per exchange.
pub const READ_BUFFER_SIZE: usize = 1024;

/// An open session with the server.
///
/// Every operation is bounded by the deadline fixed when the connection was
/// dialed.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    deadline: Instant,
    timeout: Duration,
}

impl Connection {
    /// Dials `addr`, giving the whole session `timeout` to complete.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Connect` if the dial fails and
    /// `ClientError::Timeout` if it does not finish in time.
    pub async fn connect(addr: &str, timeout: Duration) -> Result<Self> {
        let deadline = Instant::now() + timeout;

        internal!(level = DEBUG, "Connecting to {addr}");

        let stream = timeout_at(deadline, TcpStream::connect(addr))
            .await
            .map_err(|_| ClientError::Timeout(timeout))?
            .map_err(|source| ClientError::Connect {
                addr: addr.to_string(),
                source,
            })?;

        internal!(level = INFO, "Connected to {addr} ({:?})", stream.peer_addr().ok());

        Ok(Self {
            stream,
            deadline,
            timeout,
        })
    }

    /// The instant after which no further I/O is attempted.
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Writes `data`, then performs a single read of at most
    /// [`READ_BUFFER_SIZE`] bytes and returns what was read.
    ///
    /// An empty `data` skips the write, which is how the greeting is
    /// collected. Replies spanning several reads are truncated to the first.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Io` on a failed write or read,
    /// `ClientError::ConnectionClosed` when the server hangs up and
    /// `ClientError::Timeout` once the deadline passes.
    pub async fn exchange(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        if !data.is_empty() {
            outgoing!("{:?}", String::from_utf8_lossy(data));
            timeout_at(self.deadline, self.stream.write_all(data))
                .await
                .map_err(|_| ClientError::Timeout(self.timeout))??;
        }

        let mut buf = vec![0u8; READ_BUFFER_SIZE];
        let n = timeout_at(self.deadline, self.stream.read(&mut buf))
            .await
            .map_err(|_| ClientError::Timeout(self.timeout))??;

        if n == 0 {
            return Err(ClientError::ConnectionClosed);
        }

        buf.truncate(n);
        incoming!("{:?}", String::from_utf8_lossy(&buf));

        Ok(buf)
    }
}
