//! Drives the scripted conversation and records the transcript.

use std::io::Write;

use crate::{
    client::{ClientError, Connection, Response, Result, Step, script},
    config::Config,
    internal,
};

/// Runs the whole conversation against `config.server`.
///
/// Each client line is echoed to `transcript` as `client> ...` before it is
/// sent, and each raw reply as `server> ...` once received. Stops at the
/// first failure; the connection is dropped without a `QUIT` in that case.
///
/// # Errors
///
/// Returns the first connect, I/O, timeout or parse error, or
/// `ClientError::Rejected` for a reply outside the success range.
pub async fn run<W: Write>(config: &Config, transcript: &mut W) -> Result<()> {
    let mut connection = Connection::connect(&config.server, config.timeout).await?;

    for step in script(config) {
        let response = exchange(&mut connection, &step, transcript).await?;

        if !response.is_ok() {
            internal!(level = WARN, "{step:?} rejected with {response}");
            return Err(ClientError::Rejected(response));
        }
    }

    internal!(level = INFO, "Session with {} completed", config.server);

    Ok(())
}

async fn exchange<W: Write>(
    connection: &mut Connection,
    step: &Step,
    transcript: &mut W,
) -> Result<Response> {
    let line = step.line();

    write!(transcript, "client> {line}")?;
    if line.is_empty() {
        writeln!(transcript)?;
    }

    let reply = connection.exchange(line.as_bytes()).await?;

    transcript.write_all(b"server> ")?;
    transcript.write_all(&reply)?;
    transcript.flush()?;

    Response::parse(&reply)
}
