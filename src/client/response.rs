//! SMTP response parsing and representation.

use std::fmt;

use super::error::{ClientError, Result};

/// A server reply reduced to its status code and trailing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The SMTP status code (e.g., 220, 250, 550).
    pub code: u16,
    /// The text following the code, without the line terminator.
    pub message: String,
}

impl Response {
    /// Creates a new `Response`.
    #[must_use]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns `true` for positive completion and intermediate codes (2xx, 3xx).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 400
    }

    /// Parses raw reply bytes.
    ///
    /// Only the text up to the first space is taken as the code, so a
    /// multi-line reply (`250-...`) is rejected.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Parse` if there is no space or the leading token
    /// is not a number.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(data);

        let Some((code, message)) = text.split_once(' ') else {
            return Err(ClientError::Parse(format!(
                "could not parse response {text:?}"
            )));
        };

        let code = code
            .parse::<u16>()
            .map_err(|_| ClientError::Parse(format!("could not parse response code {code:?}")))?;

        let message = message
            .strip_suffix("\r\n")
            .or_else(|| message.strip_suffix('\n'))
            .unwrap_or(message);

        Ok(Self::new(code, message))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}
