//! Session parameters.
//!
//! Everything here is fixed at build time. [`Config::default`] is the
//! production target; tests build their own to point at a local server.

use std::time::Duration;

/// Parameters for a single scripted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to dial, `host:port`.
    pub server: String,
    /// Domain announced in `HELO`.
    pub helo_domain: String,
    /// Envelope sender, also used for the `From` header.
    pub sender: String,
    /// Envelope recipient.
    pub recipient: String,
    /// `Subject` header of the test message.
    pub subject: String,
    /// Body text of the test message.
    pub body: String,
    /// Upper bound for the whole session, dial included.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

mod defaults {
    use std::time::Duration;

    pub const SERVER: &str = "mail.burgerdev.de:25";
    pub const HELO_DOMAIN: &str = "test.burgerdev.de";
    pub const SENDER: &str = "no-reply@test.burgerdev.de";
    pub const RECIPIENT: &str = "fritz_smtptest@burgerdev.de";
    pub const SUBJECT: &str = "Hello, World!";
    pub const BODY: &str = "Hi there!";
    pub const TIMEOUT: Duration = Duration::from_secs(30);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: defaults::SERVER.to_string(),
            helo_domain: defaults::HELO_DOMAIN.to_string(),
            sender: defaults::SENDER.to_string(),
            recipient: defaults::RECIPIENT.to_string(),
            subject: defaults::SUBJECT.to_string(),
            body: defaults::BODY.to_string(),
            timeout: defaults::TIMEOUT,
        }
    }
}

impl Config {
    /// Same parameters, different target.
    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
