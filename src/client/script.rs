//! The fixed conversation driven by the session.

use std::borrow::Cow;

use crate::config::Config;

use super::message::TestMessage;

/// One write/read round trip with the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Send nothing, read the `220` greeting.
    Greeting,
    Helo(String),
    MailFrom(String),
    RcptTo(String),
    Data,
    /// Message content including the terminating `.` line.
    Message(String),
    Quit,
}

impl Step {
    /// The exact bytes written to the server for this step.
    pub fn line(&self) -> Cow<'_, str> {
        match self {
            Self::Greeting => Cow::Borrowed(""),
            Self::Helo(domain) => Cow::Owned(format!("HELO {domain}\r\n")),
            Self::MailFrom(from) => Cow::Owned(format!("MAIL FROM: {from}\r\n")),
            Self::RcptTo(to) => Cow::Owned(format!("RCPT TO: {to}\r\n")),
            Self::Data => Cow::Borrowed("DATA\r\n"),
            Self::Message(content) => Cow::Borrowed(content),
            Self::Quit => Cow::Borrowed("QUIT\r\n"),
        }
    }
}

/// Builds the conversation for `config`, with the message dated now.
pub fn script(config: &Config) -> Vec<Step> {
    let message = TestMessage::new(&config.subject, &config.sender, &config.body);

    vec![
        Step::Greeting,
        Step::Helo(config.helo_domain.clone()),
        Step::MailFrom(config.sender.clone()),
        Step::RcptTo(config.recipient.clone()),
        Step::Data,
        Step::Message(message.render_now()),
        Step::Quit,
    ]
}
