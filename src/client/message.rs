//! The test message sent after `DATA`.

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

/// `Date` header layout, RFC 1123 with a numeric zone.
const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A plain text message with `Date`, `Subject` and `From` headers.
///
/// Rendering includes the `.` line that ends the `DATA` phase, so the result
/// can be written to the server as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMessage {
    subject: String,
    from: String,
    body: String,
}

impl TestMessage {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        from: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            from: from.into(),
            body: body.into(),
        }
    }

    /// Renders the message dated now.
    #[must_use]
    pub fn render_now(&self) -> String {
        self.render(&Local::now())
    }

    /// Renders the message with the given `Date` header.
    #[must_use]
    pub fn render<Tz>(&self, date: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let mut message = String::with_capacity(128 + self.body.len());

        // Writing into a String cannot fail.
        let _ = write!(message, "Date: {}\r\n", date.format(DATE_FORMAT));
        let _ = write!(message, "Subject: {}\r\n", self.subject);
        let _ = write!(message, "From: {}\r\n", self.from);
        message.push_str("\r\n");
        message.push_str(&self.body);
        message.push_str("\r\n.\r\n");

        message
    }
}
