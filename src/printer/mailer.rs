// src/printer/mailer.rs

//! Implements a [`ReportMailer`] for delivering a report through an SMTP
//! relay.
//!
//! Plaintext submission only, one message per run. One-shot and
//! non-retrying: a refused connection or failed send is reported once and
//! escalated by the driver to a nonzero exit. No timeouts are set; a hung
//! relay hangs the run.

use crate::common::ReportLines;
use crate::error::{Error, Result};
use crate::printer::reportprinter::render_body;

use ::lettre::message::Mailbox;
use ::lettre::{Message, SmtpTransport, Transport};
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// default mail relay host
pub const RELAY_HOST_DEFAULT: &str = "localhost";
/// standard plaintext mail submission port
pub const RELAY_PORT_DEFAULT: u16 = 25;
/// placeholder sender address, meant to be replaced by an operator
pub const SENDER_DEFAULT: &str = "username@localhost";
/// placeholder receiver address, meant to be replaced by an operator
pub const RECEIVER_DEFAULT: &str = "username@localhost";
/// subject line of every report mail
pub const SUBJECT: &str = "ssh activity";

/// Explicit configuration for the mail path, passed into
/// [`ReportMailer::new`]; never module-level mutable state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MailerConfig {
    pub relay_host: String,
    pub relay_port: u16,
    pub sender: String,
    pub receiver: String,
}

impl Default for MailerConfig {
    fn default() -> MailerConfig {
        MailerConfig {
            relay_host: String::from(RELAY_HOST_DEFAULT),
            relay_port: RELAY_PORT_DEFAULT,
            sender: String::from(SENDER_DEFAULT),
            receiver: String::from(RECEIVER_DEFAULT),
        }
    }
}

/// Outcome of a [`ReportMailer::send_report`] call that did not fail.
///
/// Distinguishes "no report to send" from the error cases; an empty
/// report is not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MailOutcome {
    /// the report was submitted to the relay
    Sent,
    /// the report line sequence was empty; nothing was submitted
    NothingToSend,
}

/// One-shot SMTP delivery of a rendered report.
pub struct ReportMailer {
    config: MailerConfig,
    /// `Host: <hostname>` header line, shared with the printed report
    header: String,
}

impl ReportMailer {
    pub fn new(
        config: MailerConfig,
        header: String,
    ) -> ReportMailer {
        defñ!("({:?})", config);

        ReportMailer { config, header }
    }

    /// `host:port` of the configured relay, for messages.
    pub fn relay(&self) -> String {
        format!("{}:{}", self.config.relay_host, self.config.relay_port)
    }

    /// Compose the mail message for `lines`: subject [`SUBJECT`], body
    /// `Host:` header + every report line newline-terminated.
    pub(crate) fn compose(
        &self,
        lines: &ReportLines,
    ) -> Result<Message> {
        let sender: Mailbox = self.config.sender.parse()?;
        let receiver: Mailbox = self.config.receiver.parse()?;
        let message = Message::builder()
            .from(sender)
            .to(receiver)
            .subject(SUBJECT)
            .body(render_body(&self.header, lines))?;

        Ok(message)
    }

    /// Deliver the report.
    ///
    /// The relay connection is attempted first; a refused connection is an
    /// error even when there is nothing to send. On a live connection an
    /// empty `lines` sequence sends nothing and is not an error.
    pub fn send_report(
        &self,
        lines: &ReportLines,
    ) -> Result<MailOutcome> {
        defn!("{} lines", lines.len());
        let transport = SmtpTransport::builder_dangerous(self.config.relay_host.as_str())
            .port(self.config.relay_port)
            .build();
        match transport.test_connection() {
            Ok(true) => {}
            Ok(false) => {
                defx!("return RelayUnavailable");
                return Err(Error::RelayUnavailable { relay: self.relay() });
            }
            Err(err) => {
                defx!("return RelayUnreachable");
                return Err(Error::RelayUnreachable {
                    relay: self.relay(),
                    source: err,
                });
            }
        }
        if lines.is_empty() {
            defx!("return NothingToSend");
            return Ok(MailOutcome::NothingToSend);
        }
        let message = self.compose(lines)?;
        match transport.send(&message) {
            Ok(_response) => {
                defx!("return Sent");
                Ok(MailOutcome::Sent)
            }
            Err(err) => {
                defx!("return MailSend");
                Err(Error::MailSend {
                    relay: self.relay(),
                    source: err,
                })
            }
        }
    }
}
