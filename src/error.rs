// src/error.rs

//! Crate-wide [`Error`] and [`Result`].
//!
//! One enum covers both halves of the program: scanning the authentication
//! log and delivering the report. The mail variants keep the delivery
//! failure modes distinct so the driver can treat "nothing to send"
//! (not an error, see [`MailOutcome`]), "relay unreachable", and
//! "relay accepted the connection but the send failed" differently.
//!
//! [`MailOutcome`]: crate::printer::mailer::MailOutcome

use core::fmt;
use core::result;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// the authentication log could not be opened or read
    Io(std::io::Error),
    /// a qualifying log line is missing an expected whitespace-separated
    /// field; aborts the entire scan
    MalformedLine { line: String, token: usize },
    /// sender or receiver address did not parse
    InvalidAddress(lettre::address::AddressError),
    /// the mail message could not be constructed
    MailMessage(lettre::error::Error),
    /// the mail relay connection could not be established
    RelayUnreachable { relay: String, source: lettre::transport::smtp::Error },
    /// the mail relay accepted the connection but did not respond to
    /// commands
    RelayUnavailable { relay: String },
    /// the mail relay accepted the connection but refused the send
    MailSend { relay: String, source: lettre::transport::smtp::Error },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Io(e) => format!("input/output error: {}", e),
                Self::MalformedLine { line, token } => format!(
                    "log line is missing whitespace-separated field {}: {:?}",
                    token, line
                ),
                Self::InvalidAddress(e) => format!("invalid mail address: {}", e),
                Self::MailMessage(e) => format!("unable to build mail message: {}", e),
                Self::RelayUnreachable { relay, source } =>
                    format!("unable to connect to mail relay {}: {}", relay, source),
                Self::RelayUnavailable { relay } =>
                    format!("mail relay {} connected but is not responding", relay),
                Self::MailSend { relay, source } =>
                    format!("mail relay {} refused the send: {}", relay, source),
            }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<lettre::address::AddressError> for Error {
    fn from(e: lettre::address::AddressError) -> Error {
        Error::InvalidAddress(e)
    }
}

impl From<lettre::error::Error> for Error {
    fn from(e: lettre::error::Error) -> Error {
        Error::MailMessage(e)
    }
}

pub type Result<T> = result::Result<T, Error>;
