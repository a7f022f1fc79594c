// src/data/entry.rs

//! Classification and field extraction for authentication log lines.
//!
//! The line shape is an external convention (syslog-style auth log):
//! whitespace-separated fields where field 0 is a timestamp, fields 7 and 8
//! of a preauth failure line hold the user and source identifiers, and
//! fields 6 and 8 of an "Accepted" line hold them. The fixed token
//! positions are reproduced here exactly; logs written by differently
//! configured syslog daemons will not tokenize the same way.
//! That assumption is deliberately contained in this one module.

use crate::common::ReportLine;
use crate::error::{Error, Result};

/// substring marking an ssh authentication attempt rejected before full
/// session establishment
pub const MARKER_PREAUTH: &str = "preauth";
/// substring referencing a user on a preauth failure line
pub const MARKER_USER: &str = "user";
/// substring logged by sshd upon successful authentication
pub const MARKER_ACCEPTED: &str = "Accepted";

/// whitespace-token index of the timestamp field
pub const TOKEN_TIMESTAMP: usize = 0;
/// token index of the user field on a failed-attempt line
pub const TOKEN_FAILED_USER: usize = 7;
/// token index of the source field on a failed-attempt line
pub const TOKEN_FAILED_SOURCE: usize = 8;
/// token index of the user field on an accepted line
pub const TOKEN_ACCEPTED_USER: usize = 6;
/// token index of the source field on an accepted line
pub const TOKEN_ACCEPTED_SOURCE: usize = 8;

/// Does `line` record a failed ssh attempt?
pub fn line_is_failed(line: &str) -> bool {
    line.contains(MARKER_PREAUTH) && line.contains(MARKER_USER)
}

/// Does `line` record a successful ssh login?
pub fn line_is_successful(line: &str) -> bool {
    line.contains(MARKER_ACCEPTED)
}

/// Return the whitespace-separated token of `line` at `index`.
///
/// A line too short to hold `index` is a [`Error::MalformedLine`];
/// callers propagate it and abort the scan.
fn token_at(
    line: &str,
    index: usize,
) -> Result<&str> {
    match line.split_whitespace().nth(index) {
        Some(token) => Ok(token),
        None => Err(Error::MalformedLine {
            line: line.to_string(),
            token: index,
        }),
    }
}

/// Join the tokens of `line` at `indexes` with single spaces.
fn join_tokens(
    line: &str,
    indexes: &[usize],
) -> Result<ReportLine> {
    let mut entry = ReportLine::new();
    for index in indexes.iter() {
        if !entry.is_empty() {
            entry.push(' ');
        }
        entry.push_str(token_at(line, *index)?);
    }

    Ok(entry)
}

/// Report entry for a failed-attempt line:
/// `<token 0> <token 7> <token 8>`.
pub fn failed_entry(line: &str) -> Result<ReportLine> {
    join_tokens(line, &[TOKEN_TIMESTAMP, TOKEN_FAILED_USER, TOKEN_FAILED_SOURCE])
}

/// Report entry for an accepted line:
/// `<token 0> <token 6> <token 8>`.
pub fn successful_entry(line: &str) -> Result<ReportLine> {
    join_tokens(line, &[TOKEN_TIMESTAMP, TOKEN_ACCEPTED_USER, TOKEN_ACCEPTED_SOURCE])
}
