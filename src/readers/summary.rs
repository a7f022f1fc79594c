// src/readers/summary.rs

//! Implements a `ScanSummary` statistics tracking struct.

use crate::common::Count;

use std::fmt;

/// Accumulated statistics about [`AuthLogReader`] scans of one
/// authentication log.
///
/// For CLI option `--summary`.
///
/// [`AuthLogReader`]: crate::readers::authlogreader::AuthLogReader
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScanSummary {
    /// lines read from the log, accumulated across scans; the log is
    /// reread once per `find_*` call so each line counts once per scan
    pub count_lines: Count,
    /// lines that became failed-attempt report entries
    pub count_failed: Count,
    /// lines that became successful-login report entries
    pub count_successful: Count,
}

impl fmt::Display for ScanSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "lines read {}, failed ssh attempts {}, successful ssh logins {}",
            self.count_lines, self.count_failed, self.count_successful,
        )
    }
}
