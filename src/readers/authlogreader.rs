// src/readers/authlogreader.rs

//! Implements an [`AuthLogReader`].
//!
//! An `AuthLogReader` makes single linear passes over one authentication
//! log. Each `find_*` call opens and reads the log independently; file
//! contents are not cached across calls. The file handle is scoped to the
//! call and closed on drop whether or not the scan errors.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::common::{FPath, ReportLine};
use crate::data::entry::{failed_entry, line_is_failed, line_is_successful, successful_entry};
use crate::data::report::{ReportSection, TITLE_FAILED, TITLE_SUCCESSFUL};
use crate::error::Result;
use crate::readers::summary::ScanSummary;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Reads an authentication log and derives [`ReportSection`]s of
/// ssh activity.
///
/// All-or-nothing: the first unreadable file or malformed qualifying line
/// aborts the scan with an error and no partial section is returned.
pub struct AuthLogReader {
    /// path of the authentication log
    path: FPath,
    /// statistics accumulated across `find_*` calls
    summary: ScanSummary,
}

impl AuthLogReader {
    pub fn new(path: FPath) -> AuthLogReader {
        defñ!("({:?})", path);

        AuthLogReader {
            path,
            summary: ScanSummary::default(),
        }
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Scan the log for failed ssh attempts.
    ///
    /// One report entry per qualifying line, in file order.
    pub fn find_failed(&mut self) -> Result<ReportSection> {
        defn!();
        let mut section = ReportSection::new(TITLE_FAILED);
        self.scan(&mut section, line_is_failed, failed_entry)?;
        self.summary.count_failed += section.count();
        defx!("{} entries", section.count());

        Ok(section)
    }

    /// Scan the log for successful ssh logins.
    ///
    /// One report entry per qualifying line, in file order.
    pub fn find_successful(&mut self) -> Result<ReportSection> {
        defn!();
        let mut section = ReportSection::new(TITLE_SUCCESSFUL);
        self.scan(&mut section, line_is_successful, successful_entry)?;
        self.summary.count_successful += section.count();
        defx!("{} entries", section.count());

        Ok(section)
    }

    /// One pass over the log: classify each line with `is_match`, derive a
    /// report entry from each qualifying line with `extract`.
    fn scan(
        &mut self,
        section: &mut ReportSection,
        is_match: fn(&str) -> bool,
        extract: fn(&str) -> Result<ReportLine>,
    ) -> Result<()> {
        defn!("({:?})", self.path);
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line?;
            self.summary.count_lines += 1;
            if !is_match(&line) {
                continue;
            }
            defo!("match {:?}", line);
            section.push(extract(&line)?);
        }
        defx!();

        Ok(())
    }
}
