// src/data/report.rs

//! Implements a [`ReportSection`] and the combined report rendering.

use crate::common::{Count, ReportLine, ReportLines};

use ::more_asserts::debug_assert_ge;

/// title of the failed ssh attempts section
pub const TITLE_FAILED: &str = "Failed ssh attempts:";
/// title of the successful ssh logins section
pub const TITLE_SUCCESSFUL: &str = "Successful ssh logins:";

/// separator line character under a section title
const SEPARATOR_CHAR: &str = "-";

/// One titled section of an ssh activity report; an ordered, append-only
/// sequence of report entries.
///
/// Rendering with [`lines`] yields the title line, a separator line of
/// dashes whose length equals the title's character length, the entries in
/// insertion order, and one trailing empty line used as a visual separator
/// when sections are concatenated.
///
/// [`lines`]: ReportSection::lines
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSection {
    title: &'static str,
    entries: ReportLines,
}

impl ReportSection {
    pub fn new(title: &'static str) -> ReportSection {
        ReportSection {
            title,
            entries: ReportLines::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Append one report entry.
    pub fn push(
        &mut self,
        entry: ReportLine,
    ) {
        self.entries.push(entry);
    }

    /// Count of entries (framing lines not included).
    pub fn count(&self) -> Count {
        self.entries.len() as Count
    }

    /// Render the section: title, separator, entries, one empty line.
    ///
    /// A section with zero entries still renders its three framing lines.
    pub fn lines(&self) -> ReportLines {
        let mut lines = ReportLines::with_capacity(self.entries.len() + 3);
        lines.push(ReportLine::from(self.title));
        lines.push(SEPARATOR_CHAR.repeat(self.title.chars().count()));
        lines.extend(self.entries.iter().cloned());
        lines.push(ReportLine::new());
        debug_assert_ge!(lines.len(), 3);

        lines
    }
}

/// Concatenate the rendered `failed` section followed immediately by the
/// rendered `successful` section, no reordering.
pub fn combine(
    failed: &ReportSection,
    successful: &ReportSection,
) -> ReportLines {
    let mut lines = failed.lines();
    lines.extend(successful.lines());

    lines
}

/// Is `line` a section title line? Used by the printer for highlighting.
pub fn line_is_title(line: &str) -> bool {
    line == TITLE_FAILED || line == TITLE_SUCCESSFUL
}
