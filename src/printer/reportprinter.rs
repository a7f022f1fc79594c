// src/printer/reportprinter.rs

//! Implements a [`ReportPrinter`] for writing a report to the terminal.

use std::io::Write; // for `StandardStream.flush`

use crate::common::ReportLines;
use crate::data::report::line_is_title;
#[allow(unused_imports)]
use crate::debug::printers::de_wrn;
use crate::error::Result;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};
#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// [`Color`] for printing section title lines.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_TITLE: Color = Color::Yellow;

/// Return the local hostname for the report header.
fn hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(_err) => {
            de_wrn!("gethostname failed: {}", _err);
            String::from("unknown")
        }
    }
}

/// Render the full report body: `header` line, blank line, then every
/// report line newline-terminated.
pub fn render_body(
    header: &str,
    lines: &ReportLines,
) -> String {
    let mut body = String::with_capacity(header.len() + 2 + lines.len() * 40);
    body.push_str(header);
    body.push_str("\n\n");
    for line in lines.iter() {
        body.push_str(line);
        body.push('\n');
    }

    body
}

/// Writes a combined report to STDOUT.
///
/// The `Host: <hostname>` header is computed once at construction.
/// Printing always happens regardless of whether mailing is attempted and
/// has no failure mode beyond STDOUT write errors.
pub struct ReportPrinter {
    /// `Host: <hostname>` header line
    header: String,
    color_choice: ColorChoice,
}

impl ReportPrinter {
    pub fn new(color_choice: ColorChoice) -> ReportPrinter {
        defñ!("({:?})", color_choice);

        ReportPrinter {
            header: format!("Host: {}", hostname()),
            color_choice,
        }
    }

    /// The `Host: <hostname>` header line (no trailing newline).
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Write the header and every report line to STDOUT. Section title
    /// lines are highlighted when color is enabled.
    pub fn print_report(
        &self,
        lines: &ReportLines,
    ) -> Result<()> {
        defn!("{} lines", lines.len());
        let mut stdout = StandardStream::stdout(self.color_choice);
        writeln!(stdout, "{}", self.header)?;
        writeln!(stdout)?;
        for line in lines.iter() {
            if line_is_title(line) {
                stdout.set_color(ColorSpec::new().set_fg(Some(COLOR_TITLE)))?;
                writeln!(stdout, "{}", line)?;
                stdout.reset()?;
            } else {
                writeln!(stdout, "{}", line)?;
            }
        }
        stdout.flush()?;
        defx!();

        Ok(())
    }
}
