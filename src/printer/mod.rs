// src/printer/mod.rs

//! Printing and delivery of ssh activity reports.
//!
//! * A [`ReportPrinter`] writes the combined report to STDOUT.
//! * A [`ReportMailer`] submits the same report to an SMTP relay.
//!
//! [`ReportPrinter`]: crate::printer::reportprinter::ReportPrinter
//! [`ReportMailer`]: crate::printer::mailer::ReportMailer

pub mod mailer;
pub mod reportprinter;
