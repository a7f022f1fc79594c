// src/readers/mod.rs

//! "Readers" for _sshalib_.
//!
//! * An [`AuthLogReader`] reads an authentication log and derives
//!   [`ReportSection`]s of ssh activity.
//! * A [`ScanSummary`] accumulates statistics about the scans.
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`AuthLogReader`]: crate::readers::authlogreader::AuthLogReader
//! [`ReportSection`]: crate::data::report::ReportSection
//! [`ScanSummary`]: crate::readers::summary::ScanSummary

pub mod authlogreader;
pub mod summary;
