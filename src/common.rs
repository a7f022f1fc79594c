// src/common.rs

//! Common imports, type aliases, and other globals (avoids circular
//! imports).

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FPaths = Vec<FPath>;

/// general-purpose counting type
pub type Count = u64;

/// one rendered line of an ssh activity report
pub type ReportLine = String;
/// ordered rendered report lines
pub type ReportLines = Vec<ReportLine>;

/// default path of the authentication log
pub const PATH_AUTH_LOG_DEFAULT: &str = "/var/log/auth.log";
