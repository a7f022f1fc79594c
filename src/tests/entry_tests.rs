// src/tests/entry_tests.rs

//! tests for `src/data/entry.rs` functions

use crate::data::entry::{
    failed_entry,
    line_is_failed,
    line_is_successful,
    successful_entry,
};
use crate::error::Error;

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case("Disconnected from authenticating user root 10.0.0.5 port 52222 [preauth]", true; "user and preauth")]
#[test_case("Connection from 10.0.0.5 closed [preauth]", false; "preauth without user")]
#[test_case("session opened for user root by (uid=0)", false; "user without preauth")]
#[test_case("Accepted password for admin from 10.0.0.1 port 22 ssh2", false; "accepted line")]
#[test_case("", false; "empty line")]
fn test_line_is_failed(
    line: &str,
    expected: bool,
) {
    assert_eq!(line_is_failed(line), expected);
}

#[test_case("Accepted password for admin from 10.0.0.1 port 22 ssh2", true; "accepted password")]
#[test_case("Accepted publickey for deploy from 10.0.0.7 port 22 ssh2", true; "accepted publickey")]
#[test_case("accepted password for admin", false; "marker is case sensitive")]
#[test_case("Failed password for root from 10.0.0.5 port 52222 ssh2", false; "failed line")]
#[test_case("", false; "empty line")]
fn test_line_is_successful(
    line: &str,
    expected: bool,
) {
    assert_eq!(line_is_successful(line), expected);
}

// extraction is positional; tokens 0, 7, 8 for failed lines

#[test_case(
    "t0 t1 t2 t3 t4 t5 t6 t7 t8",
    "t0 t7 t8";
    "nine tokens"
)]
#[test_case(
    "t0 t1 t2 t3 t4 t5 t6 t7 t8 t9 t10",
    "t0 t7 t8";
    "trailing tokens ignored"
)]
#[test_case(
    "t0  t1\tt2 t3  t4 t5 t6 t7 t8",
    "t0 t7 t8";
    "whitespace runs collapse"
)]
#[test_case(
    "2026-01-07T11:48:14 myhost sshd[101]: Disconnected from authenticating user root 10.0.0.5 port 52222 [preauth]",
    "2026-01-07T11:48:14 root 10.0.0.5";
    "iso timestamp preauth disconnect"
)]
fn test_failed_entry(
    line: &str,
    expected: &str,
) {
    assert_eq!(failed_entry(line).unwrap(), expected);
}

// extraction is positional; tokens 0, 6, 8 for accepted lines

#[test_case(
    "t0 t1 t2 t3 t4 t5 t6 t7 t8",
    "t0 t6 t8";
    "nine tokens"
)]
#[test_case(
    "2026-01-07T11:48:10 myhost sshd[100]: Accepted password for admin from 10.0.0.1 port 22 ssh2",
    "2026-01-07T11:48:10 admin 10.0.0.1";
    "iso timestamp accepted password"
)]
#[test_case(
    "Jan 1 00:00:02 host sshd[2]: Accepted password for admin from 10.0.0.1 port 22 ssh2",
    "Jan password admin";
    "syslog timestamp shifts the fields"
)]
fn test_successful_entry(
    line: &str,
    expected: &str,
) {
    assert_eq!(successful_entry(line).unwrap(), expected);
}

// a qualifying line lacking the expected positions is a typed error

#[test_case("user preauth", 7; "two tokens")]
#[test_case("t0 t1 t2 t3 t4 t5 t6 t7", 8; "token 7 present token 8 missing")]
#[test_case("", 0; "empty line")]
fn test_failed_entry_malformed(
    line: &str,
    expected_token: usize,
) {
    match failed_entry(line) {
        Err(Error::MalformedLine { token, .. }) => assert_eq!(token, expected_token),
        result => panic!("expected Err(MalformedLine) got {:?}", result),
    }
}

#[test_case("Accepted", 6; "one token")]
#[test_case("t0 t1 t2 t3 t4 t5 t6 t7", 8; "token 6 present token 8 missing")]
fn test_successful_entry_malformed(
    line: &str,
    expected_token: usize,
) {
    match successful_entry(line) {
        Err(Error::MalformedLine { token, .. }) => assert_eq!(token, expected_token),
        result => panic!("expected Err(MalformedLine) got {:?}", result),
    }
}
