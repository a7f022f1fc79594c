// src/tests/report_tests.rs

//! tests for `src/data/report.rs`

use crate::data::report::{
    combine,
    line_is_title,
    ReportSection,
    TITLE_FAILED,
    TITLE_SUCCESSFUL,
};

use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test_case(TITLE_FAILED; "failed title")]
#[test_case(TITLE_SUCCESSFUL; "successful title")]
fn test_empty_section_is_framing_only(title: &'static str) {
    let section = ReportSection::new(title);
    let lines = section.lines();
    assert_eq!(lines.len(), 3, "empty section renders exactly 3 lines");
    assert_eq!(lines[0], title);
    assert_eq!(lines[2], "");
}

#[test_case(TITLE_FAILED; "failed title")]
#[test_case(TITLE_SUCCESSFUL; "successful title")]
fn test_separator_length_equals_title_length(title: &'static str) {
    let section = ReportSection::new(title);
    let lines = section.lines();
    assert_eq!(lines[1].chars().count(), title.chars().count());
    assert!(lines[1].chars().all(|c| c == '-'));
}

#[test]
fn test_entries_render_in_insertion_order() {
    let mut section = ReportSection::new(TITLE_FAILED);
    section.push(String::from("t0 root 10.0.0.5"));
    section.push(String::from("t0 admin 10.0.0.6"));
    assert_eq!(section.count(), 2);
    let lines = section.lines();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "t0 root 10.0.0.5");
    assert_eq!(lines[3], "t0 admin 10.0.0.6");
    assert_eq!(lines[4], "");
}

#[test]
fn test_combine_is_failed_then_successful() {
    let mut failed = ReportSection::new(TITLE_FAILED);
    failed.push(String::from("f1"));
    let mut successful = ReportSection::new(TITLE_SUCCESSFUL);
    successful.push(String::from("s1"));

    let combined = combine(&failed, &successful);
    let mut expected = failed.lines();
    expected.extend(successful.lines());
    assert_eq!(combined, expected);
    assert_eq!(combined[0], TITLE_FAILED);
    assert_eq!(combined[failed.lines().len()], TITLE_SUCCESSFUL);
}

#[test_case(TITLE_FAILED, true; "failed title")]
#[test_case(TITLE_SUCCESSFUL, true; "successful title")]
#[test_case("", false; "empty line")]
#[test_case("t0 root 10.0.0.5", false; "entry line")]
#[test_case("--------------------", false; "separator line")]
fn test_line_is_title(
    line: &str,
    expected: bool,
) {
    assert_eq!(line_is_title(line), expected);
}
