// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FieldErrors, ShiftStatus, validate_timezone};
use time::macros::datetime;

#[test]
fn test_no_errors_finishes_ok() {
    let mut errors = FieldErrors::new();
    errors.max_len("note", Some("short"), 500);
    errors.at_least("capacity", Some(1), 1);
    assert!(errors.finish().is_ok());
}

#[test]
fn test_collects_every_error() {
    let mut errors = FieldErrors::new();
    errors.max_len("source", Some(&"x".repeat(51)), 50);
    errors.at_least("capacity", Some(0), 1);
    errors.one_of::<ShiftStatus>("status", Some("archived"), &["draft", "published", "cancelled"]);

    let list = errors.finish().unwrap_err();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].loc, vec!["body", "source"]);
    assert_eq!(list[2].msg, "String should match pattern '^(draft|published|cancelled)$'");
}

#[test]
fn test_window_rejects_reversed_bounds() {
    let mut errors = FieldErrors::new();
    errors.window(
        "start_utc",
        Some(datetime!(2026-03-02 12:00 UTC)),
        "end_utc",
        Some(datetime!(2026-03-02 08:00 UTC)),
    );
    let list = errors.finish().unwrap_err();
    assert_eq!(list[0].msg, "start_utc must be earlier than end_utc");
}

#[test]
fn test_window_skips_partial_bounds() {
    let mut errors = FieldErrors::new();
    errors.window("start_utc", None, "end_utc", Some(datetime!(2026-03-02 08:00 UTC)));
    assert!(errors.is_empty());
}

#[test]
fn test_length_bounds() {
    let mut errors = FieldErrors::new();
    errors.len_between("name", Some(""), 1, 200);
    errors.exact_len("currency", Some("EURO"), 3);
    errors.non_negative("budget_target", Some(-1.0));
    assert_eq!(errors.finish().unwrap_err().len(), 3);
}

#[test]
fn test_timezone_validation() {
    assert!(validate_timezone("Europe/Paris").is_ok());
    assert!(validate_timezone("UTC").is_ok());
    assert!(validate_timezone("Mars/Olympus").is_err());
}
