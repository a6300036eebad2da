// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::datetime;

#[test]
fn test_invalid_time_window_display() {
    let err = DomainError::InvalidTimeWindow {
        start: datetime!(2026-03-02 10:00 UTC),
        end: datetime!(2026-03-02 09:00 UTC),
    };
    let msg = err.to_string();
    assert!(msg.contains("must be earlier than"));
}

#[test]
fn test_invalid_status_display() {
    let err = DomainError::InvalidStatus {
        kind: "shift",
        value: "archived".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid shift status: 'archived'");
}

#[test]
fn test_invalid_timezone_display() {
    let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
    assert_eq!(err.to_string(), "Unknown timezone: 'Mars/Olympus'");
}

#[test]
fn test_domain_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&DomainError::InvalidConflictType("maybe".to_string()));
}
