// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentStatus, CollaboratorStatus, ConflictSeverity, ConflictType, DomainError,
    HrSeverity, PublicationStatus, SOURCE_MANUAL, ShiftInstance, ShiftStatus, TimeWindow,
    default_conflict_rules, default_hr_rules, overlaps,
};
use std::str::FromStr;
use time::macros::datetime;

#[test]
fn test_shift_status_round_trip_names() {
    for status in [ShiftStatus::Draft, ShiftStatus::Published, ShiftStatus::Cancelled] {
        assert_eq!(ShiftStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_shift_status_rejects_unknown() {
    let err = ShiftStatus::from_str("Draft").unwrap_err();
    assert!(matches!(err, DomainError::InvalidStatus { kind: "shift", .. }));
}

#[test]
fn test_shift_status_graph() {
    assert!(ShiftStatus::Draft.can_transition_to(ShiftStatus::Published));
    assert!(ShiftStatus::Draft.can_transition_to(ShiftStatus::Cancelled));
    assert!(ShiftStatus::Published.can_transition_to(ShiftStatus::Cancelled));

    assert!(!ShiftStatus::Published.can_transition_to(ShiftStatus::Draft));
    assert!(!ShiftStatus::Cancelled.can_transition_to(ShiftStatus::Draft));
    assert!(!ShiftStatus::Cancelled.can_transition_to(ShiftStatus::Published));
    assert!(!ShiftStatus::Draft.can_transition_to(ShiftStatus::Draft));
}

#[test]
fn test_other_status_vocabularies() {
    assert_eq!(
        AssignmentStatus::from_str("confirmed").unwrap(),
        AssignmentStatus::Confirmed
    );
    assert!(AssignmentStatus::from_str("cancelled").is_err());
    assert_eq!(
        CollaboratorStatus::from_str("inactive").unwrap(),
        CollaboratorStatus::Inactive
    );
    assert!(PublicationStatus::Draft.can_transition_to(PublicationStatus::Published));
    assert!(!PublicationStatus::Published.can_transition_to(PublicationStatus::Draft));
    assert!(HrSeverity::from_str("error").is_err());
    assert!(ConflictSeverity::from_str("hard").is_err());
    assert_eq!(ConflictType::from_str("soft").unwrap(), ConflictType::Soft);
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(ShiftStatus::Published).unwrap(),
        serde_json::json!("published")
    );
    let parsed: AssignmentStatus = serde_json::from_str("\"rejected\"").unwrap();
    assert_eq!(parsed, AssignmentStatus::Rejected);
}

#[test]
fn test_time_window_requires_order() {
    let start = datetime!(2026-03-02 08:00 UTC);
    let end = datetime!(2026-03-02 16:00 UTC);

    assert!(TimeWindow::new(start, end).is_ok());
    assert!(TimeWindow::new(start, start).is_err());
    assert!(TimeWindow::new(end, start).is_err());
}

#[test]
fn test_time_window_normalizes_to_utc() {
    let window = TimeWindow::new(
        datetime!(2026-03-02 10:00 +02:00),
        datetime!(2026-03-02 12:00 +02:00),
    )
    .unwrap();
    assert_eq!(window.start(), datetime!(2026-03-02 08:00 UTC));
    assert_eq!(window.duration(), time::Duration::hours(2));
}

#[test]
fn test_overlap_is_half_open() {
    let a = TimeWindow::new(
        datetime!(2026-03-02 08:00 UTC),
        datetime!(2026-03-02 12:00 UTC),
    )
    .unwrap();
    let b = TimeWindow::new(
        datetime!(2026-03-02 12:00 UTC),
        datetime!(2026-03-02 14:00 UTC),
    )
    .unwrap();
    let c = TimeWindow::new(
        datetime!(2026-03-02 11:59 UTC),
        datetime!(2026-03-02 14:00 UTC),
    )
    .unwrap();

    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
    assert!(overlaps(c.start(), c.end(), a.start(), a.end()));
}

#[test]
fn test_shift_window_accessor() {
    let mut shift = ShiftInstance {
        id: 1,
        mission_id: 1,
        template_id: None,
        site_id: 1,
        role_id: 1,
        team_id: None,
        start_utc: datetime!(2026-03-02 08:00 UTC),
        end_utc: datetime!(2026-03-02 16:00 UTC),
        status: ShiftStatus::Draft,
        source: SOURCE_MANUAL.to_string(),
        capacity: 1,
    };
    assert!(shift.window().is_some());

    shift.end_utc = shift.start_utc;
    assert!(shift.window().is_none());
}

#[test]
fn test_default_rule_descriptors() {
    let hr = default_hr_rules(4);
    assert_eq!(hr.len(), 1);
    assert_eq!(hr[0].code, "rest_minimum");
    assert_eq!(hr[0].severity, HrSeverity::Hard);
    assert_eq!(hr[0].config["min_rest_minutes"], serde_json::json!(60));
    assert_eq!(hr[0].organization_id, 4);

    let conflict = default_conflict_rules(4);
    assert!(
        conflict
            .iter()
            .any(|r| r.code == "double_booking" && r.severity == ConflictSeverity::Error)
    );
}
