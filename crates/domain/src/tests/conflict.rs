// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentCandidate, ConflictEntry, ConflictType, PeerAssignment, RULE_AVAILABILITY_PARTIAL,
    RULE_DOUBLE_BOOKING, RULE_INVALID_STATUS, RULE_LEAVE, RULE_REST_GAP, RULE_TIME_ORDER,
    SOURCE_MANUAL, ShiftCandidate, ShiftInstance, ShiftStatus, UserAvailability,
    evaluate_assignment, evaluate_shift, has_hard_conflict,
};
use time::OffsetDateTime;
use time::macros::datetime;

fn shift(id: i64, start: OffsetDateTime, end: OffsetDateTime, status: ShiftStatus) -> ShiftInstance {
    ShiftInstance {
        id,
        mission_id: 1,
        template_id: None,
        site_id: 1,
        role_id: 1,
        team_id: None,
        start_utc: start,
        end_utc: end,
        status,
        source: SOURCE_MANUAL.to_string(),
        capacity: 1,
    }
}

fn candidate(id: Option<i64>, shift_id: i64) -> AssignmentCandidate {
    AssignmentCandidate {
        id,
        shift_instance_id: shift_id,
        collaborator_id: 7,
        role_id: 1,
    }
}

fn peer(assignment_id: i64, shift: ShiftInstance) -> PeerAssignment {
    PeerAssignment {
        assignment_id,
        collaborator_id: 7,
        shift,
    }
}

fn availability(id: i64, is_available: bool) -> UserAvailability {
    UserAvailability {
        id,
        collaborator_id: 7,
        start_utc: datetime!(2026-03-02 10:00 UTC),
        end_utc: datetime!(2026-03-02 12:00 UTC),
        is_available,
        reason: Some("vacation".to_string()),
    }
}

fn rules(conflicts: &[ConflictEntry]) -> Vec<&str> {
    conflicts.iter().map(|c| c.rule.as_str()).collect()
}

fn morning(id: i64, status: ShiftStatus) -> ShiftInstance {
    shift(
        id,
        datetime!(2026-03-02 08:00 UTC),
        datetime!(2026-03-02 16:00 UTC),
        status,
    )
}

#[test]
fn test_time_order_when_start_equals_end() {
    let at = datetime!(2026-03-02 08:00 UTC);
    let conflicts = evaluate_shift(&ShiftCandidate {
        id: None,
        start_utc: at,
        end_utc: at,
        status: "draft".to_string(),
    });

    assert_eq!(rules(&conflicts), vec![RULE_TIME_ORDER]);
    assert_eq!(conflicts[0].conflict_type, ConflictType::Hard);
}

#[test]
fn test_time_order_when_start_after_end() {
    let conflicts = evaluate_shift(&ShiftCandidate {
        id: Some(3),
        start_utc: datetime!(2026-03-02 18:00 UTC),
        end_utc: datetime!(2026-03-02 08:00 UTC),
        status: "published".to_string(),
    });

    assert_eq!(rules(&conflicts), vec![RULE_TIME_ORDER]);
    assert_eq!(
        conflicts[0].details["start_utc"],
        serde_json::json!("2026-03-02T18:00:00Z")
    );
}

#[test]
fn test_valid_shift_has_no_conflicts() {
    let conflicts = evaluate_shift(&ShiftCandidate::from(&morning(1, ShiftStatus::Draft)));
    assert!(conflicts.is_empty());
}

#[test]
fn test_unknown_status_is_reported() {
    let conflicts = evaluate_shift(&ShiftCandidate {
        id: None,
        start_utc: datetime!(2026-03-02 08:00 UTC),
        end_utc: datetime!(2026-03-02 09:00 UTC),
        status: "archived".to_string(),
    });

    assert_eq!(rules(&conflicts), vec![RULE_INVALID_STATUS]);
    assert_eq!(conflicts[0].details["status"], serde_json::json!("archived"));
}

#[test]
fn test_unresolved_shift_yields_nothing() {
    let peers = vec![peer(1, morning(1, ShiftStatus::Draft))];
    let conflicts = evaluate_assignment(&candidate(None, 99), None, &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_double_booking_on_overlapping_shifts() {
    let first = morning(1, ShiftStatus::Draft);
    let second = shift(
        2,
        datetime!(2026-03-02 12:00 UTC),
        datetime!(2026-03-02 20:00 UTC),
        ShiftStatus::Published,
    );
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(Some(11), 2), Some(&second), &peers, &[]);

    assert_eq!(rules(&conflicts), vec![RULE_DOUBLE_BOOKING]);
    assert!(has_hard_conflict(&conflicts));
    assert_eq!(conflicts[0].details["shift_instance_id"], serde_json::json!(1));
}

#[test]
fn test_double_booking_ignores_self() {
    let first = morning(1, ShiftStatus::Draft);
    let peers = vec![peer(10, first.clone())];

    let conflicts = evaluate_assignment(&candidate(Some(10), 1), Some(&first), &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_double_booking_ignores_other_collaborators() {
    let first = morning(1, ShiftStatus::Draft);
    let second = morning(2, ShiftStatus::Draft);
    let mut other = peer(10, first);
    other.collaborator_id = 8;

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &[other], &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_no_double_booking_when_peer_shift_cancelled() {
    let first = morning(1, ShiftStatus::Cancelled);
    let second = morning(2, ShiftStatus::Draft);
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);
    assert!(!rules(&conflicts).contains(&RULE_DOUBLE_BOOKING));
}

#[test]
fn test_no_double_booking_when_candidate_shift_cancelled() {
    let first = morning(1, ShiftStatus::Published);
    let second = morning(2, ShiftStatus::Cancelled);
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_adjacent_shifts_do_not_overlap() {
    let first = morning(1, ShiftStatus::Draft);
    let second = shift(
        2,
        datetime!(2026-03-02 16:00 UTC),
        datetime!(2026-03-02 20:00 UTC),
        ShiftStatus::Draft,
    );
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_rest_gap_of_thirty_minutes() {
    let first = morning(1, ShiftStatus::Draft);
    let second = shift(
        2,
        datetime!(2026-03-02 16:30 UTC),
        datetime!(2026-03-02 22:00 UTC),
        ShiftStatus::Draft,
    );
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);

    assert_eq!(rules(&conflicts), vec![RULE_REST_GAP]);
    assert_eq!(conflicts[0].details["previous_shift_id"], serde_json::json!(1));
    assert_eq!(conflicts[0].details["gap_seconds"], serde_json::json!(1800));
}

#[test]
fn test_rest_gap_of_ninety_minutes_is_fine() {
    let first = morning(1, ShiftStatus::Draft);
    let second = shift(
        2,
        datetime!(2026-03-02 17:30 UTC),
        datetime!(2026-03-02 22:00 UTC),
        ShiftStatus::Draft,
    );
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_rest_gap_is_forward_only() {
    // Candidate ends 30 minutes before the peer starts.
    let later = shift(
        1,
        datetime!(2026-03-02 16:30 UTC),
        datetime!(2026-03-02 22:00 UTC),
        ShiftStatus::Draft,
    );
    let candidate_shift = morning(2, ShiftStatus::Draft);
    let peers = vec![peer(10, later)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&candidate_shift), &peers, &[]);
    assert!(conflicts.is_empty());
}

#[test]
fn test_rest_gap_applies_to_cancelled_peer() {
    let first = morning(1, ShiftStatus::Cancelled);
    let second = shift(
        2,
        datetime!(2026-03-02 16:30 UTC),
        datetime!(2026-03-02 22:00 UTC),
        ShiftStatus::Draft,
    );
    let peers = vec![peer(10, first)];

    let conflicts = evaluate_assignment(&candidate(None, 2), Some(&second), &peers, &[]);
    assert_eq!(rules(&conflicts), vec![RULE_REST_GAP]);
}

#[test]
fn test_leave_overlap_is_hard() {
    let target = morning(1, ShiftStatus::Draft);
    let conflicts = evaluate_assignment(
        &candidate(None, 1),
        Some(&target),
        &[],
        &[availability(5, false)],
    );

    assert_eq!(rules(&conflicts), vec![RULE_LEAVE]);
    assert_eq!(conflicts[0].conflict_type, ConflictType::Hard);
    assert_eq!(conflicts[0].details["availability_id"], serde_json::json!(5));
}

#[test]
fn test_partial_availability_overlap_is_soft() {
    let target = morning(1, ShiftStatus::Draft);
    let conflicts = evaluate_assignment(
        &candidate(None, 1),
        Some(&target),
        &[],
        &[availability(5, true)],
    );

    assert_eq!(rules(&conflicts), vec![RULE_AVAILABILITY_PARTIAL]);
    assert_eq!(conflicts[0].conflict_type, ConflictType::Soft);
    assert!(!has_hard_conflict(&conflicts));
}

#[test]
fn test_availability_outside_shift_is_ignored() {
    let target = shift(
        1,
        datetime!(2026-03-03 08:00 UTC),
        datetime!(2026-03-03 16:00 UTC),
        ShiftStatus::Draft,
    );
    let conflicts = evaluate_assignment(
        &candidate(None, 1),
        Some(&target),
        &[],
        &[availability(5, false)],
    );
    assert!(conflicts.is_empty());
}

#[test]
fn test_categories_are_ordered() {
    let overlapping = shift(
        1,
        datetime!(2026-03-02 09:00 UTC),
        datetime!(2026-03-02 11:00 UTC),
        ShiftStatus::Draft,
    );
    let early = shift(
        2,
        datetime!(2026-03-02 05:00 UTC),
        datetime!(2026-03-02 07:30 UTC),
        ShiftStatus::Draft,
    );
    let target = morning(3, ShiftStatus::Draft);
    let peers = vec![peer(20, early), peer(21, overlapping)];

    let conflicts = evaluate_assignment(
        &candidate(None, 3),
        Some(&target),
        &peers,
        &[availability(5, false)],
    );

    assert_eq!(
        rules(&conflicts),
        vec![RULE_DOUBLE_BOOKING, RULE_REST_GAP, RULE_LEAVE]
    );
}

#[test]
fn test_conflict_entry_serializes_type_field() {
    let conflicts = evaluate_assignment(
        &candidate(None, 1),
        Some(&morning(1, ShiftStatus::Draft)),
        &[],
        &[availability(5, false)],
    );
    let value = serde_json::to_value(&conflicts[0]).unwrap();

    assert_eq!(value["type"], "hard");
    assert_eq!(value["rule"], "leave");
    assert_eq!(value["details"]["reason"], "vacation");
}
