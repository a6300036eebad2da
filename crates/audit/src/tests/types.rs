// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Actor, AuditFilter, EntityType, PlanningAction, PlanningChange, StateSnapshot};
use shiftplan_domain::{SOURCE_MANUAL, ShiftInstance, ShiftStatus};
use time::macros::datetime;

fn sample_shift() -> ShiftInstance {
    ShiftInstance {
        id: 12,
        mission_id: 3,
        template_id: None,
        site_id: 1,
        role_id: 2,
        team_id: None,
        start_utc: datetime!(2026-03-02 08:00 UTC),
        end_utc: datetime!(2026-03-02 16:00 UTC),
        status: ShiftStatus::Draft,
        source: SOURCE_MANUAL.to_string(),
        capacity: 2,
    }
}

fn change_at(action: PlanningAction, entity_id: i64, at: time::OffsetDateTime) -> PlanningChange {
    PlanningChange::new(
        1,
        Actor::anonymous(),
        action,
        entity_id,
        StateSnapshot::absent(),
        StateSnapshot::absent(),
        at,
    )
}

#[test]
fn test_actor_constructors() {
    assert_eq!(Actor::anonymous().user_id, None);
    assert_eq!(Actor::user(9).user_id, Some(9));
}

#[test]
fn test_action_names_and_entities() {
    assert_eq!(PlanningAction::CreateShift.as_str(), "create_shift");
    assert_eq!(
        PlanningAction::CreateShift.entity_type(),
        EntityType::ShiftInstance
    );
    assert_eq!(
        PlanningAction::DeleteShiftTemplate.entity_type().as_str(),
        "shift_template"
    );
    assert_eq!(PlanningAction::PublishPlanning.to_string(), "publish_planning");
    assert_eq!(
        PlanningAction::UpdateAssignment.entity_type(),
        EntityType::Assignment
    );
}

#[test]
fn test_snapshot_captures_all_fields() {
    let snapshot = StateSnapshot::capture(&sample_shift()).unwrap();

    assert!(!snapshot.is_absent());
    assert_eq!(snapshot.0["id"], 12);
    assert_eq!(snapshot.0["status"], "draft");
    assert_eq!(snapshot.0["start_utc"], "2026-03-02T08:00:00Z");
}

#[test]
fn test_change_carries_before_and_after() {
    let before = StateSnapshot::capture(&sample_shift()).unwrap();
    let mut updated = sample_shift();
    updated.status = ShiftStatus::Published;
    let after = StateSnapshot::capture(&updated).unwrap();

    let change = PlanningChange::new(
        1,
        Actor::user(4),
        PlanningAction::UpdateShift,
        12,
        before,
        after,
        datetime!(2026-03-01 09:00 UTC),
    );

    assert_eq!(change.id, 0);
    assert_eq!(change.actor_user_id, Some(4));
    assert_eq!(change.entity_type, "shift_instance");
    assert_eq!(change.action, "update_shift");
    assert_eq!(change.before()["status"], "draft");
    assert_eq!(change.after()["status"], "published");
}

#[test]
fn test_delete_change_has_no_after() {
    let change = PlanningChange::new(
        1,
        Actor::anonymous(),
        PlanningAction::DeleteShift,
        12,
        StateSnapshot::capture(&sample_shift()).unwrap(),
        StateSnapshot::absent(),
        datetime!(2026-03-01 09:00 UTC),
    );
    assert!(change.after().is_null());
    assert_eq!(change.before()["id"], 12);
}

#[test]
fn test_empty_filter_matches_everything() {
    let change = change_at(PlanningAction::CreateShift, 1, datetime!(2026-03-01 09:00 UTC));
    assert!(AuditFilter::default().matches(&change));
}

#[test]
fn test_filter_time_bounds_are_inclusive() {
    let at = datetime!(2026-03-01 09:00 UTC);
    let change = change_at(PlanningAction::CreateShift, 1, at);

    let exact = AuditFilter {
        from_ts: Some(at),
        to_ts: Some(at),
        ..AuditFilter::default()
    };
    assert!(exact.matches(&change));

    let later = AuditFilter {
        from_ts: Some(datetime!(2026-03-01 09:00:01 UTC)),
        ..AuditFilter::default()
    };
    assert!(!later.matches(&change));
}

#[test]
fn test_filter_by_entity() {
    let change = change_at(
        PlanningAction::CreateAssignment,
        5,
        datetime!(2026-03-01 09:00 UTC),
    );

    let by_type = AuditFilter {
        entity_type: Some("assignment".to_string()),
        ..AuditFilter::default()
    };
    let wrong_type = AuditFilter {
        entity_type: Some("shift_instance".to_string()),
        ..AuditFilter::default()
    };
    let wrong_id = AuditFilter {
        entity_type: Some("assignment".to_string()),
        entity_id: Some(6),
        ..AuditFilter::default()
    };

    assert!(by_type.matches(&change));
    assert!(!wrong_type.matches(&change));
    assert!(!wrong_id.matches(&change));
}
