// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{NOW, at, create_fixture, create_test_context, new_shift};
use crate::{FixedClock, InMemoryStore, NewPublication, PlanningContext};
use shiftplan_audit::{Actor, AuditFilter, PlanningAction, StateSnapshot};
use shiftplan_domain::PublicationStatus;
use time::Duration;

#[test]
fn test_publish_increments_version_per_organization() {
    let mut ctx = create_test_context();
    let fx = create_fixture(&mut ctx);

    let first = ctx
        .publish(NewPublication {
            organization_id: Some(fx.org.id),
            author_user_id: Some(7),
            message: Some("Week 10".to_string()),
        })
        .unwrap();
    let second = ctx
        .publish(NewPublication {
            organization_id: None,
            author_user_id: None,
            message: None,
        })
        .unwrap();

    assert_eq!(first.version, 1);
    assert_eq!(second.version, 2);
    assert_eq!(first.status, PublicationStatus::Published);
    assert_eq!(first.published_at, Some(NOW));
    assert_eq!(second.organization_id, fx.org.id);
    assert_eq!(ctx.list_publications(fx.org.id).unwrap().len(), 2);
}

#[test]
fn test_publish_records_draft_to_published_change() {
    let mut ctx = create_test_context();
    create_fixture(&mut ctx);

    let publication = ctx
        .publish(NewPublication {
            organization_id: None,
            author_user_id: None,
            message: None,
        })
        .unwrap();

    let changes = ctx
        .list_changes(&AuditFilter {
            entity_type: Some("publication".to_string()),
            ..AuditFilter::default()
        })
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].action, "publish_planning");
    assert_eq!(changes[0].entity_id, publication.id);
    assert_eq!(changes[0].before()["status"], "draft");
    assert_eq!(changes[0].after()["status"], "published");
}

#[test]
fn test_list_changes_filters_by_entity_and_time() {
    let mut ctx = create_test_context();
    let fx = create_fixture(&mut ctx);
    let shift = ctx.create_instance(new_shift(&fx, at(8, 0), at(12, 0))).unwrap().shift;
    ctx.create_instance(new_shift(&fx, at(30, 0), at(34, 0))).unwrap();

    let for_shift = ctx
        .list_changes(&AuditFilter {
            entity_type: Some("shift_instance".to_string()),
            entity_id: Some(shift.id),
            ..AuditFilter::default()
        })
        .unwrap();
    let inclusive = ctx
        .list_changes(&AuditFilter {
            from_ts: Some(NOW),
            to_ts: Some(NOW),
            ..AuditFilter::default()
        })
        .unwrap();
    let later = ctx
        .list_changes(&AuditFilter {
            from_ts: Some(NOW + Duration::seconds(1)),
            ..AuditFilter::default()
        })
        .unwrap();

    assert_eq!(for_shift.len(), 1);
    assert_eq!(inclusive.len(), 2);
    assert!(later.is_empty());
}

#[test]
fn test_log_change_records_actor() {
    let mut ctx = PlanningContext::new(InMemoryStore::new()).with_clock(FixedClock(NOW));

    let change = ctx
        .log_change(
            3,
            Actor::user(11),
            PlanningAction::UpdateAssignment,
            5,
            StateSnapshot::absent(),
            StateSnapshot::absent(),
        )
        .unwrap();

    assert_eq!(change.actor_user_id, Some(11));
    assert_eq!(change.organization_id, 3);
    assert_eq!(change.entity_type, "assignment");
    assert_eq!(change.created_at, NOW);
    assert!(change.id > 0);
}
