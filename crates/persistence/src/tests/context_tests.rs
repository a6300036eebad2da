// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Planning operations running against the `SQLite` store.

use super::{NOW, at, create_test_context};
use shiftplan::{
    AssignmentFilter, CoreError, NewAssignment, NewCollaborator, NewMission, NewOrganization,
    NewPublication, NewRole, NewShiftInstance, NewSite, PlanningContext, ShiftListFilter,
};
use shiftplan_audit::AuditFilter;
use shiftplan_domain::{
    AssignmentStatus, CollaboratorStatus, MissionStatus, SOURCE_MANUAL, ShiftStatus,
};

struct Ids {
    site: i64,
    role: i64,
    mission: i64,
    collaborator: i64,
}

fn setup(ctx: &mut PlanningContext) -> Ids {
    let org = ctx
        .create_organization(NewOrganization {
            name: "Acme".to_string(),
            ..NewOrganization::default()
        })
        .unwrap();
    let site = ctx
        .create_site(NewSite {
            organization_id: org.id,
            name: "Hall".to_string(),
            ..NewSite::default()
        })
        .unwrap();
    let role = ctx
        .create_role(NewRole {
            organization_id: org.id,
            name: "Steward".to_string(),
            ..NewRole::default()
        })
        .unwrap();
    let mission = ctx
        .create_mission(NewMission {
            site_id: site.id,
            role_id: role.id,
            team_id: None,
            title: "Fair".to_string(),
            start_utc: at(0, 0),
            end_utc: at(48, 0),
            status: MissionStatus::Draft,
            budget_target: None,
            note: None,
        })
        .unwrap();
    let collaborator = ctx
        .create_collaborator(NewCollaborator {
            organization_id: org.id,
            full_name: "Alex".to_string(),
            status: CollaboratorStatus::Active,
            ..NewCollaborator::default()
        })
        .unwrap();
    Ids {
        site: site.id,
        role: role.id,
        mission: mission.id,
        collaborator: collaborator.id,
    }
}

fn new_shift(ids: &Ids, start_hour: i64, end_hour: i64) -> NewShiftInstance {
    NewShiftInstance {
        mission_id: ids.mission,
        template_id: None,
        site_id: ids.site,
        role_id: ids.role,
        team_id: None,
        start_utc: at(start_hour, 0),
        end_utc: at(end_hour, 0),
        status: ShiftStatus::Draft,
        source: SOURCE_MANUAL.to_string(),
        capacity: 1,
    }
}

fn new_assignment(ids: &Ids, shift_instance_id: i64) -> NewAssignment {
    NewAssignment {
        shift_instance_id,
        collaborator_id: ids.collaborator,
        role_id: ids.role,
        status: AssignmentStatus::Proposed,
        source: SOURCE_MANUAL.to_string(),
        note: None,
        is_locked: false,
    }
}

#[test]
fn test_double_booking_is_reported_on_sqlite() {
    let mut ctx = create_test_context();
    let ids = setup(&mut ctx);
    let first = ctx.create_instance(new_shift(&ids, 8, 12)).unwrap().shift;
    let second = ctx.create_instance(new_shift(&ids, 10, 14)).unwrap().shift;
    ctx.create_assignment(new_assignment(&ids, first.id)).unwrap();

    let result = ctx.create_assignment(new_assignment(&ids, second.id)).unwrap();

    assert_eq!(ctx.backend_name(), "sqlite");
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.conflicts[0].rule, "double_booking");
}

#[test]
fn test_delete_instance_cascades_on_sqlite() {
    let mut ctx = create_test_context();
    let ids = setup(&mut ctx);
    let shift = ctx.create_instance(new_shift(&ids, 8, 12)).unwrap().shift;
    ctx.create_assignment(new_assignment(&ids, shift.id)).unwrap();

    ctx.delete_instance(shift.id).unwrap();

    assert!(ctx.list_instances(&ShiftListFilter::default()).unwrap().is_empty());
    assert!(ctx
        .list_assignments(&AssignmentFilter::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_failed_auto_assign_rolls_back_on_sqlite() {
    let mut ctx = create_test_context();
    let ids = setup(&mut ctx);
    ctx.create_instance(new_shift(&ids, 8, 12)).unwrap();
    let cancelled = ctx.create_instance(new_shift(&ids, 20, 24)).unwrap().shift;
    ctx.update_status(cancelled.id, ShiftStatus::Cancelled).unwrap();
    let changes_before = ctx.list_changes(&AuditFilter::default()).unwrap().len();

    let err = ctx.start_auto_assign(None).unwrap_err();

    assert!(matches!(err, CoreError::Validation(_)));
    assert!(ctx
        .list_assignments(&AssignmentFilter::default())
        .unwrap()
        .is_empty());
    assert_eq!(
        ctx.list_changes(&AuditFilter::default()).unwrap().len(),
        changes_before
    );
}

#[test]
fn test_audit_and_publication_on_sqlite() {
    let mut ctx = create_test_context();
    let ids = setup(&mut ctx);
    ctx.create_instance(new_shift(&ids, 8, 12)).unwrap();

    let publication = ctx
        .publish(NewPublication {
            organization_id: None,
            author_user_id: Some(4),
            message: Some("Week 10".to_string()),
        })
        .unwrap();

    let changes = ctx.list_changes(&AuditFilter::default()).unwrap();
    let actions: Vec<&str> = changes.iter().map(|c| c.action.as_str()).collect();
    assert_eq!(actions, vec!["create_shift", "publish_planning"]);
    assert!(changes.iter().all(|c| c.created_at == NOW));
    assert_eq!(publication.version, 1);
    assert_eq!(publication.published_at, Some(NOW));
}

#[test]
fn test_seeded_rules_persist() {
    let mut ctx = create_test_context();
    setup(&mut ctx);

    let rules = ctx.list_rules(1).unwrap();

    assert_eq!(rules.hr_rules.len(), 1);
    assert_eq!(rules.conflict_rules.len(), 3);
    assert_eq!(rules.hr_rules[0].config["min_rest_minutes"], 60);
}
