// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{at, create_test_store, organization, role};
use serde_json::json;
use shiftplan::{AssignmentFilter, EntityStore, MissionFilter, StoreError};
use shiftplan_audit::{Actor, AuditFilter, PlanningAction, PlanningChange, StateSnapshot};
use shiftplan_domain::{
    Assignment, AssignmentStatus, Collaborator, CollaboratorStatus, HrRule, HrSeverity, Mission,
    MissionStatus, Publication, PublicationStatus, SOURCE_MANUAL, ShiftInstance, ShiftStatus,
    Site, UserAvailability,
};
use time::macros::{datetime, offset};

struct Seed {
    organization_id: i64,
    site_id: i64,
    role_id: i64,
    mission_id: i64,
    collaborator_id: i64,
}

fn seed(store: &mut crate::SqliteStore) -> Seed {
    let org = store.insert_organization(organization("Acme")).unwrap();
    let site = store
        .insert_site(Site {
            id: 0,
            organization_id: org.id,
            name: "Main Hall".to_string(),
            timezone: org.timezone.clone(),
            address: None,
        })
        .unwrap();
    let role = store.insert_role(role(org.id, "Steward")).unwrap();
    let mission = store
        .insert_mission(Mission {
            id: 0,
            organization_id: org.id,
            site_id: site.id,
            role_id: role.id,
            team_id: None,
            title: "Spring fair".to_string(),
            start_utc: at(0, 0),
            end_utc: at(72, 0),
            status: MissionStatus::Draft,
            budget_target: Some(1250.5),
            note: None,
        })
        .unwrap();
    let collaborator = store
        .insert_collaborator(Collaborator {
            id: 0,
            organization_id: org.id,
            full_name: "Alex Martin".to_string(),
            email: None,
            primary_role_id: Some(role.id),
            status: CollaboratorStatus::Active,
        })
        .unwrap();
    Seed {
        organization_id: org.id,
        site_id: site.id,
        role_id: role.id,
        mission_id: mission.id,
        collaborator_id: collaborator.id,
    }
}

fn shift(seed: &Seed) -> ShiftInstance {
    ShiftInstance {
        id: 0,
        mission_id: seed.mission_id,
        template_id: None,
        site_id: seed.site_id,
        role_id: seed.role_id,
        team_id: Some(3),
        start_utc: at(8, 0),
        end_utc: at(16, 0),
        status: ShiftStatus::Draft,
        source: SOURCE_MANUAL.to_string(),
        capacity: 2,
    }
}

#[test]
fn test_new_in_memory_enforces_foreign_keys() {
    let mut store = create_test_store();

    assert!(store.verify_foreign_key_enforcement().is_ok());
    assert_eq!(store.backend_name(), "sqlite");
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let mut first = create_test_store();
    let mut second = create_test_store();

    first.insert_organization(organization("Only here")).unwrap();

    assert_eq!(first.list_organizations().unwrap().len(), 1);
    assert!(second.list_organizations().unwrap().is_empty());
}

#[test]
fn test_organization_round_trip() {
    let mut store = create_test_store();

    let stored = store.insert_organization(organization("Acme")).unwrap();

    assert_eq!(stored.id, 1);
    assert_eq!(store.get_organization(stored.id).unwrap(), Some(stored));
    assert_eq!(store.get_organization(99).unwrap(), None);
}

#[test]
fn test_role_tags_round_trip_as_json() {
    let mut store = create_test_store();
    let org = store.insert_organization(organization("Acme")).unwrap();

    let stored = store.insert_role(role(org.id, "Medic")).unwrap();
    let loaded = store.get_role(stored.id).unwrap().unwrap();

    assert_eq!(loaded.tags, vec!["night".to_string(), "first-aid".to_string()]);
}

#[test]
fn test_mission_round_trip_preserves_timestamps_and_budget() {
    let mut store = create_test_store();
    let seed = seed(&mut store);

    let mission = store.get_mission(seed.mission_id).unwrap().unwrap();

    assert_eq!(mission.start_utc, at(0, 0));
    assert_eq!(mission.end_utc, at(72, 0));
    assert_eq!(mission.budget_target, Some(1250.5));
    assert_eq!(
        store
            .list_missions(&MissionFilter {
                site_id: Some(seed.site_id),
                ..MissionFilter::default()
            })
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_timestamps_are_normalized_to_utc() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let mut paris = shift(&seed);
    paris.start_utc = datetime!(2026-03-02 09:00).assume_offset(offset!(+1));
    paris.end_utc = datetime!(2026-03-02 17:00).assume_offset(offset!(+1));

    let stored = store.insert_shift_instance(paris).unwrap();
    let loaded = store.get_shift_instance(stored.id).unwrap().unwrap();

    assert_eq!(loaded.start_utc, at(8, 0));
    assert_eq!(loaded.start_utc.offset(), time::UtcOffset::UTC);
}

#[test]
fn test_shift_and_assignment_round_trip() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let stored_shift = store.insert_shift_instance(shift(&seed)).unwrap();

    let assignment = store
        .insert_assignment(Assignment {
            id: 0,
            shift_instance_id: stored_shift.id,
            collaborator_id: seed.collaborator_id,
            role_id: seed.role_id,
            status: AssignmentStatus::Confirmed,
            source: SOURCE_MANUAL.to_string(),
            is_locked: true,
            note: Some("lead".to_string()),
            created_at: at(1, 0),
            updated_at: at(2, 0),
        })
        .unwrap();

    assert_eq!(
        store.get_shift_instance(stored_shift.id).unwrap(),
        Some(stored_shift.clone())
    );
    assert_eq!(
        store
            .list_assignments(&AssignmentFilter::for_shift(stored_shift.id))
            .unwrap(),
        vec![assignment]
    );
}

#[test]
fn test_update_clears_nullable_fields() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let mut stored = store.insert_shift_instance(shift(&seed)).unwrap();

    stored.team_id = None;
    stored.status = ShiftStatus::Published;
    store.update_shift_instance(&stored).unwrap();

    let loaded = store.get_shift_instance(stored.id).unwrap().unwrap();
    assert_eq!(loaded.team_id, None);
    assert_eq!(loaded.status, ShiftStatus::Published);
}

#[test]
fn test_delete_assignments_for_shift_counts_rows() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let stored_shift = store.insert_shift_instance(shift(&seed)).unwrap();
    for _ in 0..2 {
        store
            .insert_assignment(Assignment {
                id: 0,
                shift_instance_id: stored_shift.id,
                collaborator_id: seed.collaborator_id,
                role_id: seed.role_id,
                status: AssignmentStatus::Proposed,
                source: SOURCE_MANUAL.to_string(),
                is_locked: false,
                note: None,
                created_at: at(0, 0),
                updated_at: at(0, 0),
            })
            .unwrap();
    }

    assert_eq!(store.delete_assignments_for_shift(stored_shift.id).unwrap(), 2);
    store.delete_shift_instance(stored_shift.id).unwrap();
    assert_eq!(store.get_shift_instance(stored_shift.id).unwrap(), None);
}

#[test]
fn test_foreign_keys_reject_dangling_shift() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let mut dangling = shift(&seed);
    dangling.mission_id = 999;

    let result = store.insert_shift_instance(dangling);

    assert!(matches!(result, Err(StoreError::Backend(_))));
}

#[test]
fn test_availability_round_trip() {
    let mut store = create_test_store();
    let seed = seed(&mut store);

    let stored = store
        .insert_availability(UserAvailability {
            id: 0,
            collaborator_id: seed.collaborator_id,
            start_utc: at(0, 0),
            end_utc: at(24, 0),
            is_available: false,
            reason: Some("sick".to_string()),
        })
        .unwrap();

    assert_eq!(
        store.list_availability(Some(seed.collaborator_id)).unwrap(),
        vec![stored]
    );
}

#[test]
fn test_rules_are_scoped_to_organization() {
    let mut store = create_test_store();
    let seed = seed(&mut store);
    let mut config = serde_json::Map::new();
    config.insert("min_rest_minutes".to_string(), json!(60));

    store
        .insert_hr_rule(HrRule {
            id: 0,
            organization_id: seed.organization_id,
            code: "rest_minimum".to_string(),
            severity: HrSeverity::Hard,
            description: None,
            config: config.clone(),
        })
        .unwrap();

    let rules = store.list_hr_rules(seed.organization_id).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].config, config);
    assert!(store.list_hr_rules(seed.organization_id + 1).unwrap().is_empty());

    store.delete_rules_for_organization(seed.organization_id).unwrap();
    assert!(store.list_hr_rules(seed.organization_id).unwrap().is_empty());
}

#[test]
fn test_planning_changes_filter_by_entity() {
    let mut store = create_test_store();
    for entity_id in [1, 2] {
        store
            .append_change(PlanningChange::new(
                1,
                Actor::anonymous(),
                PlanningAction::CreateShift,
                entity_id,
                StateSnapshot::absent(),
                StateSnapshot(json!({"id": entity_id})),
                at(0, 0),
            ))
            .unwrap();
    }

    let changes = store
        .list_changes(&AuditFilter {
            entity_type: Some("shift_instance".to_string()),
            entity_id: Some(2),
            ..AuditFilter::default()
        })
        .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].after()["id"], 2);
    assert_eq!(changes[0].created_at, at(0, 0));
}

#[test]
fn test_publication_update_sets_published_at() {
    let mut store = create_test_store();
    let mut publication = store
        .insert_publication(Publication {
            id: 0,
            organization_id: 1,
            author_user_id: None,
            status: PublicationStatus::Draft,
            version: 1,
            message: None,
            published_at: None,
        })
        .unwrap();

    publication.status = PublicationStatus::Published;
    publication.published_at = Some(at(3, 0));
    store.update_publication(&publication).unwrap();

    assert_eq!(store.list_publications(1).unwrap(), vec![publication]);
}

#[test]
fn test_rollback_discards_writes() {
    let mut store = create_test_store();
    let kept = store.insert_organization(organization("Kept")).unwrap();

    store.begin().unwrap();
    store.insert_organization(organization("Dropped")).unwrap();
    store.rollback().unwrap();

    assert_eq!(store.list_organizations().unwrap(), vec![kept]);
}

#[test]
fn test_nested_begin_is_rejected() {
    let mut store = create_test_store();

    store.begin().unwrap();

    assert!(matches!(store.begin(), Err(StoreError::Transaction(_))));
    store.commit().unwrap();
    assert!(matches!(store.commit(), Err(StoreError::Transaction(_))));
}

#[test]
fn test_ids_are_not_reused() {
    let mut store = create_test_store();
    let first = store.insert_organization(organization("A")).unwrap();

    store.delete_organization(first.id).unwrap();
    let second = store.insert_organization(organization("B")).unwrap();

    assert_eq!(second.id, first.id + 1);
}
