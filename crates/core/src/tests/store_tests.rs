// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssignmentFilter, EntityStore, InMemoryStore, StoreError};
use shiftplan_audit::{Actor, AuditFilter, PlanningAction, PlanningChange, StateSnapshot};
use shiftplan_domain::{Organization, Role};
use time::macros::datetime;

fn organization(name: &str) -> Organization {
    Organization {
        id: 0,
        name: name.to_string(),
        timezone: "UTC".to_string(),
        currency: "EUR".to_string(),
        contact_email: None,
    }
}

#[test]
fn test_insert_assigns_sequential_ids() {
    let mut store = InMemoryStore::new();

    let first = store.insert_organization(organization("A")).unwrap();
    let second = store.insert_organization(organization("B")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(store.get_organization(2).unwrap(), Some(second));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let mut store = InMemoryStore::new();
    let first = store.insert_organization(organization("A")).unwrap();

    store.delete_organization(first.id).unwrap();
    let next = store.insert_organization(organization("B")).unwrap();

    assert_eq!(next.id, 2);
    assert_eq!(store.get_organization(first.id).unwrap(), None);
}

#[test]
fn test_rollback_restores_previous_state() {
    let mut store = InMemoryStore::new();
    let kept = store.insert_organization(organization("Kept")).unwrap();

    store.begin().unwrap();
    assert!(store.in_transaction());
    store.insert_organization(organization("Dropped")).unwrap();
    store.delete_organization(kept.id).unwrap();
    store.rollback().unwrap();

    assert!(!store.in_transaction());
    assert_eq!(store.list_organizations().unwrap(), vec![kept]);
}

fn change(entity_id: i64) -> PlanningChange {
    PlanningChange::new(
        1,
        Actor::anonymous(),
        PlanningAction::CreateShift,
        entity_id,
        StateSnapshot::absent(),
        StateSnapshot::absent(),
        datetime!(2026-03-01 12:00 UTC),
    )
}

#[test]
fn test_rollback_discards_only_changes_appended_in_transaction() {
    let mut store = InMemoryStore::new();
    store.append_change(change(10)).unwrap();

    store.begin().unwrap();
    store.append_change(change(11)).unwrap();
    store.append_change(change(12)).unwrap();
    store.rollback().unwrap();

    let changes = store.list_changes(&AuditFilter::default()).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].entity_id, 10);

    let next = store.append_change(change(13)).unwrap();
    assert_eq!(next.id, 2);
}

#[test]
fn test_commit_keeps_appended_changes() {
    let mut store = InMemoryStore::new();

    store.begin().unwrap();
    store.append_change(change(10)).unwrap();
    store.commit().unwrap();

    assert_eq!(store.list_changes(&AuditFilter::default()).unwrap().len(), 1);
}

#[test]
fn test_commit_keeps_changes() {
    let mut store = InMemoryStore::new();

    store.begin().unwrap();
    store.insert_organization(organization("Kept")).unwrap();
    store.commit().unwrap();

    assert_eq!(store.list_organizations().unwrap().len(), 1);
}

#[test]
fn test_nested_begin_is_rejected() {
    let mut store = InMemoryStore::new();

    store.begin().unwrap();

    assert!(matches!(store.begin(), Err(StoreError::Transaction(_))));
}

#[test]
fn test_commit_without_transaction_fails() {
    let mut store = InMemoryStore::new();

    assert!(matches!(store.commit(), Err(StoreError::Transaction(_))));
    assert!(matches!(store.rollback(), Err(StoreError::Transaction(_))));
}

#[test]
fn test_list_roles_filters_by_organization() {
    let mut store = InMemoryStore::new();
    for organization_id in [1, 2, 1] {
        store
            .insert_role(Role {
                id: 0,
                organization_id,
                name: format!("role-{organization_id}"),
                description: None,
                tags: Vec::new(),
            })
            .unwrap();
    }

    assert_eq!(store.list_roles(Some(1)).unwrap().len(), 2);
    assert_eq!(store.list_roles(None).unwrap().len(), 3);
    assert!(store
        .list_assignments(&AssignmentFilter::default())
        .unwrap()
        .is_empty());
}
