// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use crate::store::{AssignmentFilter, EntityStore, MissionFilter, ShiftInstanceFilter};
use shiftplan_audit::{AuditFilter, PlanningChange};
use shiftplan_domain::{
    Assignment, Collaborator, ConflictRule, HrRule, Mission, Organization, Publication, Role,
    ShiftInstance, ShiftTemplate, Site, UserAvailability,
};
use std::collections::BTreeMap;

trait Keyed: Clone {
    fn key(&self) -> i64;
    fn set_key(&mut self, id: i64);
}

macro_rules! keyed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                fn key(&self) -> i64 {
                    self.id
                }

                fn set_key(&mut self, id: i64) {
                    self.id = id;
                }
            }
        )*
    };
}

keyed!(
    Organization,
    Site,
    Role,
    Collaborator,
    Mission,
    ShiftTemplate,
    ShiftInstance,
    Assignment,
    UserAvailability,
    HrRule,
    ConflictRule,
    PlanningChange,
    Publication,
);

/// Rows of one entity kind keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Keyed> Table<T> {
    fn insert(&mut self, mut row: T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        row.set_key(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn update(&mut self, row: &T) {
        if let Some(existing) = self.rows.get_mut(&row.key()) {
            *existing = row.clone();
        }
    }

    fn delete(&mut self, id: i64) {
        self.rows.remove(&id);
    }

    fn list(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }

    /// Drops every row inserted since `next_id` was observed.
    fn truncate(&mut self, next_id: i64) {
        self.rows.retain(|id, _| *id < next_id);
        self.next_id = next_id;
    }
}

#[derive(Debug, Clone, Default)]
struct Tables {
    organizations: Table<Organization>,
    sites: Table<Site>,
    roles: Table<Role>,
    collaborators: Table<Collaborator>,
    missions: Table<Mission>,
    templates: Table<ShiftTemplate>,
    instances: Table<ShiftInstance>,
    assignments: Table<Assignment>,
    availability: Table<UserAvailability>,
    hr_rules: Table<HrRule>,
    conflict_rules: Table<ConflictRule>,
    publications: Table<Publication>,
}

/// State captured on `begin`. The change log is append-only, so only its
/// next id is kept and rollback cuts it back to that point.
#[derive(Debug)]
struct Snapshot {
    tables: Box<Tables>,
    changes_next_id: i64,
}

/// An [`EntityStore`] held entirely in process memory.
///
/// A transaction snapshots the entity tables on `begin` and restores the
/// snapshot on `rollback`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Tables,
    changes: Table<PlanningChange>,
    snapshot: Option<Snapshot>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl EntityStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        if self.snapshot.is_some() {
            return Err(StoreError::Transaction(
                "transaction already in progress".to_string(),
            ));
        }
        self.snapshot = Some(Snapshot {
            tables: Box::new(self.tables.clone()),
            changes_next_id: self.changes.next_id,
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| StoreError::Transaction("no transaction to commit".to_string()))
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or_else(|| StoreError::Transaction("no transaction to roll back".to_string()))?;
        self.tables = *snapshot.tables;
        self.changes.truncate(snapshot.changes_next_id);
        Ok(())
    }

    fn insert_organization(&mut self, org: Organization) -> Result<Organization, StoreError> {
        Ok(self.tables.organizations.insert(org))
    }

    fn get_organization(&mut self, id: i64) -> Result<Option<Organization>, StoreError> {
        Ok(self.tables.organizations.get(id))
    }

    fn list_organizations(&mut self) -> Result<Vec<Organization>, StoreError> {
        Ok(self.tables.organizations.list(|_| true))
    }

    fn update_organization(&mut self, org: &Organization) -> Result<(), StoreError> {
        self.tables.organizations.update(org);
        Ok(())
    }

    fn delete_organization(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.organizations.delete(id);
        Ok(())
    }

    fn insert_site(&mut self, site: Site) -> Result<Site, StoreError> {
        Ok(self.tables.sites.insert(site))
    }

    fn get_site(&mut self, id: i64) -> Result<Option<Site>, StoreError> {
        Ok(self.tables.sites.get(id))
    }

    fn list_sites(&mut self, organization_id: Option<i64>) -> Result<Vec<Site>, StoreError> {
        Ok(self
            .tables
            .sites
            .list(|s| organization_id.is_none_or(|id| s.organization_id == id)))
    }

    fn update_site(&mut self, site: &Site) -> Result<(), StoreError> {
        self.tables.sites.update(site);
        Ok(())
    }

    fn delete_site(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.sites.delete(id);
        Ok(())
    }

    fn insert_role(&mut self, role: Role) -> Result<Role, StoreError> {
        Ok(self.tables.roles.insert(role))
    }

    fn get_role(&mut self, id: i64) -> Result<Option<Role>, StoreError> {
        Ok(self.tables.roles.get(id))
    }

    fn list_roles(&mut self, organization_id: Option<i64>) -> Result<Vec<Role>, StoreError> {
        Ok(self
            .tables
            .roles
            .list(|r| organization_id.is_none_or(|id| r.organization_id == id)))
    }

    fn update_role(&mut self, role: &Role) -> Result<(), StoreError> {
        self.tables.roles.update(role);
        Ok(())
    }

    fn delete_role(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.roles.delete(id);
        Ok(())
    }

    fn insert_collaborator(
        &mut self,
        collaborator: Collaborator,
    ) -> Result<Collaborator, StoreError> {
        Ok(self.tables.collaborators.insert(collaborator))
    }

    fn get_collaborator(&mut self, id: i64) -> Result<Option<Collaborator>, StoreError> {
        Ok(self.tables.collaborators.get(id))
    }

    fn list_collaborators(
        &mut self,
        organization_id: Option<i64>,
    ) -> Result<Vec<Collaborator>, StoreError> {
        Ok(self
            .tables
            .collaborators
            .list(|c| organization_id.is_none_or(|id| c.organization_id == id)))
    }

    fn update_collaborator(&mut self, collaborator: &Collaborator) -> Result<(), StoreError> {
        self.tables.collaborators.update(collaborator);
        Ok(())
    }

    fn delete_collaborator(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.collaborators.delete(id);
        Ok(())
    }

    fn insert_mission(&mut self, mission: Mission) -> Result<Mission, StoreError> {
        Ok(self.tables.missions.insert(mission))
    }

    fn get_mission(&mut self, id: i64) -> Result<Option<Mission>, StoreError> {
        Ok(self.tables.missions.get(id))
    }

    fn list_missions(&mut self, filter: &MissionFilter) -> Result<Vec<Mission>, StoreError> {
        Ok(self.tables.missions.list(|m| filter.matches(m)))
    }

    fn update_mission(&mut self, mission: &Mission) -> Result<(), StoreError> {
        self.tables.missions.update(mission);
        Ok(())
    }

    fn delete_mission(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.missions.delete(id);
        Ok(())
    }

    fn insert_shift_template(
        &mut self,
        template: ShiftTemplate,
    ) -> Result<ShiftTemplate, StoreError> {
        Ok(self.tables.templates.insert(template))
    }

    fn get_shift_template(&mut self, id: i64) -> Result<Option<ShiftTemplate>, StoreError> {
        Ok(self.tables.templates.get(id))
    }

    fn list_shift_templates(
        &mut self,
        mission_id: Option<i64>,
    ) -> Result<Vec<ShiftTemplate>, StoreError> {
        Ok(self
            .tables
            .templates
            .list(|t| mission_id.is_none_or(|id| t.mission_id == id)))
    }

    fn update_shift_template(&mut self, template: &ShiftTemplate) -> Result<(), StoreError> {
        self.tables.templates.update(template);
        Ok(())
    }

    fn delete_shift_template(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.templates.delete(id);
        Ok(())
    }

    fn insert_shift_instance(
        &mut self,
        shift: ShiftInstance,
    ) -> Result<ShiftInstance, StoreError> {
        Ok(self.tables.instances.insert(shift))
    }

    fn get_shift_instance(&mut self, id: i64) -> Result<Option<ShiftInstance>, StoreError> {
        Ok(self.tables.instances.get(id))
    }

    fn list_shift_instances(
        &mut self,
        filter: &ShiftInstanceFilter,
    ) -> Result<Vec<ShiftInstance>, StoreError> {
        Ok(self.tables.instances.list(|s| filter.matches(s)))
    }

    fn update_shift_instance(&mut self, shift: &ShiftInstance) -> Result<(), StoreError> {
        self.tables.instances.update(shift);
        Ok(())
    }

    fn delete_shift_instance(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.instances.delete(id);
        Ok(())
    }

    fn insert_assignment(&mut self, assignment: Assignment) -> Result<Assignment, StoreError> {
        Ok(self.tables.assignments.insert(assignment))
    }

    fn get_assignment(&mut self, id: i64) -> Result<Option<Assignment>, StoreError> {
        Ok(self.tables.assignments.get(id))
    }

    fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.tables.assignments.list(|a| filter.matches(a)))
    }

    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError> {
        self.tables.assignments.update(assignment);
        Ok(())
    }

    fn delete_assignment(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.assignments.delete(id);
        Ok(())
    }

    fn delete_assignments_for_shift(
        &mut self,
        shift_instance_id: i64,
    ) -> Result<usize, StoreError> {
        let rows = &mut self.tables.assignments.rows;
        let before = rows.len();
        rows.retain(|_, a| a.shift_instance_id != shift_instance_id);
        Ok(before - rows.len())
    }

    fn insert_availability(
        &mut self,
        availability: UserAvailability,
    ) -> Result<UserAvailability, StoreError> {
        Ok(self.tables.availability.insert(availability))
    }

    fn get_availability(&mut self, id: i64) -> Result<Option<UserAvailability>, StoreError> {
        Ok(self.tables.availability.get(id))
    }

    fn list_availability(
        &mut self,
        collaborator_id: Option<i64>,
    ) -> Result<Vec<UserAvailability>, StoreError> {
        Ok(self
            .tables
            .availability
            .list(|a| collaborator_id.is_none_or(|id| a.collaborator_id == id)))
    }

    fn update_availability(&mut self, availability: &UserAvailability) -> Result<(), StoreError> {
        self.tables.availability.update(availability);
        Ok(())
    }

    fn delete_availability(&mut self, id: i64) -> Result<(), StoreError> {
        self.tables.availability.delete(id);
        Ok(())
    }

    fn insert_hr_rule(&mut self, rule: HrRule) -> Result<HrRule, StoreError> {
        Ok(self.tables.hr_rules.insert(rule))
    }

    fn list_hr_rules(&mut self, organization_id: i64) -> Result<Vec<HrRule>, StoreError> {
        Ok(self
            .tables
            .hr_rules
            .list(|r| r.organization_id == organization_id))
    }

    fn insert_conflict_rule(&mut self, rule: ConflictRule) -> Result<ConflictRule, StoreError> {
        Ok(self.tables.conflict_rules.insert(rule))
    }

    fn list_conflict_rules(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<ConflictRule>, StoreError> {
        Ok(self
            .tables
            .conflict_rules
            .list(|r| r.organization_id == organization_id))
    }

    fn delete_rules_for_organization(&mut self, organization_id: i64) -> Result<(), StoreError> {
        self.tables
            .hr_rules
            .rows
            .retain(|_, r| r.organization_id != organization_id);
        self.tables
            .conflict_rules
            .rows
            .retain(|_, r| r.organization_id != organization_id);
        Ok(())
    }

    fn append_change(&mut self, change: PlanningChange) -> Result<PlanningChange, StoreError> {
        Ok(self.changes.insert(change))
    }

    fn list_changes(&mut self, filter: &AuditFilter) -> Result<Vec<PlanningChange>, StoreError> {
        Ok(self.changes.list(|c| filter.matches(c)))
    }

    fn insert_publication(
        &mut self,
        publication: Publication,
    ) -> Result<Publication, StoreError> {
        Ok(self.tables.publications.insert(publication))
    }

    fn update_publication(&mut self, publication: &Publication) -> Result<(), StoreError> {
        self.tables.publications.update(publication);
        Ok(())
    }

    fn list_publications(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<Publication>, StoreError> {
        Ok(self
            .tables
            .publications
            .list(|p| p.organization_id == organization_id))
    }
}
