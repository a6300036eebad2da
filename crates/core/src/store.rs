// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The data-access seam between planning logic and storage.
//!
//! Inserts ignore the `id` of the value passed in and return the stored
//! value carrying its assigned id. Lists return rows in ascending id order,
//! which is also insertion order. Updates and deletes of missing rows are
//! no-ops; services check existence first.

use crate::error::StoreError;
use shiftplan_audit::{AuditFilter, PlanningChange};
use shiftplan_domain::{
    Assignment, Collaborator, ConflictRule, HrRule, Mission, Organization, Publication, Role,
    ShiftInstance, ShiftTemplate, Site, UserAvailability,
};

/// Store-level mission filter. Every set field must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionFilter {
    pub organization_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
}

impl MissionFilter {
    #[must_use]
    pub fn matches(&self, mission: &Mission) -> bool {
        self.organization_id
            .is_none_or(|id| mission.organization_id == id)
            && self.site_id.is_none_or(|id| mission.site_id == id)
            && self.role_id.is_none_or(|id| mission.role_id == id)
    }
}

/// Store-level shift instance filter. Every set field must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftInstanceFilter {
    pub mission_id: Option<i64>,
    pub template_id: Option<i64>,
}

impl ShiftInstanceFilter {
    #[must_use]
    pub fn matches(&self, shift: &ShiftInstance) -> bool {
        self.mission_id.is_none_or(|id| shift.mission_id == id)
            && self
                .template_id
                .is_none_or(|id| shift.template_id == Some(id))
    }
}

/// Store-level assignment filter. Every set field must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentFilter {
    pub shift_instance_id: Option<i64>,
    pub collaborator_id: Option<i64>,
}

impl AssignmentFilter {
    #[must_use]
    pub const fn for_shift(shift_instance_id: i64) -> Self {
        Self {
            shift_instance_id: Some(shift_instance_id),
            collaborator_id: None,
        }
    }

    #[must_use]
    pub const fn for_collaborator(collaborator_id: i64) -> Self {
        Self {
            shift_instance_id: None,
            collaborator_id: Some(collaborator_id),
        }
    }

    #[must_use]
    pub fn matches(&self, assignment: &Assignment) -> bool {
        self.shift_instance_id
            .is_none_or(|id| assignment.shift_instance_id == id)
            && self
                .collaborator_id
                .is_none_or(|id| assignment.collaborator_id == id)
    }
}

/// Storage for every planning entity.
///
/// Methods take `&mut self` so relational backends can hold one connection.
pub trait EntityStore {
    /// Short backend identifier, e.g. `memory` or `sqlite`.
    fn backend_name(&self) -> &'static str;

    /// Opens a unit of work. Nested calls are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if a transaction is already open or the backend fails.
    fn begin(&mut self) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns an error if no transaction is open or the backend fails.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Discards every change since [`EntityStore::begin`].
    ///
    /// # Errors
    ///
    /// Returns an error if no transaction is open or the backend fails.
    fn rollback(&mut self) -> Result<(), StoreError>;

    // Organizations

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_organization(&mut self, org: Organization) -> Result<Organization, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_organization(&mut self, id: i64) -> Result<Option<Organization>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_organizations(&mut self) -> Result<Vec<Organization>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_organization(&mut self, org: &Organization) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_organization(&mut self, id: i64) -> Result<(), StoreError>;

    // Sites

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_site(&mut self, site: Site) -> Result<Site, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_site(&mut self, id: i64) -> Result<Option<Site>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_sites(&mut self, organization_id: Option<i64>) -> Result<Vec<Site>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_site(&mut self, site: &Site) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_site(&mut self, id: i64) -> Result<(), StoreError>;

    // Roles

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_role(&mut self, role: Role) -> Result<Role, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_role(&mut self, id: i64) -> Result<Option<Role>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_roles(&mut self, organization_id: Option<i64>) -> Result<Vec<Role>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_role(&mut self, role: &Role) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_role(&mut self, id: i64) -> Result<(), StoreError>;

    // Collaborators

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_collaborator(
        &mut self,
        collaborator: Collaborator,
    ) -> Result<Collaborator, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_collaborator(&mut self, id: i64) -> Result<Option<Collaborator>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_collaborators(
        &mut self,
        organization_id: Option<i64>,
    ) -> Result<Vec<Collaborator>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_collaborator(&mut self, collaborator: &Collaborator) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_collaborator(&mut self, id: i64) -> Result<(), StoreError>;

    // Missions

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_mission(&mut self, mission: Mission) -> Result<Mission, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_mission(&mut self, id: i64) -> Result<Option<Mission>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_missions(&mut self, filter: &MissionFilter) -> Result<Vec<Mission>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_mission(&mut self, mission: &Mission) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_mission(&mut self, id: i64) -> Result<(), StoreError>;

    // Shift templates

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_shift_template(
        &mut self,
        template: ShiftTemplate,
    ) -> Result<ShiftTemplate, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_shift_template(&mut self, id: i64) -> Result<Option<ShiftTemplate>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_shift_templates(
        &mut self,
        mission_id: Option<i64>,
    ) -> Result<Vec<ShiftTemplate>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_shift_template(&mut self, template: &ShiftTemplate) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_shift_template(&mut self, id: i64) -> Result<(), StoreError>;

    // Shift instances

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_shift_instance(
        &mut self,
        shift: ShiftInstance,
    ) -> Result<ShiftInstance, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_shift_instance(&mut self, id: i64) -> Result<Option<ShiftInstance>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_shift_instances(
        &mut self,
        filter: &ShiftInstanceFilter,
    ) -> Result<Vec<ShiftInstance>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_shift_instance(&mut self, shift: &ShiftInstance) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_shift_instance(&mut self, id: i64) -> Result<(), StoreError>;

    // Assignments

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_assignment(&mut self, assignment: Assignment) -> Result<Assignment, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_assignment(&mut self, id: i64) -> Result<Option<Assignment>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_assignment(&mut self, assignment: &Assignment) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_assignment(&mut self, id: i64) -> Result<(), StoreError>;
    /// Removes every assignment of a shift and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_assignments_for_shift(&mut self, shift_instance_id: i64)
    -> Result<usize, StoreError>;

    // Availability

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_availability(
        &mut self,
        availability: UserAvailability,
    ) -> Result<UserAvailability, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get_availability(&mut self, id: i64) -> Result<Option<UserAvailability>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_availability(
        &mut self,
        collaborator_id: Option<i64>,
    ) -> Result<Vec<UserAvailability>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_availability(&mut self, availability: &UserAvailability) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_availability(&mut self, id: i64) -> Result<(), StoreError>;

    // Rule descriptors

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_hr_rule(&mut self, rule: HrRule) -> Result<HrRule, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_hr_rules(&mut self, organization_id: i64) -> Result<Vec<HrRule>, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_conflict_rule(&mut self, rule: ConflictRule) -> Result<ConflictRule, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_conflict_rules(
        &mut self,
        organization_id: i64,
    ) -> Result<Vec<ConflictRule>, StoreError>;
    /// Removes both HR and conflict descriptors of an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn delete_rules_for_organization(&mut self, organization_id: i64) -> Result<(), StoreError>;

    // Audit trail

    /// Appends a change. The trail is never updated or pruned.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn append_change(&mut self, change: PlanningChange) -> Result<PlanningChange, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_changes(&mut self, filter: &AuditFilter) -> Result<Vec<PlanningChange>, StoreError>;

    // Publications

    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_publication(&mut self, publication: Publication)
    -> Result<Publication, StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn update_publication(&mut self, publication: &Publication) -> Result<(), StoreError>;
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_publications(&mut self, organization_id: i64)
    -> Result<Vec<Publication>, StoreError>;
}
