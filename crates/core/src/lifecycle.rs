// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift instance and assignment lifecycle.
//!
//! Every mutation validates references, persists, re-evaluates conflicts
//! over the resulting store state and appends one audit record, all in a
//! single unit of work.
//!
//! Status updates are permissive: any known status is accepted. A shift
//! status change outside draft → published → cancelled is logged at
//! `warn` but still applied.

use crate::command::{
    AssignmentPatch, NewAssignment, NewShiftInstance, ShiftInstancePatch, ShiftListFilter,
};
use crate::context::PlanningContext;
use crate::error::{CoreError, merged_window};
use crate::store::{AssignmentFilter, ShiftInstanceFilter};
use serde::Serialize;
use shiftplan_audit::{PlanningAction, StateSnapshot};
use shiftplan_domain::{
    Assignment, AssignmentCandidate, ConflictEntry, SOURCE_MANUAL, ShiftInstance, ShiftStatus,
    TimeWindow,
};
use std::collections::BTreeSet;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// A written shift together with its freshly evaluated conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftWithConflicts {
    pub shift: ShiftInstance,
    pub conflicts: Vec<ConflictEntry>,
}

/// A written assignment together with its freshly evaluated conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentWithConflicts {
    pub assignment: Assignment,
    pub conflicts: Vec<ConflictEntry>,
}

/// A shift with its assignments and conflicts, as shown in planning views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftWithAssignments {
    pub shift: ShiftInstance,
    pub assignments: Vec<Assignment>,
    pub conflicts: Vec<ConflictEntry>,
}

const fn candidate_of(assignment: &Assignment) -> AssignmentCandidate {
    AssignmentCandidate {
        id: Some(assignment.id),
        shift_instance_id: assignment.shift_instance_id,
        collaborator_id: assignment.collaborator_id,
        role_id: assignment.role_id,
    }
}

impl PlanningContext {
    /// # Errors
    ///
    /// Returns `NotFound` if the shift does not exist.
    pub fn get_instance(&mut self, shift_id: i64) -> Result<ShiftInstance, CoreError> {
        self.store()
            .get_shift_instance(shift_id)?
            .ok_or_else(|| CoreError::not_found("Shift instance", shift_id))
    }

    fn check_instance_references(
        &mut self,
        shift: &ShiftInstance,
    ) -> Result<i64, CoreError> {
        let mission = self.check_mission_alignment(shift.mission_id, shift.site_id, shift.role_id)?;
        if let Some(template_id) = shift.template_id {
            let template = self.get_template(template_id)?;
            if template.mission_id != shift.mission_id {
                return Err(CoreError::Validation(format!(
                    "Shift template {template_id} belongs to mission {}, not mission {}",
                    template.mission_id, shift.mission_id
                )));
            }
        }
        Ok(mission.organization_id)
    }

    /// Creates a shift instance.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the mission, site, role or template does not exist
    /// - `Validation` if the site or role differs from the mission's, or
    ///   the template belongs to another mission
    /// - `DomainViolation` if the window is empty or reversed
    pub fn create_instance(
        &mut self,
        payload: NewShiftInstance,
    ) -> Result<ShiftWithConflicts, CoreError> {
        self.atomically(|ctx| {
            let window = TimeWindow::new(payload.start_utc, payload.end_utc)?;
            let draft = ShiftInstance {
                id: 0,
                mission_id: payload.mission_id,
                template_id: payload.template_id,
                site_id: payload.site_id,
                role_id: payload.role_id,
                team_id: payload.team_id,
                start_utc: window.start(),
                end_utc: window.end(),
                status: payload.status,
                source: payload.source,
                capacity: payload.capacity,
            };
            let organization_id = ctx.check_instance_references(&draft)?;

            let shift = ctx.store().insert_shift_instance(draft)?;
            let conflicts = ctx.shift_conflicts(&shift)?;

            ctx.record_change(
                organization_id,
                PlanningAction::CreateShift,
                shift.id,
                StateSnapshot::absent(),
                StateSnapshot::capture(&shift)?,
            )?;
            info!(
                shift_id = shift.id,
                mission_id = shift.mission_id,
                conflicts = conflicts.len(),
                "Created shift instance"
            );
            Ok(ShiftWithConflicts { shift, conflicts })
        })
    }

    /// Creates a draft shift copying mission, site, role and team from a
    /// template.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_instance`].
    pub fn create_instance_from_template(
        &mut self,
        template_id: i64,
        start_utc: OffsetDateTime,
        end_utc: OffsetDateTime,
    ) -> Result<ShiftWithConflicts, CoreError> {
        let template = self.get_template(template_id)?;
        self.create_instance(NewShiftInstance {
            mission_id: template.mission_id,
            template_id: Some(template.id),
            site_id: template.site_id,
            role_id: template.role_id,
            team_id: template.team_id,
            start_utc,
            end_utc,
            status: ShiftStatus::Draft,
            source: SOURCE_MANUAL.to_string(),
            capacity: template.expected_headcount,
        })
    }

    /// Applies a partial update and re-evaluates the shift together with
    /// every assignment on it.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_instance`], plus `NotFound` for the
    /// shift itself. A bad merged window is `Validation`.
    pub fn update_instance(
        &mut self,
        shift_id: i64,
        patch: ShiftInstancePatch,
    ) -> Result<ShiftWithConflicts, CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_instance(shift_id)?;
            let mut updated = before.clone();
            if let Some(mission_id) = patch.mission_id {
                updated.mission_id = mission_id;
            }
            if patch.template_id.is_some() {
                updated.template_id = patch.template_id;
            }
            if let Some(site_id) = patch.site_id {
                updated.site_id = site_id;
            }
            if let Some(role_id) = patch.role_id {
                updated.role_id = role_id;
            }
            if patch.team_id.is_some() {
                updated.team_id = patch.team_id;
            }
            if let Some(start) = patch.start_utc {
                updated.start_utc = start;
            }
            if let Some(end) = patch.end_utc {
                updated.end_utc = end;
            }
            if let Some(status) = patch.status {
                updated.status = status;
            }
            if let Some(source) = patch.source {
                updated.source = source;
            }
            if let Some(capacity) = patch.capacity {
                updated.capacity = capacity;
            }

            let window = merged_window(updated.start_utc, updated.end_utc)?;
            updated.start_utc = window.start();
            updated.end_utc = window.end();
            let organization_id = ctx.check_instance_references(&updated)?;

            if updated.status != before.status && !before.status.can_transition_to(updated.status)
            {
                warn!(
                    shift_id,
                    from = %before.status,
                    to = %updated.status,
                    "Shift status change outside the planning graph"
                );
            }

            ctx.store().update_shift_instance(&updated)?;
            let conflicts = ctx.shift_conflicts(&updated)?;

            ctx.record_change(
                organization_id,
                PlanningAction::UpdateShift,
                shift_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::capture(&updated)?,
            )?;
            info!(shift_id, conflicts = conflicts.len(), "Updated shift instance");
            Ok(ShiftWithConflicts {
                shift: updated,
                conflicts,
            })
        })
    }

    /// Sets only the status of a shift.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shift does not exist.
    pub fn update_status(
        &mut self,
        shift_id: i64,
        status: ShiftStatus,
    ) -> Result<ShiftWithConflicts, CoreError> {
        self.update_instance(
            shift_id,
            ShiftInstancePatch {
                status: Some(status),
                ..ShiftInstancePatch::default()
            },
        )
    }

    /// Deletes a shift and every assignment on it. Never blocked.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the shift does not exist.
    pub fn delete_instance(&mut self, shift_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_instance(shift_id)?;
            let organization_id = ctx.mission_organization(before.mission_id)?;

            let removed = ctx.store().delete_assignments_for_shift(shift_id)?;
            ctx.store().delete_shift_instance(shift_id)?;

            ctx.record_change(
                organization_id,
                PlanningAction::DeleteShift,
                shift_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::absent(),
            )?;
            info!(shift_id, assignments_removed = removed, "Deleted shift instance");
            Ok(())
        })
    }

    /// Lists shifts with their assignments and freshly computed conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_instances(
        &mut self,
        filter: &ShiftListFilter,
    ) -> Result<Vec<ShiftWithAssignments>, CoreError> {
        let shifts = self.store().list_shift_instances(&ShiftInstanceFilter {
            mission_id: filter.mission_id,
            template_id: None,
        })?;

        let staffed_by: Option<BTreeSet<i64>> = if filter.collaborator_ids.is_empty() {
            None
        } else {
            let mut ids = BTreeSet::new();
            for collaborator_id in &filter.collaborator_ids {
                for assignment in self
                    .store()
                    .list_assignments(&AssignmentFilter::for_collaborator(*collaborator_id))?
                {
                    ids.insert(assignment.shift_instance_id);
                }
            }
            Some(ids)
        };

        let mut views = Vec::new();
        for shift in shifts {
            if filter.start.is_some_and(|start| shift.end_utc <= start)
                || filter.end.is_some_and(|end| shift.start_utc >= end)
            {
                continue;
            }
            if !filter.site_ids.is_empty() && !filter.site_ids.contains(&shift.site_id) {
                continue;
            }
            if !filter.statuses.is_empty() && !filter.statuses.contains(&shift.status) {
                continue;
            }
            if staffed_by.as_ref().is_some_and(|ids| !ids.contains(&shift.id)) {
                continue;
            }

            let assignments = self
                .store()
                .list_assignments(&AssignmentFilter::for_shift(shift.id))?;
            let conflicts = self.shift_conflicts(&shift)?;
            views.push(ShiftWithAssignments {
                shift,
                assignments,
                conflicts,
            });
        }
        debug!(count = views.len(), "Listed shift instances");
        Ok(views)
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the assignment does not exist.
    pub fn get_assignment(&mut self, assignment_id: i64) -> Result<Assignment, CoreError> {
        self.store()
            .get_assignment(assignment_id)?
            .ok_or_else(|| CoreError::not_found("Assignment", assignment_id))
    }

    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_assignments(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<Assignment>, CoreError> {
        Ok(self.store().list_assignments(filter)?)
    }

    fn check_assignment_references(
        &mut self,
        shift_instance_id: i64,
        collaborator_id: i64,
        role_id: i64,
    ) -> Result<ShiftInstance, CoreError> {
        let shift = self.get_instance(shift_instance_id)?;
        let collaborator = self.get_collaborator(collaborator_id)?;
        let organization_id = self.mission_organization(shift.mission_id)?;
        if collaborator.organization_id != organization_id {
            return Err(CoreError::Validation(format!(
                "Collaborator {collaborator_id} does not belong to organization {organization_id}"
            )));
        }
        if shift.status.is_cancelled() {
            return Err(CoreError::Validation(format!(
                "Shift instance {shift_instance_id} is cancelled"
            )));
        }
        if role_id != shift.role_id {
            return Err(CoreError::Validation(
                "Assignment role must match the shift role".to_string(),
            ));
        }
        Ok(shift)
    }

    /// Assigns a collaborator to a shift.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the shift or collaborator does not exist
    /// - `Validation` if the collaborator belongs to another organization,
    ///   the shift is cancelled or the role differs from the shift role
    pub fn create_assignment(
        &mut self,
        payload: NewAssignment,
    ) -> Result<AssignmentWithConflicts, CoreError> {
        self.atomically(|ctx| {
            let shift = ctx.check_assignment_references(
                payload.shift_instance_id,
                payload.collaborator_id,
                payload.role_id,
            )?;
            let now = ctx.now();

            let assignment = ctx.store().insert_assignment(Assignment {
                id: 0,
                shift_instance_id: payload.shift_instance_id,
                collaborator_id: payload.collaborator_id,
                role_id: payload.role_id,
                status: payload.status,
                source: payload.source,
                is_locked: payload.is_locked,
                note: payload.note,
                created_at: now,
                updated_at: now,
            })?;
            let conflicts = ctx.assignment_conflicts(&candidate_of(&assignment), Some(&shift))?;

            let organization_id = ctx.mission_organization(shift.mission_id)?;
            ctx.record_change(
                organization_id,
                PlanningAction::CreateAssignment,
                assignment.id,
                StateSnapshot::absent(),
                StateSnapshot::capture(&assignment)?,
            )?;
            info!(
                assignment_id = assignment.id,
                shift_id = shift.id,
                collaborator_id = assignment.collaborator_id,
                conflicts = conflicts.len(),
                "Created assignment"
            );
            Ok(AssignmentWithConflicts {
                assignment,
                conflicts,
            })
        })
    }

    /// Applies a partial update with the same checks as creation.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::create_assignment`], plus `NotFound` for
    /// the assignment itself.
    pub fn update_assignment(
        &mut self,
        assignment_id: i64,
        patch: AssignmentPatch,
    ) -> Result<AssignmentWithConflicts, CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_assignment(assignment_id)?;
            let mut updated = before.clone();
            if let Some(collaborator_id) = patch.collaborator_id {
                updated.collaborator_id = collaborator_id;
            }
            if let Some(role_id) = patch.role_id {
                updated.role_id = role_id;
            }
            if let Some(status) = patch.status {
                updated.status = status;
            }
            if let Some(source) = patch.source {
                updated.source = source;
            }
            if patch.note.is_some() {
                updated.note = patch.note;
            }
            if let Some(is_locked) = patch.is_locked {
                updated.is_locked = is_locked;
            }

            let shift = ctx.check_assignment_references(
                updated.shift_instance_id,
                updated.collaborator_id,
                updated.role_id,
            )?;
            updated.updated_at = ctx.now();

            ctx.store().update_assignment(&updated)?;
            let conflicts = ctx.assignment_conflicts(&candidate_of(&updated), Some(&shift))?;

            let organization_id = ctx.mission_organization(shift.mission_id)?;
            ctx.record_change(
                organization_id,
                PlanningAction::UpdateAssignment,
                assignment_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::capture(&updated)?,
            )?;
            info!(assignment_id, conflicts = conflicts.len(), "Updated assignment");
            Ok(AssignmentWithConflicts {
                assignment: updated,
                conflicts,
            })
        })
    }

    /// Sets or clears the lock flag of an assignment.
    ///
    /// # Errors
    ///
    /// Same as [`PlanningContext::update_assignment`].
    pub fn lock_assignment(
        &mut self,
        assignment_id: i64,
        locked: bool,
    ) -> Result<AssignmentWithConflicts, CoreError> {
        self.update_assignment(
            assignment_id,
            AssignmentPatch {
                is_locked: Some(locked),
                ..AssignmentPatch::default()
            },
        )
    }

    /// # Errors
    ///
    /// Returns `NotFound` if the assignment does not exist.
    pub fn delete_assignment(&mut self, assignment_id: i64) -> Result<(), CoreError> {
        self.atomically(|ctx| {
            let before = ctx.get_assignment(assignment_id)?;
            let organization_id = match ctx.store().get_shift_instance(before.shift_instance_id)? {
                Some(shift) => ctx.mission_organization(shift.mission_id)?,
                None => ctx.default_organization_id(),
            };

            ctx.store().delete_assignment(assignment_id)?;
            ctx.record_change(
                organization_id,
                PlanningAction::DeleteAssignment,
                assignment_id,
                StateSnapshot::capture(&before)?,
                StateSnapshot::absent(),
            )?;
            info!(assignment_id, "Deleted assignment");
            Ok(())
        })
    }
}
