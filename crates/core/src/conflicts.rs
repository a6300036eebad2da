// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{NewAssignment, NewShiftInstance};
use crate::context::PlanningContext;
use crate::error::CoreError;
use crate::store::AssignmentFilter;
use serde::Serialize;
use shiftplan_domain::{
    AssignmentCandidate, ConflictEntry, ConflictRule, HrRule, PeerAssignment, ShiftCandidate,
    ShiftInstance, evaluate_assignment, evaluate_shift,
};
use tracing::debug;

/// Declared rule descriptors of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub hr_rules: Vec<HrRule>,
    pub conflict_rules: Vec<ConflictRule>,
}

/// Unsaved candidates to evaluate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewRequest {
    pub shift: Option<NewShiftInstance>,
    pub assignments: Vec<NewAssignment>,
}

/// One evaluated preview candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewResult {
    Shift {
        shift: NewShiftInstance,
        conflicts: Vec<ConflictEntry>,
    },
    Assignment {
        assignment: NewAssignment,
        conflicts: Vec<ConflictEntry>,
    },
}

impl PlanningContext {
    /// Shift-level checks for a stored shift.
    #[must_use]
    pub fn evaluate_shift_instance(shift: &ShiftInstance) -> Vec<ConflictEntry> {
        evaluate_shift(&ShiftCandidate::from(shift))
    }

    /// Evaluates an assignment candidate against current store state.
    ///
    /// The shift is looked up by id when not supplied. A shift that cannot
    /// be found yields no conflicts.
    pub(crate) fn assignment_conflicts(
        &mut self,
        candidate: &AssignmentCandidate,
        shift: Option<&ShiftInstance>,
    ) -> Result<Vec<ConflictEntry>, CoreError> {
        let looked_up;
        let shift = match shift {
            Some(shift) => Some(shift),
            None => {
                looked_up = self
                    .store()
                    .get_shift_instance(candidate.shift_instance_id)?;
                looked_up.as_ref()
            }
        };
        let Some(shift) = shift else {
            return Ok(Vec::new());
        };

        let peers = self.peer_assignments(candidate.collaborator_id)?;
        let availability = self
            .store()
            .list_availability(Some(candidate.collaborator_id))?;

        let conflicts = evaluate_assignment(candidate, Some(shift), &peers, &availability);
        debug!(
            shift_id = shift.id,
            collaborator_id = candidate.collaborator_id,
            conflicts = conflicts.len(),
            "Evaluated assignment"
        );
        Ok(conflicts)
    }

    fn peer_assignments(&mut self, collaborator_id: i64) -> Result<Vec<PeerAssignment>, CoreError> {
        let assignments = self
            .store()
            .list_assignments(&AssignmentFilter::for_collaborator(collaborator_id))?;
        let mut peers = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            if let Some(shift) = self.store().get_shift_instance(assignment.shift_instance_id)? {
                peers.push(PeerAssignment {
                    assignment_id: assignment.id,
                    collaborator_id: assignment.collaborator_id,
                    shift,
                });
            }
        }
        Ok(peers)
    }

    /// Shift-level checks plus the checks of every assignment on the shift.
    pub(crate) fn shift_conflicts(
        &mut self,
        shift: &ShiftInstance,
    ) -> Result<Vec<ConflictEntry>, CoreError> {
        let mut conflicts = Self::evaluate_shift_instance(shift);
        let assignments = self
            .store()
            .list_assignments(&AssignmentFilter::for_shift(shift.id))?;
        for assignment in &assignments {
            let candidate = AssignmentCandidate {
                id: Some(assignment.id),
                shift_instance_id: assignment.shift_instance_id,
                collaborator_id: assignment.collaborator_id,
                role_id: assignment.role_id,
            };
            conflicts.extend(self.assignment_conflicts(&candidate, Some(shift))?);
        }
        Ok(conflicts)
    }

    /// Evaluates unsaved candidates without touching the store.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store fails while loading state.
    pub fn preview_conflicts(
        &mut self,
        request: PreviewRequest,
    ) -> Result<Vec<PreviewResult>, CoreError> {
        let mut results = Vec::with_capacity(request.assignments.len() + 1);

        if let Some(shift) = request.shift {
            let conflicts = evaluate_shift(&ShiftCandidate {
                id: None,
                start_utc: shift.start_utc,
                end_utc: shift.end_utc,
                status: shift.status.as_str().to_string(),
            });
            results.push(PreviewResult::Shift { shift, conflicts });
        }

        for assignment in request.assignments {
            let candidate = AssignmentCandidate {
                id: None,
                shift_instance_id: assignment.shift_instance_id,
                collaborator_id: assignment.collaborator_id,
                role_id: assignment.role_id,
            };
            let conflicts = self.assignment_conflicts(&candidate, None)?;
            results.push(PreviewResult::Assignment {
                assignment,
                conflicts,
            });
        }

        Ok(results)
    }

    /// Lists the rule descriptors declared for an organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_rules(&mut self, organization_id: i64) -> Result<RuleSet, CoreError> {
        Ok(RuleSet {
            hr_rules: self.store().list_hr_rules(organization_id)?,
            conflict_rules: self.store().list_conflict_rules(organization_id)?,
        })
    }
}
