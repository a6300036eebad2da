// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Greedy auto-assignment.
//!
//! One pass over the target shifts in store order. Every shift without an
//! assignment receives one proposed assignment for the first collaborator
//! of the shift's organization. No capability matching and no backtracking.

use crate::command::NewAssignment;
use crate::context::PlanningContext;
use crate::error::CoreError;
use crate::store::{AssignmentFilter, ShiftInstanceFilter};
use serde::Serialize;
use shiftplan_domain::{AssignmentStatus, ConflictEntry, SOURCE_AUTO_ASSIGN};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
}

/// Summary of one auto-assign run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoAssignJob {
    pub job_id: String,
    pub status: JobStatus,
    pub assignments_created: usize,
    pub conflicts: Vec<ConflictEntry>,
}

impl PlanningContext {
    /// Runs an auto-assign job to completion.
    ///
    /// `shift_ids` restricts the run to those shifts; unknown ids are
    /// skipped. Without it every shift is a target. Shifts that already
    /// have an assignment are left alone, so repeated runs are idempotent
    /// with respect to coverage.
    ///
    /// The run is one unit of work: the first failing assignment aborts
    /// the job and nothing it created is kept.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while creating an assignment.
    pub fn start_auto_assign(
        &mut self,
        shift_ids: Option<&[i64]>,
    ) -> Result<AutoAssignJob, CoreError> {
        let job_id = Uuid::new_v4().to_string();
        info!(job_id = %job_id, "Starting auto-assign job");

        let job = self.atomically(|ctx| {
            let targets = match shift_ids {
                Some(ids) => {
                    let mut shifts = Vec::with_capacity(ids.len());
                    for id in ids {
                        if let Some(shift) = ctx.store().get_shift_instance(*id)? {
                            shifts.push(shift);
                        } else {
                            debug!(shift_id = id, "Skipping unknown shift");
                        }
                    }
                    shifts
                }
                None => ctx
                    .store()
                    .list_shift_instances(&ShiftInstanceFilter::default())?,
            };

            let mut assignments_created = 0;
            let mut conflicts = Vec::new();
            for shift in targets {
                let staffed = !ctx
                    .store()
                    .list_assignments(&AssignmentFilter::for_shift(shift.id))?
                    .is_empty();
                if staffed {
                    debug!(shift_id = shift.id, "Shift already staffed");
                    continue;
                }
                let organization_id = ctx.mission_organization(shift.mission_id)?;
                let collaborator = ctx
                    .store()
                    .list_collaborators(Some(organization_id))?
                    .into_iter()
                    .next();
                let Some(collaborator) = collaborator else {
                    debug!(
                        shift_id = shift.id,
                        organization_id, "No collaborator available"
                    );
                    continue;
                };

                let created = ctx.create_assignment(NewAssignment {
                    shift_instance_id: shift.id,
                    collaborator_id: collaborator.id,
                    role_id: shift.role_id,
                    status: AssignmentStatus::Proposed,
                    source: SOURCE_AUTO_ASSIGN.to_string(),
                    note: None,
                    is_locked: false,
                })?;
                assignments_created += 1;
                conflicts.extend(created.conflicts);
            }

            Ok(AutoAssignJob {
                job_id: job_id.clone(),
                status: JobStatus::Completed,
                assignments_created,
                conflicts,
            })
        })?;

        info!(
            job_id = %job.job_id,
            assignments_created = job.assignments_created,
            conflicts = job.conflicts.len(),
            "Auto-assign job completed"
        );
        self.jobs.insert(job.job_id.clone(), job.clone());
        Ok(job)
    }

    /// # Errors
    ///
    /// Returns `NotFound` if no job with that id has run in this process.
    pub fn auto_assign_status(&self, job_id: &str) -> Result<AutoAssignJob, CoreError> {
        self.jobs
            .get(job_id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Auto-assign job", job_id))
    }
}
