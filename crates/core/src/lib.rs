// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod audit_log;
mod availability;
mod catalog;
mod clock;
mod command;
mod conflicts;
mod context;
mod error;
mod lifecycle;
mod memory;
mod publication;
mod scheduler;
mod store;
mod templates;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{
    AssignmentPatch, AvailabilityPatch, CollaboratorPatch, MissionPatch, NewAssignment,
    NewAvailability, NewCollaborator, NewMission, NewOrganization, NewPublication, NewRole,
    NewShiftInstance, NewShiftTemplate, NewSite, OrganizationPatch, RolePatch, ShiftInstancePatch,
    ShiftListFilter, ShiftTemplatePatch, SitePatch,
};
pub use conflicts::{PreviewRequest, PreviewResult, RuleSet};
pub use context::{DEFAULT_ORGANIZATION_ID, PlanningContext};
pub use error::{CoreError, StoreError};
pub use lifecycle::{AssignmentWithConflicts, ShiftWithAssignments, ShiftWithConflicts};
pub use memory::InMemoryStore;
pub use scheduler::{AutoAssignJob, JobStatus};
pub use store::{AssignmentFilter, EntityStore, MissionFilter, ShiftInstanceFilter};
