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

//! API boundary of the planning backend.
//!
//! Transport-agnostic: handlers take a [`shiftplan::PlanningContext`] and
//! request DTOs and return response DTOs or an [`ApiError`]. The HTTP
//! server maps these onto routes and status codes.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, auto_assign_status, create_assignment, create_availability, create_collaborator,
    create_mission, create_organization, create_role, create_shift, create_site, create_template,
    deactivate_template, delete_assignment, delete_availability, delete_collaborator,
    delete_mission, delete_organization, delete_role, delete_shift, delete_site, delete_template,
    get_assignment, get_collaborator, get_mission, get_organization, get_role, get_shift, get_site,
    get_template, health, list_assignments, list_audit, list_availability, list_collaborators,
    list_missions, list_organizations, list_publications, list_roles, list_rules, list_shifts,
    list_sites, list_templates, lock_assignment, preview_conflicts, publish, start_auto_assign,
    update_assignment, update_availability, update_collaborator, update_mission,
    update_organization, update_role, update_shift, update_site, update_template,
};
pub use request_response::{
    AssignmentCandidateInfo, AssignmentListQuery, AuditQuery, AutoAssignStartRequest,
    AvailabilityListQuery, ConflictPreviewResponse, CreateAssignmentRequest,
    CreateAvailabilityRequest, CreateCollaboratorRequest, CreateMissionRequest,
    CreateOrganizationRequest, CreateRoleRequest, CreateShiftRequest, CreateShiftTemplateRequest,
    CreateSiteRequest, HealthResponse, LockAssignmentRequest, MissionListQuery, OrganizationQuery,
    PreviewConflictsRequest, PublishRequest, RulesResponse, ShiftCandidateInfo, ShiftListQuery,
    TemplateListQuery, UpdateAssignmentRequest, UpdateAvailabilityRequest,
    UpdateCollaboratorRequest, UpdateMissionRequest, UpdateOrganizationRequest, UpdateRoleRequest,
    UpdateShiftRequest, UpdateShiftTemplateRequest, UpdateSiteRequest,
};
