// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every handler validates the request shape first, converts the DTO into
//! a core command and runs it against the planning context. Core errors
//! are translated explicitly; nothing from the core leaks through as-is.

use shiftplan::{
    AssignmentFilter, AssignmentPatch, AssignmentWithConflicts, AutoAssignJob, AvailabilityPatch,
    CollaboratorPatch, MissionFilter, MissionPatch, NewAssignment, NewAvailability,
    NewCollaborator, NewMission, NewOrganization, NewPublication, NewRole, NewShiftInstance,
    NewShiftTemplate, NewSite, OrganizationPatch, PlanningContext, PreviewRequest, RolePatch,
    ShiftInstancePatch, ShiftListFilter, ShiftTemplatePatch, ShiftWithAssignments,
    ShiftWithConflicts, SitePatch,
};
use shiftplan_audit::{AuditFilter, PlanningChange};
use shiftplan_domain::{
    Assignment, Collaborator, DomainError, Mission, Organization, Publication, Role,
    ShiftInstance, ShiftTemplate, Site, UserAvailability,
};
use std::str::FromStr;
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignmentListQuery, AuditQuery, AutoAssignStartRequest, AvailabilityListQuery,
    ConflictPreviewResponse, CreateAssignmentRequest, CreateAvailabilityRequest,
    CreateCollaboratorRequest, CreateMissionRequest, CreateOrganizationRequest, CreateRoleRequest,
    CreateShiftRequest, CreateShiftTemplateRequest, CreateSiteRequest, HealthResponse,
    MissionListQuery, OrganizationQuery, PreviewConflictsRequest, PublishRequest, RulesResponse,
    TemplateListQuery, UpdateAssignmentRequest, UpdateAvailabilityRequest,
    UpdateCollaboratorRequest, UpdateMissionRequest, UpdateOrganizationRequest,
    UpdateRoleRequest, UpdateShiftRequest, UpdateShiftTemplateRequest, UpdateSiteRequest,
};

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn parse_status<T>(value: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr<Err = DomainError>,
{
    value
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)
}

// Organizations

/// Creates an organization and seeds its default rule descriptors.
///
/// # Errors
///
/// Returns `RequestValidation` for a malformed request.
pub fn create_organization(
    ctx: &mut PlanningContext,
    request: CreateOrganizationRequest,
) -> ApiResult<Organization> {
    request.validate()?;
    ctx.create_organization(NewOrganization {
        name: request.name,
        timezone: request.timezone,
        currency: request.currency,
        contact_email: request.contact_email,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown organization.
pub fn get_organization(ctx: &mut PlanningContext, organization_id: i64) -> ApiResult<Organization> {
    ctx.get_organization(organization_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_organizations(ctx: &mut PlanningContext) -> ApiResult<Vec<Organization>> {
    ctx.list_organizations().map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound`.
pub fn update_organization(
    ctx: &mut PlanningContext,
    organization_id: i64,
    request: UpdateOrganizationRequest,
) -> ApiResult<Organization> {
    request.validate()?;
    ctx.update_organization(
        organization_id,
        OrganizationPatch {
            name: request.name,
            timezone: request.timezone,
            currency: request.currency,
            contact_email: request.contact_email,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while sites, roles or collaborators reference the organization.
pub fn delete_organization(ctx: &mut PlanningContext, organization_id: i64) -> ApiResult<()> {
    ctx.delete_organization(organization_id)
        .map_err(translate_core_error)
}

// Sites

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound` for the organization.
pub fn create_site(ctx: &mut PlanningContext, request: CreateSiteRequest) -> ApiResult<Site> {
    request.validate()?;
    ctx.create_site(NewSite {
        organization_id: request.organization_id,
        name: request.name,
        timezone: request.timezone,
        address: request.address,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown site.
pub fn get_site(ctx: &mut PlanningContext, site_id: i64) -> ApiResult<Site> {
    ctx.get_site(site_id).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_sites(ctx: &mut PlanningContext, query: OrganizationQuery) -> ApiResult<Vec<Site>> {
    ctx.list_sites(query.organization_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound`.
pub fn update_site(
    ctx: &mut PlanningContext,
    site_id: i64,
    request: UpdateSiteRequest,
) -> ApiResult<Site> {
    request.validate()?;
    ctx.update_site(
        site_id,
        SitePatch {
            name: request.name,
            timezone: request.timezone,
            address: request.address,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while missions reference the site.
pub fn delete_site(ctx: &mut PlanningContext, site_id: i64) -> ApiResult<()> {
    ctx.delete_site(site_id).map_err(translate_core_error)
}

// Roles

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound` for the organization.
pub fn create_role(ctx: &mut PlanningContext, request: CreateRoleRequest) -> ApiResult<Role> {
    request.validate()?;
    ctx.create_role(NewRole {
        organization_id: request.organization_id,
        name: request.name,
        description: request.description,
        tags: request.tags,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown role.
pub fn get_role(ctx: &mut PlanningContext, role_id: i64) -> ApiResult<Role> {
    ctx.get_role(role_id).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_roles(ctx: &mut PlanningContext, query: OrganizationQuery) -> ApiResult<Vec<Role>> {
    ctx.list_roles(query.organization_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound`.
pub fn update_role(
    ctx: &mut PlanningContext,
    role_id: i64,
    request: UpdateRoleRequest,
) -> ApiResult<Role> {
    request.validate()?;
    ctx.update_role(
        role_id,
        RolePatch {
            name: request.name,
            description: request.description,
            tags: request.tags,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while missions or collaborators reference the role.
pub fn delete_role(ctx: &mut PlanningContext, role_id: i64) -> ApiResult<()> {
    ctx.delete_role(role_id).map_err(translate_core_error)
}

// Collaborators

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation` when the
/// primary role belongs to another organization.
pub fn create_collaborator(
    ctx: &mut PlanningContext,
    request: CreateCollaboratorRequest,
) -> ApiResult<Collaborator> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?.unwrap_or_default();
    ctx.create_collaborator(NewCollaborator {
        organization_id: request.organization_id,
        full_name: request.full_name,
        email: request.email,
        primary_role_id: request.primary_role_id,
        status,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown collaborator.
pub fn get_collaborator(ctx: &mut PlanningContext, collaborator_id: i64) -> ApiResult<Collaborator> {
    ctx.get_collaborator(collaborator_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_collaborators(
    ctx: &mut PlanningContext,
    query: OrganizationQuery,
) -> ApiResult<Vec<Collaborator>> {
    ctx.list_collaborators(query.organization_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn update_collaborator(
    ctx: &mut PlanningContext,
    collaborator_id: i64,
    request: UpdateCollaboratorRequest,
) -> ApiResult<Collaborator> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?;
    ctx.update_collaborator(
        collaborator_id,
        CollaboratorPatch {
            full_name: request.full_name,
            email: request.email,
            primary_role_id: request.primary_role_id,
            status,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while assignments reference the collaborator.
pub fn delete_collaborator(ctx: &mut PlanningContext, collaborator_id: i64) -> ApiResult<()> {
    ctx.delete_collaborator(collaborator_id)
        .map_err(translate_core_error)
}

// Missions

/// # Errors
///
/// Returns `RequestValidation` for a reversed window or bad fields, before
/// any store access. Returns `Validation` when site and role belong to
/// different organizations.
pub fn create_mission(ctx: &mut PlanningContext, request: CreateMissionRequest) -> ApiResult<Mission> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?.unwrap_or_default();
    ctx.create_mission(NewMission {
        site_id: request.site_id,
        role_id: request.role_id,
        team_id: request.team_id,
        title: request.title,
        start_utc: request.start_utc,
        end_utc: request.end_utc,
        status,
        budget_target: request.budget_target,
        note: request.note,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown mission.
pub fn get_mission(ctx: &mut PlanningContext, mission_id: i64) -> ApiResult<Mission> {
    ctx.get_mission(mission_id).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_missions(ctx: &mut PlanningContext, query: MissionListQuery) -> ApiResult<Vec<Mission>> {
    ctx.list_missions(&MissionFilter {
        organization_id: query.organization_id,
        site_id: query.site_id,
        role_id: query.role_id,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn update_mission(
    ctx: &mut PlanningContext,
    mission_id: i64,
    request: UpdateMissionRequest,
) -> ApiResult<Mission> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?;
    ctx.update_mission(
        mission_id,
        MissionPatch {
            site_id: request.site_id,
            role_id: request.role_id,
            team_id: request.team_id,
            title: request.title,
            start_utc: request.start_utc,
            end_utc: request.end_utc,
            status,
            budget_target: request.budget_target,
            note: request.note,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while templates or shifts reference the mission.
pub fn delete_mission(ctx: &mut PlanningContext, mission_id: i64) -> ApiResult<()> {
    ctx.delete_mission(mission_id).map_err(translate_core_error)
}

// Shift templates

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_templates(
    ctx: &mut PlanningContext,
    query: TemplateListQuery,
) -> ApiResult<Vec<ShiftTemplate>> {
    ctx.list_templates(query.mission_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown template.
pub fn get_template(ctx: &mut PlanningContext, template_id: i64) -> ApiResult<ShiftTemplate> {
    ctx.get_template(template_id).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn create_template(
    ctx: &mut PlanningContext,
    request: CreateShiftTemplateRequest,
) -> ApiResult<ShiftTemplate> {
    request.validate()?;
    ctx.create_template(NewShiftTemplate {
        mission_id: request.mission_id,
        site_id: request.site_id,
        role_id: request.role_id,
        team_id: request.team_id,
        recurrence_rule: request.recurrence_rule,
        start_time_utc: request.start_time_utc,
        end_time_utc: request.end_time_utc,
        expected_headcount: request.expected_headcount,
        is_active: request.is_active,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn update_template(
    ctx: &mut PlanningContext,
    template_id: i64,
    request: UpdateShiftTemplateRequest,
) -> ApiResult<ShiftTemplate> {
    request.validate()?;
    ctx.update_template(
        template_id,
        ShiftTemplatePatch {
            mission_id: request.mission_id,
            site_id: request.site_id,
            role_id: request.role_id,
            team_id: request.team_id,
            recurrence_rule: request.recurrence_rule,
            start_time_utc: request.start_time_utc,
            end_time_utc: request.end_time_utc,
            expected_headcount: request.expected_headcount,
            is_active: request.is_active,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown template.
pub fn deactivate_template(ctx: &mut PlanningContext, template_id: i64) -> ApiResult<ShiftTemplate> {
    ctx.deactivate_template(template_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Conflict` while shift instances reference the template.
pub fn delete_template(ctx: &mut PlanningContext, template_id: i64) -> ApiResult<()> {
    ctx.delete_template(template_id)
        .map_err(translate_core_error)
}

// Shift instances

/// Lists shifts with their assignments and freshly computed conflicts.
///
/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_shifts(
    ctx: &mut PlanningContext,
    filter: &ShiftListFilter,
) -> ApiResult<Vec<ShiftWithAssignments>> {
    ctx.list_instances(filter).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn get_shift(ctx: &mut PlanningContext, shift_id: i64) -> ApiResult<ShiftInstance> {
    ctx.get_instance(shift_id).map_err(translate_core_error)
}

/// Resolves a create request into a core command, filling mission, site,
/// role and team from the template when the request leaves them out.
fn shift_command(
    ctx: &mut PlanningContext,
    request: CreateShiftRequest,
) -> ApiResult<NewShiftInstance> {
    let status = parse_status(request.status.as_deref())?.unwrap_or_default();
    let template = match request.template_id {
        Some(template_id) => Some(
            ctx.get_template(template_id)
                .map_err(translate_core_error)?,
        ),
        None => None,
    };

    let from_template = |own: Option<i64>, pick: fn(&ShiftTemplate) -> i64| {
        own.or_else(|| template.as_ref().map(pick))
    };
    let (Some(mission_id), Some(site_id), Some(role_id)) = (
        from_template(request.mission_id, |t| t.mission_id),
        from_template(request.site_id, |t| t.site_id),
        from_template(request.role_id, |t| t.role_id),
    ) else {
        return Err(ApiError::Internal {
            message: "shift request passed validation without mission, site or role".to_string(),
        });
    };

    Ok(NewShiftInstance {
        mission_id,
        template_id: request.template_id,
        site_id,
        role_id,
        team_id: request
            .team_id
            .or_else(|| template.as_ref().and_then(|t| t.team_id)),
        start_utc: request.start_utc,
        end_utc: request.end_utc,
        status,
        source: request.source,
        capacity: request.capacity,
    })
}

/// Creates a shift and returns it with its conflicts.
///
/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn create_shift(
    ctx: &mut PlanningContext,
    request: CreateShiftRequest,
) -> ApiResult<ShiftWithConflicts> {
    request.validate()?;
    let command = shift_command(ctx, request)?;
    ctx.create_instance(command).map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn update_shift(
    ctx: &mut PlanningContext,
    shift_id: i64,
    request: UpdateShiftRequest,
) -> ApiResult<ShiftWithConflicts> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?;
    ctx.update_instance(
        shift_id,
        ShiftInstancePatch {
            mission_id: request.mission_id,
            template_id: request.template_id,
            site_id: request.site_id,
            role_id: request.role_id,
            team_id: request.team_id,
            start_utc: request.start_utc,
            end_utc: request.end_utc,
            status,
            source: request.source,
            capacity: request.capacity,
        },
    )
    .map_err(translate_core_error)
}

/// Deletes a shift and every assignment on it.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown shift.
pub fn delete_shift(ctx: &mut PlanningContext, shift_id: i64) -> ApiResult<()> {
    ctx.delete_instance(shift_id).map_err(translate_core_error)
}

// Assignments

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_assignments(
    ctx: &mut PlanningContext,
    query: AssignmentListQuery,
) -> ApiResult<Vec<Assignment>> {
    ctx.list_assignments(&AssignmentFilter {
        shift_instance_id: query.instance_id,
        collaborator_id: query.collaborator_id,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown assignment.
pub fn get_assignment(ctx: &mut PlanningContext, assignment_id: i64) -> ApiResult<Assignment> {
    ctx.get_assignment(assignment_id)
        .map_err(translate_core_error)
}

fn assignment_command(request: CreateAssignmentRequest) -> ApiResult<NewAssignment> {
    let status = parse_status(request.status.as_deref())?.unwrap_or_default();
    Ok(NewAssignment {
        shift_instance_id: request.shift_instance_id,
        collaborator_id: request.collaborator_id,
        role_id: request.role_id,
        status,
        source: request.source,
        note: request.note,
        is_locked: request.is_locked,
    })
}

/// Creates an assignment and returns it with its conflicts.
///
/// Conflicts never block the write; a hard `double_booking` is reported
/// next to the stored assignment.
///
/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound`, or `Validation` for a
/// role mismatch or a cancelled shift.
pub fn create_assignment(
    ctx: &mut PlanningContext,
    request: CreateAssignmentRequest,
) -> ApiResult<AssignmentWithConflicts> {
    request.validate()?;
    let command = assignment_command(request)?;
    ctx.create_assignment(command)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation`, `ResourceNotFound` or `Validation`.
pub fn update_assignment(
    ctx: &mut PlanningContext,
    assignment_id: i64,
    request: UpdateAssignmentRequest,
) -> ApiResult<AssignmentWithConflicts> {
    request.validate()?;
    let status = parse_status(request.status.as_deref())?;
    ctx.update_assignment(
        assignment_id,
        AssignmentPatch {
            collaborator_id: request.collaborator_id,
            role_id: request.role_id,
            status,
            source: request.source,
            note: request.note,
            is_locked: request.is_locked,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown assignment.
pub fn lock_assignment(
    ctx: &mut PlanningContext,
    assignment_id: i64,
    locked: bool,
) -> ApiResult<AssignmentWithConflicts> {
    ctx.lock_assignment(assignment_id, locked)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown assignment.
pub fn delete_assignment(ctx: &mut PlanningContext, assignment_id: i64) -> ApiResult<()> {
    ctx.delete_assignment(assignment_id)
        .map_err(translate_core_error)
}

// Availability

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_availability(
    ctx: &mut PlanningContext,
    query: AvailabilityListQuery,
) -> ApiResult<Vec<UserAvailability>> {
    ctx.list_availability(query.collaborator_id)
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound` for the collaborator.
pub fn create_availability(
    ctx: &mut PlanningContext,
    request: CreateAvailabilityRequest,
) -> ApiResult<UserAvailability> {
    request.validate()?;
    ctx.create_availability(NewAvailability {
        collaborator_id: request.collaborator_id,
        start_utc: request.start_utc,
        end_utc: request.end_utc,
        is_available: request.is_available,
        reason: request.reason,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `RequestValidation` or `ResourceNotFound`.
pub fn update_availability(
    ctx: &mut PlanningContext,
    availability_id: i64,
    request: UpdateAvailabilityRequest,
) -> ApiResult<UserAvailability> {
    request.validate()?;
    ctx.update_availability(
        availability_id,
        AvailabilityPatch {
            start_utc: request.start_utc,
            end_utc: request.end_utc,
            is_available: request.is_available,
            reason: request.reason,
        },
    )
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for an unknown record.
pub fn delete_availability(ctx: &mut PlanningContext, availability_id: i64) -> ApiResult<()> {
    ctx.delete_availability(availability_id)
        .map_err(translate_core_error)
}

// Rules and conflicts

/// Lists the rule descriptors of an organization, the default one when
/// none is named.
///
/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_rules(ctx: &mut PlanningContext, query: OrganizationQuery) -> ApiResult<RulesResponse> {
    let organization_id = query
        .organization_id
        .unwrap_or_else(|| ctx.default_organization_id());
    let rules = ctx
        .list_rules(organization_id)
        .map_err(translate_core_error)?;
    Ok(RulesResponse {
        hr_rules: rules.hr_rules,
        conflict_rules: rules.conflict_rules,
    })
}

/// Evaluates unsaved candidates. Nothing is written.
///
/// A shift whose start is not before its end is accepted here and comes
/// back with a `time_order` conflict.
///
/// # Errors
///
/// Returns `RequestValidation` for malformed candidates or
/// `ResourceNotFound` for an unknown template.
pub fn preview_conflicts(
    ctx: &mut PlanningContext,
    request: PreviewConflictsRequest,
) -> ApiResult<Vec<ConflictPreviewResponse>> {
    let shift = match request.shift {
        Some(shift) => {
            shift.validate_fields()?;
            Some(shift_command(ctx, shift)?)
        }
        None => None,
    };
    let mut assignments = Vec::with_capacity(request.assignments.len());
    for assignment in request.assignments {
        assignment.validate()?;
        assignments.push(assignment_command(assignment)?);
    }

    let results = ctx
        .preview_conflicts(PreviewRequest { shift, assignments })
        .map_err(translate_core_error)?;
    debug!(candidates = results.len(), "Previewed conflicts");
    Ok(results.into_iter().map(ConflictPreviewResponse::from).collect())
}

// Publication

/// Publishes the planning of an organization.
///
/// # Errors
///
/// Returns `RequestValidation` for an oversized message.
pub fn publish(ctx: &mut PlanningContext, request: PublishRequest) -> ApiResult<Publication> {
    request.validate()?;
    ctx.publish(NewPublication {
        organization_id: request.organization_id,
        author_user_id: request.author_user_id,
        message: request.message,
    })
    .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `Internal` if the store fails.
pub fn list_publications(
    ctx: &mut PlanningContext,
    query: OrganizationQuery,
) -> ApiResult<Vec<Publication>> {
    let organization_id = query
        .organization_id
        .unwrap_or_else(|| ctx.default_organization_id());
    ctx.list_publications(organization_id)
        .map_err(translate_core_error)
}

// Auto-assign

/// Runs an auto-assign job to completion and returns its summary.
///
/// # Errors
///
/// Returns the first error raised by the job; nothing it wrote is kept.
pub fn start_auto_assign(
    ctx: &mut PlanningContext,
    request: AutoAssignStartRequest,
) -> ApiResult<AutoAssignJob> {
    ctx.start_auto_assign(request.shift_ids.as_deref())
        .map_err(translate_core_error)
}

/// # Errors
///
/// Returns `ResourceNotFound` for a job that never ran in this process.
pub fn auto_assign_status(ctx: &PlanningContext, job_id: &str) -> ApiResult<AutoAssignJob> {
    ctx.auto_assign_status(job_id)
        .map_err(translate_core_error)
}

// Audit

/// # Errors
///
/// Returns `RequestValidation` for unparseable bounds.
pub fn list_audit(ctx: &mut PlanningContext, query: AuditQuery) -> ApiResult<Vec<PlanningChange>> {
    let (from_ts, to_ts) = query.bounds()?;
    ctx.list_changes(&AuditFilter {
        from_ts,
        to_ts,
        entity_type: query.entity,
        entity_id: query.entity_id,
    })
    .map_err(translate_core_error)
}

// Health

#[must_use]
pub fn health(ctx: &PlanningContext) -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: ctx.backend_name().to_string(),
    }
}
