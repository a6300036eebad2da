// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP routes.
//!
//! Handlers lock the planning context, call into the API layer and map the
//! outcome onto a status code. All planning calls are serialized through
//! the one mutex.

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::{StatusCode, Uri},
    middleware,
    routing::{get, post, put},
};
use shiftplan::{AssignmentWithConflicts, AutoAssignJob, PlanningContext, ShiftWithAssignments, ShiftWithConflicts};
use shiftplan_api::{
    AssignmentListQuery, AuditQuery, AutoAssignStartRequest, AvailabilityListQuery,
    ConflictPreviewResponse, CreateAssignmentRequest, CreateAvailabilityRequest,
    CreateCollaboratorRequest, CreateMissionRequest, CreateOrganizationRequest, CreateRoleRequest,
    CreateShiftRequest, CreateShiftTemplateRequest, CreateSiteRequest, HealthResponse,
    LockAssignmentRequest, MissionListQuery, OrganizationQuery, PreviewConflictsRequest,
    PublishRequest, RulesResponse, ShiftListQuery, TemplateListQuery, UpdateAssignmentRequest,
    UpdateAvailabilityRequest, UpdateCollaboratorRequest, UpdateMissionRequest,
    UpdateOrganizationRequest, UpdateRoleRequest, UpdateShiftRequest, UpdateShiftTemplateRequest,
    UpdateSiteRequest,
};
use shiftplan_audit::PlanningChange;
use shiftplan_domain::{
    Assignment, Collaborator, Mission, Organization, Publication, Role, ShiftInstance,
    ShiftTemplate, Site, UserAvailability,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::trace::trace_requests;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub planning: Arc<Mutex<PlanningContext>>,
}

impl AppState {
    pub fn new(ctx: PlanningContext) -> Self {
        Self {
            planning: Arc::new(Mutex::new(ctx)),
        }
    }
}

type JsonResult<T> = Result<Json<T>, HttpError>;
type CreatedResult<T> = Result<(StatusCode, Json<T>), HttpError>;

// System

async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    let ctx = app_state.planning.lock().await;
    Json(shiftplan_api::health(&ctx))
}

async fn handle_not_found(uri: Uri) -> HttpError {
    HttpError::route_not_found(uri.path())
}

// Organizations

async fn handle_list_organizations(
    AxumState(app_state): AxumState<AppState>,
) -> JsonResult<Vec<Organization>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_organizations(&mut ctx)?))
}

async fn handle_create_organization(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateOrganizationRequest>,
) -> CreatedResult<Organization> {
    let mut ctx = app_state.planning.lock().await;
    let organization = shiftplan_api::create_organization(&mut ctx, req)?;
    info!(organization_id = organization.id, "Created organization");
    Ok((StatusCode::CREATED, Json(organization)))
}

async fn handle_get_organization(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(organization_id): ApiPath<i64>,
) -> JsonResult<Organization> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_organization(
        &mut ctx,
        organization_id,
    )?))
}

async fn handle_update_organization(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(organization_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateOrganizationRequest>,
) -> JsonResult<Organization> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_organization(
        &mut ctx,
        organization_id,
        req,
    )?))
}

async fn handle_delete_organization(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(organization_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_organization(&mut ctx, organization_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Sites

async fn handle_list_sites(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<OrganizationQuery>,
) -> JsonResult<Vec<Site>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_sites(&mut ctx, query)?))
}

async fn handle_create_site(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateSiteRequest>,
) -> CreatedResult<Site> {
    let mut ctx = app_state.planning.lock().await;
    let site = shiftplan_api::create_site(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(site)))
}

async fn handle_get_site(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(site_id): ApiPath<i64>,
) -> JsonResult<Site> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_site(&mut ctx, site_id)?))
}

async fn handle_update_site(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(site_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateSiteRequest>,
) -> JsonResult<Site> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_site(&mut ctx, site_id, req)?))
}

async fn handle_delete_site(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(site_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_site(&mut ctx, site_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Roles

async fn handle_list_roles(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<OrganizationQuery>,
) -> JsonResult<Vec<Role>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_roles(&mut ctx, query)?))
}

async fn handle_create_role(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateRoleRequest>,
) -> CreatedResult<Role> {
    let mut ctx = app_state.planning.lock().await;
    let role = shiftplan_api::create_role(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(role)))
}

async fn handle_get_role(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(role_id): ApiPath<i64>,
) -> JsonResult<Role> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_role(&mut ctx, role_id)?))
}

async fn handle_update_role(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(role_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateRoleRequest>,
) -> JsonResult<Role> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_role(&mut ctx, role_id, req)?))
}

async fn handle_delete_role(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(role_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_role(&mut ctx, role_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Collaborators

async fn handle_list_collaborators(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<OrganizationQuery>,
) -> JsonResult<Vec<Collaborator>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_collaborators(&mut ctx, query)?))
}

async fn handle_create_collaborator(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateCollaboratorRequest>,
) -> CreatedResult<Collaborator> {
    let mut ctx = app_state.planning.lock().await;
    let collaborator = shiftplan_api::create_collaborator(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(collaborator)))
}

async fn handle_get_collaborator(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(collaborator_id): ApiPath<i64>,
) -> JsonResult<Collaborator> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_collaborator(
        &mut ctx,
        collaborator_id,
    )?))
}

async fn handle_update_collaborator(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(collaborator_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateCollaboratorRequest>,
) -> JsonResult<Collaborator> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_collaborator(
        &mut ctx,
        collaborator_id,
        req,
    )?))
}

async fn handle_delete_collaborator(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(collaborator_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_collaborator(&mut ctx, collaborator_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Missions

async fn handle_list_missions(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<MissionListQuery>,
) -> JsonResult<Vec<Mission>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_missions(&mut ctx, query)?))
}

async fn handle_create_mission(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateMissionRequest>,
) -> CreatedResult<Mission> {
    let mut ctx = app_state.planning.lock().await;
    let mission = shiftplan_api::create_mission(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(mission)))
}

async fn handle_get_mission(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(mission_id): ApiPath<i64>,
) -> JsonResult<Mission> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_mission(&mut ctx, mission_id)?))
}

async fn handle_update_mission(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(mission_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateMissionRequest>,
) -> JsonResult<Mission> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_mission(
        &mut ctx, mission_id, req,
    )?))
}

async fn handle_delete_mission(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(mission_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_mission(&mut ctx, mission_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Shift templates

async fn handle_list_templates(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<TemplateListQuery>,
) -> JsonResult<Vec<ShiftTemplate>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_templates(&mut ctx, query)?))
}

async fn handle_create_template(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateShiftTemplateRequest>,
) -> CreatedResult<ShiftTemplate> {
    let mut ctx = app_state.planning.lock().await;
    let template = shiftplan_api::create_template(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(template)))
}

async fn handle_get_template(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(template_id): ApiPath<i64>,
) -> JsonResult<ShiftTemplate> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_template(&mut ctx, template_id)?))
}

async fn handle_update_template(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(template_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateShiftTemplateRequest>,
) -> JsonResult<ShiftTemplate> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_template(
        &mut ctx,
        template_id,
        req,
    )?))
}

async fn handle_deactivate_template(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(template_id): ApiPath<i64>,
) -> JsonResult<ShiftTemplate> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::deactivate_template(
        &mut ctx,
        template_id,
    )?))
}

async fn handle_delete_template(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(template_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_template(&mut ctx, template_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Shift instances

/// Serves both `/shifts` and `/shift-instances`; list parameters may be
/// repeated or comma separated.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> JsonResult<Vec<ShiftWithAssignments>> {
    let query = ShiftListQuery::from_pairs(&pairs).map_err(HttpError::request_validation)?;
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_shifts(&mut ctx, &query.filter)?))
}

async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateShiftRequest>,
) -> CreatedResult<ShiftWithConflicts> {
    let mut ctx = app_state.planning.lock().await;
    let created = shiftplan_api::create_shift(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn handle_get_shift(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(shift_id): ApiPath<i64>,
) -> JsonResult<ShiftInstance> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_shift(&mut ctx, shift_id)?))
}

async fn handle_update_shift(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(shift_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateShiftRequest>,
) -> JsonResult<ShiftWithConflicts> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_shift(&mut ctx, shift_id, req)?))
}

async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(shift_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_shift(&mut ctx, shift_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Assignments

async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<AssignmentListQuery>,
) -> JsonResult<Vec<Assignment>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_assignments(&mut ctx, query)?))
}

async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateAssignmentRequest>,
) -> CreatedResult<AssignmentWithConflicts> {
    let mut ctx = app_state.planning.lock().await;
    let created = shiftplan_api::create_assignment(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn handle_get_assignment(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(assignment_id): ApiPath<i64>,
) -> JsonResult<Assignment> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::get_assignment(&mut ctx, assignment_id)?))
}

async fn handle_update_assignment(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(assignment_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateAssignmentRequest>,
) -> JsonResult<AssignmentWithConflicts> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_assignment(
        &mut ctx,
        assignment_id,
        req,
    )?))
}

async fn handle_lock_assignment(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(assignment_id): ApiPath<i64>,
    ApiJson(req): ApiJson<LockAssignmentRequest>,
) -> JsonResult<AssignmentWithConflicts> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::lock_assignment(
        &mut ctx,
        assignment_id,
        req.is_locked,
    )?))
}

async fn handle_delete_assignment(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(assignment_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_assignment(&mut ctx, assignment_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Availability

async fn handle_list_availability(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<AvailabilityListQuery>,
) -> JsonResult<Vec<UserAvailability>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_availability(&mut ctx, query)?))
}

async fn handle_create_availability(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<CreateAvailabilityRequest>,
) -> CreatedResult<UserAvailability> {
    let mut ctx = app_state.planning.lock().await;
    let record = shiftplan_api::create_availability(&mut ctx, req)?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn handle_update_availability(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(availability_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateAvailabilityRequest>,
) -> JsonResult<UserAvailability> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::update_availability(
        &mut ctx,
        availability_id,
        req,
    )?))
}

async fn handle_delete_availability(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(availability_id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    let mut ctx = app_state.planning.lock().await;
    shiftplan_api::delete_availability(&mut ctx, availability_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// Rules, preview, publication, auto-assign, audit

async fn handle_list_rules(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<OrganizationQuery>,
) -> JsonResult<RulesResponse> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_rules(&mut ctx, query)?))
}

async fn handle_preview_conflicts(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<PreviewConflictsRequest>,
) -> JsonResult<Vec<ConflictPreviewResponse>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::preview_conflicts(&mut ctx, req)?))
}

async fn handle_publish(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<PublishRequest>,
) -> JsonResult<Publication> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::publish(&mut ctx, req)?))
}

async fn handle_list_publications(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<OrganizationQuery>,
) -> JsonResult<Vec<Publication>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_publications(&mut ctx, query)?))
}

async fn handle_start_auto_assign(
    AxumState(app_state): AxumState<AppState>,
    ApiJson(req): ApiJson<AutoAssignStartRequest>,
) -> JsonResult<AutoAssignJob> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::start_auto_assign(&mut ctx, req)?))
}

async fn handle_auto_assign_status(
    AxumState(app_state): AxumState<AppState>,
    ApiPath(job_id): ApiPath<String>,
) -> JsonResult<AutoAssignJob> {
    let ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::auto_assign_status(&ctx, &job_id)?))
}

async fn handle_list_audit(
    AxumState(app_state): AxumState<AppState>,
    ApiQuery(query): ApiQuery<AuditQuery>,
) -> JsonResult<Vec<PlanningChange>> {
    let mut ctx = app_state.planning.lock().await;
    Ok(Json(shiftplan_api::list_audit(&mut ctx, query)?))
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations",
            get(handle_list_organizations).post(handle_create_organization),
        )
        .route(
            "/organizations/{organization_id}",
            get(handle_get_organization)
                .put(handle_update_organization)
                .delete(handle_delete_organization),
        )
        .route("/sites", get(handle_list_sites).post(handle_create_site))
        .route(
            "/sites/{site_id}",
            get(handle_get_site)
                .put(handle_update_site)
                .delete(handle_delete_site),
        )
        .route("/roles", get(handle_list_roles).post(handle_create_role))
        .route(
            "/roles/{role_id}",
            get(handle_get_role)
                .put(handle_update_role)
                .delete(handle_delete_role),
        )
        .route(
            "/collaborators",
            get(handle_list_collaborators).post(handle_create_collaborator),
        )
        .route(
            "/collaborators/{collaborator_id}",
            get(handle_get_collaborator)
                .put(handle_update_collaborator)
                .delete(handle_delete_collaborator),
        )
        .route(
            "/missions",
            get(handle_list_missions).post(handle_create_mission),
        )
        .route(
            "/missions/{mission_id}",
            get(handle_get_mission)
                .put(handle_update_mission)
                .delete(handle_delete_mission),
        )
}

fn planning_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shift-templates",
            get(handle_list_templates).post(handle_create_template),
        )
        .route(
            "/shift-templates/{template_id}",
            get(handle_get_template)
                .put(handle_update_template)
                .delete(handle_delete_template),
        )
        .route(
            "/shift-templates/{template_id}/deactivate",
            post(handle_deactivate_template),
        )
        .route("/shifts", get(handle_list_shifts).post(handle_create_shift))
        .route(
            "/shifts/{shift_id}",
            get(handle_get_shift)
                .put(handle_update_shift)
                .delete(handle_delete_shift),
        )
        .route("/shift-instances", get(handle_list_shifts))
        .route("/shift-instances/{shift_id}", put(handle_update_shift))
        .route(
            "/assignments",
            get(handle_list_assignments).post(handle_create_assignment),
        )
        .route(
            "/assignments/{assignment_id}",
            get(handle_get_assignment)
                .put(handle_update_assignment)
                .delete(handle_delete_assignment),
        )
        .route(
            "/assignments/{assignment_id}/lock",
            put(handle_lock_assignment),
        )
        .route(
            "/availability",
            get(handle_list_availability).post(handle_create_availability),
        )
        .route(
            "/availability/{availability_id}",
            put(handle_update_availability).delete(handle_delete_availability),
        )
        .route("/rules", get(handle_list_rules))
        .route("/conflicts/preview", post(handle_preview_conflicts))
        .route("/publish", post(handle_publish))
        .route("/publications", get(handle_list_publications))
        .route("/auto-assign/start", post(handle_start_auto_assign))
        .route(
            "/auto-assign/status/{job_id}",
            get(handle_auto_assign_status),
        )
        .route("/audit", get(handle_list_audit))
}

pub fn build_router(app_state: AppState) -> Router {
    let api = catalog_routes()
        .route("/health", get(handle_health))
        .nest("/planning", planning_routes());

    Router::new()
        .route("/health", get(handle_health))
        .nest("/api/v1", api)
        .fallback(handle_not_found)
        .layer(middleware::from_fn(trace_requests))
        .with_state(app_state)
}
