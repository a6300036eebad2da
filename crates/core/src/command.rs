// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inputs to planning operations.
//!
//! `New*` values describe an entity to create. `*Patch` values describe a
//! partial update: `None` keeps the stored value.

use shiftplan_domain::{AssignmentStatus, CollaboratorStatus, MissionStatus, ShiftStatus};
use time::OffsetDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOrganization {
    pub name: String,
    /// Defaults to UTC.
    pub timezone: Option<String>,
    /// Defaults to EUR.
    pub currency: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSite {
    pub organization_id: i64,
    pub name: String,
    /// Inherits the organization timezone when absent.
    pub timezone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePatch {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRole {
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCollaborator {
    pub organization_id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub primary_role_id: Option<i64>,
    pub status: CollaboratorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub primary_role_id: Option<i64>,
    pub status: Option<CollaboratorStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMission {
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub title: String,
    pub start_utc: OffsetDateTime,
    pub end_utc: OffsetDateTime,
    pub status: MissionStatus,
    pub budget_target: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionPatch {
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    pub title: Option<String>,
    pub start_utc: Option<OffsetDateTime>,
    pub end_utc: Option<OffsetDateTime>,
    pub status: Option<MissionStatus>,
    pub budget_target: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShiftTemplate {
    pub mission_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub recurrence_rule: Option<String>,
    pub start_time_utc: OffsetDateTime,
    pub end_time_utc: OffsetDateTime,
    pub expected_headcount: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftTemplatePatch {
    pub mission_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    pub recurrence_rule: Option<String>,
    pub start_time_utc: Option<OffsetDateTime>,
    pub end_time_utc: Option<OffsetDateTime>,
    pub expected_headcount: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShiftInstance {
    pub mission_id: i64,
    pub template_id: Option<i64>,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub start_utc: OffsetDateTime,
    pub end_utc: OffsetDateTime,
    pub status: ShiftStatus,
    pub source: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftInstancePatch {
    pub mission_id: Option<i64>,
    pub template_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    pub start_utc: Option<OffsetDateTime>,
    pub end_utc: Option<OffsetDateTime>,
    pub status: Option<ShiftStatus>,
    pub source: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub shift_instance_id: i64,
    pub collaborator_id: i64,
    pub role_id: i64,
    pub status: AssignmentStatus,
    pub source: String,
    pub note: Option<String>,
    pub is_locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentPatch {
    pub collaborator_id: Option<i64>,
    pub role_id: Option<i64>,
    pub status: Option<AssignmentStatus>,
    pub source: Option<String>,
    pub note: Option<String>,
    pub is_locked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvailability {
    pub collaborator_id: i64,
    pub start_utc: OffsetDateTime,
    pub end_utc: OffsetDateTime,
    pub is_available: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityPatch {
    pub start_utc: Option<OffsetDateTime>,
    pub end_utc: Option<OffsetDateTime>,
    pub is_available: Option<bool>,
    pub reason: Option<String>,
}

/// Criteria for the shift listing view. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftListFilter {
    pub mission_id: Option<i64>,
    /// Keeps shifts ending after this instant.
    pub start: Option<OffsetDateTime>,
    /// Keeps shifts starting before this instant.
    pub end: Option<OffsetDateTime>,
    pub site_ids: Vec<i64>,
    /// Keeps shifts with an assignment for any of these collaborators.
    pub collaborator_ids: Vec<i64>,
    pub statuses: Vec<ShiftStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPublication {
    /// Falls back to the context's default organization.
    pub organization_id: Option<i64>,
    pub author_user_id: Option<i64>,
    pub message: Option<String>,
}
