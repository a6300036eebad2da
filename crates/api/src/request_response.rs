// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests deserialize from JSON bodies and carry their own shape checks
//! in `validate`. Statuses stay strings here so a bad value is reported
//! against its field instead of failing the whole body.

use serde::{Deserialize, Serialize};
use shiftplan::{PreviewResult, ShiftListFilter};
use shiftplan_domain::{
    AssignmentStatus, CollaboratorStatus, ConflictEntry, ConflictRule, FieldError, FieldErrors,
    HrRule, MissionStatus, SOURCE_MANUAL, ShiftStatus,
};
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const SHIFT_STATUSES: &[&str] = &["draft", "published", "cancelled"];
const MISSION_STATUSES: &[&str] = &["draft", "published", "cancelled"];
const ASSIGNMENT_STATUSES: &[&str] = &["proposed", "confirmed", "rejected"];
const COLLABORATOR_STATUSES: &[&str] = &["active", "inactive"];

const fn default_one() -> i32 {
    1
}

const fn default_true() -> bool {
    true
}

fn default_source() -> String {
    SOURCE_MANUAL.to_string()
}

/// API request to create an organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub contact_email: Option<String>,
}

impl CreateOrganizationRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", Some(&self.name), 1, 200);
        errors.timezone("timezone", self.timezone.as_deref());
        errors.exact_len("currency", self.currency.as_deref(), 3);
        errors.max_len("contact_email", self.contact_email.as_deref(), 255);
        errors.finish()
    }
}

/// API request to update an organization. Absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub contact_email: Option<String>,
}

impl UpdateOrganizationRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", self.name.as_deref(), 1, 200);
        errors.timezone("timezone", self.timezone.as_deref());
        errors.exact_len("currency", self.currency.as_deref(), 3);
        errors.max_len("contact_email", self.contact_email.as_deref(), 255);
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSiteRequest {
    pub organization_id: i64,
    pub name: String,
    pub timezone: Option<String>,
    pub address: Option<String>,
}

impl CreateSiteRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", Some(&self.name), 1, 200);
        errors.timezone("timezone", self.timezone.as_deref());
        errors.max_len("address", self.address.as_deref(), 255);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateSiteRequest {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub address: Option<String>,
}

impl UpdateSiteRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", self.name.as_deref(), 1, 200);
        errors.timezone("timezone", self.timezone.as_deref());
        errors.max_len("address", self.address.as_deref(), 255);
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRoleRequest {
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateRoleRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", Some(&self.name), 1, 200);
        errors.max_len("description", self.description.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateRoleRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("name", self.name.as_deref(), 1, 200);
        errors.max_len("description", self.description.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCollaboratorRequest {
    pub organization_id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub primary_role_id: Option<i64>,
    /// `active` when absent.
    pub status: Option<String>,
}

impl CreateCollaboratorRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("full_name", Some(&self.full_name), 1, 200);
        errors.max_len("email", self.email.as_deref(), 255);
        errors.one_of::<CollaboratorStatus>(
            "status",
            self.status.as_deref(),
            COLLABORATOR_STATUSES,
        );
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateCollaboratorRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub primary_role_id: Option<i64>,
    pub status: Option<String>,
}

impl UpdateCollaboratorRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("full_name", self.full_name.as_deref(), 1, 200);
        errors.max_len("email", self.email.as_deref(), 255);
        errors.one_of::<CollaboratorStatus>(
            "status",
            self.status.as_deref(),
            COLLABORATOR_STATUSES,
        );
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateMissionRequest {
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    pub status: Option<String>,
    pub budget_target: Option<f64>,
    pub note: Option<String>,
}

impl CreateMissionRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("title", Some(&self.title), 1, 200);
        errors.window(
            "start_utc",
            Some(self.start_utc),
            "end_utc",
            Some(self.end_utc),
        );
        errors.one_of::<MissionStatus>("status", self.status.as_deref(), MISSION_STATUSES);
        errors.non_negative("budget_target", self.budget_target);
        errors.max_len("note", self.note.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateMissionRequest {
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    pub title: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_utc: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_utc: Option<OffsetDateTime>,
    pub status: Option<String>,
    pub budget_target: Option<f64>,
    pub note: Option<String>,
}

impl UpdateMissionRequest {
    /// Checks the fields present in the patch. The merged window is
    /// checked again once the stored mission is known.
    ///
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.len_between("title", self.title.as_deref(), 1, 200);
        errors.window("start_utc", self.start_utc, "end_utc", self.end_utc);
        errors.one_of::<MissionStatus>("status", self.status.as_deref(), MISSION_STATUSES);
        errors.non_negative("budget_target", self.budget_target);
        errors.max_len("note", self.note.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateShiftTemplateRequest {
    pub mission_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub recurrence_rule: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time_utc: OffsetDateTime,
    #[serde(default = "default_one")]
    pub expected_headcount: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateShiftTemplateRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.max_len("recurrence_rule", self.recurrence_rule.as_deref(), 255);
        errors.window(
            "start_time_utc",
            Some(self.start_time_utc),
            "end_time_utc",
            Some(self.end_time_utc),
        );
        errors.at_least("expected_headcount", Some(self.expected_headcount), 1);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateShiftTemplateRequest {
    pub mission_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    pub recurrence_rule: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time_utc: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time_utc: Option<OffsetDateTime>,
    pub expected_headcount: Option<i32>,
    pub is_active: Option<bool>,
}

impl UpdateShiftTemplateRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.max_len("recurrence_rule", self.recurrence_rule.as_deref(), 255);
        errors.window(
            "start_time_utc",
            self.start_time_utc,
            "end_time_utc",
            self.end_time_utc,
        );
        errors.at_least("expected_headcount", self.expected_headcount, 1);
        errors.finish()
    }
}

/// API request to create a shift instance, directly or from a template.
///
/// With `template_id` set, mission/site/role/team are copied from the
/// template and the matching fields here may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateShiftRequest {
    pub mission_id: Option<i64>,
    pub template_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    pub status: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_one")]
    pub capacity: i32,
}

impl CreateShiftRequest {
    /// Same as [`Self::validate`] minus the window check, for previews
    /// where an inverted window is reported as a conflict instead.
    ///
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate_fields(&self) -> Result<(), Vec<FieldError>> {
        self.collect_errors().finish()
    }

    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = self.collect_errors();
        errors.window(
            "start_utc",
            Some(self.start_utc),
            "end_utc",
            Some(self.end_utc),
        );
        errors.finish()
    }

    fn collect_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.template_id.is_none() {
            for (field, value) in [
                ("mission_id", self.mission_id),
                ("site_id", self.site_id),
                ("role_id", self.role_id),
            ] {
                if value.is_none() {
                    errors.push(field, "Field required");
                }
            }
        }
        errors.one_of::<ShiftStatus>("status", self.status.as_deref(), SHIFT_STATUSES);
        errors.max_len("source", Some(&self.source), 50);
        errors.at_least("capacity", Some(self.capacity), 1);
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateShiftRequest {
    pub mission_id: Option<i64>,
    pub template_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
    pub team_id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_utc: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_utc: Option<OffsetDateTime>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub capacity: Option<i32>,
}

impl UpdateShiftRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.window("start_utc", self.start_utc, "end_utc", self.end_utc);
        errors.one_of::<ShiftStatus>("status", self.status.as_deref(), SHIFT_STATUSES);
        errors.max_len("source", self.source.as_deref(), 50);
        errors.at_least("capacity", self.capacity, 1);
        errors.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAssignmentRequest {
    pub shift_instance_id: i64,
    pub collaborator_id: i64,
    pub role_id: i64,
    pub status: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    pub note: Option<String>,
    #[serde(default)]
    pub is_locked: bool,
}

impl CreateAssignmentRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.one_of::<AssignmentStatus>(
            "status",
            self.status.as_deref(),
            ASSIGNMENT_STATUSES,
        );
        errors.max_len("source", Some(&self.source), 50);
        errors.max_len("note", self.note.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub collaborator_id: Option<i64>,
    pub role_id: Option<i64>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub note: Option<String>,
    pub is_locked: Option<bool>,
}

impl UpdateAssignmentRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.one_of::<AssignmentStatus>(
            "status",
            self.status.as_deref(),
            ASSIGNMENT_STATUSES,
        );
        errors.max_len("source", self.source.as_deref(), 50);
        errors.max_len("note", self.note.as_deref(), 500);
        errors.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LockAssignmentRequest {
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub collaborator_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub reason: Option<String>,
}

impl CreateAvailabilityRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.window(
            "start_utc",
            Some(self.start_utc),
            "end_utc",
            Some(self.end_utc),
        );
        errors.max_len("reason", self.reason.as_deref(), 255);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateAvailabilityRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_utc: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_utc: Option<OffsetDateTime>,
    pub is_available: Option<bool>,
    pub reason: Option<String>,
}

impl UpdateAvailabilityRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.window("start_utc", self.start_utc, "end_utc", self.end_utc);
        errors.max_len("reason", self.reason.as_deref(), 255);
        errors.finish()
    }
}

/// Unsaved candidates to check against the rule engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewConflictsRequest {
    pub shift: Option<CreateShiftRequest>,
    #[serde(default)]
    pub assignments: Vec<CreateAssignmentRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PublishRequest {
    pub organization_id: Option<i64>,
    pub author_user_id: Option<i64>,
    pub message: Option<String>,
}

impl PublishRequest {
    /// # Errors
    ///
    /// Returns every field that violates the request shape.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = FieldErrors::new();
        errors.max_len("message", self.message.as_deref(), 255);
        errors.finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AutoAssignStartRequest {
    pub shift_ids: Option<Vec<i64>>,
}

/// Query parameters accepted by the shift listings.
///
/// Built from raw `(key, value)` pairs so list parameters can be given
/// either repeated (`status=a&status=b`) or comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftListQuery {
    pub filter: ShiftListFilter,
}

impl ShiftListQuery {
    /// # Errors
    ///
    /// Returns every parameter that could not be parsed.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, Vec<FieldError>> {
        let mut filter = ShiftListFilter::default();
        let mut errors = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "mission_id" => match value.parse() {
                    Ok(id) => filter.mission_id = Some(id),
                    Err(_) => errors.push(FieldError::query(key, "Input should be a valid integer")),
                },
                "start" => match parse_timestamp(value) {
                    Some(ts) => filter.start = Some(ts),
                    None => errors.push(FieldError::query(key, "Input should be a valid datetime")),
                },
                "end" => match parse_timestamp(value) {
                    Some(ts) => filter.end = Some(ts),
                    None => errors.push(FieldError::query(key, "Input should be a valid datetime")),
                },
                "place_ids" => collect_list(key, value, &mut filter.site_ids, &mut errors),
                "person_ids" => {
                    collect_list(key, value, &mut filter.collaborator_ids, &mut errors);
                }
                "status" => collect_list(key, value, &mut filter.statuses, &mut errors),
                _ => {}
            }
        }

        if errors.is_empty() {
            Ok(Self { filter })
        } else {
            Err(errors)
        }
    }
}

fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).ok()
}

fn collect_list<T: FromStr>(
    key: &str,
    value: &str,
    out: &mut Vec<T>,
    errors: &mut Vec<FieldError>,
) {
    for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match item.parse() {
            Ok(parsed) => out.push(parsed),
            Err(_) => errors.push(FieldError::query(key, format!("Invalid value '{item}'"))),
        }
    }
}

/// Query parameters of the audit listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuditQuery {
    pub from_ts: Option<String>,
    pub to_ts: Option<String>,
    pub entity: Option<String>,
    pub entity_id: Option<i64>,
}

impl AuditQuery {
    /// Parses the timestamp bounds.
    ///
    /// # Errors
    ///
    /// Returns a query error for each bound that is not RFC 3339.
    pub fn bounds(
        &self,
    ) -> Result<(Option<OffsetDateTime>, Option<OffsetDateTime>), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut parse = |field: &str, value: Option<&str>| {
            value.and_then(|v| {
                let parsed = parse_timestamp(v);
                if parsed.is_none() {
                    errors.push(FieldError::query(field, "Input should be a valid datetime"));
                }
                parsed
            })
        };
        let from = parse("from_ts", self.from_ts.as_deref());
        let to = parse("to_ts", self.to_ts.as_deref());
        if errors.is_empty() {
            Ok((from, to))
        } else {
            Err(errors)
        }
    }
}

/// Optional organization scope for catalog and rule listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct OrganizationQuery {
    pub organization_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MissionListQuery {
    pub organization_id: Option<i64>,
    pub site_id: Option<i64>,
    pub role_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateListQuery {
    pub mission_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AssignmentListQuery {
    pub instance_id: Option<i64>,
    pub collaborator_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AvailabilityListQuery {
    pub collaborator_id: Option<i64>,
}

/// API response for the rule catalog of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulesResponse {
    pub hr_rules: Vec<HrRule>,
    pub conflict_rules: Vec<ConflictRule>,
}

/// Echo of a previewed shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftCandidateInfo {
    pub mission_id: i64,
    pub template_id: Option<i64>,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    pub status: ShiftStatus,
    pub source: String,
    pub capacity: i32,
}

/// Echo of a previewed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentCandidateInfo {
    pub shift_instance_id: i64,
    pub collaborator_id: i64,
    pub role_id: i64,
    pub status: AssignmentStatus,
    pub source: String,
    pub note: Option<String>,
    pub is_locked: bool,
}

/// One previewed candidate. Exactly one of `shift` and `assignment` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictPreviewResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftCandidateInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AssignmentCandidateInfo>,
    pub conflicts: Vec<ConflictEntry>,
}

impl From<PreviewResult> for ConflictPreviewResponse {
    fn from(result: PreviewResult) -> Self {
        match result {
            PreviewResult::Shift { shift, conflicts } => Self {
                shift: Some(ShiftCandidateInfo {
                    mission_id: shift.mission_id,
                    template_id: shift.template_id,
                    site_id: shift.site_id,
                    role_id: shift.role_id,
                    team_id: shift.team_id,
                    start_utc: shift.start_utc,
                    end_utc: shift.end_utc,
                    status: shift.status,
                    source: shift.source,
                    capacity: shift.capacity,
                }),
                assignment: None,
                conflicts,
            },
            PreviewResult::Assignment {
                assignment,
                conflicts,
            } => Self {
                shift: None,
                assignment: Some(AssignmentCandidateInfo {
                    shift_instance_id: assignment.shift_instance_id,
                    collaborator_id: assignment.collaborator_id,
                    role_id: assignment.role_id,
                    status: assignment.status,
                    source: assignment.source,
                    note: assignment.note,
                    is_locked: assignment.is_locked,
                }),
                conflicts,
            },
        }
    }
}

/// API response for the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Name of the entity store backend in use.
    pub backend: String,
}
