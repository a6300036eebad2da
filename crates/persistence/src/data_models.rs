// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row mappings between planning entities and database tables.
//!
//! `*Row` structs are read from the database. `*Record` structs are written
//! on insert and update; they omit the primary key, which `SQLite` assigns.
//! Timestamps are stored as RFC 3339 text in UTC, booleans as 0/1 integers
//! and structured fields as JSON text.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use serde_json::{Map, Value};
use shiftplan_audit::PlanningChange;
use shiftplan_domain::{
    Assignment, Collaborator, ConflictRule, HrRule, Mission, Organization, Publication, Role,
    ShiftInstance, ShiftTemplate, Site, UserAvailability,
};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::diesel_schema::{
    assignments, collaborators, conflict_rules, hr_rules, missions, organizations,
    planning_changes, publications, roles, shift_instances, shift_templates, sites,
    user_availability,
};
use crate::error::PersistenceError;

pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn format_optional_timestamp(
    value: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    value.map(format_timestamp).transpose()
}

fn parse_timestamp(table: &'static str, value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| PersistenceError::CorruptRecord {
        table,
        reason: format!("invalid timestamp '{value}': {e}"),
    })
}

fn parse_field<T>(table: &'static str, value: &str) -> Result<T, PersistenceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| PersistenceError::CorruptRecord {
        table,
        reason: e.to_string(),
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(
    table: &'static str,
    value: &str,
) -> Result<T, PersistenceError> {
    serde_json::from_str(value).map_err(|e| PersistenceError::CorruptRecord {
        table,
        reason: format!("invalid JSON: {e}"),
    })
}

/// `SQLite` integers are 64-bit; headcounts and versions are 32-bit.
fn narrow(table: &'static str, value: i64) -> Result<i32, PersistenceError> {
    value.to_i32().ok_or_else(|| PersistenceError::CorruptRecord {
        table,
        reason: format!("integer {value} out of range"),
    })
}

const fn to_flag(value: bool) -> i32 {
    if value { 1 } else { 0 }
}

// Organizations

#[derive(Queryable, Selectable)]
#[diesel(table_name = organizations)]
pub struct OrganizationRow {
    organization_id: i64,
    name: String,
    timezone: String,
    currency: String,
    contact_email: Option<String>,
}

impl From<OrganizationRow> for Organization {
    fn from(row: OrganizationRow) -> Self {
        Self {
            id: row.organization_id,
            name: row.name,
            timezone: row.timezone,
            currency: row.currency,
            contact_email: row.contact_email,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = organizations, treat_none_as_null = true)]
pub struct OrganizationRecord<'a> {
    name: &'a str,
    timezone: &'a str,
    currency: &'a str,
    contact_email: Option<&'a str>,
}

impl<'a> From<&'a Organization> for OrganizationRecord<'a> {
    fn from(org: &'a Organization) -> Self {
        Self {
            name: &org.name,
            timezone: &org.timezone,
            currency: &org.currency,
            contact_email: org.contact_email.as_deref(),
        }
    }
}

// Sites

#[derive(Queryable, Selectable)]
#[diesel(table_name = sites)]
pub struct SiteRow {
    site_id: i64,
    organization_id: i64,
    name: String,
    timezone: String,
    address: Option<String>,
}

impl From<SiteRow> for Site {
    fn from(row: SiteRow) -> Self {
        Self {
            id: row.site_id,
            organization_id: row.organization_id,
            name: row.name,
            timezone: row.timezone,
            address: row.address,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = sites, treat_none_as_null = true)]
pub struct SiteRecord<'a> {
    organization_id: i64,
    name: &'a str,
    timezone: &'a str,
    address: Option<&'a str>,
}

impl<'a> From<&'a Site> for SiteRecord<'a> {
    fn from(site: &'a Site) -> Self {
        Self {
            organization_id: site.organization_id,
            name: &site.name,
            timezone: &site.timezone,
            address: site.address.as_deref(),
        }
    }
}

// Roles

#[derive(Queryable, Selectable)]
#[diesel(table_name = roles)]
pub struct RoleRow {
    role_id: i64,
    organization_id: i64,
    name: String,
    description: Option<String>,
    tags_json: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = PersistenceError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.role_id,
            organization_id: row.organization_id,
            name: row.name,
            description: row.description,
            tags: parse_json("roles", &row.tags_json)?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = roles, treat_none_as_null = true)]
pub struct RoleRecord<'a> {
    organization_id: i64,
    name: &'a str,
    description: Option<&'a str>,
    tags_json: String,
}

impl<'a> TryFrom<&'a Role> for RoleRecord<'a> {
    type Error = PersistenceError;

    fn try_from(role: &'a Role) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: role.organization_id,
            name: &role.name,
            description: role.description.as_deref(),
            tags_json: serde_json::to_string(&role.tags)?,
        })
    }
}

// Collaborators

#[derive(Queryable, Selectable)]
#[diesel(table_name = collaborators)]
pub struct CollaboratorRow {
    collaborator_id: i64,
    organization_id: i64,
    full_name: String,
    email: Option<String>,
    primary_role_id: Option<i64>,
    status: String,
}

impl TryFrom<CollaboratorRow> for Collaborator {
    type Error = PersistenceError;

    fn try_from(row: CollaboratorRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.collaborator_id,
            organization_id: row.organization_id,
            full_name: row.full_name,
            email: row.email,
            primary_role_id: row.primary_role_id,
            status: parse_field("collaborators", &row.status)?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = collaborators, treat_none_as_null = true)]
pub struct CollaboratorRecord<'a> {
    organization_id: i64,
    full_name: &'a str,
    email: Option<&'a str>,
    primary_role_id: Option<i64>,
    status: &'static str,
}

impl<'a> From<&'a Collaborator> for CollaboratorRecord<'a> {
    fn from(collaborator: &'a Collaborator) -> Self {
        Self {
            organization_id: collaborator.organization_id,
            full_name: &collaborator.full_name,
            email: collaborator.email.as_deref(),
            primary_role_id: collaborator.primary_role_id,
            status: collaborator.status.as_str(),
        }
    }
}

// Missions

#[derive(Queryable, Selectable)]
#[diesel(table_name = missions)]
pub struct MissionRow {
    mission_id: i64,
    organization_id: i64,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    title: String,
    start_utc: String,
    end_utc: String,
    status: String,
    budget_target: Option<f64>,
    note: Option<String>,
}

impl TryFrom<MissionRow> for Mission {
    type Error = PersistenceError;

    fn try_from(row: MissionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.mission_id,
            organization_id: row.organization_id,
            site_id: row.site_id,
            role_id: row.role_id,
            team_id: row.team_id,
            title: row.title,
            start_utc: parse_timestamp("missions", &row.start_utc)?,
            end_utc: parse_timestamp("missions", &row.end_utc)?,
            status: parse_field("missions", &row.status)?,
            budget_target: row.budget_target,
            note: row.note,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = missions, treat_none_as_null = true)]
pub struct MissionRecord<'a> {
    organization_id: i64,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    title: &'a str,
    start_utc: String,
    end_utc: String,
    status: &'static str,
    budget_target: Option<f64>,
    note: Option<&'a str>,
}

impl<'a> TryFrom<&'a Mission> for MissionRecord<'a> {
    type Error = PersistenceError;

    fn try_from(mission: &'a Mission) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: mission.organization_id,
            site_id: mission.site_id,
            role_id: mission.role_id,
            team_id: mission.team_id,
            title: &mission.title,
            start_utc: format_timestamp(mission.start_utc)?,
            end_utc: format_timestamp(mission.end_utc)?,
            status: mission.status.as_str(),
            budget_target: mission.budget_target,
            note: mission.note.as_deref(),
        })
    }
}

// Shift templates

#[derive(Queryable, Selectable)]
#[diesel(table_name = shift_templates)]
pub struct ShiftTemplateRow {
    template_id: i64,
    mission_id: i64,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    recurrence_rule: Option<String>,
    start_time_utc: String,
    end_time_utc: String,
    expected_headcount: i64,
    is_active: i32,
}

impl TryFrom<ShiftTemplateRow> for ShiftTemplate {
    type Error = PersistenceError;

    fn try_from(row: ShiftTemplateRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.template_id,
            mission_id: row.mission_id,
            site_id: row.site_id,
            role_id: row.role_id,
            team_id: row.team_id,
            recurrence_rule: row.recurrence_rule,
            start_time_utc: parse_timestamp("shift_templates", &row.start_time_utc)?,
            end_time_utc: parse_timestamp("shift_templates", &row.end_time_utc)?,
            expected_headcount: narrow("shift_templates", row.expected_headcount)?,
            is_active: row.is_active != 0,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = shift_templates, treat_none_as_null = true)]
pub struct ShiftTemplateRecord<'a> {
    mission_id: i64,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    recurrence_rule: Option<&'a str>,
    start_time_utc: String,
    end_time_utc: String,
    expected_headcount: i64,
    is_active: i32,
}

impl<'a> TryFrom<&'a ShiftTemplate> for ShiftTemplateRecord<'a> {
    type Error = PersistenceError;

    fn try_from(template: &'a ShiftTemplate) -> Result<Self, Self::Error> {
        Ok(Self {
            mission_id: template.mission_id,
            site_id: template.site_id,
            role_id: template.role_id,
            team_id: template.team_id,
            recurrence_rule: template.recurrence_rule.as_deref(),
            start_time_utc: format_timestamp(template.start_time_utc)?,
            end_time_utc: format_timestamp(template.end_time_utc)?,
            expected_headcount: i64::from(template.expected_headcount),
            is_active: to_flag(template.is_active),
        })
    }
}

// Shift instances

#[derive(Queryable, Selectable)]
#[diesel(table_name = shift_instances)]
pub struct ShiftInstanceRow {
    shift_instance_id: i64,
    mission_id: i64,
    template_id: Option<i64>,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    start_utc: String,
    end_utc: String,
    status: String,
    source: String,
    capacity: i64,
}

impl TryFrom<ShiftInstanceRow> for ShiftInstance {
    type Error = PersistenceError;

    fn try_from(row: ShiftInstanceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.shift_instance_id,
            mission_id: row.mission_id,
            template_id: row.template_id,
            site_id: row.site_id,
            role_id: row.role_id,
            team_id: row.team_id,
            start_utc: parse_timestamp("shift_instances", &row.start_utc)?,
            end_utc: parse_timestamp("shift_instances", &row.end_utc)?,
            status: parse_field("shift_instances", &row.status)?,
            source: row.source,
            capacity: narrow("shift_instances", row.capacity)?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = shift_instances, treat_none_as_null = true)]
pub struct ShiftInstanceRecord<'a> {
    mission_id: i64,
    template_id: Option<i64>,
    site_id: i64,
    role_id: i64,
    team_id: Option<i64>,
    start_utc: String,
    end_utc: String,
    status: &'static str,
    source: &'a str,
    capacity: i64,
}

impl<'a> TryFrom<&'a ShiftInstance> for ShiftInstanceRecord<'a> {
    type Error = PersistenceError;

    fn try_from(shift: &'a ShiftInstance) -> Result<Self, Self::Error> {
        Ok(Self {
            mission_id: shift.mission_id,
            template_id: shift.template_id,
            site_id: shift.site_id,
            role_id: shift.role_id,
            team_id: shift.team_id,
            start_utc: format_timestamp(shift.start_utc)?,
            end_utc: format_timestamp(shift.end_utc)?,
            status: shift.status.as_str(),
            source: &shift.source,
            capacity: i64::from(shift.capacity),
        })
    }
}

// Assignments

#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
pub struct AssignmentRow {
    assignment_id: i64,
    shift_instance_id: i64,
    collaborator_id: i64,
    role_id: i64,
    status: String,
    source: String,
    is_locked: i32,
    note: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<AssignmentRow> for Assignment {
    type Error = PersistenceError;

    fn try_from(row: AssignmentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.assignment_id,
            shift_instance_id: row.shift_instance_id,
            collaborator_id: row.collaborator_id,
            role_id: row.role_id,
            status: parse_field("assignments", &row.status)?,
            source: row.source,
            is_locked: row.is_locked != 0,
            note: row.note,
            created_at: parse_timestamp("assignments", &row.created_at)?,
            updated_at: parse_timestamp("assignments", &row.updated_at)?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = assignments, treat_none_as_null = true)]
pub struct AssignmentRecord<'a> {
    shift_instance_id: i64,
    collaborator_id: i64,
    role_id: i64,
    status: &'static str,
    source: &'a str,
    is_locked: i32,
    note: Option<&'a str>,
    created_at: String,
    updated_at: String,
}

impl<'a> TryFrom<&'a Assignment> for AssignmentRecord<'a> {
    type Error = PersistenceError;

    fn try_from(assignment: &'a Assignment) -> Result<Self, Self::Error> {
        Ok(Self {
            shift_instance_id: assignment.shift_instance_id,
            collaborator_id: assignment.collaborator_id,
            role_id: assignment.role_id,
            status: assignment.status.as_str(),
            source: &assignment.source,
            is_locked: to_flag(assignment.is_locked),
            note: assignment.note.as_deref(),
            created_at: format_timestamp(assignment.created_at)?,
            updated_at: format_timestamp(assignment.updated_at)?,
        })
    }
}

// Availability

#[derive(Queryable, Selectable)]
#[diesel(table_name = user_availability)]
pub struct AvailabilityRow {
    availability_id: i64,
    collaborator_id: i64,
    start_utc: String,
    end_utc: String,
    is_available: i32,
    reason: Option<String>,
}

impl TryFrom<AvailabilityRow> for UserAvailability {
    type Error = PersistenceError;

    fn try_from(row: AvailabilityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.availability_id,
            collaborator_id: row.collaborator_id,
            start_utc: parse_timestamp("user_availability", &row.start_utc)?,
            end_utc: parse_timestamp("user_availability", &row.end_utc)?,
            is_available: row.is_available != 0,
            reason: row.reason,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_availability, treat_none_as_null = true)]
pub struct AvailabilityRecord<'a> {
    collaborator_id: i64,
    start_utc: String,
    end_utc: String,
    is_available: i32,
    reason: Option<&'a str>,
}

impl<'a> TryFrom<&'a UserAvailability> for AvailabilityRecord<'a> {
    type Error = PersistenceError;

    fn try_from(record: &'a UserAvailability) -> Result<Self, Self::Error> {
        Ok(Self {
            collaborator_id: record.collaborator_id,
            start_utc: format_timestamp(record.start_utc)?,
            end_utc: format_timestamp(record.end_utc)?,
            is_available: to_flag(record.is_available),
            reason: record.reason.as_deref(),
        })
    }
}

// Rule descriptors

#[derive(Queryable, Selectable)]
#[diesel(table_name = hr_rules)]
pub struct HrRuleRow {
    hr_rule_id: i64,
    organization_id: i64,
    code: String,
    severity: String,
    description: Option<String>,
    config_json: String,
}

impl TryFrom<HrRuleRow> for HrRule {
    type Error = PersistenceError;

    fn try_from(row: HrRuleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.hr_rule_id,
            organization_id: row.organization_id,
            code: row.code,
            severity: parse_field("hr_rules", &row.severity)?,
            description: row.description,
            config: parse_json::<Map<String, Value>>("hr_rules", &row.config_json)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = hr_rules)]
pub struct HrRuleRecord<'a> {
    organization_id: i64,
    code: &'a str,
    severity: &'static str,
    description: Option<&'a str>,
    config_json: String,
}

impl<'a> TryFrom<&'a HrRule> for HrRuleRecord<'a> {
    type Error = PersistenceError;

    fn try_from(rule: &'a HrRule) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: rule.organization_id,
            code: &rule.code,
            severity: rule.severity.as_str(),
            description: rule.description.as_deref(),
            config_json: serde_json::to_string(&rule.config)?,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = conflict_rules)]
pub struct ConflictRuleRow {
    conflict_rule_id: i64,
    organization_id: i64,
    code: String,
    severity: String,
    description: Option<String>,
    config_json: String,
}

impl TryFrom<ConflictRuleRow> for ConflictRule {
    type Error = PersistenceError;

    fn try_from(row: ConflictRuleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.conflict_rule_id,
            organization_id: row.organization_id,
            code: row.code,
            severity: parse_field("conflict_rules", &row.severity)?,
            description: row.description,
            config: parse_json::<Map<String, Value>>("conflict_rules", &row.config_json)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = conflict_rules)]
pub struct ConflictRuleRecord<'a> {
    organization_id: i64,
    code: &'a str,
    severity: &'static str,
    description: Option<&'a str>,
    config_json: String,
}

impl<'a> TryFrom<&'a ConflictRule> for ConflictRuleRecord<'a> {
    type Error = PersistenceError;

    fn try_from(rule: &'a ConflictRule) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: rule.organization_id,
            code: &rule.code,
            severity: rule.severity.as_str(),
            description: rule.description.as_deref(),
            config_json: serde_json::to_string(&rule.config)?,
        })
    }
}

// Audit trail

#[derive(Queryable, Selectable)]
#[diesel(table_name = planning_changes)]
pub struct PlanningChangeRow {
    change_id: i64,
    organization_id: i64,
    actor_user_id: Option<i64>,
    entity_type: String,
    entity_id: i64,
    action: String,
    payload_json: String,
    created_at: String,
}

impl TryFrom<PlanningChangeRow> for PlanningChange {
    type Error = PersistenceError;

    fn try_from(row: PlanningChangeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.change_id,
            organization_id: row.organization_id,
            actor_user_id: row.actor_user_id,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            action: row.action,
            payload: parse_json("planning_changes", &row.payload_json)?,
            created_at: parse_timestamp("planning_changes", &row.created_at)?,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = planning_changes)]
pub struct PlanningChangeRecord<'a> {
    organization_id: i64,
    actor_user_id: Option<i64>,
    entity_type: &'a str,
    entity_id: i64,
    action: &'a str,
    payload_json: String,
    created_at: String,
}

impl<'a> TryFrom<&'a PlanningChange> for PlanningChangeRecord<'a> {
    type Error = PersistenceError;

    fn try_from(change: &'a PlanningChange) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: change.organization_id,
            actor_user_id: change.actor_user_id,
            entity_type: &change.entity_type,
            entity_id: change.entity_id,
            action: &change.action,
            payload_json: serde_json::to_string(&change.payload)?,
            created_at: format_timestamp(change.created_at)?,
        })
    }
}

// Publications

#[derive(Queryable, Selectable)]
#[diesel(table_name = publications)]
pub struct PublicationRow {
    publication_id: i64,
    organization_id: i64,
    author_user_id: Option<i64>,
    status: String,
    version: i64,
    message: Option<String>,
    published_at: Option<String>,
}

impl TryFrom<PublicationRow> for Publication {
    type Error = PersistenceError;

    fn try_from(row: PublicationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.publication_id,
            organization_id: row.organization_id,
            author_user_id: row.author_user_id,
            status: parse_field("publications", &row.status)?,
            version: narrow("publications", row.version)?,
            message: row.message,
            published_at: row
                .published_at
                .as_deref()
                .map(|value| parse_timestamp("publications", value))
                .transpose()?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = publications, treat_none_as_null = true)]
pub struct PublicationRecord<'a> {
    organization_id: i64,
    author_user_id: Option<i64>,
    status: &'static str,
    version: i64,
    message: Option<&'a str>,
    published_at: Option<String>,
}

impl<'a> TryFrom<&'a Publication> for PublicationRecord<'a> {
    type Error = PersistenceError;

    fn try_from(publication: &'a Publication) -> Result<Self, Self::Error> {
        Ok(Self {
            organization_id: publication.organization_id,
            author_user_id: publication.author_user_id,
            status: publication.status.as_str(),
            version: i64::from(publication.version),
            message: publication.message.as_deref(),
            published_at: format_optional_timestamp(publication.published_at)?,
        })
    }
}
