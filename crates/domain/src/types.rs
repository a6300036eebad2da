// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Planning entities.
//!
//! Identifiers are assigned by the entity store on insert. Values built
//! before insertion carry an `id` of `0` which the store ignores.

use crate::status::{
    AssignmentStatus, CollaboratorStatus, ConflictSeverity, HrSeverity, MissionStatus,
    PublicationStatus, ShiftStatus,
};
use crate::window::TimeWindow;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Timezone assigned to organizations that do not name one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Currency assigned to organizations that do not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Source tag for manually created shifts and assignments.
pub const SOURCE_MANUAL: &str = "manual";

/// Source tag for assignments proposed by the auto-assign job.
pub const SOURCE_AUTO_ASSIGN: &str = "auto-assign-v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub timezone: String,
    pub currency: String,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub organization_id: i64,
    pub name: String,
    pub timezone: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub organization_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub organization_id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub primary_role_id: Option<i64>,
    pub status: CollaboratorStatus,
}

/// A staffing need at a site for a role over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: i64,
    /// Always the organization of `site_id`.
    pub organization_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    pub status: MissionStatus,
    pub budget_target: Option<f64>,
    pub note: Option<String>,
}

/// A reusable pattern for generating shift instances of a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: i64,
    pub mission_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub team_id: Option<i64>,
    /// Opaque recurrence text. Never expanded server side.
    pub recurrence_rule: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time_utc: OffsetDateTime,
    pub expected_headcount: i32,
    pub is_active: bool,
}

/// A concrete, schedulable occurrence of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInstance {
    pub id: i64,
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

impl ShiftInstance {
    /// The shift window, or `None` when the stored bounds are out of order.
    #[must_use]
    pub fn window(&self) -> Option<TimeWindow> {
        TimeWindow::new(self.start_utc, self.end_utc).ok()
    }
}

/// The binding of one collaborator to one shift instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub shift_instance_id: i64,
    pub collaborator_id: i64,
    pub role_id: i64,
    pub status: AssignmentStatus,
    pub source: String,
    pub is_locked: bool,
    pub note: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// A declared availability or leave window for a collaborator.
///
/// `is_available = false` encodes leave or a blackout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAvailability {
    pub id: i64,
    pub collaborator_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub start_utc: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_utc: OffsetDateTime,
    pub is_available: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrRule {
    pub id: i64,
    pub organization_id: i64,
    pub code: String,
    pub severity: HrSeverity,
    pub description: Option<String>,
    pub config: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRule {
    pub id: i64,
    pub organization_id: i64,
    pub code: String,
    pub severity: ConflictSeverity,
    pub description: Option<String>,
    pub config: Map<String, Value>,
}

/// A versioned marker declaring planning data final for an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub organization_id: i64,
    pub author_user_id: Option<i64>,
    pub status: PublicationStatus,
    pub version: i32,
    pub message: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
}
