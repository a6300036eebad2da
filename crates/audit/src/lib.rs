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
    clippy::all
)]

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// The user behind a planning change.
///
/// Requests are unauthenticated, so the user id is usually absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: Option<i64>,
}

impl Actor {
    /// An actor with no associated user.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    #[must_use]
    pub const fn user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

/// Kinds of entities whose mutations are audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    ShiftTemplate,
    ShiftInstance,
    Assignment,
    Publication,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShiftTemplate => "shift_template",
            Self::ShiftInstance => "shift_instance",
            Self::Assignment => "assignment",
            Self::Publication => "publication",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The mutation recorded by a planning change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanningAction {
    CreateShiftTemplate,
    UpdateShiftTemplate,
    DeleteShiftTemplate,
    CreateShift,
    UpdateShift,
    DeleteShift,
    CreateAssignment,
    UpdateAssignment,
    DeleteAssignment,
    PublishPlanning,
}

impl PlanningAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateShiftTemplate => "create_shift_template",
            Self::UpdateShiftTemplate => "update_shift_template",
            Self::DeleteShiftTemplate => "delete_shift_template",
            Self::CreateShift => "create_shift",
            Self::UpdateShift => "update_shift",
            Self::DeleteShift => "delete_shift",
            Self::CreateAssignment => "create_assignment",
            Self::UpdateAssignment => "update_assignment",
            Self::DeleteAssignment => "delete_assignment",
            Self::PublishPlanning => "publish_planning",
        }
    }

    /// The entity kind this action applies to.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::CreateShiftTemplate | Self::UpdateShiftTemplate | Self::DeleteShiftTemplate => {
                EntityType::ShiftTemplate
            }
            Self::CreateShift | Self::UpdateShift | Self::DeleteShift => EntityType::ShiftInstance,
            Self::CreateAssignment | Self::UpdateAssignment | Self::DeleteAssignment => {
                EntityType::Assignment
            }
            Self::PublishPlanning => EntityType::Publication,
        }
    }
}

impl std::fmt::Display for PlanningAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A serialized view of an entity at one point in time.
///
/// `Null` means the entity did not exist on that side of the change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot(pub Value);

impl StateSnapshot {
    #[must_use]
    pub const fn absent() -> Self {
        Self(Value::Null)
    }

    /// Captures the full field set of `entity`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `entity` cannot be represented as JSON.
    pub fn capture<T: Serialize>(entity: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(entity).map(Self)
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_null()
    }
}

/// An append-only record of one planning mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningChange {
    /// Assigned by the store. `0` until appended.
    pub id: i64,
    pub organization_id: i64,
    pub actor_user_id: Option<i64>,
    pub entity_type: String,
    pub entity_id: i64,
    pub action: String,
    /// `{"before": ..., "after": ...}`
    pub payload: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl PlanningChange {
    #[must_use]
    pub fn new(
        organization_id: i64,
        actor: Actor,
        action: PlanningAction,
        entity_id: i64,
        before: StateSnapshot,
        after: StateSnapshot,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: 0,
            organization_id,
            actor_user_id: actor.user_id,
            entity_type: action.entity_type().as_str().to_string(),
            entity_id,
            action: action.as_str().to_string(),
            payload: json!({ "before": before.0, "after": after.0 }),
            created_at,
        }
    }

    #[must_use]
    pub fn before(&self) -> &Value {
        self.payload.get("before").unwrap_or(&Value::Null)
    }

    #[must_use]
    pub fn after(&self) -> &Value {
        self.payload.get("after").unwrap_or(&Value::Null)
    }
}

/// Criteria for listing planning changes. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    /// Inclusive lower bound on `created_at`.
    pub from_ts: Option<OffsetDateTime>,
    /// Inclusive upper bound on `created_at`.
    pub to_ts: Option<OffsetDateTime>,
    pub entity_type: Option<String>,
    pub entity_id: Option<i64>,
}

impl AuditFilter {
    #[must_use]
    pub fn matches(&self, change: &PlanningChange) -> bool {
        self.from_ts.is_none_or(|from| change.created_at >= from)
            && self.to_ts.is_none_or(|to| change.created_at <= to)
            && self
                .entity_type
                .as_deref()
                .is_none_or(|entity| change.entity_type == entity)
            && self.entity_id.is_none_or(|id| change.entity_id == id)
    }
}
