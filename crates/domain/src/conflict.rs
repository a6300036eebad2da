// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conflict evaluation for shifts and assignments.
//!
//! Every function here is pure: callers load the relevant slice of planning
//! state and pass it in. Evaluation never fails; rule violations are
//! returned as [`ConflictEntry`] values.
//!
//! Assignment findings are emitted in a fixed category order: double
//! booking, then rest gap, then availability. Within a category the order
//! follows the order of the input slices.

use crate::error::DomainError;
use crate::status::ShiftStatus;
use crate::types::{ShiftInstance, UserAvailability};
use crate::window::overlaps;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Shift window is empty or reversed.
pub const RULE_TIME_ORDER: &str = "time_order";
/// Shift status is outside the known vocabulary.
pub const RULE_INVALID_STATUS: &str = "invalid_status";
/// Collaborator holds another overlapping, non-cancelled shift.
pub const RULE_DOUBLE_BOOKING: &str = "double_booking";
/// Collaborator finished another shift less than the minimum rest before this one.
pub const RULE_REST_GAP: &str = "rest_gap";
/// Collaborator is on leave during the shift.
pub const RULE_LEAVE: &str = "leave";
/// Collaborator declared only partial availability over the shift.
pub const RULE_AVAILABILITY_PARTIAL: &str = "availability_partial";

/// Minimum rest between two shifts of one collaborator, in seconds.
pub const MIN_REST_SECONDS: i64 = 3600;

/// Whether a finding blocks the plan or is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    Hard,
    Soft,
}

impl ConflictType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        }
    }
}

impl FromStr for ConflictType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            _ => Err(DomainError::InvalidConflictType(s.to_string())),
        }
    }
}

/// A single rule violation found during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    pub rule: String,
    #[serde(default)]
    pub details: BTreeMap<String, Value>,
}

impl ConflictEntry {
    fn new(conflict_type: ConflictType, rule: &str) -> Self {
        Self {
            conflict_type,
            rule: rule.to_string(),
            details: BTreeMap::new(),
        }
    }

    fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub const fn is_hard(&self) -> bool {
        matches!(self.conflict_type, ConflictType::Hard)
    }
}

/// A shift under evaluation, persisted or not.
///
/// The status is kept as raw text so unsaved candidates with an unknown
/// status can still be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCandidate {
    pub id: Option<i64>,
    pub start_utc: OffsetDateTime,
    pub end_utc: OffsetDateTime,
    pub status: String,
}

impl From<&ShiftInstance> for ShiftCandidate {
    fn from(shift: &ShiftInstance) -> Self {
        Self {
            id: Some(shift.id),
            start_utc: shift.start_utc,
            end_utc: shift.end_utc,
            status: shift.status.as_str().to_string(),
        }
    }
}

/// An assignment under evaluation, persisted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentCandidate {
    /// `None` for candidates that were never stored.
    pub id: Option<i64>,
    pub shift_instance_id: i64,
    pub collaborator_id: i64,
    pub role_id: i64,
}

/// Another assignment together with the shift it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerAssignment {
    pub assignment_id: i64,
    pub collaborator_id: i64,
    pub shift: ShiftInstance,
}

fn rfc3339(value: OffsetDateTime) -> Value {
    value.format(&Rfc3339).map_or(Value::Null, Value::String)
}

/// Evaluates the shift-level checks.
#[must_use]
pub fn evaluate_shift(shift: &ShiftCandidate) -> Vec<ConflictEntry> {
    let mut conflicts = Vec::new();

    if shift.start_utc >= shift.end_utc {
        conflicts.push(
            ConflictEntry::new(ConflictType::Hard, RULE_TIME_ORDER)
                .with_detail("start_utc", rfc3339(shift.start_utc))
                .with_detail("end_utc", rfc3339(shift.end_utc)),
        );
    }

    if ShiftStatus::from_str(&shift.status).is_err() {
        conflicts.push(
            ConflictEntry::new(ConflictType::Hard, RULE_INVALID_STATUS)
                .with_detail("status", shift.status.clone()),
        );
    }

    conflicts
}

/// Evaluates an assignment against the collaborator's other assignments and
/// availability records.
///
/// `shift` is the shift the candidate points at; when it could not be
/// resolved the result is empty. `peers` and `availability` may contain
/// records of other collaborators and the candidate itself; both are
/// filtered out here.
#[must_use]
pub fn evaluate_assignment(
    candidate: &AssignmentCandidate,
    shift: Option<&ShiftInstance>,
    peers: &[PeerAssignment],
    availability: &[UserAvailability],
) -> Vec<ConflictEntry> {
    let Some(shift) = shift else {
        return Vec::new();
    };

    let others: Vec<&PeerAssignment> = peers
        .iter()
        .filter(|peer| peer.collaborator_id == candidate.collaborator_id)
        .filter(|peer| candidate.id != Some(peer.assignment_id))
        .collect();

    let mut conflicts = Vec::new();

    if !shift.status.is_cancelled() {
        for peer in &others {
            if peer.shift.status.is_cancelled() {
                continue;
            }
            if overlaps(
                shift.start_utc,
                shift.end_utc,
                peer.shift.start_utc,
                peer.shift.end_utc,
            ) {
                conflicts.push(
                    ConflictEntry::new(ConflictType::Hard, RULE_DOUBLE_BOOKING)
                        .with_detail("shift_instance_id", peer.shift.id)
                        .with_detail("assignment_id", peer.assignment_id),
                );
            }
        }
    }

    // Forward only: an earlier shift ending shortly before this one starts.
    for peer in &others {
        let gap = (shift.start_utc - peer.shift.end_utc).whole_seconds();
        if gap > 0 && gap < MIN_REST_SECONDS {
            conflicts.push(
                ConflictEntry::new(ConflictType::Hard, RULE_REST_GAP)
                    .with_detail("previous_shift_id", peer.shift.id)
                    .with_detail("gap_seconds", gap)
                    .with_detail("min_rest_seconds", MIN_REST_SECONDS),
            );
        }
    }

    for record in availability {
        if record.collaborator_id != candidate.collaborator_id {
            continue;
        }
        if !overlaps(
            shift.start_utc,
            shift.end_utc,
            record.start_utc,
            record.end_utc,
        ) {
            continue;
        }
        let entry = if record.is_available {
            ConflictEntry::new(ConflictType::Soft, RULE_AVAILABILITY_PARTIAL)
        } else {
            ConflictEntry::new(ConflictType::Hard, RULE_LEAVE)
        };
        conflicts.push(
            entry
                .with_detail("availability_id", record.id)
                .with_detail("reason", record.reason.clone()),
        );
    }

    conflicts
}

/// Returns true when any finding is blocking.
#[must_use]
pub fn has_hard_conflict(conflicts: &[ConflictEntry]) -> bool {
    conflicts.iter().any(ConflictEntry::is_hard)
}
