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

mod conflict;
mod error;
mod rules;
mod status;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use conflict::{
    AssignmentCandidate, ConflictEntry, ConflictType, MIN_REST_SECONDS, PeerAssignment,
    RULE_AVAILABILITY_PARTIAL, RULE_DOUBLE_BOOKING, RULE_INVALID_STATUS, RULE_LEAVE,
    RULE_REST_GAP, RULE_TIME_ORDER, ShiftCandidate, evaluate_assignment, evaluate_shift,
    has_hard_conflict,
};
pub use error::DomainError;
pub use rules::{HR_RULE_REST_MINIMUM, default_conflict_rules, default_hr_rules};
pub use status::{
    AssignmentStatus, CollaboratorStatus, ConflictSeverity, HrSeverity, MissionStatus,
    PublicationStatus, ShiftStatus,
};
pub use types::{
    Assignment, Collaborator, ConflictRule, DEFAULT_CURRENCY, DEFAULT_TIMEZONE, HrRule, Mission,
    Organization, Publication, Role, SOURCE_AUTO_ASSIGN, SOURCE_MANUAL, ShiftInstance,
    ShiftTemplate, Site, UserAvailability,
};
pub use validation::{FieldError, FieldErrors, validate_timezone};
pub use window::{TimeWindow, overlaps};
