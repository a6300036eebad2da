// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time window does not satisfy `start < end`.
    InvalidTimeWindow {
        /// The window start.
        start: OffsetDateTime,
        /// The window end.
        end: OffsetDateTime,
    },
    /// A status string is not one of the values allowed for its kind.
    InvalidStatus {
        /// The status family (e.g. `shift`, `assignment`).
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A rule severity is not one of the values allowed for its kind.
    InvalidSeverity {
        /// The rule family (`hr` or `conflict`).
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
    /// The timezone is not a known IANA zone name.
    InvalidTimezone(String),
    /// The conflict type is neither `hard` nor `soft`.
    InvalidConflictType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeWindow { start, end } => {
                write!(f, "Window start {start} must be earlier than end {end}")
            }
            Self::InvalidStatus { kind, value } => {
                write!(f, "Invalid {kind} status: '{value}'")
            }
            Self::InvalidSeverity { kind, value } => {
                write!(f, "Invalid {kind} rule severity: '{value}'")
            }
            Self::InvalidTimezone(tz) => write!(f, "Unknown timezone: '{tz}'"),
            Self::InvalidConflictType(value) => write!(f, "Invalid conflict type: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
