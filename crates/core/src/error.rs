// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shiftplan_domain::{DomainError, TimeWindow};
use time::OffsetDateTime;

/// Failures raised by an entity store backend.
///
/// These never describe business rule violations; callers surface them as
/// internal errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A transaction could not be opened, committed or rolled back.
    #[error("Transaction error: {0}")]
    Transaction(String),
    /// The backend rejected an operation.
    #[error("Backend error: {0}")]
    Backend(String),
    /// A stored record could not be mapped back into a planning entity.
    #[error("Corrupt record in {table}: {reason}")]
    Corrupt {
        table: &'static str,
        reason: String,
    },
}

/// Errors that can occur while executing planning operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },
    /// The request references entities that do not fit together.
    #[error("{0}")]
    Validation(String),
    /// The operation is blocked by existing references.
    #[error("{0}")]
    Conflict(String),
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
    /// An entity could not be captured for the audit trail.
    #[error("Snapshot failure: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Rebuilds the window of an entity after a partial update.
///
/// An inverted merged window is a request problem rather than a domain
/// violation, so it surfaces as `Validation`.
pub(crate) fn merged_window(
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<TimeWindow, CoreError> {
    TimeWindow::new(start, end).map_err(|e| CoreError::Validation(e.to_string()))
}
