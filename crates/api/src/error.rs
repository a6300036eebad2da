// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shiftplan::CoreError;
use shiftplan_domain::{DomainError, FieldError};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request body or query does not have the expected shape.
    RequestValidation {
        /// Every offending field.
        errors: Vec<FieldError>,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The operation is blocked by existing references.
    Conflict {
        message: String,
    },
    /// The request references entities that do not fit together.
    Validation {
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error. Never shown to clients.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestValidation { errors } => {
                write!(f, "Request validation failed for {} field(s)", errors.len())
            }
            Self::ResourceNotFound { message, .. }
            | Self::Conflict { message }
            | Self::Validation { message } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::RequestValidation { errors }
    }
}

/// Translates a domain error into an API error.
///
/// Domain violations that reach the API are shape problems of the merged
/// request, so they are reported against the field they concern.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field = match &err {
        DomainError::InvalidTimeWindow { .. } => "start_utc",
        DomainError::InvalidStatus { .. } => "status",
        DomainError::InvalidSeverity { .. } => "severity",
        DomainError::InvalidTimezone(_) => "timezone",
        DomainError::InvalidConflictType(_) => "type",
    };
    ApiError::RequestValidation {
        errors: vec![FieldError::body(field, err.to_string())],
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotFound { entity, .. } => ApiError::ResourceNotFound {
            resource_type: entity.to_string(),
            message: err.to_string(),
        },
        CoreError::Validation(message) => ApiError::Validation { message },
        CoreError::Conflict(message) => ApiError::Conflict { message },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Store(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
        CoreError::Snapshot(serde_err) => ApiError::Internal {
            message: format!("Failed to capture audit snapshot: {serde_err}"),
        },
    }
}
