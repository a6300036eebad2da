// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-shape validation.
//!
//! These checks run before any store access. They collect every problem
//! in a request instead of stopping at the first one, so clients get a
//! complete list of field errors back.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// One invalid field in a request body or query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value, e.g. `["body", "start_utc"]`.
    pub loc: Vec<String>,
    pub msg: String,
}

impl FieldError {
    #[must_use]
    pub fn body(field: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
        }
    }

    #[must_use]
    pub fn query(field: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["query".to_string(), field.to_string()],
            msg: msg.into(),
        }
    }
}

/// Accumulates [`FieldError`]s for one request body.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, msg: impl Into<String>) {
        self.errors.push(FieldError::body(field, msg));
    }

    pub fn max_len(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value
            && value.chars().count() > max
        {
            self.push(field, format!("String should have at most {max} characters"));
        }
    }

    pub fn len_between(&mut self, field: &str, value: Option<&str>, min: usize, max: usize) {
        let Some(value) = value else { return };
        let len = value.chars().count();
        if len < min {
            self.push(field, format!("String should have at least {min} characters"));
        } else if len > max {
            self.push(field, format!("String should have at most {max} characters"));
        }
    }

    pub fn exact_len(&mut self, field: &str, value: Option<&str>, len: usize) {
        if let Some(value) = value
            && value.chars().count() != len
        {
            self.push(field, format!("String should have exactly {len} characters"));
        }
    }

    pub fn at_least(&mut self, field: &str, value: Option<i32>, min: i32) {
        if let Some(value) = value
            && value < min
        {
            self.push(field, format!("Input should be greater than or equal to {min}"));
        }
    }

    pub fn non_negative(&mut self, field: &str, value: Option<f64>) {
        if let Some(value) = value
            && (value < 0.0 || value.is_nan())
        {
            self.push(field, "Input should be greater than or equal to 0");
        }
    }

    /// Requires `start < end` when both bounds are present.
    pub fn window(
        &mut self,
        start_field: &str,
        start: Option<OffsetDateTime>,
        end_field: &str,
        end: Option<OffsetDateTime>,
    ) {
        if let (Some(start), Some(end)) = (start, end)
            && start >= end
        {
            self.push(
                start_field,
                format!("{start_field} must be earlier than {end_field}"),
            );
        }
    }

    /// Requires `value` to parse as `T`, reporting the accepted vocabulary otherwise.
    pub fn one_of<T: FromStr>(&mut self, field: &str, value: Option<&str>, allowed: &[&str]) {
        if let Some(value) = value
            && value.parse::<T>().is_err()
        {
            self.push(
                field,
                format!("String should match pattern '^({})$'", allowed.join("|")),
            );
        }
    }

    pub fn timezone(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value
            && let Err(e) = validate_timezone(value)
        {
            self.push(field, e.to_string());
        }
    }

    pub fn not_blank(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value
            && value.trim().is_empty()
        {
            self.push(field, "Field cannot be blank");
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finishes collection.
    ///
    /// # Errors
    ///
    /// Returns every collected error when at least one was recorded.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Validates an IANA timezone name.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTimezone`] for unknown names.
pub fn validate_timezone(name: &str) -> Result<(), DomainError> {
    name.parse::<chrono_tz::Tz>()
        .map(|_| ())
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}
