// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Half-open overlap test: `[a_start, a_end)` and `[b_start, b_end)` intersect.
#[must_use]
pub fn overlaps(
    a_start: OffsetDateTime,
    a_end: OffsetDateTime,
    b_start: OffsetDateTime,
    b_end: OffsetDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// A validated `[start, end)` interval in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "time::serde::rfc3339")]
    start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    end: OffsetDateTime,
}

impl TimeWindow {
    /// Creates a window, normalizing both instants to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTimeWindow`] unless `start < end`.
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Result<Self, DomainError> {
        let start = start.to_offset(time::UtcOffset::UTC);
        let end = end.to_offset(time::UtcOffset::UTC);
        if start >= end {
            return Err(DomainError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> OffsetDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> OffsetDateTime {
        self.end
    }

    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    /// Whether this window intersects a raw `[start, end)` pair.
    #[must_use]
    pub fn overlaps_raw(&self, start: OffsetDateTime, end: OffsetDateTime) -> bool {
        overlaps(self.start, self.end, start, end)
    }

    #[must_use]
    pub fn duration(&self) -> time::Duration {
        self.end - self.start
    }
}
