// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod context_tests;
mod store_tests;

use crate::SqliteStore;
use shiftplan::{FixedClock, PlanningContext};
use shiftplan_domain::{Organization, Role};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

/// 2026-03-02 at `hour:minute` UTC.
pub fn at(hour: i64, minute: i64) -> OffsetDateTime {
    datetime!(2026-03-02 00:00 UTC) + Duration::hours(hour) + Duration::minutes(minute)
}

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store")
}

pub fn create_test_context() -> PlanningContext {
    PlanningContext::new(create_test_store()).with_clock(FixedClock(NOW))
}

pub fn organization(name: &str) -> Organization {
    Organization {
        id: 0,
        name: name.to_string(),
        timezone: "Europe/Paris".to_string(),
        currency: "EUR".to_string(),
        contact_email: Some("ops@example.com".to_string()),
    }
}

pub fn role(organization_id: i64, name: &str) -> Role {
    Role {
        id: 0,
        organization_id,
        name: name.to_string(),
        description: None,
        tags: vec!["night".to_string(), "first-aid".to_string()],
    }
}
