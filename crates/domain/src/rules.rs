// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule descriptors seeded for every new organization.
//!
//! Descriptors document policy for clients. Enforcement lives in
//! [`crate::conflict`] and does not read them.

use crate::conflict::{RULE_AVAILABILITY_PARTIAL, RULE_DOUBLE_BOOKING, RULE_LEAVE};
use crate::status::{ConflictSeverity, HrSeverity};
use crate::types::{ConflictRule, HrRule};
use serde_json::{Map, Value, json};

pub const HR_RULE_REST_MINIMUM: &str = "rest_minimum";

fn config(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[must_use]
pub fn default_hr_rules(organization_id: i64) -> Vec<HrRule> {
    vec![HrRule {
        id: 0,
        organization_id,
        code: HR_RULE_REST_MINIMUM.to_string(),
        severity: HrSeverity::Hard,
        description: Some("Minimum rest between two shifts of one collaborator".to_string()),
        config: config(json!({ "min_rest_minutes": 60 })),
    }]
}

#[must_use]
pub fn default_conflict_rules(organization_id: i64) -> Vec<ConflictRule> {
    vec![
        ConflictRule {
            id: 0,
            organization_id,
            code: RULE_DOUBLE_BOOKING.to_string(),
            severity: ConflictSeverity::Error,
            description: Some("A collaborator cannot work overlapping shifts".to_string()),
            config: Map::new(),
        },
        ConflictRule {
            id: 0,
            organization_id,
            code: RULE_LEAVE.to_string(),
            severity: ConflictSeverity::Error,
            description: Some("A collaborator on leave cannot be assigned".to_string()),
            config: Map::new(),
        },
        ConflictRule {
            id: 0,
            organization_id,
            code: RULE_AVAILABILITY_PARTIAL.to_string(),
            severity: ConflictSeverity::Warning,
            description: Some("Shift overlaps a partial availability declaration".to_string()),
            config: Map::new(),
        },
    ]
}
