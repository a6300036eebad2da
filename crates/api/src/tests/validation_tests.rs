// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{at, request};
use crate::{
    ApiError, AuditQuery, CreateCollaboratorRequest, CreateMissionRequest,
    CreateOrganizationRequest, CreateShiftRequest, CreateShiftTemplateRequest, ShiftListQuery,
    UpdateMissionRequest,
};
use serde_json::json;
use shiftplan_domain::ShiftStatus;

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_organization_request_collects_every_error() {
    let req: CreateOrganizationRequest = request(json!({
        "name": "",
        "timezone": "Mars/Olympus",
        "currency": "EURO",
    }));

    let errors = req.validate().unwrap_err();

    let fields: Vec<&str> = errors.iter().map(|e| e.loc[1].as_str()).collect();
    assert_eq!(fields, vec!["name", "timezone", "currency"]);
    assert!(errors.iter().all(|e| e.loc[0] == "body"));
}

#[test]
fn test_organization_request_accepts_defaults() {
    let req: CreateOrganizationRequest = request(json!({"name": "Acme"}));

    assert!(req.validate().is_ok());
}

#[test]
fn test_mission_with_reversed_window_is_rejected() {
    let req: CreateMissionRequest = request(json!({
        "site_id": 1,
        "role_id": 1,
        "title": "Fair",
        "start_utc": "2026-03-04T00:00:00Z",
        "end_utc": "2026-03-02T00:00:00Z",
    }));

    let errors = req.validate().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].loc, vec!["body", "start_utc"]);
    assert_eq!(errors[0].msg, "start_utc must be earlier than end_utc");
}

#[test]
fn test_mission_rejects_negative_budget_and_bad_status() {
    let req: CreateMissionRequest = request(json!({
        "site_id": 1,
        "role_id": 1,
        "title": "Fair",
        "start_utc": "2026-03-02T00:00:00Z",
        "end_utc": "2026-03-04T00:00:00Z",
        "status": "archived",
        "budget_target": -5.0,
    }));

    let errors = req.validate().unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].msg,
        "String should match pattern '^(draft|published|cancelled)$'"
    );
}

#[test]
fn test_mission_patch_checks_window_only_when_both_bounds_given() {
    let one_bound = UpdateMissionRequest {
        start_utc: Some(at(10)),
        ..UpdateMissionRequest::default()
    };
    let reversed = UpdateMissionRequest {
        start_utc: Some(at(10)),
        end_utc: Some(at(9)),
        ..UpdateMissionRequest::default()
    };

    assert!(one_bound.validate().is_ok());
    assert!(reversed.validate().is_err());
}

#[test]
fn test_collaborator_status_must_be_known() {
    let req: CreateCollaboratorRequest = request(json!({
        "organization_id": 1,
        "full_name": "Alex",
        "status": "retired",
    }));

    let errors = req.validate().unwrap_err();

    assert_eq!(errors[0].loc, vec!["body", "status"]);
}

#[test]
fn test_shift_request_defaults() {
    let req: CreateShiftRequest = request(json!({
        "mission_id": 1,
        "site_id": 1,
        "role_id": 1,
        "start_utc": "2026-03-02T08:00:00Z",
        "end_utc": "2026-03-02T16:00:00Z",
    }));

    assert_eq!(req.capacity, 1);
    assert_eq!(req.source, "manual");
    assert!(req.validate().is_ok());
}

#[test]
fn test_shift_request_requires_references_without_template() {
    let req: CreateShiftRequest = request(json!({
        "start_utc": "2026-03-02T08:00:00Z",
        "end_utc": "2026-03-02T16:00:00Z",
        "capacity": 0,
    }));

    let errors = req.validate().unwrap_err();

    let fields: Vec<&str> = errors.iter().map(|e| e.loc[1].as_str()).collect();
    assert_eq!(fields, vec!["mission_id", "site_id", "role_id", "capacity"]);
}

#[test]
fn test_shift_preview_fields_ignore_window() {
    let req: CreateShiftRequest = request(json!({
        "mission_id": 1,
        "site_id": 1,
        "role_id": 1,
        "start_utc": "2026-03-02T08:00:00Z",
        "end_utc": "2026-03-02T08:00:00Z",
    }));

    assert!(req.validate().is_err());
    assert!(req.validate_fields().is_ok());
}

#[test]
fn test_template_headcount_must_be_positive() {
    let req: CreateShiftTemplateRequest = request(json!({
        "mission_id": 1,
        "site_id": 1,
        "role_id": 1,
        "start_time_utc": "2026-03-02T08:00:00Z",
        "end_time_utc": "2026-03-02T16:00:00Z",
        "expected_headcount": 0,
    }));

    let errors = req.validate().unwrap_err();

    assert_eq!(errors[0].loc, vec!["body", "expected_headcount"]);
}

#[test]
fn test_shift_list_query_accepts_repeated_and_comma_lists() {
    let query = ShiftListQuery::from_pairs(&pairs(&[
        ("place_ids", "1,2"),
        ("place_ids", "3"),
        ("status", "draft"),
        ("status", "cancelled"),
        ("start", "2026-03-02T00:00:00Z"),
    ]))
    .unwrap();

    assert_eq!(query.filter.site_ids, vec![1, 2, 3]);
    assert_eq!(
        query.filter.statuses,
        vec![ShiftStatus::Draft, ShiftStatus::Cancelled]
    );
    assert_eq!(query.filter.start, Some(at(0)));
}

#[test]
fn test_shift_list_query_reports_bad_values() {
    let errors = ShiftListQuery::from_pairs(&pairs(&[
        ("person_ids", "x"),
        ("end", "tomorrow"),
    ]))
    .unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].loc, vec!["query", "person_ids"]);
    assert_eq!(errors[1].loc, vec!["query", "end"]);
}

#[test]
fn test_audit_query_bounds() {
    let ok = AuditQuery {
        from_ts: Some("2026-03-02T00:00:00Z".to_string()),
        ..AuditQuery::default()
    };
    let bad = AuditQuery {
        to_ts: Some("yesterday".to_string()),
        ..AuditQuery::default()
    };

    assert_eq!(ok.bounds().unwrap(), (Some(at(0)), None));
    assert!(bad.bounds().is_err());
}

#[test]
fn test_field_errors_convert_to_request_validation() {
    let req: CreateOrganizationRequest = request(json!({"name": ""}));

    let err = ApiError::from(req.validate().unwrap_err());

    assert!(matches!(err, ApiError::RequestValidation { ref errors } if errors.len() == 1));
}
