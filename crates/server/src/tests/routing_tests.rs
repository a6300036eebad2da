// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use super::helpers::{body_json, call, create_test_app, send};
use crate::trace::REQUEST_ID_HEADER;

#[tokio::test]
async fn test_health_is_served_at_both_paths() {
    let app = create_test_app();

    for uri in ["/health", "/api/v1/health"] {
        let body = call(&app, Method::GET, uri, None, StatusCode::OK).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "memory");
    }
}

#[tokio::test]
async fn test_unknown_route_returns_error_body() {
    let app = create_test_app();

    let response = send(&app, Method::GET, "/api/v1/nowhere", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("/api/v1/nowhere"));
    assert!(body["trace_id"].is_string());
}

#[tokio::test]
async fn test_missing_entity_returns_not_found_message() {
    let app = create_test_app();

    let response = send(&app, Method::GET, "/api/v1/planning/shifts/77", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Shift instance 77 not found");
}

#[tokio::test]
async fn test_request_id_is_echoed_and_reported() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/sites/5")
                .header(REQUEST_ID_HEADER, "req-1234")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "req-1234"
    );
    let body = body_json(response).await;
    assert_eq!(body["trace_id"], "req-1234");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let app = create_test_app();

    let response = send(&app, Method::GET, "/health", None).await;

    let header = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&header).is_ok());
}

#[tokio::test]
async fn test_malformed_json_is_request_validation() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/organizations")
                .header("content-type", "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "request_validation_error");
    assert_eq!(body["detail"][0]["loc"][0], "body");
}

#[tokio::test]
async fn test_non_numeric_path_id_is_request_validation() {
    let app = create_test_app();

    let response = send(&app, Method::GET, "/api/v1/roles/abc", None).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["detail"][0]["loc"][0], "path");
}

#[tokio::test]
async fn test_field_errors_list_every_invalid_field() {
    let app = create_test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/v1/organizations",
        Some(serde_json::json!({"name": "", "currency": "EURO"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let fields: Vec<&Value> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| &error["loc"][1])
        .collect();
    assert!(fields.contains(&&Value::from("name")));
    assert!(fields.contains(&&Value::from("currency")));
}
