// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
};
use serde_json::{Value, json};
use shiftplan::{InMemoryStore, PlanningContext};
use tower::ServiceExt;

use crate::routes::{AppState, build_router};

pub fn create_test_app() -> Router {
    build_router(AppState::new(PlanningContext::new(InMemoryStore::new())))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sends a request that must succeed with `expected` and returns its body.
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    expected: StatusCode,
) -> Value {
    let response = send(app, method, uri, body).await;
    assert_eq!(response.status(), expected, "unexpected status for {uri}");
    body_json(response).await
}

pub struct Catalog {
    pub organization_id: i64,
    pub site_id: i64,
    pub role_id: i64,
    pub mission_id: i64,
}

pub async fn create_catalog(app: &Router) -> Catalog {
    let org = call(
        app,
        Method::POST,
        "/api/v1/organizations",
        Some(json!({"name": "Acme Events", "timezone": "Europe/Paris"})),
        StatusCode::CREATED,
    )
    .await;
    let organization_id = org["id"].as_i64().unwrap();

    let site = call(
        app,
        Method::POST,
        "/api/v1/sites",
        Some(json!({"organization_id": organization_id, "name": "North Hall"})),
        StatusCode::CREATED,
    )
    .await;
    let site_id = site["id"].as_i64().unwrap();

    let role = call(
        app,
        Method::POST,
        "/api/v1/roles",
        Some(json!({"organization_id": organization_id, "name": "Steward"})),
        StatusCode::CREATED,
    )
    .await;
    let role_id = role["id"].as_i64().unwrap();

    let mission = call(
        app,
        Method::POST,
        "/api/v1/missions",
        Some(json!({
            "site_id": site_id,
            "role_id": role_id,
            "title": "Spring fair",
            "start_utc": "2026-03-02T00:00:00Z",
            "end_utc": "2026-03-04T00:00:00Z",
        })),
        StatusCode::CREATED,
    )
    .await;

    Catalog {
        organization_id,
        site_id,
        role_id,
        mission_id: mission["id"].as_i64().unwrap(),
    }
}

pub async fn create_collaborator(app: &Router, catalog: &Catalog, name: &str) -> i64 {
    let collaborator = call(
        app,
        Method::POST,
        "/api/v1/collaborators",
        Some(json!({"organization_id": catalog.organization_id, "full_name": name})),
        StatusCode::CREATED,
    )
    .await;
    collaborator["id"].as_i64().unwrap()
}

pub async fn create_shift(app: &Router, catalog: &Catalog, start: &str, end: &str) -> Value {
    call(
        app,
        Method::POST,
        "/api/v1/planning/shifts",
        Some(json!({
            "mission_id": catalog.mission_id,
            "site_id": catalog.site_id,
            "role_id": catalog.role_id,
            "start_utc": start,
            "end_utc": end,
        })),
        StatusCode::CREATED,
    )
    .await
}

pub async fn assign(app: &Router, catalog: &Catalog, shift_id: i64, collaborator_id: i64) -> Value {
    call(
        app,
        Method::POST,
        "/api/v1/planning/assignments",
        Some(json!({
            "shift_instance_id": shift_id,
            "collaborator_id": collaborator_id,
            "role_id": catalog.role_id,
        })),
        StatusCode::CREATED,
    )
    .await
}
