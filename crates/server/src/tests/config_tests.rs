// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{Method, StatusCode};
use clap::Parser;
use serde_json::json;

use super::helpers::call;
use crate::config::{Args, Backend, build_context};
use crate::routes::{AppState, build_router};

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["shiftplan-server"]).unwrap();

    assert_eq!(args.port, 3000);
    assert_eq!(args.backend, Backend::Memory);
    assert!(args.database.is_none());
    assert_eq!(args.default_organization_id, 1);
}

#[test]
fn test_args_select_sqlite_backend() {
    let args = Args::try_parse_from([
        "shiftplan-server",
        "--backend",
        "sqlite",
        "--port",
        "8080",
        "--default-organization-id",
        "7",
    ])
    .unwrap();

    assert_eq!(args.backend, Backend::Sqlite);
    assert_eq!(args.port, 8080);
    assert_eq!(args.default_organization_id, 7);
}

#[test]
fn test_args_reject_unknown_backend() {
    assert!(Args::try_parse_from(["shiftplan-server", "--backend", "mysql"]).is_err());
}

#[tokio::test]
async fn test_sqlite_backend_serves_requests() {
    let args = Args::try_parse_from(["shiftplan-server", "--backend", "sqlite"]).unwrap();
    let app = build_router(AppState::new(build_context(&args).unwrap()));

    let health = call(&app, Method::GET, "/health", None, StatusCode::OK).await;
    assert_eq!(health["backend"], "sqlite");

    let org = call(
        &app,
        Method::POST,
        "/api/v1/organizations",
        Some(json!({"name": "Acme Events"})),
        StatusCode::CREATED,
    )
    .await;
    let fetched = call(
        &app,
        Method::GET,
        &format!("/api/v1/organizations/{}", org["id"]),
        None,
        StatusCode::OK,
    )
    .await;
    assert_eq!(fetched, org);
}
