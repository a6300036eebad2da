// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP error mapping.
//!
//! Every error body has the same shape: `{code, message, detail, trace_id}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shiftplan_api::ApiError;
use shiftplan_domain::FieldError;
use tracing::error;

use crate::trace::current_trace_id;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub detail: Value,
    pub trace_id: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
    detail: Value,
}

impl HttpError {
    pub fn request_validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "request_validation_error",
            message: String::from("Request validation failed"),
            detail: serde_json::to_value(errors).unwrap_or(Value::Null),
        }
    }

    pub fn route_not_found(path: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "not_found",
            message: format!("No route for {path}"),
            detail: Value::Null,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
            detail: self.detail,
            trace_id: current_trace_id(),
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestValidation { errors } => Self::request_validation(errors),
            ApiError::ResourceNotFound { message, .. } => Self {
                status: StatusCode::NOT_FOUND,
                code: "not_found",
                detail: Value::String(message.clone()),
                message,
            },
            ApiError::Conflict { message } => Self {
                status: StatusCode::CONFLICT,
                code: "conflict",
                detail: Value::String(message.clone()),
                message,
            },
            ApiError::Validation { message } => Self {
                status: StatusCode::BAD_REQUEST,
                code: "validation_error",
                detail: Value::String(message.clone()),
                message,
            },
            ApiError::Internal { message } => {
                error!(
                    trace_id = current_trace_id().as_deref().unwrap_or("-"),
                    error = %message,
                    "Internal error"
                );
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "internal_error",
                    message: String::from("Internal server error"),
                    detail: Value::Null,
                }
            }
        }
    }
}
