use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Missing or invalid fields: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub const MEMBER_NOT_FOUND: ApiError = ApiError::NotFound("Member not found");
    pub const NO_SESSIONS_FOUND: ApiError =
        ApiError::NotFound("No workout sessions found for this member");

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::NotFound(message) => json!({ "error": message }),
            ApiError::Validation(fields) => json!({
                "error": "Missing or invalid fields",
                "fields": fields,
            }),
            ApiError::BadRequest(message) => json!({ "error": message }),
            ApiError::Store(e) => {
                tracing::error!("Store error: {}", e);
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, _)| field.to_string())
            .collect();
        fields.sort();

        ApiError::Validation(fields)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
