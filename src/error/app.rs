use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::validation::{ValidationErrorBody, ValidationIssue};

/// Body of every non-validation client error.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Not Found")]
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed ({} issue(s))", .0.len())]
    Validation(Vec<ValidationIssue>),
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected(status, _) => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<ValidationIssue> for AppError {
    fn from(issue: ValidationIssue) -> Self {
        AppError::Validation(vec![issue])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        let detail = match self {
            AppError::Validation(detail) => {
                return (status, Json(ValidationErrorBody { detail })).into_response();
            }
            AppError::Rejected(_, msg) => msg,
            AppError::NotFound => "Not Found".to_string(),
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
