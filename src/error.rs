use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::content::ProjectId;
use crate::notify::Notification;

/// Inline error attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Form input rejected; nothing was changed.
    #[error("{}", first_message(.0))]
    Validation(Vec<FieldError>),

    /// Edit or lookup of an id that is not in the collection.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("invalid password")]
    InvalidCredentials,

    #[error("admin session required")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

fn first_message(fields: &[FieldError]) -> &str {
    fields.first().map(|f| f.message.as_str()).unwrap_or("invalid input")
}

impl AppError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn fields(&self) -> &[FieldError] {
        match self {
            AppError::Validation(fields) => fields,
            _ => &[],
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::field("query", rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::ProjectNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                let message = "An internal error occurred";
                let body = json!({
                    "error": message,
                    "code": "INTERNAL_ERROR",
                    "notification": Notification::error(message),
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        let message = self.to_string();
        let body = json!({
            "error": message,
            "code": code,
            "fields": self.fields(),
            "notification": Notification::error(message.as_str()),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_first_field() {
        let err = AppError::Validation(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("image", "Image is required"),
        ]);
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.fields().len(), 2);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::field("email", "bad").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ProjectNotFound(7).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("disk")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
