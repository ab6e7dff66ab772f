//! Errors returned by the HTTP handlers.
//!
//! Every failure path, whatever format was negotiated, ends up as an
//! [`ApiError`] and is rendered as `{"error": ..., "status": ...}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;

use crate::databases::messages::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required parameter (or the whole body) is absent or malformed.
    #[error("param is missing or the value is empty: {0}")]
    MissingParameter(String),

    #[error("missing fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("requested format is not available")]
    NotAcceptable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::Store(StoreError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            ApiError::Validation(fields) => json!({
                "error": self.to_string(),
                "fields": fields,
                "status": status.as_u16(),
            }),
            ApiError::Store(StoreError::Database(e)) => {
                error!("Store error: {:?}", e);
                json!({
                    "error": "Database error",
                    "status": status.as_u16(),
                })
            }
            _ => json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::MissingParameter("message".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation(vec!["name".into()]).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotAcceptable.status_code(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            ApiError::from(StoreError::Invalid("name can't be blank".into())).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = ApiError::Validation(vec!["name".into(), "content".into()]);
        assert_eq!(err.to_string(), "missing fields: name, content");
    }

    #[test]
    fn missing_parameter_names_the_key() {
        let err = ApiError::MissingParameter("message".into());
        assert!(err.to_string().ends_with(": message"));
    }
}
