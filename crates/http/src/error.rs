//! Error handling for the Estante HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use estante_db::StorageError;

/// Application error types that map to HTTP responses.
///
/// Every error is converted into the flat `{"erro": ...}` wire object at
/// the handler boundary; nothing propagates past the request lifecycle.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation {
        details: Vec<serde_json::Value>,
        message: String,
    },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("database error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Create a validation error
    pub fn validation(details: Vec<serde_json::Value>, message: impl Into<String>) -> Self {
        Self::Validation {
            details,
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, erro, details) = match self {
            AppError::Validation { details, message } => {
                (StatusCode::BAD_REQUEST, message, Some(details))
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            // Storage detail is interpolated into the body per the published
            // contract; the same fault is logged below.
            AppError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro no banco de dados: {}", e),
                None,
            ),
        };

        tracing::error!(
            error_id = %error_id,
            status_code = %status.as_u16(),
            details = ?details,
            erro = %erro,
            "Request error"
        );

        (status, Json(json!({ "erro": erro }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_validation_error() {
        let details = vec![serde_json::json!({"field": "titulo", "error": "required"})];
        let error = AppError::validation(details.clone(), "Todos os campos são obrigatórios");

        match error {
            AppError::Validation {
                details: d,
                message,
            } => {
                assert_eq!(d, details);
                assert_eq!(message, "Todos os campos são obrigatórios");
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = AppError::validation(vec![], "Todos os campos são obrigatórios");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_mapping() {
        let error = AppError::not_found("Livro não encontrado");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_mapping() {
        let error = AppError::Storage(StorageError::Query(sqlx::Error::RowNotFound));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
