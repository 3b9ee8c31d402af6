use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!({ "error": msg })),
            // Not-found pages always carry a way back to the landing page.
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg, "home": "/" })),
            Error::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Форма невалидна", "details": err.to_string() }),
            ),
            Error::Json(err) => (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() })),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() })),
            Error::Anyhow(err) => (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() })),
            Error::Database(err) => {
                tracing::error!(error = ?err, "database error");
                return crate::routes::errors::server_error_page();
            }
            Error::Config(msg) | Error::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                return crate::routes::errors::server_error_page();
            }
            Error::Io(err) => {
                tracing::error!(error = ?err, "io error");
                return crate::routes::errors::server_error_page();
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Страница не найдена".to_string()),
            // Unique constraints back the service-layer existence checks;
            // losing the race is still a conflict, not a server fault.
            sqlx::Error::Database(db)
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Error::Conflict("Запись уже существует".to_string())
            }
            other => Error::Database(other),
        }
    }
}
