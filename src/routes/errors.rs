use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Ошибка 404! Попробуйте открыть другую страницу" })),
    )
}

/// Uniform body for every uncaught server-side failure.
pub fn server_error_page() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Ошибка 500! Попробуйте открыть другую страницу" })),
    )
        .into_response()
}
