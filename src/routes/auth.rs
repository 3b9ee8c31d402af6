use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::account_dto::{AccountResponse, LoginPayload, RegisterPayload, TokenResponse},
    error::{Error, Result},
    forms,
    middleware::auth::issue_token,
    utils::crypto,
    AppState,
};

#[axum::debug_handler]
pub async fn registration_page() -> impl IntoResponse {
    Json(json!({ "form": forms::registration_form() }))
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let account = state.account_service.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "account": AccountResponse::from(account),
            "redirect": "/registrations_confirm/",
        })),
    ))
}

#[axum::debug_handler]
pub async fn registrations_confirm() -> impl IntoResponse {
    Json(json!({
        "notice": "Регистрация прошла успешно",
        "login": "/login/",
    }))
}

#[axum::debug_handler]
pub async fn login_page() -> impl IntoResponse {
    Json(json!({ "form": forms::login_form() }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let account = state
        .account_service
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| Error::Unauthorized("Неверное имя пользователя или пароль".to_string()))?;

    let ok = crypto::verify_password(&payload.password, &account.password_hash)
        .map_err(|e| Error::Internal(format!("Password verification failed: {}", e)))?;
    if !ok {
        return Err(Error::Unauthorized(
            "Неверное имя пользователя или пароль".to_string(),
        ));
    }

    let config = crate::config::get_config();
    let token = issue_token(&account, &config.jwt_secret, config.token_ttl_hours)?;
    Ok(Json(TokenResponse {
        token,
        redirect: "/".to_string(),
    }))
}
