use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::{
        application_dto::ApplicationPayload,
        vacancy_dto::{SearchQuery, VacancyDetail},
    },
    error::{Error, Result},
    forms,
    middleware::auth::claims_from_headers,
    routes::EntityId,
    AppState,
};

const LANDING_SPECIALTIES: i64 = 8;
const LANDING_COMPANIES: i64 = 16;

/// Landing page: the first specialties and companies.
#[axum::debug_handler]
pub async fn main_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list(Some(LANDING_SPECIALTIES)).await?;
    let companies = state.company_service.list(Some(LANDING_COMPANIES)).await?;
    Ok(Json(json!({
        "specialties": specialties,
        "companies": companies,
    })))
}

#[axum::debug_handler]
pub async fn about() -> impl IntoResponse {
    Json(json!({ "page": "about" }))
}

/// Confirmation shown after a successful application.
#[axum::debug_handler]
pub async fn application_sent() -> impl IntoResponse {
    Json(json!({ "notice": "Отклик успешно отправлен", "home": "/" }))
}

#[axum::debug_handler]
pub async fn list_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let vacancies = state.vacancy_service.list_all().await?;
    Ok(Json(json!({ "vacancies": vacancies })))
}

#[axum::debug_handler]
pub async fn vacancy_detail(
    State(state): State<AppState>,
    EntityId(vacancy_id): EntityId,
) -> Result<impl IntoResponse> {
    let vacancy = state
        .vacancy_service
        .get_by_id(vacancy_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет вакансии с id {}", vacancy_id)))?;

    let company = state
        .company_service
        .get_by_id(vacancy.company_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет компании с id {}", vacancy.company_id)))?;
    let specialty = state
        .specialty_service
        .get_by_id(vacancy.specialty_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет категории {}", vacancy.specialty_id)))?;

    let detail = VacancyDetail {
        vacancy,
        company,
        specialty,
    };
    Ok(Json(json!({
        "vacancy": detail,
        "form": forms::application_form(),
    })))
}

/// Application submission. Only authenticated accounts may apply; the
/// vacancy and account references come from the URL and the session.
#[axum::debug_handler]
pub async fn apply_to_vacancy(
    State(state): State<AppState>,
    EntityId(vacancy_id): EntityId,
    headers: HeaderMap,
    Json(payload): Json<ApplicationPayload>,
) -> Result<impl IntoResponse> {
    state
        .vacancy_service
        .get_by_id(vacancy_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет вакансии с id {}", vacancy_id)))?;

    payload.validate()?;

    let claims = claims_from_headers(&headers)
        .ok_or_else(|| Error::Unauthorized("Необходимо зарегистрироваться".to_string()))?;

    let application = state
        .application_service
        .create(vacancy_id, claims.sub, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "application": application, "redirect": "/sent/" })),
    ))
}

#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let companies = state.company_service.list(None).await?;
    Ok(Json(json!({ "companies": companies })))
}

#[axum::debug_handler]
pub async fn company_detail(
    State(state): State<AppState>,
    EntityId(company_id): EntityId,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .get_by_id(company_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет компании с id {}", company_id)))?;
    let vacancies = state.vacancy_service.list_by_company(company.id).await?;

    Ok(Json(json!({
        "company": company,
        "company_vacancies": vacancies,
    })))
}

/// Vacancies for one specialty code (Backend, Design, ...).
#[axum::debug_handler]
pub async fn vacancies_by_category(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse> {
    let specialty = state
        .specialty_service
        .get_by_code(&code)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет категории {}", code)))?;
    let vacancies = state.vacancy_service.list_by_specialty(specialty.id).await?;

    Ok(Json(json!({
        "specialty": specialty,
        "vacancies": vacancies,
    })))
}

/// Free-text search over vacancy titles and descriptions. An empty query
/// never reaches the store: the caller is sent back where they came from,
/// or to the landing page when no Referer is present.
#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Response> {
    let text = query.search.unwrap_or_default();
    if text.is_empty() {
        let target = headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("/");
        return Ok(Redirect::to(target).into_response());
    }

    let vacancies = state.vacancy_service.search(&text).await?;
    Ok(Json(json!({
        "search": text,
        "vacancies": vacancies,
    }))
    .into_response())
}
