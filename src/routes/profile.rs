use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use serde_json::json;
use validator::Validate;

use crate::{
    dto::{
        account_dto::AccountResponse, company_dto::CompanyPayload, company_dto::LogoUploadResponse,
        resume_dto::ResumePayload, vacancy_dto::VacancyPayload,
    },
    error::{Error, Result},
    forms,
    middleware::auth::Claims,
    models::company::Company,
    routes::EntityId,
    AppState,
};

#[axum::debug_handler]
pub async fn logout(Extension(_claims): Extension<Claims>) -> impl IntoResponse {
    // Tokens are stateless; the client drops it and goes home.
    Json(json!({ "redirect": "/" }))
}

#[axum::debug_handler]
pub async fn user_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let account = state.account_service.get_by_id(claims.sub).await?;
    Ok(Json(json!({ "user": AccountResponse::from(account) })))
}

async fn own_company(state: &AppState, claims: &Claims) -> Result<Company> {
    state
        .company_service
        .get_by_owner(claims.sub)
        .await?
        .ok_or_else(|| Error::BadRequest("Сначала создайте компанию".to_string()))
}

// Specialty ids arrive from a select widget; an unknown id is a bad form,
// not a server fault.
async fn check_specialty(state: &AppState, specialty_id: i64) -> Result<()> {
    state
        .specialty_service
        .get_by_id(specialty_id)
        .await?
        .ok_or_else(|| Error::BadRequest("Форма невалидна".to_string()))?;
    Ok(())
}

#[axum::debug_handler]
pub async fn company_create_page() -> impl IntoResponse {
    Json(json!({ "form": forms::company_form() }))
}

#[axum::debug_handler]
pub async fn company_create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.create(claims.sub, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "company": company,
            "redirect": "/profile/company_info/",
        })),
    ))
}

#[axum::debug_handler]
pub async fn company_info(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    match state.company_service.get_by_owner(claims.sub).await? {
        Some(company) => Ok(Json(json!({ "company": company }))),
        None => Ok(Json(json!({
            "notice": "Вы пока не создали компанию",
            "create": "/profile/company_create/",
        }))),
    }
}

#[axum::debug_handler]
pub async fn company_info_edit_page(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    EntityId(company_id): EntityId,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .get_by_id(company_id)
        .await?
        .filter(|c| c.owner_id == claims.sub)
        .ok_or_else(|| Error::NotFound(format!("Нет компании с id {}", company_id)))?;

    Ok(Json(json!({
        "form": forms::company_form(),
        "company": company,
    })))
}

#[axum::debug_handler]
pub async fn company_info_edit(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    EntityId(company_id): EntityId,
    Json(payload): Json<CompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state
        .company_service
        .update(company_id, claims.sub, payload)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет компании с id {}", company_id)))?;

    Ok(Json(json!({
        "notice": "Форма обновлена",
        "company": company,
    })))
}

#[axum::debug_handler]
pub async fn company_logo_upload(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let company = own_company(&state, &claims).await?;

    let mut saved: Option<String> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("logo") {
            continue;
        }
        let filename = field.file_name().unwrap_or("logo").to_string();
        let data = field.bytes().await?;
        if data.is_empty() {
            continue;
        }
        let media_dir = &crate::config::get_config().media_dir;
        saved = Some(
            crate::utils::media::save_image(media_dir, "company_logos", &filename, data).await?,
        );
    }

    let logo = saved.ok_or_else(|| Error::BadRequest("Загрузите картинку".to_string()))?;
    state.company_service.set_logo(company.id, &logo).await?;
    Ok(Json(LogoUploadResponse { logo }))
}

#[axum::debug_handler]
pub async fn vacancy_create_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list(None).await?;
    Ok(Json(json!({ "form": forms::vacancy_form(&specialties) })))
}

#[axum::debug_handler]
pub async fn vacancy_create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = own_company(&state, &claims).await?;
    check_specialty(&state, payload.specialty_id).await?;

    let vacancy = state.vacancy_service.create(company.id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "vacancy": vacancy,
            "redirect": "/profile/company_vacancy_list/",
        })),
    ))
}

#[axum::debug_handler]
pub async fn vacancy_list(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    let company = own_company(&state, &claims).await?;
    let vacancies = state.vacancy_service.list_by_company(company.id).await?;
    if vacancies.is_empty() {
        return Ok(Json(json!({
            "notice": "Вы пока не создали вакансии",
            "create": "/profile/company_vacancy_create/",
        })));
    }
    Ok(Json(json!({ "vacancies": vacancies })))
}

#[axum::debug_handler]
pub async fn vacancy_detail(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    EntityId(vacancy_id): EntityId,
) -> Result<impl IntoResponse> {
    let company = own_company(&state, &claims).await?;
    let vacancy = state
        .vacancy_service
        .get_by_id(vacancy_id)
        .await?
        .filter(|v| v.company_id == company.id)
        .ok_or_else(|| Error::NotFound(format!("Нет вакансии с id {}", vacancy_id)))?;

    let apps = state.application_service.list_by_vacancy(vacancy.id).await?;
    Ok(Json(json!({
        "vacancy": vacancy,
        "apps": apps,
    })))
}

#[axum::debug_handler]
pub async fn vacancy_edit_page(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    EntityId(vacancy_id): EntityId,
) -> Result<impl IntoResponse> {
    let company = own_company(&state, &claims).await?;
    let vacancy = state
        .vacancy_service
        .get_by_id(vacancy_id)
        .await?
        .filter(|v| v.company_id == company.id)
        .ok_or_else(|| Error::NotFound(format!("Нет вакансии с id {}", vacancy_id)))?;

    let specialties = state.specialty_service.list(None).await?;
    Ok(Json(json!({
        "form": forms::vacancy_form(&specialties),
        "vacancy": vacancy,
    })))
}

#[axum::debug_handler]
pub async fn vacancy_edit(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    EntityId(vacancy_id): EntityId,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = own_company(&state, &claims).await?;
    check_specialty(&state, payload.specialty_id).await?;

    let vacancy = state
        .vacancy_service
        .update(vacancy_id, company.id, payload)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Нет вакансии с id {}", vacancy_id)))?;

    Ok(Json(json!({
        "notice": "Форма обновлена",
        "vacancy": vacancy,
    })))
}

#[axum::debug_handler]
pub async fn resume_page(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    match state.resume_service.get_by_account(claims.sub).await? {
        Some(resume) => {
            let specialties = state.specialty_service.list(None).await?;
            Ok(Json(json!({
                "form": forms::resume_form(&specialties),
                "resume": resume,
            })))
        }
        None => Ok(Json(json!({
            "notice": "Вы пока не создали резюме",
            "create": "/profile/resume_create/",
        }))),
    }
}

#[axum::debug_handler]
pub async fn resume_edit(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_specialty(&state, payload.specialty_id).await?;

    let resume = state
        .resume_service
        .update(claims.sub, payload)
        .await?
        .ok_or_else(|| Error::NotFound("Резюме не создано".to_string()))?;

    Ok(Json(json!({
        "notice": "Форма обновлена",
        "resume": resume,
    })))
}

#[axum::debug_handler]
pub async fn resume_create_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list(None).await?;
    Ok(Json(json!({ "form": forms::resume_form(&specialties) })))
}

#[axum::debug_handler]
pub async fn resume_create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ResumePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    check_specialty(&state, payload.specialty_id).await?;

    let resume = state.resume_service.create(claims.sub, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "notice": "Резюме создано!",
            "resume": resume,
            "redirect": "/profile/resume/",
        })),
    ))
}
