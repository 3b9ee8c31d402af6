use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

use jobboard_backend::{
    dto::{account_dto::RegisterPayload, company_dto::CompanyPayload, vacancy_dto::VacancyPayload},
    models::{account::Account, company::Company, vacancy::Vacancy},
    AppState,
};

async fn setup() -> AppState {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("MEDIA_DIR", "/tmp/jobboard_test_media");
    let _ = jobboard_backend::config::init_config();

    let pool = jobboard_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");
    AppState::new(pool)
}

fn public_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(jobboard_backend::routes::public::main_page))
        .route("/vacancies/", get(jobboard_backend::routes::public::list_vacancies))
        .route(
            "/vacancies/:id/",
            get(jobboard_backend::routes::public::vacancy_detail)
                .post(jobboard_backend::routes::public::apply_to_vacancy),
        )
        .route(
            "/vacancies/cat/:code/",
            get(jobboard_backend::routes::public::vacancies_by_category),
        )
        .route("/companies/:id/", get(jobboard_backend::routes::public::company_detail))
        .route("/search/", get(jobboard_backend::routes::public::search))
        .fallback(jobboard_backend::routes::errors::not_found)
        .with_state(state)
}

async fn seed_account(state: &AppState) -> Account {
    state
        .account_service
        .register(RegisterPayload {
            username: format!("user_{}", Uuid::new_v4().simple()),
            email: "owner@example.com".into(),
            first_name: "Иван".into(),
            last_name: "Иванов".into(),
            password1: "correct-horse".into(),
            password2: "correct-horse".into(),
        })
        .await
        .expect("seed account")
}

async fn seed_company(state: &AppState, owner: &Account) -> Company {
    state
        .company_service
        .create(
            owner.id,
            CompanyPayload {
                name: "Рога и Копыта".into(),
                location: "Москва".into(),
                description: "Делаем всё".into(),
                employee_count: 42,
            },
        )
        .await
        .expect("seed company")
}

async fn seed_vacancy(state: &AppState, company: &Company, title: &str) -> Vacancy {
    let backend = state
        .specialty_service
        .get_by_code("backend")
        .await
        .expect("query specialty")
        .expect("backend specialty seeded by migration");
    state
        .vacancy_service
        .create(
            company.id,
            VacancyPayload {
                title: title.into(),
                specialty_id: backend.id,
                skills: "Rust, SQL".into(),
                description: "Пилим бэкенд".into(),
                salary_min: 100000,
                salary_max: 200000,
            },
        )
        .await
        .expect("seed vacancy")
}

async fn body_json(response: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn browse_pages_and_not_found() {
    let state = setup().await;
    let owner = seed_account(&state).await;
    let company = seed_company(&state, &owner).await;
    let vacancy = seed_vacancy(&state, &company, "Джуниор-бэкендер").await;
    let app = public_app(state.clone());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["specialties"].as_array().unwrap().is_empty());
    assert!(body["specialties"].as_array().unwrap().len() <= 8);
    assert!(body["companies"].as_array().unwrap().len() <= 16);

    // vacancy detail embeds the title and the application form
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/vacancies/{}/", vacancy.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["vacancy"]["title"], "Джуниор-бэкендер");
    assert_eq!(body["vacancy"]["company"]["name"], "Рога и Копыта");
    let fields: Vec<&str> = body["form"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["written_username", "written_phone", "written_cover_letter"]
    );

    // unknown and non-numeric ids alike render the not-found page
    for uri in [
        "/vacancies/999999999/".to_string(),
        "/vacancies/abc/".to_string(),
        "/companies/999999999/".to_string(),
        "/companies/abc/".to_string(),
        "/vacancies/cat/nosuchcat/".to_string(),
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["home"], "/");
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/companies/{}/", company.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["company"]["id"], company.id);
    assert!(!body["company_vacancies"].as_array().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/vacancies/cat/backend/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["specialty"]["code"], "backend");
}

#[tokio::test]
async fn search_redirects_on_empty_query_and_matches_case_insensitively() {
    let state = setup().await;
    let owner = seed_account(&state).await;
    let company = seed_company(&state, &owner).await;
    let marker = Uuid::new_v4().simple().to_string();
    let title = format!("Вакансия {}", marker);
    seed_vacancy(&state, &company, &title).await;
    let app = public_app(state.clone());

    // empty query: back to the referring page, no search performed
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/search/")
                .header(header::REFERER, "/vacancies/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/vacancies/");

    // no referer either: land on the main page
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/search/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // the match ignores case
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/search/?search={}", marker.to_uppercase()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let titles: Vec<&str> = body["vacancies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&title.as_str()));
}

#[tokio::test]
async fn application_requires_authentication() {
    let state = setup().await;
    let owner = seed_account(&state).await;
    let company = seed_company(&state, &owner).await;
    let vacancy = seed_vacancy(&state, &company, "Вакансия с откликами").await;
    let app = public_app(state.clone());

    let payload = json!({
        "written_username": "Анна",
        "written_phone": "+7 900 000-00-00",
        "written_cover_letter": "Здравствуйте! Хочу у вас работать."
    });

    // anonymous submission writes nothing
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/vacancies/{}/", vacancy.id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let count = state
        .application_service
        .count_by_vacancy(vacancy.id)
        .await
        .unwrap();
    assert_eq!(count, 0);

    // an authenticated seeker gets through
    let seeker = seed_account(&state).await;
    let token =
        jobboard_backend::middleware::auth::issue_token(&seeker, "test_secret_key", 1).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/vacancies/{}/", vacancy.id))
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["redirect"], "/sent/");
    assert_eq!(body["application"]["account_id"], seeker.id);
    assert_eq!(body["application"]["vacancy_id"], vacancy.id);

    let count = state
        .application_service
        .count_by_vacancy(vacancy.id)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
