use std::env;

use uuid::Uuid;

use jobboard_backend::{
    dto::{
        account_dto::RegisterPayload, application_dto::ApplicationPayload,
        company_dto::CompanyPayload, resume_dto::ResumePayload, vacancy_dto::VacancyPayload,
    },
    models::account::Account,
    models::resume::{ResumeGrade, ResumeStatus},
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

async fn seed_account(state: &AppState) -> Account {
    state
        .account_service
        .register(RegisterPayload {
            username: format!("user_{}", Uuid::new_v4().simple()),
            email: "cascade@example.com".into(),
            first_name: "Иван".into(),
            last_name: "Иванов".into(),
            password1: "correct-horse".into(),
            password2: "correct-horse".into(),
        })
        .await
        .expect("seed account")
}

async fn count(state: &AppState, query: &str, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(query)
        .bind(id)
        .fetch_one(&state.pool)
        .await
        .unwrap()
}

/// Deleting an account must take its company, the company's vacancies,
/// the vacancies' applications and the account's resume with it.
#[tokio::test]
async fn account_deletion_cascades_through_the_graph() {
    let state = setup().await;
    let owner = seed_account(&state).await;
    let seeker = seed_account(&state).await;

    let specialty = state
        .specialty_service
        .get_by_code("backend")
        .await
        .unwrap()
        .expect("backend specialty seeded by migration");

    let company = state
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
        .unwrap();

    let vacancy = state
        .vacancy_service
        .create(
            company.id,
            VacancyPayload {
                title: "Джуниор-бэкендер".into(),
                specialty_id: specialty.id,
                skills: "Rust".into(),
                description: "Пилим бэкенд".into(),
                salary_min: 100000,
                salary_max: 200000,
            },
        )
        .await
        .unwrap();

    state
        .application_service
        .create(
            vacancy.id,
            seeker.id,
            ApplicationPayload {
                written_username: "Анна".into(),
                written_phone: "+7 900 000-00-00".into(),
                written_cover_letter: "Здравствуйте!".into(),
            },
        )
        .await
        .unwrap();

    state
        .resume_service
        .create(
            owner.id,
            ResumePayload {
                first_name: "Иван".into(),
                last_name: "Иванов".into(),
                status: ResumeStatus::Looking,
                salary: 100000,
                specialty_id: specialty.id,
                grade: ResumeGrade::Middle,
                education: "МГУ".into(),
                experience: "3 года".into(),
                portfolio: "https://example.com".into(),
            },
        )
        .await
        .unwrap();

    state.account_service.delete(owner.id).await.unwrap();

    assert_eq!(
        count(&state, "SELECT COUNT(*) FROM companies WHERE id = $1", company.id).await,
        0
    );
    assert_eq!(
        count(&state, "SELECT COUNT(*) FROM vacancies WHERE id = $1", vacancy.id).await,
        0
    );
    // the seeker's application went down with the vacancy
    assert_eq!(
        count(
            &state,
            "SELECT COUNT(*) FROM applications WHERE account_id = $1",
            seeker.id
        )
        .await,
        0
    );
    assert_eq!(
        count(&state, "SELECT COUNT(*) FROM resumes WHERE account_id = $1", owner.id).await,
        0
    );
    // the seeker itself is untouched
    assert_eq!(
        count(&state, "SELECT COUNT(*) FROM accounts WHERE id = $1", seeker.id).await,
        1
    );
}
