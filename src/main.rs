use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use jobboard_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_routes = Router::new()
        .route("/", get(routes::public::main_page))
        .route("/about/", get(routes::public::about))
        .route("/sent/", get(routes::public::application_sent))
        .route("/vacancies/", get(routes::public::list_vacancies))
        .route(
            "/vacancies/:id/",
            get(routes::public::vacancy_detail).post(routes::public::apply_to_vacancy),
        )
        .route(
            "/vacancies/cat/:code/",
            get(routes::public::vacancies_by_category),
        )
        .route("/companies/", get(routes::public::list_companies))
        .route("/companies/:id/", get(routes::public::company_detail))
        .route("/search/", get(routes::public::search));

    let auth_routes = Router::new()
        .route(
            "/registration_company/",
            get(routes::auth::registration_page).post(routes::auth::register),
        )
        .route(
            "/registrations_confirm/",
            get(routes::auth::registrations_confirm),
        )
        .route(
            "/login/",
            get(routes::auth::login_page).post(routes::auth::login),
        );

    let profile_routes = Router::new()
        .route("/logout/", get(routes::profile::logout))
        .route("/user_profile/", get(routes::profile::user_profile))
        .route(
            "/profile/company_create/",
            get(routes::profile::company_create_page).post(routes::profile::company_create),
        )
        .route("/profile/company_info/", get(routes::profile::company_info))
        .route(
            "/profile/company_info_edit/:id/",
            get(routes::profile::company_info_edit_page).post(routes::profile::company_info_edit),
        )
        .route(
            "/profile/company_logo/",
            post(routes::profile::company_logo_upload),
        )
        .route(
            "/profile/company_vacancy_create/",
            get(routes::profile::vacancy_create_page).post(routes::profile::vacancy_create),
        )
        .route(
            "/profile/company_vacancy_list/",
            get(routes::profile::vacancy_list),
        )
        .route(
            "/profile/company_vacancy/:id/",
            get(routes::profile::vacancy_detail),
        )
        .route(
            "/profile/company_vacancy_edit/:id/",
            get(routes::profile::vacancy_edit_page).post(routes::profile::vacancy_edit),
        )
        .route(
            "/profile/resume/",
            get(routes::profile::resume_page).post(routes::profile::resume_edit),
        )
        .route(
            "/profile/resume_create/",
            get(routes::profile::resume_create_page).post(routes::profile::resume_create),
        )
        .layer(axum::middleware::from_fn(
            jobboard_backend::middleware::auth::require_bearer_auth,
        ));

    let media_dir = config.media_dir.clone();
    tokio::fs::create_dir_all(&media_dir).await?;
    info!("Serving media from: {}", media_dir);

    let app = base_routes
        .merge(public_routes)
        .merge(auth_routes)
        .merge(profile_routes)
        .nest_service("/media", tower_http::services::ServeDir::new(media_dir))
        .fallback(routes::errors::not_found)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(5 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
