pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    account_service::AccountService, application_service::ApplicationService,
    company_service::CompanyService, resume_service::ResumeService,
    specialty_service::SpecialtyService, vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub account_service: AccountService,
    pub specialty_service: SpecialtyService,
    pub company_service: CompanyService,
    pub vacancy_service: VacancyService,
    pub application_service: ApplicationService,
    pub resume_service: ResumeService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let account_service = AccountService::new(pool.clone());
        let specialty_service = SpecialtyService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let resume_service = ResumeService::new(pool.clone());

        Self {
            pool,
            account_service,
            specialty_service,
            company_service,
            vacancy_service,
            application_service,
            resume_service,
        }
    }
}
