pub mod account_service;
pub mod application_service;
pub mod company_service;
pub mod resume_service;
pub mod specialty_service;
pub mod vacancy_service;
