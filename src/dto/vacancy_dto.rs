use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{company::Company, specialty::Specialty, vacancy::Vacancy};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyPayload {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    pub specialty_id: i64,
    #[validate(length(min = 1))]
    pub skills: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub salary_min: i32,
    #[validate(range(min = 0))]
    pub salary_max: i32,
}

/// Vacancy page context: the posting plus its company and category, the way
/// the templates dereference the foreign keys.
#[derive(Debug, Clone, Serialize)]
pub struct VacancyDetail {
    #[serde(flatten)]
    pub vacancy: Vacancy,
    pub company: Company,
    pub specialty: Specialty,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub search: Option<String>,
}
