use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub title: String,
    pub specialty_id: i64,
    pub company_id: i64,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: NaiveDate,
}
