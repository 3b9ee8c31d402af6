use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub written_username: String,
    pub written_phone: String,
    pub written_cover_letter: String,
    pub vacancy_id: i64,
    pub account_id: i64,
}
