use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub logo: Option<String>,
    pub description: String,
    pub employee_count: i32,
    pub owner_id: i64,
}
