use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job category (Backend, Design, ...); `code` is the slug used in
/// category-filtered URLs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Specialty {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub picture: String,
}
