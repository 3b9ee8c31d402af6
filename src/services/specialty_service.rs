use crate::error::Result;
use crate::models::specialty::Specialty;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SpecialtyService {
    pool: PgPool,
}

impl SpecialtyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Specialty>> {
        let items = match limit {
            Some(n) => {
                sqlx::query_as::<_, Specialty>(
                    "SELECT id, title, code, picture FROM specialties ORDER BY id LIMIT $1",
                )
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Specialty>(
                    "SELECT id, title, code, picture FROM specialties ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(items)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Specialty>> {
        let specialty = sqlx::query_as::<_, Specialty>(
            "SELECT id, title, code, picture FROM specialties WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(specialty)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Specialty>> {
        let specialty = sqlx::query_as::<_, Specialty>(
            "SELECT id, title, code, picture FROM specialties WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(specialty)
    }
}
