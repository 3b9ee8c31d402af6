use crate::dto::application_dto::ApplicationPayload;
use crate::error::Result;
use crate::models::application::Application;
use sqlx::PgPool;

const APPLICATION_COLUMNS: &str =
    "id, written_username, written_phone, written_cover_letter, vacancy_id, account_id";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Both foreign keys are bound server-side: the vacancy from the URL,
    /// the account from the session.
    pub async fn create(
        &self,
        vacancy_id: i64,
        account_id: i64,
        payload: ApplicationPayload,
    ) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(&format!(
            "INSERT INTO applications
                 (written_username, written_phone, written_cover_letter, vacancy_id, account_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(&payload.written_username)
        .bind(&payload.written_phone)
        .bind(&payload.written_cover_letter)
        .bind(vacancy_id)
        .bind(account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    pub async fn list_by_vacancy(&self, vacancy_id: i64) -> Result<Vec<Application>> {
        let items = sqlx::query_as::<_, Application>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications WHERE vacancy_id = $1 ORDER BY id"
        ))
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn count_by_vacancy(&self, vacancy_id: i64) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE vacancy_id = $1")
                .bind(vacancy_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
