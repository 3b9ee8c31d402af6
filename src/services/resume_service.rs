use crate::dto::resume_dto::ResumePayload;
use crate::error::{Error, Result};
use crate::models::resume::Resume;
use sqlx::PgPool;

const RESUME_COLUMNS: &str = "id, account_id, first_name, last_name, status, salary, \
                              specialty_id, grade, education, experience, portfolio";

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_account(&self, account_id: i64) -> Result<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE account_id = $1"
        ))
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(resume)
    }

    /// One resume per account; a second create is a conflict, not an
    /// overwrite. Edits go through `update`.
    pub async fn create(&self, account_id: i64, payload: ResumePayload) -> Result<Resume> {
        if self.get_by_account(account_id).await?.is_some() {
            return Err(Error::Conflict("Резюме уже создано".to_string()));
        }

        let resume = sqlx::query_as::<_, Resume>(&format!(
            "INSERT INTO resumes (account_id, first_name, last_name, status, salary,
                                  specialty_id, grade, education, experience, portfolio)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {RESUME_COLUMNS}"
        ))
        .bind(account_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(payload.status)
        .bind(payload.salary)
        .bind(payload.specialty_id)
        .bind(payload.grade)
        .bind(&payload.education)
        .bind(&payload.experience)
        .bind(&payload.portfolio)
        .fetch_one(&self.pool)
        .await?;

        Ok(resume)
    }

    pub async fn update(&self, account_id: i64, payload: ResumePayload) -> Result<Option<Resume>> {
        let resume = sqlx::query_as::<_, Resume>(&format!(
            "UPDATE resumes
             SET first_name = $2, last_name = $3, status = $4, salary = $5,
                 specialty_id = $6, grade = $7, education = $8, experience = $9, portfolio = $10
             WHERE account_id = $1
             RETURNING {RESUME_COLUMNS}"
        ))
        .bind(account_id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(payload.status)
        .bind(payload.salary)
        .bind(payload.specialty_id)
        .bind(payload.grade)
        .bind(&payload.education)
        .bind(&payload.experience)
        .bind(&payload.portfolio)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resume)
    }
}
