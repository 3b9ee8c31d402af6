use crate::dto::vacancy_dto::VacancyPayload;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use sqlx::PgPool;

const VACANCY_COLUMNS: &str = "id, title, specialty_id, company_id, skills, description, \
                               salary_min, salary_max, published_at";

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // The listing page shows everything; pagination is deliberately absent.
    pub async fn list_all(&self) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies ORDER BY published_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE company_id = $1 ORDER BY id"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn list_by_specialty(&self, specialty_id: i64) -> Result<Vec<Vacancy>> {
        let items = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE specialty_id = $1 ORDER BY id"
        ))
        .bind(specialty_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Substring match on title OR description, case-insensitive (ILIKE).
    pub async fn search(&self, text: &str) -> Result<Vec<Vacancy>> {
        let pattern = format!("%{}%", text);
        let items = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies
             WHERE title ILIKE $1 OR description ILIKE $1
             ORDER BY published_at DESC, id DESC"
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            "SELECT {VACANCY_COLUMNS} FROM vacancies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vacancy)
    }

    /// `company_id` comes from the authenticated owner's company, never from
    /// the payload. `published_at` is set by the schema on insert.
    pub async fn create(&self, company_id: i64, payload: VacancyPayload) -> Result<Vacancy> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            "INSERT INTO vacancies (title, specialty_id, company_id, skills, description,
                                    salary_min, salary_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {VACANCY_COLUMNS}"
        ))
        .bind(&payload.title)
        .bind(payload.specialty_id)
        .bind(company_id)
        .bind(&payload.skills)
        .bind(&payload.description)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .fetch_one(&self.pool)
        .await?;

        Ok(vacancy)
    }

    pub async fn update(
        &self,
        id: i64,
        company_id: i64,
        payload: VacancyPayload,
    ) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(&format!(
            "UPDATE vacancies
             SET title = $3, specialty_id = $4, skills = $5, description = $6,
                 salary_min = $7, salary_max = $8
             WHERE id = $1 AND company_id = $2
             RETURNING {VACANCY_COLUMNS}"
        ))
        .bind(id)
        .bind(company_id)
        .bind(&payload.title)
        .bind(payload.specialty_id)
        .bind(&payload.skills)
        .bind(&payload.description)
        .bind(payload.salary_min)
        .bind(payload.salary_max)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vacancy)
    }
}
