use crate::dto::company_dto::CompanyPayload;
use crate::error::{Error, Result};
use crate::models::company::Company;
use sqlx::PgPool;

const COMPANY_COLUMNS: &str = "id, name, location, logo, description, employee_count, owner_id";

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Company>> {
        let items = match limit {
            Some(n) => {
                sqlx::query_as::<_, Company>(&format!(
                    "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY id LIMIT $1"
                ))
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Company>(&format!(
                    "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn get_by_owner(&self, owner_id: i64) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE owner_id = $1"
        ))
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    /// Owner is always the authenticated account; the payload carries no
    /// ownership field at all. One company per account.
    pub async fn create(&self, owner_id: i64, payload: CompanyPayload) -> Result<Company> {
        if self.get_by_owner(owner_id).await?.is_some() {
            return Err(Error::Conflict("Компания уже создана".to_string()));
        }

        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (name, location, description, employee_count, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(&payload.description)
        .bind(payload.employee_count)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    /// Updates only a company owned by `owner_id`; anything else reads as
    /// absent to the caller.
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        payload: CompanyPayload,
    ) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies
             SET name = $3, location = $4, description = $5, employee_count = $6
             WHERE id = $1 AND owner_id = $2
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(id)
        .bind(owner_id)
        .bind(&payload.name)
        .bind(&payload.location)
        .bind(&payload.description)
        .bind(payload.employee_count)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    pub async fn set_logo(&self, id: i64, logo: &str) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies SET logo = $2 WHERE id = $1 RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(id)
        .bind(logo)
        .fetch_one(&self.pool)
        .await?;
        Ok(company)
    }
}
