use crate::dto::account_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::account::Account;
use crate::utils::crypto;
use sqlx::PgPool;

const ACCOUNT_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, created_at";

#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<Account> {
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM accounts WHERE username = $1")
            .bind(&payload.username)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_some() {
            return Err(Error::Conflict("Имя пользователя занято".to_string()));
        }

        let password_hash = crypto::hash_password(&payload.password1)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        let account = sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO accounts (username, email, first_name, last_name, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        account.ok_or_else(|| Error::NotFound(format!("Нет пользователя с id {}", id)))
    }

    /// Removing an account takes its company, vacancies, applications and
    /// resume with it; the cascade lives in the schema and is relied upon
    /// here rather than re-implemented.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
