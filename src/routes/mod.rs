use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::Error;

pub mod auth;
pub mod errors;
pub mod health;
pub mod profile;
pub mod public;

/// Numeric id taken from the path. A non-numeric segment reads the same as
/// an unknown id: the not-found page, not a malformed-request error.
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| page_not_found())?;
        raw.parse().map(EntityId).map_err(|_| page_not_found())
    }
}

fn page_not_found() -> Error {
    Error::NotFound("Ошибка 404! Попробуйте открыть другую страницу".to_string())
}
