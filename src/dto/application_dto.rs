use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplicationPayload {
    #[validate(length(min = 1, max = 20))]
    pub written_username: String,
    #[validate(length(min = 1, max = 20))]
    pub written_phone: String,
    #[validate(length(min = 1))]
    pub written_cover_letter: String,
}
