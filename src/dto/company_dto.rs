use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyPayload {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub employee_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoUploadResponse {
    pub logo: String,
}
