use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::resume::{ResumeGrade, ResumeStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResumePayload {
    #[validate(length(min = 1, max = 40))]
    pub first_name: String,
    #[validate(length(min = 1, max = 40))]
    pub last_name: String,
    pub status: ResumeStatus,
    #[validate(range(min = 0))]
    pub salary: i32,
    pub specialty_id: i64,
    pub grade: ResumeGrade,
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[validate(length(max = 100))]
    pub portfolio: String,
}
