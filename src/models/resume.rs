use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resume_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    Looking,
    NotLooking,
    Considering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resume_grade", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResumeGrade {
    Intern,
    Junior,
    Middle,
    Senior,
    Lead,
}

impl ResumeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ResumeStatus::Looking => "Ищу работу",
            ResumeStatus::NotLooking => "Не ищу работу",
            ResumeStatus::Considering => "Рассматриваю предложения",
        }
    }
}

impl ResumeGrade {
    pub fn label(&self) -> &'static str {
        match self {
            ResumeGrade::Intern => "Стажер",
            ResumeGrade::Junior => "Джуниор",
            ResumeGrade::Middle => "Миддл",
            ResumeGrade::Senior => "Синьор",
            ResumeGrade::Lead => "Лид",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i64,
    pub account_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub status: ResumeStatus,
    pub salary: i32,
    pub specialty_id: i64,
    pub grade: ResumeGrade,
    pub education: String,
    pub experience: String,
    pub portfolio: String,
}
