//! Presentation metadata for the HTML forms: field names, localized labels,
//! widgets and select choices. Validation itself lives on the payload structs
//! in `dto/`; this module only describes how a client should render a form.

use serde::Serialize;

use crate::models::resume::{ResumeGrade, ResumeStatus};
use crate::models::specialty::Specialty;

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub widget: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, widget: &'static str) -> Self {
        Self {
            name,
            label,
            widget,
            required: true,
            choices: None,
        }
    }

    fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }
}

fn specialty_choices(specialties: &[Specialty]) -> Vec<Choice> {
    specialties
        .iter()
        .map(|s| Choice {
            value: s.id.to_string(),
            label: s.title.clone(),
        })
        .collect()
}

pub fn registration_form() -> Vec<FormField> {
    vec![
        FormField::new("username", "Имя пользователя", "text"),
        FormField::new("email", "Электронная почта", "email"),
        FormField::new("first_name", "Имя", "text"),
        FormField::new("last_name", "Фамилия", "text"),
        FormField::new("password1", "Пароль", "password"),
        FormField::new("password2", "Введите пароль еще раз", "password"),
    ]
}

pub fn login_form() -> Vec<FormField> {
    vec![
        FormField::new("username", "Имя пользователя", "text"),
        FormField::new("password", "Пароль", "password"),
    ]
}

pub fn company_form() -> Vec<FormField> {
    vec![
        FormField::new("name", "Имя", "text"),
        FormField::new("location", "Город", "text"),
        FormField::new("logo", "Загрузите картинку", "file"),
        FormField::new("description", "Описание", "textarea"),
        FormField::new("employee_count", "Количество сотрудников", "number"),
    ]
}

pub fn vacancy_form(specialties: &[Specialty]) -> Vec<FormField> {
    vec![
        FormField::new("title", "Название вакансии", "text"),
        FormField::new("specialty_id", "Специальность", "select")
            .with_choices(specialty_choices(specialties)),
        FormField::new("skills", "Навыки", "text"),
        FormField::new("description", "Описание", "textarea"),
        FormField::new("salary_min", "Зарплата от", "number"),
        FormField::new("salary_max", "Зарплата до", "number"),
    ]
}

pub fn application_form() -> Vec<FormField> {
    vec![
        FormField::new("written_username", "Вас зовут", "text"),
        FormField::new("written_phone", "Ваш телефон", "text"),
        FormField::new("written_cover_letter", "Сопроводительное письмо", "textarea"),
    ]
}

pub fn resume_form(specialties: &[Specialty]) -> Vec<FormField> {
    let statuses = [
        ResumeStatus::Looking,
        ResumeStatus::NotLooking,
        ResumeStatus::Considering,
    ];
    let grades = [
        ResumeGrade::Intern,
        ResumeGrade::Junior,
        ResumeGrade::Middle,
        ResumeGrade::Senior,
        ResumeGrade::Lead,
    ];

    vec![
        FormField::new("first_name", "Имя", "text"),
        FormField::new("last_name", "Фамилия", "text"),
        FormField::new("status", "Готовность к работе", "select").with_choices(
            statuses
                .iter()
                .map(|s| Choice {
                    value: serde_variant_name(s),
                    label: s.label().to_string(),
                })
                .collect(),
        ),
        FormField::new("salary", "Ожидаемое вознаграждение", "number"),
        FormField::new("specialty_id", "Специальность", "select")
            .with_choices(specialty_choices(specialties)),
        FormField::new("grade", "Квалификация", "select").with_choices(
            grades
                .iter()
                .map(|g| Choice {
                    value: serde_variant_name(g),
                    label: g.label().to_string(),
                })
                .collect(),
        ),
        FormField::new("education", "Образование", "textarea"),
        FormField::new("experience", "Опыт работы", "textarea"),
        FormField::new("portfolio", "Портфолио", "text"),
    ]
}

// Choice values must match the wire encoding of the enums.
fn serde_variant_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancy_form_lists_specialty_choices() {
        let specialties = vec![
            Specialty {
                id: 1,
                title: "Бэкенд".into(),
                code: "backend".into(),
                picture: String::new(),
            },
            Specialty {
                id: 2,
                title: "Дизайн".into(),
                code: "design".into(),
                picture: String::new(),
            },
        ];
        let form = vacancy_form(&specialties);
        let field = form.iter().find(|f| f.name == "specialty_id").unwrap();
        let choices = field.choices.as_ref().unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].value, "1");
        assert_eq!(choices[1].label, "Дизайн");
    }

    #[test]
    fn resume_form_choice_values_match_wire_encoding() {
        let form = resume_form(&[]);
        let status = form.iter().find(|f| f.name == "status").unwrap();
        let values: Vec<&str> = status
            .choices
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(values, vec!["looking", "not_looking", "considering"]);

        let grade = form.iter().find(|f| f.name == "grade").unwrap();
        assert_eq!(grade.choices.as_ref().unwrap()[0].value, "intern");
    }

    #[test]
    fn application_form_has_no_ownership_fields() {
        let form = application_form();
        assert!(form.iter().all(|f| f.name != "vacancy_id"));
        assert!(form.iter().all(|f| f.name != "account_id"));
    }
}
