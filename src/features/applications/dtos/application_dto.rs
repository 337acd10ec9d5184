use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::applications::models::{Application, ApplicationStatus};
use crate::shared::validation::trimmed;

/// Request DTO for submitting a mentorship application
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "First name must be 1-150 characters"))]
    pub first_name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Course must be 1-200 characters"))]
    pub course: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Program must be 1-200 characters"))]
    pub program: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Motivation must not exceed 5000 characters"))]
    pub motivation: String,

    /// Mentor record to assign the application to
    pub mentor_id: Option<Uuid>,
}

/// Request DTO for a mentor's review decision
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateApplicationStatusDto {
    /// `Approved` or `Rejected`
    pub status: ApplicationStatus,

    /// Ignored when rejecting
    pub consultation_date: Option<DateTime<Utc>>,

    #[validate(length(max = 5000, message = "Feedback must not exceed 5000 characters"))]
    pub feedback: Option<String>,
}

/// Response DTO for mentorship application
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponseDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub mentor_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub program: String,
    pub motivation: String,
    pub status: ApplicationStatus,
    pub feedback: Option<String>,
    pub consultation_date: Option<DateTime<Utc>>,
    /// `"<first_name> <last_name> - <program> (<status>)"`
    pub display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponseDto {
    fn from(a: Application) -> Self {
        let display = a.to_string();
        Self {
            id: a.id,
            student_id: a.student_id,
            mentor_id: a.mentor_id,
            first_name: a.first_name,
            last_name: a.last_name,
            course: a.course,
            program: a.program,
            motivation: a.motivation,
            status: a.status,
            feedback: a.feedback,
            consultation_date: a.consultation_date,
            display,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_update_accepts_null_date() {
        let dto: UpdateApplicationStatusDto = serde_json::from_value(serde_json::json!({
            "status": "Rejected",
            "consultation_date": null,
            "feedback": "Program is full"
        }))
        .unwrap();

        assert_eq!(dto.status, ApplicationStatus::Rejected);
        assert!(dto.consultation_date.is_none());
    }

    #[test]
    fn test_status_update_parses_iso_date() {
        let dto: UpdateApplicationStatusDto = serde_json::from_value(serde_json::json!({
            "status": "Approved",
            "consultation_date": "2025-03-01T10:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(dto.status, ApplicationStatus::Approved);
        assert!(dto.consultation_date.is_some());
        assert!(dto.feedback.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<UpdateApplicationStatusDto>(serde_json::json!({
            "status": "Done"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_only_names_fail_validation() {
        let dto: CreateApplicationDto = serde_json::from_value(serde_json::json!({
            "first_name": "  Amina ",
            "last_name": "   ",
            "course": "Computer Science",
            "program": "Career Guidance"
        }))
        .unwrap();

        assert_eq!(dto.first_name, "Amina");
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("last_name"));
        assert!(!errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_blank_program_fails_validation() {
        let dto = CreateApplicationDto {
            first_name: "Amina".to_string(),
            last_name: "Yusuf".to_string(),
            course: "Computer Science".to_string(),
            program: String::new(),
            motivation: String::new(),
            mentor_id: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("program"));
    }
}
