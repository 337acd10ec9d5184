use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::mentors::models::{Mentor, MentorUpdate};
use crate::shared::validation::{trimmed, trimmed_option};

/// Request DTO for creating the caller's mentor profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMentorDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 100, message = "Specialization must be 1-100 characters"))]
    pub specialization: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Bio must not exceed 5000 characters"))]
    pub bio: String,
}

/// Request DTO for updating the caller's mentor profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMentorDto {
    #[serde(default, deserialize_with = "trimmed_option")]
    #[validate(length(min = 1, max = 100, message = "Specialization must be 1-100 characters"))]
    pub specialization: Option<String>,

    #[validate(length(max = 5000, message = "Bio must not exceed 5000 characters"))]
    pub bio: Option<String>,

    pub available: Option<bool>,
}

impl From<UpdateMentorDto> for MentorUpdate {
    fn from(dto: UpdateMentorDto) -> Self {
        Self {
            specialization: dto.specialization,
            bio: dto.bio,
            available: dto.available,
        }
    }
}

/// Query params for listing mentors
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListMentorsQuery {
    /// Only mentors with this availability
    pub available: Option<bool>,
}

/// Response DTO for mentor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MentorResponseDto {
    pub id: Uuid,
    pub account_id: Uuid,
    pub username: String,
    pub specialization: String,
    pub bio: String,
    pub available: bool,
    /// `"<username> - <specialization>"`
    pub display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Mentor> for MentorResponseDto {
    fn from(m: Mentor) -> Self {
        let display = m.to_string();
        Self {
            id: m.id,
            account_id: m.account_id,
            username: m.username,
            specialization: m.specialization,
            bio: m.bio,
            available: m.available,
            display,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_specialization_fails_validation() {
        let dto: CreateMentorDto =
            serde_json::from_value(serde_json::json!({ "specialization": "   " })).unwrap();

        assert_eq!(dto.specialization, "");
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("specialization"));
    }

    #[test]
    fn test_padded_specialization_is_trimmed_on_create_and_update() {
        let create: CreateMentorDto =
            serde_json::from_value(serde_json::json!({ "specialization": "  Design  " })).unwrap();
        assert_eq!(create.specialization, "Design");
        assert!(create.validate().is_ok());

        let update: UpdateMentorDto =
            serde_json::from_value(serde_json::json!({ "specialization": "  Design  " })).unwrap();
        assert_eq!(update.specialization.as_deref(), Some("Design"));

        let blank: UpdateMentorDto =
            serde_json::from_value(serde_json::json!({ "specialization": " " })).unwrap();
        assert!(blank.validate().is_err());

        let untouched: UpdateMentorDto =
            serde_json::from_value(serde_json::json!({ "available": false })).unwrap();
        assert_eq!(untouched.specialization, None);
        assert!(untouched.validate().is_ok());
    }
}
