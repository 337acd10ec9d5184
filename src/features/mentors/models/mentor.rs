use std::fmt;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Mentor record, read joined with its account's username
#[derive(Debug, Clone, FromRow)]
pub struct Mentor {
    pub id: Uuid,
    /// Non-owning link; the account lifecycle is managed by the auth feature
    pub account_id: Uuid,
    pub username: String,
    pub specialization: String,
    pub bio: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.username, self.specialization)
    }
}

/// Fields for a new mentor record; availability always starts as `true`
#[derive(Debug, Clone)]
pub struct NewMentor {
    pub account_id: Uuid,
    pub specialization: String,
    pub bio: String,
}

/// Partial update; `None` leaves the column unchanged
#[derive(Debug, Clone, Default)]
pub struct MentorUpdate {
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub available: Option<bool>,
}

impl MentorUpdate {
    pub fn is_empty(&self) -> bool {
        self.specialization.is_none() && self.bio.is_none() && self.available.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_username_and_specialization() {
        let now = Utc::now();
        let mentor = Mentor {
            id: Uuid::now_v7(),
            account_id: Uuid::now_v7(),
            username: "mentor1".to_string(),
            specialization: "Software Engineering".to_string(),
            bio: "Experienced developer".to_string(),
            available: true,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(mentor.to_string(), "mentor1 - Software Engineering");
    }

    #[test]
    fn test_empty_update() {
        assert!(MentorUpdate::default().is_empty());
        assert!(!MentorUpdate {
            available: Some(false),
            ..Default::default()
        }
        .is_empty());
    }
}
