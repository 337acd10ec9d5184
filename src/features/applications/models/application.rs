use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Review state of a mentorship application (stored as its variant name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ApplicationStatus::Pending),
            "Approved" => Ok(ApplicationStatus::Approved),
            "Rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("Unknown application status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Application {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({})",
            self.first_name, self.last_name, self.program, self.status
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub student_id: Uuid,
    pub mentor_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
    pub program: String,
    pub motivation: String,
}

/// Final column values written by a review; callers resolve carry-over beforehand
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: ApplicationStatus,
    pub feedback: Option<String>,
    pub consultation_date: Option<DateTime<Utc>>,
}

impl Application {
    pub fn from_new(new: NewApplication) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            student_id: new.student_id,
            mentor_id: new.mentor_id,
            first_name: new.first_name,
            last_name: new.last_name,
            course: new.course,
            program: new.program,
            motivation: new.motivation,
            status: ApplicationStatus::Pending,
            feedback: None,
            consultation_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a review decision, keeping feedback and date when not supplied.
    /// A rejection always clears the consultation date.
    pub fn review(
        &self,
        status: ApplicationStatus,
        feedback: Option<String>,
        consultation_date: Option<DateTime<Utc>>,
    ) -> StatusChange {
        let consultation_date = match status {
            ApplicationStatus::Rejected => None,
            _ => consultation_date.or(self.consultation_date),
        };
        StatusChange {
            status,
            feedback: feedback.or_else(|| self.feedback.clone()),
            consultation_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> Application {
        Application::from_new(NewApplication {
            student_id: Uuid::now_v7(),
            mentor_id: None,
            first_name: "Amina".to_string(),
            last_name: "Yusuf".to_string(),
            course: "Computer Science".to_string(),
            program: "Career Guidance".to_string(),
            motivation: String::new(),
        })
    }

    #[test]
    fn test_new_application_is_pending() {
        let app = application();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.to_string(), "Amina Yusuf - Career Guidance (Pending)");
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<ApplicationStatus>(), Ok(status));
        }
        assert!("Done".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_rejection_clears_consultation_date() {
        let mut app = application();
        app.consultation_date = Some(Utc::now());
        app.feedback = Some("Looks promising".to_string());

        let change = app.review(ApplicationStatus::Rejected, None, Some(Utc::now()));
        assert_eq!(change.consultation_date, None);
        assert_eq!(change.feedback.as_deref(), Some("Looks promising"));
    }

    #[test]
    fn test_approval_keeps_existing_date_when_not_supplied() {
        let mut app = application();
        let scheduled = Utc::now();
        app.consultation_date = Some(scheduled);

        let change = app.review(ApplicationStatus::Approved, Some("Welcome".into()), None);
        assert_eq!(change.consultation_date, Some(scheduled));
        assert_eq!(change.feedback.as_deref(), Some("Welcome"));
    }
}
