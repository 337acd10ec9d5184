use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::dtos::{
    ApplicationResponseDto, CreateApplicationDto, UpdateApplicationStatusDto,
};
use crate::features::applications::models::{ApplicationStatus, NewApplication};
use crate::features::applications::repositories::ApplicationRepository;
use crate::features::mentors::repositories::MentorRepository;

/// Service for submitting and reviewing mentorship applications
pub struct ApplicationService {
    applications: Arc<dyn ApplicationRepository>,
    mentors: Arc<dyn MentorRepository>,
}

impl ApplicationService {
    pub fn new(
        applications: Arc<dyn ApplicationRepository>,
        mentors: Arc<dyn MentorRepository>,
    ) -> Self {
        Self {
            applications,
            mentors,
        }
    }

    /// Submit an application as `student_id`
    pub async fn submit(
        &self,
        student_id: Uuid,
        dto: CreateApplicationDto,
    ) -> Result<ApplicationResponseDto> {
        if let Some(mentor_id) = dto.mentor_id {
            if self.mentors.find_by_id(mentor_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Mentor '{}' not found",
                    mentor_id
                )));
            }
        }

        let application = self
            .applications
            .create(NewApplication {
                student_id,
                mentor_id: dto.mentor_id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                course: dto.course,
                program: dto.program,
                motivation: dto.motivation,
            })
            .await?;

        tracing::info!(
            "Application submitted: id={}, student_id={}, mentor_id={:?}",
            application.id,
            student_id,
            application.mentor_id
        );

        Ok(application.into())
    }

    /// Applications visible to `account_id`
    ///
    /// Mentors see what is assigned to them; everyone else sees their own submissions.
    pub async fn list_for(&self, account_id: Uuid) -> Result<Vec<ApplicationResponseDto>> {
        let applications = match self.mentors.find_by_account_id(account_id).await? {
            Some(mentor) => self.applications.list_for_mentor(mentor.id).await?,
            None => self.applications.list_for_student(account_id).await?,
        };
        Ok(applications.into_iter().map(Into::into).collect())
    }

    pub async fn update_status(
        &self,
        account_id: Uuid,
        application_id: Uuid,
        dto: UpdateApplicationStatusDto,
    ) -> Result<ApplicationResponseDto> {
        let application = self
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Application '{}' not found", application_id))
            })?;

        let mentor = self.mentors.find_by_account_id(account_id).await?;
        let is_assigned = matches!(
            (&mentor, application.mentor_id),
            (Some(m), Some(assigned)) if m.id == assigned
        );
        if !is_assigned {
            return Err(AppError::Forbidden(
                "Only the assigned mentor can update this application".to_string(),
            ));
        }

        if dto.status == ApplicationStatus::Pending {
            return Err(AppError::BadRequest(
                "Status must be Approved or Rejected".to_string(),
            ));
        }

        let change = application.review(dto.status, dto.feedback, dto.consultation_date);
        let updated = self
            .applications
            .update_status(application_id, change)
            .await?;

        tracing::info!(
            "Application status updated: id={}, status={}",
            updated.id,
            updated.status
        );

        Ok(updated.into())
    }
}
