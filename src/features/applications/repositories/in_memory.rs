use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::models::{
    Application, ApplicationStatus, NewApplication, StatusChange,
};

use super::ApplicationRepository;

/// Process-local store; mentor existence is checked by the caller
#[derive(Default)]
pub struct InMemoryApplicationRepository {
    rows: RwLock<HashMap<Uuid, Application>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors `ON DELETE SET NULL` on `mentorship_applications.mentor_id`
    pub async fn unassign_mentor(&self, mentor_id: Uuid) {
        let mut guard = self.rows.write().await;
        for application in guard.values_mut() {
            if application.mentor_id == Some(mentor_id) {
                application.mentor_id = None;
            }
        }
    }

    async fn list_where(&self, keep: impl Fn(&Application) -> bool) -> Vec<Application> {
        let mut applications: Vec<Application> = self
            .rows
            .read()
            .await
            .values()
            .filter(|&a| keep(a))
            .cloned()
            .collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        applications
    }
}

/// Assigned and still `Pending`; unassigned applications never block a new one
fn awaits_review(application: &Application, student_id: Uuid) -> bool {
    application.student_id == student_id
        && application.status == ApplicationStatus::Pending
        && application.mentor_id.is_some()
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(&self, new: NewApplication) -> Result<Application> {
        let mut guard = self.rows.write().await;
        if new.mentor_id.is_some() && guard.values().any(|a| awaits_review(a, new.student_id)) {
            return Err(AppError::Conflict(
                "You already have an application awaiting review".to_string(),
            ));
        }

        let application = Application::from_new(new);
        guard.insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Application>> {
        Ok(self.list_where(|a| a.student_id == student_id).await)
    }

    async fn list_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<Application>> {
        Ok(self.list_where(|a| a.mentor_id == Some(mentor_id)).await)
    }

    async fn update_status(&self, id: Uuid, change: StatusChange) -> Result<Application> {
        let mut guard = self.rows.write().await;
        let application = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Application '{}' not found", id)))?;

        application.status = change.status;
        application.feedback = change.feedback;
        application.consultation_date = change.consultation_date;
        application.updated_at = Utc::now();
        Ok(application.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_application(student_id: Uuid, mentor_id: Option<Uuid>) -> NewApplication {
        NewApplication {
            student_id,
            mentor_id,
            first_name: "Amina".to_string(),
            last_name: "Yusuf".to_string(),
            course: "Computer Science".to_string(),
            program: "Career Guidance".to_string(),
            motivation: String::new(),
        }
    }

    fn rejection() -> StatusChange {
        StatusChange {
            status: ApplicationStatus::Rejected,
            feedback: None,
            consultation_date: None,
        }
    }

    #[tokio::test]
    async fn test_second_pending_application_conflicts() {
        let repo = InMemoryApplicationRepository::new();
        let student = Uuid::now_v7();
        let mentor = Some(Uuid::now_v7());

        let first = repo.create(new_application(student, mentor)).await.unwrap();
        let err = repo.create(new_application(student, mentor)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        repo.update_status(first.id, rejection()).await.unwrap();

        assert!(repo.create(new_application(student, mentor)).await.is_ok());
        assert_eq!(repo.list_for_student(student).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unassigned_application_does_not_block() {
        let repo = InMemoryApplicationRepository::new();
        let student = Uuid::now_v7();

        repo.create(new_application(student, None)).await.unwrap();
        repo.create(new_application(student, None)).await.unwrap();
        repo.create(new_application(student, Some(Uuid::now_v7())))
            .await
            .unwrap();

        assert_eq!(repo.list_for_student(student).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unassign_mentor_releases_pending_slot() {
        let repo = InMemoryApplicationRepository::new();
        let student = Uuid::now_v7();
        let mentor_id = Uuid::now_v7();

        let first = repo
            .create(new_application(student, Some(mentor_id)))
            .await
            .unwrap();
        repo.unassign_mentor(mentor_id).await;

        let stored = repo.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(stored.mentor_id, None);
        assert!(repo.list_for_mentor(mentor_id).await.unwrap().is_empty());
        assert!(repo
            .create(new_application(student, Some(Uuid::now_v7())))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_update_unknown_application_is_not_found() {
        let repo = InMemoryApplicationRepository::new();
        let err = repo
            .update_status(Uuid::now_v7(), rejection())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
