use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::mentors::dtos::{CreateMentorDto, MentorResponseDto, UpdateMentorDto};
use crate::features::mentors::models::{Mentor, MentorUpdate, NewMentor};
use crate::features::mentors::repositories::MentorRepository;

/// Service for mentor record operations
pub struct MentorService {
    mentors: Arc<dyn MentorRepository>,
}

impl MentorService {
    pub fn new(mentors: Arc<dyn MentorRepository>) -> Self {
        Self { mentors }
    }

    /// Create a mentor record for an existing account
    ///
    /// Specialization and bio are stored as given; availability starts as `true`.
    pub async fn create(&self, account_id: Uuid, specialization: &str, bio: &str) -> Result<Mentor> {
        let mentor = self
            .mentors
            .create(NewMentor {
                account_id,
                specialization: specialization.to_string(),
                bio: bio.to_string(),
            })
            .await?;

        tracing::info!("Mentor created: id={}, display={}", mentor.id, mentor);

        Ok(mentor)
    }

    pub async fn create_for_account(
        &self,
        account_id: Uuid,
        dto: CreateMentorDto,
    ) -> Result<MentorResponseDto> {
        self.create(account_id, &dto.specialization, &dto.bio)
            .await
            .map(Into::into)
    }

    pub async fn list(&self, available: Option<bool>) -> Result<Vec<MentorResponseDto>> {
        let mentors = self.mentors.list(available).await?;
        Ok(mentors.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<MentorResponseDto> {
        self.mentors
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))
    }

    /// Mentor record owned by `account_id`, if any
    pub async fn find_for_account(&self, account_id: Uuid) -> Result<Option<Mentor>> {
        self.mentors.find_by_account_id(account_id).await
    }

    pub async fn get_own(&self, account_id: Uuid) -> Result<MentorResponseDto> {
        self.require_own(account_id).await.map(Into::into)
    }

    pub async fn update_own(
        &self,
        account_id: Uuid,
        dto: UpdateMentorDto,
    ) -> Result<MentorResponseDto> {
        let mentor = self.require_own(account_id).await?;
        let update: MentorUpdate = dto.into();
        if update.is_empty() {
            return Ok(mentor.into());
        }

        let updated = self.mentors.update(mentor.id, update).await?;
        tracing::info!(
            "Mentor updated: id={}, available={}",
            updated.id,
            updated.available
        );
        Ok(updated.into())
    }

    pub async fn delete_own(&self, account_id: Uuid) -> Result<()> {
        let mentor = self.require_own(account_id).await?;
        if !self.mentors.delete(mentor.id).await? {
            return Err(AppError::NotFound("Mentor profile not found".to_string()));
        }
        tracing::info!("Mentor deleted: id={}", mentor.id);
        Ok(())
    }

    async fn require_own(&self, account_id: Uuid) -> Result<Mentor> {
        self.mentors
            .find_by_account_id(account_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mentor profile not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::applications::repositories::InMemoryApplicationRepository;
    use crate::features::auth::models::NewAccount;
    use crate::features::auth::repositories::{AccountRepository, InMemoryAccountRepository};
    use crate::features::mentors::repositories::InMemoryMentorRepository;
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;

    async fn setup() -> (Arc<InMemoryAccountRepository>, MentorService) {
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let mentors = Arc::new(InMemoryMentorRepository::new(
            Arc::clone(&accounts),
            Arc::new(InMemoryApplicationRepository::new()),
        ));
        (accounts, MentorService::new(mentors))
    }

    async fn create_account(accounts: &InMemoryAccountRepository, username: &str) -> Uuid {
        accounts
            .create_account(NewAccount {
                username: username.to_string(),
                email: "mentor@test.com".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_mentor() {
        let (accounts, service) = setup().await;
        let account_id = create_account(&accounts, "mentor1").await;

        let mentor = service
            .create(account_id, "Software Engineering", "Experienced developer")
            .await
            .unwrap();

        assert_eq!(mentor.to_string(), "mentor1 - Software Engineering");
        assert!(mentor.available);
    }

    #[tokio::test]
    async fn test_any_specialization_defaults_to_available() {
        let (accounts, service) = setup().await;

        for i in 0..10 {
            let username = format!("mentor_{}", i);
            let account_id = create_account(&accounts, &username).await;
            let specialization: String = Word().fake();
            let bio: String = Sentence(3..8).fake();

            let mentor = service.create(account_id, &specialization, &bio).await.unwrap();

            assert!(mentor.available);
            assert_eq!(mentor.bio, bio);
            assert_eq!(mentor.to_string(), format!("{} - {}", username, specialization));
        }
    }

    #[tokio::test]
    async fn test_second_mentor_for_same_account_conflicts() {
        let (accounts, service) = setup().await;
        let account_id = create_account(&accounts, "mentor1").await;
        service.create(account_id, "Data Science", "").await.unwrap();

        let err = service.create(account_id, "Design", "").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unknown_account_is_not_found() {
        let (_accounts, service) = setup().await;

        let err = service
            .create(Uuid::now_v7(), "Design", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_and_list_by_availability() {
        let (accounts, service) = setup().await;
        let first = create_account(&accounts, "alice").await;
        let second = create_account(&accounts, "bob").await;
        service.create(first, "Mathematics", "").await.unwrap();
        service.create(second, "Physics", "").await.unwrap();

        let updated = service
            .update_own(
                second,
                UpdateMentorDto {
                    available: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.available);
        assert_eq!(updated.specialization, "Physics");

        let available = service.list(Some(true)).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].username, "alice");

        let all = service.list(None).await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_delete_own() {
        let (accounts, service) = setup().await;
        let account_id = create_account(&accounts, "mentor1").await;
        service.create(account_id, "Design", "").await.unwrap();

        service.delete_own(account_id).await.unwrap();
        assert!(service.find_for_account(account_id).await.unwrap().is_none());
        assert!(matches!(
            service.delete_own(account_id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
