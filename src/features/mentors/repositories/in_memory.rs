use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::applications::repositories::InMemoryApplicationRepository;
use crate::features::auth::repositories::InMemoryAccountRepository;
use crate::features::mentors::models::{Mentor, MentorUpdate, NewMentor};

use super::MentorRepository;

/// Stored row; the username is joined from the account store on read
#[derive(Debug, Clone)]
struct MentorRow {
    id: Uuid,
    account_id: Uuid,
    specialization: String,
    bio: String,
    available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Joins usernames from `accounts`; deletes clear assignments in `applications`
/// the way the foreign keys do in PostgreSQL
pub struct InMemoryMentorRepository {
    accounts: Arc<InMemoryAccountRepository>,
    applications: Arc<InMemoryApplicationRepository>,
    rows: RwLock<HashMap<Uuid, MentorRow>>,
}

impl InMemoryMentorRepository {
    pub fn new(
        accounts: Arc<InMemoryAccountRepository>,
        applications: Arc<InMemoryApplicationRepository>,
    ) -> Self {
        Self {
            accounts,
            applications,
            rows: RwLock::new(HashMap::new()),
        }
    }

    async fn join(&self, row: MentorRow) -> Result<Mentor> {
        let username = self
            .accounts
            .username_of(row.account_id)
            .await
            .ok_or_else(|| {
                AppError::Internal(format!("Mentor {} references a missing account", row.id))
            })?;

        Ok(Mentor {
            id: row.id,
            account_id: row.account_id,
            username,
            specialization: row.specialization,
            bio: row.bio,
            available: row.available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl MentorRepository for InMemoryMentorRepository {
    async fn create(&self, new: NewMentor) -> Result<Mentor> {
        if !self.accounts.contains(new.account_id).await {
            return Err(AppError::NotFound(format!(
                "Account '{}' not found",
                new.account_id
            )));
        }

        let row = {
            let mut guard = self.rows.write().await;
            if guard.values().any(|r| r.account_id == new.account_id) {
                return Err(AppError::Conflict(
                    "This account already has a mentor profile".to_string(),
                ));
            }

            let now = Utc::now();
            let row = MentorRow {
                id: Uuid::now_v7(),
                account_id: new.account_id,
                specialization: new.specialization,
                bio: new.bio,
                available: true,
                created_at: now,
                updated_at: now,
            };
            guard.insert(row.id, row.clone());
            row
        };

        self.join(row).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>> {
        let row = self.rows.read().await.get(&id).cloned();
        match row {
            Some(row) => self.join(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Mentor>> {
        let row = self
            .rows
            .read()
            .await
            .values()
            .find(|r| r.account_id == account_id)
            .cloned();
        match row {
            Some(row) => self.join(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, available: Option<bool>) -> Result<Vec<Mentor>> {
        let rows: Vec<MentorRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|r| available.map_or(true, |a| r.available == a))
            .cloned()
            .collect();

        let mut mentors = Vec::with_capacity(rows.len());
        for row in rows {
            mentors.push(self.join(row).await?);
        }
        mentors.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(mentors)
    }

    async fn update(&self, id: Uuid, update: MentorUpdate) -> Result<Mentor> {
        let row = {
            let mut guard = self.rows.write().await;
            let row = guard
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))?;

            if let Some(specialization) = update.specialization {
                row.specialization = specialization;
            }
            if let Some(bio) = update.bio {
                row.bio = bio;
            }
            if let Some(available) = update.available {
                row.available = available;
            }
            row.updated_at = Utc::now();
            row.clone()
        };

        self.join(row).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let removed = self.rows.write().await.remove(&id).is_some();
        if removed {
            self.applications.unassign_mentor(id).await;
        }
        Ok(removed)
    }
}
