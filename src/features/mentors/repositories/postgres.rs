use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::{is_foreign_key_violation, is_unique_violation};
use crate::core::error::{AppError, Result};
use crate::features::mentors::models::{Mentor, MentorUpdate, NewMentor};

use super::MentorRepository;

/// Mentor columns joined with the owning account's username (`m` / `a` aliases)
const MENTOR_SELECT: &str = r#"
    SELECT m.id, m.account_id, a.username, m.specialization, m.bio, m.available,
           m.created_at, m.updated_at
    FROM mentors m
    JOIN accounts a ON a.id = m.account_id
"#;

pub struct PgMentorRepository {
    pool: PgPool,
}

impl PgMentorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_by_id(&self, id: Uuid) -> Result<Option<Mentor>> {
        sqlx::query_as::<_, Mentor>(&format!("{MENTOR_SELECT} WHERE m.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get mentor by id: {:?}", e);
                AppError::Database(e)
            })
    }
}

#[async_trait]
impl MentorRepository for PgMentorRepository {
    async fn create(&self, new: NewMentor) -> Result<Mentor> {
        let now = Utc::now();
        let id = Uuid::now_v7();

        sqlx::query(
            r#"
            INSERT INTO mentors (id, account_id, specialization, bio, available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, TRUE, $5, $5)
            "#,
        )
        .bind(id)
        .bind(new.account_id)
        .bind(&new.specialization)
        .bind(&new.bio)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "mentors_account_id_key") {
                return AppError::Conflict("This account already has a mentor profile".to_string());
            }
            if is_foreign_key_violation(&e) {
                return AppError::NotFound(format!("Account '{}' not found", new.account_id));
            }
            tracing::error!("Failed to insert mentor: {:?}", e);
            AppError::Database(e)
        })?;

        self.fetch_one_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Mentor {} vanished after insert", id)))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Mentor>> {
        self.fetch_one_by_id(id).await
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Mentor>> {
        sqlx::query_as::<_, Mentor>(&format!("{MENTOR_SELECT} WHERE m.account_id = $1"))
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get mentor by account: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list(&self, available: Option<bool>) -> Result<Vec<Mentor>> {
        sqlx::query_as::<_, Mentor>(&format!(
            "{MENTOR_SELECT} WHERE ($1::BOOLEAN IS NULL OR m.available = $1) ORDER BY a.username"
        ))
        .bind(available)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list mentors: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, update: MentorUpdate) -> Result<Mentor> {
        let result = sqlx::query(
            r#"
            UPDATE mentors
            SET specialization = COALESCE($2, specialization),
                bio = COALESCE($3, bio),
                available = COALESCE($4, available),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.specialization)
        .bind(update.bio)
        .bind(update.available)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update mentor: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Mentor '{}' not found", id)));
        }

        self.fetch_one_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Mentor '{}' not found", id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM mentors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete mentor: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
