use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::database::{is_foreign_key_violation, is_unique_violation};
use crate::core::error::{AppError, Result};
use crate::features::applications::models::{Application, NewApplication, StatusChange};

use super::ApplicationRepository;

const APPLICATION_COLUMNS: &str = r#"
    id, student_id, mentor_id, first_name, last_name, course, program, motivation,
    status, feedback, consultation_date, created_at, updated_at
"#;

#[derive(Debug, FromRow)]
struct ApplicationRow {
    id: Uuid,
    student_id: Uuid,
    mentor_id: Option<Uuid>,
    first_name: String,
    last_name: String,
    course: String,
    program: String,
    motivation: String,
    status: String,
    feedback: Option<String>,
    consultation_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = AppError;

    fn try_from(row: ApplicationRow) -> Result<Self> {
        let status = row.status.parse().map_err(AppError::Internal)?;
        Ok(Application {
            id: row.id,
            student_id: row.student_id,
            mentor_id: row.mentor_id,
            first_name: row.first_name,
            last_name: row.last_name,
            course: row.course,
            program: row.program,
            motivation: row.motivation,
            status,
            feedback: row.feedback,
            consultation_date: row.consultation_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_applications(rows: Vec<ApplicationRow>) -> Result<Vec<Application>> {
    rows.into_iter().map(Application::try_from).collect()
}

pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn create(&self, new: NewApplication) -> Result<Application> {
        let application = Application::from_new(new);

        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            r#"
            INSERT INTO mentorship_applications
                (id, student_id, mentor_id, first_name, last_name, course, program, motivation,
                 status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(application.id)
        .bind(application.student_id)
        .bind(application.mentor_id)
        .bind(&application.first_name)
        .bind(&application.last_name)
        .bind(&application.course)
        .bind(&application.program)
        .bind(&application.motivation)
        .bind(application.status.as_str())
        .bind(application.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "uq_applications_pending_student") {
                return AppError::Conflict(
                    "You already have an application awaiting review".to_string(),
                );
            }
            if is_foreign_key_violation(&e) {
                return AppError::NotFound("Mentor not found".to_string());
            }
            tracing::error!("Failed to insert application: {:?}", e);
            AppError::Database(e)
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM mentorship_applications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get application by id: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(Application::try_from).transpose()
    }

    async fn list_for_student(&self, student_id: Uuid) -> Result<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM mentorship_applications \
             WHERE student_id = $1 ORDER BY created_at DESC"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list applications for student: {:?}", e);
            AppError::Database(e)
        })?;

        into_applications(rows)
    }

    async fn list_for_mentor(&self, mentor_id: Uuid) -> Result<Vec<Application>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM mentorship_applications \
             WHERE mentor_id = $1 ORDER BY created_at DESC"
        ))
        .bind(mentor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list applications for mentor: {:?}", e);
            AppError::Database(e)
        })?;

        into_applications(rows)
    }

    async fn update_status(&self, id: Uuid, change: StatusChange) -> Result<Application> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            r#"
            UPDATE mentorship_applications
            SET status = $2, feedback = $3, consultation_date = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(change.status.as_str())
        .bind(change.feedback)
        .bind(change.consultation_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update application status: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(Application::try_from)
            .transpose()?
            .ok_or_else(|| AppError::NotFound(format!("Application '{}' not found", id)))
    }
}
