use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::database::is_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Account, NewAccount};
use crate::shared::constants::MSG_USERNAME_TAKEN;

use super::AccountRepository;

const ACCOUNT_COLUMNS: &str =
    "id, username, email, first_name, last_name, password_hash, is_active, date_joined";

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create_account(&self, new: NewAccount) -> Result<Account> {
        let account = Account::from_new(new);

        sqlx::query_as::<_, Account>(&format!(
            r#"
            INSERT INTO accounts (id, username, email, first_name, last_name, password_hash, is_active, date_joined)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(account.id)
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.password_hash)
        .bind(account.is_active)
        .bind(account.date_joined)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "accounts_username_key") {
                return AppError::field("username", MSG_USERNAME_TAKEN);
            }
            tracing::error!("Failed to insert account: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get account by username: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get account by id: {:?}", e);
            AppError::Database(e)
        })
    }
}
