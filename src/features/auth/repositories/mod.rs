//! Account storage behind a repository trait.
//!
//! `PgAccountRepository` backs deployments; `InMemoryAccountRepository` backs tests
//! and local runs without `DATABASE_URL`. Both reject duplicate usernames at insert.

mod in_memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::models::{Account, NewAccount};

pub use in_memory::InMemoryAccountRepository;
pub use postgres::PgAccountRepository;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account. A taken username yields a `username` validation error.
    async fn create_account(&self, new: NewAccount) -> Result<Account>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;
}
