use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Account, NewAccount};
use crate::shared::constants::MSG_USERNAME_TAKEN;

use super::AccountRepository;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Username of the account with `id`, for joins from other in-memory stores
    pub async fn username_of(&self, id: Uuid) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(&id)
            .map(|a| a.username.clone())
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.accounts.read().await.contains_key(&id)
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create_account(&self, new: NewAccount) -> Result<Account> {
        // Uniqueness is checked under the write lock so concurrent inserts serialize
        let mut guard = self.accounts.write().await;
        if guard.values().any(|a| a.username == new.username) {
            return Err(AppError::field("username", MSG_USERNAME_TAKEN));
        }

        let account = Account::from_new(new);
        guard.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(username: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            first_name: String::new(),
            last_name: String::new(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_username() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create_account(new_account("alice")).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(found.is_active);
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let repo = InMemoryAccountRepository::new();
        repo.create_account(new_account("alice")).await.unwrap();

        let err = repo.create_account(new_account("alice")).await.unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors, vec![format!("username: {}", MSG_USERNAME_TAKEN)]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_username_of() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create_account(new_account("carol")).await.unwrap();

        assert_eq!(repo.username_of(created.id).await.as_deref(), Some("carol"));
        assert_eq!(repo.username_of(Uuid::now_v7()).await, None);
    }
}
