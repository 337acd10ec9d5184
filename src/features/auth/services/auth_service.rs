use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AccountResponseDto, LoginRequestDto, LoginResponseDto, RefreshTokenRequestDto,
    RegisterRequestDto, TokenPairDto,
};
use crate::features::auth::models::{Account, AuthenticatedUser, NewAccount};
use crate::features::auth::password::{hash_password_blocking, verify_password_hash_blocking};
use crate::features::auth::repositories::AccountRepository;
use crate::features::auth::services::token_service::{TokenKind, TokenPair, TokenService};
use crate::shared::constants::{MSG_INVALID_CREDENTIALS, MSG_USERNAME_TAKEN};

const TOKEN_TYPE: &str = "Bearer";

/// Service for authentication operations (register, login, refresh)
pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(accounts: Arc<dyn AccountRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            accounts,
            token_service,
        }
    }

    /// Register a new account from an already-validated request
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AccountResponseDto> {
        if self.accounts.find_by_username(&dto.username).await?.is_some() {
            return Err(AppError::field("username", MSG_USERNAME_TAKEN));
        }

        let account = self
            .create_account(
                dto.username,
                dto.email,
                dto.first_name,
                dto.last_name,
                dto.password,
            )
            .await?;

        tracing::info!(
            "Account registered: id={}, username={}",
            account.id,
            account.username
        );

        Ok(account.into())
    }

    /// Hash `password` and insert the account; the store enforces username uniqueness
    pub async fn create_account(
        &self,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password: String,
    ) -> Result<Account> {
        let password_hash = hash_password_blocking(password).await?;

        self.accounts
            .create_account(NewAccount {
                username,
                email,
                first_name,
                last_name,
                password_hash,
            })
            .await
    }

    /// Login with username and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let account = self
            .accounts
            .find_by_username(&dto.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string()))?;

        let password_valid =
            verify_password_hash_blocking(dto.password, account.password_hash.clone()).await;
        if !password_valid {
            tracing::info!("Failed login attempt for username={}", account.username);
            return Err(AppError::Unauthorized(MSG_INVALID_CREDENTIALS.to_string()));
        }

        if !account.is_active {
            return Err(AppError::Forbidden("Account is inactive".to_string()));
        }

        let pair = self.token_service.issue_pair(&account)?;

        Ok(LoginResponseDto {
            access: pair.access_token,
            refresh: pair.refresh_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: pair.expires_in,
            user: account.into(),
        })
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(&self, dto: RefreshTokenRequestDto) -> Result<TokenPairDto> {
        let claims = self.token_service.verify(&dto.refresh, TokenKind::Refresh)?;
        let account_id = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .filter(|a| a.is_active)
            .ok_or_else(|| AppError::Unauthorized("Account is no longer available".to_string()))?;

        Ok(pair_to_dto(self.token_service.issue_pair(&account)?))
    }

    /// Get current account (for /auth/user endpoint)
    pub async fn get_current_user(&self, user: AuthenticatedUser) -> Result<AccountResponseDto> {
        self.accounts
            .find_by_id(user.account_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.accounts.find_by_username(username).await
    }
}

fn pair_to_dto(pair: TokenPair) -> TokenPairDto {
    TokenPairDto {
        access: pair.access_token,
        refresh: pair.refresh_token,
        token_type: TOKEN_TYPE.to_string(),
        expires_in: pair.expires_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::password::{hash_password, verify_password_hash};
    use uuid::Uuid;
    use crate::features::auth::repositories::InMemoryAccountRepository;
    use crate::shared::test_helpers::test_auth_config;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(TokenService::new(test_auth_config())),
        )
    }

    fn register_dto(username: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "securepass123".to_string(),
            password2: "securepass123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_only_a_hash() {
        let service = service();
        let created = service.register(register_dto("testuser")).await.unwrap();
        assert_eq!(created.username, "testuser");

        let stored = service.find_by_username("testuser").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "securepass123");
        assert!(verify_password_hash("securepass123", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_duplicate_registration_fails() {
        let service = service();
        service.register(register_dto("testuser")).await.unwrap();

        let err = service.register(register_dto("testuser")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_and_refresh() {
        let service = service();
        service.register(register_dto("testuser")).await.unwrap();

        let login = service
            .login(LoginRequestDto {
                username: "testuser".to_string(),
                password: "securepass123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(login.token_type, "Bearer");
        assert_eq!(login.user.username, "testuser");

        let refreshed = service
            .refresh_token(RefreshTokenRequestDto {
                refresh: login.refresh.clone(),
            })
            .await
            .unwrap();
        assert!(!refreshed.access.is_empty());

        // An access token cannot be used as a refresh token
        let err = service
            .refresh_token(RefreshTokenRequestDto {
                refresh: login.access,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_or_unknown_user() {
        let service = service();
        service.register(register_dto("testuser")).await.unwrap();

        for (username, password) in [("testuser", "wrongpass123"), ("nobody", "securepass123")] {
            let err = service
                .login(LoginRequestDto {
                    username: username.to_string(),
                    password: password.to_string(),
                })
                .await
                .unwrap_err();
            match err {
                AppError::Unauthorized(msg) => assert_eq!(msg, MSG_INVALID_CREDENTIALS),
                other => panic!("expected unauthorized, got {:?}", other),
            }
        }
    }

    /// Serves one fixed account, which lets tests reach states registration never creates
    struct SingleAccount(Account);

    #[async_trait::async_trait]
    impl AccountRepository for SingleAccount {
        async fn create_account(&self, _new: NewAccount) -> Result<Account> {
            Err(AppError::Internal("read-only repository".to_string()))
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
            Ok(Some(self.0.clone()).filter(|a| a.username == username))
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
            Ok(Some(self.0.clone()).filter(|a| a.id == id))
        }
    }

    fn inactive_account() -> Account {
        let mut account = Account::from_new(NewAccount {
            username: "dormant".to_string(),
            email: "dormant@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            password_hash: hash_password("securepass123").unwrap(),
        });
        account.is_active = false;
        account
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_log_in() {
        let tokens = Arc::new(TokenService::new(test_auth_config()));
        let service = AuthService::new(Arc::new(SingleAccount(inactive_account())), tokens);

        let err = service
            .login(LoginRequestDto {
                username: "dormant".to_string(),
                password: "securepass123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_refresh() {
        let account = inactive_account();
        let tokens = Arc::new(TokenService::new(test_auth_config()));
        let refresh = tokens.issue_pair(&account).unwrap().refresh_token;
        let service = AuthService::new(Arc::new(SingleAccount(account)), tokens);

        let err = service
            .refresh_token(RefreshTokenRequestDto { refresh })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
