use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::{Account, AuthenticatedUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub kind: TokenKind,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signed access/refresh pair for one account
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Issues and verifies HS256 tokens signed with the configured secret
pub struct TokenService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn issue_pair(&self, account: &Account) -> Result<TokenPair> {
        let access_ttl = self.config.access_token_ttl.as_secs() as i64;
        let refresh_ttl = self.config.refresh_token_ttl.as_secs() as i64;

        Ok(TokenPair {
            access_token: self.sign(account.id, &account.username, TokenKind::Access, access_ttl)?,
            refresh_token: self.sign(
                account.id,
                &account.username,
                TokenKind::Refresh,
                refresh_ttl,
            )?,
            expires_in: access_ttl,
        })
    }

    /// Verifies signature, issuer, expiry and token kind
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = self.config.leeway.as_secs();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })?
            .claims;

        if claims.kind != expected {
            return Err(AppError::Unauthorized(match expected {
                TokenKind::Access => "Token is not an access token".to_string(),
                TokenKind::Refresh => "Token is not a refresh token".to_string(),
            }));
        }

        Ok(claims)
    }

    /// Resolves a bearer access token to the request identity
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.verify(token, TokenKind::Access)?;
        let account_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            account_id,
            username: claims.username,
        })
    }

    fn sign(&self, account_id: Uuid, username: &str, kind: TokenKind, ttl: i64) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            username: username.to_string(),
            kind,
            iss: self.config.issuer.clone(),
            iat: now,
            exp: now + ttl,
        };
        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::NewAccount;
    use crate::shared::test_helpers::test_auth_config;

    fn account() -> Account {
        Account::from_new(NewAccount {
            username: "mentor1".to_string(),
            email: "mentor@test.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            password_hash: "hash".to_string(),
        })
    }

    #[test]
    fn test_access_token_authenticates() {
        let service = TokenService::new(test_auth_config());
        let account = account();
        let pair = service.issue_pair(&account).unwrap();

        let user = service.authenticate(&pair.access_token).unwrap();
        assert_eq!(user.account_id, account.id);
        assert_eq!(user.username, "mentor1");
        assert_eq!(pair.expires_in, 300);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = TokenService::new(test_auth_config());
        let pair = service.issue_pair(&account()).unwrap();

        assert!(matches!(
            service.authenticate(&pair.refresh_token),
            Err(AppError::Unauthorized(_))
        ));
        assert!(service.verify(&pair.refresh_token, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new(test_auth_config());
        let now = Utc::now().timestamp();
        let token = service
            .encode_claims(&Claims {
                sub: Uuid::now_v7().to_string(),
                username: "mentor1".to_string(),
                kind: TokenKind::Access,
                iss: "mentorship-hub".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();

        assert!(matches!(
            service.authenticate(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let mut other_config = test_auth_config();
        other_config.jwt_secret = "another-secret-that-is-also-32-bytes-long".to_string();
        let other = TokenService::new(other_config);
        let pair = other.issue_pair(&account()).unwrap();

        let service = TokenService::new(test_auth_config());
        assert!(service.authenticate(&pair.access_token).is_err());
    }
}
