use std::sync::Arc;

use sqlx::PgPool;

use crate::core::config::AuthConfig;
use crate::features::applications::repositories::{
    InMemoryApplicationRepository, PgApplicationRepository,
};
use crate::features::applications::ApplicationService;
use crate::features::auth::repositories::{InMemoryAccountRepository, PgAccountRepository};
use crate::features::auth::{AuthService, TokenService};
use crate::features::mentors::repositories::{InMemoryMentorRepository, PgMentorRepository};
use crate::features::mentors::MentorService;

/// Services shared by the HTTP routes, each held behind an `Arc`
#[derive(Clone)]
pub struct AppServices {
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub mentors: Arc<MentorService>,
    pub applications: Arc<ApplicationService>,
}

impl AppServices {
    /// Services backed by PostgreSQL
    pub fn postgres(pool: PgPool, auth_config: AuthConfig) -> Self {
        let tokens = Arc::new(TokenService::new(auth_config));
        let accounts = Arc::new(PgAccountRepository::new(pool.clone()));
        let mentors = Arc::new(PgMentorRepository::new(pool.clone()));
        let applications = Arc::new(PgApplicationRepository::new(pool));

        Self {
            auth: Arc::new(AuthService::new(accounts, Arc::clone(&tokens))),
            mentors: Arc::new(MentorService::new(mentors.clone())),
            applications: Arc::new(ApplicationService::new(applications, mentors)),
            tokens,
        }
    }

    /// Services backed by process-local maps; nothing survives a restart
    pub fn in_memory(auth_config: AuthConfig) -> Self {
        let tokens = Arc::new(TokenService::new(auth_config));
        let accounts = Arc::new(InMemoryAccountRepository::new());
        let applications = Arc::new(InMemoryApplicationRepository::new());
        let mentors = Arc::new(InMemoryMentorRepository::new(
            Arc::clone(&accounts),
            Arc::clone(&applications),
        ));

        Self {
            auth: Arc::new(AuthService::new(accounts, Arc::clone(&tokens))),
            mentors: Arc::new(MentorService::new(mentors.clone())),
            applications: Arc::new(ApplicationService::new(applications, mentors)),
            tokens,
        }
    }
}
