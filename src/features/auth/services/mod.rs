pub mod auth_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use token_service::{TokenKind, TokenService};
