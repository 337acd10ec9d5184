//! Account registration and token authentication.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/register/` | No | Register a new account |
//! | POST | `/api/auth/login/` | No | Exchange credentials for a token pair |
//! | POST | `/api/auth/token/refresh/` | No | Exchange a refresh token for a new pair |
//! | GET | `/api/auth/user/` | Yes | Current account |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
