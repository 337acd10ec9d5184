//! Mentor records: one per account, publicly listable.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/mentors/` | No | List mentors (`?available=`) |
//! | GET | `/api/mentors/{id}/` | No | Get mentor |
//! | POST | `/api/mentors/` | Yes | Create own mentor profile |
//! | GET | `/api/mentors/me/` | Yes | Own mentor profile |
//! | PATCH | `/api/mentors/me/` | Yes | Update own mentor profile |
//! | DELETE | `/api/mentors/me/` | Yes | Delete own mentor profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::MentorService;
