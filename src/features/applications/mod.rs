//! Mentorship applications submitted by students and reviewed by mentors.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/student/applications/` | Yes | Submit an application |
//! | GET | `/api/student/applications/` | Yes | Assigned (mentors) or own (students) applications |
//! | POST | `/api/student/applications/{id}/update_status/` | Yes | Approve or reject |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ApplicationService;
