use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::mentors::handlers;
use crate::features::mentors::services::MentorService;

/// Public mentor directory
pub fn public_routes(service: Arc<MentorService>) -> Router {
    Router::new()
        .route("/api/mentors/", get(handlers::list_mentors))
        .route("/api/mentors/{id}/", get(handlers::get_mentor))
        .with_state(service)
}

/// Mentor profile management for the authenticated account
pub fn protected_routes(service: Arc<MentorService>) -> Router {
    Router::new()
        .route("/api/mentors/", post(handlers::create_mentor))
        .route(
            "/api/mentors/me/",
            get(handlers::get_own_mentor)
                .patch(handlers::update_own_mentor)
                .delete(handlers::delete_own_mentor),
        )
        .with_state(service)
}
