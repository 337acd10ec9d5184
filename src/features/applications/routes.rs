use crate::features::applications::handlers;
use crate::features::applications::services::ApplicationService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Protected application routes (require JWT authentication)
pub fn protected_routes(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route(
            "/api/student/applications/",
            get(handlers::list_applications).post(handlers::submit_application),
        )
        .route(
            "/api/student/applications/{id}/update_status/",
            post(handlers::update_application_status),
        )
        .with_state(service)
}
