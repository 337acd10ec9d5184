use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;

use crate::core::middleware;
use crate::core::state::AppServices;
use crate::features::applications::routes as applications_routes;
use crate::features::auth::routes as auth_routes;
use crate::features::mentors::routes as mentors_routes;

/// Simple health check endpoint (no auth required)
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes without the outer layers (CORS, request id, tracing, Swagger)
pub fn create_router(services: &AppServices) -> Router {
    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&services.auth)))
        .merge(mentors_routes::protected_routes(Arc::clone(
            &services.mentors,
        )))
        .merge(applications_routes::protected_routes(Arc::clone(
            &services.applications,
        )))
        .route_layer(from_fn_with_state(
            Arc::clone(&services.tokens),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(mentors_routes::public_routes(Arc::clone(&services.mentors)));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .route("/health", get(health_check))
}
