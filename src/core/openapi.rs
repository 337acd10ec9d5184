use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::applications::{
    dtos as applications_dtos, handlers as applications_handlers, models as applications_models,
};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::mentors::{dtos as mentors_dtos, handlers as mentors_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::refresh_token,
        auth_handlers::get_current_user,
        // Mentors
        mentors_handlers::list_mentors,
        mentors_handlers::get_mentor,
        mentors_handlers::create_mentor,
        mentors_handlers::get_own_mentor,
        mentors_handlers::update_own_mentor,
        mentors_handlers::delete_own_mentor,
        // Applications
        applications_handlers::submit_application,
        applications_handlers::list_applications,
        applications_handlers::update_application_status,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::RefreshTokenRequestDto,
            auth_dtos::AccountResponseDto,
            auth_dtos::TokenPairDto,
            auth_dtos::LoginResponseDto,
            ApiResponse<auth_dtos::AccountResponseDto>,
            ApiResponse<auth_dtos::TokenPairDto>,
            ApiResponse<auth_dtos::LoginResponseDto>,
            // Mentors
            mentors_dtos::CreateMentorDto,
            mentors_dtos::UpdateMentorDto,
            mentors_dtos::MentorResponseDto,
            ApiResponse<mentors_dtos::MentorResponseDto>,
            ApiResponse<Vec<mentors_dtos::MentorResponseDto>>,
            // Applications
            applications_models::ApplicationStatus,
            applications_dtos::CreateApplicationDto,
            applications_dtos::UpdateApplicationStatusDto,
            applications_dtos::ApplicationResponseDto,
            ApiResponse<applications_dtos::ApplicationResponseDto>,
            ApiResponse<Vec<applications_dtos::ApplicationResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "mentors", description = "Mentor profiles"),
        (name = "applications", description = "Mentorship applications"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Mentorship Hub API",
        version = "0.1.0",
        description = "API documentation for the Mentorship Hub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/register/",
            "/api/auth/login/",
            "/api/auth/token/refresh/",
            "/api/auth/user/",
            "/api/mentors/",
            "/api/mentors/{id}/",
            "/api/mentors/me/",
            "/api/student/applications/",
            "/api/student/applications/{id}/update_status/",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Custom docs".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
