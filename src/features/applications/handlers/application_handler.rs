use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::applications::dtos::{
    ApplicationResponseDto, CreateApplicationDto, UpdateApplicationStatusDto,
};
use crate::features::applications::services::ApplicationService;
use crate::features::auth::models::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a mentorship application
#[utoipa::path(
    post,
    path = "/api/student/applications/",
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Mentor not found"),
        (status = 409, description = "An application is already pending")
    ),
    tag = "applications",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn submit_application(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    AppJson(dto): AppJson<CreateApplicationDto>,
) -> Result<(StatusCode, Json<ApiResponse<ApplicationResponseDto>>)> {
    dto.validate()?;

    let application = service.submit(user.account_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(application),
            Some("Application submitted successfully".to_string()),
            None,
        )),
    ))
}

/// List applications visible to the current user
#[utoipa::path(
    get,
    path = "/api/student/applications/",
    responses(
        (status = 200, description = "Applications", body = ApiResponse<Vec<ApplicationResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "applications",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_applications(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
) -> Result<Json<ApiResponse<Vec<ApplicationResponseDto>>>> {
    let applications = service.list_for(user.account_id).await?;
    let total = applications.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(applications),
        None,
        Some(Meta { total }),
    )))
}

/// Approve or reject an application (assigned mentor only)
#[utoipa::path(
    post,
    path = "/api/student/applications/{id}/update_status/",
    params(
        ("id" = Uuid, Path, description = "Application id")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Application updated", body = ApiResponse<ApplicationResponseDto>),
        (status = 400, description = "Invalid status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the assigned mentor"),
        (status = 404, description = "Application not found")
    ),
    tag = "applications",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_application_status(
    user: AuthenticatedUser,
    State(service): State<Arc<ApplicationService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateApplicationStatusDto>,
) -> Result<Json<ApiResponse<ApplicationResponseDto>>> {
    dto.validate()?;

    let application = service.update_status(user.account_id, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(application),
        Some("Application status updated".to_string()),
        None,
    )))
}
