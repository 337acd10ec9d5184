use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::mentors::dtos::{
    CreateMentorDto, ListMentorsQuery, MentorResponseDto, UpdateMentorDto,
};
use crate::features::mentors::services::MentorService;
use crate::shared::types::{ApiResponse, Meta};

/// List mentors
#[utoipa::path(
    get,
    path = "/api/mentors/",
    params(ListMentorsQuery),
    responses(
        (status = 200, description = "List of mentors", body = ApiResponse<Vec<MentorResponseDto>>),
    ),
    tag = "mentors"
)]
pub async fn list_mentors(
    State(service): State<Arc<MentorService>>,
    Query(query): Query<ListMentorsQuery>,
) -> Result<Json<ApiResponse<Vec<MentorResponseDto>>>> {
    let mentors = service.list(query.available).await?;
    let total = mentors.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(mentors),
        None,
        Some(Meta { total }),
    )))
}

/// Get mentor by id
#[utoipa::path(
    get,
    path = "/api/mentors/{id}/",
    params(
        ("id" = Uuid, Path, description = "Mentor id")
    ),
    responses(
        (status = 200, description = "Mentor found", body = ApiResponse<MentorResponseDto>),
        (status = 404, description = "Mentor not found")
    ),
    tag = "mentors"
)]
pub async fn get_mentor(
    State(service): State<Arc<MentorService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    let mentor = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(mentor), None, None)))
}

/// Create a mentor profile for the current user
#[utoipa::path(
    post,
    path = "/api/mentors/",
    request_body = CreateMentorDto,
    responses(
        (status = 201, description = "Mentor profile created", body = ApiResponse<MentorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Mentor profile already exists")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_mentor(
    user: AuthenticatedUser,
    State(service): State<Arc<MentorService>>,
    AppJson(dto): AppJson<CreateMentorDto>,
) -> Result<(StatusCode, Json<ApiResponse<MentorResponseDto>>)> {
    dto.validate()?;

    let mentor = service.create_for_account(user.account_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(mentor), None, None)),
    ))
}

/// Get the current user's mentor profile
#[utoipa::path(
    get,
    path = "/api/mentors/me/",
    responses(
        (status = 200, description = "Mentor profile", body = ApiResponse<MentorResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No mentor profile")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_own_mentor(
    user: AuthenticatedUser,
    State(service): State<Arc<MentorService>>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    let mentor = service.get_own(user.account_id).await?;
    Ok(Json(ApiResponse::success(Some(mentor), None, None)))
}

/// Update the current user's mentor profile
#[utoipa::path(
    patch,
    path = "/api/mentors/me/",
    request_body = UpdateMentorDto,
    responses(
        (status = 200, description = "Mentor profile updated", body = ApiResponse<MentorResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No mentor profile")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_own_mentor(
    user: AuthenticatedUser,
    State(service): State<Arc<MentorService>>,
    AppJson(dto): AppJson<UpdateMentorDto>,
) -> Result<Json<ApiResponse<MentorResponseDto>>> {
    dto.validate()?;

    let mentor = service.update_own(user.account_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(mentor), None, None)))
}

/// Delete the current user's mentor profile
#[utoipa::path(
    delete,
    path = "/api/mentors/me/",
    responses(
        (status = 204, description = "Mentor profile deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No mentor profile")
    ),
    tag = "mentors",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_own_mentor(
    user: AuthenticatedUser,
    State(service): State<Arc<MentorService>>,
) -> Result<StatusCode> {
    service.delete_own(user.account_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
