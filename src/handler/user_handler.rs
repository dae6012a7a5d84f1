use crate::dto::user_dto::{
    ProfileReadDto, ProfileUpsertDto, UserCreateDto, UserReadDto, UserUpdateDto,
};
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::response::api_response::ApiSuccessResponse;
use crate::state::user_state::UserState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn create_user(
    State(state): State<UserState>,
    ValidatedRequest(payload): ValidatedRequest<UserCreateDto>,
) -> Result<Json<ApiSuccessResponse<UserReadDto>>, ApiError> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(ApiSuccessResponse::send(user)))
}

pub async fn list_users(
    State(state): State<UserState>,
) -> Result<Json<ApiSuccessResponse<Vec<UserReadDto>>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ApiSuccessResponse::send(users)))
}

pub async fn get_user(
    State(state): State<UserState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<UserReadDto>>, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiSuccessResponse::send(user)))
}

pub async fn update_user(
    State(state): State<UserState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<UserUpdateDto>,
) -> Result<Json<ApiSuccessResponse<UserReadDto>>, ApiError> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(ApiSuccessResponse::send(user)))
}

pub async fn delete_user(
    State(state): State<UserState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    state.user_service.delete_user(id).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}

pub async fn get_profile(
    State(state): State<UserState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<ProfileReadDto>>, ApiError> {
    let profile = state.user_service.get_profile(user_id).await?;
    Ok(Json(ApiSuccessResponse::send(profile)))
}

pub async fn upsert_profile(
    State(state): State<UserState>,
    Path(user_id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<ProfileUpsertDto>,
) -> Result<Json<ApiSuccessResponse<ProfileReadDto>>, ApiError> {
    let profile = state.user_service.upsert_profile(user_id, payload).await?;
    Ok(Json(ApiSuccessResponse::send(profile)))
}
