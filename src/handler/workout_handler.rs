use std::collections::HashMap;

use crate::dto::workout_dto::{
    DifficultyQuery, WorkoutCreateDto, WorkoutReadDto, WorkoutUpdateDto,
};
use crate::error::request_error::RequestError;
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::response::api_response::ApiSuccessResponse;
use crate::state::workout_state::WorkoutState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

pub async fn create_workout(
    State(state): State<WorkoutState>,
    ValidatedRequest(payload): ValidatedRequest<WorkoutCreateDto>,
) -> Result<Json<ApiSuccessResponse<WorkoutReadDto>>, ApiError> {
    let workout = state.workout_service.create_workout(payload).await?;
    Ok(Json(ApiSuccessResponse::send(workout)))
}

pub async fn list_workouts(
    State(state): State<WorkoutState>,
) -> Result<Json<ApiSuccessResponse<Vec<WorkoutReadDto>>>, ApiError> {
    let workouts = state.workout_service.list_workouts().await?;
    Ok(Json(ApiSuccessResponse::send(workouts)))
}

pub async fn get_workout(
    State(state): State<WorkoutState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<WorkoutReadDto>>, ApiError> {
    let workout = state.workout_service.get_workout(id).await?;
    Ok(Json(ApiSuccessResponse::send(workout)))
}

pub async fn update_workout(
    State(state): State<WorkoutState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<WorkoutUpdateDto>,
) -> Result<Json<ApiSuccessResponse<WorkoutReadDto>>, ApiError> {
    let workout = state.workout_service.update_workout(id, payload).await?;
    Ok(Json(ApiSuccessResponse::send(workout)))
}

pub async fn delete_workout(
    State(state): State<WorkoutState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    state.workout_service.delete_workout(id).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}

/// 档案缺失时静默按 beginner 推荐
pub async fn recommended_workouts(
    State(state): State<WorkoutState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiSuccessResponse<Vec<WorkoutReadDto>>>, ApiError> {
    let user_id = params
        .get("user_id")
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| RequestError::CommonError("user_id is required".to_string()))?;
    let workouts = state.workout_service.recommended(user_id).await?;
    Ok(Json(ApiSuccessResponse::send(workouts)))
}

pub async fn workouts_by_difficulty(
    State(state): State<WorkoutState>,
    Query(params): Query<DifficultyQuery>,
) -> Result<Json<ApiSuccessResponse<Vec<WorkoutReadDto>>>, ApiError> {
    let workouts = state.workout_service.by_difficulty(params.difficulty).await?;
    Ok(Json(ApiSuccessResponse::send(workouts)))
}
