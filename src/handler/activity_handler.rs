use std::collections::HashMap;

use crate::dto::activity_dto::{
    ActivityCreateDto, ActivityListQuery, ActivityReadDto, ActivityStatsRes,
};
use crate::error::request_error::RequestError;
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::response::api_response::ApiSuccessResponse;
use crate::state::activity_state::ActivityState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

pub async fn create_activity(
    State(state): State<ActivityState>,
    ValidatedRequest(payload): ValidatedRequest<ActivityCreateDto>,
) -> Result<Json<ApiSuccessResponse<ActivityReadDto>>, ApiError> {
    let activity = state.activity_service.create_activity(payload).await?;
    Ok(Json(ApiSuccessResponse::send(activity)))
}

pub async fn list_activities(
    State(state): State<ActivityState>,
    Query(params): Query<ActivityListQuery>,
) -> Result<Json<ApiSuccessResponse<Vec<ActivityReadDto>>>, ApiError> {
    let activities = state.activity_service.list_activities(params.user_id).await?;
    Ok(Json(ApiSuccessResponse::send(activities)))
}

pub async fn get_activity(
    State(state): State<ActivityState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<ActivityReadDto>>, ApiError> {
    let activity = state.activity_service.get_activity(id).await?;
    Ok(Json(ApiSuccessResponse::send(activity)))
}

pub async fn delete_activity(
    State(state): State<ActivityState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    state.activity_service.delete_activity(id).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}

pub async fn activity_stats(
    State(state): State<ActivityState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ApiSuccessResponse<ActivityStatsRes>>, ApiError> {
    let user_id = params
        .get("user_id")
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| RequestError::CommonError("user_id is required".to_string()))?;
    let stats = state.activity_service.user_stats(user_id).await?;
    Ok(Json(ApiSuccessResponse::send(stats)))
}
