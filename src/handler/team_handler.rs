use crate::dto::activity_dto::ActivityStatsRes;
use crate::dto::team_dto::{TeamCreateDto, TeamMembershipDto, TeamReadDto, TeamUpdateDto};
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::response::api_response::ApiSuccessResponse;
use crate::state::team_state::TeamState;
use axum::{
    extract::{Path, State},
    Json,
};
use axum_macros::debug_handler;

pub async fn create_team(
    State(state): State<TeamState>,
    ValidatedRequest(payload): ValidatedRequest<TeamCreateDto>,
) -> Result<Json<ApiSuccessResponse<TeamReadDto>>, ApiError> {
    let team = state.team_service.create_team(payload).await?;
    Ok(Json(ApiSuccessResponse::send(team)))
}

pub async fn list_teams(
    State(state): State<TeamState>,
) -> Result<Json<ApiSuccessResponse<Vec<TeamReadDto>>>, ApiError> {
    let teams = state.team_service.list_teams().await?;
    Ok(Json(ApiSuccessResponse::send(teams)))
}

pub async fn get_team(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<TeamReadDto>>, ApiError> {
    let team = state.team_service.get_team(id).await?;
    Ok(Json(ApiSuccessResponse::send(team)))
}

pub async fn update_team(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<TeamUpdateDto>,
) -> Result<Json<ApiSuccessResponse<TeamReadDto>>, ApiError> {
    let team = state.team_service.update_team(id, payload).await?;
    Ok(Json(ApiSuccessResponse::send(team)))
}

pub async fn delete_team(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    state.team_service.delete_team(id).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}

// 入队
#[debug_handler]
pub async fn join_team(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<TeamMembershipDto>,
) -> Result<Json<ApiSuccessResponse<TeamReadDto>>, ApiError> {
    let team = state.team_service.join_team(id, payload.user_id).await?;
    Ok(Json(ApiSuccessResponse::send(team)))
}

// 退队
#[debug_handler]
pub async fn leave_team(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<TeamMembershipDto>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    state.team_service.leave_team(id, payload.user_id).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}

pub async fn team_stats(
    State(state): State<TeamState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiSuccessResponse<ActivityStatsRes>>, ApiError> {
    let stats = state.team_service.team_stats(id).await?;
    Ok(Json(ApiSuccessResponse::send(stats)))
}
