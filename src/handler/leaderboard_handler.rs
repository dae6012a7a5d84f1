use crate::dto::leaderboard_dto::{LeaderboardEntryRes, LeaderboardQuery, RecomputeReq};
use crate::error::request_error::RequestError;
use crate::error::{api_error::ApiError, request_error::ValidatedRequest};
use crate::model::leaderboard::Period;
use crate::response::api_response::ApiSuccessResponse;
use crate::state::leaderboard_state::LeaderboardState;
use axum::{
    extract::{Query, State},
    Json,
};
use axum_macros::debug_handler;

pub async fn list_leaderboard(
    State(state): State<LeaderboardState>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<ApiSuccessResponse<Vec<LeaderboardEntryRes>>>, ApiError> {
    let entries = state.leaderboard_service.list(params.period).await?;
    Ok(Json(ApiSuccessResponse::send(entries)))
}

// 同步触发的整榜重算
#[debug_handler]
pub async fn recompute_leaderboard(
    State(state): State<LeaderboardState>,
    ValidatedRequest(payload): ValidatedRequest<RecomputeReq>,
) -> Result<Json<ApiSuccessResponse<()>>, ApiError> {
    let period = Period::from_name(&payload.period).ok_or_else(|| {
        RequestError::CommonError(format!("unknown period `{}`", payload.period))
    })?;
    state.leaderboard_service.recompute(period).await?;
    Ok(Json(ApiSuccessResponse::from_with_nodata()))
}
