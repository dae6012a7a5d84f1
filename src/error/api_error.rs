use crate::error::{
    activity_error::ActivityError, db_error::DbError, team_error::TeamError,
    user_error::UserError, workout_error::WorkoutError,
};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::request_error::RequestError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    UserError(#[from] UserError),
    #[error(transparent)]
    TeamError(#[from] TeamError),
    #[error(transparent)]
    ActivityError(#[from] ActivityError),
    #[error(transparent)]
    WorkoutError(#[from] WorkoutError),
    #[error(transparent)]
    DbError(#[from] DbError),
    #[error(transparent)]
    RequestError(#[from] RequestError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UserError(error) => error.into_response(),
            ApiError::TeamError(error) => error.into_response(),
            ApiError::ActivityError(error) => error.into_response(),
            ApiError::WorkoutError(error) => error.into_response(),
            ApiError::DbError(error) => error.into_response(),
            ApiError::RequestError(error) => error.into_response(),
        }
    }
}
