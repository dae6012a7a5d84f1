use crate::error::error_code;
use crate::response::api_response::ApiErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Workout not found")]
    WorkoutNotFound,
}

impl WorkoutError {
    fn get_code(&self) -> u32 {
        match self {
            WorkoutError::WorkoutNotFound => error_code::WORKOUT_NOT_FOUND,
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        let status_code = match self {
            WorkoutError::WorkoutNotFound => StatusCode::NOT_FOUND,
        };

        ApiErrorResponse::send(
            status_code.as_u16(),
            self.get_code(),
            Some(self.to_string()),
        )
    }
}
