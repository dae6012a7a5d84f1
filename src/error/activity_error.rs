use crate::error::error_code;
use crate::response::api_response::ApiErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
}

impl ActivityError {
    fn get_code(&self) -> u32 {
        match self {
            ActivityError::ActivityNotFound => error_code::ACTIVITY_NOT_FOUND,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ActivityError::ActivityNotFound => StatusCode::NOT_FOUND,
        };

        ApiErrorResponse::send(
            status_code.as_u16(),
            self.get_code(),
            Some(self.to_string()),
        )
    }
}
