use crate::error::error_code;
use crate::response::api_response::ApiErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Team not found")]
    TeamNotFound,
    #[error("User is already a member of this team")]
    AlreadyMember,
    #[error("User is not a member of this team")]
    NotMember,
}

impl TeamError {
    fn get_code(&self) -> u32 {
        match self {
            TeamError::TeamNotFound => error_code::TEAM_NOT_FOUND,
            TeamError::AlreadyMember => error_code::ALREADY_TEAM_MEMBER,
            TeamError::NotMember => error_code::NOT_TEAM_MEMBER,
        }
    }
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status_code = match self {
            TeamError::TeamNotFound => StatusCode::NOT_FOUND,
            // 重复入队 / 非成员退队都按冲突上报，成员集不动
            TeamError::AlreadyMember => StatusCode::CONFLICT,
            TeamError::NotMember => StatusCode::CONFLICT,
        };

        ApiErrorResponse::send(
            status_code.as_u16(),
            self.get_code(),
            Some(self.to_string()),
        )
    }
}
