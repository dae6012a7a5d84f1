pub mod activity_error;
pub mod api_error;
pub mod db_error;
pub mod error_code;
pub mod request_error;
pub mod team_error;
pub mod user_error;
pub mod workout_error;
