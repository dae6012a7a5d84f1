pub mod activity_service;
pub mod leaderboard_service;
pub mod points;
pub mod team_service;
pub mod user_service;
pub mod workout_service;
