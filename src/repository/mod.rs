pub mod activity_repository;
pub mod leaderboard_repository;
pub mod team_repository;
pub mod user_repository;
pub mod workout_repository;
