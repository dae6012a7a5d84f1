pub mod activity_state;
pub mod leaderboard_state;
pub mod team_state;
pub mod user_state;
pub mod workout_state;
