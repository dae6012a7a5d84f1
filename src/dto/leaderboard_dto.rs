//! 排行榜传输用到的数据结构
//!
//!

use crate::model::leaderboard::LeaderboardEntryRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RecomputeReq {
    #[validate(length(
        min = 1,
        max = 20,
        message = "period must be between 1 and 20 characters"
    ))]
    pub period: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub period: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryRes {
    pub user_id: i64,
    pub username: String,
    pub period: String,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_duration: i32,
    pub total_distance: f64,
    pub rank: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<LeaderboardEntryRow> for LeaderboardEntryRes {
    fn from(row: LeaderboardEntryRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            period: row.period,
            total_points: row.total_points,
            total_activities: row.total_activities,
            total_duration: row.total_duration,
            total_distance: row.total_distance,
            rank: row.rank,
            updated_at: row.updated_at,
        }
    }
}
