use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 数据库存储的活动记录
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Activity {
    pub id: i64,
    pub user_id: i64,
    pub activity_type: String,
    pub duration_minutes: i32,
    pub distance_km: Option<f64>,
    pub calories: Option<i32>,
    pub points_earned: i32,
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// 单用户的活动聚合，排行榜重算用
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ActivitySummary {
    pub user_id: i64,
    pub total_points: i64,
    pub total_activities: i64,
    pub total_duration: i64,
    pub total_distance: f64,
}

/// 个人统计 / 队伍统计查询结果
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct ActivityAggregate {
    pub total_activities: i64,
    pub total_points: i64,
    pub total_duration: i64,
    pub total_distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityType {
    Running,
    Walking,
    Cycling,
    Swimming,
    StrengthTraining,
    Yoga,
    Other,
}

impl ActivityType {
    /// 未知类型一律归入 Other，不报错
    pub fn from_name(name: &str) -> ActivityType {
        match name {
            "running" => ActivityType::Running,
            "walking" => ActivityType::Walking,
            "cycling" => ActivityType::Cycling,
            "swimming" => ActivityType::Swimming,
            "strength_training" => ActivityType::StrengthTraining,
            "yoga" => ActivityType::Yoga,
            _ => ActivityType::Other,
        }
    }
}
