//! 活动记录传输用到的数据结构
//!
//!

use crate::model::activity::{Activity, ActivityAggregate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ActivityCreateDto {
    pub user_id: i64,
    #[validate(length(
        min = 1,
        max = 50,
        message = "activity_type must be between 1 and 50 characters"
    ))]
    pub activity_type: String,
    #[validate(range(
        min = 0,
        max = 10_000,
        message = "duration_minutes must be between 0 and 10_000"
    ))]
    pub duration_minutes: i32,
    #[validate(range(min = 0.0, message = "distance_km must be non-negative"))]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0, message = "calories must be non-negative"))]
    pub calories: Option<i32>,
    #[validate(length(max = 2000, message = "notes must be at most 2000 characters"))]
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ActivityReadDto {
    pub id: i64,
    pub user_id: i64,
    pub activity_type: String,
    pub duration_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    pub points_earned: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Activity> for ActivityReadDto {
    fn from(a: Activity) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            activity_type: a.activity_type,
            duration_minutes: a.duration_minutes,
            distance_km: a.distance_km,
            calories: a.calories,
            points_earned: a.points_earned,
            notes: a.notes,
            date: a.date,
            created_at: a.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ActivityListQuery {
    pub user_id: Option<i64>,
}

/// 个人统计和队伍统计共用的聚合结果
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityStatsRes {
    pub total_activities: i64,
    pub total_points: i64,
    pub total_duration: i64,
    pub total_distance: f64,
}

impl From<ActivityAggregate> for ActivityStatsRes {
    fn from(s: ActivityAggregate) -> Self {
        Self {
            total_activities: s.total_activities,
            total_points: s.total_points,
            total_duration: s.total_duration,
            total_distance: s.total_distance,
        }
    }
}
