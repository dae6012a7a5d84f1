use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// 数据库存储的训练计划（静态参考数据，不参与积分）
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Workout {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration_minutes: i32,
    pub activity_type: String,
    pub exercises: Json<Vec<String>>,
    pub target_muscles: Json<Vec<String>>,
    pub equipment_needed: Json<Vec<String>>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
