use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 数据库存储的队伍，total_points 不落库，stats 接口按需聚合
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub captain_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 队伍成员关系行，list 接口一次查出再按 team_id 分组
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct TeamMember {
    pub team_id: i64,
    pub user_id: i64,
    pub username: String,
}
