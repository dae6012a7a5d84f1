//! 队伍传输用到的数据结构
//!
//!

use crate::model::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct TeamCreateDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub member_ids: Option<Vec<i64>>,
    pub captain_id: Option<i64>,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct TeamUpdateDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// 外层 None 表示字段缺省不动，Some(None) 表示显式传 null 清空队长
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub captain_id: Option<Option<i64>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

/// 入队 / 退队请求，调用方显式携带用户身份
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct TeamMembershipDto {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamReadDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<i64>,
    pub members: Vec<TeamMemberDto>,
    pub member_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamReadDto {
    pub fn from_parts(team: Team, members: Vec<TeamMemberDto>) -> Self {
        Self {
            id: team.id,
            name: team.name,
            description: team.description,
            captain_id: team.captain_id,
            member_count: members.len(),
            members,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_captain_from_explicit_null() {
        let absent: TeamUpdateDto = serde_json::from_str(r#"{"name":"runners"}"#).unwrap();
        assert_eq!(absent.captain_id, None);

        let cleared: TeamUpdateDto = serde_json::from_str(r#"{"captain_id":null}"#).unwrap();
        assert_eq!(cleared.captain_id, Some(None));

        let replaced: TeamUpdateDto = serde_json::from_str(r#"{"captain_id":5}"#).unwrap();
        assert_eq!(replaced.captain_id, Some(Some(5)));
    }
}
