//! 用户和档案传输用到的数据结构
//!
//!

use crate::model::user::{User, UserProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UserCreateDto {
    #[validate(length(
        min = 3,
        max = 64,
        message = "username must be between 3 and 64 characters"
    ))]
    pub username: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(max = 64, message = "first_name must be at most 64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 64, message = "last_name must be at most 64 characters"))]
    pub last_name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UserUpdateDto {
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "first_name must be at most 64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 64, message = "last_name must be at most 64 characters"))]
    pub last_name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct UserReadDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserReadDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpsertDto {
    #[validate(length(max = 2000, message = "bio must be at most 2000 characters"))]
    pub bio: Option<String>,
    #[validate(length(
        min = 1,
        max = 20,
        message = "fitness_level must be between 1 and 20 characters"
    ))]
    pub fitness_level: String,
}

/// points 是读取时算出的投影，不是存储字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReadDto {
    pub user_id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub fitness_level: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileReadDto {
    pub fn from_parts(profile: UserProfile, username: String, points: i64) -> Self {
        Self {
            user_id: profile.user_id,
            username,
            bio: profile.bio,
            fitness_level: profile.fitness_level,
            points,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
