//! 训练计划传输用到的数据结构
//!
//!

use crate::model::workout::Workout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct WorkoutCreateDto {
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: String,
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub description: String,
    #[validate(length(
        min = 1,
        max = 20,
        message = "difficulty must be between 1 and 20 characters"
    ))]
    pub difficulty: String,
    #[validate(range(
        min = 0,
        max = 10_000,
        message = "duration_minutes must be between 0 and 10_000"
    ))]
    pub duration_minutes: i32,
    #[validate(length(
        min = 1,
        max = 50,
        message = "activity_type must be between 1 and 50 characters"
    ))]
    pub activity_type: String,
    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub target_muscles: Vec<String>,
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    pub created_by: Option<i64>,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct WorkoutUpdateDto {
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub description: Option<String>,
    #[validate(length(
        min = 1,
        max = 20,
        message = "difficulty must be between 1 and 20 characters"
    ))]
    pub difficulty: Option<String>,
    #[validate(range(
        min = 0,
        max = 10_000,
        message = "duration_minutes must be between 0 and 10_000"
    ))]
    pub duration_minutes: Option<i32>,
    pub exercises: Option<Vec<String>>,
    pub target_muscles: Option<Vec<String>>,
    pub equipment_needed: Option<Vec<String>>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct WorkoutReadDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub duration_minutes: i32,
    pub activity_type: String,
    pub exercises: Vec<String>,
    pub target_muscles: Vec<String>,
    pub equipment_needed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutReadDto {
    fn from(w: Workout) -> Self {
        Self {
            id: w.id,
            title: w.title,
            description: w.description,
            difficulty: w.difficulty,
            duration_minutes: w.duration_minutes,
            activity_type: w.activity_type,
            exercises: w.exercises.0,
            target_muscles: w.target_muscles.0,
            equipment_needed: w.equipment_needed.0,
            created_by: w.created_by,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DifficultyQuery {
    pub difficulty: Option<String>,
}
