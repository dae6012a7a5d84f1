use crate::db::database::Database;
use crate::dto::workout_dto::{WorkoutCreateDto, WorkoutReadDto, WorkoutUpdateDto};
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::error::request_error::RequestError;
use crate::error::workout_error::WorkoutError;
use crate::model::user::FitnessLevel;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::repository::workout_repository::{WorkoutRepository, WorkoutRepositoryTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkoutService {
    workout_repo: WorkoutRepository,
    user_repo: UserRepository,
}

impl WorkoutService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            workout_repo: WorkoutRepository::new(db_conn),
            user_repo: UserRepository::new(db_conn),
        }
    }

    pub async fn create_workout(
        &self,
        payload: WorkoutCreateDto,
    ) -> Result<WorkoutReadDto, ApiError> {
        if FitnessLevel::from_name(&payload.difficulty).is_none() {
            Err(RequestError::CommonError(format!(
                "unknown difficulty `{}`",
                payload.difficulty
            )))?
        }
        let workout = self
            .workout_repo
            .insert_workout(&payload)
            .await
            .map_err(DbError::from)?;
        Ok(workout.into())
    }

    pub async fn list_workouts(&self) -> Result<Vec<WorkoutReadDto>, ApiError> {
        let workouts = self.workout_repo.find_all().await.map_err(DbError::from)?;
        Ok(workouts.into_iter().map(WorkoutReadDto::from).collect())
    }

    pub async fn get_workout(&self, id: i64) -> Result<WorkoutReadDto, ApiError> {
        let workout = self
            .workout_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .ok_or(WorkoutError::WorkoutNotFound)?;
        Ok(workout.into())
    }

    pub async fn update_workout(
        &self,
        id: i64,
        payload: WorkoutUpdateDto,
    ) -> Result<WorkoutReadDto, ApiError> {
        if let Some(difficulty) = &payload.difficulty {
            if FitnessLevel::from_name(difficulty).is_none() {
                Err(RequestError::CommonError(format!(
                    "unknown difficulty `{}`",
                    difficulty
                )))?
            }
        }
        if self
            .workout_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(WorkoutError::WorkoutNotFound)?
        }
        self.workout_repo
            .update_workout(id, &payload)
            .await
            .map_err(DbError::from)?;
        self.get_workout(id).await
    }

    pub async fn delete_workout(&self, id: i64) -> Result<(), ApiError> {
        let affected = self
            .workout_repo
            .delete_workout(id)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            Err(WorkoutError::WorkoutNotFound)?
        }
        Ok(())
    }

    /// 按用户档案的健身水平推荐，档案缺失或非法值静默按 beginner 处理
    pub async fn recommended(&self, user_id: i64) -> Result<Vec<WorkoutReadDto>, ApiError> {
        let level = self
            .user_repo
            .find_profile(user_id)
            .await
            .map_err(DbError::from)?
            .and_then(|p| FitnessLevel::from_name(&p.fitness_level))
            .unwrap_or(FitnessLevel::Beginner);
        let workouts = self
            .workout_repo
            .find_by_difficulty(level.as_str())
            .await
            .map_err(DbError::from)?;
        Ok(workouts.into_iter().map(WorkoutReadDto::from).collect())
    }

    /// 查询参数是闭集，未知难度报 400，缺省 beginner
    pub async fn by_difficulty(
        &self,
        difficulty: Option<String>,
    ) -> Result<Vec<WorkoutReadDto>, ApiError> {
        let level = match difficulty {
            Some(name) => FitnessLevel::from_name(&name).ok_or_else(|| {
                RequestError::CommonError(format!("unknown difficulty `{}`", name))
            })?,
            None => FitnessLevel::Beginner,
        };
        let workouts = self
            .workout_repo
            .find_by_difficulty(level.as_str())
            .await
            .map_err(DbError::from)?;
        Ok(workouts.into_iter().map(WorkoutReadDto::from).collect())
    }
}
