use crate::db::database::Database;
use crate::dto::activity_dto::{ActivityCreateDto, ActivityReadDto, ActivityStatsRes};
use crate::error::activity_error::ActivityError;
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::error::user_error::UserError;
use crate::repository::activity_repository::{ActivityRepository, ActivityRepositoryTrait};
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::points;
use std::sync::Arc;

#[derive(Clone)]
pub struct ActivityService {
    activity_repo: ActivityRepository,
    user_repo: UserRepository,
}

impl ActivityService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            activity_repo: ActivityRepository::new(db_conn),
            user_repo: UserRepository::new(db_conn),
        }
    }

    /// 创建时算一次积分，之后不再变
    pub async fn create_activity(
        &self,
        payload: ActivityCreateDto,
    ) -> Result<ActivityReadDto, ApiError> {
        if self
            .user_repo
            .find_by_id(payload.user_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(UserError::UserNotFound)?
        }

        let points_earned = points::score(&payload.activity_type, payload.duration_minutes);
        let activity = self
            .activity_repo
            .insert_activity(&payload, points_earned)
            .await
            .map_err(DbError::from)?;
        tracing::info!(
            "activity created - user:{} type:{} points:{}",
            activity.user_id,
            activity.activity_type,
            activity.points_earned
        );
        Ok(activity.into())
    }

    pub async fn list_activities(
        &self,
        user_id: Option<i64>,
    ) -> Result<Vec<ActivityReadDto>, ApiError> {
        let activities = match user_id {
            Some(user_id) => self.activity_repo.find_by_user(user_id).await,
            None => self.activity_repo.find_all().await,
        }
        .map_err(DbError::from)?;
        Ok(activities.into_iter().map(ActivityReadDto::from).collect())
    }

    pub async fn get_activity(&self, id: i64) -> Result<ActivityReadDto, ApiError> {
        let activity = self
            .activity_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .ok_or(ActivityError::ActivityNotFound)?;
        Ok(activity.into())
    }

    pub async fn delete_activity(&self, id: i64) -> Result<(), ApiError> {
        let affected = self
            .activity_repo
            .delete_activity(id)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            Err(ActivityError::ActivityNotFound)?
        }
        Ok(())
    }

    pub async fn user_stats(&self, user_id: i64) -> Result<ActivityStatsRes, ApiError> {
        let stats = self
            .activity_repo
            .user_stats(user_id)
            .await
            .map_err(DbError::from)?;
        Ok(stats.into())
    }
}
