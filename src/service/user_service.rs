use crate::db::database::Database;
use crate::dto::user_dto::{
    ProfileReadDto, ProfileUpsertDto, UserCreateDto, UserReadDto, UserUpdateDto,
};
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::error::request_error::RequestError;
use crate::error::user_error::UserError;
use crate::model::user::{FitnessLevel, UserProfile};
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService<U = UserRepository> {
    user_repo: U,
}

impl UserService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            user_repo: UserRepository::new(db_conn),
        }
    }
}

impl<U> UserService<U>
where
    U: UserRepositoryTrait + Send + Sync,
{
    pub async fn create_user(&self, payload: UserCreateDto) -> Result<UserReadDto, ApiError> {
        match self.user_repo.create_user(&payload).await {
            Ok(user) => Ok(user.into()),
            Err(err) => match DbError::from(err) {
                DbError::UniqueConstraintViolation(_) => Err(UserError::UserAlreadyExists)?,
                err => {
                    tracing::error!("create user error :{}", err.to_string());
                    Err(err)?
                }
            },
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserReadDto>, ApiError> {
        let users = self
            .user_repo
            .find_all()
            .await
            .map_err(DbError::from)?;
        Ok(users.into_iter().map(UserReadDto::from).collect())
    }

    pub async fn get_user(&self, id: i64) -> Result<UserReadDto, ApiError> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .ok_or(UserError::UserNotFound)?;
        Ok(user.into())
    }

    pub async fn update_user(
        &self,
        id: i64,
        payload: UserUpdateDto,
    ) -> Result<UserReadDto, ApiError> {
        let affected = self
            .user_repo
            .update_user(id, &payload)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            // rows_affected 为 0 也可能是字段原值写原值，再查一次兜底
            if self
                .user_repo
                .find_by_id(id)
                .await
                .map_err(DbError::from)?
                .is_none()
            {
                Err(UserError::UserNotFound)?
            }
        }
        self.get_user(id).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let affected = self
            .user_repo
            .delete_user_cascade(id)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            Err(UserError::UserNotFound)?
        }
        Ok(())
    }

    pub async fn upsert_profile(
        &self,
        user_id: i64,
        payload: ProfileUpsertDto,
    ) -> Result<ProfileReadDto, ApiError> {
        // fitness_level 是闭集
        if FitnessLevel::from_name(&payload.fitness_level).is_none() {
            Err(RequestError::CommonError(format!(
                "unknown fitness_level `{}`",
                payload.fitness_level
            )))?
        }
        // 先确认用户存在，档案表没有外键兜底
        if self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(UserError::UserNotFound)?
        }
        self.user_repo
            .upsert_profile(user_id, &payload)
            .await
            .map_err(DbError::from)?;
        self.get_profile(user_id).await
    }

    pub async fn get_profile(&self, user_id: i64) -> Result<ProfileReadDto, ApiError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(DbError::from)?
            .ok_or(UserError::UserNotFound)?;
        // 档案未建时按 beginner 默认值返回，不落库
        let profile = self
            .user_repo
            .find_profile(user_id)
            .await
            .map_err(DbError::from)?
            .unwrap_or_else(|| UserProfile {
                user_id,
                bio: None,
                fitness_level: FitnessLevel::Beginner.as_str().to_string(),
                created_at: user.created_at,
                updated_at: user.created_at,
            });
        let points = self
            .user_repo
            .sum_user_points(user_id)
            .await
            .map_err(DbError::from)?;
        Ok(ProfileReadDto::from_parts(profile, user.username, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::User;
    use crate::repository::user_repository::MockUserRepositoryTrait;
    use chrono::Utc;

    fn user(id: i64) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn profile_defaults_to_beginner_when_row_is_missing() {
        let mut user_repo = MockUserRepositoryTrait::default();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id))));
        user_repo.expect_find_profile().returning(|_| Ok(None));
        user_repo.expect_sum_user_points().returning(|_| Ok(0));

        let service = UserService { user_repo };
        let profile = service.get_profile(7).await.unwrap();
        assert_eq!(profile.user_id, 7);
        assert_eq!(profile.fitness_level, "beginner");
        assert_eq!(profile.points, 0);
    }

    #[tokio::test]
    async fn profile_of_unknown_user_is_not_found() {
        let mut user_repo = MockUserRepositoryTrait::default();
        user_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserService { user_repo };
        let err = service.get_profile(404).await.unwrap_err();
        assert!(matches!(err, ApiError::UserError(UserError::UserNotFound)));
    }
}
