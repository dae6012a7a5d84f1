use crate::db::database::Database;
use crate::dto::activity_dto::ActivityStatsRes;
use crate::dto::team_dto::{TeamCreateDto, TeamMemberDto, TeamReadDto, TeamUpdateDto};
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::error::team_error::TeamError;
use crate::error::user_error::UserError;
use crate::repository::team_repository::{TeamRepository, TeamRepositoryTrait};
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct TeamService<T = TeamRepository, U = UserRepository> {
    team_repo: T,
    user_repo: U,
}

impl TeamService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            team_repo: TeamRepository::new(db_conn),
            user_repo: UserRepository::new(db_conn),
        }
    }
}

impl<T, U> TeamService<T, U>
where
    T: TeamRepositoryTrait + Send + Sync,
    U: UserRepositoryTrait + Send + Sync,
{
    pub async fn create_team(&self, payload: TeamCreateDto) -> Result<TeamReadDto, ApiError> {
        // 初始成员和队长都必须是已存在的用户，成员表没有外键兜底
        if let Some(member_ids) = &payload.member_ids {
            for user_id in member_ids {
                self.ensure_user_exists(*user_id).await?;
            }
        }
        if let Some(captain_id) = payload.captain_id {
            self.ensure_user_exists(captain_id).await?;
        }
        let team = self
            .team_repo
            .create_team(&payload)
            .await
            .map_err(DbError::from)?;
        let members = self
            .team_repo
            .find_members(team.id)
            .await
            .map_err(DbError::from)?;
        Ok(TeamReadDto::from_parts(
            team,
            members
                .into_iter()
                .map(|m| TeamMemberDto {
                    user_id: m.user_id,
                    username: m.username,
                })
                .collect(),
        ))
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamReadDto>, ApiError> {
        let teams = self.team_repo.find_all().await.map_err(DbError::from)?;
        let members = self
            .team_repo
            .find_all_members()
            .await
            .map_err(DbError::from)?;

        let mut by_team: HashMap<i64, Vec<TeamMemberDto>> = HashMap::new();
        for m in members {
            by_team.entry(m.team_id).or_default().push(TeamMemberDto {
                user_id: m.user_id,
                username: m.username,
            });
        }
        Ok(teams
            .into_iter()
            .map(|t| {
                let members = by_team.remove(&t.id).unwrap_or_default();
                TeamReadDto::from_parts(t, members)
            })
            .collect())
    }

    pub async fn get_team(&self, id: i64) -> Result<TeamReadDto, ApiError> {
        let team = self
            .team_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .ok_or(TeamError::TeamNotFound)?;
        let members = self
            .team_repo
            .find_members(id)
            .await
            .map_err(DbError::from)?;
        Ok(TeamReadDto::from_parts(
            team,
            members
                .into_iter()
                .map(|m| TeamMemberDto {
                    user_id: m.user_id,
                    username: m.username,
                })
                .collect(),
        ))
    }

    pub async fn update_team(
        &self,
        id: i64,
        payload: TeamUpdateDto,
    ) -> Result<TeamReadDto, ApiError> {
        if self
            .team_repo
            .find_by_id(id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(TeamError::TeamNotFound)?
        }
        // 换队长前确认新队长存在，显式 null 清空不用查
        if let Some(Some(captain_id)) = payload.captain_id {
            self.ensure_user_exists(captain_id).await?;
        }
        self.team_repo
            .update_team(id, &payload)
            .await
            .map_err(DbError::from)?;
        self.get_team(id).await
    }

    pub async fn delete_team(&self, id: i64) -> Result<(), ApiError> {
        let affected = self
            .team_repo
            .delete_team(id)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            Err(TeamError::TeamNotFound)?
        }
        Ok(())
    }

    /// 入队：已是成员报冲突，成员集不动
    pub async fn join_team(&self, team_id: i64, user_id: i64) -> Result<TeamReadDto, ApiError> {
        if self
            .team_repo
            .find_by_id(team_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(TeamError::TeamNotFound)?
        }
        self.ensure_user_exists(user_id).await?;
        if self
            .team_repo
            .is_member(team_id, user_id)
            .await
            .map_err(DbError::from)?
        {
            Err(TeamError::AlreadyMember)?
        }
        match self.team_repo.add_member(team_id, user_id).await {
            Ok(()) => {}
            // 并发下主键冲突也按已入队处理
            Err(err) => match DbError::from(err) {
                DbError::UniqueConstraintViolation(_) => Err(TeamError::AlreadyMember)?,
                err => {
                    tracing::error!("join team error :{}", err.to_string());
                    Err(err)?
                }
            },
        }
        self.get_team(team_id).await
    }

    /// 退队：非成员报冲突
    pub async fn leave_team(&self, team_id: i64, user_id: i64) -> Result<(), ApiError> {
        if self
            .team_repo
            .find_by_id(team_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(TeamError::TeamNotFound)?
        }
        let affected = self
            .team_repo
            .remove_member(team_id, user_id)
            .await
            .map_err(DbError::from)?;
        if affected == 0 {
            Err(TeamError::NotMember)?
        }
        Ok(())
    }

    /// 队伍统计是按需聚合的快照，成员变动不回溯修正历史
    pub async fn team_stats(&self, team_id: i64) -> Result<ActivityStatsRes, ApiError> {
        if self
            .team_repo
            .find_by_id(team_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(TeamError::TeamNotFound)?
        }
        let stats = self
            .team_repo
            .team_stats(team_id)
            .await
            .map_err(DbError::from)?;
        Ok(stats.into())
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), ApiError> {
        if self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(DbError::from)?
            .is_none()
        {
            Err(UserError::UserNotFound)?
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::team::Team;
    use crate::model::user::User;
    use crate::repository::team_repository::MockTeamRepositoryTrait;
    use crate::repository::user_repository::MockUserRepositoryTrait;
    use chrono::Utc;

    fn team(id: i64) -> Team {
        Team {
            id,
            name: "morning runners".to_string(),
            description: None,
            captain_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

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
    async fn join_as_existing_member_is_conflict_and_members_stay_untouched() {
        let mut team_repo = MockTeamRepositoryTrait::default();
        team_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(team(id))));
        team_repo.expect_is_member().returning(|_, _| Ok(true));
        // add_member 未设置期望，冲突路径碰了成员表会直接失败
        let mut user_repo = MockUserRepositoryTrait::default();
        user_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id))));

        let service = TeamService {
            team_repo,
            user_repo,
        };
        let err = service.join_team(1, 7).await.unwrap_err();
        assert!(matches!(err, ApiError::TeamError(TeamError::AlreadyMember)));
    }

    #[tokio::test]
    async fn leave_without_membership_is_conflict() {
        let mut team_repo = MockTeamRepositoryTrait::default();
        team_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(team(id))));
        team_repo.expect_remove_member().returning(|_, _| Ok(0));
        let user_repo = MockUserRepositoryTrait::default();

        let service = TeamService {
            team_repo,
            user_repo,
        };
        let err = service.leave_team(1, 7).await.unwrap_err();
        assert!(matches!(err, ApiError::TeamError(TeamError::NotMember)));
    }

    #[tokio::test]
    async fn create_with_unknown_member_is_rejected_before_any_write() {
        // create_team 未设置期望，用户校验不过不允许写库
        let team_repo = MockTeamRepositoryTrait::default();
        let mut user_repo = MockUserRepositoryTrait::default();
        user_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = TeamService {
            team_repo,
            user_repo,
        };
        let payload = TeamCreateDto {
            name: "morning runners".to_string(),
            description: None,
            member_ids: Some(vec![99]),
            captain_id: None,
        };
        let err = service.create_team(payload).await.unwrap_err();
        assert!(matches!(err, ApiError::UserError(UserError::UserNotFound)));
    }

    #[tokio::test]
    async fn update_with_unknown_captain_is_rejected() {
        let mut team_repo = MockTeamRepositoryTrait::default();
        team_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(team(id))));
        let mut user_repo = MockUserRepositoryTrait::default();
        user_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = TeamService {
            team_repo,
            user_repo,
        };
        let payload = TeamUpdateDto {
            name: None,
            description: None,
            captain_id: Some(Some(99)),
        };
        let err = service.update_team(1, payload).await.unwrap_err();
        assert!(matches!(err, ApiError::UserError(UserError::UserNotFound)));
    }
}
