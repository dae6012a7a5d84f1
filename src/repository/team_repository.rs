use crate::db::database::{Database, DatabaseTrait};
use crate::dto::team_dto::{TeamCreateDto, TeamUpdateDto};
use crate::model::activity::ActivityAggregate;
use crate::model::team::{Team, TeamMember};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct TeamRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;

    /// 建队，初始成员和队长在同一事务里写入
    async fn create_team(&self, payload: &TeamCreateDto) -> Result<Team, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Team>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error>;

    async fn update_team(&self, id: i64, payload: &TeamUpdateDto) -> Result<u64, sqlx::Error>;

    /// 删队清理成员关系，历史活动归属用户不动
    async fn delete_team(&self, id: i64) -> Result<u64, sqlx::Error>;

    /// 全量成员关系，list 接口按 team_id 分组用
    async fn find_all_members(&self) -> Result<Vec<TeamMember>, sqlx::Error>;

    async fn find_members(&self, team_id: i64) -> Result<Vec<TeamMember>, sqlx::Error>;

    async fn is_member(&self, team_id: i64, user_id: i64) -> Result<bool, sqlx::Error>;

    async fn add_member(&self, team_id: i64, user_id: i64) -> Result<(), sqlx::Error>;

    async fn remove_member(&self, team_id: i64, user_id: i64) -> Result<u64, sqlx::Error>;

    /// 当前成员名下全部活动的聚合快照
    async fn team_stats(&self, team_id: i64) -> Result<ActivityAggregate, sqlx::Error>;
}

#[async_trait]
impl TeamRepositoryTrait for TeamRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn create_team(&self, payload: &TeamCreateDto) -> Result<Team, sqlx::Error> {
        let mut tx = self.db_conn.get_master_pool().begin().await?;

        let sql_ret = sqlx::query("INSERT INTO teams (name, description) VALUES (?, ?)")
            .bind(&payload.name)
            .bind(&payload.description)
            .execute(&mut *tx)
            .await?;
        let team_id = sql_ret.last_insert_id() as i64;

        if let Some(member_ids) = &payload.member_ids {
            for user_id in member_ids {
                sqlx::query("INSERT IGNORE INTO team_members (team_id, user_id) VALUES (?, ?)")
                    .bind(team_id)
                    .bind(user_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
        if let Some(captain_id) = payload.captain_id {
            sqlx::query("INSERT IGNORE INTO team_members (team_id, user_id) VALUES (?, ?)")
                .bind(team_id)
                .bind(captain_id)
                .execute(&mut *tx)
                .await?;
            sqlx::query("UPDATE teams SET captain_id = ? WHERE id = ?")
                .bind(captain_id)
                .bind(team_id)
                .execute(&mut *tx)
                .await?;
        }

        let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = ?")
            .bind(team_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(team)
    }

    async fn find_all(&self) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY id")
            .fetch_all(self.db_conn.get_slave_pool())
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_conn.get_slave_pool())
            .await
    }

    async fn update_team(&self, id: i64, payload: &TeamUpdateDto) -> Result<u64, sqlx::Error> {
        let mut tx = self.db_conn.get_master_pool().begin().await?;
        let sql_ret = match payload.captain_id {
            // 字段缺省：队长不动
            None => {
                sqlx::query(
                    "UPDATE teams SET
						name = COALESCE(?, name),
						description = COALESCE(?, description)
					WHERE id = ?",
                )
                .bind(&payload.name)
                .bind(&payload.description)
                .bind(id)
                .execute(&mut *tx)
                .await?
            }
            // 显式传值：null 清空，数值换任并和建队一样保证其在成员表里
            Some(captain_id) => {
                if let Some(captain_id) = captain_id {
                    sqlx::query(
                        "INSERT IGNORE INTO team_members (team_id, user_id) VALUES (?, ?)",
                    )
                    .bind(id)
                    .bind(captain_id)
                    .execute(&mut *tx)
                    .await?;
                }
                sqlx::query(
                    "UPDATE teams SET
						name = COALESCE(?, name),
						description = COALESCE(?, description),
						captain_id = ?
					WHERE id = ?",
                )
                .bind(&payload.name)
                .bind(&payload.description)
                .bind(captain_id)
                .bind(id)
                .execute(&mut *tx)
                .await?
            }
        };
        tx.commit().await?;
        Ok(sql_ret.rows_affected())
    }

    async fn delete_team(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut tx = self.db_conn.get_master_pool().begin().await?;
        sqlx::query("DELETE FROM team_members WHERE team_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let sql_ret = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(sql_ret.rows_affected())
    }

    async fn find_all_members(&self) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT tm.team_id, tm.user_id, u.username
			FROM team_members tm
			JOIN users u ON u.id = tm.user_id
			ORDER BY tm.team_id, tm.user_id",
        )
        .fetch_all(self.db_conn.get_slave_pool())
        .await
    }

    async fn find_members(&self, team_id: i64) -> Result<Vec<TeamMember>, sqlx::Error> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT tm.team_id, tm.user_id, u.username
			FROM team_members tm
			JOIN users u ON u.id = tm.user_id
			WHERE tm.team_id = ?
			ORDER BY tm.user_id",
        )
        .bind(team_id)
        .fetch_all(self.db_conn.get_slave_pool())
        .await
    }

    async fn is_member(&self, team_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM team_members WHERE team_id = ? AND user_id = ?",
        )
        .bind(team_id)
        .bind(user_id)
        // 成员判定走主库，入队退队的冲突检查不能读到过期数据
        .fetch_one(self.db_conn.get_master_pool())
        .await?;
        Ok(count > 0)
    }

    async fn add_member(&self, team_id: i64, user_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO team_members (team_id, user_id) VALUES (?, ?)")
            .bind(team_id)
            .bind(user_id)
            .execute(self.db_conn.get_master_pool())
            .await?;
        Ok(())
    }

    async fn remove_member(&self, team_id: i64, user_id: i64) -> Result<u64, sqlx::Error> {
        let sql_ret = sqlx::query("DELETE FROM team_members WHERE team_id = ? AND user_id = ?")
            .bind(team_id)
            .bind(user_id)
            .execute(self.db_conn.get_master_pool())
            .await?;
        Ok(sql_ret.rows_affected())
    }

    async fn team_stats(&self, team_id: i64) -> Result<ActivityAggregate, sqlx::Error> {
        sqlx::query_as::<_, ActivityAggregate>(
            "SELECT
				CAST(COUNT(a.id) AS SIGNED) AS total_activities,
				CAST(COALESCE(SUM(a.points_earned), 0) AS SIGNED) AS total_points,
				CAST(COALESCE(SUM(a.duration_minutes), 0) AS SIGNED) AS total_duration,
				CAST(COALESCE(SUM(a.distance_km), 0) AS DOUBLE) AS total_distance
			FROM activities a
			JOIN team_members tm ON tm.user_id = a.user_id
			WHERE tm.team_id = ?",
        )
        .bind(team_id)
        .fetch_one(self.db_conn.get_slave_pool())
        .await
    }
}
