use crate::db::database::{Database, DatabaseTrait};
use crate::dto::user_dto::{ProfileUpsertDto, UserCreateDto, UserUpdateDto};
use crate::model::user::{User, UserProfile};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserRepository {
    /// 主从分离
    pub(crate) db_conn: Arc<Database>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;

    async fn create_user(&self, payload: &UserCreateDto) -> Result<User, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error>;

    async fn update_user(&self, id: i64, payload: &UserUpdateDto) -> Result<u64, sqlx::Error>;

    /// 删除用户并显式级联：活动、档案、排行榜条目、队伍成员关系一并清理，
    /// 队长引用置空
    async fn delete_user_cascade(&self, id: i64) -> Result<u64, sqlx::Error>;

    /// 档案写入，存在则覆盖
    async fn upsert_profile(
        &self,
        user_id: i64,
        payload: &ProfileUpsertDto,
    ) -> Result<(), sqlx::Error>;

    async fn find_profile(&self, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error>;

    /// 用户积分投影：活动表求和，不读任何计数器
    async fn sum_user_points(&self, user_id: i64) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn create_user(&self, payload: &UserCreateDto) -> Result<User, sqlx::Error> {
        let sql_ret = sqlx::query(
            "INSERT INTO users (username, email, first_name, last_name) VALUES (?, ?, ?, ?)",
        )
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .execute(self.db_conn.get_master_pool())
        .await?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(sql_ret.last_insert_id() as i64)
            .fetch_one(self.db_conn.get_master_pool())
            .await?;
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(self.db_conn.get_slave_pool())
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_conn.get_slave_pool())
            .await
    }

    async fn update_user(&self, id: i64, payload: &UserUpdateDto) -> Result<u64, sqlx::Error> {
        let sql_ret = sqlx::query(
            "UPDATE users SET
				email = COALESCE(?, email),
				first_name = COALESCE(?, first_name),
				last_name = COALESCE(?, last_name)
			WHERE id = ?",
        )
        .bind(&payload.email)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(id)
        .execute(self.db_conn.get_master_pool())
        .await?;
        Ok(sql_ret.rows_affected())
    }

    async fn delete_user_cascade(&self, id: i64) -> Result<u64, sqlx::Error> {
        let mut tx = self.db_conn.get_master_pool().begin().await?;

        sqlx::query("DELETE FROM activities WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM leaderboard WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM user_profiles WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM team_members WHERE user_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE teams SET captain_id = NULL WHERE captain_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let sql_ret = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sql_ret.rows_affected())
    }

    async fn upsert_profile(
        &self,
        user_id: i64,
        payload: &ProfileUpsertDto,
    ) -> Result<(), sqlx::Error> {
        let sql_ret = sqlx::query(
            "INSERT INTO user_profiles (user_id, bio, fitness_level)
			VALUES (?, ?, ?)
			ON DUPLICATE KEY
			UPDATE bio = VALUES(bio), fitness_level = VALUES(fitness_level)",
        )
        .bind(user_id)
        .bind(&payload.bio)
        .bind(&payload.fitness_level)
        .execute(self.db_conn.get_master_pool())
        .await?;
        tracing::debug!("upsert_profile - rows_affected:{}", sql_ret.rows_affected());
        Ok(())
    }

    async fn find_profile(&self, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(self.db_conn.get_slave_pool())
            .await
    }

    async fn sum_user_points(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let (points,): (i64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(points_earned), 0) AS SIGNED)
			FROM activities WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(self.db_conn.get_slave_pool())
        .await?;
        Ok(points)
    }
}
