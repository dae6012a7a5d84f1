use crate::db::database::{Database, DatabaseTrait};
use crate::dto::activity_dto::ActivityCreateDto;
use crate::model::activity::{Activity, ActivityAggregate, ActivitySummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct ActivityRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;

    /// points_earned 由调用方在创建时算好，入库后不再变更
    async fn insert_activity(
        &self,
        payload: &ActivityCreateDto,
        points_earned: i32,
    ) -> Result<Activity, sqlx::Error>;

    async fn find_all(&self) -> Result<Vec<Activity>, sqlx::Error>;

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Activity>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, sqlx::Error>;

    async fn delete_activity(&self, id: i64) -> Result<u64, sqlx::Error>;

    /// 单用户四项聚合
    async fn user_stats(&self, user_id: i64) -> Result<ActivityAggregate, sqlx::Error>;

    /// 按用户分组的聚合，cutoff 为 None 时统计全量历史
    async fn summaries_since(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<ActivitySummary>, sqlx::Error>;
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn insert_activity(
        &self,
        payload: &ActivityCreateDto,
        points_earned: i32,
    ) -> Result<Activity, sqlx::Error> {
        let sql_ret = sqlx::query(
            "INSERT INTO activities (
				user_id,
				activity_type,
				duration_minutes,
				distance_km,
				calories,
				points_earned,
				notes,
				date
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(payload.user_id)
        .bind(&payload.activity_type)
        .bind(payload.duration_minutes)
        .bind(payload.distance_km)
        .bind(payload.calories)
        .bind(points_earned)
        .bind(&payload.notes)
        .bind(payload.date)
        .execute(self.db_conn.get_master_pool())
        .await?;
        tracing::debug!(
            "insert_activity - rows_affected:{}",
            sql_ret.rows_affected()
        );

        let activity = sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = ?")
            .bind(sql_ret.last_insert_id() as i64)
            .fetch_one(self.db_conn.get_master_pool())
            .await?;
        Ok(activity)
    }

    async fn find_all(&self) -> Result<Vec<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities ORDER BY date DESC")
            .fetch_all(self.db_conn.get_slave_pool())
            .await
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Vec<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities WHERE user_id = ? ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(self.db_conn.get_slave_pool())
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Activity>, sqlx::Error> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db_conn.get_slave_pool())
            .await
    }

    async fn delete_activity(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql_ret = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(self.db_conn.get_master_pool())
            .await?;
        Ok(sql_ret.rows_affected())
    }

    async fn user_stats(&self, user_id: i64) -> Result<ActivityAggregate, sqlx::Error> {
        sqlx::query_as::<_, ActivityAggregate>(
            "SELECT
				CAST(COUNT(id) AS SIGNED) AS total_activities,
				CAST(COALESCE(SUM(points_earned), 0) AS SIGNED) AS total_points,
				CAST(COALESCE(SUM(duration_minutes), 0) AS SIGNED) AS total_duration,
				CAST(COALESCE(SUM(distance_km), 0) AS DOUBLE) AS total_distance
			FROM activities
			WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(self.db_conn.get_slave_pool())
        .await
    }

    async fn summaries_since(
        &self,
        cutoff: Option<DateTime<Utc>>,
    ) -> Result<Vec<ActivitySummary>, sqlx::Error> {
        let base = "SELECT
				user_id,
				CAST(COALESCE(SUM(points_earned), 0) AS SIGNED) AS total_points,
				CAST(COUNT(id) AS SIGNED) AS total_activities,
				CAST(COALESCE(SUM(duration_minutes), 0) AS SIGNED) AS total_duration,
				CAST(COALESCE(SUM(distance_km), 0) AS DOUBLE) AS total_distance
			FROM activities";
        match cutoff {
            Some(since) => {
                let sql = format!("{} WHERE date >= ? GROUP BY user_id", base);
                sqlx::query_as::<_, ActivitySummary>(&sql)
                    .bind(since)
                    .fetch_all(self.db_conn.get_slave_pool())
                    .await
            }
            None => {
                let sql = format!("{} GROUP BY user_id", base);
                sqlx::query_as::<_, ActivitySummary>(&sql)
                    .fetch_all(self.db_conn.get_slave_pool())
                    .await
            }
        }
    }
}
