use crate::db::database::{Database, DatabaseTrait};
use crate::model::leaderboard::{LeaderboardEntryRow, RankedEntry};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeaderboardRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;

    /// 指定周期的榜单，按 rank 升序
    async fn find_by_period(&self, period: &str) -> Result<Vec<LeaderboardEntryRow>, sqlx::Error>;

    /// 整榜替换：同一事务里先清空该周期再写入，调用方视角下是原子的
    async fn replace_entries(
        &self,
        period: &str,
        entries: &[RankedEntry],
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl LeaderboardRepositoryTrait for LeaderboardRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn find_by_period(&self, period: &str) -> Result<Vec<LeaderboardEntryRow>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntryRow>(
            "SELECT
				l.user_id,
				u.username,
				l.period,
				l.total_points,
				l.total_activities,
				l.total_duration,
				l.total_distance,
				l.`rank`,
				l.updated_at
			FROM leaderboard l
			JOIN users u ON u.id = l.user_id
			WHERE l.period = ?
			ORDER BY l.`rank`",
        )
        .bind(period)
        .fetch_all(self.db_conn.get_slave_pool())
        .await
    }

    async fn replace_entries(
        &self,
        period: &str,
        entries: &[RankedEntry],
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.db_conn.get_master_pool().begin().await?;

        sqlx::query("DELETE FROM leaderboard WHERE period = ?")
            .bind(period)
            .execute(&mut *tx)
            .await?;

        for entry in entries {
            sqlx::query(
                "INSERT INTO leaderboard (
					user_id,
					period,
					total_points,
					total_activities,
					total_duration,
					total_distance,
					`rank`
				)
				VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(entry.user_id)
            .bind(period)
            .bind(entry.total_points)
            .bind(entry.total_activities)
            .bind(entry.total_duration)
            .bind(entry.total_distance)
            .bind(entry.rank)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            "replace_entries - period:{} entries:{}",
            period,
            entries.len()
        );
        Ok(())
    }
}
