use crate::db::database::Database;
use crate::dto::leaderboard_dto::LeaderboardEntryRes;
use crate::error::api_error::ApiError;
use crate::error::db_error::DbError;
use crate::error::request_error::RequestError;
use crate::model::activity::ActivitySummary;
use crate::model::leaderboard::{Period, RankedEntry};
use crate::repository::activity_repository::{ActivityRepository, ActivityRepositoryTrait};
use crate::repository::leaderboard_repository::{
    LeaderboardRepository, LeaderboardRepositoryTrait,
};
use chrono::Utc;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeaderboardService<L = LeaderboardRepository, A = ActivityRepository> {
    leaderboard_repo: L,
    activity_repo: A,
}

/// SQL 聚合出来的是 i64，榜单列是 INT，超界取边界值而不是回绕
fn to_db_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// 总分降序，同分按 user_id 升序，rank 为 1 起的位置，无并列无空洞
pub fn rank_entries(mut summaries: Vec<ActivitySummary>) -> Vec<RankedEntry> {
    summaries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then(a.user_id.cmp(&b.user_id))
    });
    summaries
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedEntry {
            user_id: s.user_id,
            total_points: to_db_i32(s.total_points),
            total_activities: to_db_i32(s.total_activities),
            total_duration: to_db_i32(s.total_duration),
            total_distance: s.total_distance,
            rank: (i + 1) as i32,
        })
        .collect()
}

impl LeaderboardService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            leaderboard_repo: LeaderboardRepository::new(db_conn),
            activity_repo: ActivityRepository::new(db_conn),
        }
    }
}

impl<L, A> LeaderboardService<L, A>
where
    L: LeaderboardRepositoryTrait + Send + Sync,
    A: ActivityRepositoryTrait + Send + Sync,
{
    /// 管理端同步触发的整榜重算：读快照、排序定名次、整周期替换。
    /// 聚合窗口内并发提交的活动以读到的快照为准。
    pub async fn recompute(&self, period: Period) -> Result<(), ApiError> {
        let cutoff = period.cutoff(Utc::now());
        let summaries = self
            .activity_repo
            .summaries_since(cutoff)
            .await
            .map_err(DbError::from)?;
        let count = summaries.len();
        let entries = rank_entries(summaries);
        self.leaderboard_repo
            .replace_entries(period.as_str(), &entries)
            .await
            .map_err(DbError::from)?;
        tracing::info!("leaderboard recomputed - period:{} users:{}", period.as_str(), count);
        Ok(())
    }

    pub async fn list(&self, period: Option<String>) -> Result<Vec<LeaderboardEntryRes>, ApiError> {
        let period = match period {
            Some(name) => Period::from_name(&name).ok_or_else(|| {
                RequestError::CommonError(format!("unknown period `{}`", name))
            })?,
            None => Period::AllTime,
        };
        let rows = self
            .leaderboard_repo
            .find_by_period(period.as_str())
            .await
            .map_err(DbError::from)?;
        Ok(rows.into_iter().map(LeaderboardEntryRes::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::activity_repository::MockActivityRepositoryTrait;
    use crate::repository::leaderboard_repository::MockLeaderboardRepositoryTrait;

    fn summary(user_id: i64, points: i64) -> ActivitySummary {
        ActivitySummary {
            user_id,
            total_points: points,
            total_activities: 1,
            total_duration: 30,
            total_distance: 0.0,
        }
    }

    #[test]
    fn ranks_are_dense_one_based_positions() {
        let entries = rank_entries(vec![summary(1, 50), summary(2, 90), summary(3, 90)]);
        let ranks: Vec<(i64, i32)> = entries.iter().map(|e| (e.user_id, e.rank)).collect();
        // 同分 90 的 2、3 号按 user_id 升序占 1、2 名，50 分排第 3
        assert_eq!(ranks, vec![(2, 1), (3, 2), (1, 3)]);
    }

    #[test]
    fn ranks_are_permutation_without_gaps() {
        let entries = rank_entries(vec![
            summary(7, 10),
            summary(3, 200),
            summary(9, 10),
            summary(1, 55),
        ]);
        let mut ranks: Vec<i32> = entries.iter().map(|e| e.rank).collect();
        ranks.sort();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn output_is_sorted_by_points_descending() {
        let entries = rank_entries(vec![
            summary(1, 5),
            summary(2, 300),
            summary(3, 300),
            summary(4, 7),
        ]);
        for pair in entries.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
        }
    }

    #[test]
    fn empty_input_yields_empty_board() {
        assert!(rank_entries(vec![]).is_empty());
    }

    #[test]
    fn ties_break_by_ascending_user_id() {
        let entries = rank_entries(vec![summary(42, 100), summary(7, 100), summary(19, 100)]);
        let ids: Vec<i64> = entries.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![7, 19, 42]);
    }

    #[test]
    fn oversized_sums_saturate_at_column_bounds() {
        let entries = rank_entries(vec![ActivitySummary {
            user_id: 1,
            total_points: i64::MAX,
            total_activities: 3,
            total_duration: i64::from(i32::MAX) + 10,
            total_distance: 1.0,
        }]);
        assert_eq!(entries[0].total_points, i32::MAX);
        assert_eq!(entries[0].total_activities, 3);
        assert_eq!(entries[0].total_duration, i32::MAX);
    }

    #[tokio::test]
    async fn recompute_replaces_whole_period_with_one_row_per_user() {
        let mut activity_repo = MockActivityRepositoryTrait::default();
        activity_repo
            .expect_summaries_since()
            .returning(|_| Ok(vec![summary(2, 90), summary(1, 50), summary(3, 90)]));
        let mut leaderboard_repo = MockLeaderboardRepositoryTrait::default();
        leaderboard_repo
            .expect_replace_entries()
            .withf(|period, entries| {
                let mut ids: Vec<i64> = entries.iter().map(|e| e.user_id).collect();
                ids.sort();
                ids.dedup();
                period == "weekly" && ids.len() == entries.len() && entries.len() == 3
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LeaderboardService {
            leaderboard_repo,
            activity_repo,
        };
        service.recompute(Period::Weekly).await.unwrap();
    }
}
