use crate::db::database::Database;
use crate::service::leaderboard_service::LeaderboardService;
use std::sync::Arc;

#[derive(Clone)]
pub struct LeaderboardState {
    pub leaderboard_service: Arc<LeaderboardService>,
}

impl LeaderboardState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            leaderboard_service: Arc::new(LeaderboardService::new(db_conn)),
        }
    }
}
