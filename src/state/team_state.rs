use crate::db::database::Database;
use crate::service::team_service::TeamService;
use std::sync::Arc;

#[derive(Clone)]
pub struct TeamState {
    pub team_service: Arc<TeamService>,
}

impl TeamState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            team_service: Arc::new(TeamService::new(db_conn)),
        }
    }
}
