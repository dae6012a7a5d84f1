use crate::db::database::Database;
use crate::service::activity_service::ActivityService;
use std::sync::Arc;

#[derive(Clone)]
pub struct ActivityState {
    pub activity_service: Arc<ActivityService>,
}

impl ActivityState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            activity_service: Arc::new(ActivityService::new(db_conn)),
        }
    }
}
