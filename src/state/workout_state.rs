use crate::db::database::Database;
use crate::service::workout_service::WorkoutService;
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkoutState {
    pub workout_service: Arc<WorkoutService>,
}

impl WorkoutState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            workout_service: Arc::new(WorkoutService::new(db_conn)),
        }
    }
}
