use crate::db::database::Database;
use crate::service::user_service::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserState {
    pub user_service: Arc<UserService>,
}

impl UserState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(db_conn)),
        }
    }
}
