use crate::{handler::activity_handler, state::activity_state::ActivityState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<ActivityState> {
    let router = Router::new().nest(
        "/activities",
        Router::new()
            .route(
                "/",
                post(activity_handler::create_activity).get(activity_handler::list_activities),
            )
            .route("/stats", get(activity_handler::activity_stats))
            .route(
                "/:id",
                get(activity_handler::get_activity).delete(activity_handler::delete_activity),
            ),
    );
    return router;
}
