use crate::{handler::leaderboard_handler, state::leaderboard_state::LeaderboardState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<LeaderboardState> {
    let router = Router::new().nest(
        "/leaderboard",
        Router::new()
            .route("/", get(leaderboard_handler::list_leaderboard))
            .route(
                "/recompute",
                post(leaderboard_handler::recompute_leaderboard),
            ),
    );
    return router;
}
