use crate::{handler::team_handler, state::team_state::TeamState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<TeamState> {
    let router = Router::new().nest(
        "/teams",
        Router::new()
            .route(
                "/",
                post(team_handler::create_team).get(team_handler::list_teams),
            )
            .route(
                "/:id",
                get(team_handler::get_team)
                    .put(team_handler::update_team)
                    .delete(team_handler::delete_team),
            )
            .route("/:id/join", post(team_handler::join_team))
            .route("/:id/leave", post(team_handler::leave_team))
            .route("/:id/stats", get(team_handler::team_stats)),
    );
    return router;
}
