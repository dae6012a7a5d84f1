use crate::db::database::Database;
use crate::routes::{activity, leaderboard, team, user, workout};
use crate::state::activity_state::ActivityState;
use crate::state::leaderboard_state::LeaderboardState;
use crate::state::team_state::TeamState;
use crate::state::user_state::UserState;
use crate::state::workout_state::WorkoutState;
use axum::routing::{get, IntoMakeService};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn routes(db_conn: Arc<Database>) -> IntoMakeService<Router> {
    let merged_router = {
        let user_state = UserState::new(&db_conn);
        let team_state = TeamState::new(&db_conn);
        let activity_state = ActivityState::new(&db_conn);
        let leaderboard_state = LeaderboardState::new(&db_conn);
        let workout_state = WorkoutState::new(&db_conn);

        Router::new()
            .merge(user::routes().with_state(user_state))
            .merge(team::routes().with_state(team_state))
            .merge(activity::routes().with_state(activity_state))
            .merge(leaderboard::routes().with_state(leaderboard_state))
            .merge(workout::routes().with_state(workout_state))
            .merge(Router::new().route("/health", get(|| async move { "Healthy..." })))
    };

    let app_router = Router::new()
        .nest("/api", merged_router)
        .layer(TraceLayer::new_for_http());

    app_router.into_make_service()
}
