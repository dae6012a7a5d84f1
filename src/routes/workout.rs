use crate::{handler::workout_handler, state::workout_state::WorkoutState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<WorkoutState> {
    let router = Router::new().nest(
        "/workouts",
        Router::new()
            .route(
                "/",
                post(workout_handler::create_workout).get(workout_handler::list_workouts),
            )
            .route("/recommended", get(workout_handler::recommended_workouts))
            .route(
                "/by_difficulty",
                get(workout_handler::workouts_by_difficulty),
            )
            .route(
                "/:id",
                get(workout_handler::get_workout)
                    .put(workout_handler::update_workout)
                    .delete(workout_handler::delete_workout),
            ),
    );
    return router;
}
