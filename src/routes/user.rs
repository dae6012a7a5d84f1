use crate::{handler::user_handler, state::user_state::UserState};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<UserState> {
    let router = Router::new()
        .nest(
            "/users",
            Router::new()
                .route(
                    "/",
                    post(user_handler::create_user).get(user_handler::list_users),
                )
                .route(
                    "/:id",
                    get(user_handler::get_user)
                        .put(user_handler::update_user)
                        .delete(user_handler::delete_user),
                ),
        )
        .nest(
            "/profiles",
            Router::new().route(
                "/:user_id",
                get(user_handler::get_profile).put(user_handler::upsert_profile),
            ),
        );
    return router;
}
