use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    link_platform_id, register_user, show_user, show_user_list, update_user_role,
};

pub fn build_user_router() -> Router<AppRegistry> {
    let users_routers = Router::new()
        .route("/", post(register_user))
        .route("/", get(show_user_list))
        .route("/:user_id", get(show_user))
        .route("/:user_id/role", put(update_user_role))
        .route("/:user_id/platform-id", put(link_platform_id));

    Router::new().nest("/users", users_routers)
}
