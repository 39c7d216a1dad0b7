use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::role::{
    delete_all_roles, delete_role, register_role, show_role, show_role_list, update_role,
};

pub fn build_role_routers() -> Router<AppRegistry> {
    let roles_routers = Router::new()
        .route("/", post(register_role))
        .route("/", get(show_role_list))
        .route("/", delete(delete_all_roles))
        .route("/:role_id", get(show_role))
        .route("/:role_id", put(update_role))
        .route("/:role_id", delete(delete_role));

    Router::new().nest("/roles", roles_routers)
}
