use super::{
    health::build_health_check_routers, message::build_message_routers, role::build_role_routers,
    user::build_user_router,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_role_routers())
        .merge(build_user_router())
        .merge(build_message_routers());
    Router::new().nest("/api/v1", router)
}
