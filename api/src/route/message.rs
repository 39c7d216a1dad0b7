use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::message::ingest_message;

pub fn build_message_routers() -> Router<AppRegistry> {
    let messages_routers = Router::new().route("/", post(ingest_message));

    Router::new().nest("/messages", messages_routers)
}
