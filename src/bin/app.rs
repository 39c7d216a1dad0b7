use adapter::database::connect_database_with;
use anyhow::{Context, Result};
use api::route::v1;
use axum::Router;
use kernel::model::{
    id::PlatformUserId,
    role::SupportRole,
    user::event::{CreateUser, UpdateUserRole},
};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);

    let registry = AppRegistry::new(pool);

    if let Some(raw) = app_config.bootstrap_root_platform_id {
        ensure_root_operator(&registry, PlatformUserId::new(raw)).await?;
    }

    let app = Router::new()
        .merge(v1::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    let addr = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 8080);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e, error.message = %e, "Unexpected error"
            )
        })
}

// Makes sure the configured platform identity exists and carries a
// root-capable role, so every capability-guarded endpoint stays
// reachable on a fresh database.
async fn ensure_root_operator(registry: &AppRegistry, platform_id: PlatformUserId) -> Result<()> {
    let roles = registry.role_repository().find_all().await?;
    let root = roles
        .into_iter()
        .find(|r| r.is_root())
        .context("no root-capable role present; run the migrations first")?;

    let user_id = match registry
        .user_repository()
        .find_by_platform_id(platform_id)
        .await?
    {
        Some(user) => user.user_id,
        None => {
            registry
                .user_repository()
                .create(CreateUser {
                    user_name: "root".into(),
                    platform_id: Some(platform_id),
                })
                .await?
        }
    };

    registry
        .user_repository()
        .update_role(UpdateUserRole::new(user_id, Some(root.role_id)))
        .await?;
    tracing::info!(%user_id, %platform_id, "ensured root operator");
    Ok(())
}
