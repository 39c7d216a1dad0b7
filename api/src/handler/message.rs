use crate::model::message::{InboundMessageRequest, InboundMessageResponse};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{
    id::PlatformUserId,
    role::SupportRole,
    user::event::CreateUser,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

/// Entry point for the bot gateway. The sender is looked up by their
/// platform id; a person talking to the bot for the first time gets a
/// user record on the spot.
pub async fn ingest_message(
    State(registry): State<AppRegistry>,
    Json(req): Json<InboundMessageRequest>,
) -> AppResult<(StatusCode, Json<InboundMessageResponse>)> {
    req.validate(&())?;

    let platform_id = PlatformUserId::new(req.platform_user_id);
    let repo = registry.user_repository();

    let (sender, first_contact) = match repo.find_by_platform_id(platform_id).await? {
        Some(user) => (user, false),
        None => {
            let user_id = repo
                .create(CreateUser {
                    user_name: req.user_name.clone(),
                    platform_id: Some(platform_id),
                })
                .await?;
            let user = repo.find_by_id(user_id).await?.ok_or_else(|| {
                AppError::EntityNotFound(format!("user {user_id} vanished after creation"))
            })?;
            tracing::info!(%user_id, %platform_id, "registered user on first contact");
            (user, true)
        }
    };

    let sender_can_answer = sender
        .role
        .as_ref()
        .map(|r| r.can_answer_questions())
        .unwrap_or(false);

    let status = if first_contact {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(InboundMessageResponse {
            sender: sender.into(),
            first_contact,
            sender_can_answer,
        }),
    ))
}
