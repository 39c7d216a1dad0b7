use crate::{
    extractor::ActingUser,
    model::user::{
        CreateUserRequest, LinkPlatformIdRequest, LinkPlatformIdRequestWithUserId,
        UpdateUserRoleRequest, UpdateUserRoleRequestWithUserId, UserResponse, UsersResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::UserId, role::SupportRole};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    _user: ActingUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .user_repository()
        .create(req.into())
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_user_list(
    _user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UsersResponse>> {
    registry
        .user_repository()
        .find_all()
        .await
        .map(UsersResponse::from)
        .map(Json)
}

pub async fn show_user(
    _user: ActingUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|user| match user {
            Some(user) => Ok(Json(user.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn update_user_role(
    user: ActingUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRoleRequest>,
) -> AppResult<StatusCode> {
    if !user.capabilities().can_assign_roles() {
        return Err(AppError::Forbidden);
    }

    let event = UpdateUserRoleRequestWithUserId::new(user_id, req);
    registry
        .user_repository()
        .update_role(event.into())
        .await
        .map(|_| StatusCode::OK)
}

// Rebinding a platform identity decides who can act through the bot,
// so the operation is restricted to root.
pub async fn link_platform_id(
    user: ActingUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<LinkPlatformIdRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    if !user.capabilities().is_root() {
        return Err(AppError::Forbidden);
    }

    let event = LinkPlatformIdRequestWithUserId::new(user_id, req);
    registry
        .user_repository()
        .link_platform_id(event.into())
        .await
        .map(|_| StatusCode::OK)
}
