use crate::{
    extractor::ActingUser,
    model::role::{
        CreateRoleRequest, RoleResponse, RolesResponse, UpdateRoleRequest, UpdateRoleRequestWithId,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::RoleId, role::SupportRole};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_role(
    user: ActingUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoleRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    if !user.capabilities().can_create_roles() {
        return Err(AppError::Forbidden);
    }

    registry
        .role_repository()
        .create(req.try_into()?)
        .await
        .map(|_| StatusCode::CREATED)
}

pub async fn show_role_list(
    _user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RolesResponse>> {
    registry
        .role_repository()
        .find_all()
        .await
        .map(RolesResponse::from)
        .map(Json)
}

pub async fn show_role(
    _user: ActingUser,
    Path(role_id): Path<RoleId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoleResponse>> {
    registry
        .role_repository()
        .find_by_id(role_id)
        .await
        .map(RoleResponse::from)
        .map(Json)
}

pub async fn update_role(
    user: ActingUser,
    Path(role_id): Path<RoleId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoleRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;
    if !user.capabilities().can_change_roles() {
        return Err(AppError::Forbidden);
    }

    let event = UpdateRoleRequestWithId::new(role_id, req).try_into()?;
    registry
        .role_repository()
        .update(event)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_role(
    user: ActingUser,
    Path(role_id): Path<RoleId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.capabilities().can_remove_roles() {
        return Err(AppError::Forbidden);
    }

    registry
        .role_repository()
        .delete(role_id)
        .await
        .map(|_| StatusCode::OK)
}

// Wiping every role leaves the backend without capability carriers,
// so only a root-capable caller may do it.
pub async fn delete_all_roles(
    user: ActingUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.capabilities().is_root() {
        return Err(AppError::Forbidden);
    }

    registry
        .role_repository()
        .delete_all()
        .await
        .map(|_| StatusCode::OK)
}
