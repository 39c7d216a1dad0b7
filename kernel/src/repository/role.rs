use crate::model::{
    id::RoleId,
    role::{
        event::{CreateRole, UpdateRole},
        Role,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    // Register a new role
    async fn create(&self, event: CreateRole) -> AppResult<RoleId>;
    // Fetch every known role
    async fn find_all(&self) -> AppResult<Vec<Role>>;
    // Fetch one role; a missing id is EntityNotFound
    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Role>;
    // Rename a role or replace its capability flags
    async fn update(&self, event: UpdateRole) -> AppResult<()>;
    // Remove one role; assignments pointing at it are cleared
    async fn delete(&self, role_id: RoleId) -> AppResult<()>;
    // Remove every role
    async fn delete_all(&self) -> AppResult<()>;
}
