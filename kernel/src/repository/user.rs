use crate::model::{
    id::{PlatformUserId, UserId},
    user::{
        event::{CreateUser, LinkPlatformId, UpdateUserRole},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // Register a user, optionally already tied to a platform identity
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    // Fetch every user together with their assigned role
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn find_by_platform_id(&self, platform_id: PlatformUserId) -> AppResult<Option<User>>;
    // Attach a platform identity to a user that has none yet
    async fn link_platform_id(&self, event: LinkPlatformId) -> AppResult<()>;
    // Assign a role to a user, or clear the assignment with None
    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()>;
}
