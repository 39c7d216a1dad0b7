use crate::model::id::{PlatformUserId, RoleId, UserId};
use derive_new::new;

pub struct CreateUser {
    pub user_name: String,
    pub platform_id: Option<PlatformUserId>,
}

#[derive(new)]
pub struct LinkPlatformId {
    pub user_id: UserId,
    pub platform_id: PlatformUserId,
}

#[derive(new)]
pub struct UpdateUserRole {
    pub user_id: UserId,
    pub role_id: Option<RoleId>,
}
