use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kernel::model::{
    id::{PlatformUserId, UserId},
    role::RoleCapabilities,
    user::User,
};
use registry::AppRegistry;
use shared::error::AppError;

/// Header the bot gateway uses to state on whose behalf it is calling.
pub const PLATFORM_USER_HEADER: &str = "X-Platform-User-Id";

/// The stored user behind the platform identity of the request.
/// Unknown platform ids are rejected before any handler runs.
pub struct ActingUser(pub User);

impl ActingUser {
    pub fn id(&self) -> UserId {
        self.0.user_id
    }

    /// Capability flags of the assigned role; a user without a role
    /// has no capabilities at all.
    pub fn capabilities(&self) -> RoleCapabilities {
        self.0
            .role
            .as_ref()
            .map(|r| r.capabilities)
            .unwrap_or_default()
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let platform_id: PlatformUserId = parts
            .headers
            .get(PLATFORM_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthenticated)?
            .parse()
            .map_err(|_| AppError::Unauthenticated)?;

        let user = registry
            .user_repository()
            .find_by_platform_id(platform_id)
            .await?
            .ok_or(AppError::Forbidden)?;

        Ok(Self(user))
    }
}
