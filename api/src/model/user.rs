use crate::model::role::RoleResponse;
use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{PlatformUserId, RoleId, UserId},
    user::{
        event::{CreateUser, LinkPlatformId, UpdateUserRole},
        User,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(chars, min = 1, max = 255))]
    pub user_name: String,
    #[garde(skip)]
    pub platform_id: Option<i64>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            user_name,
            platform_id,
        } = value;
        Self {
            user_name,
            platform_id: platform_id.map(PlatformUserId::new),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    /// `null` clears the assignment.
    pub role_id: Option<RoleId>,
}

#[derive(new)]
pub struct UpdateUserRoleRequestWithUserId(UserId, UpdateUserRoleRequest);

impl From<UpdateUserRoleRequestWithUserId> for UpdateUserRole {
    fn from(value: UpdateUserRoleRequestWithUserId) -> Self {
        let UpdateUserRoleRequestWithUserId(user_id, UpdateUserRoleRequest { role_id }) = value;
        Self { user_id, role_id }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkPlatformIdRequest {
    #[garde(range(min = 1))]
    pub platform_id: i64,
}

#[derive(new)]
pub struct LinkPlatformIdRequestWithUserId(UserId, LinkPlatformIdRequest);

impl From<LinkPlatformIdRequestWithUserId> for LinkPlatformId {
    fn from(value: LinkPlatformIdRequestWithUserId) -> Self {
        let LinkPlatformIdRequestWithUserId(user_id, LinkPlatformIdRequest { platform_id }) = value;
        Self {
            user_id,
            platform_id: PlatformUserId::new(platform_id),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub platform_id: Option<i64>,
    pub role: Option<RoleResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            platform_id,
            role,
            created_at,
        } = value;
        Self {
            user_id,
            user_name,
            platform_id: platform_id.map(PlatformUserId::raw),
            role: role.map(RoleResponse::from),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{name::DescriptiveName, role::{Role, RoleCapabilities}};

    #[test]
    fn user_response_serializes_camel_case() {
        let user = User {
            user_id: UserId::new(),
            user_name: "alice".into(),
            platform_id: Some(PlatformUserId::new(77)),
            role: Some(Role {
                role_id: RoleId::new(),
                name: DescriptiveName::new("helper").unwrap(),
                capabilities: RoleCapabilities::default(),
            }),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["platformId"], 77);
        assert_eq!(json["role"]["name"], "helper");
        assert_eq!(json["role"]["capabilities"]["isRoot"], false);
    }

    #[test]
    fn missing_role_id_clears_the_assignment() {
        let req: UpdateUserRoleRequest =
            serde_json::from_value(serde_json::json!({ "roleId": null })).unwrap();
        let event = UpdateUserRole::from(UpdateUserRoleRequestWithUserId::new(UserId::new(), req));
        assert!(event.role_id.is_none());
    }
}
