use chrono::{DateTime, Utc};
use kernel::model::{
    id::{PlatformUserId, RoleId, UserId},
    name::DescriptiveName,
    role::{Role, RoleCapabilities},
    user::User,
};
use shared::error::{AppError, AppResult};

// One row of `users` LEFT JOINed with `roles`; the role columns are
// all NULL when the user has no assignment.
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub platform_id: Option<PlatformUserId>,
    pub created_at: DateTime<Utc>,
    pub role_id: Option<RoleId>,
    pub role_name: Option<String>,
    pub can_answer_questions: Option<bool>,
    pub is_root: Option<bool>,
    pub can_create_roles: Option<bool>,
    pub can_remove_roles: Option<bool>,
    pub can_change_roles: Option<bool>,
    pub can_assign_roles: Option<bool>,
}

impl UserRow {
    pub fn into_user(self) -> AppResult<User> {
        let UserRow {
            user_id,
            user_name,
            platform_id,
            created_at,
            role_id,
            role_name,
            can_answer_questions,
            is_root,
            can_create_roles,
            can_remove_roles,
            can_change_roles,
            can_assign_roles,
        } = self;

        let role = match role_id {
            None => None,
            Some(role_id) => {
                let role_name = role_name.ok_or_else(|| {
                    AppError::ConversionEntityError(format!(
                        "role {role_id} joined without a name"
                    ))
                })?;
                Some(Role {
                    role_id,
                    name: DescriptiveName::new(role_name)?,
                    capabilities: RoleCapabilities {
                        answer_questions: can_answer_questions.unwrap_or_default(),
                        root: is_root.unwrap_or_default(),
                        create_roles: can_create_roles.unwrap_or_default(),
                        remove_roles: can_remove_roles.unwrap_or_default(),
                        change_roles: can_change_roles.unwrap_or_default(),
                        assign_roles: can_assign_roles.unwrap_or_default(),
                    },
                })
            }
        };

        Ok(User {
            user_id,
            user_name,
            platform_id,
            role,
            created_at,
        })
    }
}
