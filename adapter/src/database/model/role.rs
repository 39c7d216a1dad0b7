use kernel::model::{
    id::RoleId,
    name::DescriptiveName,
    role::{Role, RoleCapabilities},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct RoleRow {
    pub role_id: RoleId,
    pub role_name: String,
    pub can_answer_questions: bool,
    pub is_root: bool,
    pub can_create_roles: bool,
    pub can_remove_roles: bool,
    pub can_change_roles: bool,
    pub can_assign_roles: bool,
}

impl TryFrom<RoleRow> for Role {
    type Error = AppError;

    fn try_from(value: RoleRow) -> Result<Self, Self::Error> {
        let RoleRow {
            role_id,
            role_name,
            can_answer_questions,
            is_root,
            can_create_roles,
            can_remove_roles,
            can_change_roles,
            can_assign_roles,
        } = value;
        Ok(Role {
            role_id,
            // the column is capped at the same length, so this only
            // fails if the row was written past the domain rule
            name: DescriptiveName::new(role_name)?,
            capabilities: RoleCapabilities {
                answer_questions: can_answer_questions,
                root: is_root,
                create_roles: can_create_roles,
                remove_roles: can_remove_roles,
                change_roles: can_change_roles,
                assign_roles: can_assign_roles,
            },
        })
    }
}
