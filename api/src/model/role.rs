use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoleId,
    name::DescriptiveName,
    role::{
        event::{CreateRole, UpdateRole},
        Role, RoleCapabilities,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCapabilitiesDto {
    pub can_answer_questions: bool,
    pub is_root: bool,
    pub can_create_roles: bool,
    pub can_remove_roles: bool,
    pub can_change_roles: bool,
    pub can_assign_roles: bool,
}

impl From<RoleCapabilitiesDto> for RoleCapabilities {
    fn from(value: RoleCapabilitiesDto) -> Self {
        let RoleCapabilitiesDto {
            can_answer_questions,
            is_root,
            can_create_roles,
            can_remove_roles,
            can_change_roles,
            can_assign_roles,
        } = value;
        Self {
            answer_questions: can_answer_questions,
            root: is_root,
            create_roles: can_create_roles,
            remove_roles: can_remove_roles,
            change_roles: can_change_roles,
            assign_roles: can_assign_roles,
        }
    }
}

impl From<RoleCapabilities> for RoleCapabilitiesDto {
    fn from(value: RoleCapabilities) -> Self {
        let RoleCapabilities {
            answer_questions,
            root,
            create_roles,
            remove_roles,
            change_roles,
            assign_roles,
        } = value;
        Self {
            can_answer_questions: answer_questions,
            is_root: root,
            can_create_roles: create_roles,
            can_remove_roles: remove_roles,
            can_change_roles: change_roles,
            can_assign_roles: assign_roles,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    #[garde(length(chars, min = 1, max = 255))]
    pub name: String,
    #[garde(skip)]
    pub capabilities: RoleCapabilitiesDto,
}

impl TryFrom<CreateRoleRequest> for CreateRole {
    type Error = AppError;

    fn try_from(value: CreateRoleRequest) -> Result<Self, Self::Error> {
        let CreateRoleRequest { name, capabilities } = value;
        Ok(CreateRole::new(
            DescriptiveName::new(name)?,
            capabilities.into(),
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[garde(inner(length(chars, min = 1, max = 255)))]
    pub name: Option<String>,
    #[garde(skip)]
    pub capabilities: Option<RoleCapabilitiesDto>,
}

#[derive(new)]
pub struct UpdateRoleRequestWithId(RoleId, UpdateRoleRequest);

impl TryFrom<UpdateRoleRequestWithId> for UpdateRole {
    type Error = AppError;

    fn try_from(value: UpdateRoleRequestWithId) -> Result<Self, Self::Error> {
        let UpdateRoleRequestWithId(role_id, UpdateRoleRequest { name, capabilities }) = value;
        Ok(UpdateRole {
            role_id,
            name: name.map(DescriptiveName::new).transpose()?,
            capabilities: capabilities.map(RoleCapabilities::from),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub role_id: RoleId,
    pub name: String,
    pub capabilities: RoleCapabilitiesDto,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        let Role {
            role_id,
            name,
            capabilities,
        } = value;
        Self {
            role_id,
            name: name.into_inner(),
            capabilities: capabilities.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesResponse {
    pub items: Vec<RoleResponse>,
}

impl From<Vec<Role>> for RolesResponse {
    fn from(value: Vec<Role>) -> Self {
        Self {
            items: value.into_iter().map(RoleResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_converts_into_event() {
        let req: CreateRoleRequest = serde_json::from_value(serde_json::json!({
            "name": "first-line support",
            "capabilities": {
                "canAnswerQuestions": true,
                "isRoot": false,
                "canCreateRoles": false,
                "canRemoveRoles": false,
                "canChangeRoles": false,
                "canAssignRoles": true
            }
        }))
        .unwrap();

        let event = CreateRole::try_from(req).unwrap();
        assert_eq!(event.name, "first-line support");
        assert!(event.capabilities.answer_questions);
        assert!(event.capabilities.assign_roles);
        assert!(!event.capabilities.root);
    }

    #[test]
    fn overlong_name_fails_conversion() {
        let req = CreateRoleRequest {
            name: "n".repeat(16_000),
            capabilities: RoleCapabilitiesDto::from(RoleCapabilities::default()),
        };
        assert!(CreateRole::try_from(req).is_err());
    }

    #[test]
    fn partial_update_keeps_missing_fields_unset() {
        let req: UpdateRoleRequest =
            serde_json::from_value(serde_json::json!({ "name": "triage" })).unwrap();
        let event = UpdateRole::try_from(UpdateRoleRequestWithId::new(RoleId::new(), req)).unwrap();
        assert_eq!(event.name.unwrap(), "triage");
        assert!(event.capabilities.is_none());
    }
}
