use crate::model::{id::RoleId, name::DescriptiveName, role::RoleCapabilities};
use derive_new::new;

#[derive(new)]
pub struct CreateRole {
    pub name: DescriptiveName,
    pub capabilities: RoleCapabilities,
}

#[derive(Debug)]
pub struct UpdateRole {
    pub role_id: RoleId,
    pub name: Option<DescriptiveName>,
    pub capabilities: Option<RoleCapabilities>,
}
