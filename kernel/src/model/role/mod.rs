use crate::model::{id::RoleId, name::DescriptiveName};

pub mod event;

/// Capability queries answered by a support role.
pub trait SupportRole {
    fn can_answer_questions(&self) -> bool;
    fn is_root(&self) -> bool;
    fn can_create_roles(&self) -> bool;
    fn can_remove_roles(&self) -> bool;
    fn can_change_roles(&self) -> bool;
    fn can_assign_roles(&self) -> bool;
}

/// Stored flag set backing [`SupportRole`]. A root-capable set passes
/// every check regardless of the other flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCapabilities {
    pub answer_questions: bool,
    pub root: bool,
    pub create_roles: bool,
    pub remove_roles: bool,
    pub change_roles: bool,
    pub assign_roles: bool,
}

impl RoleCapabilities {
    pub fn root() -> Self {
        Self {
            root: true,
            ..Self::default()
        }
    }
}

impl SupportRole for RoleCapabilities {
    fn can_answer_questions(&self) -> bool {
        self.root || self.answer_questions
    }

    fn is_root(&self) -> bool {
        self.root
    }

    fn can_create_roles(&self) -> bool {
        self.root || self.create_roles
    }

    fn can_remove_roles(&self) -> bool {
        self.root || self.remove_roles
    }

    fn can_change_roles(&self) -> bool {
        self.root || self.change_roles
    }

    fn can_assign_roles(&self) -> bool {
        self.root || self.assign_roles
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub role_id: RoleId,
    pub name: DescriptiveName,
    pub capabilities: RoleCapabilities,
}

impl SupportRole for Role {
    fn can_answer_questions(&self) -> bool {
        self.capabilities.can_answer_questions()
    }

    fn is_root(&self) -> bool {
        self.capabilities.is_root()
    }

    fn can_create_roles(&self) -> bool {
        self.capabilities.can_create_roles()
    }

    fn can_remove_roles(&self) -> bool {
        self.capabilities.can_remove_roles()
    }

    fn can_change_roles(&self) -> bool {
        self.capabilities.can_change_roles()
    }

    fn can_assign_roles(&self) -> bool {
        self.capabilities.can_assign_roles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capability_set_denies_everything() {
        let caps = RoleCapabilities::default();
        assert!(!caps.can_answer_questions());
        assert!(!caps.is_root());
        assert!(!caps.can_create_roles());
        assert!(!caps.can_remove_roles());
        assert!(!caps.can_change_roles());
        assert!(!caps.can_assign_roles());
    }

    #[test]
    fn root_passes_every_check() {
        let caps = RoleCapabilities::root();
        assert!(caps.can_answer_questions());
        assert!(caps.is_root());
        assert!(caps.can_create_roles());
        assert!(caps.can_remove_roles());
        assert!(caps.can_change_roles());
        assert!(caps.can_assign_roles());
    }

    #[test]
    fn single_flag_grants_only_that_capability() {
        let caps = RoleCapabilities {
            assign_roles: true,
            ..RoleCapabilities::default()
        };
        assert!(caps.can_assign_roles());
        assert!(!caps.can_create_roles());
        assert!(!caps.is_root());
    }
}
