use crate::model::{
    id::{PlatformUserId, UserId},
    role::Role,
};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    /// Identity on the messaging platform. Absent until the person
    /// first talks to the bot or an operator links it.
    pub platform_id: Option<PlatformUserId>,
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}
