use crate::model::user::UserResponse;
use garde::Validate;
use serde::{Deserialize, Serialize};

/// What the bot gateway forwards for every inbound chat message.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessageRequest {
    #[garde(range(min = 1))]
    pub platform_user_id: i64,
    #[garde(length(chars, min = 1, max = 255))]
    pub user_name: String,
    #[garde(length(chars, min = 1, max = 4000))]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessageResponse {
    pub sender: UserResponse,
    /// True when this message created the user record.
    pub first_contact: bool,
    pub sender_can_answer: bool,
}
