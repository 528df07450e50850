use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Message {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            message_type: MessageType::Ai,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
