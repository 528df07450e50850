use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::{crew_member::CrewMember, message::Message, template::TemplateCategory};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Idle,
    AwaitingResponse,
}

impl ConversationState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ConversationState::AwaitingResponse)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ConversationSnapshot {
    pub id: Uuid,
    pub state: ConversationState,
    pub messages: Vec<Message>,
    pub crew: Vec<CrewMember>,
    /// Template behind the current crew, if one has been built.
    pub category: Option<TemplateCategory>,
}

/// What happened to a submission. Ignored submissions are not errors: the builder
/// simply does not accept them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted,
    IgnoredEmpty,
    IgnoredBusy,
}

#[derive(Debug, Clone, Deserialize, TS)]
pub struct SubmitMessage {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub conversation: ConversationSnapshot,
}
