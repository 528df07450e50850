use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Pending,
    Running,
    Completed,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityStatus::Pending => write!(f, "pending"),
            ActivityStatus::Running => write!(f, "running"),
            ActivityStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A line of the preview activity feed. Lives only as long as the run that created it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
pub struct ActivityItem {
    pub id: String,
    pub agent: String,
    pub action: String,
    pub status: ActivityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub output: Option<String>,
}

/// Point-in-time view of a preview run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
pub struct PreviewSnapshot {
    #[ts(type = "number")]
    pub run_id: u64,
    pub is_running: bool,
    pub activities: Vec<ActivityItem>,
}

/// Broadcast after every mutation of a preview run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PreviewEvent {
    pub conversation_id: Uuid,
    pub snapshot: PreviewSnapshot,
}

/// Static "Sample Outputs" panel shown next to the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct PreviewSamples {
    pub report_title: String,
    pub key_findings: Vec<String>,
    pub report_length: String,
    pub sources_monitored: u32,
    pub updates_found: u32,
}
