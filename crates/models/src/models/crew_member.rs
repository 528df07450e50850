use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Pending,
    Active,
    Completed,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Pending => write!(f, "pending"),
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One agent stand-in of a crew. Display-only: the status is fixed by the template
/// that produced the member and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
pub struct CrewMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub description: String,
    pub status: MemberStatus,
}
