use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
pub enum AutomationStatus {
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct StatCard {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AutomationCard {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: AutomationStatus,
    pub last_run: String,
    pub runs: u32,
    pub hours_saved: u32,
    pub value_generated: u32,
    pub success_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct RecentActivity {
    pub id: u32,
    pub crew: String,
    pub action: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

/// Everything the dashboard route renders. All figures are display constants.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct DashboardPage {
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub automations: Vec<AutomationCard>,
    pub recent_activity: Vec<RecentActivity>,
}
