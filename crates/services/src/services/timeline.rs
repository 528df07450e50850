//! Scripted execution timeline for the crew preview.
//!
//! The script is content-independent: only the agent names come from the crew, every action
//! and output string is fixed. Steps index items positionally, so a run always has exactly
//! three items.

use std::time::Duration;

use models::models::{
    activity::{ActivityItem, ActivityStatus, PreviewSamples},
    crew_member::CrewMember,
};

pub const RUN_LENGTH: usize = 3;

const INITIAL_ITEMS: [(ActivityStatus, &str); RUN_LENGTH] = [
    (ActivityStatus::Running, "Starting research phase..."),
    (ActivityStatus::Pending, "Waiting for research data..."),
    (ActivityStatus::Pending, "Ready to compile results..."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    /// Mark the item completed with an output line.
    Complete { output: &'static str },
    /// Mark the item running with a new action line.
    Start { action: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineStep {
    /// Offset from the start of the run.
    pub at: Duration,
    pub index: usize,
    pub change: StepChange,
    /// Whether this step ends the run.
    pub finishes_run: bool,
}

impl TimelineStep {
    const fn new(at_ms: u64, index: usize, change: StepChange, finishes_run: bool) -> Self {
        Self {
            at: Duration::from_millis(at_ms),
            index,
            change,
            finishes_run,
        }
    }

    /// Apply to a run's items. Missing items are left alone.
    pub fn apply(&self, items: &mut [ActivityItem]) {
        let Some(item) = items.get_mut(self.index) else {
            return;
        };
        match self.change {
            StepChange::Complete { output } => {
                item.status = ActivityStatus::Completed;
                item.output = Some(output.to_string());
            }
            StepChange::Start { action } => {
                item.status = ActivityStatus::Running;
                item.action = action.to_string();
            }
        }
    }
}

pub const SCRIPT: [TimelineStep; 5] = [
    TimelineStep::new(
        2000,
        0,
        StepChange::Complete {
            output: "Found 15 competitor updates",
        },
        false,
    ),
    TimelineStep::new(
        2500,
        1,
        StepChange::Start {
            action: "Analyzing competitor data...",
        },
        false,
    ),
    TimelineStep::new(
        4500,
        1,
        StepChange::Complete {
            output: "Identified 3 key trends",
        },
        false,
    ),
    TimelineStep::new(
        5000,
        2,
        StepChange::Start {
            action: "Creating weekly report...",
        },
        false,
    ),
    TimelineStep::new(
        7000,
        2,
        StepChange::Complete {
            output: "Weekly report generated successfully",
        },
        true,
    ),
];

/// Items at t=0. Agent names are copied from crew positions 0..3; a missing member shows up
/// as `Agent N`.
pub fn initial_activities(crew: &[CrewMember]) -> Vec<ActivityItem> {
    INITIAL_ITEMS
        .iter()
        .enumerate()
        .map(|(index, (status, action))| ActivityItem {
            id: (index + 1).to_string(),
            agent: crew
                .get(index)
                .map(|member| member.name.clone())
                .unwrap_or_else(|| format!("Agent {}", index + 1)),
            action: action.to_string(),
            status: *status,
            output: None,
        })
        .collect()
}

pub fn total_duration() -> Duration {
    SCRIPT.last().map(|step| step.at).unwrap_or_default()
}

pub fn preview_samples() -> PreviewSamples {
    PreviewSamples {
        report_title: "Weekly Competitor Report".to_string(),
        key_findings: vec![
            "Competitor A launched new pricing strategy".to_string(),
            "Competitor B expanded to 3 new markets".to_string(),
            "Industry trend toward AI integration".to_string(),
        ],
        report_length: "2,450 words".to_string(),
        sources_monitored: 47,
        updates_found: 15,
    }
}
