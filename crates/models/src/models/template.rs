use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::crew_member::CrewMember;

/// Business process a crew template is built for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    CompetitorIntelligence,
    ContentRepurposing,
    Recruitment,
    LeadGeneration,
    FeedbackAnalysis,
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateCategory::CompetitorIntelligence => write!(f, "competitor-intelligence"),
            TemplateCategory::ContentRepurposing => write!(f, "content-repurposing"),
            TemplateCategory::Recruitment => write!(f, "recruitment"),
            TemplateCategory::LeadGeneration => write!(f, "lead-generation"),
            TemplateCategory::FeedbackAnalysis => write!(f, "feedback-analysis"),
        }
    }
}

/// Result of running user text through the keyword classifier.
///
/// `category` is `None` for the clarifying fallback, in which case `crew` is empty and
/// must not replace whatever crew is already displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
pub struct Classification {
    pub category: Option<TemplateCategory>,
    pub response: String,
    pub crew: Vec<CrewMember>,
}

impl Classification {
    pub fn is_fallback(&self) -> bool {
        self.category.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
pub struct ClassifyRequest {
    pub input: String,
}

/// Catalog entry as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct TemplateSummary {
    pub category: TemplateCategory,
    pub response: String,
    pub crew: Vec<CrewMember>,
}
