use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{activity::PreviewSamples, message::Message};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub subheading: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub trust_indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UseCase {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct HomePage {
    pub hero: Hero,
    pub features_heading: String,
    pub features_intro: String,
    pub features: Vec<FeatureCard>,
    pub use_cases_heading: String,
    pub use_cases_intro: String,
    pub use_cases: Vec<UseCase>,
    pub use_cases_cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct HowItWorksStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Chrome around the builder chat: greeting, prompt chips and the preview side panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CrewBuilderPage {
    pub title: String,
    pub subtitle: String,
    pub input_placeholder: String,
    pub greeting: Message,
    pub example_prompts: Vec<String>,
    pub how_it_works: Vec<HowItWorksStep>,
    pub preview_samples: PreviewSamples,
}
