use std::sync::Arc;

use async_trait::async_trait;
use deployment::{Deployment, DeploymentError};
use models::models::{
    activity::{ActivityItem, ActivityStatus, PreviewEvent, PreviewSamples, PreviewSnapshot},
    conversation::{
        ConversationSnapshot, ConversationState, SubmitMessage, SubmitOutcome, SubmitResponse,
    },
    crew_member::{CrewMember, MemberStatus},
    dashboard::{
        ActivityKind, AutomationCard, AutomationStatus, DashboardPage, RecentActivity, StatCard,
    },
    landing::{CrewBuilderPage, FeatureCard, Hero, HomePage, HowItWorksStep, UseCase},
    message::{Message, MessageType},
    navigation::{NavLink, Navigation, Route},
    template::{Classification, ClassifyRequest, TemplateCategory, TemplateSummary},
};
use services::services::{
    config::{Config, load_config_from_file, save_config_to_file},
    conversation::ConversationService,
    preview::PreviewService,
};
use tokio::sync::RwLock;
use ts_rs::TS;
use utils::{assets::config_path, response::ApiResponse};

#[derive(Clone)]
pub struct LocalDeployment {
    config: Arc<RwLock<Config>>,
    conversations: ConversationService,
    previews: PreviewService,
}

impl LocalDeployment {
    /// Build from an already loaded config without touching the filesystem.
    pub fn from_config(config: Config) -> Self {
        let conversations = ConversationService::new(config.response_delay());
        let previews = PreviewService::new();

        Self {
            config: Arc::new(RwLock::new(config)),
            conversations,
            previews,
        }
    }
}

#[async_trait]
impl Deployment for LocalDeployment {
    async fn new() -> Result<Self, DeploymentError> {
        let config_path = config_path()?;
        let config = load_config_from_file(&config_path).await;

        // Always save config (defaults may have been filled in)
        save_config_to_file(&config, &config_path).await?;
        tracing::info!(
            response_delay_ms = config.response_delay_ms,
            "Loaded config from {}",
            config_path.display()
        );

        Ok(Self::from_config(config))
    }

    fn shared_types() -> Vec<String> {
        vec![
            MemberStatus::decl(),
            CrewMember::decl(),
            MessageType::decl(),
            Message::decl(),
            TemplateCategory::decl(),
            Classification::decl(),
            ClassifyRequest::decl(),
            TemplateSummary::decl(),
            ConversationState::decl(),
            ConversationSnapshot::decl(),
            SubmitOutcome::decl(),
            SubmitMessage::decl(),
            SubmitResponse::decl(),
            ActivityStatus::decl(),
            ActivityItem::decl(),
            PreviewSnapshot::decl(),
            PreviewEvent::decl(),
            PreviewSamples::decl(),
            Hero::decl(),
            FeatureCard::decl(),
            UseCase::decl(),
            HomePage::decl(),
            HowItWorksStep::decl(),
            CrewBuilderPage::decl(),
            StatCard::decl(),
            AutomationStatus::decl(),
            AutomationCard::decl(),
            ActivityKind::decl(),
            RecentActivity::decl(),
            DashboardPage::decl(),
            Route::decl(),
            NavLink::decl(),
            Navigation::decl(),
            Config::decl(),
            ApiResponse::<()>::decl(),
        ]
    }

    fn config(&self) -> &Arc<RwLock<Config>> {
        &self.config
    }

    fn conversations(&self) -> &ConversationService {
        &self.conversations
    }

    fn previews(&self) -> &PreviewService {
        &self.previews
    }
}
