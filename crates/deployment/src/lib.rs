use std::{convert::Infallible, sync::Arc, time::Duration};

use anyhow::Error as AnyhowError;
use async_trait::async_trait;
use axum::response::sse::Event;
use futures::{StreamExt, stream::BoxStream};
use models::models::activity::{PreviewEvent, PreviewSnapshot};
use services::services::{
    config::{Config, ConfigError},
    conversation::{ConversationError, ConversationService},
    preview::{PreviewError, PreviewService},
};
use thiserror::Error;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_stream::wrappers::{BroadcastStream, errors::BroadcastStreamRecvError};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Conversation(#[from] ConversationError),
    #[error(transparent)]
    Preview(#[from] PreviewError),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

/// How often idle conversations and finished preview runs are swept.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// What one sweep removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub conversations: usize,
    pub preview_runs: usize,
}

#[async_trait]
pub trait Deployment: Clone + Send + Sync + 'static {
    async fn new() -> Result<Self, DeploymentError>;

    /// TypeScript declarations of every type the front-end consumes.
    fn shared_types() -> Vec<String>;

    fn config(&self) -> &Arc<RwLock<Config>>;

    fn conversations(&self) -> &ConversationService;

    fn previews(&self) -> &PreviewService;

    /// Start (or restart) the preview of a conversation's current crew.
    async fn start_preview(&self, conversation_id: Uuid) -> Result<PreviewSnapshot, DeploymentError> {
        let crew = self.conversations().crew(conversation_id).await?;
        if crew.is_empty() {
            return Err(PreviewError::EmptyCrew(conversation_id).into());
        }
        Ok(self.previews().start(conversation_id, &crew).await)
    }

    async fn preview_snapshot(
        &self,
        conversation_id: Uuid,
    ) -> Result<PreviewSnapshot, DeploymentError> {
        self.conversations().get(conversation_id).await?;
        Ok(self.previews().snapshot(conversation_id).await?)
    }

    async fn close_preview(&self, conversation_id: Uuid) -> Result<(), DeploymentError> {
        self.conversations().get(conversation_id).await?;
        Ok(self.previews().close(conversation_id).await?)
    }

    /// Evict conversations idle for at least the configured TTL, their preview runs,
    /// and runs that finished at least the TTL ago.
    async fn sweep_idle(&self) -> SweepReport {
        let ttl = self.config().read().await.session_ttl();
        let evicted = self.conversations().evict_idle(ttl).await;
        let discarded = self.previews().discard(&evicted).await;
        let finished = self.previews().evict_finished(ttl).await;

        SweepReport {
            conversations: evicted.len(),
            preview_runs: discarded + finished,
        }
    }

    fn spawn_idle_sweeper(&self) -> JoinHandle<()> {
        let deployment = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                let report = deployment.sweep_idle().await;
                if report != SweepReport::default() {
                    tracing::debug!(
                        conversations = report.conversations,
                        preview_runs = report.preview_runs,
                        "Idle sweep finished"
                    );
                }
            }
        })
    }

    /// Current preview snapshot (if any) followed by every later snapshot of the
    /// conversation's runs, as SSE events.
    async fn stream_preview(
        &self,
        conversation_id: Uuid,
    ) -> BoxStream<'static, Result<Event, Infallible>> {
        // subscribe before reading so nothing published in between is lost
        let receiver = self.previews().subscribe();
        let current = self
            .previews()
            .snapshot(conversation_id)
            .await
            .ok()
            .map(|snapshot| PreviewEvent {
                conversation_id,
                snapshot,
            });

        let live = BroadcastStream::new(receiver).filter_map(move |event| async move {
            match event {
                Ok(event) if event.conversation_id == conversation_id => Some(event),
                Ok(_) => None,
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        conversation_id = %conversation_id,
                        "Preview stream lagged, skipped {} events",
                        skipped
                    );
                    None
                }
            }
        });

        futures::stream::iter(current)
            .chain(live)
            .filter_map(|event| async move {
                match Event::default().event("preview").json_data(&event.snapshot) {
                    Ok(sse) => Some(Ok(sse)),
                    Err(e) => {
                        tracing::error!("Failed to encode preview event: {}", e);
                        None
                    }
                }
            })
            .boxed()
    }
}
