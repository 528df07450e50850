//! Drives the scripted timeline on tokio timers, one run per conversation.
//!
//! Every run gets a fresh id from a monotonically increasing counter. The driver task
//! re-checks under the write lock that its id is still the current one before each
//! mutation, so a timer left over from a superseded or closed run can never touch a newer
//! run's items. Superseded drivers are also aborted.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use models::models::{
    activity::{ActivityItem, PreviewEvent, PreviewSnapshot},
    crew_member::CrewMember,
};
use thiserror::Error;
use tokio::{
    sync::{RwLock, broadcast},
    task::JoinHandle,
    time::Instant,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::timeline::{SCRIPT, initial_activities};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("No preview running for conversation {0}")]
    NotFound(Uuid),
    #[error("Conversation {0} has no crew to preview yet")]
    EmptyCrew(Uuid),
}

struct ActiveRun {
    run_id: u64,
    is_running: bool,
    finished_at: Option<Instant>,
    activities: Vec<ActivityItem>,
    driver: JoinHandle<()>,
}

impl ActiveRun {
    fn snapshot(&self) -> PreviewSnapshot {
        PreviewSnapshot {
            run_id: self.run_id,
            is_running: self.is_running,
            activities: self.activities.clone(),
        }
    }
}

type Runs = Arc<RwLock<HashMap<Uuid, ActiveRun>>>;

#[derive(Clone)]
pub struct PreviewService {
    runs: Runs,
    next_run_id: Arc<AtomicU64>,
    events: broadcast::Sender<PreviewEvent>,
}

impl Default for PreviewService {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewService {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(1000);
        Self {
            runs: Arc::new(RwLock::new(HashMap::new())),
            next_run_id: Arc::new(AtomicU64::new(0)),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreviewEvent> {
        self.events.subscribe()
    }

    /// Start a run, or restart it from t=0 if one already exists for the conversation.
    pub async fn start(&self, conversation_id: Uuid, crew: &[CrewMember]) -> PreviewSnapshot {
        let snapshot = {
            let mut runs = self.runs.write().await;
            let run_id = self.next_run_id.fetch_add(1, Ordering::SeqCst) + 1;

            if let Some(previous) = runs.remove(&conversation_id) {
                previous.driver.abort();
                debug!(
                    conversation_id = %conversation_id,
                    superseded = previous.run_id,
                    run_id,
                    "Restarting preview"
                );
            }

            let driver = tokio::spawn(drive(
                self.runs.clone(),
                self.events.clone(),
                conversation_id,
                run_id,
                Instant::now(),
            ));
            let run = ActiveRun {
                run_id,
                is_running: true,
                finished_at: None,
                activities: initial_activities(crew),
                driver,
            };
            let snapshot = run.snapshot();
            runs.insert(conversation_id, run);
            // published under the lock so subscribers see runs in id order
            publish(&self.events, conversation_id, snapshot.clone());
            snapshot
        };

        info!(
            conversation_id = %conversation_id,
            run_id = snapshot.run_id,
            "Started preview run"
        );
        snapshot
    }

    pub async fn snapshot(&self, conversation_id: Uuid) -> Result<PreviewSnapshot, PreviewError> {
        self.runs
            .read()
            .await
            .get(&conversation_id)
            .map(ActiveRun::snapshot)
            .ok_or(PreviewError::NotFound(conversation_id))
    }

    /// Discard the run. Its remaining steps never fire.
    pub async fn close(&self, conversation_id: Uuid) -> Result<(), PreviewError> {
        let run = self
            .runs
            .write()
            .await
            .remove(&conversation_id)
            .ok_or(PreviewError::NotFound(conversation_id))?;
        run.driver.abort();

        info!(conversation_id = %conversation_id, run_id = run.run_id, "Closed preview");
        Ok(())
    }

    /// Drop runs that finished at least `retention` ago. Returns how many were dropped.
    pub async fn evict_finished(&self, retention: Duration) -> usize {
        let now = Instant::now();
        let mut runs = self.runs.write().await;
        let before = runs.len();
        runs.retain(|_, run| {
            run.finished_at
                .is_none_or(|finished| now.saturating_duration_since(finished) < retention)
        });

        let evicted = before - runs.len();
        if evicted > 0 {
            info!(evicted, remaining = runs.len(), "Evicted finished preview runs");
        }
        evicted
    }

    /// Discard the runs of conversations that no longer exist.
    pub async fn discard(&self, conversation_ids: &[Uuid]) -> usize {
        let mut runs = self.runs.write().await;
        let mut discarded = 0;
        for id in conversation_ids {
            if let Some(run) = runs.remove(id) {
                run.driver.abort();
                discarded += 1;
            }
        }
        discarded
    }

    pub async fn active_runs(&self) -> usize {
        self.runs
            .read()
            .await
            .values()
            .filter(|run| run.is_running)
            .count()
    }
}

fn publish(
    events: &broadcast::Sender<PreviewEvent>,
    conversation_id: Uuid,
    snapshot: PreviewSnapshot,
) {
    // no subscribers is fine
    let _ = events.send(PreviewEvent {
        conversation_id,
        snapshot,
    });
}

async fn drive(
    runs: Runs,
    events: broadcast::Sender<PreviewEvent>,
    conversation_id: Uuid,
    run_id: u64,
    started: Instant,
) {
    for step in SCRIPT.iter() {
        tokio::time::sleep_until(started + step.at).await;

        {
            let mut runs = runs.write().await;
            let Some(run) = runs
                .get_mut(&conversation_id)
                .filter(|run| run.run_id == run_id)
            else {
                debug!(
                    conversation_id = %conversation_id,
                    run_id,
                    "Run no longer current, dropping remaining steps"
                );
                return;
            };

            step.apply(&mut run.activities);
            if step.finishes_run {
                run.is_running = false;
                run.finished_at = Some(Instant::now());
            }
            // a restart waiting on the lock must not publish ahead of this step
            publish(&events, conversation_id, run.snapshot());
        }
    }

    debug!(conversation_id = %conversation_id, run_id, "Preview run finished");
}
