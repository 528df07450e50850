//! Conversation sessions of the crew builder.
//!
//! [`ConversationSession`] is the pure `idle -> awaiting_response -> idle` state machine.
//! [`ConversationService`] owns the sessions and the reply timer.

use std::{collections::HashMap, sync::Arc, time::Duration};

use models::models::{
    conversation::{ConversationSnapshot, ConversationState, SubmitOutcome, SubmitResponse},
    crew_member::CrewMember,
    message::Message,
    template::{Classification, TemplateCategory},
};
use thiserror::Error;
use tokio::{sync::RwLock, time::Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{catalog::GREETING, classifier::classify};

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Conversation not found: {0}")]
    NotFound(Uuid),
}

/// Assistant reply produced at submit time, appended once the delay elapses.
#[derive(Debug, Clone)]
pub struct PendingReply {
    classification: Classification,
}

impl PendingReply {
    pub fn classification(&self) -> &Classification {
        &self.classification
    }
}

#[derive(Debug)]
pub enum Submission {
    Accepted(PendingReply),
    Ignored(SubmitOutcome),
}

impl Submission {
    pub fn outcome(&self) -> SubmitOutcome {
        match self {
            Submission::Accepted(_) => SubmitOutcome::Accepted,
            Submission::Ignored(outcome) => *outcome,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    state: ConversationState,
    messages: Vec<Message>,
    crew: Vec<CrewMember>,
    category: Option<TemplateCategory>,
}

impl ConversationSession {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            state: ConversationState::Idle,
            messages: vec![Message::ai(GREETING)],
            crew: Vec::new(),
            category: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn crew(&self) -> &[CrewMember] {
        &self.crew
    }

    /// Accept user text. The user message is appended before anything else happens, so it
    /// always precedes the reply it triggers.
    pub fn submit(&mut self, input: &str) -> Submission {
        if input.trim().is_empty() {
            return Submission::Ignored(SubmitOutcome::IgnoredEmpty);
        }
        if self.state.is_busy() {
            return Submission::Ignored(SubmitOutcome::IgnoredBusy);
        }

        self.messages.push(Message::user(input));
        self.state = ConversationState::AwaitingResponse;

        Submission::Accepted(PendingReply {
            classification: classify(input),
        })
    }

    /// Append the reply and, unless it is the clarifying fallback, swap in its crew.
    /// Returns false when no reply was outstanding.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if !self.state.is_busy() {
            return false;
        }

        let Classification {
            category,
            response,
            crew,
        } = reply.classification;

        self.messages.push(Message::ai(response));
        if !crew.is_empty() {
            self.crew = crew;
            self.category = category;
        }
        self.state = ConversationState::Idle;
        true
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            id: self.id,
            state: self.state,
            messages: self.messages.clone(),
            crew: self.crew.clone(),
            category: self.category,
        }
    }
}

struct StoredSession {
    session: ConversationSession,
    /// Last create, submit or delivered reply.
    last_active: Instant,
}

impl StoredSession {
    fn new(session: ConversationSession) -> Self {
        Self {
            session,
            last_active: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }
}

type Sessions = Arc<RwLock<HashMap<Uuid, StoredSession>>>;

#[derive(Clone)]
pub struct ConversationService {
    sessions: Sessions,
    response_delay: Duration,
}

impl ConversationService {
    pub fn new(response_delay: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            response_delay,
        }
    }

    pub async fn create(&self) -> ConversationSnapshot {
        let id = Uuid::new_v4();
        let session = ConversationSession::new(id);
        let snapshot = session.snapshot();
        self.sessions
            .write()
            .await
            .insert(id, StoredSession::new(session));

        info!(conversation_id = %id, "Created conversation");
        snapshot
    }

    pub async fn get(&self, id: Uuid) -> Result<ConversationSnapshot, ConversationError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|stored| stored.session.snapshot())
            .ok_or(ConversationError::NotFound(id))
    }

    pub async fn crew(&self, id: Uuid) -> Result<Vec<CrewMember>, ConversationError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|stored| stored.session.crew().to_vec())
            .ok_or(ConversationError::NotFound(id))
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn submit(
        &self,
        id: Uuid,
        input: &str,
    ) -> Result<SubmitResponse, ConversationError> {
        let (submission, conversation) = {
            let mut sessions = self.sessions.write().await;
            let stored = sessions
                .get_mut(&id)
                .ok_or(ConversationError::NotFound(id))?;
            let submission = stored.session.submit(input);
            if matches!(submission, Submission::Accepted(_)) {
                stored.touch();
            }
            (submission, stored.session.snapshot())
        };

        let outcome = submission.outcome();
        match submission {
            Submission::Accepted(reply) => {
                info!(
                    conversation_id = %id,
                    category = ?reply.classification().category,
                    "Accepted message, reply scheduled"
                );
                self.schedule_reply(id, reply);
            }
            Submission::Ignored(outcome) => {
                debug!(conversation_id = %id, ?outcome, "Ignored submission");
            }
        }

        Ok(SubmitResponse {
            outcome,
            conversation,
        })
    }

    /// Drop idle sessions whose last activity is at least `idle_ttl` ago. Sessions still
    /// waiting for a reply are kept. Returns the evicted ids.
    pub async fn evict_idle(&self, idle_ttl: Duration) -> Vec<Uuid> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, stored)| {
                !stored.session.state().is_busy()
                    && now.saturating_duration_since(stored.last_active) >= idle_ttl
            })
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            sessions.remove(id);
        }

        if !expired.is_empty() {
            info!(
                evicted = expired.len(),
                remaining = sessions.len(),
                "Evicted idle conversations"
            );
        }
        expired
    }

    /// Deliver after the configured delay. Pending replies are never cancelled.
    fn schedule_reply(&self, id: Uuid, reply: PendingReply) {
        let sessions = self.sessions.clone();
        let delay = self.response_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut sessions = sessions.write().await;
            match sessions.get_mut(&id) {
                Some(stored) => {
                    if stored.session.deliver(reply) {
                        stored.touch();
                        debug!(conversation_id = %id, "Delivered reply");
                    } else {
                        warn!(conversation_id = %id, "Reply arrived with no request outstanding");
                    }
                }
                None => warn!(conversation_id = %id, "Conversation vanished before reply"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use models::models::message::MessageType;

    use super::*;

    const COMPETITOR_PROMPT: &str = "Monitor my competitors and send me weekly reports";

    #[test]
    fn test_new_session_starts_with_greeting() {
        let session = ConversationSession::new(Uuid::new_v4());

        assert_eq!(session.state(), ConversationState::Idle);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].message_type, MessageType::Ai);
        assert!(session.crew().is_empty());
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut session = ConversationSession::new(Uuid::new_v4());

        for input in ["", "   ", "\n\t"] {
            let submission = session.submit(input);
            assert_eq!(submission.outcome(), SubmitOutcome::IgnoredEmpty);
        }
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.state(), ConversationState::Idle);
    }

    #[test]
    fn test_second_submit_rejected_while_awaiting() {
        let mut session = ConversationSession::new(Uuid::new_v4());

        let first = session.submit(COMPETITOR_PROMPT);
        assert_eq!(first.outcome(), SubmitOutcome::Accepted);
        assert_eq!(session.state(), ConversationState::AwaitingResponse);
        assert_eq!(session.messages().len(), 2);

        let second = session.submit("Screen job applications");
        assert_eq!(second.outcome(), SubmitOutcome::IgnoredBusy);
        assert_eq!(session.messages().len(), 2);

        let Submission::Accepted(reply) = first else {
            panic!("first submission should be accepted");
        };
        assert!(session.deliver(reply));
        assert_eq!(session.state(), ConversationState::Idle);
        assert_eq!(session.messages().len(), 3);

        let third = session.submit("Screen job applications");
        assert_eq!(third.outcome(), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_user_message_precedes_reply() {
        let mut session = ConversationSession::new(Uuid::new_v4());
        let Submission::Accepted(reply) = session.submit(COMPETITOR_PROMPT) else {
            panic!("submission should be accepted");
        };
        session.deliver(reply);

        let kinds: Vec<_> = session.messages().iter().map(|m| m.message_type).collect();
        assert_eq!(kinds, [MessageType::Ai, MessageType::User, MessageType::Ai]);
        assert_eq!(session.messages()[1].content, COMPETITOR_PROMPT);
        assert!(session.messages()[2].content.starts_with("Excellent choice!"));
    }

    #[test]
    fn test_fallback_keeps_existing_crew() {
        let mut session = ConversationSession::new(Uuid::new_v4());
        let Submission::Accepted(reply) = session.submit(COMPETITOR_PROMPT) else {
            panic!("submission should be accepted");
        };
        session.deliver(reply);
        let built = session.crew().to_vec();

        let Submission::Accepted(reply) = session.submit("something unrelated") else {
            panic!("submission should be accepted");
        };
        assert!(reply.classification().is_fallback());
        session.deliver(reply);

        assert_eq!(session.crew(), built.as_slice());
        assert_eq!(
            session.snapshot().category,
            Some(TemplateCategory::CompetitorIntelligence)
        );
    }

    #[test]
    fn test_new_template_replaces_crew_in_full() {
        let mut session = ConversationSession::new(Uuid::new_v4());
        for input in [COMPETITOR_PROMPT, "Screen job applications and rank candidates"] {
            let Submission::Accepted(reply) = session.submit(input) else {
                panic!("submission should be accepted");
            };
            session.deliver(reply);
        }

        let names: Vec<_> = session.crew().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Resume Screener", "Candidate Ranker", "Interview Coordinator"]
        );
    }

    #[test]
    fn test_deliver_without_request_is_ignored() {
        let mut session = ConversationSession::new(Uuid::new_v4());
        let reply = PendingReply {
            classification: classify(COMPETITOR_PROMPT),
        };
        assert!(!session.deliver(reply));
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_delivers_after_delay() {
        let service = ConversationService::new(Duration::from_millis(2000));
        let conversation = service.create().await;

        let response = service
            .submit(conversation.id, COMPETITOR_PROMPT)
            .await
            .unwrap();
        assert_eq!(response.outcome, SubmitOutcome::Accepted);
        assert_eq!(response.conversation.state, ConversationState::AwaitingResponse);
        assert_eq!(response.conversation.messages.len(), 2);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        let pending = service.get(conversation.id).await.unwrap();
        assert_eq!(pending.state, ConversationState::AwaitingResponse);
        assert!(pending.crew.is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let done = service.get(conversation.id).await.unwrap();
        assert_eq!(done.state, ConversationState::Idle);
        assert_eq!(done.messages.len(), 3);
        assert_eq!(done.crew.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_service_rejects_submit_while_pending() {
        let service = ConversationService::new(Duration::from_millis(2000));
        let id = service.create().await.id;

        service.submit(id, COMPETITOR_PROMPT).await.unwrap();
        let busy = service.submit(id, "Generate sales leads").await.unwrap();

        assert_eq!(busy.outcome, SubmitOutcome::IgnoredBusy);
        assert_eq!(busy.conversation.messages.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_conversation() {
        let service = ConversationService::new(Duration::from_millis(1));
        let missing = Uuid::new_v4();

        assert!(matches!(
            service.submit(missing, "hello").await,
            Err(ConversationError::NotFound(id)) if id == missing
        ));
        assert!(service.get(missing).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_sessions_are_evicted_after_ttl() {
        let service = ConversationService::new(Duration::from_millis(2000));
        let ttl = Duration::from_secs(3600);
        let ids: Vec<_> = create_many(&service, 50).await;

        tokio::time::sleep(ttl - Duration::from_secs(1)).await;
        assert!(service.evict_idle(ttl).await.is_empty());
        assert_eq!(service.count().await, 50);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let evicted = service.evict_idle(ttl).await;
        assert_eq!(evicted.len(), 50);
        assert_eq!(service.count().await, 0);
        assert!(service.get(ids[0]).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_keeps_session_alive() {
        let service = ConversationService::new(Duration::from_millis(2000));
        let ttl = Duration::from_secs(60);
        let quiet = service.create().await.id;
        let busy = service.create().await.id;

        tokio::time::sleep(Duration::from_secs(50)).await;
        service.submit(busy, COMPETITOR_PROMPT).await.unwrap();
        // blank input is not activity
        service.submit(quiet, "   ").await.unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(service.evict_idle(ttl).await, [quiet]);
        assert!(service.get(busy).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_awaiting_reply_is_not_evicted() {
        let service = ConversationService::new(Duration::from_millis(2000));
        let id = service.create().await.id;
        service.submit(id, COMPETITOR_PROMPT).await.unwrap();

        assert!(service.evict_idle(Duration::ZERO).await.is_empty());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(service.evict_idle(Duration::ZERO).await, [id]);
    }

    async fn create_many(service: &ConversationService, n: usize) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            ids.push(service.create().await.id);
        }
        ids
    }
}
