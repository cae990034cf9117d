// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-session coordination.
//!
//! The [`SupportDesk`] owns the live sessions and routes submissions to the
//! per-session actors. Sessions share nothing mutable, so concurrently
//! active conversations proceed in parallel without coordination; the desk
//! lock is held only long enough to resolve an actor handle.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info};

use solace_config::SolaceConfig;
use solace_core::{ChatMessage, Identity, MessageId, RiskEvent, SessionId, SolaceError};
use solace_triage::{ResponseSynthesizer, RiskClassifier, SelectionStrategy, UniformSelector};

use crate::session::{SessionActor, greeting_for};

/// Routes submissions to per-session actors and fans high-risk escalations
/// into one channel.
pub struct SupportDesk {
    config: SolaceConfig,
    classifier: Arc<RiskClassifier>,
    synthesizer: Arc<ResponseSynthesizer>,
    selector: Arc<dyn SelectionStrategy>,
    risk_events: mpsc::UnboundedSender<RiskEvent>,
    sessions: Mutex<HashMap<SessionId, Arc<SessionActor>>>,
}

impl SupportDesk {
    /// Create a desk with the production selection strategy.
    ///
    /// Returns the desk and the receiving end of the escalation channel;
    /// the caller wires the receiver into its notification pipeline.
    pub fn new(config: &SolaceConfig) -> (Self, mpsc::UnboundedReceiver<RiskEvent>) {
        Self::with_selector(config, Arc::new(UniformSelector))
    }

    /// Create a desk with an injected selection strategy (tests pin the
    /// template choice this way).
    pub fn with_selector(
        config: &SolaceConfig,
        selector: Arc<dyn SelectionStrategy>,
    ) -> (Self, mpsc::UnboundedReceiver<RiskEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let desk = Self {
            config: config.clone(),
            classifier: Arc::new(RiskClassifier::new(&config.triage)),
            synthesizer: Arc::new(ResponseSynthesizer::new(&config.responses)),
            selector,
            risk_events: tx,
            sessions: Mutex::new(HashMap::new()),
        };
        info!(agent_name = desk.config.agent.name.as_str(), "support desk initialized");
        (desk, rx)
    }

    /// Open a new conversation session, greeting the (possibly anonymous)
    /// identity, and return its id.
    pub async fn open_session(&self, identity: Option<&Identity>) -> SessionId {
        let id = SessionId::generate();
        let actor = SessionActor::new(
            id.clone(),
            greeting_for(&self.config.agent, identity),
            Arc::clone(&self.classifier),
            Arc::clone(&self.synthesizer),
            Arc::clone(&self.selector),
            Duration::from_millis(self.config.engine.reply_delay_ms),
            Some(self.risk_events.clone()),
        );

        self.sessions
            .lock()
            .await
            .insert(id.clone(), Arc::new(actor));
        id
    }

    /// Resolve a live session's actor handle.
    pub async fn session(&self, id: &SessionId) -> Option<Arc<SessionActor>> {
        self.sessions.lock().await.get(id).cloned()
    }

    /// Submit an utterance to a session.
    pub async fn submit(&self, id: &SessionId, utterance: &str) -> Result<MessageId, SolaceError> {
        self.resolve(id).await?.submit(utterance).await
    }

    /// Read-only snapshot of a session's conversation log.
    pub async fn messages(&self, id: &SessionId) -> Result<Vec<ChatMessage>, SolaceError> {
        Ok(self.resolve(id).await?.messages().await)
    }

    /// Typing indicator for a session.
    pub async fn is_replying(&self, id: &SessionId) -> Result<bool, SolaceError> {
        Ok(self.resolve(id).await?.is_replying().await)
    }

    /// Cancel a session's in-flight turn, if any.
    pub async fn cancel_turn(&self, id: &SessionId) -> Result<(), SolaceError> {
        self.resolve(id).await?.cancel_turn().await;
        Ok(())
    }

    /// Close a session: cancel any pending reply and drop it from the desk.
    pub async fn close_session(&self, id: &SessionId) -> Result<(), SolaceError> {
        let actor = {
            self.sessions
                .lock()
                .await
                .remove(id)
                .ok_or_else(|| SolaceError::SessionNotFound { id: id.to_string() })?
        };
        actor.shutdown().await;
        debug!(session_id = %id, "session removed from desk");
        Ok(())
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Tear down every live session.
    pub async fn shutdown(&self) {
        let actors: Vec<Arc<SessionActor>> = {
            let mut sessions = self.sessions.lock().await;
            sessions.drain().map(|(_, actor)| actor).collect()
        };
        for actor in &actors {
            actor.shutdown().await;
        }
        info!(count = actors.len(), "support desk shut down");
    }

    async fn resolve(&self, id: &SessionId) -> Result<Arc<SessionActor>, SolaceError> {
        self.session(id)
            .await
            .ok_or_else(|| SolaceError::SessionNotFound { id: id.to_string() })
    }
}
