// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session FSM that manages the lifecycle of a single conversation.
//!
//! Each turn goes through states: Idle -> Classifying -> Synthesizing ->
//! Delivering -> Idle. Submissions are accepted only in Idle, which
//! enforces at-most-one-in-flight turn processing inside the engine rather
//! than at the presentation boundary.
//!
//! Classification and synthesis run synchronously inside `submit`; the
//! single suspension point is the scheduled thinking delay, after which the
//! reply is appended and the session returns to Idle. Tearing the session
//! down mid-delay cancels the pending reply without corrupting the log.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use solace_config::model::AgentConfig;
use solace_core::{
    ChatMessage, Identity, MessageId, RiskEvent, RiskTier, Sender, SessionId, SolaceError,
};
use solace_triage::{ResponseSynthesizer, RiskClassifier, SelectionStrategy};

use crate::scheduler::{self, TurnHandle};

/// States in the turn FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for a new submission.
    Idle,
    /// Assigning a risk tier to the submitted utterance.
    Classifying,
    /// Assembling the reply text.
    Synthesizing,
    /// Reply scheduled, waiting out the thinking delay.
    Delivering,
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnState::Idle => write!(f, "idle"),
            TurnState::Classifying => write!(f, "classifying"),
            TurnState::Synthesizing => write!(f, "synthesizing"),
            TurnState::Delivering => write!(f, "delivering"),
        }
    }
}

/// The synthesized reply riding out the thinking delay.
struct ReplyDraft {
    content: String,
    tier: RiskTier,
}

/// Mutable session state, guarded by one lock so log appends, state
/// transitions, and cancellation are linearized.
struct SessionLog {
    messages: Vec<ChatMessage>,
    state: TurnState,
    next_seq: u64,
    closed: bool,
    pending: Option<TurnHandle>,
}

impl SessionLog {
    fn append(&mut self, content: String, sender: Sender, risk_tier: Option<RiskTier>) -> MessageId {
        let id = MessageId::generate();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(ChatMessage {
            id: id.clone(),
            content,
            sender,
            seq,
            timestamp: Utc::now(),
            risk_tier,
        });
        id
    }
}

/// Build the opening assistant message for a session.
///
/// Personalized with the identity's display name when present; an anonymous
/// session gets the impersonal salutation.
pub fn greeting_for(agent: &AgentConfig, identity: Option<&Identity>) -> String {
    match identity.and_then(|i| i.name.as_deref()) {
        Some(name) => format!("Hello {name}! {}", agent.greeting),
        None => format!("Hello! {}", agent.greeting),
    }
}

/// Manages the ordered message log and turn processing for one conversation.
///
/// The actor is cheap to share (`Arc`): all methods take `&self` and
/// synchronize on the internal session lock. Sessions are fully independent
/// of one another.
pub struct SessionActor {
    id: SessionId,
    log: Arc<Mutex<SessionLog>>,
    classifier: Arc<RiskClassifier>,
    synthesizer: Arc<ResponseSynthesizer>,
    selector: Arc<dyn SelectionStrategy>,
    reply_delay: Duration,
    risk_events: Option<mpsc::UnboundedSender<RiskEvent>>,
    cancel: CancellationToken,
}

impl SessionActor {
    /// Create a session with its greeting already appended (seq 0, no tier).
    pub fn new(
        id: SessionId,
        greeting: String,
        classifier: Arc<RiskClassifier>,
        synthesizer: Arc<ResponseSynthesizer>,
        selector: Arc<dyn SelectionStrategy>,
        reply_delay: Duration,
        risk_events: Option<mpsc::UnboundedSender<RiskEvent>>,
    ) -> Self {
        let mut log = SessionLog {
            messages: Vec::new(),
            state: TurnState::Idle,
            next_seq: 0,
            closed: false,
            pending: None,
        };
        log.append(greeting, Sender::Assistant, None);

        info!(session_id = %id, "session opened");

        Self {
            id,
            log: Arc::new(Mutex::new(log)),
            classifier,
            synthesizer,
            selector,
            reply_delay,
            risk_events,
            cancel: CancellationToken::new(),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Read-only snapshot of the conversation log, in submission/emission
    /// order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().await.messages.clone()
    }

    /// Current turn state.
    pub async fn state(&self) -> TurnState {
        self.log.lock().await.state
    }

    /// Typing indicator: true exactly while a turn is in flight.
    pub async fn is_replying(&self) -> bool {
        self.log.lock().await.state != TurnState::Idle
    }

    /// Submit a user utterance for this session's next turn.
    ///
    /// On acceptance the user message is appended immediately and the reply
    /// is scheduled behind the thinking delay; the returned id is the user
    /// message's. Blank input and submissions while a turn is already in
    /// flight are rejected without touching the log or the turn state.
    pub async fn submit(&self, utterance: &str) -> Result<MessageId, SolaceError> {
        let text = utterance.trim();
        if text.is_empty() {
            return Err(SolaceError::EmptyInput);
        }

        let mut log = self.log.lock().await;
        if log.closed {
            return Err(SolaceError::SessionClosed);
        }
        if log.state != TurnState::Idle {
            debug!(session_id = %self.id, state = %log.state, "submission rejected, turn in flight");
            return Err(SolaceError::TurnInProgress);
        }

        // Transition: Idle -> Classifying
        log.state = TurnState::Classifying;
        let user_id = log.append(text.to_string(), Sender::User, None);

        let tier = self.classifier.classify(text);
        debug!(session_id = %self.id, %tier, "utterance classified");

        // Escalation fires on tier assignment, before the reply exists, so
        // staff alerting never waits on synthesis or the thinking delay.
        if tier == RiskTier::High {
            self.emit_risk_event(tier);
        }

        // Transition: Classifying -> Synthesizing
        log.state = TurnState::Synthesizing;
        let content = self
            .synthesizer
            .synthesize(text, tier, self.selector.as_ref());

        // Transition: Synthesizing -> Delivering
        log.state = TurnState::Delivering;

        let draft = ReplyDraft {
            content,
            tier,
        };
        let turn_token = self.cancel.child_token();
        let guard = turn_token.clone();
        let deliver_log = Arc::clone(&self.log);
        let session_id = self.id.clone();

        let handle = scheduler::schedule(
            self.reply_delay,
            turn_token,
            move || draft,
            move |draft: ReplyDraft| async move {
                let mut log = deliver_log.lock().await;
                // Re-check under the session lock: a cancel that raced the
                // completed timer must never append.
                if guard.is_cancelled() || log.closed {
                    debug!(session_id = %session_id, "reply dropped after cancellation");
                    return;
                }
                let tier = draft.tier;
                log.append(draft.content, Sender::Assistant, Some(tier));
                log.pending = None;
                // Transition: Delivering -> Idle
                log.state = TurnState::Idle;
                info!(session_id = %session_id, %tier, "reply delivered");
            },
        );
        log.pending = Some(handle);

        Ok(user_id)
    }

    /// Cancel the in-flight turn, if any, and return to Idle.
    ///
    /// Idempotent: cancelling with no turn pending, cancelling twice, or
    /// cancelling after the reply was already delivered is a silent no-op.
    pub async fn cancel_turn(&self) {
        let mut log = self.log.lock().await;
        if let Some(handle) = log.pending.take() {
            handle.cancel();
        }
        if log.state != TurnState::Idle {
            log.state = TurnState::Idle;
            debug!(session_id = %self.id, "turn cancelled");
        }
    }

    /// Tear the session down: cancel any pending reply and refuse further
    /// submissions. The message log stays readable for a final render.
    pub async fn shutdown(&self) {
        let mut log = self.log.lock().await;
        log.closed = true;
        // Cancels every child turn token, pending or future.
        self.cancel.cancel();
        if let Some(handle) = log.pending.take() {
            handle.cancel();
        }
        log.state = TurnState::Idle;
        info!(session_id = %self.id, "session closed");
    }

    fn emit_risk_event(&self, tier: RiskTier) {
        let event = RiskEvent {
            session_id: self.id.clone(),
            tier,
            timestamp: Utc::now(),
        };
        match &self.risk_events {
            Some(tx) => {
                if tx.send(event).is_err() {
                    warn!(session_id = %self.id, "escalation receiver dropped, risk event lost");
                }
            }
            None => {
                warn!(session_id = %self.id, %tier, "high-risk message with no escalation channel wired");
            }
        }
    }
}
