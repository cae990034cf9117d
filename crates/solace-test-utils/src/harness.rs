// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestDesk` assembles a complete support desk with a deterministic
//! selection strategy, a short thinking delay, and a captured escalation
//! channel, plus one pre-opened session. `send_and_wait()` drives a full
//! turn through the engine and returns the delivered reply text.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use solace_config::SolaceConfig;
use solace_core::{ChatMessage, Identity, MessageId, RiskEvent, SessionId, SolaceError};
use solace_engine::SupportDesk;
use solace_triage::SelectionStrategy;

use crate::selector::CountingSelector;

/// Builder for creating test desks with configurable options.
pub struct TestDeskBuilder {
    config: SolaceConfig,
    pick_index: usize,
    identity: Option<Identity>,
}

impl TestDeskBuilder {
    fn new() -> Self {
        let mut config = SolaceConfig::default();
        // Short enough that settled turns are near-instant, long enough that
        // the Delivering window is observable.
        config.engine.reply_delay_ms = 10;
        Self {
            config,
            pick_index: 0,
            identity: None,
        }
    }

    /// Replace the configuration wholesale, including the reply delay.
    pub fn with_config(mut self, config: SolaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the simulated thinking delay.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.engine.reply_delay_ms = delay_ms;
        self
    }

    /// Pin the template index every reply selection uses.
    pub fn with_pick_index(mut self, index: usize) -> Self {
        self.pick_index = index;
        self
    }

    /// Open the initial session with this identity.
    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Build the desk and open the initial session.
    pub async fn build(self) -> TestDesk {
        let selector = Arc::new(CountingSelector::new(self.pick_index));
        let strategy: Arc<dyn SelectionStrategy> = selector.clone();
        let (desk, risk_events) = SupportDesk::with_selector(&self.config, strategy);
        let session_id = desk.open_session(self.identity.as_ref()).await;

        TestDesk {
            desk,
            session_id,
            risk_events,
            selector,
        }
    }
}

/// A complete test environment: desk, one open session, pinned selection,
/// and the captured escalation channel.
pub struct TestDesk {
    /// The support desk under test.
    pub desk: SupportDesk,
    /// The pre-opened session.
    pub session_id: SessionId,
    /// Receiving end of the escalation channel.
    pub risk_events: mpsc::UnboundedReceiver<RiskEvent>,
    /// The deterministic selector (exposes its call count).
    pub selector: Arc<CountingSelector>,
}

impl TestDesk {
    /// Create a new builder for configuring the test desk.
    pub fn builder() -> TestDeskBuilder {
        TestDeskBuilder::new()
    }

    /// Submit to the pre-opened session without waiting for the reply.
    pub async fn submit(&self, text: &str) -> Result<MessageId, SolaceError> {
        self.desk.submit(&self.session_id, text).await
    }

    /// Drive one full turn: submit, wait out the thinking delay, and return
    /// the delivered reply text.
    pub async fn send_and_wait(&self, text: &str) -> Result<String, SolaceError> {
        self.submit(text).await?;
        self.settle().await;

        let messages = self.messages().await;
        messages
            .last()
            .map(|m| m.content.clone())
            .ok_or_else(|| SolaceError::Internal("session log is empty".to_string()))
    }

    /// Wait until the session returns to Idle.
    pub async fn settle(&self) {
        while self
            .desk
            .is_replying(&self.session_id)
            .await
            .unwrap_or(false)
        {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    }

    /// Snapshot of the pre-opened session's log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.desk
            .messages(&self.session_id)
            .await
            .unwrap_or_default()
    }

    /// Drain every escalation captured so far.
    pub fn drain_risk_events(&mut self) -> Vec<RiskEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.risk_events.try_recv() {
            events.push(event);
        }
        events
    }
}
