// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Solace workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Mint a fresh random session id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Mint a fresh random message id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk tier assigned to a user utterance.
///
/// The derived ordering is load-bearing: `Low < Medium < High` is the
/// priority order used when an utterance matches keywords from more than
/// one tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Which side of the conversation produced a message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in a session's conversation log. Immutable once created.
///
/// `seq` is assigned by the owning session in strict submission/emission
/// order and is the authoritative ordering key; the wall-clock `timestamp`
/// is carried for display. `risk_tier` is present only on assistant
/// messages and records the classification of the user message the reply
/// answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub risk_tier: Option<RiskTier>,
}

/// Notification emitted when a user message is classified [`RiskTier::High`].
///
/// Sent on the escalation channel immediately upon tier assignment, before
/// the reply text is synthesized, so staff alerting never waits on reply
/// construction or the simulated thinking delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEvent {
    pub session_id: SessionId,
    pub tier: RiskTier,
    pub timestamp: DateTime<Utc>,
}

/// Identity context used to personalize the session greeting.
///
/// Both fields are optional; a fully anonymous session is valid and gets
/// the impersonal greeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: Option<String>,
    pub role: Option<String>,
}

impl Identity {
    /// Identity with a display name and no role.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            role: None,
        }
    }
}
