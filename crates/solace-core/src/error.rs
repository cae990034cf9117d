// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Solace support agent.

use thiserror::Error;

/// The primary error type used across all Solace crates.
#[derive(Debug, Error)]
pub enum SolaceError {
    /// Submitted utterance was blank or whitespace-only. The session log
    /// and turn state are untouched.
    #[error("empty input: the message must contain some text")]
    EmptyInput,

    /// A turn is already in flight for this session. The caller should
    /// retry once the current reply has been delivered.
    #[error("a reply is already being prepared for this session")]
    TurnInProgress,

    /// No live session with the given id is registered with the desk.
    #[error("session not found: {id}")]
    SessionNotFound { id: String },

    /// The session has been torn down and no longer accepts submissions.
    #[error("session is closed")]
    SessionClosed,

    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SolaceError {
    /// Whether this error is an expected submission rejection that the
    /// caller should surface as user feedback rather than a failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SolaceError::EmptyInput | SolaceError::TurnInProgress)
    }
}
