// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Solace support agent.
//!
//! This crate provides the shared types and error taxonomy used throughout
//! the Solace workspace: message and session identifiers, the ordered
//! [`RiskTier`] classification, the conversation log entry type, and the
//! escalation event emitted for high-risk messages.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SolaceError;
pub use types::{ChatMessage, Identity, MessageId, RiskEvent, RiskTier, Sender, SessionId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solace_error_has_all_variants() {
        // Verify all 6 error variants exist and can be constructed.
        let _empty = SolaceError::EmptyInput;
        let _busy = SolaceError::TurnInProgress;
        let _not_found = SolaceError::SessionNotFound { id: "s-1".into() };
        let _closed = SolaceError::SessionClosed;
        let _config = SolaceError::Config("test".into());
        let _internal = SolaceError::Internal("test".into());
    }

    #[test]
    fn core_types_are_exported() {
        let sid = SessionId("session-1".into());
        let mid = MessageId("msg-1".into());
        assert_eq!(sid.clone(), sid);
        assert_eq!(mid.clone(), mid);
        assert_eq!(RiskTier::Low.min(RiskTier::High), RiskTier::Low);
    }
}
