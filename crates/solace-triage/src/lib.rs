// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Risk classification and reply synthesis for the Solace support agent.
//!
//! This crate provides the pure triage layer:
//! - [`RiskClassifier`]: keyword triage into Low/Medium/High tiers
//!   (zero-cost, zero-latency, deterministic)
//! - [`ResponseSynthesizer`]: tier-appropriate reply assembly from the
//!   configured template tables
//! - [`SelectionStrategy`]: injectable template choice, so reply variety is
//!   random in production and pinned in tests
//!
//! Nothing here suspends or mutates: the session engine calls both
//! classification and synthesis synchronously inside a turn.

pub mod classifier;
pub mod selection;
pub mod synthesizer;

pub use classifier::RiskClassifier;
pub use selection::{SelectionStrategy, UniformSelector};
pub use synthesizer::{ResponseSynthesizer, SupportTopic};
