// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Solace integration tests.
//!
//! Provides deterministic selection strategies and a test harness for
//! fast, CI-runnable tests with no real randomness or long delays.
//!
//! # Components
//!
//! - [`FixedSelector`] / [`CountingSelector`] / [`ScriptedSelector`] -
//!   deterministic stand-ins for the production uniform-random selection
//! - [`TestDesk`] - a fully wired support desk with a pre-opened session
//!   and a captured escalation channel

pub mod harness;
pub mod selector;

pub use harness::TestDesk;
pub use selector::{CountingSelector, FixedSelector, ScriptedSelector};
