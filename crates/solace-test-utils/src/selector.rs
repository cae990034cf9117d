// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic selection strategies for tests.
//!
//! Production reply variety comes from `UniformSelector`; these selectors
//! pin the choice so assertions can name the exact template a reply uses.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use solace_triage::SelectionStrategy;

/// Always picks the same index (clamped to the candidate list).
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl SelectionStrategy for FixedSelector {
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        &candidates[self.0.min(candidates.len() - 1)]
    }
}

/// Picks a fixed index and counts how often it is consulted.
///
/// Used to assert the synthesizer's call-count contract: at most one pick
/// per reply, zero on the crisis path.
#[derive(Debug)]
pub struct CountingSelector {
    index: usize,
    calls: AtomicUsize,
}

impl CountingSelector {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `pick` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SelectionStrategy for CountingSelector {
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        self.calls.fetch_add(1, Ordering::SeqCst);
        &candidates[self.index.min(candidates.len() - 1)]
    }
}

/// Plays back a scripted sequence of indices, then falls back to 0.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    script: Mutex<VecDeque<usize>>,
}

impl ScriptedSelector {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: Mutex::new(indices.into_iter().collect()),
        }
    }
}

impl SelectionStrategy for ScriptedSelector {
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        let index = self
            .script
            .lock()
            .map(|mut s| s.pop_front().unwrap_or(0))
            .unwrap_or(0);
        &candidates[index.min(candidates.len() - 1)]
    }
}
