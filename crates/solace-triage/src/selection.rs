// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply selection strategies.
//!
//! Reply variety comes from choosing one candidate out of a fixed template
//! list. The choice sits behind the [`SelectionStrategy`] trait so
//! production uses uniform randomness while tests inject a deterministic
//! pick; the synthesizer has no ambient randomness of its own.

use rand::Rng;

/// Chooses one candidate from an ordered, non-empty template list.
///
/// Candidate lists come from validated configuration and are never empty;
/// implementations may rely on that.
pub trait SelectionStrategy: Send + Sync {
    /// Choose one of `candidates`.
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str;
}

/// Uniform random selection (the production default).
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl SelectionStrategy for UniformSelector {
    fn pick<'a>(&self, candidates: &'a [String]) -> &'a str {
        let idx = rand::thread_rng().gen_range(0..candidates.len());
        &candidates[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["first", "second", "third"].map(String::from).to_vec()
    }

    #[test]
    fn uniform_selector_picks_a_candidate() {
        let selector = UniformSelector;
        let list = candidates();
        for _ in 0..50 {
            let picked = selector.pick(&list);
            assert!(list.iter().any(|c| c == picked));
        }
    }

    #[test]
    fn uniform_selector_on_single_candidate() {
        let selector = UniformSelector;
        let list = vec!["only".to_string()];
        assert_eq!(selector.pick(&list), "only");
    }

    #[test]
    fn trait_objects_are_usable() {
        let selector: Box<dyn SelectionStrategy> = Box::new(UniformSelector);
        let list = candidates();
        assert!(!selector.pick(&list).is_empty());
    }
}
