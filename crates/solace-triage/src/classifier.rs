// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based risk triage.
//!
//! Classifies user utterances into Low/Medium/High risk tiers using
//! case-insensitive substring matching over the configured keyword tables.
//! Zero-cost heuristic rules: no model call, no network, no latency, and
//! the same input always yields the same tier.

use solace_config::model::TriageConfig;
use solace_core::RiskTier;

/// Pure keyword classifier over the configured risk tables.
///
/// Keyword tables are lowercased once at construction; `classify` itself
/// allocates only the lowercased copy of the utterance.
pub struct RiskClassifier {
    high: Vec<String>,
    medium: Vec<String>,
}

impl RiskClassifier {
    /// Build a classifier from the triage keyword tables.
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            high: lowercase_table(&config.high_risk_keywords),
            medium: lowercase_table(&config.medium_risk_keywords),
        }
    }

    /// Classify an utterance.
    ///
    /// The high-risk table is checked before the medium-risk table, so an
    /// utterance matching keywords from both tiers is classified `High`.
    /// Total over all inputs: anything matching neither table, including
    /// empty text, is `Low`. Blank submissions are rejected upstream by the
    /// session manager and never reach classification.
    pub fn classify(&self, utterance: &str) -> RiskTier {
        let lower = utterance.to_lowercase();

        if self.high.iter().any(|k| lower.contains(k.as_str())) {
            return RiskTier::High;
        }
        if self.medium.iter().any(|k| lower.contains(k.as_str())) {
            return RiskTier::Medium;
        }
        RiskTier::Low
    }
}

fn lowercase_table(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> RiskClassifier {
        RiskClassifier::new(&TriageConfig::default())
    }

    #[test]
    fn every_high_risk_keyword_classifies_high() {
        let c = classifier();
        for keyword in &TriageConfig::default().high_risk_keywords {
            let utterance = format!("lately I keep thinking about {keyword} a lot");
            assert_eq!(
                c.classify(&utterance),
                RiskTier::High,
                "keyword `{keyword}` should classify high"
            );
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify("I want to END IT ALL"), RiskTier::High);
        assert_eq!(c.classify("Feeling HOPELESS today"), RiskTier::Medium);
    }

    #[test]
    fn high_wins_over_medium() {
        let c = classifier();
        // Contains both a medium cue ("hopeless") and a high cue ("end it all").
        let tier = c.classify("I feel hopeless and want to end it all");
        assert_eq!(tier, RiskTier::High);
    }

    #[test]
    fn medium_keywords_classify_medium() {
        let c = classifier();
        assert_eq!(c.classify("everything feels overwhelming"), RiskTier::Medium);
        assert_eq!(c.classify("I had a panic attack"), RiskTier::Medium);
    }

    #[test]
    fn unmatched_input_is_low() {
        let c = classifier();
        assert_eq!(c.classify("nice weather today"), RiskTier::Low);
        assert_eq!(c.classify("finals are next week"), RiskTier::Low);
    }

    #[test]
    fn classifier_is_total_on_blank_input() {
        // The session manager guards blank input away, but classify itself
        // must not misbehave if handed one.
        let c = classifier();
        assert_eq!(c.classify(""), RiskTier::Low);
        assert_eq!(c.classify("   "), RiskTier::Low);
    }

    #[test]
    fn classification_is_deterministic() {
        let c = classifier();
        let utterance = "I can't cope with this workload";
        let first = c.classify(utterance);
        for _ in 0..10 {
            assert_eq!(c.classify(utterance), first);
        }
    }

    #[test]
    fn custom_tables_are_honored() {
        let config = TriageConfig {
            high_risk_keywords: vec!["red alert".to_string()],
            medium_risk_keywords: vec!["amber".to_string()],
        };
        let c = RiskClassifier::new(&config);
        assert_eq!(c.classify("this is a RED ALERT"), RiskTier::High);
        assert_eq!(c.classify("amber day"), RiskTier::Medium);
        // Stock keywords no longer match.
        assert_eq!(c.classify("I feel hopeless"), RiskTier::Low);
    }
}
