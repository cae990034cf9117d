// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply synthesis per risk tier.
//!
//! Assembles the assistant reply from the configured template tables:
//! a fixed crisis script for high risk, a topic-matched coping reply for
//! medium risk, and an open-ended acknowledgment for low risk. The only
//! non-determinism is the injected [`SelectionStrategy`], called at most
//! once per reply and never on the crisis path.

use strum::{Display, EnumString};

use solace_config::model::{ResponseConfig, TopicResponses};
use solace_core::RiskTier;

use crate::selection::SelectionStrategy;

/// Secondary support topic detected in a medium-risk utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SupportTopic {
    Anxiety,
    Stress,
    Sadness,
    Other,
}

/// Pure reply synthesizer over the configured response tables.
pub struct ResponseSynthesizer {
    responses: ResponseConfig,
    anxiety_keywords: Vec<String>,
    stress_keywords: Vec<String>,
    sadness_keywords: Vec<String>,
}

impl ResponseSynthesizer {
    /// Build a synthesizer from the response template tables.
    pub fn new(config: &ResponseConfig) -> Self {
        Self {
            responses: config.clone(),
            anxiety_keywords: lowercase_table(&config.anxiety.keywords),
            stress_keywords: lowercase_table(&config.stress.keywords),
            sadness_keywords: lowercase_table(&config.sadness.keywords),
        }
    }

    /// Synthesize the reply for a classified utterance.
    ///
    /// - `High`: the fixed safety script. The utterance is ignored and
    ///   `pick` is never consulted; students in crisis must always see the
    ///   exact same reachable numbers.
    /// - `Medium`: empathy preamble, then a coping strategy for the matched
    ///   topic chosen via `pick`, then the counselor booking offer. With no
    ///   matching topic, a generic probing prompt replaces the coping block.
    /// - `Low`: one acknowledgment prompt chosen via `pick`.
    ///
    /// The output is never empty; `pick` is called at most once.
    pub fn synthesize(
        &self,
        utterance: &str,
        tier: RiskTier,
        pick: &dyn SelectionStrategy,
    ) -> String {
        match tier {
            RiskTier::High => self.crisis_reply(),
            RiskTier::Medium => self.support_reply(utterance, pick),
            RiskTier::Low => pick.pick(&self.responses.acknowledgments).to_string(),
        }
    }

    /// Detect the secondary support topic of a medium-risk utterance.
    ///
    /// Topics are checked in a fixed order (anxiety, stress, sadness) so an
    /// utterance touching several topics gets a deterministic match.
    pub fn classify_topic(&self, utterance: &str) -> SupportTopic {
        let lower = utterance.to_lowercase();

        if contains_any(&lower, &self.anxiety_keywords) {
            SupportTopic::Anxiety
        } else if contains_any(&lower, &self.stress_keywords) {
            SupportTopic::Stress
        } else if contains_any(&lower, &self.sadness_keywords) {
            SupportTopic::Sadness
        } else {
            SupportTopic::Other
        }
    }

    /// The fixed high-risk safety script, assembled from the crisis contact
    /// directory.
    fn crisis_reply(&self) -> String {
        let contacts = &self.responses.contacts;
        format!(
            "I'm very concerned about what you're sharing with me. Your safety is \
             the most important thing right now. Please reach out for immediate \
             professional help:\n\n\
             \u{2022} Call {crisis_line} (Suicide & Crisis Lifeline) - available 24/7\n\
             \u{2022} Text \"{text_keyword}\" to {text_number} (Crisis Text Line)\n\
             \u{2022} Call {emergency} if you're in immediate danger\n\
             \u{2022} Contact campus security: {campus_security}\n\n\
             You don't have to go through this alone. These feelings can change, \
             and help is available. Would you like me to help you find additional \
             resources or connect you with a counselor?",
            crisis_line = contacts.crisis_line,
            text_keyword = contacts.crisis_text_keyword,
            text_number = contacts.crisis_text_number,
            emergency = contacts.emergency,
            campus_security = contacts.campus_security,
        )
    }

    /// Medium-risk reply: preamble + topic coping block (or probing prompt)
    /// + booking offer.
    fn support_reply(&self, utterance: &str, pick: &dyn SelectionStrategy) -> String {
        let topic = self.classify_topic(utterance);
        let body = match topic {
            SupportTopic::Anxiety => self.coping_block(&self.responses.anxiety, pick),
            SupportTopic::Stress => self.coping_block(&self.responses.stress, pick),
            SupportTopic::Sadness => self.coping_block(&self.responses.sadness, pick),
            SupportTopic::Other => self.responses.probing_prompt.clone(),
        };

        format!(
            "{preamble}{body}\n\n{booking}",
            preamble = self.responses.empathy_preamble,
            booking = self.responses.booking_offer,
        )
    }

    fn coping_block(&self, topic: &TopicResponses, pick: &dyn SelectionStrategy) -> String {
        let strategy = pick.pick(&topic.strategies);
        format!(
            "{intro}\n\n{strategy}\n\n{follow_up}",
            intro = topic.intro,
            follow_up = topic.follow_up,
        )
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

fn lowercase_table(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}
