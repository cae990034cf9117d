// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Solace support agent.
//!
//! Keyword tables and reply templates are configuration data, not code:
//! the classifier and synthesizer stay pure functions over these immutable
//! tables, and campus deployments can localize every student-facing string
//! without touching the engine. All structs use `#[serde(deny_unknown_fields)]`
//! to reject unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Solace configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to the stock
/// triage tables and reply templates.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SolaceConfig {
    /// Agent identity and greeting settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Turn processing settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Risk classification keyword tables.
    #[serde(default)]
    pub triage: TriageConfig,

    /// Reply templates and crisis contact directory.
    #[serde(default)]
    pub responses: ResponseConfig,
}

/// Agent identity and greeting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Greeting body appended after the (optionally personalized) salutation
    /// in every new session's opening message.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            greeting: default_greeting(),
        }
    }
}

fn default_agent_name() -> String {
    "solace".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_greeting() -> String {
    "I'm your AI mental health support assistant. I'm here to listen, provide \
     coping strategies, and help you access the right resources. Everything we \
     discuss is confidential. How are you feeling today?"
        .to_string()
}

/// Turn processing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Simulated thinking latency between a submission and the reply, in
    /// milliseconds. The delay is the turn's single suspension point.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

/// Risk classification keyword tables.
///
/// Matching is case-insensitive substring search; the high-risk table is
/// checked before the medium-risk table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    /// Phrases that classify an utterance as high risk.
    #[serde(default = "default_high_risk_keywords")]
    pub high_risk_keywords: Vec<String>,

    /// Phrases that classify an utterance as medium risk.
    #[serde(default = "default_medium_risk_keywords")]
    pub medium_risk_keywords: Vec<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            high_risk_keywords: default_high_risk_keywords(),
            medium_risk_keywords: default_medium_risk_keywords(),
        }
    }
}

fn default_high_risk_keywords() -> Vec<String> {
    [
        "suicide",
        "kill myself",
        "end it all",
        "not worth living",
        "hurt myself",
    ]
    .map(String::from)
    .to_vec()
}

fn default_medium_risk_keywords() -> Vec<String> {
    [
        "depressed",
        "hopeless",
        "can't cope",
        "overwhelming",
        "panic",
    ]
    .map(String::from)
    .to_vec()
}

/// Reply templates and the crisis contact directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Crisis contact directory used to assemble the high-risk safety script.
    #[serde(default)]
    pub contacts: ContactsConfig,

    /// Empathy preamble opening every medium-risk reply.
    #[serde(default = "default_empathy_preamble")]
    pub empathy_preamble: String,

    /// Probing prompt used when no support topic matches a medium-risk
    /// utterance.
    #[serde(default = "default_probing_prompt")]
    pub probing_prompt: String,

    /// Counselor booking offer closing every medium-risk reply.
    #[serde(default = "default_booking_offer")]
    pub booking_offer: String,

    /// Open-ended acknowledgment prompts for low-risk utterances.
    #[serde(default = "default_acknowledgments")]
    pub acknowledgments: Vec<String>,

    /// Anxiety coping templates.
    #[serde(default = "default_anxiety_topic")]
    pub anxiety: TopicResponses,

    /// Stress coping templates.
    #[serde(default = "default_stress_topic")]
    pub stress: TopicResponses,

    /// Sadness coping templates.
    #[serde(default = "default_sadness_topic")]
    pub sadness: TopicResponses,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            contacts: ContactsConfig::default(),
            empathy_preamble: default_empathy_preamble(),
            probing_prompt: default_probing_prompt(),
            booking_offer: default_booking_offer(),
            acknowledgments: default_acknowledgments(),
            anxiety: default_anxiety_topic(),
            stress: default_stress_topic(),
            sadness: default_sadness_topic(),
        }
    }
}

/// Templates for one medium-risk support topic.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TopicResponses {
    /// Phrases that select this topic from a medium-risk utterance.
    pub keywords: Vec<String>,

    /// Line introducing the coping strategy.
    pub intro: String,

    /// Coping strategy templates; one is chosen per reply.
    pub strategies: Vec<String>,

    /// Follow-up question closing the coping section.
    pub follow_up: String,
}

/// Crisis contact directory.
///
/// These values are read aloud to students in crisis; deployments must keep
/// them current for their region and campus.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContactsConfig {
    /// National crisis line number.
    #[serde(default = "default_crisis_line")]
    pub crisis_line: String,

    /// Crisis text line number.
    #[serde(default = "default_crisis_text_number")]
    pub crisis_text_number: String,

    /// Keyword to text to the crisis text line.
    #[serde(default = "default_crisis_text_keyword")]
    pub crisis_text_keyword: String,

    /// Emergency services number.
    #[serde(default = "default_emergency")]
    pub emergency: String,

    /// Campus security contact.
    #[serde(default = "default_campus_security")]
    pub campus_security: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            crisis_line: default_crisis_line(),
            crisis_text_number: default_crisis_text_number(),
            crisis_text_keyword: default_crisis_text_keyword(),
            emergency: default_emergency(),
            campus_security: default_campus_security(),
        }
    }
}

fn default_crisis_line() -> String {
    "988".to_string()
}

fn default_crisis_text_number() -> String {
    "741741".to_string()
}

fn default_crisis_text_keyword() -> String {
    "HELLO".to_string()
}

fn default_emergency() -> String {
    "911".to_string()
}

fn default_campus_security() -> String {
    "(555) 123-4567".to_string()
}

fn default_empathy_preamble() -> String {
    "I hear that you're going through a difficult time. These feelings are \
     valid, and it's important that you're reaching out. "
        .to_string()
}

fn default_probing_prompt() -> String {
    "I'd like to help you work through this. Can you tell me more about what's \
     been bothering you? Sometimes talking through our thoughts can help us \
     process them better."
        .to_string()
}

fn default_booking_offer() -> String {
    "If you'd like to speak with a professional counselor, I can help you \
     schedule an appointment."
        .to_string()
}

fn default_acknowledgments() -> Vec<String> {
    [
        "Thank you for sharing that with me. It sounds like you're being \
         thoughtful about your situation. What would be most helpful for you \
         right now?",
        "I appreciate you opening up. What you're experiencing is more common \
         than you might think. How long have you been feeling this way?",
        "That takes courage to share. What do you think would help you feel \
         more supported in this situation?",
        "I'm here to listen. Would you like to explore some strategies for \
         managing these feelings, or would you prefer to talk more about \
         what's going on?",
    ]
    .map(String::from)
    .to_vec()
}

fn default_anxiety_topic() -> TopicResponses {
    TopicResponses {
        keywords: ["anxious", "anxiety"].map(String::from).to_vec(),
        intro: "Here are some immediate anxiety coping strategies:".to_string(),
        strategies: [
            "Try the 4-7-8 breathing technique: Breathe in for 4 counts, hold \
             for 7, exhale for 8.",
            "Ground yourself using the 5-4-3-2-1 technique: 5 things you can \
             see, 4 things you can touch, 3 things you can hear, 2 things you \
             can smell, 1 thing you can taste.",
            "Practice progressive muscle relaxation starting from your toes \
             and working up to your head.",
        ]
        .map(String::from)
        .to_vec(),
        follow_up: "Would you like to try this technique now, or would you \
                    prefer to talk about what's making you anxious?"
            .to_string(),
    }
}

fn default_stress_topic() -> TopicResponses {
    TopicResponses {
        keywords: ["stress", "overwhelmed"].map(String::from).to_vec(),
        intro: "Here's a stress management technique you can try:".to_string(),
        strategies: [
            "Take a 10-minute walk outside if possible. Fresh air and movement \
             can help reset your mind.",
            "Try journaling about what's causing your stress. Writing it down \
             can help organize your thoughts.",
            "Listen to calming music or nature sounds for a few minutes.",
        ]
        .map(String::from)
        .to_vec(),
        follow_up: "Remember, it's okay to take things one step at a time. \
                    What feels most overwhelming right now?"
            .to_string(),
    }
}

fn default_sadness_topic() -> TopicResponses {
    TopicResponses {
        keywords: ["sad", "depressed"].map(String::from).to_vec(),
        intro: "I want you to know that your feelings are valid. Here's \
                something that might help:"
            .to_string(),
        strategies: [
            "Remember that it's okay to feel sad. Emotions are temporary and \
             will pass.",
            "Reach out to a friend or family member you trust.",
            "Engage in a small activity you usually enjoy, even if you don't \
             feel like it right now.",
        ]
        .map(String::from)
        .to_vec(),
        follow_up: "Would you like to talk about what's been contributing to \
                    these feelings?"
            .to_string(),
    }
}
