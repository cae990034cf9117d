// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: non-empty keyword tables and template lists, a populated
//! crisis contact directory, and sane engine timings. The crisis script
//! is only as safe as these tables, so an empty table is a startup error,
//! not a runtime surprise.

use crate::diagnostic::ConfigError;
use crate::model::{SolaceConfig, TopicResponses};

/// Upper bound on the simulated thinking latency.
const MAX_REPLY_DELAY_MS: u64 = 60_000;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SolaceConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(validation("agent.name must not be empty"));
    }

    if !VALID_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(validation(format!(
            "agent.log_level must be one of {}, got `{}`",
            VALID_LOG_LEVELS.join(", "),
            config.agent.log_level
        )));
    }

    if config.agent.greeting.trim().is_empty() {
        errors.push(validation("agent.greeting must not be empty"));
    }

    if config.engine.reply_delay_ms > MAX_REPLY_DELAY_MS {
        errors.push(validation(format!(
            "engine.reply_delay_ms must be at most {MAX_REPLY_DELAY_MS}, got {}",
            config.engine.reply_delay_ms
        )));
    }

    check_keyword_table(
        &mut errors,
        "triage.high_risk_keywords",
        &config.triage.high_risk_keywords,
    );
    check_keyword_table(
        &mut errors,
        "triage.medium_risk_keywords",
        &config.triage.medium_risk_keywords,
    );

    check_template_list(
        &mut errors,
        "responses.acknowledgments",
        &config.responses.acknowledgments,
    );
    check_topic(&mut errors, "responses.anxiety", &config.responses.anxiety);
    check_topic(&mut errors, "responses.stress", &config.responses.stress);
    check_topic(&mut errors, "responses.sadness", &config.responses.sadness);

    let contacts = [
        ("responses.contacts.crisis_line", &config.responses.contacts.crisis_line),
        (
            "responses.contacts.crisis_text_number",
            &config.responses.contacts.crisis_text_number,
        ),
        (
            "responses.contacts.crisis_text_keyword",
            &config.responses.contacts.crisis_text_keyword,
        ),
        ("responses.contacts.emergency", &config.responses.contacts.emergency),
        (
            "responses.contacts.campus_security",
            &config.responses.contacts.campus_security,
        ),
    ];
    for (key, value) in contacts {
        if value.trim().is_empty() {
            errors.push(validation(format!("{key} must not be empty")));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

fn check_keyword_table(errors: &mut Vec<ConfigError>, key: &str, table: &[String]) {
    if table.is_empty() {
        errors.push(validation(format!("{key} must not be empty")));
    }
    for (i, keyword) in table.iter().enumerate() {
        if keyword.trim().is_empty() {
            errors.push(validation(format!("{key}[{i}] must not be blank")));
        }
    }
}

fn check_template_list(errors: &mut Vec<ConfigError>, key: &str, templates: &[String]) {
    if templates.is_empty() {
        errors.push(validation(format!("{key} must not be empty")));
    }
    for (i, template) in templates.iter().enumerate() {
        if template.trim().is_empty() {
            errors.push(validation(format!("{key}[{i}] must not be blank")));
        }
    }
}

fn check_topic(errors: &mut Vec<ConfigError>, key: &str, topic: &TopicResponses) {
    check_keyword_table(errors, &format!("{key}.keywords"), &topic.keywords);
    check_template_list(errors, &format!("{key}.strategies"), &topic.strategies);
    if topic.intro.trim().is_empty() {
        errors.push(validation(format!("{key}.intro must not be empty")));
    }
    if topic.follow_up.trim().is_empty() {
        errors.push(validation(format!("{key}.follow_up must not be empty")));
    }
}
