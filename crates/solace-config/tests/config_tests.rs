// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Solace configuration system.

use solace_config::diagnostic::{ConfigError, suggest_key};
use solace_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known sections deserializes successfully.
#[test]
fn valid_toml_deserializes_into_solace_config() {
    let toml = r#"
[agent]
name = "campus-care"
log_level = "debug"
greeting = "How can I support you today?"

[engine]
reply_delay_ms = 400

[triage]
high_risk_keywords = ["danger phrase"]
medium_risk_keywords = ["hard day"]

[responses]
acknowledgments = ["Tell me more."]
empathy_preamble = "I hear you. "
probing_prompt = "What's been going on?"
booking_offer = "Want me to book a counselor?"

[responses.contacts]
crisis_line = "113"
crisis_text_number = "1813"
crisis_text_keyword = "TALK"
emergency = "112"
campus_security = "+31 20 123 4567"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "campus-care");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.engine.reply_delay_ms, 400);
    assert_eq!(config.triage.high_risk_keywords, vec!["danger phrase"]);
    assert_eq!(config.triage.medium_risk_keywords, vec!["hard day"]);
    assert_eq!(config.responses.acknowledgments, vec!["Tell me more."]);
    assert_eq!(config.responses.contacts.crisis_line, "113");
    assert_eq!(config.responses.contacts.emergency, "112");
    // Topic sections were not overridden and keep their defaults.
    assert_eq!(config.responses.anxiety.strategies.len(), 3);
}

/// Unknown field in [agent] produces a diagnostic with a typo suggestion.
#[test]
fn unknown_field_produces_suggestion_diagnostic() {
    let toml = r#"
[agent]
greating = "hi there"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "greating" && suggestion.as_deref() == Some("greeting")
    )));
}

/// Empty TOML yields the stock tables and templates.
#[test]
fn missing_sections_use_stock_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "solace");
    assert_eq!(config.agent.log_level, "info");
    assert_eq!(config.engine.reply_delay_ms, 1500);
    assert!(
        config
            .triage
            .high_risk_keywords
            .contains(&"end it all".to_string())
    );
    assert!(
        config
            .triage
            .medium_risk_keywords
            .contains(&"hopeless".to_string())
    );
    assert_eq!(config.responses.contacts.crisis_line, "988");
    assert_eq!(config.responses.acknowledgments.len(), 4);
}

/// Validation rejects a config whose tables were explicitly emptied.
#[test]
fn validation_rejects_emptied_tables() {
    let toml = r#"
[triage]
high_risk_keywords = []
"#;

    let errors = load_and_validate_str(toml).expect_err("empty table should fail validation");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("high_risk_keywords")
    )));
}

/// The suggestion engine works on the real key space.
#[test]
fn suggest_key_over_engine_section() {
    assert_eq!(
        suggest_key("reply_delay", &["reply_delay_ms"]),
        Some("reply_delay_ms".to_string())
    );
    assert_eq!(suggest_key("qqq", &["reply_delay_ms"]), None);
}

/// A wrong-typed value is reported as an invalid type, not a crash.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[engine]
reply_delay_ms = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("string delay should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { .. } | ConfigError::Other(_))),
        "expected a type diagnostic, got: {errors:?}"
    );
}
