// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./solace.toml` > `~/.config/solace/solace.toml` >
//! `/etc/solace/solace.toml` with environment variable overrides via the
//! `SOLACE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SolaceConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults (stock triage tables and reply templates)
/// 2. `/etc/solace/solace.toml` (system-wide)
/// 3. `~/.config/solace/solace.toml` (user XDG config)
/// 4. `./solace.toml` (local directory)
/// 5. `SOLACE_*` environment variables
pub fn load_config() -> Result<SolaceConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file hierarchy, no env).
///
/// Used for testing and explicit inline configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SolaceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use so callers can inspect provenance metadata).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SolaceConfig::default()))
        .merge(Toml::file("/etc/solace/solace.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("solace/solace.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("solace.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `SOLACE_ENGINE_REPLY_DELAY_MS` must map to
/// `engine.reply_delay_ms`, not `engine.reply.delay.ms`.
fn env_provider() -> Env {
    Env::prefixed("SOLACE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SOLACE_AGENT_LOG_LEVEL -> "agent_log_level"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("engine_", "engine.", 1)
            .replacen("triage_", "triage.", 1)
            .replacen("responses_", "responses.", 1);
        mapped.into()
    })
}
