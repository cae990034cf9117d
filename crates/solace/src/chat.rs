// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `solace chat` command implementation.
//!
//! Launches an interactive support conversation with a colored prompt,
//! readline history, and a typing indicator while the reply rides out the
//! thinking delay. Creates a new session per invocation and tears it down
//! on exit, cancelling any in-flight turn.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::warn;

use solace_config::SolaceConfig;
use solace_core::{Identity, RiskTier, Sender, SolaceError};
use solace_engine::SupportDesk;

/// Runs the `solace chat` interactive conversation.
///
/// Drives a single session on a fresh support desk. High-risk escalations
/// are logged; in the full portal deployment the same channel feeds the
/// staff notification pipeline.
pub async fn run_chat(config: SolaceConfig, name: Option<String>) -> Result<(), SolaceError> {
    let (desk, mut risk_events) = SupportDesk::new(&config);

    // Escalation consumer. The CLI only logs; the portal wires this into
    // staff alerting.
    tokio::spawn(async move {
        while let Some(event) = risk_events.recv().await {
            warn!(
                session_id = %event.session_id,
                tier = %event.tier,
                "high-risk message flagged for escalation"
            );
        }
    });

    let identity = name.map(Identity::named);
    let session_id = desk.open_session(identity.as_ref()).await;

    // Set up readline editor.
    let mut rl = DefaultEditor::new()
        .map_err(|e| SolaceError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", config.agent.name.bold().green());
    println!(
        "{}",
        "Confidential support. Not a replacement for professional therapy.".dimmed()
    );
    println!("Type {} to exit.\n", "/quit".yellow());

    // Print the greeting.
    if let Some(greeting) = desk.messages(&session_id).await?.first() {
        print_reply(&config.agent.name, &greeting.content, None);
    }

    let prompt = "you> ".to_string();
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match desk.submit(&session_id, trimmed).await {
                    Ok(_) => {
                        show_typing_indicator(&desk, &session_id, &config.agent.name).await;
                        let messages = desk.messages(&session_id).await?;
                        if let Some(reply) = messages.iter().rev().find(|m| m.sender == Sender::Assistant) {
                            print_reply(&config.agent.name, &reply.content, reply.risk_tier);
                        }
                    }
                    Err(e) if e.is_rejection() => {
                        eprintln!("{}", e.to_string().yellow());
                    }
                    Err(e) => {
                        eprintln!("{}: {e}", "error".red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    // Clean up: cancel any pending turn and drop the session.
    desk.close_session(&session_id).await?;

    println!("{}", "take care".dimmed());
    Ok(())
}

/// Animates a dimmed typing indicator until the reply lands.
async fn show_typing_indicator(desk: &SupportDesk, session_id: &solace_core::SessionId, agent: &str) {
    print!("{}", format!("{agent} is typing").dimmed());
    let _ = std::io::stdout().flush();

    while desk.is_replying(session_id).await.unwrap_or(false) {
        print!("{}", ".".dimmed());
        let _ = std::io::stdout().flush();
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    println!();
}

/// Prints an assistant reply, with a crisis banner on high-risk replies.
fn print_reply(agent: &str, content: &str, tier: Option<RiskTier>) {
    if tier == Some(RiskTier::High) {
        println!("{}", "! crisis support".red().bold());
    }
    println!("{} {}\n", format!("{agent}>").green(), content);
}
