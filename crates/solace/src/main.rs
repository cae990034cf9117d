// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Solace - an always-on student mental-health support agent.
//!
//! This is the binary entry point for the Solace agent.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat;

/// Solace - an always-on student mental-health support agent.
#[derive(Parser, Debug)]
#[command(name = "solace", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive support conversation.
    Chat {
        /// Display name used to personalize the greeting.
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the effective configuration after merging all sources.
    Config,
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` overrides the configured level when set.
fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match solace_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            solace_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    match cli.command {
        Some(Commands::Chat { name }) => {
            if let Err(e) = chat::run_chat(config, name).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("solace: use --help for available commands");
        }
    }
}
