// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! deepchat - chat with an LLM from your terminal
//!
//! Entry point for the deepchat CLI application.

use clap::Parser;

use deepchat::cli::{ChatArgs, Cli, Commands};
use deepchat::config::Settings;
use deepchat::error::Result;

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{run_ask, run_chat, run_config, settings_path};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on deepchat's own diagnostics, `-vv` adds the HTTP stack.
    // `RUST_LOG` still takes precedence.
    let directives: &[&str] = match cli.verbose {
        0 => &[],
        1 => &["deepchat=debug"],
        _ => &["deepchat=trace", "reqwest=debug", "hyper=debug"],
    };
    for directive in directives {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    // The TUI owns stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Variables from a .env file never override ones already set
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    // Load settings
    let path = settings_path(cli.config.as_deref());
    let settings = Settings::load_from(&path)?;

    // Dispatch to appropriate command
    match cli.command {
        None => {
            run_chat(ChatArgs::default(), settings).await?;
        }
        Some(Commands::Chat(args)) => {
            run_chat(args, settings).await?;
        }
        Some(Commands::Ask(args)) => {
            if !run_ask(args, settings).await? {
                std::process::exit(1);
            }
        }
        Some(Commands::Config(args)) => {
            run_config(args, &settings, &path)?;
        }
    }

    Ok(())
}
