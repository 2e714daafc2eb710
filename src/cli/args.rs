// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for deepchat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;

/// deepchat - chat with an LLM from your terminal
#[derive(Parser, Debug)]
#[command(name = "deepchat")]
#[command(version, about = "Chat with an LLM from your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive chat (default when no command given)
    Chat(ChatArgs),

    /// Ask a single question (non-interactive)
    Ask(AskArgs),

    /// Show or initialize the settings file
    Config(ConfigArgs),
}

/// Provider overrides shared by the chat and ask subcommands
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ProviderArgs {
    /// Model to use (overrides settings)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Chat-completions endpoint (overrides settings)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides settings)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ProviderArgs {
    /// Apply command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref model) = self.model {
            settings.provider.model = model.clone();
        }
        if let Some(ref base_url) = self.base_url {
            settings.provider.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.provider.timeout_secs = Some(timeout);
        }
    }
}

/// Arguments for the chat subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ChatArgs {
    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    #[arg(required = true)]
    pub prompt: Vec<String>,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

impl AskArgs {
    /// Prompt words joined back into one message
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}

/// Arguments for the config subcommand
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Write a settings file with default values if none exists
    #[arg(long)]
    pub init: bool,

    /// Only print the settings file path
    #[arg(long)]
    pub path: bool,
}
