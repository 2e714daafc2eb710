// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use deepchat::cli::{Cli, Commands};

#[test]
fn test_parse_chat_command() {
    let args = vec!["deepchat", "chat"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Chat(_))));
}

#[test]
fn test_parse_chat_with_model() {
    let args = vec!["deepchat", "chat", "-m", "deepseek-reasoner"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Chat(chat_args)) = cli.command {
        assert_eq!(
            chat_args.provider.model,
            Some("deepseek-reasoner".to_string())
        );
    } else {
        panic!("Expected Chat command");
    }
}

#[test]
fn test_parse_ask_command() {
    let args = vec!["deepchat", "ask", "What is Rust?"];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(ask_args.prompt_text(), "What is Rust?");
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_ask_with_base_url() {
    let args = vec![
        "deepchat",
        "ask",
        "--base-url",
        "http://localhost:8080/v1/chat/completions",
        "hi",
    ];
    let cli = Cli::try_parse_from(args).expect("Valid command parsing");
    if let Some(Commands::Ask(ask_args)) = cli.command {
        assert_eq!(
            ask_args.provider.base_url.as_deref(),
            Some("http://localhost:8080/v1/chat/completions")
        );
        assert_eq!(ask_args.prompt_text(), "hi");
    } else {
        panic!("Expected Ask command");
    }
}

#[test]
fn test_parse_config_flags() {
    let cli = Cli::try_parse_from(["deepchat", "config", "--init"]).unwrap();
    match cli.command {
        Some(Commands::Config(args)) => {
            assert!(args.init);
            assert!(!args.path);
        }
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["deepchat", "settings"]).is_err());
}
