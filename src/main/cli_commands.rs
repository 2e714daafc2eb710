// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use deepchat::chat::ChatController;
use deepchat::cli::{AskArgs, ChatArgs, ConfigArgs};
use deepchat::config::Settings;
use deepchat::error::Result;
use deepchat::llm::providers::DeepSeekProvider;
use deepchat::session::SessionStore;
use deepchat::tui::chat::{run_chat_tui, ChatTuiConfig};

/// Settings file to use: `--config` if given, the default location otherwise.
pub(super) fn settings_path(config: Option<&Path>) -> PathBuf {
    config
        .map(Path::to_path_buf)
        .unwrap_or_else(Settings::default_path)
}

/// Build the controller for the configured provider.
///
/// A missing API key is only warned about; the provider's authentication
/// error shows up in the transcript on the first send.
pub(super) fn build_controller(settings: &Settings) -> Result<ChatController> {
    let api_key = settings.get_api_key().unwrap_or_else(|| {
        tracing::warn!(
            "No API key found; set {} or provider.api_key in the settings file",
            settings.provider.api_key_env
        );
        String::new()
    });

    let mut provider = DeepSeekProvider::with_base_url(api_key, &settings.provider.base_url);
    if let Some(secs) = settings.provider.timeout_secs {
        provider = provider.with_timeout(Duration::from_secs(secs))?;
    }

    tracing::debug!(
        base_url = provider.base_url(),
        model = %settings.provider.model,
        "Provider configured"
    );

    Ok(ChatController::new(
        Arc::new(provider),
        settings.provider.model.clone(),
    ))
}

/// Run interactive chat mode
pub(super) async fn run_chat(args: ChatArgs, mut settings: Settings) -> Result<()> {
    args.provider.apply(&mut settings);
    settings.validate()?;

    let controller = build_controller(&settings)?;
    let config = ChatTuiConfig::from_settings(&settings, controller.provider_name());
    let store = SessionStore::with_greeting(settings.chat.greeting.clone());

    run_chat_tui(config, controller, store).await
}

/// Ask a single question and print the reply.
///
/// Returns whether the provider answered; a failure has already been printed.
pub(super) async fn run_ask(args: AskArgs, mut settings: Settings) -> Result<bool> {
    args.provider.apply(&mut settings);
    settings.validate()?;

    let controller = build_controller(&settings)?;
    let mut store = SessionStore::with_greeting(settings.chat.greeting.clone());

    let report = controller
        .send_user_message(&mut store, args.prompt_text())
        .await;

    let reply = store
        .active()
        .last()
        .map(|message| message.content.clone())
        .unwrap_or_default();

    let mut stdout = io::stdout();
    if report.is_success() {
        writeln!(stdout, "{}", reply)?;
    } else {
        stdout.execute(SetForegroundColor(Color::Red))?;
        writeln!(stdout, "{}", reply)?;
        stdout.execute(ResetColor)?;
    }

    if settings.appearance.show_response_time {
        stdout.execute(SetForegroundColor(Color::DarkGrey))?;
        writeln!(stdout, "{}", report.caption())?;
        stdout.execute(ResetColor)?;
    }
    stdout.flush()?;

    Ok(report.is_success())
}

/// Show or initialize the settings file
pub(super) fn run_config(args: ConfigArgs, settings: &Settings, path: &Path) -> Result<()> {
    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    if args.init {
        if path.exists() {
            println!("Settings file already exists at {}", path.display());
        } else {
            Settings::default().save_to(path)?;
            println!("Wrote default settings to {}", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(&settings.redacted())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_path_prefers_flag() {
        let path = settings_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
        assert!(settings_path(None).ends_with("settings.json"));
    }

    #[test]
    fn test_build_controller_uses_configured_model() {
        let mut settings = Settings::default();
        settings.provider.model = "deepseek-reasoner".to_string();
        settings.provider.api_key = Some("sk-test".to_string());
        settings.provider.timeout_secs = Some(5);

        let controller = build_controller(&settings).unwrap();

        assert_eq!(controller.model(), "deepseek-reasoner");
        assert_eq!(controller.provider_name(), "deepseek");
    }

    #[test]
    fn test_build_controller_without_key() {
        let mut settings = Settings::default();
        settings.provider.api_key_env = "DEEPCHAT_TEST_UNSET_ENV_24680".to_string();

        assert!(build_controller(&settings).is_ok());
    }

    #[test]
    fn test_config_init_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let args = ConfigArgs {
            init: true,
            path: false,
        };

        run_config(args, &Settings::default(), &path).unwrap();
        assert!(path.exists());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("deepseek-chat"));

        std::fs::write(&path, r#"{"provider": {"model": "kept"}}"#).unwrap();
        let args = ConfigArgs {
            init: true,
            path: false,
        };
        run_config(args, &Settings::default(), &path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.provider.model, "kept");
    }
}
