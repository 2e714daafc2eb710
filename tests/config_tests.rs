// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use tempfile::TempDir;

use deepchat::config::Settings;
use deepchat::session::DEFAULT_GREETING;

#[test]
fn test_settings_default_values() {
    let settings = Settings::default();

    assert_eq!(settings.provider.model, "deepseek-chat");
    assert_eq!(
        settings.provider.base_url,
        "https://api.deepseek.com/v1/chat/completions"
    );
    assert_eq!(settings.provider.api_key_env, "DEEPSEEK_API_KEY");
    assert_eq!(settings.chat.greeting, DEFAULT_GREETING);
    assert_eq!(settings.chat.title_max_chars, 30);
    assert!(settings.appearance.show_response_time);
}

#[test]
fn test_settings_api_key_priority() {
    // Use a custom env var name to avoid test pollution
    let mut settings = Settings::default();
    settings.provider.api_key_env = "DEEPCHAT_TEST_API_KEY_12345".to_string();
    settings.provider.api_key = Some("config-key".to_string());

    // Without env var, should use config key
    std::env::remove_var("DEEPCHAT_TEST_API_KEY_12345");
    assert_eq!(settings.get_api_key(), Some("config-key".to_string()));

    // With env var set, should prefer env var
    std::env::set_var("DEEPCHAT_TEST_API_KEY_12345", "env-key");
    assert_eq!(settings.get_api_key(), Some("env-key".to_string()));

    // An empty env var does not count
    std::env::set_var("DEEPCHAT_TEST_API_KEY_12345", "");
    assert_eq!(settings.get_api_key(), Some("config-key".to_string()));

    std::env::remove_var("DEEPCHAT_TEST_API_KEY_12345");
}

#[test]
fn test_api_key_from_dotenv_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_path = temp_dir.path().join(".env");
    std::fs::write(
        &env_path,
        "DEEPCHAT_TEST_DOTENV_KEY_8642=dotenv-key\nDEEPCHAT_TEST_DOTENV_SHELL_8642=dotenv-value\n",
    )
    .unwrap();

    // Already-set variables win over the file
    std::env::set_var("DEEPCHAT_TEST_DOTENV_SHELL_8642", "shell-value");
    dotenvy::from_path(&env_path).unwrap();

    let mut settings = Settings::default();
    settings.provider.api_key_env = "DEEPCHAT_TEST_DOTENV_KEY_8642".to_string();
    settings.provider.api_key = Some("config-key".to_string());
    assert_eq!(settings.get_api_key(), Some("dotenv-key".to_string()));

    settings.provider.api_key_env = "DEEPCHAT_TEST_DOTENV_SHELL_8642".to_string();
    assert_eq!(settings.get_api_key(), Some("shell-value".to_string()));

    std::env::remove_var("DEEPCHAT_TEST_DOTENV_KEY_8642");
    std::env::remove_var("DEEPCHAT_TEST_DOTENV_SHELL_8642");
}

#[test]
fn test_settings_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deepchat").join("settings.json");

    let mut settings = Settings::default();
    settings.provider.model = "deepseek-reasoner".to_string();
    settings.chat.untitled_label = "Untitled".to_string();
    settings.appearance.sidebar_width = 30;
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.provider.model, "deepseek-reasoner");
    assert_eq!(loaded.chat.untitled_label, "Untitled");
    assert_eq!(loaded.appearance.sidebar_width, 30);
}

#[test]
fn test_settings_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"chat": {"greeting": "Hi there"}, "appearance": {"show_response_time": false}}"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.chat.greeting, "Hi there");
    assert_eq!(settings.chat.title_max_chars, 30);
    assert!(!settings.appearance.show_response_time);
    assert_eq!(settings.provider.model, "deepseek-chat");
}

#[test]
fn test_invalid_settings_rejected() {
    let mut settings = Settings::default();
    settings.provider.base_url = "api.deepseek.com".to_string();
    let err = settings.validate().unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
