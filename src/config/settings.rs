// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for deepchat
//!
//! Handles loading and saving settings from ~/.deepchat/settings.json

use serde::{Deserialize, Serialize};

use crate::llm::providers::deepseek::DEEPSEEK_API_URL;
use crate::session::DEFAULT_GREETING;

mod io;
mod validation;

/// Main settings structure, stored in ~/.deepchat/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Conversation defaults
    #[serde(default)]
    pub chat: ChatConfig,

    /// Appearance settings
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key (if stored directly, not recommended)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable name for API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat-completions endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request deadline in seconds (None = transport default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Conversation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Assistant greeting that seeds every new conversation
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Characters of the first user message shown as a sidebar title
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Sidebar title for conversations without a user message
    #[serde(default = "default_untitled_label")]
    pub untitled_label: String,
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Show the response-time caption after a send
    #[serde(default = "default_true")]
    pub show_response_time: bool,

    /// Width of the conversation sidebar in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            title_max_chars: default_title_max_chars(),
            untitled_label: default_untitled_label(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            show_response_time: true,
            sidebar_width: default_sidebar_width(),
        }
    }
}

// Default value functions
fn default_api_key_env() -> String {
    "DEEPSEEK_API_KEY".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_base_url() -> String {
    DEEPSEEK_API_URL.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_title_max_chars() -> usize {
    30
}

fn default_untitled_label() -> String {
    "New Chat".to_string()
}

fn default_true() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    38
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_provider_config_default() {
        let config = ProviderConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_key_env, "DEEPSEEK_API_KEY");
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.base_url, "https://api.deepseek.com/v1/chat/completions");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_chat_config_default() {
        let config = ChatConfig::default();
        assert_eq!(config.greeting, DEFAULT_GREETING);
        assert_eq!(config.title_max_chars, 30);
        assert_eq!(config.untitled_label, "New Chat");
    }

    #[test]
    fn test_appearance_config_default() {
        let config = AppearanceConfig::default();
        assert!(config.show_response_time);
        assert_eq!(config.sidebar_width, 38);
    }

    #[test]
    fn test_settings_partial_json() {
        let json = r#"{"provider": {"model": "deepseek-reasoner"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.provider.model, "deepseek-reasoner");
        assert_eq!(settings.provider.api_key_env, "DEEPSEEK_API_KEY");
        assert_eq!(settings.chat.title_max_chars, 30);
    }

    #[test]
    fn test_settings_load_from_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.provider.model, "deepseek-chat");
    }

    #[test]
    fn test_settings_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.provider.model = "custom-model".to_string();
        settings.provider.timeout_secs = Some(45);
        settings.chat.greeting = "Hi!".to_string();

        settings.save_to(&path).unwrap();
        assert!(path.exists());

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.provider.model, "custom-model");
        assert_eq!(loaded.provider.timeout_secs, Some(45));
        assert_eq!(loaded.chat.greeting, "Hi!");
    }

    #[test]
    fn test_settings_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_api_key_not_serialized_when_absent() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(!json.contains("api_key\""));
    }
}
