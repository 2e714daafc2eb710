// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{ChatError, Result};

use super::Settings;

impl Settings {
    /// Get the provider API key, checking env var first.
    pub fn get_api_key(&self) -> Option<String> {
        // Priority: env var > config file.
        std::env::var(&self.provider.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.provider.api_key.clone())
    }

    /// Reject settings the chat runtime cannot work with.
    ///
    /// A missing API key is not an error here; the provider's authentication
    /// failure surfaces in the transcript on the first send.
    pub fn validate(&self) -> Result<()> {
        if self.provider.model.trim().is_empty() {
            return Err(ChatError::Config("provider.model must not be empty".into()));
        }
        let url = self.provider.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ChatError::Config(format!(
                "provider.base_url must be an http(s) URL, got '{}'",
                url
            )));
        }
        if self.provider.timeout_secs == Some(0) {
            return Err(ChatError::Config(
                "provider.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.chat.title_max_chars == 0 {
            return Err(ChatError::Config(
                "chat.title_max_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Copy of these settings safe to print (stored API key masked).
    pub fn redacted(&self) -> Settings {
        let mut copy = self.clone();
        if copy.provider.api_key.is_some() {
            copy.provider.api_key = Some("********".to_string());
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut settings = Settings::default();
        settings.provider.model = "  ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("provider.model"));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut settings = Settings::default();
        settings.provider.base_url = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.provider.timeout_secs = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_title_length() {
        let mut settings = Settings::default();
        settings.chat.title_max_chars = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_get_api_key_from_config() {
        let mut settings = Settings::default();
        settings.provider.api_key = Some("sk-config".to_string());
        settings.provider.api_key_env = "DEEPCHAT_TEST_UNSET_ENV_12345".to_string();

        assert_eq!(settings.get_api_key(), Some("sk-config".to_string()));
    }

    #[test]
    fn test_get_api_key_none() {
        let mut settings = Settings::default();
        settings.provider.api_key = None;
        settings.provider.api_key_env = "DEEPCHAT_TEST_UNSET_ENV_67890".to_string();

        assert!(settings.get_api_key().is_none());
    }

    #[test]
    fn test_redacted_masks_key() {
        let mut settings = Settings::default();
        settings.provider.api_key = Some("sk-secret".to_string());
        let redacted = settings.redacted();
        assert_eq!(redacted.provider.api_key.as_deref(), Some("********"));
        assert_eq!(settings.provider.api_key.as_deref(), Some("sk-secret"));
    }
}
