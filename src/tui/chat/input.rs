// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Key binding descriptions for the chat TUI
//!
//! Key handling lives in `app/controller.rs`; this module only describes the
//! bindings for the hint line and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::ChatMode;

/// Key binding description for help display
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn binding(keys: &'static str, description: &'static str) -> KeyBinding {
    KeyBinding { keys, description }
}

/// Get key bindings for a given mode
pub fn bindings_for_mode(mode: ChatMode) -> Vec<KeyBinding> {
    match mode {
        ChatMode::Input => vec![
            binding("Enter", "Send message"),
            binding("Ctrl+N", "New chat"),
            binding("Tab", "Chat history"),
            binding("PgUp/PgDn", "Scroll"),
            binding("↑/↓", "Input history"),
            binding("Ctrl+W", "Delete word"),
            binding("Ctrl+U", "Clear input"),
            binding("F1", "Help"),
            binding("Ctrl+C", "Quit"),
        ],
        ChatMode::Sidebar => vec![
            binding("↑/↓ or j/k", "Move"),
            binding("Enter", "Open chat"),
            binding("d/Del", "Delete chat"),
            binding("n", "New chat"),
            binding("Tab/Esc", "Back to input"),
            binding("?", "Help"),
            binding("q", "Quit"),
        ],
        ChatMode::Help => vec![binding("Esc/q/?", "Close help")],
    }
}

/// Format a key event for display
pub fn format_key_event(key: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift".to_string());
    }

    let key_name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    parts.push(key_name);
    parts.join("+")
}
