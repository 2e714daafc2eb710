// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::Result;
use crate::tui::chat::input::format_key_event;

use super::{ChatAction, ChatApp, ChatMode};

impl ChatApp {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        tracing::trace!(key = %format_key_event(&key), mode = ?self.mode, "Key press");

        // Global keys that work in any mode.
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.apply(ChatAction::Quit);
                return Ok(());
            }
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => {
                self.apply(ChatAction::NewChat);
                return Ok(());
            }
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                // Clear and redraw.
                self.mark_dirty();
                return Ok(());
            }
            (_, KeyCode::F(1)) => {
                if self.mode == ChatMode::Help {
                    self.close_help();
                } else {
                    self.open_help();
                }
                return Ok(());
            }
            (KeyModifiers::NONE, KeyCode::PageUp) if self.mode != ChatMode::Help => {
                let total = self.transcript_height();
                self.scroll_state.page_up(total);
                self.mark_dirty();
                return Ok(());
            }
            (KeyModifiers::NONE, KeyCode::PageDown) if self.mode != ChatMode::Help => {
                self.scroll_state.page_down();
                self.mark_dirty();
                return Ok(());
            }
            _ => {}
        }

        // Mode-specific handling.
        match self.mode {
            ChatMode::Input => self.handle_input_key(key),
            ChatMode::Sidebar => self.handle_sidebar_key(key),
            ChatMode::Help => self.handle_help_key(key),
        }
        self.mark_dirty();

        Ok(())
    }

    /// Handle keys in input mode.
    pub(super) fn handle_input_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Submit
            (KeyModifiers::NONE, KeyCode::Enter) => {
                if !self.input.is_empty() && !self.is_busy() {
                    let text = self.input.submit();
                    self.apply(ChatAction::Submit(text));
                }
            }
            // Switch to the sidebar
            (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Esc) => {
                self.focus_sidebar();
            }
            // History navigation
            (KeyModifiers::NONE, KeyCode::Up) => {
                self.input.history_prev();
            }
            (KeyModifiers::NONE, KeyCode::Down) => {
                self.input.history_next();
            }
            // Cursor movement
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
            }
            (KeyModifiers::NONE, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
                self.input.move_home();
            }
            (KeyModifiers::NONE, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.input.move_end();
            }
            // Deletion
            (KeyModifiers::NONE, KeyCode::Backspace) => {
                self.input.backspace();
            }
            (KeyModifiers::NONE, KeyCode::Delete) => {
                self.input.delete();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.input.delete_word();
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input.clear();
            }
            // Character input
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
            }
            _ => {}
        }
    }

    /// Handle keys while the sidebar has focus.
    pub(super) fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let len = self.store.archive().len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar.move_up(len);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.sidebar.move_down(len);
            }
            KeyCode::Enter => {
                if let Some(index) = self.sidebar.cursor() {
                    self.apply(ChatAction::SelectChat(index));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.sidebar.cursor() {
                    self.apply(ChatAction::DeleteChat(index));
                }
            }
            KeyCode::Char('n') => {
                self.apply(ChatAction::NewChat);
            }
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
                self.mode = ChatMode::Input;
            }
            KeyCode::Char('?') => {
                self.open_help();
            }
            KeyCode::Char('q') => {
                self.apply(ChatAction::Quit);
            }
            _ => {}
        }
    }

    /// Handle keys in help mode.
    pub(super) fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                self.close_help();
            }
            _ => {}
        }
    }

    fn focus_sidebar(&mut self) {
        let len = self.store.archive().len();
        // Start on the chat that is open, if it came from the archive
        match self.store.selected() {
            Some(selected) => self.sidebar.select(selected, len),
            None => self.sidebar.clamp(len),
        }
        self.mode = ChatMode::Sidebar;
    }
}
