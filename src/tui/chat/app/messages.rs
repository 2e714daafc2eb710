// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::chat::TurnState;

use super::{ChatApp, ChatMode};

/// Session-level intent produced by key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// Archive the active conversation and start a fresh one
    NewChat,
    /// Open archive entry `n`
    SelectChat(usize),
    /// Remove archive entry `n`
    DeleteChat(usize),
    /// Send a message (or run a slash command)
    Submit(String),
    Quit,
}

impl ChatApp {
    /// Apply an action to the session.
    ///
    /// Everything except quitting is ignored while a request is in flight.
    pub fn apply(&mut self, action: ChatAction) {
        if self.turn_state == TurnState::Sending && action != ChatAction::Quit {
            tracing::debug!(?action, "Ignoring action while waiting for a reply");
            return;
        }

        match action {
            ChatAction::NewChat => {
                self.store.start_new_chat();
                self.after_session_change();
                self.mode = ChatMode::Input;
                self.set_status("Started a new chat");
            }
            ChatAction::SelectChat(index) => {
                if index >= self.store.archive().len() {
                    tracing::warn!(index, "Ignoring selection of a missing chat");
                    return;
                }
                self.store.select_chat(index);
                self.after_session_change();
                self.mode = ChatMode::Input;
                self.clear_status();
            }
            ChatAction::DeleteChat(index) => {
                if index >= self.store.archive().len() {
                    tracing::warn!(index, "Ignoring deletion of a missing chat");
                    return;
                }
                self.store.delete_chat(index);
                self.after_session_change();
                self.set_status("Deleted chat");
            }
            ChatAction::Submit(text) => self.submit_message(text),
            ChatAction::Quit => self.should_quit = true,
        }
        self.mark_dirty();
    }

    fn after_session_change(&mut self) {
        self.last_report = None;
        self.scroll_state.scroll_to_bottom();
        let len = self.store.archive().len();
        self.sidebar.clamp(len);
    }

    pub(super) fn submit_message(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }

        // Only a bare known command is intercepted; any other text is a message
        if let Some(name) = text.trim().strip_prefix('/') {
            if self.handle_command(name) {
                return;
            }
        }

        self.controller.begin_turn(&mut self.store, text);
        self.turn_state = TurnState::Sending;
        self.send_pending = true;
        self.last_report = None;
        self.scroll_state.scroll_to_bottom();
        self.clear_status();
    }

    /// Run a slash command. Returns false if `name` is not one.
    pub(super) fn handle_command(&mut self, name: &str) -> bool {
        match name {
            "new" | "clear" => self.apply(ChatAction::NewChat),
            "help" => self.open_help(),
            "quit" | "exit" | "q" => self.apply(ChatAction::Quit),
            _ => return false,
        }
        true
    }

    pub(super) fn open_help(&mut self) {
        if self.mode != ChatMode::Help {
            self.previous_mode = self.mode;
            self.mode = ChatMode::Help;
        }
        self.mark_dirty();
    }

    pub(super) fn close_help(&mut self) {
        self.mode = self.previous_mode;
        self.mark_dirty();
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = false;
        self.mark_dirty();
    }

    pub fn set_error(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
        self.status_is_error = true;
        self.mark_dirty();
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
        self.mark_dirty();
    }
}
