// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat application state machine
//!
//! The main state container for the chat TUI, handling mode transitions,
//! key events, and the hand-off to the chat controller.

use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};

use crate::chat::{ChatController, TurnReport, TurnState};
use crate::error::Result;
use crate::session::SessionStore;

use super::state::{InputState, ScrollState, SidebarState};
use super::widgets::message::transcript_height;
use super::ChatTuiConfig;

mod controller;
mod messages;

pub use messages::ChatAction;

/// How long one tick waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Current mode of the chat UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatMode {
    /// Typing in input area
    Input,
    /// Navigating the chat-history sidebar
    Sidebar,
    /// Showing help overlay
    Help,
}

/// Result of a tick (event loop iteration)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue running
    Continue,
    /// User wants to quit
    Quit,
}

/// Main application state for the chat TUI
pub struct ChatApp {
    // === Configuration ===
    pub config: ChatTuiConfig,

    // === UI State ===
    pub mode: ChatMode,
    /// Mode to return to when the help overlay closes
    pub previous_mode: ChatMode,
    pub scroll_state: ScrollState,
    pub sidebar: SidebarState,
    pub input: InputState,

    // === Content ===
    pub store: SessionStore,

    // === Turn ===
    pub turn_state: TurnState,
    /// A user message was appended and the reply has not been requested yet
    pub send_pending: bool,
    /// Outcome of the most recent send, cleared by any other action
    pub last_report: Option<TurnReport>,

    // === Status ===
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
    /// The screen needs repainting
    dirty: bool,

    controller: ChatController,
}

impl ChatApp {
    /// Create a new chat application
    pub fn new(config: ChatTuiConfig, controller: ChatController, store: SessionStore) -> Self {
        Self {
            config,

            mode: ChatMode::Input,
            previous_mode: ChatMode::Input,
            scroll_state: ScrollState::new(),
            sidebar: SidebarState::new(),
            input: InputState::new(),

            store,

            turn_state: TurnState::Idle,
            send_pending: false,
            last_report: None,

            status_message: None,
            status_is_error: false,
            should_quit: false,
            dirty: true,

            controller,
        }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// Whether a request is in flight (or about to be)
    pub fn is_busy(&self) -> bool {
        self.turn_state == TurnState::Sending
    }

    /// Sidebar titles for the current archive
    pub fn sidebar_titles(&self) -> Vec<String> {
        self.store
            .titles(self.config.title_max_chars, &self.config.untitled_label)
    }

    /// Caption shown under the transcript, if any
    pub fn caption(&self) -> Option<String> {
        if !self.config.show_response_time {
            return None;
        }
        self.last_report.map(|report| report.caption())
    }

    /// Height of the active transcript at the current viewport width
    pub fn transcript_height(&self) -> usize {
        transcript_height(
            &self.store.active().messages,
            self.scroll_state.viewport_width,
        )
    }

    /// Request a repaint on the next loop iteration
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Return and clear the repaint flag (including store changes)
    pub fn take_dirty(&mut self) -> bool {
        let store_dirty = self.store.take_dirty();
        std::mem::replace(&mut self.dirty, false) || store_dirty
    }

    /// Process one tick of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        // The busy frame has been drawn; now wait for the reply.
        if self.send_pending {
            self.finish_turn().await;
            return Ok(TickResult::Continue);
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key)?,
                Event::Resize(..) => self.mark_dirty(),
                _ => {}
            }
        }

        if self.should_quit {
            Ok(TickResult::Quit)
        } else {
            Ok(TickResult::Continue)
        }
    }

    /// Await the provider for the message queued by a submit.
    pub async fn finish_turn(&mut self) {
        self.send_pending = false;
        let report = self.controller.complete_turn(&mut self.store).await;

        self.turn_state = TurnState::Idle;
        self.last_report = Some(report);
        self.scroll_state.scroll_to_bottom();
        if report.is_success() {
            self.clear_status();
        } else {
            self.set_error("Request failed");
        }
        self.mark_dirty();
    }
}
