// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat TUI module
//!
//! The interactive terminal front end:
//! - Sidebar of archived conversations with open/delete
//! - Transcript of the active conversation with scrolling
//! - Input line with history, busy indicator, response-time caption

pub mod app;
pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

use std::io;
use std::sync::Arc;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::chat::ChatController;
use crate::config::Settings;
use crate::error::{ChatError, Result};
use crate::session::SessionStore;

pub use app::{ChatAction, ChatApp, ChatMode, TickResult};

/// Configuration for the chat TUI
#[derive(Debug, Clone)]
pub struct ChatTuiConfig {
    pub provider_name: String,
    pub model: String,
    /// Characters of the first user message used as a sidebar title
    pub title_max_chars: usize,
    /// Sidebar title for conversations without a user message
    pub untitled_label: String,
    pub show_response_time: bool,
    pub sidebar_width: u16,
}

impl ChatTuiConfig {
    pub fn from_settings(settings: &Settings, provider_name: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
            model: settings.provider.model.clone(),
            title_max_chars: settings.chat.title_max_chars,
            untitled_label: settings.chat.untitled_label.clone(),
            show_response_time: settings.appearance.show_response_time,
            sidebar_width: settings.appearance.sidebar_width,
        }
    }
}

/// Run the chat TUI
///
/// This is the main entry point for the TUI-based chat interface. Returns
/// once the user quits.
pub async fn run_chat_tui(
    config: ChatTuiConfig,
    controller: ChatController,
    store: SessionStore,
) -> Result<()> {
    // Setup terminal with panic hook to restore terminal on crash
    let restore_panic_hook = install_terminal_panic_hook();

    enable_raw_mode().map_err(|e| ChatError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| ChatError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| ChatError::Tui(e.to_string()))?;

    let mut app = ChatApp::new(config, controller, store);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    restore_panic_hook();

    disable_raw_mode().map_err(|e| ChatError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| ChatError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| ChatError::Tui(e.to_string()))?;

    tracing::debug!(
        archived = app.store.archive().len(),
        "Chat TUI closed"
    );

    result
}

/// Chain a hook that leaves raw mode and the alternate screen before the
/// current panic hook runs. The returned closure puts the previous hook back.
fn install_terminal_panic_hook() -> impl FnOnce() {
    let original = Arc::new(std::panic::take_hook());
    let chained = Arc::clone(&original);
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        (*chained)(panic_info);
    }));

    move || {
        drop(std::panic::take_hook());
        std::panic::set_hook(Box::new(move |panic_info| (*original)(panic_info)));
    }
}

/// Draw one frame if anything changed since the last one.
fn render_if_dirty<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    let size = terminal
        .size()
        .map_err(|e| ChatError::Tui(e.to_string()))?;
    ui::update_viewport(app, Rect::new(0, 0, size.width, size.height));

    if app.take_dirty() {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| ChatError::Tui(e.to_string()))?;
    }
    Ok(())
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut ChatApp) -> Result<()> {
    loop {
        render_if_dirty(terminal, app)?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}
