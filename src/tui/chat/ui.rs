// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Main UI rendering for the chat TUI
//!
//! Drawing reads the app and never changes it; the run loop records the
//! transcript size with [`update_viewport`] before each draw.

use ratatui::prelude::*;

use super::app::{ChatApp, ChatMode};
use super::widgets::InputArea;

mod layout;
mod overlay;
mod view;

use layout::calculate_layout;
use overlay::render_help_overlay;
use view::{render_caption, render_chat_area, render_input_area, render_sidebar, render_title_bar};

/// Record the transcript area for `area` so scrolling uses the drawn size.
pub fn update_viewport(app: &mut ChatApp, area: Rect) {
    let layout = calculate_layout(area, app);
    app.scroll_state
        .update_viewport(layout.chat.width, layout.chat.height);
}

/// Main draw function for the chat TUI
pub fn draw(frame: &mut Frame, app: &ChatApp) {
    let area = frame.area();

    let layout = calculate_layout(area, app);

    render_sidebar(frame, app, layout.sidebar);
    render_title_bar(frame, app, layout.title_bar);
    render_chat_area(frame, app, layout.chat);
    render_caption(frame, app, layout.caption);
    render_input_area(frame, app, layout.input);

    if app.mode == ChatMode::Help {
        render_help_overlay(frame, area);
    }

    // Position cursor
    if app.mode == ChatMode::Input && !app.is_busy() && layout.input.height >= 3 {
        let input_box = Rect {
            height: layout.input.height - 1,
            ..layout.input
        };
        let cursor_pos = InputArea::new(&app.input).cursor_position(input_box);
        frame.set_cursor_position(cursor_pos);
    }
}
