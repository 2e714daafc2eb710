// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use ratatui::{prelude::*, widgets::Paragraph};

use super::super::app::{ChatApp, ChatMode};
use super::super::input::bindings_for_mode;
use super::super::widgets::input_area::render_input_with_hints;
use super::super::widgets::message::transcript_height;
use super::super::widgets::status_bar::BUSY_TEXT;
use super::super::widgets::{Sidebar, StatusBar, TranscriptWidget};

pub(super) fn render_sidebar(frame: &mut Frame, app: &ChatApp, area: Rect) {
    if area.width == 0 {
        return;
    }
    let titles = app.sidebar_titles();
    let sidebar = Sidebar::new(&titles)
        .cursor(app.sidebar.cursor())
        .selected(app.store.selected())
        .focused(app.mode == ChatMode::Sidebar);

    frame.render_widget(sidebar, area);
}

pub(super) fn render_title_bar(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let bar = StatusBar::new("deepchat", &app.config.provider_name, &app.config.model)
        .archived(app.store.archive().len())
        .status(app.status_message.as_deref(), app.status_is_error)
        .busy(app.is_busy());

    frame.render_widget(bar, area);
}

pub(super) fn render_chat_area(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let messages = &app.store.active().messages;
    let total_height = transcript_height(messages, area.width);
    let top_offset = app.scroll_state.top_offset(total_height);

    frame.render_widget(TranscriptWidget::new(messages).top_offset(top_offset), area);

    render_scroll_indicator(frame, area, top_offset, total_height);
}

/// Render a scroll indicator showing current position.
pub(super) fn render_scroll_indicator(
    frame: &mut Frame,
    area: Rect,
    top_offset: usize,
    total_height: usize,
) {
    let viewport = area.height as usize;
    // Only show indicator if there's content to scroll.
    if total_height <= viewport || area.height == 0 || area.width < 15 {
        return;
    }

    let indicator_text = if top_offset == 0 {
        "⬆ Top".to_string()
    } else if top_offset + viewport >= total_height {
        "⬇ Bottom".to_string()
    } else {
        format!("↕ {}/{}", top_offset + 1, total_height)
    };

    let indicator = Paragraph::new(indicator_text)
        .style(Style::default().fg(Color::DarkGray).bg(Color::Black))
        .alignment(Alignment::Right);

    // Position indicator in bottom-right corner.
    let indicator_area = Rect {
        x: area.x + area.width.saturating_sub(15),
        y: area.y + area.height.saturating_sub(1),
        width: 15,
        height: 1,
    };

    frame.render_widget(indicator, indicator_area);
}

pub(super) fn render_caption(frame: &mut Frame, app: &ChatApp, area: Rect) {
    if area.height == 0 {
        return;
    }
    if let Some(caption) = app.caption() {
        let line = Paragraph::new(format!("  {}", caption))
            .style(Style::default().fg(Color::DarkGray).italic());
        frame.render_widget(line, area);
    }
}

pub(super) fn render_input_area(frame: &mut Frame, app: &ChatApp, area: Rect) {
    let focused = app.mode == ChatMode::Input;
    let busy_title = app.is_busy().then_some(BUSY_TEXT);

    // Get hints for current mode.
    let bindings = bindings_for_mode(app.mode);
    let hints: Vec<(&str, &str)> = bindings
        .iter()
        .take(5)
        .map(|b| (b.keys, b.description))
        .collect();

    let buf = frame.buffer_mut();
    render_input_with_hints(&app.input, area, buf, focused, busy_title, &hints);
}
