// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input area widget for the chat TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::chat::state::InputState;

/// Placeholder shown in an empty input box
pub const INPUT_PLACEHOLDER: &str = "Type your message here...";

/// Width of the "> " prompt
const PROMPT_WIDTH: u16 = 2;

/// Widget for rendering the input area
pub struct InputArea<'a> {
    input: &'a InputState,
    focused: bool,
    placeholder: Option<&'a str>,
    busy_title: Option<&'a str>,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: true,
            placeholder: None,
            busy_title: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Mark the box as waiting on a reply, with a border title
    pub fn busy(mut self, title: Option<&'a str>) -> Self {
        self.busy_title = title;
        self
    }

    fn text_width(area: Rect) -> usize {
        area.width.saturating_sub(2 + PROMPT_WIDTH) as usize
    }

    /// Calculate cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let (_, column) = self.input.visible_window(Self::text_width(area));
        // Account for border (1) and prompt "> " (2)
        let x = area.x + 1 + PROMPT_WIDTH + column as u16;
        let y = area.y + 1;
        (
            x.min((area.x + area.width).saturating_sub(1)),
            y.min((area.y + area.height).saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.busy_title.is_some() {
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow).bold(),
            )
        } else if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if let Some(title) = self.busy_title {
            block = block.title(format!(" {} ", title)).title_style(title_style);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // Render prompt
        buf.set_string(
            inner.x,
            inner.y,
            "> ",
            Style::default().fg(Color::Cyan).bold(),
        );

        let text_x = inner.x + PROMPT_WIDTH;
        let text_width = Self::text_width(area);

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_stringn(
                    text_x,
                    inner.y,
                    placeholder,
                    text_width,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let (visible, _) = self.input.visible_window(text_width);
            buf.set_stringn(
                text_x,
                inner.y,
                &visible,
                text_width,
                Style::default().fg(Color::White),
            );
        }

        // Render cursor if focused
        if self.focused && self.busy_title.is_none() {
            let (cursor_x, cursor_y) = self.cursor_position(area);
            if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

/// Render input area with a help hint line below
pub fn render_input_with_hints(
    input: &InputState,
    area: Rect,
    buf: &mut Buffer,
    focused: bool,
    busy_title: Option<&str>,
    hints: &[(&str, &str)], // (key, description) pairs
) {
    if area.height < 2 {
        return;
    }

    // Split area: input area (main) + hints line (1 line)
    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };

    let hints_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    InputArea::new(input)
        .focused(focused)
        .placeholder(INPUT_PLACEHOLDER)
        .busy(busy_title)
        .render(input_area, buf);

    // Render hints
    let mut x = hints_area.x + 1;
    for (key, desc) in hints {
        let key_width = key.chars().count() as u16;
        let desc_width = desc.chars().count() as u16;
        if x + key_width + desc_width + 4 > hints_area.x + hints_area.width {
            break;
        }

        buf.set_string(x, hints_area.y, key, Style::default().fg(Color::Yellow));
        x += key_width;
        buf.set_string(x, hints_area.y, " ", Style::default());
        x += 1;
        buf.set_string(x, hints_area.y, desc, Style::default().fg(Color::DarkGray));
        x += desc_width;
        buf.set_string(x, hints_area.y, " │ ", Style::default().fg(Color::DarkGray));
        x += 3;
    }
}
