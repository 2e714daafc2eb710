// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sidebar widget listing archived conversations

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use super::status_bar::truncate_string;

/// Widget for rendering the chat-history sidebar
pub struct Sidebar<'a> {
    titles: &'a [String],
    cursor: Option<usize>,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(titles: &'a [String]) -> Self {
        Self {
            titles,
            cursor: None,
            selected: None,
            focused: false,
        }
    }

    /// Highlighted row (only drawn while focused)
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Archive entry the active conversation was opened from
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First row to draw so the cursor stays visible
    fn first_visible(&self, rows: usize) -> usize {
        match self.cursor {
            Some(cursor) if rows > 0 && cursor >= rows => cursor + 1 - rows,
            _ => 0,
        }
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Chat History ")
            .title_style(Style::default().fg(Color::White));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        // New-chat hint row
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            "+ New Chat (Ctrl+N)",
            inner.width.saturating_sub(1) as usize,
            Style::default().fg(Color::Green).bold(),
        );

        let list_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height.saturating_sub(1),
        };
        if list_area.height == 0 {
            return;
        }

        if self.titles.is_empty() {
            buf.set_stringn(
                list_area.x + 1,
                list_area.y,
                "No previous chats",
                list_area.width.saturating_sub(1) as usize,
                Style::default().fg(Color::DarkGray).italic(),
            );
            return;
        }

        let rows = list_area.height as usize;
        let first = self.first_visible(rows);
        for (row, (index, title)) in self
            .titles
            .iter()
            .enumerate()
            .skip(first)
            .take(rows)
            .enumerate()
        {
            let y = list_area.y + row as u16;
            let highlighted = self.focused && self.cursor == Some(index);
            let base_style = if highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            if highlighted {
                for x in list_area.x..list_area.x + list_area.width {
                    buf.set_string(x, y, " ", base_style);
                }
            }

            let marker = if self.selected == Some(index) { "▶ " } else { "  " };
            let title_width = (list_area.width as usize).saturating_sub(3);
            let spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan).patch(base_style)),
                Span::styled(
                    truncate_string(title, title_width),
                    Style::default().fg(Color::White).patch(base_style),
                ),
            ];
            buf.set_line(list_area.x, y, &Line::from(spans), list_area.width);
        }
    }
}
