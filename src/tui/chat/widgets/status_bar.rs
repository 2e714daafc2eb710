// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Status bar widget for the chat TUI

use ratatui::prelude::*;

/// Text shown while a request is in flight
pub const BUSY_TEXT: &str = "Thinking...";

/// Truncate to `max_chars` characters, marking the cut with "...".
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

fn width_of(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}

/// Widget for rendering the title/status bar
pub struct StatusBar<'a> {
    title: &'a str,
    provider: &'a str,
    model: &'a str,
    archived: usize,
    status_message: Option<&'a str>,
    status_is_error: bool,
    is_busy: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(title: &'a str, provider: &'a str, model: &'a str) -> Self {
        Self {
            title,
            provider,
            model,
            archived: 0,
            status_message: None,
            status_is_error: false,
            is_busy: false,
        }
    }

    /// Number of archived conversations
    pub fn archived(mut self, count: usize) -> Self {
        self.archived = count;
        self
    }

    pub fn status(mut self, message: Option<&'a str>, is_error: bool) -> Self {
        self.status_message = message;
        self.status_is_error = is_error;
        self
    }

    pub fn busy(mut self, is_busy: bool) -> Self {
        self.is_busy = is_busy;
        self
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width == 0 {
            return;
        }

        // Clear the line with dark background
        let bg_style = Style::default().bg(Color::DarkGray);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let right_edge = area.x + area.width;
        let mut x = area.x + 1;

        // Title
        let title_style = Style::default().fg(Color::White).bold().bg(Color::DarkGray);
        buf.set_stringn(
            x,
            area.y,
            self.title,
            right_edge.saturating_sub(x) as usize,
            title_style,
        );
        x = x.saturating_add(width_of(self.title) + 1);
        if x >= right_edge {
            return;
        }

        // Separator
        buf.set_string(
            x,
            area.y,
            "─",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
        x = x.saturating_add(2);

        // Provider and model
        let info = format!("{} / {}", self.provider, self.model);
        if x < right_edge {
            buf.set_stringn(
                x,
                area.y,
                &info,
                right_edge.saturating_sub(x) as usize,
                Style::default().fg(Color::Cyan).bg(Color::DarkGray),
            );
        }
        x = x.saturating_add(width_of(&info) + 2);

        // Archive size
        if self.archived > 0 {
            let archived = format!("{} archived", self.archived);
            if x.saturating_add(width_of(&archived)) < right_edge {
                buf.set_string(
                    x,
                    area.y,
                    &archived,
                    Style::default().fg(Color::Gray).bg(Color::DarkGray),
                );
                x = x.saturating_add(width_of(&archived) + 2);
            }
        }

        // Right-aligned: busy indicator or status message
        if self.is_busy {
            let indicator = format!("● {}", BUSY_TEXT);
            let indicator_x = right_edge.saturating_sub(width_of(&indicator) + 1);
            if indicator_x > x {
                buf.set_string(
                    indicator_x,
                    area.y,
                    &indicator,
                    Style::default().fg(Color::Green).bg(Color::DarkGray),
                );
            }
        } else if let Some(status) = self.status_message {
            let status_style = if self.status_is_error {
                Style::default().fg(Color::Red).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow).bg(Color::DarkGray)
            };

            let status_truncated = truncate_string(status, 30);
            let status_x = right_edge.saturating_sub(width_of(&status_truncated) + 1);
            if status_x > x {
                buf.set_string(status_x, area.y, &status_truncated, status_style);
            }
        }
    }
}
