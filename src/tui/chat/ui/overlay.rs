// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::ChatMode;
use super::super::input::bindings_for_mode;

fn section(title: &'static str, mode: ChatMode) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(title, Style::default().bold()))];
    for binding in bindings_for_mode(mode) {
        lines.push(Line::from(format!(
            "  {:<12}{}",
            binding.keys, binding.description
        )));
    }
    lines.push(Line::from(""));
    lines
}

pub(super) fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            " deepchat Help ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    lines.extend(section("Input:", ChatMode::Input));
    lines.extend(section("Chat History:", ChatMode::Sidebar));
    lines.extend([
        Line::from(Span::styled("Commands:", Style::default().bold())),
        Line::from("  /new        Start a new chat"),
        Line::from("  /help       Show this help"),
        Line::from("  /quit       Exit deepchat"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    lines
}

pub(super) fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let help = Paragraph::new(help_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(Style::default().fg(Color::White).bold()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, overlay_area);
}

/// Helper to create a centered rect with percentage-based sizing.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    let popup_x = (r.width - popup_width) / 2;
    let popup_y = (r.height - popup_height) / 2;

    Rect {
        x: r.x + popup_x,
        y: r.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
