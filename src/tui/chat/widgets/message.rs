// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript rendering widget
//!
//! Messages are wrapped to the viewport width up front so the line count
//! used for scrolling is exactly what gets drawn.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::llm::message::{Message, Role};

/// Prefix of the assistant bubble written for a failed turn
const ERROR_PREFIX: &str = "⚠️ Error:";

/// Hard-wrap a single line to `width` characters.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() || width == 0 {
        return vec![String::new()];
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn role_style(message: &Message) -> (Style, Style, &'static str) {
    match message.role {
        Role::User => (
            Style::default().fg(Color::Cyan).bold(),
            Style::default().fg(Color::Cyan),
            "you",
        ),
        Role::Assistant if message.content.starts_with(ERROR_PREFIX) => (
            Style::default().fg(Color::Red).bold(),
            Style::default().fg(Color::Red),
            "assistant",
        ),
        Role::Assistant => (
            Style::default().fg(Color::White).bold(),
            Style::default().fg(Color::White),
            "assistant",
        ),
    }
}

/// Lines for one message: header, wrapped content, blank spacer.
pub fn message_lines(message: &Message, width: u16) -> Vec<Line<'static>> {
    let (header_style, content_style, label) = role_style(message);
    let content_width = width.saturating_sub(4) as usize;

    let mut lines = vec![Line::from(Span::styled(format!("  {}", label), header_style))];

    let content = if message.content.is_empty() {
        ""
    } else {
        message.content.as_str()
    };
    // `str::lines` drops a trailing empty line; an empty body still gets one row
    let mut source: Vec<&str> = content.lines().collect();
    if source.is_empty() {
        source.push("");
    }
    for line in source {
        for wrapped in wrap_line(line, content_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                content_style,
            )));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Every line of a transcript at the given width.
pub fn transcript_lines(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    messages
        .iter()
        .flat_map(|message| message_lines(message, width))
        .collect()
}

/// Number of lines the transcript occupies at the given width.
pub fn transcript_height(messages: &[Message], width: u16) -> usize {
    transcript_lines(messages, width).len()
}

/// Widget drawing the visible window of a transcript
pub struct TranscriptWidget<'a> {
    messages: &'a [Message],
    top_offset: usize,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(messages: &'a [Message]) -> Self {
        Self {
            messages,
            top_offset: 0,
        }
    }

    /// First line of the transcript to show
    pub fn top_offset(mut self, offset: usize) -> Self {
        self.top_offset = offset;
        self
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let visible: Vec<Line<'static>> = transcript_lines(self.messages, area.width)
            .into_iter()
            .skip(self.top_offset)
            .take(area.height as usize)
            .collect();
        Paragraph::new(visible).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_line("", 4), vec![""]);
        assert_eq!(wrap_line("héé", 2), vec!["hé", "é"]);
    }

    #[test]
    fn test_message_lines_layout() {
        let message = Message::user("hello\nworld");
        let lines = message_lines(&message, 40);
        // header + two content lines + spacer
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_message_lines_wraps_long_content() {
        let message = Message::assistant("a".repeat(25));
        // content width is 10 - 4 = 6 => 5 rows
        assert_eq!(message_lines(&message, 10).len(), 1 + 5 + 1);
    }

    #[test]
    fn test_empty_message_still_has_body_row() {
        let message = Message::assistant("");
        assert_eq!(message_lines(&message, 40).len(), 3);
    }

    #[test]
    fn test_transcript_height_sums_messages() {
        let messages = vec![Message::assistant("hi"), Message::user("yo")];
        assert_eq!(transcript_height(&messages, 40), 6);
    }

    #[test]
    fn test_render_transcript_labels() {
        let messages = vec![Message::assistant("Hello!"), Message::user("ping")];
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|f| f.render_widget(TranscriptWidget::new(&messages), f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("assistant"));
        assert!(text.contains("Hello!"));
        assert!(text.contains("you"));
        assert!(text.contains("ping"));
    }

    #[test]
    fn test_render_respects_top_offset() {
        let messages = vec![Message::assistant("first"), Message::user("second")];
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(TranscriptWidget::new(&messages).top_offset(3), f.area())
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_error_bubble_is_red() {
        let message = Message::assistant("⚠️ Error: 500 - boom");
        let lines = message_lines(&message, 40);
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Red));
    }
}
