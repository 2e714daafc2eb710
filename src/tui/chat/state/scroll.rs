// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state management for the chat TUI

/// Scroll position of the transcript, measured from the bottom so that new
/// messages stay in view unless the user has scrolled up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Lines between the bottom of the viewport and the end of the transcript
    pub lines_from_bottom: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Width of the viewport in columns
    pub viewport_width: u16,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// Create a new scroll state pinned to the bottom
    pub fn new() -> Self {
        Self {
            lines_from_bottom: 0,
            viewport_height: 20,
            viewport_width: 80,
        }
    }

    /// Record the transcript area size (called before every draw)
    pub fn update_viewport(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    fn max_from_bottom(&self, total_height: usize) -> usize {
        total_height.saturating_sub(self.viewport_height as usize)
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self, lines: usize, total_height: usize) {
        self.lines_from_bottom =
            (self.lines_from_bottom + lines).min(self.max_from_bottom(total_height));
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self, lines: usize) {
        self.lines_from_bottom = self.lines_from_bottom.saturating_sub(lines);
    }

    /// Scroll up by one viewport
    pub fn page_up(&mut self, total_height: usize) {
        let page = (self.viewport_height as usize).saturating_sub(1).max(1);
        self.scroll_up(page, total_height);
    }

    /// Scroll down by one viewport
    pub fn page_down(&mut self) {
        let page = (self.viewport_height as usize).saturating_sub(1).max(1);
        self.scroll_down(page);
    }

    /// Follow the end of the transcript again
    pub fn scroll_to_bottom(&mut self) {
        self.lines_from_bottom = 0;
    }

    /// Whether the view follows the newest message
    pub fn is_at_bottom(&self) -> bool {
        self.lines_from_bottom == 0
    }

    /// First visible line for a transcript of `total_height` lines.
    pub fn top_offset(&self, total_height: usize) -> usize {
        let max = self.max_from_bottom(total_height);
        max - self.lines_from_bottom.min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(height: u16) -> ScrollState {
        let mut scroll = ScrollState::new();
        scroll.update_viewport(40, height);
        scroll
    }

    #[test]
    fn test_short_transcript_starts_at_top() {
        let scroll = state(10);
        assert_eq!(scroll.top_offset(4), 0);
        assert!(scroll.is_at_bottom());
    }

    #[test]
    fn test_long_transcript_pins_to_bottom() {
        let scroll = state(10);
        assert_eq!(scroll.top_offset(25), 15);
    }

    #[test]
    fn test_scroll_up_is_clamped() {
        let mut scroll = state(10);
        scroll.scroll_up(100, 25);
        assert_eq!(scroll.lines_from_bottom, 15);
        assert_eq!(scroll.top_offset(25), 0);
    }

    #[test]
    fn test_scroll_down_saturates() {
        let mut scroll = state(10);
        scroll.scroll_up(5, 25);
        scroll.scroll_down(8);
        assert!(scroll.is_at_bottom());
    }

    #[test]
    fn test_page_moves_by_viewport() {
        let mut scroll = state(10);
        scroll.page_up(100);
        assert_eq!(scroll.lines_from_bottom, 9);
        scroll.page_down();
        assert_eq!(scroll.lines_from_bottom, 0);
    }

    #[test]
    fn test_distance_from_end_kept_when_transcript_grows() {
        let mut scroll = state(10);
        scroll.scroll_up(5, 25);
        assert_eq!(scroll.top_offset(25), 10);
        // Distance from the end is kept as the transcript grows
        assert_eq!(scroll.top_offset(30), 15);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.top_offset(30), 20);
    }

    #[test]
    fn test_stale_offset_clamped_after_shrink() {
        let mut scroll = state(10);
        scroll.scroll_up(15, 25);
        assert_eq!(scroll.top_offset(12), 0);
    }
}
