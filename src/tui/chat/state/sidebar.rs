// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cursor over the archived-conversation list

/// Highlighted row in the sidebar.
///
/// The cursor is always a valid archive index (or `None` for an empty
/// archive) once [`SidebarState::clamp`] has been called with the current
/// archive length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    cursor: Option<usize>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the highlight up one row
    pub fn move_up(&mut self, len: usize) {
        self.clamp(len);
        if let Some(cursor) = self.cursor {
            self.cursor = Some(cursor.saturating_sub(1));
        }
    }

    /// Move the highlight down one row
    pub fn move_down(&mut self, len: usize) {
        self.clamp(len);
        if let Some(cursor) = self.cursor {
            self.cursor = Some((cursor + 1).min(len - 1));
        }
    }

    /// Highlight a specific row
    pub fn select(&mut self, index: usize, len: usize) {
        self.cursor = Some(index);
        self.clamp(len);
    }

    /// Keep the cursor inside `0..len`.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = match (self.cursor, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(cursor), len) => Some(cursor.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_archive_has_no_cursor() {
        let mut sidebar = SidebarState::new();
        sidebar.move_down(0);
        assert_eq!(sidebar.cursor(), None);
    }

    #[test]
    fn test_cursor_appears_on_first_row() {
        let mut sidebar = SidebarState::new();
        sidebar.clamp(3);
        assert_eq!(sidebar.cursor(), Some(0));
    }

    #[test]
    fn test_move_within_bounds() {
        let mut sidebar = SidebarState::new();
        sidebar.move_down(2);
        sidebar.move_down(2);
        sidebar.move_down(2);
        assert_eq!(sidebar.cursor(), Some(1));
        sidebar.move_up(2);
        sidebar.move_up(2);
        assert_eq!(sidebar.cursor(), Some(0));
    }

    #[test]
    fn test_clamp_after_delete_of_last_row() {
        let mut sidebar = SidebarState::new();
        sidebar.select(2, 3);
        sidebar.clamp(2);
        assert_eq!(sidebar.cursor(), Some(1));
        sidebar.clamp(0);
        assert_eq!(sidebar.cursor(), None);
    }
}
