// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session store implementation
//!
//! Holds the active conversation and the archive of past conversations,
//! most-recently-archived first. The store is process-local and in-memory.
//!
//! Archive indices are only valid until the next [`SessionStore::delete_chat`]:
//! deleting index `i` shifts every later entry down by one.

use crate::llm::message::{Conversation, Message, Role};

/// Greeting used to seed every new conversation
pub const DEFAULT_GREETING: &str = "Hello! How can I help you today? 😊";

/// Active conversation plus archive
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Conversation currently displayed and appended to
    active: Conversation,
    /// Past conversations, most recent first
    archive: Vec<Conversation>,
    /// Archive entry the active conversation was loaded from
    selected: Option<usize>,
    /// Greeting seeded into fresh conversations
    greeting: String,
    /// Set by every mutation, cleared by the renderer
    dirty: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store with the default greeting
    pub fn new() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }

    /// Create a store whose conversations open with `greeting`
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            active: Conversation::seeded(greeting.clone()),
            archive: Vec::new(),
            selected: None,
            greeting,
            dirty: true,
        }
    }

    /// The active conversation
    pub fn active(&self) -> &Conversation {
        &self.active
    }

    /// Archived conversations, most recent first
    pub fn archive(&self) -> &[Conversation] {
        &self.archive
    }

    /// Index of the archive entry last selected, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Sidebar titles for the current archive listing
    pub fn titles(&self, max_chars: usize, placeholder: &str) -> Vec<String> {
        self.archive
            .iter()
            .map(|c| c.title(max_chars, placeholder))
            .collect()
    }

    /// Archive a copy of the active conversation (if it has any messages)
    /// and start over with a freshly seeded one.
    pub fn start_new_chat(&mut self) {
        if !self.active.is_empty() {
            self.archive.insert(0, self.active.clone());
        }
        self.active = Conversation::seeded(self.greeting.clone());
        self.selected = None;
        self.dirty = true;

        tracing::debug!(
            archived = self.archive.len(),
            conversation = %self.active.id,
            "Started new chat"
        );
    }

    /// Load a copy of archive entry `index` into the active slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a position in the current archive listing.
    pub fn select_chat(&mut self, index: usize) {
        assert!(
            index < self.archive.len(),
            "archive index {} out of range (len {})",
            index,
            self.archive.len()
        );
        self.active = self.archive[index].clone();
        self.selected = Some(index);
        self.dirty = true;
    }

    /// Remove archive entry `index`.
    ///
    /// The selection is cleared when it pointed at the removed entry and
    /// shifted down when it pointed past it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a position in the current archive listing.
    pub fn delete_chat(&mut self, index: usize) {
        assert!(
            index < self.archive.len(),
            "archive index {} out of range (len {})",
            index,
            self.archive.len()
        );
        let removed = self.archive.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        self.dirty = true;

        tracing::debug!(conversation = %removed.id, index, "Deleted chat");
    }

    /// Append a message to the active conversation
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.active.push(Message::new(role, content));
        self.dirty = true;
    }

    /// Return and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
