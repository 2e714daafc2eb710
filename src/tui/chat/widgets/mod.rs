// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! UI widgets for the chat TUI

pub mod input_area;
pub mod message;
pub mod sidebar;
pub mod status_bar;

pub use input_area::InputArea;
pub use message::TranscriptWidget;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
