// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! State management for the chat TUI

pub mod input;
pub mod scroll;
pub mod sidebar;

pub use input::InputState;
pub use scroll::ScrollState;
pub use sidebar::SidebarState;
