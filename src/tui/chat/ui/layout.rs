// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use ratatui::prelude::*;

use super::super::app::{ChatApp, ChatMode};

/// Below this width the sidebar is only shown while it has focus
const NARROW_WIDTH: u16 = 60;

/// Layout regions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    pub(crate) sidebar: Rect,
    pub(crate) title_bar: Rect,
    pub(crate) chat: Rect,
    pub(crate) caption: Rect,
    pub(crate) input: Rect,
}

pub(crate) fn calculate_layout(area: Rect, app: &ChatApp) -> Layout {
    // Sidebar: configured width, at most half the screen
    // Title bar: 1 line
    // Input area: 3 lines + 1 hint line
    // Caption: 0-1 lines (after a send)
    // Chat: remaining space
    let sidebar_width = if area.width >= NARROW_WIDTH || app.mode == ChatMode::Sidebar {
        app.config.sidebar_width.min(area.width / 2)
    } else {
        0
    };
    let main_width = area.width.saturating_sub(sidebar_width);
    let main_x = area.x + sidebar_width;

    let title_height = 1u16.min(area.height);
    let input_height = 4u16.min(area.height.saturating_sub(title_height));
    let caption_height = if app.caption().is_some() {
        1u16.min(area.height.saturating_sub(title_height + input_height))
    } else {
        0
    };
    let chat_height = area
        .height
        .saturating_sub(title_height)
        .saturating_sub(input_height)
        .saturating_sub(caption_height);

    Layout {
        sidebar: Rect {
            x: area.x,
            y: area.y,
            width: sidebar_width,
            height: area.height,
        },
        title_bar: Rect {
            x: main_x,
            y: area.y,
            width: main_width,
            height: title_height,
        },
        chat: Rect {
            x: main_x,
            y: area.y + title_height,
            width: main_width,
            height: chat_height,
        },
        caption: Rect {
            x: main_x,
            y: area.y + title_height + chat_height,
            width: main_width,
            height: caption_height,
        },
        input: Rect {
            x: main_x,
            y: area.y + title_height + chat_height + caption_height,
            width: main_width,
            height: input_height,
        },
    }
}
