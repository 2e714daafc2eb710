// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Session module for deepchat
//!
//! In-memory store for the active conversation and the archive sidebar.

pub mod store;

pub use store::{SessionStore, DEFAULT_GREETING};
