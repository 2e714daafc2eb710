// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! deepchat - a terminal chat client for OpenAI-compatible completion APIs.
//!
//! This crate exposes the runtime used by the `deepchat` CLI (`src/main.rs`).
//!
//! Architecture highlights:
//! - `llm`: message model, provider trait, DeepSeek client and a mock
//! - `session`: active conversation plus the archive of past ones
//! - `chat`: the controller that runs one send against a provider
//! - `config`, `cli`: settings file and command-line surface
//! - `tui`: the interactive sidebar/transcript/input front end

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod session;
pub mod tui;

pub use error::{ApiError, ChatError, Result};
