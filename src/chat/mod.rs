// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat module
//!
//! The controller that turns a submitted message into a provider round trip,
//! independent of the presentation layer (TUI or one-shot `ask`).

pub mod controller;

pub use controller::{failure_message, ChatController, TurnOutcome, TurnReport, TurnState};
