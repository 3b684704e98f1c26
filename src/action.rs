// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The edit engine
//!
//! Each [`Action`] is a pure transition from one [`EditorState`] to the
//! next. Failures never surface to the caller: an action which cannot be
//! applied (e.g. because the cursor refers to a missing segment) is a no-op.

mod delete;
mod insert;
mod motion;
mod toggle;

use crate::{options, Cursor, DocumentError, EditorState, Environment};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A state-transition request
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Insert text at the cursor start, within the current segment
    ///
    /// Inserted text inherits the segment's styles. Empty text is ignored.
    InsertText(String),
    /// Remove the character before the cursor start
    DeleteBackward,
    /// Move the caret one character left
    MoveCursorLeft,
    /// Move the caret one character right
    MoveCursorRight,
    /// Replace the cursor verbatim
    ///
    /// Values are trusted and not validated against the document.
    UpdateSelection(Cursor),
    /// Recompute toolbar options from the selection
    RevealAvailableOptions,
    /// Apply or remove the style of the option at this index
    ToggleOption(usize),
}

impl Action {
    /// Apply to `state`
    ///
    /// Returns the new state or `None` if this action is a no-op.
    pub fn apply(&self, state: &EditorState, env: &Environment) -> Option<EditorState> {
        match self {
            Action::InsertText(text) => insert::insert_text(state, text),
            Action::DeleteBackward => delete::delete_backward(state),
            Action::MoveCursorLeft => motion::move_left(state),
            Action::MoveCursorRight => motion::move_right(state),
            Action::UpdateSelection(cursor) => update_selection(state, cursor),
            Action::RevealAvailableOptions => reveal_options(state, env),
            Action::ToggleOption(index) => toggle::toggle_option(state, *index, env),
        }
    }
}

/// Apply `action` to a shared state
///
/// If the action is a no-op, the result is `state` itself (pointer-equal).
pub fn reduce(state: &Arc<EditorState>, action: &Action, env: &Environment) -> Arc<EditorState> {
    match action.apply(state, env) {
        Some(next) => Arc::new(next),
        None => Arc::clone(state),
    }
}

/// Convert a lookup failure into a no-op
fn desync<T>(result: Result<T, DocumentError>) -> Option<T> {
    result
        .map_err(|err| log::warn!("cursor desync, ignoring action: {err}"))
        .ok()
}

fn update_selection(state: &EditorState, cursor: &Cursor) -> Option<EditorState> {
    if state.cursor == *cursor {
        return None;
    }
    Some(EditorState {
        cursor: *cursor,
        ..state.clone()
    })
}

fn reveal_options(state: &EditorState, env: &Environment) -> Option<EditorState> {
    let options = desync(options::reveal(&state.segments, &state.cursor, &env.disable))?;
    if options == state.options {
        return None;
    }
    Some(EditorState {
        options,
        ..state.clone()
    })
}
