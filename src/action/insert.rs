// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text insertion

use super::desync;
use crate::{Cursor, EditorState, Position};

pub(super) fn insert_text(state: &EditorState, text: &str) -> Option<EditorState> {
    if text.is_empty() {
        log::debug!("insert_text: ignoring empty text");
        return None;
    }

    let start = state.cursor.start;
    let index = desync(state.segments.resolve(start))?.index();

    let mut next = state.clone();
    next.segments.seq[index].insert_str(start.offset, text);
    let offset = start.offset + text.chars().count();
    next.cursor = Cursor::collapsed(Position::new(start.segment, offset));
    Some(next)
}
