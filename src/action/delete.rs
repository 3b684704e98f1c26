// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Backward deletion

use super::{desync, motion::settle_left};
use crate::{splice, Cursor, Document, EditorState, Position};

/// Remove one character before the cursor start, then move left
///
/// At the start of any but the first segment, the character removed is the
/// segment's own first character (after the boundary, not before it).
/// A non-first segment left empty is removed, as is one which was already
/// empty; the first segment is kept even when empty.
pub(super) fn delete_backward(state: &EditorState) -> Option<EditorState> {
    let start = state.cursor.start;
    let segment = desync(state.segments.resolve(start))?;
    let index = segment.index();
    if index == 0 && start.offset == 0 {
        return None;
    }

    let at = start.offset.saturating_sub(1);
    let mut edited = segment.clone();
    // nothing to remove only if the segment is empty, thus dropped below
    if edited.remove_char(at).is_none() && index == 0 {
        return None;
    }

    let mut next = state.clone();
    let pos = if edited.is_empty() && index > 0 {
        let seq = splice::remove(state.segments.as_slice(), index, 1);
        next.segments = Document::from_parts(seq);
        let prev = &next.segments[index - 1];
        Position::new(prev.id(), prev.len())
    } else {
        next.segments.seq[index] = edited;
        settle_left(&next.segments, index, at)
    };
    next.cursor = Cursor::collapsed(pos);
    Some(next)
}
