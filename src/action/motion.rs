// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Caret movement across segment boundaries
//!
//! A boundary between two segments may be addressed either as the end of
//! the earlier or as the start of the later segment. Moving left prefers
//! the former, moving right the latter.

use super::desync;
use crate::{Cursor, Document, EditorState, Position};

pub(super) fn move_left(state: &EditorState) -> Option<EditorState> {
    let start = state.cursor.start;
    let index = desync(state.segments.resolve(start))?.index();
    let pos = step_left(&state.segments, index, start.offset)?;
    Some(EditorState {
        cursor: Cursor::collapsed(pos),
        ..state.clone()
    })
}

pub(super) fn move_right(state: &EditorState) -> Option<EditorState> {
    let start = state.cursor.start;
    let index = desync(state.segments.resolve(start))?.index();
    let pos = step_right(&state.segments, index, start.offset)?;
    Some(EditorState {
        cursor: Cursor::collapsed(pos),
        ..state.clone()
    })
}

/// Position at `offset` in segment `index`, placed on the end of the
/// previous segment if at the start of any but the first segment
pub(super) fn settle_left(doc: &Document, index: usize, offset: usize) -> Position {
    if offset == 0 && index > 0 {
        let prev = &doc[index - 1];
        Position::new(prev.id(), prev.len())
    } else {
        Position::new(doc[index].id(), offset)
    }
}

/// Position at `offset` in segment `index`, placed on the start of the
/// next segment if at the end of any but the last segment
fn settle_right(doc: &Document, index: usize, offset: usize) -> Position {
    if offset == doc[index].len() && index + 1 < doc.len() {
        Position::new(doc[index + 1].id(), 0)
    } else {
        Position::new(doc[index].id(), offset)
    }
}

/// One character left of `(index, offset)`, or `None` at document start
fn step_left(doc: &Document, mut index: usize, mut offset: usize) -> Option<Position> {
    loop {
        if offset > 0 {
            return Some(settle_left(doc, index, offset - 1));
        }
        if index == 0 {
            return None;
        }
        index -= 1;
        offset = doc[index].len();
    }
}

/// One character right of `(index, offset)`, or `None` at document end
fn step_right(doc: &Document, mut index: usize, mut offset: usize) -> Option<Position> {
    loop {
        if offset < doc[index].len() {
            return Some(settle_right(doc, index, offset + 1));
        }
        if index + 1 == doc.len() {
            return None;
        }
        index += 1;
        offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Segment, SegmentId};

    fn state(parts: &[&str], segment: usize, offset: usize) -> EditorState {
        EditorState::with_segments(parts.iter().map(|s| Segment::text(*s)))
            .unwrap()
            .with_cursor(Cursor::caret(SegmentId(segment), offset))
    }

    fn caret(state: &EditorState) -> (usize, usize) {
        let cursor = state.cursor();
        assert!(cursor.is_collapsed());
        (cursor.start.segment.0, cursor.start.offset)
    }

    #[test]
    fn left_within_segment() {
        let next = move_left(&state(&["abc"], 0, 2)).unwrap();
        assert_eq!(caret(&next), (0, 1));
    }

    #[test]
    fn left_at_document_start() {
        assert_eq!(move_left(&state(&["abc", "d"], 0, 0)), None);
        assert_eq!(move_left(&state(&["", "d"], 0, 0)), None);
    }

    #[test]
    fn left_jumps_to_end_of_previous() {
        let next = move_left(&state(&["abc", "def"], 1, 1)).unwrap();
        assert_eq!(caret(&next), (0, 3));
    }

    #[test]
    fn left_from_start_of_later_segment() {
        // (1, 0) is the same place as (0, 3)
        let next = move_left(&state(&["abc", "def"], 1, 0)).unwrap();
        assert_eq!(caret(&next), (0, 2));
        // crossing a leading empty segment
        assert_eq!(move_left(&state(&["", "d"], 1, 0)), None);
        let next = move_left(&state(&["a", "b", "c"], 2, 0)).unwrap();
        assert_eq!(caret(&next), (0, 1));
    }

    #[test]
    fn left_collapses_selection() {
        let cursor = Cursor::new(SegmentId(0), 4, SegmentId(0), 1);
        let state = state(&["abcdef"], 0, 0).with_cursor(cursor);
        let next = move_left(&state).unwrap();
        assert_eq!(caret(&next), (0, 3));
    }

    #[test]
    fn right_within_segment() {
        let next = move_right(&state(&["abc"], 0, 1)).unwrap();
        assert_eq!(caret(&next), (0, 2));
        let next = move_right(&state(&["abc"], 0, 2)).unwrap();
        assert_eq!(caret(&next), (0, 3));
    }

    #[test]
    fn right_at_document_end() {
        assert_eq!(move_right(&state(&["abc"], 0, 3)), None);
        assert_eq!(move_right(&state(&["a", "bc"], 1, 2)), None);
        assert_eq!(move_right(&EditorState::new()), None);
    }

    #[test]
    fn right_jumps_to_start_of_next() {
        let next = move_right(&state(&["abc", "def"], 0, 2)).unwrap();
        assert_eq!(caret(&next), (1, 0));
    }

    #[test]
    fn right_from_end_of_earlier_segment() {
        // (0, 3) is the same place as (1, 0)
        let next = move_right(&state(&["abc", "def"], 0, 3)).unwrap();
        assert_eq!(caret(&next), (1, 1));
        let next = move_right(&state(&["", "de"], 0, 0)).unwrap();
        assert_eq!(caret(&next), (1, 1));
    }

    #[test]
    fn out_of_bounds_is_noop() {
        assert_eq!(move_left(&state(&["abc"], 0, 4)), None);
        assert_eq!(move_right(&state(&["abc"], 3, 0)), None);
    }
}
