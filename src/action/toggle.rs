// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style toggling over a selection
//!
//! The selected range is isolated by splitting the segments at its
//! endpoints; only the parts within the range are restyled. Segments fully
//! inside the range keep their boundaries.

use super::desync;
use crate::env::{Environment, ToggleCursor};
use crate::splice::{self, Split};
use crate::{Bias, Cursor, Document, EditorState, Segment, Style, Styles};
use smallvec::SmallVec;

type Parts = SmallVec<[Segment; 4]>;

fn restyle(styles: Styles, style: Style, remove: bool) -> Styles {
    if remove {
        styles.without(style)
    } else {
        styles.with(style)
    }
}

/// Push present parts of `split`, restyling the body
fn push_split(parts: &mut Parts, split: Split, style: Style, remove: bool) {
    let Split { head, body, tail } = split;
    parts.extend(head);
    parts.extend(body.map(|body| {
        let styles = restyle(body.styles(), style, remove);
        body.with_styles(styles)
    }));
    parts.extend(tail);
}

pub(super) fn toggle_option(
    state: &EditorState,
    index: usize,
    env: &Environment,
) -> Option<EditorState> {
    let Some(option) = state.options.get(index) else {
        log::debug!("toggle_option: index {index} out of range");
        return None;
    };
    if option.disabled {
        log::debug!("toggle_option: {:?} is disabled", option.kind);
        return None;
    }
    let Some(style) = option.kind.style() else {
        log::debug!("toggle_option: {:?} has no style", option.kind);
        return None;
    };
    let remove = option.applied;

    let doc = &state.segments;
    let (first, last) = desync(doc.ordered(&state.cursor))?;
    let abs_start = desync(doc.absolute(first))?;
    let abs_end = desync(doc.absolute(last))?;
    if abs_start == abs_end {
        return None;
    }
    let (first_index, last_index) = (first.segment.0, last.segment.0);

    let mut next = state.clone();
    let keys = &mut next.keys;
    let mut parts = Parts::new();
    if first_index == last_index {
        let split = splice::split(&doc[first_index], first.offset..last.offset, keys);
        push_split(&mut parts, split, style, remove);
    } else {
        let head = &doc[first_index];
        let split = splice::split(head, first.offset..head.len(), keys);
        push_split(&mut parts, split, style, remove);
        for segment in &doc.as_slice()[first_index + 1..last_index] {
            parts.push(segment.with_styles(restyle(segment.styles(), style, remove)));
        }
        let split = splice::split(&doc[last_index], 0..last.offset, keys);
        push_split(&mut parts, split, style, remove);
    }

    let count = parts.len();
    let mut seq = splice::replace(doc.as_slice(), first_index..last_index + 1, parts);
    if remove && env.merge_on_remove {
        seq = splice::coalesce(seq, first_index.saturating_sub(1)..first_index + count + 1);
    }
    next.segments = Document::from_parts(seq);

    next.cursor = match env.toggle_cursor {
        ToggleCursor::Track => {
            let cursor = Cursor {
                start: next.segments.locate(abs_start, Bias::Forward),
                end: next.segments.locate(abs_end, Bias::Backward),
            };
            if state.cursor.start == first {
                cursor
            } else {
                cursor.reversed()
            }
        }
        ToggleCursor::Reset => Cursor::default(),
    };
    next.options[index].applied = !remove;
    Some(next)
}
