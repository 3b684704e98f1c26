// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Editor state

use crate::options::{FormatOption, Options};
use crate::{Cursor, Document, DocumentError, Segment, SegmentId, SegmentKey};

/// Allocator of stable segment keys
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KeyGen(u64);

impl KeyGen {
    #[inline]
    pub(crate) fn next(&mut self) -> SegmentKey {
        let key = SegmentKey(self.0);
        self.0 += 1;
        key
    }
}

/// A complete editor state snapshot
///
/// States are immutable once built: each [`Action`](crate::Action) reads
/// one state and yields a new one. A seed state is constructed at session
/// start via [`EditorState::new`] or [`EditorState::with_segments`].
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub(crate) segments: Document,
    pub(crate) cursor: Cursor,
    pub(crate) options: Options,
    pub(crate) keys: KeyGen,
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::new()
    }
}

impl EditorState {
    /// Construct with a single empty text segment and a caret at its start
    pub fn new() -> Self {
        let mut keys = KeyGen::default();
        let mut segments = Document::new();
        segments.seq[0].key = keys.next();
        EditorState {
            segments,
            cursor: Cursor::default(),
            options: Options::new(),
            keys,
        }
    }

    /// Construct from a seed sequence of segments
    ///
    /// Segments are indexed and given fresh keys; the cursor is a caret at
    /// the start of the first segment.
    pub fn with_segments<I>(segments: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut keys = KeyGen::default();
        let seq = segments
            .into_iter()
            .map(|segment| Segment {
                key: keys.next(),
                ..segment
            })
            .collect::<Vec<_>>();
        Ok(EditorState {
            segments: Document::try_from(seq)?,
            cursor: Cursor::default(),
            options: Options::new(),
            keys,
        })
    }

    /// Replace the seed cursor
    ///
    /// The cursor is not validated (see
    /// [`Action::UpdateSelection`](crate::Action::UpdateSelection)).
    #[inline]
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// The document
    #[inline]
    pub fn segments(&self) -> &Document {
        &self.segments
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Toolbar options, as last revealed
    #[inline]
    pub fn options(&self) -> &[FormatOption] {
        &self.options
    }

    /// Find a segment by id
    #[inline]
    pub fn segment_at(&self, id: SegmentId) -> Result<&Segment, DocumentError> {
        self.segments.segment_at(id)
    }

    /// The segment containing the cursor start
    #[inline]
    pub fn current_segment(&self) -> Result<&Segment, DocumentError> {
        self.segments.segment_at(self.cursor.start.segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Styles};

    #[test]
    fn seed_state() {
        let state = EditorState::new();
        assert_eq!(state.segments().len(), 1);
        assert!(state.segments()[0].is_empty());
        assert_eq!(state.cursor().start, Position::default());
        assert!(state.options().is_empty());
        assert_eq!(state.current_segment().unwrap().id(), SegmentId(0));
    }

    #[test]
    fn seeded_keys_are_distinct() {
        let state = EditorState::with_segments([
            Segment::text("a"),
            Segment::styled("b", Styles::BOLD),
            Segment::text("c"),
        ])
        .unwrap();
        let keys = state.segments().iter().map(|s| s.key()).collect::<Vec<_>>();
        assert_eq!(keys, [SegmentKey(0), SegmentKey(1), SegmentKey(2)]);
        let mut gen = state.keys.clone();
        assert_eq!(gen.next(), SegmentKey(3));
    }

    #[test]
    fn empty_seed_is_rejected() {
        assert_eq!(
            EditorState::with_segments(Vec::<Segment>::new()),
            Err(DocumentError::Empty)
        );
    }

    #[test]
    fn current_segment_desync() {
        let state = EditorState::new().with_cursor(Cursor::caret(SegmentId(5), 0));
        assert_eq!(
            state.current_segment(),
            Err(DocumentError::NotFound(SegmentId(5)))
        );
    }
}
