// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The document model

use crate::{splice, Cursor, Position, Segment, SegmentId, SegmentKey};
use std::ops::Index;
use thiserror::Error;

/// Document lookup and construction errors
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// No segment has the given id
    ///
    /// Within the edit engine this indicates that the cursor and document
    /// are out of sync.
    #[error("no segment with id {0}")]
    NotFound(SegmentId),
    /// An offset lies beyond the end of its segment
    #[error("offset {offset} is beyond the end of segment {segment}")]
    OutOfBounds { segment: SegmentId, offset: usize },
    /// A document must contain at least one segment
    #[error("document has no segments")]
    Empty,
}

/// Direction of preference when locating a position on a segment boundary
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bias {
    /// Prefer the end of the earlier segment
    Backward,
    /// Prefer the start of the later segment
    Forward,
}

/// An ordered, non-empty sequence of [`Segment`]s
///
/// This is a wrapper over `Vec<Segment>` enforcing that
///
/// -   there is always at least one segment (possibly empty)
/// -   each segment's index and id equal its position in the sequence
///
/// Adjacent segments with equal kind and styles are permitted; they are not
/// merged automatically.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub(crate) seq: Vec<Segment>,
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    /// Construct with a single empty text segment
    pub fn new() -> Self {
        Document {
            seq: vec![Segment::text("")],
        }
    }

    /// Construct from a structurally edited sequence
    ///
    /// Re-indexes all segments. An empty input yields a document with one
    /// empty text segment.
    pub(crate) fn from_parts(mut seq: Vec<Segment>) -> Self {
        if seq.is_empty() {
            seq.push(Segment::text(""));
        }
        splice::reindex(&mut seq);
        Document { seq }
    }

    /// Number of segments (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Access segments as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Segment] {
        &self.seq
    }

    /// Iterate over segments in order
    #[inline]
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Segment> {
        self.seq.iter()
    }

    /// Get the segment at `index`, if any
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.seq.get(index)
    }

    /// The last segment
    #[inline]
    pub fn last(&self) -> &Segment {
        &self.seq[self.seq.len() - 1]
    }

    /// Find a segment by id
    pub fn segment_at(&self, id: SegmentId) -> Result<&Segment, DocumentError> {
        self.seq
            .get(id.0)
            .filter(|segment| segment.id == id)
            .ok_or(DocumentError::NotFound(id))
    }

    /// Find a segment by id, checking that `pos.offset` lies within it
    pub fn resolve(&self, pos: Position) -> Result<&Segment, DocumentError> {
        let segment = self.segment_at(pos.segment)?;
        if pos.offset > segment.len() {
            return Err(DocumentError::OutOfBounds {
                segment: pos.segment,
                offset: pos.offset,
            });
        }
        Ok(segment)
    }

    /// Find a segment by stable key
    pub fn find_key(&self, key: SegmentKey) -> Option<&Segment> {
        self.seq.iter().find(|segment| segment.key == key)
    }

    /// The cursor's endpoints in left-to-right order
    ///
    /// Endpoints are compared by segment index, then by offset.
    pub fn ordered(&self, cursor: &Cursor) -> Result<(Position, Position), DocumentError> {
        let start = self.resolve(cursor.start)?;
        let end = self.resolve(cursor.end)?;
        if (start.index, cursor.start.offset) <= (end.index, cursor.end.offset) {
            Ok((cursor.start, cursor.end))
        } else {
            Ok((cursor.end, cursor.start))
        }
    }

    /// Concatenated content of all segments
    pub fn text(&self) -> String {
        self.seq.iter().map(|segment| segment.content()).collect()
    }

    /// Total length in `char`s
    pub fn char_len(&self) -> usize {
        self.seq.iter().map(|segment| segment.len()).sum()
    }

    /// Convert a position to a `char` offset from the document start
    pub fn absolute(&self, pos: Position) -> Result<usize, DocumentError> {
        let segment = self.resolve(pos)?;
        let before: usize = self.seq[..segment.index].iter().map(|s| s.len()).sum();
        Ok(before + pos.offset)
    }

    /// Convert a `char` offset from the document start to a position
    ///
    /// Where `abs` falls on a boundary between segments, `bias` selects
    /// between the end of the earlier and the start of the later segment.
    /// Offsets past the end of the document are clamped.
    pub fn locate(&self, abs: usize, bias: Bias) -> Position {
        let mut start = 0;
        for segment in &self.seq {
            let end = start + segment.len();
            let inside = match bias {
                Bias::Backward => abs <= end,
                Bias::Forward => abs < end,
            };
            if inside {
                return Position::new(segment.id, abs - start);
            }
            start = end;
        }
        let last = self.last();
        Position::new(last.id, last.len())
    }
}

impl Index<usize> for Document {
    type Output = Segment;

    #[inline]
    fn index(&self, index: usize) -> &Segment {
        &self.seq[index]
    }
}

impl TryFrom<Vec<Segment>> for Document {
    type Error = DocumentError;

    /// Construct from a sequence of segments
    ///
    /// Segments are re-indexed; keys are left as given.
    fn try_from(seq: Vec<Segment>) -> Result<Self, Self::Error> {
        if seq.is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Document::from_parts(seq))
    }
}
