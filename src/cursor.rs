// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Cursor and selection

use crate::SegmentId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position within a document: a segment and a `char` offset within it
///
/// The offset is valid when it lies in `0..=segment.len()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub segment: SegmentId,
    pub offset: usize,
}

impl Position {
    /// Construct
    #[inline]
    pub const fn new(segment: SegmentId, offset: usize) -> Self {
        Position { segment, offset }
    }
}

/// A directed selection range
///
/// `start` is the selection anchor and `end` its focus, as reported by the
/// input adapter; `start` does not necessarily precede `end` in the
/// document. Use [`Document::ordered`](crate::Document::ordered) to obtain
/// left-to-right order.
///
/// The default cursor is collapsed at the start of segment `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor {
    pub start: Position,
    pub end: Position,
}

impl Cursor {
    /// Construct from segment-id/offset pairs
    #[inline]
    pub const fn new(
        start_segment: SegmentId,
        start_offset: usize,
        end_segment: SegmentId,
        end_offset: usize,
    ) -> Self {
        Cursor {
            start: Position::new(start_segment, start_offset),
            end: Position::new(end_segment, end_offset),
        }
    }

    /// Construct a collapsed cursor (caret) at `pos`
    #[inline]
    pub const fn collapsed(pos: Position) -> Self {
        Cursor {
            start: pos,
            end: pos,
        }
    }

    /// Construct a caret in `segment` at `offset`
    #[inline]
    pub const fn caret(segment: SegmentId, offset: usize) -> Self {
        Cursor::collapsed(Position::new(segment, offset))
    }

    /// True when start and end are the same position
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Swap anchor and focus
    #[inline]
    pub fn reversed(self) -> Self {
        Cursor {
            start: self.end,
            end: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed() {
        assert!(Cursor::default().is_collapsed());
        assert!(Cursor::caret(SegmentId(2), 4).is_collapsed());
        assert!(!Cursor::new(SegmentId(0), 1, SegmentId(0), 2).is_collapsed());
        // Same offset in different segments is a (possibly empty) range
        assert!(!Cursor::new(SegmentId(0), 1, SegmentId(1), 1).is_collapsed());
    }

    #[test]
    fn reversed() {
        let cursor = Cursor::new(SegmentId(1), 3, SegmentId(0), 0);
        let rev = cursor.reversed();
        assert_eq!(rev.start, Position::new(SegmentId(0), 0));
        assert_eq!(rev.end, Position::new(SegmentId(1), 3));
        assert_eq!(rev.reversed(), cursor);
    }
}
