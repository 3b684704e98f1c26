// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Styled segments

use crate::Styles;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;

/// Positional segment identifier
///
/// This always equals the segment's index within its document, thus it is
/// *not* stable across structural edits (see [`SegmentKey`] for that). It is
/// displayed as the stringified index, which is the form used by rendering
/// surfaces to tag rendered runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SegmentId(pub usize);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SegmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SegmentId)
    }
}

impl From<usize> for SegmentId {
    #[inline]
    fn from(index: usize) -> Self {
        SegmentId(index)
    }
}

/// Stable segment identity
///
/// Keys are allocated from a monotonic counter owned by
/// [`EditorState`](crate::EditorState) and survive re-indexing. When a
/// segment is split, the first resulting part keeps the key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SegmentKey(pub u64);

/// Content type of a segment
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentKind {
    /// A run of styled text
    #[default]
    Text,
}

/// A maximal run of content sharing one [`SegmentKind`] and one style set
///
/// Offsets into a segment count `char`s, not bytes. The cached length always
/// equals the number of `char`s in the content.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub(crate) index: usize,
    pub(crate) id: SegmentId,
    pub(crate) key: SegmentKey,
    pub(crate) kind: SegmentKind,
    pub(crate) styles: Styles,
    pub(crate) content: String,
    pub(crate) length: usize,
}

impl Segment {
    /// Construct
    ///
    /// Position and key are assigned when the segment is placed in a
    /// document.
    pub fn new(kind: SegmentKind, styles: Styles, content: impl Into<String>) -> Self {
        let content = content.into();
        let length = content.chars().count();
        Segment {
            index: 0,
            id: SegmentId(0),
            key: SegmentKey::default(),
            kind,
            styles,
            content,
            length,
        }
    }

    /// Construct an unstyled text segment
    #[inline]
    pub fn text(content: impl Into<String>) -> Self {
        Segment::new(SegmentKind::Text, Styles::empty(), content)
    }

    /// Construct a styled text segment
    #[inline]
    pub fn styled(content: impl Into<String>, styles: Styles) -> Self {
        Segment::new(SegmentKind::Text, styles, content)
    }

    /// Index within the document
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Positional identifier
    #[inline]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Stable identity
    #[inline]
    pub fn key(&self) -> SegmentKey {
        self.key
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    #[inline]
    pub fn styles(&self) -> Styles {
        self.styles
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of content in `char`s
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Content within a `char` range
    ///
    /// Panics if the range is out of bounds.
    pub fn slice(&self, range: Range<usize>) -> &str {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end);
        &self.content[start..end]
    }

    /// Convert a `char` offset to a byte index
    ///
    /// Offsets at or beyond the end map to the content length.
    pub(crate) fn byte_index(&self, offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(offset)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len())
    }

    /// Copy of kind, styles and key with new content
    pub(crate) fn with_content(&self, content: &str) -> Self {
        Segment {
            content: content.to_string(),
            length: content.chars().count(),
            ..self.clone()
        }
    }

    /// Copy with replaced styles
    pub(crate) fn with_styles(&self, styles: Styles) -> Self {
        Segment {
            styles,
            ..self.clone()
        }
    }

    /// Splice `text` in at `offset`
    pub(crate) fn insert_str(&mut self, offset: usize, text: &str) {
        let index = self.byte_index(offset);
        self.content.insert_str(index, text);
        self.length += text.chars().count();
    }

    /// Remove the `char` at `offset`, if any
    pub(crate) fn remove_char(&mut self, offset: usize) -> Option<char> {
        if offset >= self.length {
            return None;
        }
        let c = self.content.remove(self.byte_index(offset));
        self.length -= 1;
        Some(c)
    }

    /// Append another segment's content
    pub(crate) fn append(&mut self, other: &Segment) {
        self.content.push_str(&other.content);
        self.length += other.length;
    }

    #[inline]
    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
        self.id = SegmentId(index);
    }
}
