// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Sequence splicing, segment splitting and re-indexing
//!
//! These build new sequences rather than editing in place, so that a prior
//! [`EditorState`](crate::EditorState) is never affected by an edit.

use crate::state::KeyGen;
use crate::Segment;
use std::ops::Range;

/// Copy of `seq` with `items` inserted before index `at`
pub fn insert<T: Clone>(seq: &[T], at: usize, items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len());
    out.extend_from_slice(&seq[..at]);
    out.extend(items);
    out.extend_from_slice(&seq[at..]);
    out
}

/// Copy of `seq` without the `count` items starting at `at`
pub fn remove<T: Clone>(seq: &[T], at: usize, count: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len().saturating_sub(count));
    out.extend_from_slice(&seq[..at]);
    out.extend_from_slice(&seq[at + count..]);
    out
}

/// Copy of `seq` with `range` replaced by `items`
pub fn replace<T: Clone>(
    seq: &[T],
    range: Range<usize>,
    items: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let start = range.start;
    insert(&remove(seq, start, range.len()), start, items)
}

/// Assign each segment the index and id of its position
pub fn reindex(seq: &mut [Segment]) {
    for (index, segment) in seq.iter_mut().enumerate() {
        segment.set_index(index);
    }
}

/// Result of [`split`]
///
/// Parts which would be empty are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Split {
    /// Content before the range
    pub head: Option<Segment>,
    /// Content within the range
    pub body: Option<Segment>,
    /// Content after the range
    pub tail: Option<Segment>,
}

impl Split {
    /// Iterate over present parts in order
    pub fn into_parts(self) -> impl Iterator<Item = Segment> {
        [self.head, self.body, self.tail].into_iter().flatten()
    }
}

/// Split `segment` at the `char` offsets `range.start` and `range.end`
///
/// All parts inherit kind and styles. The first present part keeps the
/// segment's key; others receive fresh keys from `keys`.
///
/// Panics (in debug builds) if the range is not within the segment.
pub(crate) fn split(segment: &Segment, range: Range<usize>, keys: &mut KeyGen) -> Split {
    debug_assert!(range.start <= range.end && range.end <= segment.len());
    let Range { start, end } = range;
    let [head, body, tail] = [0..start, start..end, end..segment.len()]
        .map(|r| (!r.is_empty()).then(|| segment.with_content(segment.slice(r))));
    let mut split = Split { head, body, tail };

    let mut first = true;
    for part in [&mut split.head, &mut split.body, &mut split.tail]
        .into_iter()
        .flatten()
    {
        if !first {
            part.key = keys.next();
        }
        first = false;
    }
    split
}

/// Merge adjacent segments with equal kind and styles
///
/// Only pairs where both segments lie within `range` are merged; the merged
/// segment keeps the key of the earlier one. The result is not re-indexed.
pub fn coalesce(seq: Vec<Segment>, range: Range<usize>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(seq.len());
    for (index, segment) in seq.into_iter().enumerate() {
        let mergeable = index > range.start && index < range.end;
        match out.last_mut() {
            Some(last)
                if mergeable && last.kind == segment.kind && last.styles == segment.styles =>
            {
                last.append(&segment);
            }
            _ => out.push(segment),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SegmentKey, Styles};

    fn contents(seq: &[Segment]) -> Vec<&str> {
        seq.iter().map(|s| s.content()).collect()
    }

    #[test]
    fn insert_remove_replace() {
        let seq = [1, 2, 3, 4];
        assert_eq!(insert(&seq, 1, [8, 9]), [1, 8, 9, 2, 3, 4]);
        assert_eq!(insert(&seq, 4, [5]), [1, 2, 3, 4, 5]);
        assert_eq!(remove(&seq, 1, 2), [1, 4]);
        assert_eq!(remove(&seq, 3, 1), [1, 2, 3]);
        assert_eq!(replace(&seq, 1..3, [7]), [1, 7, 4]);
        assert_eq!(replace(&seq, 0..4, []), Vec::<i32>::new());
        // the source is left untouched
        assert_eq!(seq, [1, 2, 3, 4]);
    }

    #[test]
    fn reindex_assigns_positions() {
        let mut seq = vec![Segment::text("a"), Segment::text("b")];
        seq[1].set_index(7);
        reindex(&mut seq);
        assert_eq!(seq[0].id().0, 0);
        assert_eq!(seq[1].index(), 1);
        assert_eq!(seq[1].id().0, 1);
    }

    #[test]
    fn split_three_ways() {
        let mut seg = Segment::styled("hello", Styles::ITALIC);
        seg.key = SegmentKey(4);
        let mut keys = KeyGen::default();
        let split = split(&seg, 1..4, &mut keys);
        let head = split.head.as_ref().unwrap();
        let body = split.body.as_ref().unwrap();
        let tail = split.tail.as_ref().unwrap();
        assert_eq!((head.content(), head.len()), ("h", 1));
        assert_eq!((body.content(), body.len()), ("ell", 3));
        assert_eq!((tail.content(), tail.len()), ("o", 1));
        assert!([head, body, tail].iter().all(|s| s.styles() == Styles::ITALIC));
        assert_eq!(head.key(), SegmentKey(4));
        assert_eq!(body.key(), SegmentKey(0));
        assert_eq!(tail.key(), SegmentKey(1));
    }

    #[test]
    fn split_omits_empty_parts() {
        let mut seg = Segment::text("abc");
        seg.key = SegmentKey(9);
        let mut keys = KeyGen::default();

        let whole = split(&seg, 0..3, &mut keys);
        assert!(whole.head.is_none() && whole.tail.is_none());
        assert_eq!(whole.body.as_ref().map(|s| s.key()), Some(SegmentKey(9)));

        let prefix = split(&seg, 0..1, &mut keys);
        let parts = prefix.into_parts().collect::<Vec<_>>();
        assert_eq!(contents(&parts), ["a", "bc"]);
        assert_eq!(parts[0].key(), SegmentKey(9));

        let empty = split(&seg, 2..2, &mut keys);
        assert!(empty.body.is_none());
        assert_eq!(contents(&empty.into_parts().collect::<Vec<_>>()), ["ab", "c"]);
    }

    #[test]
    fn coalesce_within_range() {
        let seq = vec![
            Segment::text("a"),
            Segment::text("b"),
            Segment::styled("c", Styles::BOLD),
            Segment::text("d"),
            Segment::text("e"),
        ];
        assert_eq!(contents(&coalesce(seq.clone(), 0..5)), ["ab", "c", "de"]);
        assert_eq!(contents(&coalesce(seq.clone(), 2..5)), ["a", "b", "c", "de"]);
        assert_eq!(contents(&coalesce(seq, 0..1)), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn coalesce_keeps_first_key_and_length() {
        let mut seq = vec![Segment::text("ab"), Segment::text("cd")];
        seq[0].key = SegmentKey(3);
        seq[1].key = SegmentKey(8);
        let merged = coalesce(seq, 0..2);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].key(), SegmentKey(3));
        assert_eq!(merged[0].len(), 4);
    }
}
