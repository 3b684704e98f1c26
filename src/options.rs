// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Option discovery
//!
//! Derives the toolbar's [`FormatOption`]s from the current selection: which
//! options are available, which are applied to the whole selection and
//! which are disabled.

use crate::{Cursor, Document, DocumentError, OptionType, Segment, SegmentKind, Style, Styles};
use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A toolbar-facing formatting option
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOption {
    pub kind: OptionType,
    /// True if the option's style is present on every selected segment
    pub applied: bool,
    pub disabled: bool,
}

/// The sequence of options presented by the toolbar
///
/// Inline capacity covers the whole option vocabulary.
pub type Options = SmallVec<[FormatOption; 6]>;

/// The segments touched by a selection
#[derive(Copy, Clone, Debug)]
pub struct Selected<'a> {
    segments: &'a [Segment],
    collapsed: bool,
}

impl<'a> Selected<'a> {
    /// Determine the segments touched by `cursor`
    ///
    /// This is the inclusive range from the segment containing the earlier
    /// endpoint to that containing the later endpoint.
    pub fn new(doc: &'a Document, cursor: &Cursor) -> Result<Self, DocumentError> {
        let (first, last) = doc.ordered(cursor)?;
        let segments = &doc.as_slice()[first.segment.0..=last.segment.0];
        let collapsed = first == last;
        Ok(Selected {
            segments,
            collapsed,
        })
    }

    #[inline]
    pub fn segments(&self) -> &'a [Segment] {
        self.segments
    }

    /// True if the selection is a caret
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// True if the selection touches more than one segment
    #[inline]
    pub fn is_spanning(&self) -> bool {
        self.segments.len() > 1
    }

    /// True if every touched segment is text
    pub fn is_text(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind() == SegmentKind::Text)
    }
}

/// Predicate marking options as disabled
///
/// This is implemented by [`DisableRules`] and by closures of the form
/// `Fn(OptionType, &Selected) -> bool`.
pub trait OptionFilter {
    /// True if option `kind` should be disabled for `selected`
    fn is_disabled(&self, kind: OptionType, selected: &Selected<'_>) -> bool;
}

impl<F: Fn(OptionType, &Selected<'_>) -> bool> OptionFilter for F {
    #[inline]
    fn is_disabled(&self, kind: OptionType, selected: &Selected<'_>) -> bool {
        self(kind, selected)
    }
}

bitflags! {
    /// Built-in rules for disabling options
    ///
    /// The default is `LINK_COLLAPSED | LINK_SPANNING`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
    pub struct DisableRules: u8 {
        /// Disable [`OptionType::Link`] on a collapsed selection
        const LINK_COLLAPSED = 1 << 0;
        /// Disable [`OptionType::Link`] when more than one segment is selected
        const LINK_SPANNING = 1 << 1;
        /// Disable style options on a collapsed selection
        const STYLE_COLLAPSED = 1 << 2;
    }
}

impl Default for DisableRules {
    fn default() -> Self {
        DisableRules::LINK_COLLAPSED | DisableRules::LINK_SPANNING
    }
}

impl OptionFilter for DisableRules {
    fn is_disabled(&self, kind: OptionType, selected: &Selected<'_>) -> bool {
        if kind == OptionType::Link {
            (self.contains(DisableRules::LINK_COLLAPSED) && selected.is_collapsed())
                || (self.contains(DisableRules::LINK_SPANNING) && selected.is_spanning())
        } else {
            self.contains(DisableRules::STYLE_COLLAPSED) && selected.is_collapsed()
        }
    }
}

/// Per-style occurrence counts over a sequence of segments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleCounts([usize; Style::ALL.len()]);

impl StyleCounts {
    /// Count styles over `segments`
    pub fn count(segments: &[Segment]) -> Self {
        let mut counts = StyleCounts::default();
        for segment in segments {
            for style in segment.styles().styles() {
                counts.0[style as usize] += 1;
            }
        }
        counts
    }

    /// Number of counted segments carrying `style`
    #[inline]
    pub fn get(&self, style: Style) -> usize {
        self.0[style as usize]
    }

    /// Styles occurring exactly `n` times
    ///
    /// With `n` equal to the number of counted segments, these are the
    /// styles common to all of them.
    pub fn with_count(&self, n: usize) -> Styles {
        Style::ALL
            .into_iter()
            .filter(|style| self.get(*style) == n)
            .collect()
    }
}

/// The options which may be offered for `selected`
///
/// Formatting is only possible over text, thus this is either the full
/// vocabulary or nothing.
pub fn candidates(selected: &Selected<'_>) -> &'static [OptionType] {
    if selected.is_text() {
        &OptionType::ALL
    } else {
        &[]
    }
}

/// Compute options for the selection `cursor` over `doc`
pub fn reveal(
    doc: &Document,
    cursor: &Cursor,
    filter: &impl OptionFilter,
) -> Result<Options, DocumentError> {
    let selected = Selected::new(doc, cursor)?;
    let common = StyleCounts::count(selected.segments()).with_count(selected.segments().len());

    Ok(candidates(&selected)
        .iter()
        .map(|&kind| FormatOption {
            kind,
            applied: kind.style().is_some_and(|style| common.has(style)),
            disabled: filter.is_disabled(kind, &selected),
        })
        .collect())
}
