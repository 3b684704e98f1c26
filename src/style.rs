// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style and option vocabulary

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A formatting attribute attachable to a segment
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Style {
    Bold,
    Italic,
    LargeFont,
    SmallFont,
    /// Block quotation
    Quote,
}

impl Style {
    /// All styles, in vocabulary order
    pub const ALL: [Style; 5] = [
        Style::Bold,
        Style::Italic,
        Style::LargeFont,
        Style::SmallFont,
        Style::Quote,
    ];

    /// The flag representing this style within a [`Styles`] set
    #[inline]
    pub const fn flag(self) -> Styles {
        match self {
            Style::Bold => Styles::BOLD,
            Style::Italic => Styles::ITALIC,
            Style::LargeFont => Styles::LARGE_FONT,
            Style::SmallFont => Styles::SMALL_FONT,
            Style::Quote => Styles::QUOTE,
        }
    }

    /// Class name used by the rendering surface
    pub fn class_name(self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::LargeFont => "large-font",
            Style::SmallFont => "small-font",
            Style::Quote => "quote",
        }
    }

    /// The toolbar option exposing this style
    #[inline]
    pub fn option(self) -> OptionType {
        OptionType::from(self)
    }
}

bitflags! {
    /// A set of [`Style`]s
    ///
    /// A style may only be present once. Equality does not depend on the
    /// order in which styles were added; [`Styles::styles`] always iterates
    /// in vocabulary order, which keeps derived class names deterministic.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
    pub struct Styles: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const LARGE_FONT = 1 << 2;
        const SMALL_FONT = 1 << 3;
        const QUOTE = 1 << 4;
    }
}

impl Styles {
    /// True if `style` is in the set
    #[inline]
    pub fn has(self, style: Style) -> bool {
        self.contains(style.flag())
    }

    /// Copy of the set with `style` added
    #[inline]
    pub fn with(self, style: Style) -> Self {
        self | style.flag()
    }

    /// Copy of the set with `style` removed
    #[inline]
    pub fn without(self, style: Style) -> Self {
        self - style.flag()
    }

    /// Iterate over contained styles in vocabulary order
    pub fn styles(self) -> impl Iterator<Item = Style> {
        Style::ALL.into_iter().filter(move |style| self.has(*style))
    }

    /// Space-separated class names, e.g. `"bold italic"`
    ///
    /// The empty set yields an empty string.
    pub fn class_name(self) -> String {
        let mut name = String::new();
        for style in self.styles() {
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(style.class_name());
        }
        name
    }
}

impl From<Style> for Styles {
    #[inline]
    fn from(style: Style) -> Self {
        style.flag()
    }
}

impl FromIterator<Style> for Styles {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Styles::empty(), |styles, style| styles.with(style))
    }
}

/// Type of a toolbar-exposed formatting option
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OptionType {
    Bold,
    Italic,
    /// Hyperlink
    ///
    /// Links are not a segment style; this option has no backing [`Style`].
    Link,
    SmallFont,
    LargeFont,
    Quote,
}

impl OptionType {
    /// The full option vocabulary, in toolbar order
    pub const ALL: [OptionType; 6] = [
        OptionType::Bold,
        OptionType::Italic,
        OptionType::Link,
        OptionType::SmallFont,
        OptionType::LargeFont,
        OptionType::Quote,
    ];

    /// The style applied by this option, if any
    pub fn style(self) -> Option<Style> {
        match self {
            OptionType::Bold => Some(Style::Bold),
            OptionType::Italic => Some(Style::Italic),
            OptionType::Link => None,
            OptionType::SmallFont => Some(Style::SmallFont),
            OptionType::LargeFont => Some(Style::LargeFont),
            OptionType::Quote => Some(Style::Quote),
        }
    }
}

impl From<Style> for OptionType {
    fn from(style: Style) -> Self {
        match style {
            Style::Bold => OptionType::Bold,
            Style::Italic => OptionType::Italic,
            Style::LargeFont => OptionType::LargeFont,
            Style::SmallFont => OptionType::SmallFont,
            Style::Quote => OptionType::Quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_option_mapping() {
        for style in Style::ALL {
            assert_eq!(style.option().style(), Some(style));
        }
        assert_eq!(OptionType::Link.style(), None);
    }

    #[test]
    fn set_ignores_insertion_order() {
        let a: Styles = [Style::Quote, Style::Bold].into_iter().collect();
        let b: Styles = [Style::Bold, Style::Quote, Style::Bold].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.styles().collect::<Vec<_>>(), [Style::Bold, Style::Quote]);
    }

    #[test]
    fn with_and_without() {
        let styles = Styles::empty().with(Style::Italic).with(Style::Italic);
        assert_eq!(styles, Styles::ITALIC);
        assert!(styles.has(Style::Italic));
        assert_eq!(styles.without(Style::Italic), Styles::empty());
        assert_eq!(styles.without(Style::Bold), Styles::ITALIC);
    }

    #[test]
    fn class_names() {
        assert_eq!(Styles::empty().class_name(), "");
        let styles = Styles::QUOTE | Styles::LARGE_FONT | Styles::BOLD;
        assert_eq!(styles.class_name(), "bold large-font quote");
        assert_eq!(Styles::from(Style::SmallFont).class_name(), "small-font");
    }
}
