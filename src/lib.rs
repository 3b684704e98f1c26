// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! KAS Rich-Edit library
//!
//! A document is an ordered sequence of styled text [`Segment`]s. Edits are
//! expressed as [`Action`]s, each a pure transition from one
//! [`EditorState`] to the next.
//!
//! ```
//! use kas_rich_edit::{Action, Cursor, Editor, EditorState, Segment, SegmentId, Styles};
//!
//! let state = EditorState::with_segments([Segment::text("hello")]).unwrap();
//! let mut editor = Editor::new(state);
//! editor.select(Cursor::new(SegmentId(0), 1, SegmentId(0), 4));
//! editor.apply(&Action::ToggleOption(0)); // Bold
//!
//! let segments = editor.state().segments();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].content(), "ell");
//! assert_eq!(segments[1].styles(), Styles::BOLD);
//! ```

#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod style;
pub use style::*;

mod segment;
pub use segment::*;

mod cursor;
pub use cursor::*;

mod document;
pub use document::*;

mod state;
pub use state::EditorState;

mod env;
pub use env::*;

pub mod splice;

pub mod options;
pub use options::{DisableRules, FormatOption, OptionFilter, Options, Selected};

pub mod action;
pub use action::Action;

mod editor;
pub use editor::*;
