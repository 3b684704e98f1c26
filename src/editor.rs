// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Editing session

use crate::action::{self, Action};
use crate::{Cursor, EditorState, Environment, SegmentId, UpdateEnv};
use std::fmt;
use std::sync::Arc;

/// Callback invoked with each new state
pub type Subscriber = Box<dyn FnMut(&EditorState)>;

/// Handle returned by [`Editor::subscribe`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A run of text to be rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    /// Positional id of the segment
    pub id: SegmentId,
    /// Segment content
    pub text: &'a str,
    /// Space-separated style class names
    pub class_name: String,
}

/// An editing session
///
/// Holds the current [`EditorState`] and [`Environment`], applies actions
/// and notifies subscribers of each state change.
pub struct Editor {
    env: Environment,
    state: Arc<EditorState>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new(EditorState::new())
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("env", &self.env)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Editor {
    /// Construct with the default environment
    pub fn new(state: EditorState) -> Self {
        Editor::with_env(state, Environment::default())
    }

    /// Construct with a given environment
    pub fn with_env(state: EditorState, env: Environment) -> Self {
        Editor {
            env,
            state: Arc::new(state),
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// The current state
    #[inline]
    pub fn state(&self) -> &Arc<EditorState> {
        &self.state
    }

    /// Read the environment
    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Apply an action
    ///
    /// Returns true when the state changed, in which case all subscribers
    /// have been notified.
    pub fn apply(&mut self, action: &Action) -> bool {
        let next = action::reduce(&self.state, action, &self.env);
        let changed = !Arc::ptr_eq(&next, &self.state);
        log::trace!("apply: {action:?}, changed: {changed}");
        if changed {
            self.state = next;
            for (_, subscriber) in self.subscribers.iter_mut() {
                subscriber(&self.state);
            }
        }
        changed
    }

    /// Set the selection, revealing options over a non-empty selection
    ///
    /// A selection is empty when both endpoints address the same place, e.g.
    /// the end of one segment and the start of the next. A cursor which does
    /// not match the document is treated as empty.
    ///
    /// Returns true when the toolbar should be shown.
    pub fn select(&mut self, cursor: Cursor) -> bool {
        self.apply(&Action::UpdateSelection(cursor));
        let doc = self.state.segments();
        let empty = match (doc.absolute(cursor.start), doc.absolute(cursor.end)) {
            (Ok(start), Ok(end)) => start == end,
            _ => true,
        };
        if empty {
            return false;
        }
        self.apply(&Action::RevealAvailableOptions);
        true
    }

    /// Register a callback invoked with each new state
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&EditorState) + 'static,
    {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback
    ///
    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let len = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != len
    }

    /// Update the environment
    ///
    /// Options already revealed are recomputed if the change affects them.
    /// Returns true when the state changed.
    pub fn update_env<F: FnOnce(&mut UpdateEnv)>(&mut self, f: F) -> bool {
        let mut update = UpdateEnv::new(&mut self.env);
        f(&mut update);
        if update.finish() && !self.state.options().is_empty() {
            return self.apply(&Action::RevealAvailableOptions);
        }
        false
    }

    /// Iterate over runs to render
    pub fn runs(&self) -> impl Iterator<Item = Run<'_>> {
        self.state.segments().iter().map(|segment| Run {
            id: segment.id(),
            text: segment.content(),
            class_name: segment.styles().class_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisableRules, OptionType, Segment, Styles};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn editor(parts: &[&str]) -> Editor {
        Editor::new(EditorState::with_segments(parts.iter().map(|s| Segment::text(*s))).unwrap())
    }

    #[test]
    fn notifies_only_on_change() {
        let mut editor = editor(&["ab"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = editor.subscribe(move |state| sink.borrow_mut().push(state.cursor().start.offset));

        assert!(!editor.apply(&Action::MoveCursorLeft));
        assert!(editor.apply(&Action::MoveCursorRight));
        assert!(editor.apply(&Action::InsertText("x".into())));
        assert_eq!(*seen.borrow(), [1, 2]);

        assert!(editor.unsubscribe(id));
        assert!(!editor.unsubscribe(id));
        assert!(editor.apply(&Action::DeleteBackward));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(editor.state().segments().text(), "ab");
    }

    #[test]
    fn select_reveals_options() {
        let mut editor = editor(&["hello"]);
        assert!(!editor.select(Cursor::caret(SegmentId(0), 2)));
        assert!(editor.state().options().is_empty());

        assert!(editor.select(Cursor::new(SegmentId(0), 1, SegmentId(0), 4)));
        let options = editor.state().options();
        assert_eq!(options.len(), OptionType::ALL.len());
        assert!(options.iter().all(|o| !o.applied));
    }

    #[test]
    fn select_across_boundary_is_empty() {
        let mut editor = editor(&["ab", "cd"]);
        assert!(!editor.select(Cursor::new(SegmentId(0), 2, SegmentId(1), 0)));
        assert!(!editor.select(Cursor::new(SegmentId(1), 0, SegmentId(0), 2)));
        assert!(editor.state().options().is_empty());
        assert_eq!(
            *editor.state().cursor(),
            Cursor::new(SegmentId(1), 0, SegmentId(0), 2)
        );

        // stale cursor
        assert!(!editor.select(Cursor::new(SegmentId(0), 0, SegmentId(4), 1)));
        assert!(editor.state().options().is_empty());

        assert!(editor.select(Cursor::new(SegmentId(0), 2, SegmentId(1), 1)));
        assert_eq!(editor.state().options().len(), OptionType::ALL.len());
    }

    #[test]
    fn runs_carry_class_names() {
        let mut editor = editor(&["hello"]);
        editor.select(Cursor::new(SegmentId(0), 1, SegmentId(0), 4));
        assert!(editor.apply(&Action::ToggleOption(0)));
        let runs: Vec<_> = editor.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].id, SegmentId(1));
        assert_eq!(runs[1].text, "ell");
        assert_eq!(runs[1].class_name, "bold");
        assert_eq!(runs[0].class_name, "");
        assert_eq!(editor.state().segments()[1].styles(), Styles::BOLD);
    }

    #[test]
    fn env_change_refreshes_options() {
        let mut editor = editor(&["ab", "cd"]);
        // nothing revealed yet
        assert!(!editor.update_env(|env| env.set_disable(DisableRules::STYLE_COLLAPSED)));
        assert!(!editor.update_env(|env| env.set_disable(DisableRules::default())));

        assert!(editor.select(Cursor::new(SegmentId(0), 1, SegmentId(1), 1)));
        let link = |editor: &Editor| {
            editor
                .state()
                .options()
                .iter()
                .find(|o| o.kind == OptionType::Link)
                .map(|o| o.disabled)
        };
        assert_eq!(link(&editor), Some(true));

        assert!(editor.update_env(|env| env.set_disable(DisableRules::LINK_COLLAPSED)));
        assert_eq!(link(&editor), Some(false));
        assert!(!editor.update_env(|env| env.set_merge_on_remove(true)));
        assert!(editor.env().merge_on_remove);
    }
}
