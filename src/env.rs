// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Editing environment

use crate::options::DisableRules;

/// Environment in which actions are applied
///
/// An `Environment` can be default-constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    /// Cursor placement after a style is toggled
    ///
    /// Defaults to [`ToggleCursor::Track`].
    pub toggle_cursor: ToggleCursor,
    /// Merge segments after removing a style
    ///
    /// If true, removing a style merges the restyled segments with adjacent
    /// segments (within and directly beside the selection) which end up with
    /// identical kind and styles. If false (the default), the style is
    /// stripped and segments are left as split.
    pub merge_on_remove: bool,
    /// Rules for disabling toolbar options
    ///
    /// Disabled options are reported as such by option discovery and are
    /// ignored when toggled.
    pub disable: DisableRules,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            toggle_cursor: ToggleCursor::default(),
            merge_on_remove: false,
            disable: DisableRules::default(),
        }
    }
}

impl Environment {
    /// Alternative default constructor
    pub fn new() -> Self {
        Self::default()
    }
}

/// Helper to modify an environment
///
/// Tracks whether revealed options must be recomputed.
#[derive(Debug)]
pub struct UpdateEnv<'a> {
    env: &'a mut Environment,
    refresh_options: bool,
}

impl<'a> UpdateEnv<'a> {
    pub(crate) fn new(env: &'a mut Environment) -> Self {
        UpdateEnv {
            env,
            refresh_options: false,
        }
    }

    /// Returns true if options must be revealed again
    pub(crate) fn finish(self) -> bool {
        self.refresh_options
    }

    /// Read access to the environment
    pub fn env(&self) -> &Environment {
        self.env
    }

    /// Set cursor placement after toggling a style
    pub fn set_toggle_cursor(&mut self, toggle_cursor: ToggleCursor) {
        self.env.toggle_cursor = toggle_cursor;
    }

    /// Enable or disable merging after style removal
    pub fn set_merge_on_remove(&mut self, merge: bool) {
        self.env.merge_on_remove = merge;
    }

    /// Set the rules for disabling options
    pub fn set_disable(&mut self, rules: DisableRules) {
        if rules != self.env.disable {
            self.env.disable = rules;
            self.refresh_options = true;
        }
    }
}

/// Cursor placement after a style is toggled
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleCursor {
    /// Select the restyled range
    ///
    /// The cursor's direction (anchor before or after focus) is preserved.
    #[default]
    Track,
    /// Collapse to the start of the document
    Reset,
}
