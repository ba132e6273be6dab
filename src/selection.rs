//! Selection model shared by single-select dropdowns and multi-selects.

use crate::item::SelectionKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Selecting any item replaces the whole selection.
    #[default]
    Single,
    /// Selecting toggles membership; reselecting removes.
    Multi,
}

/// Ordered set of selected keys. Order is selection order, which is what
/// Backspace pops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    mode: SelectionMode,
    keys: Vec<SelectionKey>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            keys: Vec::new(),
        }
    }

    /// Seed the selection with values the caller carried over from a
    /// previous open.
    pub fn with_selected(mode: SelectionMode, keys: impl IntoIterator<Item = SelectionKey>) -> Self {
        let mut selection = Self::new(mode);
        for key in keys {
            if !selection.contains(&key) {
                selection.keys.push(key);
            }
        }
        selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn keys(&self) -> &[SelectionKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &SelectionKey) -> bool {
        self.keys.contains(key)
    }

    /// Apply a commit. Single mode replaces; multi mode toggles.
    pub fn select(&mut self, key: SelectionKey) {
        match self.mode {
            SelectionMode::Single => {
                self.keys.clear();
                self.keys.push(key);
            }
            SelectionMode::Multi => {
                if let Some(position) = self.keys.iter().position(|existing| *existing == key) {
                    self.keys.remove(position);
                } else {
                    self.keys.push(key);
                }
            }
        }
    }

    /// Remove an explicitly named key (the per-chip remove affordance).
    pub fn remove(&mut self, key: &SelectionKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|existing| existing != key);
        self.keys.len() != before
    }

    /// Drop the most recently selected key (Backspace with empty search).
    pub fn pop_last(&mut self) -> Option<SelectionKey> {
        self.keys.pop()
    }
}
