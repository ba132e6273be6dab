//! Keyboard/mouse navigation over the full item list.
//!
//! The active row is driven by two competing inputs: arrow keys and mouse
//! hover. Once a navigation key has been pressed, hover highlighting is
//! suppressed until the mouse moves again, so the two cannot fight over the
//! highlight.

use crate::item::{Item, ItemKind, SelectionKey};

/// The five logical keys the panel recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
}

/// Active-row state for one open session. Reset on every open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active: Option<usize>,
    keyboard_driven: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently highlighted row, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn keyboard_driven(&self) -> bool {
        self.keyboard_driven
    }

    /// Force the highlight, e.g. for `has_active_by_default`. Does not mark
    /// the state keyboard-driven, so hover keeps working.
    pub fn set_active(&mut self, active: Option<usize>) {
        self.active = active;
    }

    /// Arrow-Down: move the highlight one row down, clamped at the end.
    /// Dividers are reachable; only commit filters them out.
    pub fn arrow_down(&mut self, total: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        let next = match self.active {
            Some(index) => (index + 1).min(total - 1),
            None => 0,
        };
        self.active = Some(next);
        self.keyboard_driven = true;
        self.active
    }

    /// Arrow-Up: move the highlight one row up, clamped at the start.
    pub fn arrow_up(&mut self, total: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        let next = match self.active {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.active = Some(next);
        self.keyboard_driven = true;
        self.active
    }

    /// Mouse-enter on a row. Ignored while the highlight is keyboard-driven.
    /// Returns whether the highlight moved.
    pub fn hover(&mut self, index: usize) -> bool {
        if self.keyboard_driven {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Any mouse movement re-enables hover highlighting.
    pub fn pointer_moved(&mut self) {
        self.keyboard_driven = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What committing the row at `active` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// An enabled action row: report its key.
    Action(SelectionKey),
    /// An enabled link row: the caller navigates; the panel just closes.
    Link { key: SelectionKey, href: String },
    /// Divider, disabled row, or no highlight: nothing happens.
    Nothing,
}

/// Resolve an Enter/click against a row. Disabled rows are reachable but
/// never commit.
pub fn commit(item: Option<&Item>) -> CommitOutcome {
    let Some(item) = item else {
        return CommitOutcome::Nothing;
    };
    if item.disabled {
        return CommitOutcome::Nothing;
    }
    match &item.kind {
        ItemKind::Action => CommitOutcome::Action(item.key.clone()),
        ItemKind::Link { href } => CommitOutcome::Link {
            key: item.key.clone(),
            href: href.clone(),
        },
        ItemKind::Divider => CommitOutcome::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn arrows_stay_in_bounds() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.arrow_up(3), Some(0));
        assert_eq!(nav.arrow_up(3), Some(0));
        assert_eq!(nav.arrow_down(3), Some(1));
        assert_eq!(nav.arrow_down(3), Some(2));
        assert_eq!(nav.arrow_down(3), Some(2));
    }

    #[test]
    fn arrows_on_empty_list_do_nothing() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.arrow_down(0), None);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn keyboard_suppresses_hover_until_pointer_moves() {
        let mut nav = NavigationState::new();
        assert!(nav.hover(2));
        assert_eq!(nav.active(), Some(2));
        nav.arrow_down(5);
        assert!(nav.keyboard_driven());
        assert!(!nav.hover(0));
        assert_eq!(nav.active(), Some(3));
        nav.pointer_moved();
        assert!(nav.hover(0));
        assert_eq!(nav.active(), Some(0));
    }

    #[test]
    fn dividers_are_reachable_but_never_commit() {
        let items = vec![
            Item::action("a", "A"),
            Item::divider(),
            Item::action("b", "B"),
        ];
        let mut nav = NavigationState::new();
        nav.arrow_down(items.len());
        nav.arrow_down(items.len());
        assert_eq!(nav.active(), Some(1));
        assert_eq!(commit(nav.active().and_then(|i| items.get(i))), CommitOutcome::Nothing);
    }

    #[test]
    fn disabled_rows_never_commit() {
        let items = vec![Item::action("a", "A").disabled()];
        assert_eq!(commit(items.first()), CommitOutcome::Nothing);
    }

    #[test]
    fn links_commit_with_href() {
        let items = vec![Item::link("docs", "Docs", "/docs")];
        assert_eq!(
            commit(items.first()),
            CommitOutcome::Link {
                key: "docs".into(),
                href: "/docs".into()
            }
        );
    }

    #[test]
    fn reset_clears_session_state() {
        let mut nav = NavigationState::new();
        nav.arrow_down(3);
        nav.reset();
        assert_eq!(nav.active(), None);
        assert!(!nav.keyboard_driven());
    }
}
