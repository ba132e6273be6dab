//! Item model for panel lists.
//!
//! Items come in three shapes: plain actions, navigation links, and
//! non-interactive dividers. What happens when a row is committed is decided
//! exhaustively on [`ItemKind`] rather than by probing optional fields.

use std::fmt;

use crate::constants::DIVIDER_HEIGHT;

/// Key identifying an item for selection purposes.
///
/// Values are normalized to strings at the boundary, so a numeric key `1`
/// and a string key `"1"` refer to the same selection entry. Callers that
/// need distinct entries must supply distinct string forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SelectionKey(String);

impl SelectionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SelectionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SelectionKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for SelectionKey {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for SelectionKey {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// What committing a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Commit reports the item's key back to the caller.
    Action,
    /// Commit closes the panel; the caller navigates to `href`.
    Link { href: String },
    /// Non-interactive separator. Excluded from selection and from commit,
    /// rendered at [`DIVIDER_HEIGHT`].
    Divider,
}

/// One entry in a panel's item list. Supplied fresh on every open and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: SelectionKey,
    pub label: String,
    pub kind: ItemKind,
    pub disabled: bool,
}

impl Item {
    pub fn action(key: impl Into<SelectionKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ItemKind::Action,
            disabled: false,
        }
    }

    pub fn link(
        key: impl Into<SelectionKey>,
        label: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ItemKind::Link { href: href.into() },
            disabled: false,
        }
    }

    pub fn divider() -> Self {
        Self {
            key: SelectionKey::default(),
            label: String::new(),
            kind: ItemKind::Divider,
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub const fn is_divider(&self) -> bool {
        matches!(self.kind, ItemKind::Divider)
    }

    /// Rendered height of this row given the configured row height.
    pub fn height(&self, item_height: f64) -> f64 {
        if self.is_divider() {
            DIVIDER_HEIGHT
        } else {
            item_height
        }
    }
}

/// Total rendered height of an item list, in pixels.
pub fn content_height(items: &[Item], item_height: f64) -> f64 {
    items.iter().map(|item| item.height(item_height)).sum()
}
