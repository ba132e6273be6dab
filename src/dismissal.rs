//! Dismissal policy: what outside clicks, ancestor scrolls, and Escape do
//! to an open panel.

use crate::geometry::{PxPoint, PxRect};

/// Per-panel dismissal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissalConfig {
    /// Whether outside clicks close the panel. Turned off for compound
    /// widgets that manage their own dismissal.
    pub outside_click_closes: bool,
    /// When an ancestor scrolls: reposition instead of closing.
    pub reposition_on_scroll: bool,
    /// Close synchronously when a selection commits, before the caller sees
    /// the committed key.
    pub close_on_select: bool,
}

impl Default for DismissalConfig {
    fn default() -> Self {
        Self {
            outside_click_closes: true,
            reposition_on_scroll: false,
            close_on_select: false,
        }
    }
}

/// Verdict for one dismissal-relevant event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissDecision {
    Stay,
    Close,
    Reposition,
}

impl DismissalConfig {
    /// Pointer-down hit test against the panel's rectangle. A missing panel
    /// rect means geometry is not known yet; the event is ignored for that
    /// cycle rather than treated as outside.
    pub fn on_pointer_down(&self, point: PxPoint, panel: Option<PxRect>) -> DismissDecision {
        match panel {
            Some(rect) if rect.contains(point) => DismissDecision::Stay,
            Some(_) if self.outside_click_closes => DismissDecision::Close,
            _ => DismissDecision::Stay,
        }
    }

    pub fn on_ancestor_scroll(&self) -> DismissDecision {
        if self.reposition_on_scroll {
            DismissDecision::Reposition
        } else {
            DismissDecision::Close
        }
    }

    /// Escape closes regardless of any other flag.
    pub fn on_escape(&self) -> DismissDecision {
        DismissDecision::Close
    }
}
