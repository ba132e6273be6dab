//! Viewport-aware panel placement.
//!
//! `compute_placement` is a pure function of the anchor rectangle, the
//! panel's measured size, the viewport, and the placement flags. The caller
//! (the panel host) applies the result; nothing here touches the screen.

use crate::constants::{
    ANCHOR_NUDGE, BODY_FLOOR, BODY_FLOOR_CONSTRAINED, EDGE_MARGIN, MAX_MIN_HEIGHT,
};
use crate::geometry::{PxRect, PxSize, Viewport};

/// Per-panel placement behavior toggles. All default to off (auto placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementFlags {
    /// Center the panel horizontally over the anchor.
    pub is_centered: bool,
    /// Force the panel to open upward from the anchor's top edge.
    pub is_top_fixed: bool,
    /// Force the panel to open downward from the anchor's bottom edge.
    pub is_bottom_fixed: bool,
    /// Force the panel's width to match the anchor's width.
    pub is_width_fixed: bool,
}

/// Output of the positioner: where the panel goes and how tall its
/// scrollable body may be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Viewport-relative y of the panel's top-left corner.
    pub top: f64,
    /// Viewport-relative x of the panel's top-left corner.
    pub left: f64,
    /// Minimum panel height derived from content, capped at 320.
    pub min_height: f64,
    /// Pixel height granted to the scrollable body after shrink-to-fit.
    pub body_height: f64,
    /// Set when the panel must match the anchor's width.
    pub fixed_width: Option<f64>,
}

/// Compute where a panel of `panel` size opens relative to `anchor`.
///
/// `content_height` is the total rendered height of the item list; it feeds
/// the minimum-height calculation. The returned coordinates keep the panel's
/// box fully inside the viewport whenever the viewport is at least as large
/// as the panel; when it is not, the panel clips instead of failing.
pub fn compute_placement(
    anchor: PxRect,
    panel: PxSize,
    content_height: f64,
    viewport: Viewport,
    flags: PlacementFlags,
) -> PlacementResult {
    let min_height = content_height.min(MAX_MIN_HEIGHT);

    let left = if flags.is_centered {
        anchor.x - (panel.width / 2.0 - anchor.width / 2.0)
    } else if viewport.width - EDGE_MARGIN - anchor.x >= panel.width {
        anchor.x + ANCHOR_NUDGE
    } else {
        // Not enough room to the right; flip so the panel's right edge lines
        // up with the anchor's right edge.
        anchor.x - (panel.width - anchor.width)
    };

    let space_below = viewport.height - (anchor.height + anchor.y);
    let (top, body_height) = if flags.is_bottom_fixed {
        (
            anchor.y + anchor.height,
            shrink_body(space_below, min_height),
        )
    } else if flags.is_top_fixed {
        (anchor.y - panel.height, shrink_body(anchor.y, min_height))
    } else if space_below > panel.height {
        (anchor.y + anchor.height, min_height)
    } else {
        (anchor.y - panel.height, min_height)
    };

    let fixed_width = flags.is_width_fixed.then_some(anchor.width);

    PlacementResult {
        top: clamp_axis(top, panel.height, viewport.height),
        left: clamp_axis(left, panel.width, viewport.width),
        min_height,
        body_height,
        fixed_width,
    }
}

/// Shrink-to-fit rule for fixed placements: when the reserved space cannot
/// hold the panel's minimum height the body shrinks to the reserved space
/// (never below 150); otherwise fixed placements keep a 200px body floor.
fn shrink_body(reserved: f64, min_height: f64) -> f64 {
    if reserved < min_height {
        reserved.max(BODY_FLOOR_CONSTRAINED)
    } else {
        min_height.max(BODY_FLOOR)
    }
}

/// Clamp a panel edge into `[0, total - extent]` when the panel fits along
/// the axis; leave it alone (clipped) when it does not.
fn clamp_axis(position: f64, extent: f64, total: f64) -> f64 {
    if extent <= total {
        position.clamp(0.0, total - extent)
    } else {
        position
    }
}
