//! Shared crate-wide constants.

/// Default height of one interactive row, in engine pixels.
pub const ITEM_HEIGHT: f64 = 40.0;

/// Height of a divider row, in engine pixels.
///
/// Dividers always render at this fixed height regardless of the configured
/// row height. The windowing offset math deliberately ignores this and treats
/// every row as one row height tall; dividers are rare and the overscan
/// margin absorbs the small misalignment.
pub const DIVIDER_HEIGHT: f64 = 9.0;

/// Default number of extra rows materialized on each side of the visible
/// band. Masks render latency while scrolling.
pub const OVERSCAN: usize = 20;

/// Maximum pixel height of the panel's scrollable body.
pub const MAX_BODY_HEIGHT: f64 = 370.0;

/// Cap for the panel's computed minimum height.
pub const MAX_MIN_HEIGHT: f64 = 320.0;

/// Safety margin kept between a panel and the right viewport edge when
/// deciding whether the panel still fits to the right of its anchor.
pub const EDGE_MARGIN: f64 = 20.0;

/// Horizontal offset applied when a panel opens aligned to the anchor's
/// left edge.
pub const ANCHOR_NUDGE: f64 = 1.0;

/// Floor for the scrollable body when the viewport cannot accommodate the
/// panel's minimum height. The panel clips past this rather than vanishing.
pub const BODY_FLOOR_CONSTRAINED: f64 = 150.0;

/// Floor for the scrollable body of top-/bottom-fixed panels when vertical
/// space is not constrained.
pub const BODY_FLOOR: f64 = 200.0;

/// Rows scrolled per mouse-wheel tick in the terminal adapter.
pub const WHEEL_SCROLL_ROWS: f64 = 3.0;
