//! Windowed (virtualized) rendering of large item lists.
//!
//! Only the rows intersecting the visible band, plus an overscan margin on
//! each side, are materialized. A spacer of the full list height keeps the
//! scrollbar behaving as if every row were rendered.

use std::ops::Range;

use crate::constants::{ITEM_HEIGHT, MAX_BODY_HEIGHT, OVERSCAN};

/// Fixed-row-height windowing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowingConfig {
    /// Height of one row in pixels.
    pub item_height: f64,
    /// Extra rows materialized on each side of the visible band.
    pub overscan: usize,
    /// Maximum pixel height of the scrollable body.
    pub max_body: f64,
}

impl Default for WindowingConfig {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            overscan: OVERSCAN,
            max_body: MAX_BODY_HEIGHT,
        }
    }
}

/// The materialized slice for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowState {
    /// First materialized row.
    pub start_index: usize,
    /// Number of materialized rows; `start_index + rendered_count` never
    /// exceeds the total item count.
    pub rendered_count: usize,
    /// Scroll offset of the windowed container, owned by the container and
    /// fed back in on every scroll tick.
    pub scroll_top: f64,
}

impl WindowState {
    /// Materialized row indices.
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.start_index + self.rendered_count
    }

    /// Vertical translation of the materialized block, aligning it with
    /// where the rows would sit in a fully rendered list.
    pub fn block_offset(&self, config: &WindowingConfig) -> f64 {
        self.start_index as f64 * config.item_height
    }
}

impl WindowingConfig {
    /// Pixel height of the scrollable viewport for `total` rows.
    pub fn visible_space(&self, total: usize) -> f64 {
        (self.item_height * total as f64).min(self.max_body)
    }

    /// Number of whole rows that fit in the visible band.
    fn visible_rows(&self, total: usize) -> usize {
        (self.visible_space(total) / self.item_height).floor() as usize
    }

    /// Height of the spacer standing in for the full list.
    pub fn spacer_height(&self, total: usize) -> f64 {
        total as f64 * self.item_height
    }

    /// Largest meaningful scroll offset for `total` rows.
    pub fn max_scroll_top(&self, total: usize) -> f64 {
        (self.spacer_height(total) - self.visible_space(total)).max(0.0)
    }

    /// Compute the materialized slice for a scroll position.
    ///
    /// Every row intersecting `[scroll_top, scroll_top + visible_space)` is
    /// guaranteed to be inside the returned range; the overscan margin adds
    /// more on both sides. Safe to call redundantly, once per scroll tick.
    pub fn compute(&self, total: usize, scroll_top: f64) -> WindowState {
        let scroll_top = scroll_top.max(0.0);
        let start_index =
            ((scroll_top / self.item_height).floor() as usize).saturating_sub(self.overscan);
        let rendered_count =
            (self.visible_rows(total) + 2 * self.overscan).min(total.saturating_sub(start_index));
        WindowState {
            start_index,
            rendered_count,
            scroll_top,
        }
    }

    /// Single-step scroll adjustment keeping `active` inside the comfortable
    /// visible band.
    ///
    /// Returns the new scroll offset, or `None` when the active row is
    /// already comfortable. The step is exactly one row height per call, so
    /// holding an arrow key produces an incremental scroll rather than a
    /// jump.
    pub fn nudge_for_active(
        &self,
        window: WindowState,
        total: usize,
        active: usize,
    ) -> Option<f64> {
        let band_start = (window.scroll_top / self.item_height).floor() as usize;
        let band_end = band_start + self.visible_rows(total);
        if active < band_start {
            Some((window.scroll_top - self.item_height).max(0.0))
        } else if active > band_end {
            Some((window.scroll_top + self.item_height).min(self.max_scroll_top(total)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WindowingConfig {
        WindowingConfig::default()
    }

    #[test]
    fn window_at_top_of_large_list() {
        let window = config().compute(1000, 0.0);
        assert_eq!(window.start_index, 0);
        // floor(370/40) + 2*20 = 9 + 40 = 49
        assert_eq!(window.rendered_count, 49);
    }

    #[test]
    fn window_mid_scroll() {
        let window = config().compute(1000, 2000.0);
        // floor(2000/40) - 20 = 30
        assert_eq!(window.start_index, 30);
        assert_eq!(window.rendered_count, 49);
        assert_eq!(window.block_offset(&config()), 1200.0);
    }

    #[test]
    fn window_clamps_at_list_end() {
        let cfg = config();
        let window = cfg.compute(40, cfg.max_scroll_top(40));
        assert!(window.start_index + window.rendered_count <= 40);
        assert!(window.range().contains(&39));
    }

    #[test]
    fn short_list_renders_everything() {
        let window = config().compute(5, 0.0);
        assert_eq!(window.start_index, 0);
        assert_eq!(window.rendered_count, 5);
    }

    #[test]
    fn visible_rows_always_materialized() {
        // Property from the engine contract: every row overlapping the
        // visible band must be inside the computed range.
        let cfg = config();
        let total = 500;
        for step in 0..200 {
            let scroll_top = step as f64 * 37.0;
            let window = cfg.compute(total, scroll_top);
            let visible = cfg.visible_space(total);
            for i in 0..total {
                let row_top = i as f64 * cfg.item_height;
                let row_bottom = row_top + cfg.item_height;
                let overlaps = row_bottom > scroll_top && row_top < scroll_top + visible;
                if overlaps && i < total {
                    assert!(
                        window.range().contains(&i),
                        "row {i} visible at scroll {scroll_top} but not materialized"
                    );
                }
            }
        }
    }

    #[test]
    fn nudge_steps_one_row_at_a_time() {
        let cfg = config();
        let total = 1000;
        let window = cfg.compute(total, 400.0);
        // Band covers rows 10..=19; row 9 is one step above it.
        assert_eq!(cfg.nudge_for_active(window, total, 9), Some(360.0));
        assert_eq!(cfg.nudge_for_active(window, total, 21), Some(440.0));
        assert_eq!(cfg.nudge_for_active(window, total, 15), None);
    }

    #[test]
    fn nudge_clamps_at_both_ends() {
        let cfg = config();
        let total = 1000;
        let top = cfg.compute(total, 0.0);
        // Nothing above the band to nudge toward.
        assert_eq!(cfg.nudge_for_active(top, total, 0), None);
        let bottom = cfg.compute(total, cfg.max_scroll_top(total));
        // Last row is already inside the band at max scroll.
        assert_eq!(cfg.nudge_for_active(bottom, total, 999), None);
        // An up-nudge moves by exactly one row height.
        let near_top = cfg.compute(total, 60.0);
        assert_eq!(cfg.nudge_for_active(near_top, total, 0), Some(20.0));
    }

    #[test]
    fn spacer_matches_full_list_height() {
        let cfg = config();
        assert_eq!(cfg.spacer_height(1000), 40_000.0);
        assert_eq!(cfg.visible_space(1000), 370.0);
        assert_eq!(cfg.visible_space(3), 120.0);
    }
}
