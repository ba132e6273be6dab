//! Terminal adapter: maps the pixel-based engine onto terminal cells and
//! renders panels as floating overlays.

pub mod events;
pub mod frame;
pub mod render;

pub use events::translate_event;
pub use frame::ClipFrame;
pub use render::render_panel;

use ratatui::layout::Rect;

use crate::geometry::{PxPoint, PxRect, Viewport};
use crate::host::PanelHost;

/// Pixel size of one terminal cell. The defaults make one default-height
/// row occupy exactly one terminal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub px_per_col: f64,
    pub px_per_row: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            px_per_col: 10.0,
            px_per_row: crate::constants::ITEM_HEIGHT,
        }
    }
}

impl CellMetrics {
    /// Engine viewport corresponding to a terminal of `area` cells.
    pub fn viewport_for(&self, area: Rect) -> Viewport {
        Viewport::new(
            area.width as f64 * self.px_per_col,
            area.height as f64 * self.px_per_row,
        )
    }

    /// Pixel rectangle of a cell rectangle.
    pub fn rect_to_px(&self, rect: Rect) -> PxRect {
        PxRect::new(
            rect.x as f64 * self.px_per_col,
            rect.y as f64 * self.px_per_row,
            rect.width as f64 * self.px_per_col,
            rect.height as f64 * self.px_per_row,
        )
    }

    /// Pixel coordinates of a cell's center.
    pub fn cell_center(&self, column: u16, row: u16) -> PxPoint {
        PxPoint::new(
            (column as f64 + 0.5) * self.px_per_col,
            (row as f64 + 0.5) * self.px_per_row,
        )
    }

    fn px_rect_to_cells(&self, rect: PxRect) -> Rect {
        let to_u16 = |value: f64| value.clamp(0.0, u16::MAX as f64).round() as u16;
        Rect {
            x: to_u16(rect.x / self.px_per_col),
            y: to_u16(rect.y / self.px_per_row),
            width: to_u16(rect.width / self.px_per_col).max(1),
            height: to_u16(rect.height / self.px_per_row).max(1),
        }
    }
}

/// Cell-space layout of one visible panel, shared by rendering and event
/// translation so hit tests and drawing can never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Outer frame including the border.
    pub frame: Rect,
    /// Interior of the frame.
    pub inner: Rect,
    /// Search line, present for searchable panels.
    pub search: Option<Rect>,
    /// Scrollable row area.
    pub body: Rect,
}

impl PanelLayout {
    /// Layout for the host's current placement, or `None` while the panel
    /// is hidden.
    pub fn of(host: &PanelHost, metrics: &CellMetrics) -> Option<Self> {
        let rect = host.panel_rect()?;
        let frame = metrics.px_rect_to_cells(rect);
        let inner = Rect {
            x: frame.x.saturating_add(1),
            y: frame.y.saturating_add(1),
            width: frame.width.saturating_sub(2),
            height: frame.height.saturating_sub(2),
        };
        let (search, body) = if host.config().searchable && inner.height > 1 {
            let search = Rect {
                height: 1,
                ..inner
            };
            let body = Rect {
                y: inner.y.saturating_add(1),
                height: inner.height.saturating_sub(1),
                ..inner
            };
            (Some(search), body)
        } else {
            (None, inner)
        };
        Some(Self {
            frame,
            inner,
            search,
            body,
        })
    }

    /// First row drawn at the top of the body.
    pub fn first_visible_row(&self, host: &PanelHost) -> usize {
        (host.window().scroll_top / host.windowing().item_height).floor() as usize
    }

    /// Terminal line a row renders on, if it is inside the body.
    pub fn line_for_row(&self, host: &PanelHost, row: usize) -> Option<u16> {
        let first = self.first_visible_row(host);
        if row < first {
            return None;
        }
        let offset = (row - first) as u16;
        (offset < self.body.height).then(|| self.body.y + offset)
    }

    /// Inverse of `line_for_row`: which row a cell position hits.
    pub fn row_at(&self, host: &PanelHost, column: u16, row: u16) -> Option<usize> {
        if column < self.body.x
            || column >= self.body.x.saturating_add(self.body.width)
            || row < self.body.y
            || row >= self.body.y.saturating_add(self.body.height)
        {
            return None;
        }
        let index = self.first_visible_row(host) + (row - self.body.y) as usize;
        (index < host.row_count()).then_some(index)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.frame.x
            && column < self.frame.x.saturating_add(self.frame.width)
            && row >= self.frame.y
            && row < self.frame.y.saturating_add(self.frame.height)
    }
}
