//! Panel host: composes placement, windowing, navigation, dismissal, and
//! selection for one floating panel.
//!
//! The host owns all per-session state. Everything resets on open; nothing
//! survives a close except selection values the caller explicitly passes
//! back in. All event handling completes synchronously inside
//! [`PanelHost::handle_event`].

use tracing::debug;

use crate::dismissal::{DismissDecision, DismissalConfig};
use crate::geometry::{PxPoint, PxRect, PxSize};
use crate::item::{Item, SelectionKey};
use crate::navigation::{CommitOutcome, NavKey, NavigationState, commit};
use crate::placement::{PlacementFlags, PlacementResult, compute_placement};
use crate::selection::{Selection, SelectionMode};
use crate::viewport::ViewportPort;
use crate::windowing::{WindowState, WindowingConfig};

/// Per-panel configuration surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub placement: PlacementFlags,
    pub dismissal: DismissalConfig,
    pub selection_mode: SelectionMode,
    /// Row height in pixels.
    pub item_height: f64,
    /// Overscan rows per side.
    pub overscan: usize,
    /// Highlight the first non-divider row on open.
    pub has_active_by_default: bool,
    /// Show the filter box and accept typed characters.
    pub searchable: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            placement: PlacementFlags::default(),
            dismissal: DismissalConfig::default(),
            selection_mode: SelectionMode::default(),
            item_height: crate::constants::ITEM_HEIGHT,
            overscan: crate::constants::OVERSCAN,
            has_active_by_default: false,
            searchable: false,
        }
    }
}

/// Input events the host understands. Coordinates are viewport-relative
/// pixels; row indices refer to the filtered list.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Key(NavKey),
    /// Typed character for the search box.
    SearchChar(char),
    PointerDown(PxPoint),
    PointerMoved,
    HoverRow(usize),
    ClickRow(usize),
    /// New scroll offset of the windowed container.
    ContainerScroll(f64),
    /// An ancestor of the panel scrolled.
    AncestorScroll,
    /// The panel's true size became known after layout.
    PanelMeasured(PxSize),
    /// The caller replaced the item list mid-session.
    ItemsChanged(Vec<Item>),
}

/// Outcome of one event dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelResponse {
    Ignored,
    Handled,
    /// A row committed. `href` is set for link rows; with `close_on_select`
    /// the panel is already closed when the caller sees this.
    Committed {
        key: SelectionKey,
        href: Option<String>,
    },
    Closed,
}

/// Why the list body is empty. The two states carry different copy and must
/// not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The caller supplied no items at all.
    NoItems,
    /// Items exist but none match the search text.
    NoMatches,
}

#[derive(Debug)]
pub struct PanelHost {
    config: PanelConfig,
    items: Vec<Item>,
    /// Indices into `items` that survive the search filter.
    filtered: Vec<usize>,
    search: String,
    selection: Selection,
    nav: NavigationState,
    windowing: WindowingConfig,
    window: WindowState,
    placement: Option<PlacementResult>,
    panel_size: Option<PxSize>,
    open: bool,
}

impl PanelHost {
    pub fn new(config: PanelConfig) -> Self {
        let windowing = WindowingConfig {
            item_height: config.item_height,
            overscan: config.overscan,
            ..Default::default()
        };
        Self {
            config,
            items: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            selection: Selection::new(config.selection_mode),
            nav: NavigationState::new(),
            windowing,
            window: WindowState::default(),
            placement: None,
            panel_size: None,
            open: false,
        }
    }

    /// Start an open session. Items are supplied fresh; `selected` carries
    /// over any prior selection. Placement waits for the panel to be
    /// measured, so the panel starts hidden.
    pub fn open(
        &mut self,
        items: Vec<Item>,
        selected: impl IntoIterator<Item = SelectionKey>,
        port: &dyn ViewportPort,
    ) {
        self.items = items;
        self.search.clear();
        self.selection = Selection::with_selected(self.config.selection_mode, selected);
        self.nav.reset();
        self.window = WindowState::default();
        self.placement = None;
        self.panel_size = None;
        self.open = true;
        self.refilter();
        if self.config.has_active_by_default {
            let first = self
                .filtered
                .iter()
                .position(|&index| !self.items[index].is_divider());
            self.nav.set_active(first);
        }
        self.reposition(port);
        debug!(items = self.items.len(), "panel opened");
    }

    /// End the session. Idempotent; closing an already-closed panel is a
    /// no-op so teardown ordering cannot raise.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.placement = None;
        self.nav.reset();
        debug!("panel closed");
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the panel may be drawn. False until placement is known: the
    /// panel is held invisible while geometry settles so it never flashes at
    /// the wrong position.
    pub fn visible(&self) -> bool {
        self.open && self.placement.is_some()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn placement(&self) -> Option<PlacementResult> {
        self.placement
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    pub fn windowing(&self) -> &WindowingConfig {
        &self.windowing
    }

    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Number of rows after filtering.
    pub fn row_count(&self) -> usize {
        self.filtered.len()
    }

    /// Item behind a filtered row index.
    pub fn row(&self, row: usize) -> Option<&Item> {
        self.filtered.get(row).map(|&index| &self.items[index])
    }

    pub fn active_row(&self) -> Option<usize> {
        self.nav.active()
    }

    /// The panel's on-screen rectangle once placed and measured.
    pub fn panel_rect(&self) -> Option<PxRect> {
        let placement = self.placement?;
        let size = self.panel_size?;
        let width = placement.fixed_width.unwrap_or(size.width);
        Some(PxRect::new(placement.left, placement.top, width, size.height))
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.items.is_empty() {
            Some(EmptyState::NoItems)
        } else if self.filtered.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    /// Dispatch one event. Synchronous; every transition completes before
    /// this returns.
    pub fn handle_event(&mut self, event: PanelEvent, port: &dyn ViewportPort) -> PanelResponse {
        if !self.open {
            return PanelResponse::Ignored;
        }
        match event {
            PanelEvent::Key(NavKey::Down) => {
                if let Some(active) = self.nav.arrow_down(self.filtered.len()) {
                    self.scroll_active_into_view(active);
                }
                PanelResponse::Handled
            }
            PanelEvent::Key(NavKey::Up) => {
                if let Some(active) = self.nav.arrow_up(self.filtered.len()) {
                    self.scroll_active_into_view(active);
                }
                PanelResponse::Handled
            }
            PanelEvent::Key(NavKey::Enter) => self.commit_row(self.nav.active()),
            PanelEvent::Key(NavKey::Escape) => match self.config.dismissal.on_escape() {
                DismissDecision::Close => {
                    self.close();
                    PanelResponse::Closed
                }
                _ => PanelResponse::Handled,
            },
            PanelEvent::Key(NavKey::Backspace) => self.backspace(),
            PanelEvent::SearchChar(ch) => {
                if !self.config.searchable {
                    return PanelResponse::Ignored;
                }
                self.search.push(ch);
                self.refilter();
                PanelResponse::Handled
            }
            PanelEvent::PointerDown(point) => {
                match self
                    .config
                    .dismissal
                    .on_pointer_down(point, self.panel_rect())
                {
                    DismissDecision::Close => {
                        self.close();
                        PanelResponse::Closed
                    }
                    _ => PanelResponse::Ignored,
                }
            }
            PanelEvent::PointerMoved => {
                self.nav.pointer_moved();
                PanelResponse::Handled
            }
            PanelEvent::HoverRow(row) => {
                if row < self.filtered.len() && self.nav.hover(row) {
                    PanelResponse::Handled
                } else {
                    PanelResponse::Ignored
                }
            }
            PanelEvent::ClickRow(row) => self.commit_row(Some(row)),
            PanelEvent::ContainerScroll(scroll_top) => {
                let clamped = scroll_top.clamp(0.0, self.windowing.max_scroll_top(self.filtered.len()));
                self.window = self.windowing.compute(self.filtered.len(), clamped);
                PanelResponse::Handled
            }
            PanelEvent::AncestorScroll => match self.config.dismissal.on_ancestor_scroll() {
                DismissDecision::Close => {
                    self.close();
                    PanelResponse::Closed
                }
                _ => {
                    self.reposition(port);
                    PanelResponse::Handled
                }
            },
            PanelEvent::PanelMeasured(size) => {
                self.panel_size = Some(size);
                self.reposition(port);
                PanelResponse::Handled
            }
            PanelEvent::ItemsChanged(items) => {
                self.items = items;
                self.refilter();
                // Panel height may have changed with the list.
                self.reposition(port);
                PanelResponse::Handled
            }
        }
    }

    fn backspace(&mut self) -> PanelResponse {
        if !self.search.is_empty() {
            self.search.pop();
            self.refilter();
            return PanelResponse::Handled;
        }
        if matches!(self.config.selection_mode, SelectionMode::Multi)
            && self.selection.pop_last().is_some()
        {
            return PanelResponse::Handled;
        }
        PanelResponse::Ignored
    }

    fn commit_row(&mut self, row: Option<usize>) -> PanelResponse {
        let resolved = commit(row.and_then(|row| self.row(row)));
        match resolved {
            CommitOutcome::Nothing => PanelResponse::Ignored,
            CommitOutcome::Action(key) => {
                self.selection.select(key.clone());
                if self.config.dismissal.close_on_select {
                    self.close();
                }
                debug!(%key, "row committed");
                PanelResponse::Committed { key, href: None }
            }
            CommitOutcome::Link { key, href } => {
                // Navigation handles itself; the panel just goes away.
                self.close();
                PanelResponse::Committed {
                    key,
                    href: Some(href),
                }
            }
        }
    }

    fn scroll_active_into_view(&mut self, active: usize) {
        let total = self.filtered.len();
        if let Some(scroll_top) = self.windowing.nudge_for_active(self.window, total, active) {
            self.window = self.windowing.compute(total, scroll_top);
        } else {
            // Active may have moved without scrolling; keep the slice fresh.
            self.window = self.windowing.compute(total, self.window.scroll_top);
        }
    }

    fn refilter(&mut self) {
        let needle = self.search.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty() || item.label.to_lowercase().contains(&needle)
            })
            .map(|(index, _)| index)
            .collect();
        // Clamp the highlight and the window to the new list.
        if let Some(active) = self.nav.active()
            && active >= self.filtered.len()
        {
            self.nav
                .set_active(self.filtered.len().checked_sub(1));
        }
        self.window = self
            .windowing
            .compute(self.filtered.len(), self.window.scroll_top.min(
                self.windowing.max_scroll_top(self.filtered.len()),
            ));
    }

    /// Recompute placement. Skipped silently when the anchor or the panel's
    /// measured size is not available yet; the next trigger retries.
    fn reposition(&mut self, port: &dyn ViewportPort) {
        let Some(anchor) = port.anchor_rect() else {
            return;
        };
        let Some(panel) = self.panel_size else {
            return;
        };
        let content_px: f64 = self
            .filtered
            .iter()
            .map(|&index| self.items[index].height(self.config.item_height))
            .sum();
        let placement = compute_placement(
            anchor,
            panel,
            content_px,
            port.viewport(),
            self.config.placement,
        );
        debug!(top = placement.top, left = placement.left, "panel placed");
        self.placement = Some(placement);
    }
}
