//! panel-kit: a floating-panel engine for terminal UIs.
//!
//! The engine powers dropdowns, multi-selects, and context menus. It has
//! three tightly coupled responsibilities:
//!
//! 1. viewport-aware placement of a panel relative to an anchor, never
//!    rendering off-screen ([`placement`]);
//! 2. windowed rendering of large item lists, materializing only the
//!    visible slice plus an overscan buffer ([`windowing`]);
//! 3. keyboard/mouse navigation over the full item list, with incremental
//!    scroll-into-view ([`navigation`]).
//!
//! [`host::PanelHost`] composes the three with dismissal and selection
//! handling for one open session; [`portal::PortalRoot`] keeps concurrently
//! open panels in one shared, unclippable root. All geometry reads go
//! through [`viewport::ViewportPort`], so the engine runs without a screen.
//! The [`tui`] module adapts the pixel-based engine to ratatui terminal
//! cells.

pub mod constants;
pub mod dismissal;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod host;
pub mod item;
pub mod navigation;
pub mod placement;
pub mod portal;
pub mod selection;
pub mod theme;
pub mod tracing_sub;
pub mod tui;
pub mod viewport;
pub mod windowing;

pub use dismissal::{DismissDecision, DismissalConfig};
pub use error::{PanelError, Result};
pub use geometry::{PxPoint, PxRect, PxSize, Viewport};
pub use host::{EmptyState, PanelConfig, PanelEvent, PanelHost, PanelResponse};
pub use item::{Item, ItemKind, SelectionKey};
pub use navigation::{CommitOutcome, NavKey, NavigationState};
pub use placement::{PlacementFlags, PlacementResult, compute_placement};
pub use portal::{PanelId, PortalRoot};
pub use selection::{Selection, SelectionMode};
pub use viewport::{FixedViewport, ViewportPort};
pub use windowing::{WindowState, WindowingConfig};
