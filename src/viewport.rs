//! Injected viewport access.
//!
//! The engine never reads global screen state; everything it knows about
//! the outside world arrives through this port. That keeps placement
//! testable without a real screen and portable across rendering targets.

use crate::geometry::{PxRect, Viewport};

/// Geometry queries the panel host needs from its environment.
pub trait ViewportPort {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Bounding rectangle of the trigger element, or `None` while the
    /// trigger is not attached yet. A `None` skips the placement cycle; the
    /// next trigger retries.
    fn anchor_rect(&self) -> Option<PxRect>;
}

impl<T: ViewportPort + ?Sized> ViewportPort for &T {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn anchor_rect(&self) -> Option<PxRect> {
        (**self).anchor_rect()
    }
}

/// Static port used by tests and the demo binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport {
    viewport: Viewport,
    anchor: Option<PxRect>,
}

impl FixedViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: PxRect) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn set_anchor(&mut self, anchor: Option<PxRect>) {
        self.anchor = anchor;
    }
}

impl ViewportPort for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn anchor_rect(&self) -> Option<PxRect> {
        self.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_port_round_trips() {
        let port = FixedViewport::new(800.0, 600.0).with_anchor(PxRect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(port.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(port.anchor_rect(), Some(PxRect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn blanket_impl_for_refs() {
        let port = FixedViewport::new(100.0, 100.0);
        let by_ref: &dyn ViewportPort = &port;
        assert_eq!(by_ref.anchor_rect(), None);
        assert_eq!((&by_ref).viewport(), Viewport::new(100.0, 100.0));
    }
}
