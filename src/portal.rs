//! Shared root for concurrently open panels.
//!
//! Panels render into one detached root so no ancestor can clip them. Each
//! open panel gets a stable id and a slot in the z-order stack; the
//! last-mounted panel sits on top, which also makes it the first to see
//! outside-click decisions when panels nest.

/// Stable identity of one mounted panel layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(usize);

/// Z-ordered set of mounted panel layers.
#[derive(Debug, Default)]
pub struct PortalRoot {
    next_id: usize,
    // Bottom-to-top draw order.
    stack: Vec<PanelId>,
}

impl PortalRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new layer on top of the stack.
    pub fn mount(&mut self) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        self.stack.push(id);
        id
    }

    /// Remove a layer. Unknown ids are a no-op so teardown stays defensive
    /// even when it races with an unmount higher up.
    pub fn unmount(&mut self, id: PanelId) {
        self.stack.retain(|mounted| *mounted != id);
    }

    /// Move an existing layer to the top of the stack.
    pub fn raise(&mut self, id: PanelId) {
        if let Some(position) = self.stack.iter().position(|mounted| *mounted == id) {
            let id = self.stack.remove(position);
            self.stack.push(id);
        }
    }

    /// Topmost layer, the one that owns outside-click decisions.
    pub fn top(&self) -> Option<PanelId> {
        self.stack.last().copied()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.stack.contains(&id)
    }

    /// Layers in draw order, bottom first.
    pub fn iter_z(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.stack.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_order_is_z_order() {
        let mut root = PortalRoot::new();
        let a = root.mount();
        let b = root.mount();
        assert_eq!(root.top(), Some(b));
        assert_eq!(root.iter_z().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn unmount_is_defensive() {
        let mut root = PortalRoot::new();
        let a = root.mount();
        root.unmount(a);
        root.unmount(a);
        assert!(root.is_empty());
        assert_eq!(root.top(), None);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut root = PortalRoot::new();
        let a = root.mount();
        root.unmount(a);
        let b = root.mount();
        assert_ne!(a, b);
    }

    #[test]
    fn raise_moves_layer_to_top() {
        let mut root = PortalRoot::new();
        let a = root.mount();
        let b = root.mount();
        root.raise(a);
        assert_eq!(root.top(), Some(a));
        assert_eq!(root.len(), 2);
        assert!(root.contains(b));
    }
}
