//! Swap handles - how two sibling switchers learn about each other
//!
//! The common parent owns a `SwapPair` and decides on each render which
//! side, if any, receives the other's handle. A handle only names a DOM
//! element; holders read its geometry and never touch it otherwise.

/// Read-only reference to one swappable element, by DOM id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapHandle {
    id: String,
}

impl SwapHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Two handles created together by the parent that lays both elements out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPair {
    left: SwapHandle,
    right: SwapHandle,
}

impl SwapPair {
    /// Ids are derived from `key`, which must be unique on the page.
    pub fn new(key: &str) -> Self {
        Self {
            left: SwapHandle::new(format!("swap-{key}-left")),
            right: SwapHandle::new(format!("swap-{key}-right")),
        }
    }

    pub fn left(&self) -> SwapHandle {
        self.left.clone()
    }

    pub fn right(&self) -> SwapHandle {
        self.right.clone()
    }

    /// Counterparts for `(left, right)`: each other's handle while
    /// `swapped`, nothing otherwise.
    pub fn counterparts(&self, swapped: bool) -> (Option<SwapHandle>, Option<SwapHandle>) {
        if swapped {
            (Some(self.right()), Some(self.left()))
        } else {
            (None, None)
        }
    }
}
