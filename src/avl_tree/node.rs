use crate::bst::{Augment, NodeRef};
use std::fmt;

/// The cached height an avl tree keeps in every node.
///
/// The cache is refreshed bottom-up after every local mutation or rotation, so outside of a
/// rebalancing walk it always equals the true height of the node's subtree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Height(pub(crate) i32);

impl Height {
    /// Returns the cached height. A leaf has height 0.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Augment for Height {
    fn leaf() -> Self {
        Height(0)
    }

    fn cached_height(&self) -> Option<i32> {
        Some(self.0)
    }

    fn write_label<T>(node: &NodeRef<'_, T, Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        write!(f, "{} {}/{}", node.element(), node.height(), node.balance())
    }
}

impl<'a, T> NodeRef<'a, T, Height> {
    /// Returns the height of the left subtree minus the height of the right subtree. A missing
    /// child counts as height -1.
    pub fn balance(&self) -> i32 {
        let left = self.left().map(|node| node.height()).unwrap_or(-1);
        let right = self.right().map(|node| node.height()).unwrap_or(-1);
        left - right
    }
}
