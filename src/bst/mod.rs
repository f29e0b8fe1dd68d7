//! Ordered binary search tree shared by the self-balancing trees.
//!
//! Nodes live in an arena and link to each other through `NodeId`s, including a back-reference
//! to their parent. The tree exposes insertion, search, removal by exchange with the in-order
//! predecessor, rotations, traversals and a box-drawing rendering.

mod iter;
mod node;
mod print;
mod tree;

pub use self::iter::{Iter, Nodes};
pub use self::node::{Augment, NodeRef};
pub use self::tree::{BinarySearchTree, Rotate};

pub(crate) use self::node::Side;
pub(crate) use self::tree::Unlinked;

use crate::arena::NodeId;
use crate::error::Result;

/// The read-only surface shared by every ordered tree.
///
/// Self-balancing trees hand out their underlying `BinarySearchTree` only through a shared
/// reference, so callers can inspect it but never restructure it.
pub trait OrderedTree<T> {
    /// The per-node data the tree's balancing strategy maintains.
    type Augment: Augment;

    /// Returns the underlying tree.
    fn as_tree(&self) -> &BinarySearchTree<T, Self::Augment>;

    /// Returns the number of elements in the tree.
    fn len(&self) -> usize {
        self.as_tree().len()
    }

    /// Returns `true` if the tree has no elements.
    fn is_empty(&self) -> bool {
        self.as_tree().is_empty()
    }

    /// Returns the height of the tree, or -1 if it is empty.
    fn height(&self) -> i32 {
        self.as_tree().height()
    }

    /// Returns a handle to the root, or `TreeError::NotFound` if the tree is empty.
    fn root(&self) -> Result<NodeRef<'_, T, Self::Augment>> {
        self.as_tree().root()
    }

    /// Checks if the tree holds `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.as_tree().contains(element)
    }

    /// Returns a handle to the first node holding `element` found along its search path.
    fn find(&self, element: &T) -> Option<NodeRef<'_, T, Self::Augment>>
    where
        T: Ord,
    {
        self.as_tree().find(element)
    }

    /// Returns a handle to the node with id `id`, or `TreeError::NotFound` if it was removed.
    fn node(&self, id: NodeId) -> Result<NodeRef<'_, T, Self::Augment>> {
        self.as_tree().node(id)
    }

    /// Returns the minimum element, or `None` if the tree is empty.
    fn min(&self) -> Option<&T> {
        self.as_tree().min()
    }

    /// Returns the maximum element, or `None` if the tree is empty.
    fn max(&self) -> Option<&T> {
        self.as_tree().max()
    }

    /// Returns an iterator over the elements in ascending order.
    fn iter(&self) -> Iter<'_, T, Self::Augment> {
        self.as_tree().iter()
    }

    /// Returns an iterator over handles to the nodes in ascending order.
    fn nodes(&self) -> Nodes<'_, T, Self::Augment> {
        self.as_tree().nodes()
    }

    /// Visits every node in pre-order.
    fn pre_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T, Self::Augment>),
    {
        self.as_tree().pre_order(visit)
    }

    /// Visits every node in in-order.
    fn in_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T, Self::Augment>),
    {
        self.as_tree().in_order(visit)
    }

    /// Visits every node in post-order.
    fn post_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T, Self::Augment>),
    {
        self.as_tree().post_order(visit)
    }
}

impl<T, M> OrderedTree<T> for BinarySearchTree<T, M>
where
    M: Augment,
{
    type Augment = M;

    fn as_tree(&self) -> &BinarySearchTree<T, M> {
        self
    }
}

/// Crate-internal access to the mutating half of a tree, implemented by each balancing strategy
/// in its own module. Rotations of the underlying tree are reachable only from here.
pub(crate) trait Rebalance<T>
where
    T: Ord,
{
    type Augment: Augment;

    fn tree_mut(&mut self) -> &mut BinarySearchTree<T, Self::Augment>;

    /// Restores the invariant after `node` was attached as a leaf.
    fn after_insert(&mut self, node: NodeId);

    /// Restores the invariant after a node was spliced out.
    fn after_unlink(&mut self, unlinked: Unlinked<Self::Augment>);

    fn insert_balanced(&mut self, element: T) -> NodeId {
        let id = self.tree_mut().attach(element);
        self.after_insert(id);
        id
    }

    fn remove_balanced(&mut self, element: &T) -> Option<T> {
        let (element, unlinked) = self.tree_mut().detach(element)?;
        self.after_unlink(unlinked);
        Some(element)
    }
}
