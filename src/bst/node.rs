use crate::arena::NodeId;
use crate::bst::tree::BinarySearchTree;
use crate::error::{Result, TreeError};
use std::fmt;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of an ordered tree.
///
/// Children are owned through the tree's arena; `parent` is a back-reference used only for
/// ancestor walks and rotation bookkeeping.
pub(crate) struct Node<T, M> {
    pub element: T,
    pub augment: M,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T, M> Node<T, M>
where
    M: Augment,
{
    pub fn new(element: T) -> Self {
        Node {
            element,
            augment: M::leaf(),
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// Per-node data a balancing strategy attaches to every node.
///
/// The tree creates nodes only through `Augment::leaf`, so each strategy decides what a freshly
/// inserted leaf carries.
pub trait Augment: Copy + fmt::Debug + PartialEq {
    /// The augmentation of a newly created leaf.
    fn leaf() -> Self;

    /// The subtree height this augmentation caches, if any.
    fn cached_height(&self) -> Option<i32> {
        None
    }

    /// Writes the label used for `node` when the tree is rendered.
    fn write_label<T>(node: &NodeRef<'_, T, Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        write!(f, "{}", node.element())
    }
}

impl Augment for () {
    fn leaf() -> Self {}
}

/// A read-only handle to a node of a tree.
///
/// The handle borrows the tree, so it can never be observed after the tree is mutated.
pub struct NodeRef<'a, T, M> {
    tree: &'a BinarySearchTree<T, M>,
    id: NodeId,
}

impl<'a, T, M> Clone for NodeRef<'a, T, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, M> Copy for NodeRef<'a, T, M> {}

impl<'a, T, M> NodeRef<'a, T, M>
where
    M: Augment,
{
    pub(crate) fn new(tree: &'a BinarySearchTree<T, M>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node<T, M> {
        &self.tree.arena[self.id]
    }

    fn neighbor(&self, link: Option<NodeId>, what: &'static str) -> Result<NodeRef<'a, T, M>> {
        link.map(|id| NodeRef::new(self.tree, id))
            .ok_or(TreeError::NotFound(what))
    }

    /// Returns the arena id of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the element stored in the node.
    pub fn element(&self) -> &'a T {
        &self.node().element
    }

    /// Returns the balancing data attached to the node.
    pub fn augment(&self) -> M {
        self.node().augment
    }

    /// Returns `true` if the node is not the root.
    pub fn has_parent(&self) -> bool {
        self.node().parent.is_some()
    }

    /// Returns `true` if the node has a left child.
    pub fn has_left(&self) -> bool {
        self.node().left.is_some()
    }

    /// Returns `true` if the node has a right child.
    pub fn has_right(&self) -> bool {
        self.node().right.is_some()
    }

    /// Returns the parent of the node, or `TreeError::NotFound` for the root.
    pub fn parent(&self) -> Result<NodeRef<'a, T, M>> {
        self.neighbor(self.node().parent, "node has no parent")
    }

    /// Returns the left child of the node, or `TreeError::NotFound` if there is none.
    pub fn left(&self) -> Result<NodeRef<'a, T, M>> {
        self.neighbor(self.node().left, "node has no left child")
    }

    /// Returns the right child of the node, or `TreeError::NotFound` if there is none.
    pub fn right(&self) -> Result<NodeRef<'a, T, M>> {
        self.neighbor(self.node().right, "node has no right child")
    }

    /// Returns the height of the subtree rooted at this node. A leaf has height 0.
    ///
    /// Strategies that cache heights answer from the cache; otherwise the subtree is walked.
    pub fn height(&self) -> i32 {
        match self.augment().cached_height() {
            Some(height) => height,
            None => self.tree.subtree_height(self.id),
        }
    }

    /// Returns the distance from the root to this node. The root has depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut curr = self.node().parent;
        while let Some(id) = curr {
            depth += 1;
            curr = self.tree.arena[id].parent;
        }
        depth
    }
}

impl<'a, T, M> fmt::Debug for NodeRef<'a, T, M>
where
    T: fmt::Debug,
    M: Augment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("element", self.element())
            .field("augment", &self.augment())
            .finish()
    }
}

impl<'a, T, M> fmt::Display for NodeRef<'a, T, M>
where
    T: fmt::Display,
    M: Augment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        M::write_label(self, f)
    }
}
