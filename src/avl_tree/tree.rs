use crate::arena::NodeId;
use crate::avl_tree::node::Height;
use crate::bst::{BinarySearchTree, NodeRef, OrderedTree, Rebalance, Rotate, Side, Unlinked};
use crate::error::{Result, TreeError};
use log::trace;
use std::cmp;
use std::fmt;
use std::iter::FromIterator;

/// An ordered tree that keeps the heights of the two subtrees of every node within one of each
/// other.
///
/// After every insertion and removal the tree walks from the parent of the affected node up to
/// the root, refreshing cached heights and rotating wherever a node leans by two.
///
/// # Examples
///
/// ```
/// use ordered_trees::avl_tree::AvlTree;
/// use ordered_trees::OrderedTree;
///
/// let mut tree = AvlTree::new();
/// for i in 1..=7 {
///     tree.insert(i);
/// }
///
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.root().unwrap().element(), &4);
///
/// assert_eq!(tree.remove(&4), Some(4));
/// assert!(!tree.contains(&4));
/// ```
pub struct AvlTree<T> {
    tree: BinarySearchTree<T, Height>,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    pub fn new() -> Self {
        AvlTree {
            tree: BinarySearchTree::empty(0),
        }
    }

    /// Constructs a new, empty `AvlTree<T>` with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTree {
            tree: BinarySearchTree::empty(capacity),
        }
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.tree.reset();
    }

    fn height_of(&self, id: Option<NodeId>) -> i32 {
        id.map_or(-1, |id| self.tree.augment(id).get())
    }

    fn balance_of(&self, id: NodeId) -> i32 {
        self.height_of(self.tree.child(id, Side::Left))
            - self.height_of(self.tree.child(id, Side::Right))
    }

    fn update_height(&mut self, id: NodeId) {
        let left = self.height_of(self.tree.child(id, Side::Left));
        let right = self.height_of(self.tree.child(id, Side::Right));
        *self.tree.augment_mut(id) = Height(cmp::max(left, right) + 1);
    }

    /// Walks from `start` up to the root refreshing heights and rotating leaning nodes.
    fn rebalance(&mut self, start: Option<NodeId>) {
        let mut curr = start;
        while let Some(id) = curr {
            self.update_height(id);
            curr = match self.balance_of(id) {
                -2 => self.rebalance_leaning(id, Side::Right),
                2 => self.rebalance_leaning(id, Side::Left),
                _ => self.tree.parent(id),
            };
        }
    }

    /// Fixes `id`, whose subtree on `heavy` is two levels taller than the other one, and returns
    /// the node the walk continues from.
    fn rebalance_leaning(&mut self, id: NodeId, heavy: Side) -> Option<NodeId> {
        // balance sign of a child leaning the same way as `id`
        let sign = match heavy {
            Side::Left => 1,
            Side::Right => -1,
        };
        let mut child = self
            .tree
            .child(id, heavy)
            .expect("Expected heavy child to be `Some`.");
        let mut child_balance = self.balance_of(child);

        if child_balance == -sign {
            // zig-zag: straighten the heavy child first
            let grandchild = self
                .tree
                .child(child, heavy.opposite())
                .expect("Expected inner grandchild to be `Some`.");
            self.tree.rotate_toward(child, heavy);
            self.update_height(child);
            self.update_height(grandchild);
            trace!("avl double rotation at {:?} through {:?}", id, grandchild);

            child = grandchild;
            child_balance = self.balance_of(child);
        }

        if child_balance == sign || child_balance == 0 || child_balance == 2 * sign {
            self.tree.rotate_toward(id, heavy.opposite());
            self.update_height(id);
            self.update_height(child);
            trace!("avl rotation at {:?}, new subtree root {:?}", id, child);
            self.tree.parent(child)
        } else {
            self.tree.parent(id)
        }
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree, rebalances it and returns a handle to the new node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// let node = tree.insert(3);
    /// assert_eq!(node.element(), &3);
    /// assert_eq!(node.parent().unwrap().element(), &2);
    /// ```
    pub fn insert(&mut self, element: T) -> NodeRef<'_, T, Height> {
        let id = self.insert_balanced(element);
        self.tree.node_ref(id)
    }

    /// Inserts an element that may be absent. Fails with `TreeError::InvalidArgument` when
    /// `element` is `None`.
    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeRef<'_, T, Height>> {
        match element {
            Some(element) => Ok(self.insert(element)),
            None => Err(TreeError::InvalidArgument("cannot insert an absent element")),
        }
    }

    /// Removes the first node holding `element` found along its search path, rebalances the tree
    /// and returns the element. Returns `None` if there is no such node.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.remove_balanced(element)
    }
}

impl<T> Rebalance<T> for AvlTree<T>
where
    T: Ord,
{
    type Augment = Height;

    fn tree_mut(&mut self) -> &mut BinarySearchTree<T, Height> {
        &mut self.tree
    }

    fn after_insert(&mut self, node: NodeId) {
        let parent = self.tree.parent(node);
        self.rebalance(parent);
    }

    fn after_unlink(&mut self, unlinked: Unlinked<Height>) {
        self.rebalance(unlinked.parent);
    }
}

impl<T> OrderedTree<T> for AvlTree<T> {
    type Augment = Height;

    fn as_tree(&self) -> &BinarySearchTree<T, Height> {
        &self.tree
    }
}

impl<T> Rotate for AvlTree<T> {
    fn rotate_left(&mut self, _node: NodeId) -> Result<()> {
        Err(TreeError::Unsupported("avl trees cannot be rotated left by callers"))
    }

    fn rotate_right(&mut self, _node: NodeId) -> Result<()> {
        Err(TreeError::Unsupported("avl trees cannot be rotated right by callers"))
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.insert_balanced(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = crate::bst::Iter<'a, T, Height>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

/// Renders the tree with every node labelled `element height/balance`.
impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
