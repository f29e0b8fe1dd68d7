use crate::arena::{Arena, NodeId};
use crate::bst::iter::{Iter, Nodes};
use crate::bst::node::{Augment, Node, NodeRef, Side};
use crate::error::{Result, TreeError};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

/// What was left behind when a node with at most one child was spliced out of the tree.
pub(crate) struct Unlinked<M> {
    /// The parent of the removed node.
    pub parent: Option<NodeId>,
    /// The slot of `parent` the removed node occupied. `None` if it was the root.
    pub side: Option<Side>,
    /// The child promoted into the removed node's slot.
    pub child: Option<NodeId>,
    /// The augmentation the removed node carried.
    pub augment: M,
}

/// Operations that restructure a tree around a pivot node.
///
/// The plain `BinarySearchTree` performs the rotation. Self-balancing trees refuse with
/// `TreeError::Unsupported`, because an outside rotation would desynchronize their invariant.
pub trait Rotate {
    /// Rotates the tree to the left around `node`. Does nothing if `node` has no right child.
    fn rotate_left(&mut self, node: NodeId) -> Result<()>;

    /// Rotates the tree to the right around `node`. Does nothing if `node` has no left child.
    fn rotate_right(&mut self, node: NodeId) -> Result<()>;
}

/// An ordered binary search tree without any balancing.
///
/// Every element in a left subtree compares less than or equal to the node's element and every
/// element in a right subtree compares greater than or equal to it. Equal elements are placed to
/// the left, so duplicates are kept.
///
/// `M` is the per-node augmentation a balancing strategy attaches. The plain tree uses `()`.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
///
/// assert_eq!(tree.remove(&2), Some(2));
/// assert_eq!(tree.remove(&2), None);
/// ```
///
/// Only the plain tree can be built and mutated by callers. A tree carrying balancing data is
/// reachable only through the balanced tree that owns it:
///
/// ```compile_fail
/// use ordered_trees::avl_tree::Height;
/// use ordered_trees::bst::BinarySearchTree;
///
/// let tree: BinarySearchTree<u32, Height> = (1..=5).collect();
/// ```
///
/// ```compile_fail
/// use ordered_trees::bst::BinarySearchTree;
/// use ordered_trees::red_black_tree::Color;
///
/// let mut tree: BinarySearchTree<u32, Color> = Default::default();
/// tree.insert(1);
/// ```
pub struct BinarySearchTree<T, M = ()> {
    pub(crate) arena: Arena<Node<T, M>>,
    pub(crate) root: Option<NodeId>,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty tree.
    pub fn new() -> Self {
        Self::empty(0)
    }

    /// Constructs a new, empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::empty(capacity)
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.reset();
    }
}

impl<T, M> BinarySearchTree<T, M>
where
    M: Augment,
{
    pub(crate) fn empty(capacity: usize) -> Self {
        BinarySearchTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree. An empty tree has height -1 and a single node height 0.
    pub fn height(&self) -> i32 {
        match self.root {
            Some(id) => self.node_ref(id).height(),
            None => -1,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Returns a handle to the root, or `TreeError::NotFound` if the tree is empty.
    pub fn root(&self) -> Result<NodeRef<'_, T, M>> {
        self.root
            .map(|id| self.node_ref(id))
            .ok_or(TreeError::NotFound("tree is empty"))
    }

    /// Returns a handle to the node with id `id`, or `TreeError::NotFound` if it was removed.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, T, M>> {
        match self.arena.get(id) {
            Some(_) => Ok(self.node_ref(id)),
            None => Err(TreeError::NotFound("node is not in the tree")),
        }
    }

    /// Returns the minimum element of the tree, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|id| &self.arena[self.extreme(id, Side::Left)].element)
    }

    /// Returns the maximum element of the tree, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|id| &self.arena[self.extreme(id, Side::Right)].element)
    }

    /// Returns an iterator over the elements of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = vec![3, 1, 2].into_iter().collect();
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T, M> {
        Iter::new(self.nodes())
    }

    /// Returns an iterator over handles to the nodes of the tree in ascending order.
    pub fn nodes(&self) -> Nodes<'_, T, M> {
        Nodes::new(self)
    }

    /// Visits every node in pre-order: a node, then its left subtree, then its right subtree.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, T, M>),
    {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            visit(self.node_ref(id));
            let node = &self.arena[id];
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Visits every node in in-order, which is ascending order of elements.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, T, M>),
    {
        for node in self.nodes() {
            visit(node);
        }
    }

    /// Visits every node in post-order: the left subtree, the right subtree, then the node.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, T, M>),
    {
        let mut stack = Vec::new();
        let mut curr = self.root;
        let mut last_visited = None;
        loop {
            if let Some(id) = curr {
                stack.push(id);
                curr = self.arena[id].left;
                continue;
            }
            let top = match stack.last() {
                Some(&top) => top,
                None => break,
            };
            match self.arena[top].right {
                Some(right) if last_visited != Some(right) => curr = Some(right),
                _ => {
                    visit(self.node_ref(top));
                    last_visited = stack.pop();
                },
            }
        }
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_, T, M> {
        NodeRef::new(self, id)
    }

    pub(crate) fn augment(&self, id: NodeId) -> M {
        self.arena[id].augment
    }

    pub(crate) fn augment_mut(&mut self, id: NodeId) -> &mut M {
        &mut self.arena[id].augment
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.arena[id].child(side)
    }

    /// Returns the slot of its parent `id` occupies, or `None` for the root.
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.arena[id].parent?;
        if self.arena[parent].left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Walks the subtree rooted at `id` and returns its height.
    pub(crate) fn subtree_height(&self, id: NodeId) -> i32 {
        let mut height = 0;
        let mut stack = vec![(id, 0)];
        while let Some((curr, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[curr];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.arena[id].child(side) {
            id = next;
        }
        id
    }

    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.arena[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            },
        }
    }

    /// Rotates left around `pivot`. Returns `false` without touching the tree if `pivot` has no
    /// right child.
    ///
    /// ```text
    ///     p               r
    ///    / \             / \
    ///   a   r    -->    p   c
    ///      / \         / \
    ///     b   c       a   b
    /// ```
    pub(crate) fn rotate_left_at(&mut self, pivot: NodeId) -> bool {
        let right = match self.arena[pivot].right {
            Some(right) => right,
            None => return false,
        };
        let parent = self.arena[pivot].parent;
        let crossed = self.arena[right].left;

        self.arena[pivot].right = crossed;
        if let Some(crossed) = crossed {
            self.arena[crossed].parent = Some(pivot);
        }
        self.arena[right].left = Some(pivot);
        self.arena[pivot].parent = Some(right);
        self.arena[right].parent = parent;
        self.replace_child(parent, pivot, Some(right));

        trace!("rotated left at {:?}, new subtree root {:?}", pivot, right);
        true
    }

    /// Rotates right around `pivot`. Returns `false` without touching the tree if `pivot` has no
    /// left child.
    pub(crate) fn rotate_right_at(&mut self, pivot: NodeId) -> bool {
        let left = match self.arena[pivot].left {
            Some(left) => left,
            None => return false,
        };
        let parent = self.arena[pivot].parent;
        let crossed = self.arena[left].right;

        self.arena[pivot].left = crossed;
        if let Some(crossed) = crossed {
            self.arena[crossed].parent = Some(pivot);
        }
        self.arena[left].right = Some(pivot);
        self.arena[pivot].parent = Some(left);
        self.arena[left].parent = parent;
        self.replace_child(parent, pivot, Some(left));

        trace!("rotated right at {:?}, new subtree root {:?}", pivot, left);
        true
    }

    /// Rotates `pivot` so that its child on the side opposite to `toward` takes its place.
    pub(crate) fn rotate_toward(&mut self, pivot: NodeId, toward: Side) -> bool {
        match toward {
            Side::Left => self.rotate_left_at(pivot),
            Side::Right => self.rotate_right_at(pivot),
        }
    }

    /// Swaps the element of `id`, which must have two children, with the element of its in-order
    /// predecessor. Returns the predecessor, which has at most one child.
    pub(crate) fn exchange_with_predecessor(&mut self, id: NodeId) -> NodeId {
        let left = self.arena[id]
            .left
            .expect("Expected a node with two children.");
        let predecessor = self.extreme(left, Side::Right);
        let (node, pred) = self.arena.pair_mut(id, predecessor);
        mem::swap(&mut node.element, &mut pred.element);
        trace!("exchanged {:?} with predecessor {:?}", id, predecessor);
        predecessor
    }

    /// Splices out `id`, which must have at most one child, promoting that child into its slot.
    pub(crate) fn unlink(&mut self, id: NodeId) -> (T, Unlinked<M>) {
        let side = self.side_of(id);
        let node = self.arena.free(id);
        debug_assert!(node.left.is_none() || node.right.is_none());

        let child = node.left.or(node.right);
        if let Some(child) = child {
            self.arena[child].parent = node.parent;
        }
        self.replace_child(node.parent, id, child);

        let unlinked = Unlinked {
            parent: node.parent,
            side,
            child,
            augment: node.augment,
        };
        (node.element, unlinked)
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree and returns a handle to its node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// let node = tree.insert(1);
    /// assert_eq!(node.element(), &1);
    /// assert_eq!(node.parent().unwrap().element(), &2);
    /// ```
    pub fn insert(&mut self, element: T) -> NodeRef<'_, T, ()> {
        let id = self.attach(element);
        self.node_ref(id)
    }

    /// Inserts an element that may be absent. Fails with `TreeError::InvalidArgument` when
    /// `element` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::bst::BinarySearchTree;
    /// use ordered_trees::TreeError;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.try_insert(Some(1)).is_ok());
    /// assert!(matches!(tree.try_insert(None), Err(TreeError::InvalidArgument(_))));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeRef<'_, T, ()>> {
        match element {
            Some(element) => Ok(self.insert(element)),
            None => Err(TreeError::InvalidArgument("cannot insert an absent element")),
        }
    }

    /// Removes the first node holding `element` found along its search path and returns the
    /// element. Returns `None` and leaves the tree untouched if there is no such node.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.detach(element).map(|(element, _)| element)
    }

}

impl<T, M> BinarySearchTree<T, M>
where
    T: Ord,
    M: Augment,
{
    /// Returns a handle to the first node holding `element` found along its search path.
    pub fn find(&self, element: &T) -> Option<NodeRef<'_, T, M>> {
        self.search(element).map(|id| self.node_ref(id))
    }

    /// Checks if the tree holds `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.search(element).is_some()
    }

    pub(crate) fn search(&self, element: &T) -> Option<NodeId> {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            curr = match element.cmp(&node.element) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Creates a leaf for `element` and hangs it below the last node of its search path. Ties go
    /// left.
    pub(crate) fn attach(&mut self, element: T) -> NodeId {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = &self.arena[id];
            parent = Some(id);
            side = if element <= node.element {
                Side::Left
            } else {
                Side::Right
            };
            curr = node.child(side);
        }

        let mut node = Node::new(element);
        node.parent = parent;
        let id = self.arena.allocate(node);
        match parent {
            None => self.root = Some(id),
            Some(parent) => self.arena[parent].set_child(side, Some(id)),
        }
        id
    }

    /// Finds `element`, reduces the removal to a node with at most one child and splices that
    /// node out.
    pub(crate) fn detach(&mut self, element: &T) -> Option<(T, Unlinked<M>)> {
        let mut id = match self.search(element) {
            Some(id) => id,
            None => {
                debug!("removal of an absent element ignored");
                return None;
            },
        };
        let node = &self.arena[id];
        if node.left.is_some() && node.right.is_some() {
            id = self.exchange_with_predecessor(id);
        }
        Some(self.unlink(id))
    }
}

impl<T> Rotate for BinarySearchTree<T, ()> {
    fn rotate_left(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        self.rotate_left_at(node);
        Ok(())
    }

    fn rotate_right(&mut self, node: NodeId) -> Result<()> {
        self.node(node)?;
        self.rotate_right_at(node);
        Ok(())
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
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

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in iter {
            self.attach(element);
        }
    }
}

impl<'a, T, M> IntoIterator for &'a BinarySearchTree<T, M>
where
    M: Augment,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Structural equality: both trees have the same shape, and nodes at the same position hold
/// equal elements and equal augmentations.
impl<T, M> PartialEq for BinarySearchTree<T, M>
where
    T: PartialEq,
    M: Augment,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {},
                (Some(a), Some(b)) => {
                    let (a, b) = (&self.arena[a], &other.arena[b]);
                    if a.element != b.element || a.augment != b.augment {
                        return false;
                    }
                    stack.push((a.left, b.left));
                    stack.push((a.right, b.right));
                },
                _ => return false,
            }
        }
        true
    }
}

impl<T, M> Eq for BinarySearchTree<T, M>
where
    T: Eq,
    M: Augment,
{
}

impl<T, M> fmt::Debug for BinarySearchTree<T, M>
where
    T: fmt::Debug,
    M: Augment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{BinarySearchTree, Rotate};
    use crate::error::TreeError;

    fn build(elements: &[u32]) -> BinarySearchTree<u32> {
        elements.iter().cloned().collect()
    }

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.root().unwrap_err(), TreeError::NotFound("tree is empty"));
    }

    #[test]
    fn test_insert() {
        let mut tree = BinarySearchTree::new();
        let node = tree.insert(1);
        assert_eq!(node.element(), &1);
        assert!(!node.has_parent());
        assert!(tree.contains(&1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_insert_ties_go_left() {
        let mut tree = BinarySearchTree::new();
        tree.insert(5);
        let node = tree.insert(5);
        assert_eq!(node.parent().unwrap().left().unwrap().id(), node.id());

        let root = tree.root().unwrap();
        assert!(root.has_left());
        assert!(!root.has_right());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_try_insert_absent() {
        let mut tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(
            tree.try_insert(None).unwrap_err(),
            TreeError::InvalidArgument("cannot insert an absent element"),
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn test_find() {
        let tree = build(&[5, 3, 8, 1, 4]);
        let node = tree.find(&4).unwrap();
        assert_eq!(node.element(), &4);
        assert_eq!(node.parent().unwrap().element(), &3);
        assert!(tree.find(&7).is_none());
        assert!(!tree.contains(&7));
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(!tree.contains(&1));
        assert!(!tree.root().unwrap().has_left());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = build(&[5, 3, 1]);
        assert_eq!(tree.remove(&3), Some(3));
        let one = tree.find(&1).unwrap();
        assert_eq!(one.parent().unwrap().element(), &5);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &5]);
    }

    #[test]
    fn test_remove_two_children_uses_predecessor() {
        let mut tree = build(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(tree.root().unwrap().element(), &4);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &4, &8]);
        assert!(!tree.find(&3).unwrap().has_right());
    }

    #[test]
    fn test_remove_root() {
        let mut tree = build(&[1]);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);

        let mut tree = build(&[1, 2]);
        assert_eq!(tree.remove(&1), Some(1));
        let root = tree.root().unwrap();
        assert_eq!(root.element(), &2);
        assert!(!root.has_parent());
    }

    #[test]
    fn test_remove_absent() {
        let mut tree = build(&[2, 1, 3]);
        assert_eq!(tree.remove(&7), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree, build(&[2, 1, 3]));
    }

    #[test]
    fn test_remove_duplicates() {
        let mut tree = build(&[2, 2, 2]);
        assert_eq!(tree.remove(&2), Some(2));
        assert!(tree.contains(&2));
        assert_eq!(tree.remove(&2), Some(2));
        assert_eq!(tree.remove(&2), Some(2));
        assert!(!tree.contains(&2));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&8));

        let empty: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn test_traversals() {
        let tree = build(&[4, 2, 6, 1, 3, 5, 7]);

        let mut pre = Vec::new();
        tree.pre_order(|node| pre.push(*node.element()));
        assert_eq!(pre, vec![4, 2, 1, 3, 6, 5, 7]);

        let mut in_order = Vec::new();
        tree.in_order(|node| in_order.push(*node.element()));
        assert_eq!(in_order, vec![1, 2, 3, 4, 5, 6, 7]);

        let mut post = Vec::new();
        tree.post_order(|node| post.push(*node.element()));
        assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn test_traversals_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        let mut count = 0;
        tree.pre_order(|_| count += 1);
        tree.in_order(|_| count += 1);
        tree.post_order(|_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_rotate_left() {
        let mut tree = build(&[2, 1, 4, 3, 5]);
        let root = tree.root().unwrap().id();
        tree.rotate_left(root).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.element(), &4);
        assert!(!root.has_parent());
        let two = root.left().unwrap();
        assert_eq!(two.element(), &2);
        assert_eq!(two.right().unwrap().element(), &3);
        assert_eq!(two.right().unwrap().parent().unwrap().id(), two.id());
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4, &5]);
    }

    #[test]
    fn test_rotate_right_inner_node() {
        let mut tree = build(&[6, 4, 7, 2, 5, 1, 3]);
        let four = tree.find(&4).unwrap().id();
        tree.rotate_right(four).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(root.element(), &6);
        let two = root.left().unwrap();
        assert_eq!(two.element(), &2);
        assert_eq!(two.parent().unwrap().id(), root.id());
        let four = two.right().unwrap();
        assert_eq!(four.element(), &4);
        assert_eq!(four.left().unwrap().element(), &3);
        assert_eq!(four.right().unwrap().element(), &5);
        assert_eq!(
            tree.iter().collect::<Vec<&u32>>(),
            vec![&1, &2, &3, &4, &5, &6, &7],
        );
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let mut tree = build(&[2, 1]);
        let root = tree.root().unwrap().id();
        tree.rotate_left(root).unwrap();
        assert_eq!(tree, build(&[2, 1]));

        let leaf = tree.find(&1).unwrap().id();
        tree.rotate_right(leaf).unwrap();
        assert_eq!(tree, build(&[2, 1]));
    }

    #[test]
    fn test_rotate_stale_node() {
        let mut tree = build(&[2, 1]);
        let leaf = tree.find(&1).unwrap().id();
        tree.remove(&1);
        assert_eq!(
            tree.rotate_left(leaf).unwrap_err(),
            TreeError::NotFound("node is not in the tree"),
        );
    }

    #[test]
    fn test_structural_eq() {
        assert_eq!(build(&[2, 1, 3]), build(&[2, 3, 1]));
        assert_ne!(build(&[2, 1, 3]), build(&[1, 2, 3]));
        assert_ne!(build(&[2, 1]), build(&[2, 1, 3]));
    }

    #[test]
    fn test_clear() {
        let mut tree = build(&[2, 1, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(!tree.contains(&1));
    }

    #[test]
    fn test_debug() {
        let tree = build(&[2, 1, 3]);
        assert_eq!(format!("{:?}", tree), "[1, 2, 3]");
    }
}
