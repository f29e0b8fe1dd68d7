use crate::arena::NodeId;
use crate::bst::{BinarySearchTree, NodeRef, OrderedTree, Rebalance, Rotate, Side, Unlinked};
use crate::error::{Result, TreeError};
use crate::red_black_tree::node::Color;
use log::trace;
use std::fmt;
use std::iter::FromIterator;

/// A position in the tree whose paths are one black node short.
#[derive(Clone, Copy, Debug)]
enum DoubleBlack {
    Node(NodeId),
    /// A black sentinel standing in for the empty `side` slot of `parent`. Rotations during the
    /// fix-up never move `parent`'s child on `side`, so the ghost keeps its position until the
    /// fix-up ends. The slot itself stays empty in the tree.
    Ghost { parent: NodeId, side: Side },
}

/// An ordered tree that colors every node red or black to keep itself approximately balanced.
///
/// The root is black, a red node never has a red child, and every path from the root down to a
/// missing child passes through the same number of black nodes.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::{Color, RedBlackTree};
/// use ordered_trees::OrderedTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.element(), &20);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.left().unwrap().color(), Color::Red);
///
/// assert_eq!(tree.remove(&20), Some(20));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct RedBlackTree<T> {
    tree: BinarySearchTree<T, Color>,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    pub fn new() -> Self {
        RedBlackTree {
            tree: BinarySearchTree::empty(0),
        }
    }

    /// Constructs a new, empty `RedBlackTree<T>` with room for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            tree: BinarySearchTree::empty(capacity),
        }
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.tree.reset();
    }

    /// Returns the color of `node`. A missing node is black.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::{Color, RedBlackTree};
    /// use ordered_trees::OrderedTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// let root = tree.root().unwrap();
    /// assert_eq!(RedBlackTree::color_of(Some(root)), Color::Black);
    /// assert_eq!(RedBlackTree::color_of(root.left().ok()), Color::Black);
    /// ```
    pub fn color_of(node: Option<NodeRef<'_, T, Color>>) -> Color {
        node.map_or(Color::Black, |node| node.color())
    }

    fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.tree.augment(id))
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color(id) == Color::Red
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        *self.tree.augment_mut(id) = color;
    }

    fn side_of(&self, id: NodeId) -> Side {
        self.tree
            .side_of(id)
            .expect("Expected parent to be `Some`.")
    }

    fn sibling(&self, parent: NodeId, side: Side) -> NodeId {
        self.tree
            .child(parent, side.opposite())
            .expect("Expected sibling to be `Some`.")
    }

    /// Restores the invariants after the red node `id` was attached.
    fn fix_insert(&mut self, mut id: NodeId) {
        loop {
            let parent = match self.tree.parent(id) {
                Some(parent) => parent,
                None => {
                    self.set_color(id, Color::Black);
                    return;
                },
            };
            if !self.is_red(Some(parent)) {
                return;
            }

            // a red parent is never the root
            let grandparent = self
                .tree
                .parent(parent)
                .expect("Expected grandparent to be `Some`.");
            let parent_side = self.side_of(parent);
            let uncle = self.tree.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                trace!("recolored under {:?}, continuing upward", grandparent);
                id = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.side_of(id) != parent_side {
                // zig-zag: line the node up with its parent
                self.tree.rotate_toward(parent, parent_side);
                parent = id;
            }
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.tree.rotate_toward(grandparent, parent_side.opposite());
            return;
        }
    }

    /// Returns the parent of the double black position and the side it hangs from, or `None`
    /// once the position reached the root.
    fn locate(&self, position: DoubleBlack) -> Option<(NodeId, Side)> {
        match position {
            DoubleBlack::Node(id) => {
                let parent = self.tree.parent(id)?;
                Some((parent, self.side_of(id)))
            },
            DoubleBlack::Ghost { parent, side } => Some((parent, side)),
        }
    }

    /// Pushes the missing black node up from `position` until it can be absorbed.
    fn fix_double_black(&mut self, mut position: DoubleBlack) {
        while let Some((parent, side)) = self.locate(position) {
            let mut sibling = self.sibling(parent, side);

            if self.is_red(Some(sibling)) {
                self.set_color(parent, Color::Red);
                self.set_color(sibling, Color::Black);
                self.tree.rotate_toward(parent, side);
                sibling = self.sibling(parent, side);
            }

            let near = self.tree.child(sibling, side);
            let far = self.tree.child(sibling, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);
                if self.is_red(Some(parent)) {
                    self.set_color(parent, Color::Black);
                    return;
                }
                trace!("double black moves up to {:?}", parent);
                position = DoubleBlack::Node(parent);
                continue;
            }

            if !self.is_red(far) {
                // only the near nephew is red: turn it into the far one
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.tree.rotate_toward(sibling, side.opposite());
                sibling = self.sibling(parent, side);
            }

            let parent_color = self.color(Some(parent));
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = self.tree.child(sibling, side.opposite()) {
                self.set_color(far, Color::Black);
            }
            self.tree.rotate_toward(parent, side);
            return;
        }
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Inserts an element into the tree, restores the coloring and returns a handle to the new
    /// node.
    pub fn insert(&mut self, element: T) -> NodeRef<'_, T, Color> {
        let id = self.insert_balanced(element);
        self.tree.node_ref(id)
    }

    /// Inserts an element that may be absent. Fails with `TreeError::InvalidArgument` when
    /// `element` is `None`.
    pub fn try_insert(&mut self, element: Option<T>) -> Result<NodeRef<'_, T, Color>> {
        match element {
            Some(element) => Ok(self.insert(element)),
            None => Err(TreeError::InvalidArgument("cannot insert an absent element")),
        }
    }

    /// Removes the first node holding `element` found along its search path, restores the
    /// coloring and returns the element. Returns `None` if there is no such node.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        self.remove_balanced(element)
    }
}

impl<T> Rebalance<T> for RedBlackTree<T>
where
    T: Ord,
{
    type Augment = Color;

    fn tree_mut(&mut self) -> &mut BinarySearchTree<T, Color> {
        &mut self.tree
    }

    fn after_insert(&mut self, node: NodeId) {
        self.fix_insert(node);
    }

    fn after_unlink(&mut self, unlinked: Unlinked<Color>) {
        let position = match (unlinked.child, unlinked.parent, unlinked.side) {
            (Some(child), _, _) => DoubleBlack::Node(child),
            (None, Some(parent), Some(side)) => DoubleBlack::Ghost { parent, side },
            // the last node is gone
            (None, _, _) => return,
        };

        if let DoubleBlack::Node(child) = position {
            if self.is_red(Some(child)) {
                self.set_color(child, Color::Black);
                return;
            }
        }
        if unlinked.augment == Color::Red {
            return;
        }
        self.fix_double_black(position);
    }
}

impl<T> OrderedTree<T> for RedBlackTree<T> {
    type Augment = Color;

    fn as_tree(&self) -> &BinarySearchTree<T, Color> {
        &self.tree
    }
}

impl<T> Rotate for RedBlackTree<T> {
    fn rotate_left(&mut self, _node: NodeId) -> Result<()> {
        Err(TreeError::Unsupported("red black trees cannot be rotated left by callers"))
    }

    fn rotate_right(&mut self, _node: NodeId) -> Result<()> {
        Err(TreeError::Unsupported("red black trees cannot be rotated right by callers"))
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
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

impl<T> Extend<T> for RedBlackTree<T>
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

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = crate::bst::Iter<'a, T, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<T> PartialEq for RedBlackTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

/// Renders the tree with red nodes labelled `R{element}` and black nodes `N{element}`.
impl<T> fmt::Display for RedBlackTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}
