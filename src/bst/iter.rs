use crate::arena::NodeId;
use crate::bst::node::{Augment, NodeRef};
use crate::bst::tree::BinarySearchTree;

/// An iterator over handles to the nodes of a tree in ascending order.
///
/// The iterator keeps the path of pending ancestors on an explicit stack, so it never recurses
/// and stops after visiting every node exactly once.
pub struct Nodes<'a, T, M> {
    tree: &'a BinarySearchTree<T, M>,
    stack: Vec<NodeId>,
}

impl<'a, T, M> Nodes<'a, T, M>
where
    M: Augment,
{
    pub(crate) fn new(tree: &'a BinarySearchTree<T, M>) -> Self {
        let mut nodes = Nodes {
            tree,
            stack: Vec::new(),
        };
        nodes.push_left_spine(tree.root);
        nodes
    }

    fn push_left_spine(&mut self, mut curr: Option<NodeId>) {
        while let Some(id) = curr {
            self.stack.push(id);
            curr = self.tree.arena[id].left;
        }
    }
}

impl<'a, T, M> Iterator for Nodes<'a, T, M>
where
    M: Augment,
{
    type Item = NodeRef<'a, T, M>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.arena[id].right);
        Some(self.tree.node_ref(id))
    }
}

impl<'a, T, M> Clone for Nodes<'a, T, M> {
    fn clone(&self) -> Self {
        Nodes {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

/// An iterator over the elements of a tree in ascending order.
///
/// This iterator yields immutable references.
pub struct Iter<'a, T, M> {
    nodes: Nodes<'a, T, M>,
}

impl<'a, T, M> Iter<'a, T, M> {
    pub(crate) fn new(nodes: Nodes<'a, T, M>) -> Self {
        Iter { nodes }
    }
}

impl<'a, T, M> Iterator for Iter<'a, T, M>
where
    M: Augment,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.element())
    }
}

impl<'a, T, M> Clone for Iter<'a, T, M> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes.clone(),
        }
    }
}
