use crate::bst::{Augment, NodeRef};
use std::fmt;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Augment for Color {
    // new leaves are red until the insertion fix-up says otherwise
    fn leaf() -> Self {
        Color::Red
    }

    fn write_label<T>(node: &NodeRef<'_, T, Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        match node.color() {
            Color::Red => write!(f, "R{{{}}}", node.element()),
            Color::Black => write!(f, "N{{{}}}", node.element()),
        }
    }
}

impl<'a, T> NodeRef<'a, T, Color> {
    /// Returns the color of the node.
    pub fn color(&self) -> Color {
        self.augment()
    }
}
