//! Ordered binary search trees stored in an arena.
//!
//! `BinarySearchTree` is the plain tree: it keeps its elements in order but never rebalances,
//! and it lets callers rotate any node. `AvlTree` and `RedBlackTree` wrap it with their own
//! balancing strategies and only expose it read-only through `OrderedTree`.
//!
//! # Examples
//!
//! ```
//! use ordered_trees::{AvlTree, BinarySearchTree, OrderedTree, RedBlackTree, Rotate};
//!
//! let mut bst = BinarySearchTree::new();
//! let mut avl = AvlTree::new();
//! let mut rb = RedBlackTree::new();
//! for i in 1..=7 {
//!     bst.insert(i);
//!     avl.insert(i);
//!     rb.insert(i);
//! }
//!
//! assert_eq!(bst.height(), 6);
//! assert_eq!(avl.height(), 2);
//! assert!(rb.height() <= 4);
//!
//! let root = bst.root().unwrap().id();
//! bst.rotate_left(root).unwrap();
//! assert_eq!(bst.root().unwrap().element(), &2);
//!
//! let root = avl.root().unwrap().id();
//! assert!(avl.rotate_left(root).is_err());
//! ```

pub mod arena;
pub mod avl_tree;
pub mod bst;
pub mod error;
pub mod red_black_tree;

pub use crate::avl_tree::AvlTree;
pub use crate::bst::{BinarySearchTree, NodeRef, OrderedTree, Rotate};
pub use crate::error::{Result, TreeError};
pub use crate::red_black_tree::RedBlackTree;
