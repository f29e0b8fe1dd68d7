//! Slot allocator for tree nodes.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A stable handle to a node stored in an `Arena<T>`.
///
/// A `NodeId` stays valid until the node it refers to is freed. After that the slot may be
/// handed out again, so ids must not be kept across removals.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    index: usize,
}

impl NodeId {
    /// Returns the slot index of the id.
    pub fn index(self) -> usize {
        self.index
    }
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A single-typed allocator backed by a `Vec`.
///
/// Freed slots are threaded into a free list and reused by later allocations, so node links can
/// be plain indices that never move while the node is alive. All objects are dropped when the
/// arena is dropped.
///
/// # Examples
///
/// ```
/// use ordered_trees::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert_eq!(arena.get(x), None);
/// ```
pub struct Arena<T> {
    head: Option<usize>,
    blocks: Vec<Block<T>>,
    size: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` objects before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert!(arena.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            head: None,
            blocks: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Allocates an object in the arena and returns its id.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.size += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                NodeId {
                    index: self.blocks.len() - 1,
                }
            },
            Some(index) => {
                let vacant_block = mem::replace(&mut self.blocks[index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next) => self.head = next,
                    Block::Occupied(_) => panic!("Error: free list points at an occupied block."),
                }
                NodeId { index }
            },
        }
    }

    /// Deallocates an object in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` corresponds to an invalid or vacant slot.
    pub fn free(&mut self, id: NodeId) -> T {
        if id.index >= self.blocks.len() {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[id.index], Block::Vacant(self.head));
        match old_block {
            Block::Vacant(next) => {
                // restore the slot before unwinding so the free list stays intact
                self.blocks[id.index] = Block::Vacant(next);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(id.index);
                value
            },
        }
    }

    /// Returns an immutable reference to an object, or `None` if `id` is vacant or invalid.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.blocks.get(id.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if `id` is vacant or invalid.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.blocks.get_mut(id.index) {
            Some(Block::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct occupied objects at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or if either id is vacant or invalid.
    pub fn pair_mut(&mut self, a: NodeId, b: NodeId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Error: pair_mut requires distinct ids.");
        let (low, high, swapped) = if a.index < b.index {
            (a.index, b.index, false)
        } else {
            (b.index, a.index, true)
        };
        let (head, tail) = self.blocks.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Block::Occupied(x), Block::Occupied(y)) => {
                if swapped {
                    (y, x)
                } else {
                    (x, y)
                }
            },
            _ => panic!("Error: entry out of bounds."),
        }
    }

    /// Returns the number of live objects.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every object and forgets every slot.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.size = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: entry out of bounds.")
    }
}
