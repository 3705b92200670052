//! Complete binary tree stored in a flat, fixed-length buffer.
//!
//! Nodes are laid out breadth-first (heap order), 0-indexed:
//!
//! ```text
//!             0
//!        1         2
//!      3   4     5   6
//! ```
//!
//! * parent of `i ≥ 1` is `(i − 1) / 2`
//! * children of an interior `i` are `2i + 1` (left) and `2i + 2` (right)
//! * a tree with `L` levels holds `2^L − 1` nodes, leaves start at
//!   `2^(L−1) − 1`
//!
//! Every access is bounds-checked and reported through [`Error`]; nothing
//! panics on a bad index.

use bl_core::{ensure, Error, Result, Size, MAX_STEPS};

/// Fixed-capacity complete binary tree.
///
/// The tree supports two write disciplines:
///
/// * [`append`](Self::append) writes at a monotonically increasing cursor
///   (used to grow a lattice root-to-leaves);
/// * [`set`](Self::set) overwrites any node (used for backward induction).
///
/// # Example
/// ```
/// use bl_methods::IndexedBinaryTree;
/// let mut tree = IndexedBinaryTree::<f64>::new(2).unwrap();
/// tree.append(1.0).unwrap();
/// tree.append(2.0).unwrap();
/// tree.append(3.0).unwrap();
/// assert!(tree.append(4.0).is_err());
/// assert_eq!(tree.children_values(0).unwrap(), (2.0, 3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedBinaryTree<T> {
    nodes: Box<[T]>,
    levels: Size,
    cursor: Size,
}

impl<T: Default + Clone> IndexedBinaryTree<T> {
    /// Allocate a tree with `levels` levels, every node default-initialised.
    ///
    /// `levels` must lie in `[1, MAX_STEPS]`.
    pub fn new(levels: Size) -> Result<Self> {
        ensure!(levels >= 1, "a tree needs at least one level, got {levels}");
        ensure!(
            levels <= MAX_STEPS,
            "a tree holds at most {MAX_STEPS} levels, got {levels}"
        );
        let size = (1usize << levels) - 1;
        Ok(Self {
            nodes: vec![T::default(); size].into_boxed_slice(),
            levels,
            cursor: 0,
        })
    }
}

impl<T: Clone> IndexedBinaryTree<T> {
    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of levels.
    pub fn levels(&self) -> Size {
        self.levels
    }

    /// Total number of nodes, `2^levels − 1`.
    pub fn capacity(&self) -> Size {
        self.nodes.len()
    }

    /// Index of the first leaf, `2^(levels−1) − 1`.
    pub fn leaf_start(&self) -> Size {
        (1usize << (self.levels - 1)) - 1
    }

    /// Inclusive range of leaf indices, `(leaf_start, capacity − 1)`.
    pub fn leaf_range(&self) -> (Size, Size) {
        (self.leaf_start(), self.capacity() - 1)
    }

    /// Number of items written through [`append`](Self::append).
    pub fn len(&self) -> Size {
        self.cursor
    }

    /// Whether nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Whether the append cursor reached the capacity.
    pub fn is_full(&self) -> bool {
        self.cursor == self.capacity()
    }

    /// Whether `index` is a leaf. Out-of-range indices are errors.
    pub fn is_leaf(&self, index: Size) -> Result<bool> {
        self.check(index)?;
        Ok(index >= self.leaf_start())
    }

    /// The whole buffer in breadth-first order.
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    // ── Writes ───────────────────────────────────────────────────────────

    /// Write `item` at the cursor and advance it.
    pub fn append(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.nodes[self.cursor] = item;
        self.cursor += 1;
        Ok(())
    }

    /// Overwrite the node at `index`. Does not move the append cursor.
    pub fn set(&mut self, index: Size, item: T) -> Result<()> {
        self.check(index)?;
        self.nodes[index] = item;
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// Value at `index`.
    pub fn get(&self, index: Size) -> Result<T> {
        self.check(index)?;
        Ok(self.nodes[index].clone())
    }

    /// Index of the parent of `index`.
    pub fn parent(&self, index: Size) -> Result<Size> {
        self.check(index)?;
        if index == 0 {
            return Err(Error::NoParent);
        }
        Ok((index - 1) / 2)
    }

    /// Indices of the `(left, right)` children of `index`.
    pub fn children(&self, index: Size) -> Result<(Size, Size)> {
        if self.is_leaf(index)? {
            let leaf_start = self.leaf_start();
            return Err(Error::NoChildren { index, leaf_start });
        }
        Ok((2 * index + 1, 2 * index + 2))
    }

    /// Value stored at the parent of `index`.
    pub fn parent_value(&self, index: Size) -> Result<T> {
        self.get(self.parent(index)?)
    }

    /// Values stored at the `(left, right)` children of `index`.
    pub fn children_values(&self, index: Size) -> Result<(T, T)> {
        let (left, right) = self.children(index)?;
        Ok((self.get(left)?, self.get(right)?))
    }

    /// `(index, value)` pairs of every node in breadth-first order.
    pub fn snapshot(&self) -> Vec<(Size, T)> {
        self.as_slice().iter().cloned().enumerate().collect()
    }

    fn check(&self, index: Size) -> Result<()> {
        let size = self.capacity();
        if index >= size {
            return Err(Error::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
