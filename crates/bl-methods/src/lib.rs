//! # bl-methods
//!
//! Numerical methods: the array-backed complete binary tree and the
//! binomial lattice passes built on top of it.
//!
//! # Modules
//!
//! * [`indexed_tree`] — fixed-capacity complete binary tree in heap layout
//! * [`lattice`] — risk-neutral probability, forward price construction,
//!   backward-induction valuation

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Fixed-capacity complete binary tree over a flat index space.
pub mod indexed_tree;

/// Lattice methods: probability, forward pass, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use indexed_tree::IndexedBinaryTree;
pub use lattice::{
    probability_from_factors, risk_neutral_probability, Branch, LatticeBuilder, OptionValuator,
    LEFT_CHILD_IS_DOWN_BRANCH,
};
