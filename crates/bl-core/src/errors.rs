//! Error types for binomial-lattice.
//!
//! Every failure in the workspace is a variant of a single `thiserror`-derived
//! enum. Failures are fail-fast: the operation that returns an error leaves
//! the container it was called on untouched.

use thiserror::Error;

use crate::{Probability, Size};

/// The top-level error type used throughout binomial-lattice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Non-physical or out-of-range parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The risk-neutral probability falls outside [0, 1], so the lattice
    /// admits arbitrage.
    #[error("arbitrage violation: risk-neutral probability {probability} outside [0, 1]")]
    ArbitrageViolation {
        /// The offending probability.
        probability: Probability,
    },

    /// Append on a tree whose cursor already reached its capacity.
    #[error("capacity exceeded: tree holds at most {capacity} nodes")]
    CapacityExceeded {
        /// Fixed capacity of the tree.
        capacity: Size,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: Size,
        /// The size of the container.
        size: Size,
    },

    /// The root node has no parent.
    #[error("the root node has no parent")]
    NoParent,

    /// Leaf nodes have no children.
    #[error("node {index} is a leaf (leaves start at {leaf_start}) and has no children")]
    NoChildren {
        /// The leaf index that was queried.
        index: Size,
        /// First leaf index of the tree.
        leaf_start: Size,
    },
}

/// Shorthand `Result` type used throughout binomial-lattice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Precondition check on configuration values.
///
/// Returns `Err(Error::InvalidConfig(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bl_core::{ensure, errors::Error};
/// fn positive(x: f64) -> bl_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidConfig(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidConfig(
                format!($($msg)*)
            ));
        }
    };
}
