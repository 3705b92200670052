//! Binomial lattice over an [`IndexedBinaryTree`](crate::IndexedBinaryTree).
//!
//! # Overview
//!
//! * [`risk_neutral_probability`] — `p = (e^r − d) / (u − d)`
//! * [`LatticeBuilder`] — forward pass writing the price tree
//! * [`OptionValuator`] — backward induction writing the value tree
//!
//! Every node of the price tree has two children. Which of them is the up
//! move is fixed by [`LEFT_CHILD_IS_DOWN_BRANCH`] and resolved through
//! [`Branch::of_index`]; both passes go through it so the weighting of the
//! backward pass always matches the construction of the forward pass.

pub mod builder;
pub mod valuator;

pub use builder::LatticeBuilder;
pub use valuator::OptionValuator;

use bl_core::{ensure, Config, Error, Probability, Rate, Real, Result, Size};

/// Left children (odd indices `2k + 1`) carry the down move, right children
/// (even indices `2k + 2`) the up move.
pub const LEFT_CHILD_IS_DOWN_BRANCH: bool = true;

/// Direction of the move leading into a non-root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Price multiplied by the down factor.
    Down,
    /// Price multiplied by the up factor.
    Up,
}

impl Branch {
    /// Branch that leads into node `index` (`index ≥ 1`).
    pub fn of_index(index: Size) -> Self {
        let is_left_child = index % 2 == 1;
        if is_left_child == LEFT_CHILD_IS_DOWN_BRANCH {
            Branch::Down
        } else {
            Branch::Up
        }
    }

    /// Split a `(left, right)` pair of children into `(down, up)`.
    pub fn down_up<T>(left: T, right: T) -> (T, T) {
        if LEFT_CHILD_IS_DOWN_BRANCH {
            (left, right)
        } else {
            (right, left)
        }
    }
}

/// Risk-neutral up-move probability of `config`.
///
/// Fails with [`Error::ArbitrageViolation`] when the probability leaves
/// `[0, 1]`.
pub fn risk_neutral_probability(config: &Config) -> Result<Probability> {
    probability_from_factors(
        config.up_factor(),
        config.down_factor(),
        config.risk_free_interest(),
    )
}

/// Risk-neutral probability `(e^r − d) / (u − d)` from raw factors.
///
/// ```
/// use bl_methods::probability_from_factors;
/// let p = probability_from_factors(1.2, 0.8, 0.02).unwrap();
/// assert!((p - 0.550503).abs() < 1e-6);
/// assert!(probability_from_factors(1.0, 1.0, 0.02).is_err());
/// ```
pub fn probability_from_factors(up: Real, down: Real, rate: Rate) -> Result<Probability> {
    ensure!(
        up != down,
        "up and down factors must differ, both are {up}"
    );
    let p = (rate.exp() - down) / (up - down);
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::ArbitrageViolation { probability: p });
    }
    Ok(p)
}
