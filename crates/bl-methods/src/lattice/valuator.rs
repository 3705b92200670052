//! Backward pass: value a call on a built price tree.

use bl_core::{ensure, Config, ExerciseType, Price, Probability, Real, Result};

use super::Branch;
use crate::IndexedBinaryTree;

/// Values a call by backward induction.
///
/// Leaves receive the expiry payoff `max(S − K, 0)`. Each interior node, from
/// the last one down to the root, receives
///
/// ```text
/// continuation = e^{−r} · (p · V_up + (1 − p) · V_down)
/// value        = exercise.node_value(max(S − K, 0), continuation)
/// ```
///
/// so American and European calls share the same loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionValuator {
    strike: Price,
    discount: Real,
    probability: Probability,
    exercise: ExerciseType,
}

impl OptionValuator {
    /// Valuator for `config` using the risk-neutral `probability`.
    pub fn new(config: &Config, probability: Probability) -> Self {
        Self {
            strike: config.strike_price(),
            discount: config.discount(),
            probability,
            exercise: config.exercise(),
        }
    }

    /// Call payoff at price `s`.
    pub fn intrinsic(&self, s: Price) -> Real {
        (s - self.strike).max(0.0)
    }

    /// Fill `values` from `prices` and return the root value.
    ///
    /// `prices` must be completely built and both trees must have the same
    /// shape.
    pub fn value(
        &self,
        prices: &IndexedBinaryTree<Real>,
        values: &mut IndexedBinaryTree<Real>,
    ) -> Result<Real> {
        ensure!(
            prices.levels() == values.levels(),
            "price tree has {} levels but value tree has {}",
            prices.levels(),
            values.levels()
        );
        ensure!(
            prices.is_full(),
            "price tree holds {} of {} nodes",
            prices.len(),
            prices.capacity()
        );

        let (leaf_start, last) = prices.leaf_range();
        for i in leaf_start..=last {
            values.set(i, self.intrinsic(prices.get(i)?))?;
        }

        let p = self.probability;
        for i in (0..leaf_start).rev() {
            let (left, right) = values.children_values(i)?;
            let (down, up) = Branch::down_up(left, right);
            let continuation = self.discount * (p * up + (1.0 - p) * down);
            let early_exercise = self.intrinsic(prices.get(i)?);
            values.set(i, self.exercise.node_value(early_exercise, continuation))?;
        }

        values.get(0)
    }
}
