//! Forward pass: populate a price tree root-to-leaves.

use bl_core::{ensure, Config, Error, Price, Real, Result};

use super::Branch;
use crate::IndexedBinaryTree;

/// Builds the price lattice by appending one node per index in
/// breadth-first order.
///
/// Node `i ≥ 1` holds `parent(i) · u` when it is reached by an up move and
/// `parent(i) · d` otherwise (see [`Branch::of_index`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeBuilder {
    initial_price: Price,
    up_factor: Real,
    down_factor: Real,
}

impl LatticeBuilder {
    /// Builder for the prices described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            initial_price: config.initial_price(),
            up_factor: config.up_factor(),
            down_factor: config.down_factor(),
        }
    }

    /// Multiplicative factor of `branch`.
    pub fn factor(&self, branch: Branch) -> Real {
        match branch {
            Branch::Up => self.up_factor,
            Branch::Down => self.down_factor,
        }
    }

    /// Append every node of `tree`, starting from its cursor at the root.
    ///
    /// A tree that already holds prices fails with
    /// [`CapacityExceeded`](bl_core::Error::CapacityExceeded); a partly
    /// appended tree fails with [`InvalidConfig`](bl_core::Error::InvalidConfig).
    /// Either way nothing is written.
    pub fn build(&self, tree: &mut IndexedBinaryTree<Real>) -> Result<()> {
        if tree.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: tree.capacity(),
            });
        }
        ensure!(
            tree.is_empty(),
            "price tree already holds {} of {} nodes",
            tree.len(),
            tree.capacity()
        );

        // cursor == index for every append below
        tree.append(self.initial_price)?;
        for i in 1..tree.capacity() {
            let previous = tree.parent_value(i)?;
            tree.append(previous * self.factor(Branch::of_index(i)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(steps: usize) -> Config {
        Config::builder().with_steps(steps).build().unwrap()
    }

    #[test]
    fn three_levels_match_hand_computation() {
        let cfg = config(3);
        let mut tree = IndexedBinaryTree::new(cfg.steps()).unwrap();
        LatticeBuilder::new(&cfg).build(&mut tree).unwrap();

        let expected = [100.0, 80.0, 120.0, 64.0, 96.0, 96.0, 144.0];
        assert!(tree.is_full());
        for (got, want) in tree.as_slice().iter().zip(expected) {
            assert_relative_eq!(*got, want, max_relative = 1e-12);
        }
    }

    #[test]
    fn right_child_is_the_up_move() {
        let cfg = config(5);
        let mut tree = IndexedBinaryTree::new(cfg.steps()).unwrap();
        LatticeBuilder::new(&cfg).build(&mut tree).unwrap();

        for i in 0..tree.leaf_start() {
            let s = tree.get(i).unwrap();
            let (left, right) = tree.children_values(i).unwrap();
            assert_relative_eq!(left, s * 0.8, max_relative = 1e-12);
            assert_relative_eq!(right, s * 1.2, max_relative = 1e-12);
        }
    }

    #[test]
    fn leaves_only_depend_on_number_of_up_moves() {
        let cfg = config(4);
        let mut tree = IndexedBinaryTree::new(cfg.steps()).unwrap();
        LatticeBuilder::new(&cfg).build(&mut tree).unwrap();

        let (start, end) = tree.leaf_range();
        for i in start..=end {
            // bits of (i − start) spell the path, 1 = right = up
            let ups = (i - start).count_ones() as i32;
            let want = 100.0 * 1.2_f64.powi(ups) * 0.8_f64.powi(3 - ups);
            assert_relative_eq!(tree.get(i).unwrap(), want, max_relative = 1e-12);
        }
    }

    #[test]
    fn single_level_holds_only_the_spot() {
        let cfg = config(1);
        let mut tree = IndexedBinaryTree::new(1).unwrap();
        LatticeBuilder::new(&cfg).build(&mut tree).unwrap();
        assert_eq!(tree.as_slice(), &[100.0]);
    }

    #[test]
    fn second_build_exhausts_capacity() {
        let cfg = config(3);
        let mut tree = IndexedBinaryTree::new(3).unwrap();
        let builder = LatticeBuilder::new(&cfg);
        builder.build(&mut tree).unwrap();
        let before = tree.clone();
        assert_eq!(
            builder.build(&mut tree),
            Err(Error::CapacityExceeded { capacity: 7 })
        );
        assert_eq!(tree, before);
    }

    #[test]
    fn partly_appended_tree_is_left_untouched() {
        let cfg = config(3);
        let mut tree = IndexedBinaryTree::new(3).unwrap();
        tree.append(1.0).unwrap();
        let before = tree.clone();
        assert!(matches!(
            LatticeBuilder::new(&cfg).build(&mut tree),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 1);
    }
}
