//! Binomial lattice engine for European and American calls.
//!
//! The engine sequences the three lattice stages over two trees it owns
//! exclusively:
//!
//! 1. risk-neutral probability from the factors and rate,
//! 2. forward construction of the price tree,
//! 3. backward induction into the value tree.
//!
//! An engine prices once. The price tree is filled by appending, so a second
//! [`run`](BinomialEngine::run) finds it full and fails with
//! [`Error::CapacityExceeded`](bl_core::Error::CapacityExceeded); build a new
//! engine (or call [`binomial_price`]) to price again.

use bl_core::{ensure, Config, Probability, Real, Result, MAX_STEPS};
use bl_methods::{risk_neutral_probability, IndexedBinaryTree, LatticeBuilder, OptionValuator};

/// Binomial lattice pricing engine.
#[derive(Debug, Clone)]
pub struct BinomialEngine {
    config: Config,
    price_tree: IndexedBinaryTree<Real>,
    value_tree: IndexedBinaryTree<Real>,
    probability: Option<Probability>,
}

impl BinomialEngine {
    /// Allocate an engine whose trees have `config.steps()` levels.
    pub fn new(config: Config) -> Result<Self> {
        let steps = config.steps();
        ensure!(
            (1..=MAX_STEPS).contains(&steps),
            "steps must lie in [1, {MAX_STEPS}], got {steps}"
        );
        Ok(Self {
            config,
            price_tree: IndexedBinaryTree::new(steps)?,
            value_tree: IndexedBinaryTree::new(steps)?,
            probability: None,
        })
    }

    /// Price the call and return the root value.
    pub fn run(&mut self) -> Result<Real> {
        let p = risk_neutral_probability(&self.config)?;
        LatticeBuilder::new(&self.config).build(&mut self.price_tree)?;
        let value =
            OptionValuator::new(&self.config, p).value(&self.price_tree, &mut self.value_tree)?;
        self.probability = Some(p);
        Ok(value)
    }

    /// The configuration being priced.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying prices, breadth-first. All zero before [`run`](Self::run).
    pub fn price_tree(&self) -> &IndexedBinaryTree<Real> {
        &self.price_tree
    }

    /// Option values, breadth-first. All zero before [`run`](Self::run).
    pub fn value_tree(&self) -> &IndexedBinaryTree<Real> {
        &self.value_tree
    }

    /// Risk-neutral probability used by the last successful run.
    pub fn risk_neutral_probability(&self) -> Option<Probability> {
        self.probability
    }
}

/// Price `config` on a fresh engine.
///
/// # Example
/// ```
/// use bl_core::Config;
/// use bl_pricingengines::binomial_price;
///
/// let config = Config::builder().with_steps(1).with_strike_price(90.0).build().unwrap();
/// assert_eq!(binomial_price(&config).unwrap(), 10.0);
/// ```
pub fn binomial_price(config: &Config) -> Result<Real> {
    BinomialEngine::new(*config)?.run()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bl_core::{Error, ExerciseType};

    #[test]
    fn default_config_prices() {
        let mut engine = BinomialEngine::new(Config::DEFAULT).unwrap();
        assert_eq!(engine.risk_neutral_probability(), None);
        let v = engine.run().unwrap();
        assert_relative_eq!(v, 11.868231240623798, max_relative = 1e-10);
        assert_eq!(engine.value_tree().get(0), Ok(v));
        assert!(engine.price_tree().is_full());
        let p = engine.risk_neutral_probability().unwrap();
        assert_relative_eq!(p, (0.02_f64.exp() - 0.8) / 0.4, max_relative = 1e-15);
    }

    #[test]
    fn second_run_fails() {
        let mut engine = BinomialEngine::new(Config::DEFAULT).unwrap();
        let first = engine.run().unwrap();
        assert_eq!(
            engine.run(),
            Err(Error::CapacityExceeded { capacity: 15 })
        );
        // the first result is still readable
        assert_eq!(engine.value_tree().get(0), Ok(first));
    }

    #[test]
    fn trees_share_shape() {
        let config = Config::builder().with_steps(6).build().unwrap();
        let engine = BinomialEngine::new(config).unwrap();
        assert_eq!(engine.price_tree().capacity(), 63);
        assert_eq!(
            engine.price_tree().leaf_range(),
            engine.value_tree().leaf_range()
        );
    }

    #[test]
    fn arbitrage_config_never_prices() {
        let config = Config::builder()
            .with_risk_free_interest(0.5)
            .build()
            .unwrap();
        let mut engine = BinomialEngine::new(config).unwrap();
        assert!(matches!(
            engine.run(),
            Err(Error::ArbitrageViolation { .. })
        ));
        assert!(engine.price_tree().is_empty());
    }

    #[test]
    fn european_equals_american_for_positive_rates() {
        let american = Config::builder().with_steps(8).build().unwrap();
        let european = american
            .to_builder()
            .with_exercise(ExerciseType::European)
            .build()
            .unwrap();
        let am = binomial_price(&american).unwrap();
        let eu = binomial_price(&european).unwrap();
        assert_relative_eq!(am, eu, max_relative = 1e-12);
    }
}
