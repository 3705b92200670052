//! Pricing configuration.
//!
//! A [`Config`] is immutable once built. The only way to obtain one other
//! than [`Config::DEFAULT`] is through [`ConfigBuilder::build`], which
//! validates every field, so downstream code can rely on a `Config` being
//! physically meaningful.

use crate::{ensure, errors::Result, ExerciseType, Price, Rate, Real, Size};

/// Largest accepted number of lattice levels.
///
/// The engine allocates two trees of `2^steps − 1` nodes each.
pub const MAX_STEPS: Size = 20;

/// Market and contract parameters of a binomial lattice call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    up_factor: Real,
    down_factor: Real,
    risk_free_interest: Rate,
    initial_price: Price,
    strike_price: Price,
    steps: Size,
    exercise: ExerciseType,
}

impl Config {
    /// Default parameters: `u = 1.2`, `d = 0.8`, `r = 0.02`, `S0 = 100`,
    /// `K = 110`, 4 levels, American exercise.
    pub const DEFAULT: Config = Config {
        up_factor: 1.2,
        down_factor: 0.8,
        risk_free_interest: 0.02,
        initial_price: 100.0,
        strike_price: 110.0,
        steps: 4,
        exercise: ExerciseType::American,
    };

    /// Start a builder seeded with [`Config::DEFAULT`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Multiplicative factor of an up move.
    pub fn up_factor(&self) -> Real {
        self.up_factor
    }

    /// Multiplicative factor of a down move.
    pub fn down_factor(&self) -> Real {
        self.down_factor
    }

    /// Continuously-compounded risk-free rate per step.
    pub fn risk_free_interest(&self) -> Rate {
        self.risk_free_interest
    }

    /// Spot price of the underlying at the root.
    pub fn initial_price(&self) -> Price {
        self.initial_price
    }

    /// Strike of the call.
    pub fn strike_price(&self) -> Price {
        self.strike_price
    }

    /// Number of tree levels (the root counts as one).
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Exercise style.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Per-step discount factor `e^{−r}`.
    pub fn discount(&self) -> Real {
        (-self.risk_free_interest).exp()
    }

    /// A builder pre-filled with this configuration, for deriving variants.
    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder { config: *self }
    }

    fn validate(&self) -> Result<()> {
        let Config {
            up_factor: u,
            down_factor: d,
            risk_free_interest: r,
            initial_price: s0,
            strike_price: k,
            steps,
            ..
        } = *self;

        ensure!(u.is_finite() && u > 0.0, "up_factor must be positive, got {u}");
        ensure!(d.is_finite() && d > 0.0, "down_factor must be positive, got {d}");
        ensure!(u != d, "up_factor and down_factor must differ, both are {u}");
        ensure!(r.is_finite(), "risk_free_interest must be finite, got {r}");
        ensure!(
            s0.is_finite() && s0 > 0.0,
            "initial_price must be positive, got {s0}"
        );
        ensure!(
            k.is_finite() && k >= 0.0,
            "strike_price must be non-negative, got {k}"
        );
        ensure!(
            (1..=MAX_STEPS).contains(&steps),
            "steps must lie in [1, {MAX_STEPS}], got {steps}"
        );

        // steps ≤ MAX_STEPS, so the exponent fits in i32.
        let top = s0 * u.max(d).powi(steps as i32 - 1);
        ensure!(
            top.is_finite(),
            "lattice prices overflow: {s0} * {}^{} is not finite",
            u.max(d),
            steps - 1
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}

/// Builder for [`Config`].
///
/// # Example
/// ```
/// use bl_core::{Config, ExerciseType};
/// let config = Config::builder()
///     .with_strike_price(95.0)
///     .with_steps(6)
///     .with_exercise(ExerciseType::European)
///     .build()
///     .unwrap();
/// assert_eq!(config.steps(), 6);
/// assert_eq!(config.up_factor(), Config::DEFAULT.up_factor());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the up factor.
    pub fn with_up_factor(mut self, up_factor: Real) -> Self {
        self.config.up_factor = up_factor;
        self
    }

    /// Set the down factor.
    pub fn with_down_factor(mut self, down_factor: Real) -> Self {
        self.config.down_factor = down_factor;
        self
    }

    /// Set the risk-free rate.
    pub fn with_risk_free_interest(mut self, rate: Rate) -> Self {
        self.config.risk_free_interest = rate;
        self
    }

    /// Set the spot price.
    pub fn with_initial_price(mut self, price: Price) -> Self {
        self.config.initial_price = price;
        self
    }

    /// Set the strike.
    pub fn with_strike_price(mut self, strike: Price) -> Self {
        self.config.strike_price = strike;
        self
    }

    /// Set the number of tree levels.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.config.steps = steps;
        self
    }

    /// Set the exercise style.
    pub fn with_exercise(mut self, exercise: ExerciseType) -> Self {
        self.config.exercise = exercise;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
