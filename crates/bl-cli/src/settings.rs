//! Configuration layering: defaults < TOML file < command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bl_core::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::cli::{Cli, ExerciseArg};

/// Partial configuration read from a TOML file.
///
/// Every field is optional; missing fields keep the value of the layer
/// below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub up_factor: Option<f64>,
    pub down_factor: Option<f64>,
    pub risk_free_interest: Option<f64>,
    pub initial_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub steps: Option<usize>,
    pub exercise: Option<ExerciseArg>,
}

impl FileConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("malformed configuration file")
    }

    /// Read and parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    fn apply(&self, mut builder: ConfigBuilder) -> ConfigBuilder {
        if let Some(v) = self.up_factor {
            builder = builder.with_up_factor(v);
        }
        if let Some(v) = self.down_factor {
            builder = builder.with_down_factor(v);
        }
        if let Some(v) = self.risk_free_interest {
            builder = builder.with_risk_free_interest(v);
        }
        if let Some(v) = self.initial_price {
            builder = builder.with_initial_price(v);
        }
        if let Some(v) = self.strike_price {
            builder = builder.with_strike_price(v);
        }
        if let Some(v) = self.steps {
            builder = builder.with_steps(v);
        }
        if let Some(v) = self.exercise {
            builder = builder.with_exercise(v.into());
        }
        builder
    }
}

impl From<&Cli> for FileConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            up_factor: cli.up,
            down_factor: cli.down,
            risk_free_interest: cli.rate,
            initial_price: cli.spot,
            strike_price: cli.strike,
            steps: cli.steps,
            exercise: cli.exercise,
        }
    }
}

/// Resolve the pricing configuration from `file` (if any) and the flags.
pub fn resolve(file: Option<&FileConfig>, cli: &Cli) -> Result<Config> {
    let mut builder = Config::builder();
    if let Some(file) = file {
        builder = file.apply(builder);
    }
    builder = FileConfig::from(cli).apply(builder);
    builder.build().context("invalid pricing parameters")
}
