//! Result reporting.

use anyhow::Result;
use bl_core::{Config, Probability, Real, Size};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Outcome of one pricing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingReport {
    pub value: Real,
    pub risk_neutral_probability: Probability,
    pub steps: Size,
    pub exercise: &'static str,
}

impl PricingReport {
    pub fn new(config: &Config, value: Real, probability: Probability) -> Self {
        Self {
            value,
            risk_neutral_probability: probability,
            steps: config.steps(),
            exercise: config.exercise().name(),
        }
    }

    /// Render the report in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => format!("-- Current Value Of Call Option = {:.6}", self.value),
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
        })
    }
}
