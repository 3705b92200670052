//! CLI argument definitions.

use std::path::PathBuf;

use bl_core::ExerciseType;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// blpricer - price a call on a binomial lattice
#[derive(Parser, Debug, Default)]
#[command(name = "blpricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML); flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Up-move factor
    #[arg(long)]
    pub up: Option<f64>,

    /// Down-move factor
    #[arg(long)]
    pub down: Option<f64>,

    /// Continuously-compounded risk-free rate per step
    #[arg(long)]
    pub rate: Option<f64>,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Number of tree levels (1..=20)
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Exercise style
    #[arg(short, long, value_enum)]
    pub exercise: Option<ExerciseArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "BLPRICER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Exercise style accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseArg {
    /// Exercise at any node
    American,
    /// Exercise at expiry only
    European,
}

impl From<ExerciseArg> for ExerciseType {
    fn from(arg: ExerciseArg) -> Self {
        match arg {
            ExerciseArg::American => ExerciseType::American,
            ExerciseArg::European => ExerciseType::European,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Single report line
    #[default]
    Text,
    /// JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "blpricer", "--strike", "95", "-s", "6", "--exercise", "european", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.strike, Some(95.0));
        assert_eq!(cli.steps, Some(6));
        assert_eq!(cli.exercise, Some(ExerciseArg::European));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.up, None);
    }

    #[test]
    fn exercise_arg_maps_onto_core_type() {
        for (arg, name) in [
            (ExerciseArg::American, "american"),
            (ExerciseArg::European, "european"),
        ] {
            assert_eq!(ExerciseType::from(arg).name(), name);
            let parsed = ExerciseArg::from_str(name, false).unwrap();
            assert_eq!(parsed, arg);
        }
    }
}
