//! blpricer - command-line binomial lattice pricer.
//!
//! # Usage
//!
//! ```bash
//! # Default parameters (u = 1.2, d = 0.8, r = 0.02, S0 = 100, K = 110, 4 levels)
//! blpricer
//!
//! # European call, 10 levels, JSON output
//! blpricer --strike 95 --steps 10 --exercise european --format json
//!
//! # Parameters from a file, strike overridden on the command line
//! blpricer --config pricing.toml --strike 105
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;
mod settings;

use bl_pricingengines::BinomialEngine;
use cli::Cli;
use output::PricingReport;
use settings::FileConfig;

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let file = cli.config.as_deref().map(FileConfig::load).transpose()?;
    let config = settings::resolve(file.as_ref(), cli)?;
    debug!(?config, "resolved pricing configuration");

    let mut engine = BinomialEngine::new(config).context("cannot allocate lattice")?;
    let value = engine.run().context("pricing failed")?;
    let probability = engine
        .risk_neutral_probability()
        .context("engine finished without a probability")?;
    info!(
        value,
        probability,
        nodes = engine.price_tree().capacity(),
        "priced call"
    );

    PricingReport::new(&config, value, probability).render(cli.format)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "blpricer failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_reports_the_configured_value() {
        let cli = Cli {
            strike: Some(90.0),
            steps: Some(1),
            ..Cli::default()
        };
        assert_eq!(
            run(&cli).unwrap(),
            "-- Current Value Of Call Option = 10.000000"
        );
    }

    #[test]
    fn run_failure_carries_full_context_chain() {
        let cli = Cli {
            up: Some(0.8),
            ..Cli::default()
        };
        let message = format!("{:#}", run(&cli).unwrap_err());
        assert!(message.starts_with("invalid pricing parameters: "));
        assert!(message.contains("up_factor and down_factor must differ"));
    }
}
