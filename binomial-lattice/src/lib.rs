//! # binomial-lattice
//!
//! Binomial lattice pricing of European and American calls over an
//! array-backed complete binary tree.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `bl-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use binomial_lattice::core::Config;
//! use binomial_lattice::pricingengines::BinomialEngine;
//!
//! let config = Config::builder().with_strike_price(100.0).build().unwrap();
//! let mut engine = BinomialEngine::new(config).unwrap();
//! let value = engine.run().unwrap();
//! assert!(value > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, configuration, and error definitions.
pub use bl_core as core;

/// Array-backed binary tree and lattice methods.
pub use bl_methods as methods;

/// Pricing engines.
pub use bl_pricingengines as pricingengines;
