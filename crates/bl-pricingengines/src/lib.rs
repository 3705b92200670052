//! # bl-pricingengines
//!
//! Pricing engines built on the lattice methods of `bl-methods`.
//!
//! ## Engines
//!
//! - [`BinomialEngine`] — binomial lattice for European and American calls

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod binomial_engine;

pub use binomial_engine::{binomial_price, BinomialEngine};
