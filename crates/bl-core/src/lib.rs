//! # bl-core
//!
//! Core types, configuration, and error definitions for binomial-lattice.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – numeric type aliases, the error enum, the validated pricing
//! [`Config`], and the [`ExerciseType`] strategy used during backward
//! induction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Validated, immutable pricing configuration.
pub mod config;

/// Error types and the `ensure!` macro.
pub mod errors;

/// Exercise styles (European / American).
pub mod exercise;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A continuously-compounded rate expressed as a decimal (e.g. 0.02 = 2 %).
pub type Rate = Real;

/// A price or value.
pub type Price = Real;

/// A probability in [0, 1].
pub type Probability = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use config::{Config, ConfigBuilder, MAX_STEPS};
pub use errors::{Error, Result};
pub use exercise::ExerciseType;
