//! Core type system for SI quantities with compile-time dimensions and exact scales.
//!
//! `sidim-core` models a physical quantity as a number plus two pieces of type-level information:
//!
//! - A *dimension*: the exponents of the seven SI base dimensions, as a [`Dim`] of `typenum`
//!   integers implementing [`Dimension`].
//! - A *scale*: an exact, reduced fraction of the coherent unit, as a marker implementing
//!   [`Scale`] ([`ratio::Milli`] is `1/1000`).
//! - The number itself is any primitive [`Representation`], integer or floating point.
//!
//! [`Quantity<R, S, D>`] stores only the number. Adding, subtracting or comparing quantities of
//! different dimensions does not compile; mixing representations or scales is allowed and goes
//! through the common representation and the common scale ([`CommonScale`]), so that
//! `Kilometers + Meters` is a `Meters`.
//!
//! Most users should depend on `sidim` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions, with multiplication and division deriving new ones.
//! - Exact integer arithmetic on scaled counts (milliseconds, micrometers, ...) without a float
//!   round trip.
//! - Zero runtime overhead for dimension and scale tags (phantom types only).
//!
//! # What this crate does not try to solve
//!
//! - Offset scales (degrees Celsius) or logarithmic units.
//! - Telling angles and solid angles apart: both are dimensionless.
//! - Checked arithmetic: integer counts wrap, float counts follow IEEE-754.
//!
//! # Quick start
//!
//! ```rust
//! use sidim_core::units::length::{Kilometers, Meters};
//! use sidim_core::units::time::Seconds;
//!
//! let leg = Kilometers::<i32>::new(2) + Meters::<i32>::new(500);
//! assert_eq!(leg, Meters::<i32>::new(2_500));
//!
//! let speed = Meters::<f64>::new(100.0) / Seconds::<f64>::new(20.0);
//! assert_eq!(speed.count(), 5.0);
//! assert_eq!(speed.to_string(), "5 m·s^-1");
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `sidim-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! sidim-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw count only, see
//!   [`serde_with_scale`] for a self-describing form.
//!
//! # Panics and errors
//!
//! Core operations do not return `Result`. Scale arithmetic is evaluated in constants, so an
//! invalid or overflowing ratio is a build error. Integer division by a zero count panics, as
//! the primitive does. The only error type, [`DurationError`], belongs to the
//! [`core::time::Duration`] interop.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod dimension;
mod duration;
mod macros;
mod quantity;
pub mod ratio;
pub mod representation;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    Dim, DimInverse, DimProduct, DimQuotient, Dimension, DimensionDiv, DimensionInv, DimensionMul,
};
pub use duration::DurationError;
pub use quantity::Quantity;
pub use ratio::{Common, CommonOf, CommonScale, Ratio, Scale};
pub use representation::{ImplicitFrom, Promote, Promoted, Representation};

#[cfg(feature = "serde")]
pub use quantity::serde_with_scale;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined aliases (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined aliases (grouped by dimension).
pub mod units;

pub use units::amount;
pub use units::current;
pub use units::derived;
pub use units::length;
pub use units::luminous_intensity;
pub use units::mass;
pub use units::temperature;
pub use units::time;
