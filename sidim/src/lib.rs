//! Compile-time checked SI quantities.
//!
//! `sidim` is the user-facing crate in this workspace. It re-exports the full API from `sidim-core` plus the
//! predefined aliases for the seven SI base dimensions, their prefix ladders and the named derived units.
//!
//! The core idea is: a value is always a `Quantity<R, S, D>`, where `R` is the stored number type, `S` an exact
//! scale ratio and `D` the vector of base-dimension exponents. Only the number exists at runtime; the scale and the
//! dimension are resolved by the type checker.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add meters to seconds).
//! - Derives the dimension of products and quotients (`Meters / Seconds` is a velocity).
//! - Keeps integer counts exact across prefixes: `1 mm + 1 m` is `1001 mm`, computed in integers, and the
//!   result is a `Millimeters`.
//!
//! # What this crate does not try to solve
//!
//! - Affine or logarithmic units (degrees Celsius, decibels).
//! - Overflow detection: integer counts wrap like the primitive's wrapping operations.
//! - Distinguishing dimensionless quantities: radians, steradians and plain ratios share one type.
//!
//! # Quick start
//!
//! Mix prefixes and representations of the same dimension:
//!
//! ```rust
//! use sidim::{Meters, Millimeters};
//!
//! let total = Millimeters::<i32>::new(1) + Meters::<u32>::new(1);
//! assert_eq!(total.count(), 1_001_u32);
//! assert_eq!(total, Millimeters::<u32>::new(1_001));
//! ```
//!
//! Compose derived dimensions (velocity = length / time):
//!
//! ```rust
//! use sidim::{Kilometers, MetersPerSecond, Seconds};
//!
//! let d = Kilometers::<f64>::new(1.0);
//! let t = Seconds::<f64>::new(100.0);
//! let v = d / t;
//! assert_eq!(v, MetersPerSecond::<f64>::new(10.0));
//!
//! let area: sidim::SquareMeters<i32> = sidim::Meters::<i32>::new(2) * sidim::Meters::<i32>::new(3);
//! assert_eq!(area.count(), 6);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! ```compile_fail
//! use sidim::{Meters, Seconds};
//!
//! let _ = Meters::<i32>::new(1) + Seconds::<i32>::new(1); // cannot add different dimensions
//! ```
//!
//! ```compile_fail
//! use sidim::{Meters, Seconds};
//!
//! let _ = Meters::<i32>::new(1) < Seconds::<i32>::new(1); // cannot compare different dimensions
//! ```
//!
//! ```compile_fail
//! use sidim::{Meters, Seconds};
//!
//! let _: Seconds<i32> = Meters::<i32>::new(1).convert(); // conversion keeps the dimension
//! ```
//!
//! ```compile_fail
//! use sidim::{Meters, SquareMeters};
//!
//! let _: SquareMeters<i32> = Meters::<i32>::new(2) / Meters::<i32>::new(1); // m/m is not an area
//! ```
//!
//! # Modules
//!
//! Aliases are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `sidim::length`, `sidim::mass`, `sidim::time`, `sidim::current`, `sidim::temperature`, `sidim::amount`,
//!   `sidim::luminous_intensity`: a generic alias and the atto to exa ladder of each base unit
//! - `sidim::time` also holds minutes, hours, days and weeks
//! - `sidim::derived` (area, velocity, force, energy, ... and the named SI units)
//! - `sidim::ratio` (the scale markers `Milli`, `Kilo`, `Ratio<N, D>`, ...)
//! - `sidim::dimension` (the dimension vectors)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `sidim-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw count only, see
//!   [`serde_with_scale`] for a self-describing form.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! sidim = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic does not return `Result`. Integer division wraps (`MIN / -1` is `MIN`) and division by a zero
//! count panics, as it does on the primitive.
//! Float counts follow IEEE-754 behavior. Conversions to and from [`core::time::Duration`] report
//! [`DurationError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use sidim_core::*;

/// Derive macro used by `sidim-core` to define scale marker types.
///
/// This macro expands in terms of `crate::Scale` and `crate::ratio::reduce`, so it is intended for use inside
/// `sidim-core` (or crates exposing the same crate-root API). Most users should write `Ratio<N, D>` instead.
pub use sidim_derive::Scale;

pub use sidim_core::ratio::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, One, Peta,
    Pico, Tera,
};

pub use sidim_core::units::amount;
pub use sidim_core::units::current;
pub use sidim_core::units::derived;
pub use sidim_core::units::length;
pub use sidim_core::units::luminous_intensity;
pub use sidim_core::units::mass;
pub use sidim_core::units::temperature;
pub use sidim_core::units::time;

pub use sidim_core::units::amount::*;
pub use sidim_core::units::current::*;
pub use sidim_core::units::derived::*;
pub use sidim_core::units::length::*;
pub use sidim_core::units::luminous_intensity::*;
pub use sidim_core::units::mass::*;
pub use sidim_core::units::temperature::*;
pub use sidim_core::units::time::*;
