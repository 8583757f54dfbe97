//! Named aliases over [`Quantity`](crate::Quantity).
//!
//! Each base dimension has a module with a generic alias (`Length<R, S>`) and the SI prefix
//! ladder from atto to exa as plural aliases whose representation defaults to `i32`
//! (`Millimeters`, `Kilometers`, ...). [`derived`] holds the derived dimensions.
//!
//! Quantities at any two prefixes of the same dimension convert into one another with `From`,
//! provided the representation change is implicit:
//!
//! ```rust
//! use sidim_core::units::length::{Kilometers, Meters};
//! use sidim_core::units::mass::{Grams, Milligrams};
//!
//! let m: Meters<i64> = Kilometers::<i64>::new(3).into();
//! assert_eq!(m.count(), 3_000);
//!
//! let mg: Milligrams<f64> = Grams::<i32>::new(2).into();
//! assert_eq!(mg.count(), 2_000.0);
//! ```
//!
//! These are aliases, not new types: `Meters<i32>` and
//! `Quantity<i32, One, dimension::Length>` are the same type.

pub mod amount;
pub mod current;
pub mod derived;
pub mod length;
pub mod luminous_intensity;
pub mod mass;
pub mod temperature;
pub mod time;

use crate::ratio::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, One, Peta,
    Pico, Tera,
};

crate::impl_scale_conversions!(
    <D> Atto, Femto, Pico, Nano, Micro, Milli, Centi, Deci, One, Deca, Hecto, Kilo, Mega, Giga,
    Tera, Peta, Exa,
);
