//! Length aliases.
//!
//! The coherent unit is the meter.
//!
//! ```rust
//! use sidim_core::units::length::{Kilometers, Meters};
//!
//! let run = Kilometers::<i32>::new(5) + Meters::<i32>::new(195);
//! assert_eq!(run, Meters::<i32>::new(5_195));
//! ```

use crate::ratio::One;
use crate::{dimension, Quantity};

/// A length counted in `S` meters.
pub type Length<R, S = One> = Quantity<R, S, dimension::Length>;

crate::prefix_ladder!(
    Length, "meter";
    Attometers, Femtometers, Picometers, Nanometers, Micrometers, Millimeters, Centimeters,
    Decimeters, Meters, Decameters, Hectometers, Kilometers, Megameters, Gigameters, Terameters,
    Petameters, Exameters,
);
