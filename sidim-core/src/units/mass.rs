//! Mass aliases.
//!
//! The mass exponent counts grams, so the coherent SI unit, the kilogram, sits at scale
//! [`Kilo`] and the generic [`Mass`] alias defaults to it.
//!
//! ```rust
//! use sidim_core::units::mass::{Grams, Kilograms, Mass};
//!
//! let parcel: Mass<i32> = Kilograms::<i32>::new(2);
//! assert_eq!(parcel, Grams::<i32>::new(2_000));
//! ```

use crate::ratio::Kilo;
use crate::{dimension, Quantity};

/// A mass counted in `S` grams; kilograms unless stated otherwise.
pub type Mass<R, S = Kilo> = Quantity<R, S, dimension::Mass>;

crate::prefix_ladder!(
    Mass, "gram";
    Attograms, Femtograms, Picograms, Nanograms, Micrograms, Milligrams, Centigrams, Decigrams,
    Grams, Decagrams, Hectograms, Kilograms, Megagrams, Gigagrams, Teragrams, Petagrams,
    Exagrams,
);

/// Metric tonnes (`10^6 g`).
pub type Tonnes<R = i32> = Megagrams<R>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilogram_is_the_default_scale() {
        let m: Mass<f64> = Mass::new(1.5);
        assert_eq!(m, Kilograms::<f64>::new(1.5));
        assert_eq!(Grams::<i32>::ratio(), (1, 1));
    }

    #[test]
    fn tonnes_are_megagrams() {
        let t = Tonnes::<i64>::new(3);
        assert_eq!(t, Kilograms::<i64>::new(3_000));
    }
}
