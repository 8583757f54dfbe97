//! Luminous intensity aliases.

use crate::ratio::One;
use crate::{dimension, Quantity};

/// A luminous intensity counted in `S` candelas.
pub type LuminousIntensity<R, S = One> = Quantity<R, S, dimension::LuminousIntensity>;

crate::prefix_ladder!(
    LuminousIntensity, "candela";
    Attocandelas, Femtocandelas, Picocandelas, Nanocandelas, Microcandelas, Millicandelas,
    Centicandelas, Decicandelas, Candelas, Decacandelas, Hectocandelas, Kilocandelas,
    Megacandelas, Gigacandelas, Teracandelas, Petacandelas, Exacandelas,
);
