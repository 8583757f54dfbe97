//! Amount of substance aliases.

use crate::ratio::One;
use crate::{dimension, Quantity};

/// An amount of substance counted in `S` moles.
pub type Amount<R, S = One> = Quantity<R, S, dimension::Amount>;

crate::prefix_ladder!(
    Amount, "mole";
    Attomoles, Femtomoles, Picomoles, Nanomoles, Micromoles, Millimoles, Centimoles, Decimoles,
    Moles, Decamoles, Hectomoles, Kilomoles, Megamoles, Gigamoles, Teramoles, Petamoles,
    Examoles,
);
