//! Thermodynamic temperature aliases.
//!
//! Only kelvin multiples are expressible: a scale is a ratio, so offset scales such as
//! degrees Celsius have no alias.

use crate::ratio::One;
use crate::{dimension, Quantity};

/// A temperature counted in `S` kelvins.
pub type Temperature<R, S = One> = Quantity<R, S, dimension::Temperature>;

crate::prefix_ladder!(
    Temperature, "kelvin";
    Attokelvins, Femtokelvins, Picokelvins, Nanokelvins, Microkelvins, Millikelvins,
    Centikelvins, Decikelvins, Kelvins, Decakelvins, Hectokelvins, Kilokelvins, Megakelvins,
    Gigakelvins, Terakelvins, Petakelvins, Exakelvins,
);
