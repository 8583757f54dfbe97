//! Electric current aliases.

use crate::ratio::One;
use crate::{dimension, Quantity};

/// A current counted in `S` amperes.
pub type Current<R, S = One> = Quantity<R, S, dimension::Current>;

crate::prefix_ladder!(
    Current, "ampere";
    Attoamperes, Femtoamperes, Picoamperes, Nanoamperes, Microamperes, Milliamperes,
    Centiamperes, Deciamperes, Amperes, Decaamperes, Hectoamperes, Kiloamperes, Megaamperes,
    Gigaamperes, Teraamperes, Petaamperes, Exaamperes,
);
