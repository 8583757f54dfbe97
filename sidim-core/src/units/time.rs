//! Time aliases.
//!
//! The coherent unit is the second. Besides the prefix ladder, the civil units [`Minute`],
//! [`Hour`], [`Day`] and [`Week`] are provided as scales (a day is taken as `86_400 s`, leap
//! seconds ignored). They convert with `From` to one another and to every SI prefix.
//!
//! ```rust
//! use sidim_core::units::time::{Hours, Milliseconds, Minutes, Seconds};
//!
//! let shift: Minutes<i32> = Hours::<i32>::new(8).into();
//! assert_eq!(shift.count(), 480);
//! assert!(Minutes::<i32>::new(1) > Seconds::<i32>::new(59));
//!
//! let timeout: Milliseconds<i64> = Minutes::<i64>::new(2).into();
//! assert_eq!(timeout.count(), 120_000);
//! ```

use crate::ratio::{
    Atto, Centi, Deca, Deci, Exa, Femto, Giga, Hecto, Kilo, Mega, Micro, Milli, Nano, One, Peta,
    Pico, Tera,
};
use crate::{dimension, Quantity};
use sidim_derive::Scale;

/// A time span counted in `S` seconds.
pub type Time<R, S = One> = Quantity<R, S, dimension::Time>;

crate::prefix_ladder!(
    Time, "second";
    Attoseconds, Femtoseconds, Picoseconds, Nanoseconds, Microseconds, Milliseconds, Centiseconds,
    Deciseconds, Seconds, Decaseconds, Hectoseconds, Kiloseconds, Megaseconds, Gigaseconds,
    Teraseconds, Petaseconds, Exaseconds,
);

/// Sixty seconds.
#[derive(Clone, Copy, Debug, Scale)]
#[scale(num = 60)]
pub enum Minute {}

/// Sixty minutes.
#[derive(Clone, Copy, Debug, Scale)]
#[scale(num = 3_600)]
pub enum Hour {}

/// Twenty-four hours.
#[derive(Clone, Copy, Debug, Scale)]
#[scale(num = 86_400)]
pub enum Day {}

/// Seven days.
#[derive(Clone, Copy, Debug, Scale)]
#[scale(num = 604_800)]
pub enum Week {}

/// Minutes.
pub type Minutes<R = i32> = Time<R, Minute>;
/// Hours.
pub type Hours<R = i32> = Time<R, Hour>;
/// Days.
pub type Days<R = i32> = Time<R, Day>;
/// Weeks.
pub type Weeks<R = i32> = Time<R, Week>;

crate::impl_scale_conversions!(dimension::Time => Minute, Hour, Day, Week);
crate::impl_scale_conversions!(
    dimension::Time => [Minute, Hour, Day, Week] with [
        Atto, Femto, Pico, Nano, Micro, Milli, Centi, Deci, One, Deca, Hecto, Kilo, Mega, Giga,
        Tera, Peta, Exa,
    ]
);

crate::impl_common_scale!(Minute, Hour, Day, Week);
crate::impl_common_scale!(
    [Minute, Hour, Day, Week] with [
        Atto, Femto, Pico, Nano, Micro, Milli, Centi, Deci, One, Deca, Hecto, Kilo, Mega, Giga,
        Tera, Peta, Exa,
    ]
);
