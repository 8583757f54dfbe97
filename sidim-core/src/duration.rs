//! Interop between time quantities and [`core::time::Duration`].
//!
//! A time quantity can be split into its raw parts `(count, num, den)` and rebuilt from them,
//! which is enough for any host clock type. For the standard [`Duration`] there are direct
//! conversions:
//!
//! ```rust
//! use core::time::Duration;
//! use sidim_core::units::time::{Milliseconds, Seconds};
//!
//! let timeout = Milliseconds::<u64>::new(1_500);
//! assert_eq!(timeout.to_duration(), Ok(Duration::from_millis(1_500)));
//!
//! let back = Seconds::<f64>::from_duration(Duration::from_millis(250)).unwrap();
//! assert_eq!(back.count(), 0.25);
//! ```
//!
//! Only quantities of the time dimension have these methods:
//!
//! ```compile_fail
//! use sidim_core::units::length::Meters;
//! let _ = Meters::<u64>::new(3).to_duration();
//! ```

use crate::dimension::Time;
use crate::ratio::{checked_divide, checked_reduce, Scale};
use crate::representation::Representation;
use crate::Quantity;
use core::time::Duration;
use num_traits::AsPrimitive;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Reasons a time quantity and a [`Duration`] cannot be converted into one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// `Duration` cannot represent negative spans.
    #[error("negative time quantity cannot be represented as a duration")]
    Negative,
    /// The count is NaN or infinite.
    #[error("time quantity is not finite")]
    NotFinite,
    /// The value does not fit the destination.
    #[error("time quantity out of range")]
    Overflow,
    /// A raw ratio had a zero term.
    #[error("ratio {num}/{den} is not a positive fraction")]
    InvalidRatio {
        /// Numerator as given.
        num: u64,
        /// Denominator as given.
        den: u64,
    },
}

impl<R: Representation, S: Scale> Quantity<R, S, Time> {
    /// Splits into `(count, num, den)`: the count and the reduced scale in seconds.
    ///
    /// ```rust
    /// use sidim_core::units::time::Minutes;
    /// assert_eq!(Minutes::<i32>::new(2).into_raw_parts(), (2, 60, 1));
    /// ```
    #[inline]
    pub const fn into_raw_parts(self) -> (R, u64, u64) {
        (self.count(), S::NUM, S::DEN)
    }

    /// Builds a quantity from a count expressed in a runtime scale of `num/den` seconds,
    /// rescaling it into `S`.
    ///
    /// ```rust
    /// use sidim_core::units::time::Milliseconds;
    /// let ms = Milliseconds::<i64>::from_raw_parts(3, 1, 1).unwrap();
    /// assert_eq!(ms.count(), 3_000);
    /// ```
    pub fn from_raw_parts(count: R, num: u64, den: u64) -> Result<Self, DurationError> {
        let from = checked_reduce(num, den).ok_or(DurationError::InvalidRatio { num, den })?;
        let (tf_num, tf_den) =
            checked_divide(from, (S::NUM, S::DEN)).ok_or(DurationError::Overflow)?;
        Ok(Self::new(count.rescale(tf_num, tf_den)))
    }

    /// Converts into a [`Duration`].
    ///
    /// Integer counts convert exactly down to the nanosecond (finer parts truncate); float
    /// counts go through [`Duration::try_from_secs_f64`].
    pub fn to_duration(self) -> Result<Duration, DurationError> {
        let result = if R::IS_FLOAT {
            float_to_duration(self.count().cast::<f64>(), S::NUM, S::DEN)
        } else {
            integer_to_duration(<R as AsPrimitive<i128>>::as_(self.count()), S::NUM, S::DEN)
        };
        if let Err(err) = &result {
            log::trace!(
                "rejected conversion of {} to Duration: {}",
                self.count(),
                err
            );
        }
        result
    }

    /// Converts from a [`Duration`] into this scale and representation.
    ///
    /// Integer representations truncate toward zero and fail with
    /// [`DurationError::Overflow`] when the count does not fit.
    pub fn from_duration(duration: Duration) -> Result<Self, DurationError> {
        if R::IS_FLOAT {
            let count = duration.as_secs_f64() * S::DEN as f64 / S::NUM as f64;
            let value = R::from_float(count);
            if !<R as AsPrimitive<f64>>::as_(value).is_finite() {
                log::trace!("{:?} does not fit the float representation", duration);
                return Err(DurationError::Overflow);
            }
            return Ok(Self::new(value));
        }

        let count = duration
            .as_nanos()
            .checked_mul(u128::from(S::DEN))
            .map(|scaled| scaled / (u128::from(S::NUM) * NANOS_PER_SEC))
            .and_then(|count| i128::try_from(count).ok())
            .ok_or(DurationError::Overflow)?;
        let value = R::from_integer(count);
        if <R as AsPrimitive<i128>>::as_(value) != count {
            log::trace!("{:?} does not fit the integer representation", duration);
            return Err(DurationError::Overflow);
        }
        Ok(Self::new(value))
    }
}

fn float_to_duration(count: f64, num: u64, den: u64) -> Result<Duration, DurationError> {
    if !count.is_finite() {
        return Err(DurationError::NotFinite);
    }
    if count < 0.0 {
        return Err(DurationError::Negative);
    }
    Duration::try_from_secs_f64(count * num as f64 / den as f64)
        .map_err(|_| DurationError::Overflow)
}

fn integer_to_duration(count: i128, num: u64, den: u64) -> Result<Duration, DurationError> {
    let count = u128::try_from(count).map_err(|_| DurationError::Negative)?;
    let nanos = count
        .checked_mul(u128::from(num))
        .and_then(|scaled| scaled.checked_mul(NANOS_PER_SEC))
        .ok_or(DurationError::Overflow)?
        / u128::from(den);
    let secs = u64::try_from(nanos / NANOS_PER_SEC).map_err(|_| DurationError::Overflow)?;
    Ok(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}
