//! Numeric representations of a quantity's count.
//!
//! A [`Representation`] is the primitive that stores a count: `i8` through `i64`, `u8` through `u64`,
//! `f32` or `f64`. Mixing two representations goes through [`Promote`], which picks the common
//! representation:
//!
//! | operands                              | common representation                 |
//! |---------------------------------------|---------------------------------------|
//! | same type                             | that type                             |
//! | any float involved                    | the widest float involved             |
//! | two integers of the same signedness   | the wider one                         |
//! | signed and unsigned                   | the unsigned one if at least as wide, else the signed one |
//!
//! Casts use Rust's `as` semantics: integer narrowing wraps, float to integer truncates toward zero
//! (saturating at the bounds). Integer arithmetic on counts wraps, division included; float arithmetic
//! is IEEE-754.

use core::fmt::{Debug, Display};
use num_traits::{AsPrimitive, Num};

/// A primitive numeric type usable as the count of a quantity.
pub trait Representation:
    Num + Copy + PartialOrd + Debug + Display + AsPrimitive<i128> + AsPrimitive<f64> + 'static
{
    /// `true` for `f32` and `f64`.
    const IS_FLOAT: bool;

    /// `value as Self`.
    fn from_integer(value: i128) -> Self;

    /// `value as Self`.
    fn from_float(value: f64) -> Self;

    /// Converts to another representation with `as` semantics.
    #[inline]
    fn cast<T: Representation>(self) -> T {
        if Self::IS_FLOAT {
            T::from_float(<Self as AsPrimitive<f64>>::as_(self))
        } else {
            T::from_integer(<Self as AsPrimitive<i128>>::as_(self))
        }
    }

    /// `self * num / den`; integers compute through `i128` and truncate toward zero.
    fn rescale(self, num: u64, den: u64) -> Self;

    /// Addition, wrapping for integers.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction, wrapping for integers.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication, wrapping for integers.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Negation, wrapping for integers (unsigned values wrap modulo `2^n`).
    fn wrapping_neg(self) -> Self;

    /// Division, wrapping for integers: `MIN / -1` is `MIN`. Integer division by zero panics.
    fn wrapping_div(self, rhs: Self) -> Self;
}

/// The common representation of `Self` and `Rhs`.
pub trait Promote<Rhs: Representation>: Representation {
    /// Common representation.
    type Output: Representation;
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Marker for representation changes that may happen without an explicit `convert`.
///
/// Implemented for every pair except a float source with an integer destination.
pub trait ImplicitFrom<Src: Representation>: Representation {}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Representation for $t {
                const IS_FLOAT: bool = false;

                #[inline]
                fn from_integer(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn from_float(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn rescale(self, num: u64, den: u64) -> Self {
                    ((self as i128).wrapping_mul(num as i128) / (den as i128)) as $t
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    <$t>::wrapping_div(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Representation for $t {
                const IS_FLOAT: bool = true;

                #[inline]
                fn from_integer(value: i128) -> Self {
                    value as $t
                }

                #[inline]
                fn from_float(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn rescale(self, num: u64, den: u64) -> Self {
                    self * (num as $t) / (den as $t)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    -self
                }

                #[inline]
                fn wrapping_div(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float!(f32, f64);

macro_rules! promote {
    ($($lhs:ty => [$($rhs:ty => $out:ty),* $(,)?];)*) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*)*
    };
}

promote! {
    i8 => [i8 => i8, i16 => i16, i32 => i32, i64 => i64, u8 => u8, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    i16 => [i8 => i16, i16 => i16, i32 => i32, i64 => i64, u8 => i16, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    i32 => [i8 => i32, i16 => i32, i32 => i32, i64 => i64, u8 => i32, u16 => i32, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    i64 => [i8 => i64, i16 => i64, i32 => i64, i64 => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64, f32 => f32, f64 => f64];
    u8 => [i8 => u8, i16 => i16, i32 => i32, i64 => i64, u8 => u8, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    u16 => [i8 => u16, i16 => u16, i32 => i32, i64 => i64, u8 => u16, u16 => u16, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    u32 => [i8 => u32, i16 => u32, i32 => u32, i64 => i64, u8 => u32, u16 => u32, u32 => u32, u64 => u64, f32 => f32, f64 => f64];
    u64 => [i8 => u64, i16 => u64, i32 => u64, i64 => u64, u8 => u64, u16 => u64, u32 => u64, u64 => u64, f32 => f32, f64 => f64];
    f32 => [i8 => f32, i16 => f32, i32 => f32, i64 => f32, u8 => f32, u16 => f32, u32 => f32, u64 => f32, f32 => f32, f64 => f64];
    f64 => [i8 => f64, i16 => f64, i32 => f64, i64 => f64, u8 => f64, u16 => f64, u32 => f64, u64 => f64, f32 => f64, f64 => f64];
}

macro_rules! implicit_from {
    (@impl $dst:ty, [$($src:ty),*]) => {
        $(impl ImplicitFrom<$src> for $dst {})*
    };
    ($srcs:tt => $($dst:ty),*) => {
        $(implicit_from!(@impl $dst, $srcs);)*
    };
}

implicit_from!([i8, i16, i32, i64, u8, u16, u32, u64] => i8, i16, i32, i64, u8, u16, u32, u64);
implicit_from!([i8, i16, i32, i64, u8, u16, u32, u64, f32, f64] => f32, f64);
