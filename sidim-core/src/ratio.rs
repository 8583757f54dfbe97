//! Scale ratios.
//!
//! A scale is the multiple of the coherent unit that one count of a quantity stands for: a
//! millimetre count uses the ratio `1/1000` on the length axis. Scales are zero-sized types
//! implementing [`Scale`], whose `NUM`/`DEN` constants are always stored in lowest terms.
//!
//! ```rust
//! use sidim_core::ratio::{Common, Deca, Deci, Ratio, Scale};
//!
//! assert_eq!((<Ratio<2, 4>>::NUM, <Ratio<2, 4>>::DEN), (1, 2));
//! assert_eq!((<Common<Deca, Deci>>::NUM, <Common<Deca, Deci>>::DEN), (1, 10));
//! ```
//!
//! [`CommonScale`] names the same scale as a concrete type, so that mixed-scale arithmetic lands on
//! an ordinary alias such as `Millimeters`:
//!
//! ```rust
//! use core::any::TypeId;
//! use sidim_core::ratio::{CommonOf, Kilo, Milli};
//!
//! assert_eq!(TypeId::of::<CommonOf<Kilo, Milli>>(), TypeId::of::<Milli>());
//! ```
//!
//! Both terms are `u64`, so a scale is positive by construction. A zero term, or an overflow while
//! combining two scales, aborts constant evaluation and the program does not build:
//!
//! ```compile_fail
//! use sidim_core::ratio::{Ratio, Scale};
//!
//! const BROKEN: u64 = <Ratio<1, 0>>::DEN;
//! ```

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

/// A unit scale relative to the coherent unit of its dimension.
pub trait Scale: Copy + Debug + 'static {
    /// Numerator, in lowest terms.
    const NUM: u64;
    /// Denominator, in lowest terms.
    const DEN: u64;
}

/// The literal scale `N/D`.
///
/// `Ratio<2, 4>` and `Ratio<1, 2>` are different types that report the same reduced ratio.
#[derive(Clone, Copy, Debug)]
pub enum Ratio<const N: u64, const D: u64 = 1> {}

impl<const N: u64, const D: u64> Scale for Ratio<N, D> {
    const NUM: u64 = reduce(N, D).0;
    const DEN: u64 = reduce(N, D).1;
}

/// The common scale of two scales.
///
/// The numerator is the GCD of both numerators and the denominator is
/// `(den_a / gcd(den_a, den_b)) * den_b`, reduced.
#[derive(Clone, Copy, Debug)]
pub struct Common<A: Scale, B: Scale>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for Common<A, B> {
    const NUM: u64 = common((A::NUM, A::DEN), (B::NUM, B::DEN)).0;
    const DEN: u64 = common((A::NUM, A::DEN), (B::NUM, B::DEN)).1;
}

/// The concrete type of the common scale of `Self` and `Rhs`.
///
/// Mixed-scale addition, subtraction, multiplication and division report their result at
/// `CommonOf<S1, S2>`. Every scale is its own common scale; the SI prefixes and the civil time
/// scales are paired with each other, and the output is always one of the canonical markers
/// (`CommonOf<Kilo, Milli>` is `Milli`, `CommonOf<Hour, Minute>` is `Minute`).
///
/// Two `Ratio`s outside these tables have no `CommonScale` impl; bring them together with
/// [`Quantity::with_common`](crate::Quantity::with_common) first. A scale marker declared in
/// another crate may implement `CommonScale` itself, or through
/// [`impl_common_scale!`](crate::impl_common_scale).
pub trait CommonScale<Rhs: Scale>: Scale {
    /// The common scale. Its ratio equals the ratio of [`Common<Self, Rhs>`].
    type Output: Scale;
}

/// Shorthand for `<A as CommonScale<B>>::Output`.
pub type CommonOf<A, B> = <A as CommonScale<B>>::Output;

impl<S: Scale> CommonScale<S> for S {
    type Output = S;
}

/// The factor that turns a count at scale `From` into a count at scale `To`.
pub(crate) struct Transform<From, To>(PhantomData<(From, To)>);

impl<From: Scale, To: Scale> Transform<From, To> {
    pub(crate) const RATIO: (u64, u64) = divide((From::NUM, From::DEN), (To::NUM, To::DEN));
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-level fraction arithmetic
// ─────────────────────────────────────────────────────────────────────────────

/// Greatest common divisor; `gcd(0, n) == n`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduces `num/den` to lowest terms, or `None` if either term is zero.
pub const fn checked_reduce(num: u64, den: u64) -> Option<(u64, u64)> {
    if num == 0 || den == 0 {
        return None;
    }
    let g = gcd(num, den);
    Some((num / g, den / g))
}

/// Reduces `num/den` to lowest terms.
///
/// # Panics
///
/// Panics if either term is zero. In constant context this is a build error.
pub const fn reduce(num: u64, den: u64) -> (u64, u64) {
    match checked_reduce(num, den) {
        Some(ratio) => ratio,
        None => panic!("scale ratio terms must be non-zero"),
    }
}

/// The common ratio of `lhs` and `rhs` (see [`Common`]). Both inputs must be in lowest terms.
///
/// # Panics
///
/// Panics if the denominator overflows `u64`. In constant context this is a build error.
pub const fn common(lhs: (u64, u64), rhs: (u64, u64)) -> (u64, u64) {
    let gcd_num = gcd(lhs.0, rhs.0);
    let gcd_den = gcd(lhs.1, rhs.1);
    match (lhs.1 / gcd_den).checked_mul(rhs.1) {
        Some(den) => reduce(gcd_num, den),
        None => panic!("common scale ratio overflows u64"),
    }
}

/// `lhs / rhs`, cross-cancelled before multiplying, or `None` on a zero term or overflow.
pub const fn checked_divide(lhs: (u64, u64), rhs: (u64, u64)) -> Option<(u64, u64)> {
    if lhs.0 == 0 || lhs.1 == 0 || rhs.0 == 0 || rhs.1 == 0 {
        return None;
    }
    let gcd_num = gcd(lhs.0, rhs.0);
    let gcd_den = gcd(lhs.1, rhs.1);
    let num = (lhs.0 / gcd_num).checked_mul(rhs.1 / gcd_den);
    let den = (lhs.1 / gcd_den).checked_mul(rhs.0 / gcd_num);
    match (num, den) {
        (Some(num), Some(den)) => checked_reduce(num, den),
        _ => None,
    }
}

/// `lhs / rhs` in lowest terms.
///
/// # Panics
///
/// Panics on a zero term or if the result overflows `u64`. In constant context this is a build error.
pub const fn divide(lhs: (u64, u64), rhs: (u64, u64)) -> (u64, u64) {
    match checked_divide(lhs, rhs) {
        Some(ratio) => ratio,
        None => panic!("scale ratio quotient overflows u64"),
    }
}

/// Writes ` (num/den)`, or ` (num)` for whole ratios; writes nothing for `1/1`.
pub(crate) fn write_scale(f: &mut Formatter<'_>, num: u64, den: u64) -> fmt::Result {
    match (num, den) {
        (1, 1) => Ok(()),
        (num, 1) => write!(f, " ({})", num),
        (num, den) => write!(f, " ({}/{})", num, den),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SI prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// `10^-18`
pub type Atto = Ratio<1, 1_000_000_000_000_000_000>;
/// `10^-15`
pub type Femto = Ratio<1, 1_000_000_000_000_000>;
/// `10^-12`
pub type Pico = Ratio<1, 1_000_000_000_000>;
/// `10^-9`
pub type Nano = Ratio<1, 1_000_000_000>;
/// `10^-6`
pub type Micro = Ratio<1, 1_000_000>;
/// `10^-3`
pub type Milli = Ratio<1, 1_000>;
/// `10^-2`
pub type Centi = Ratio<1, 100>;
/// `10^-1`
pub type Deci = Ratio<1, 10>;
/// The coherent unit.
pub type One = Ratio<1>;
/// `10^1`
pub type Deca = Ratio<10>;
/// `10^2`
pub type Hecto = Ratio<100>;
/// `10^3`
pub type Kilo = Ratio<1_000>;
/// `10^6`
pub type Mega = Ratio<1_000_000>;
/// `10^9`
pub type Giga = Ratio<1_000_000_000>;
/// `10^12`
pub type Tera = Ratio<1_000_000_000_000>;
/// `10^15`
pub type Peta = Ratio<1_000_000_000_000_000>;
/// `10^18`
pub type Exa = Ratio<1_000_000_000_000_000_000>;

crate::impl_common_scale!(
    Atto, Femto, Pico, Nano, Micro, Milli, Centi, Deci, One, Deca, Hecto, Kilo, Mega, Giga, Tera,
    Peta, Exa,
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ratio_of<S: Scale>() -> (u64, u64) {
        (S::NUM, S::DEN)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reduction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 1), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn ratio_is_stored_in_lowest_terms() {
        assert_eq!(ratio_of::<Ratio<2, 4>>(), (1, 2));
        assert_eq!(ratio_of::<Ratio<1000, 10>>(), (100, 1));
        assert_eq!(ratio_of::<Ratio<3>>(), (3, 1));
    }

    #[test]
    fn prefixes_are_powers_of_ten() {
        assert_eq!(ratio_of::<Atto>(), (1, 1_000_000_000_000_000_000));
        assert_eq!(ratio_of::<Milli>(), (1, 1_000));
        assert_eq!(ratio_of::<One>(), (1, 1));
        assert_eq!(ratio_of::<Deca>(), (10, 1));
        assert_eq!(ratio_of::<Exa>(), (1_000_000_000_000_000_000, 1));
    }

    #[test]
    fn zero_terms_are_rejected() {
        assert_eq!(checked_reduce(0, 3), None);
        assert_eq!(checked_reduce(3, 0), None);
        assert_eq!(checked_divide((1, 1), (0, 1)), None);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Common ratio
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn common_of_equal_scales_is_that_scale() {
        assert_eq!(ratio_of::<Common<Milli, Milli>>(), (1, 1_000));
        assert_eq!(ratio_of::<Common<Kilo, Kilo>>(), (1_000, 1));
    }

    #[test]
    fn common_follows_gcd_over_cross_denominator() {
        assert_eq!(ratio_of::<Common<Milli, One>>(), (1, 1_000));
        assert_eq!(ratio_of::<Common<One, Milli>>(), (1, 1_000));
        assert_eq!(ratio_of::<Common<Deca, Deci>>(), (1, 10));
        assert_eq!(ratio_of::<Common<Deca, One>>(), (1, 1));
        assert_eq!(ratio_of::<Common<Deci, Milli>>(), (1, 1_000));
        assert_eq!(ratio_of::<Common<Kilo, Mega>>(), (1_000, 1));
        assert_eq!(ratio_of::<Common<Ratio<2, 3>, Ratio<4, 9>>>(), (2, 9));
        assert_eq!(ratio_of::<Common<Atto, Femto>>(), (1, 1_000_000_000_000_000_000));
    }

    #[test]
    fn common_nests() {
        assert_eq!(ratio_of::<Common<Common<Kilo, Deca>, Milli>>(), (1, 1_000));
    }

    fn same_type<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    #[test]
    fn common_scale_of_prefixes_is_the_finer_prefix() {
        assert!(same_type::<CommonOf<Milli, One>, Milli>());
        assert!(same_type::<CommonOf<One, Milli>, Milli>());
        assert!(same_type::<CommonOf<Deca, Deci>, Deci>());
        assert!(same_type::<CommonOf<Exa, Atto>, Atto>());
        assert!(same_type::<CommonOf<Kilo, Mega>, Kilo>());
    }

    #[test]
    fn common_scale_of_a_scale_with_itself_is_that_scale() {
        assert!(same_type::<CommonOf<Kilo, Kilo>, Kilo>());
        assert!(same_type::<CommonOf<Ratio<1, 3>, Ratio<1, 3>>, Ratio<1, 3>>());
        assert!(same_type::<CommonOf<Common<Milli, One>, Common<Milli, One>>, Common<Milli, One>>());
    }

    #[test]
    fn common_scale_agrees_with_common_ratio() {
        assert_eq!(ratio_of::<CommonOf<Centi, Hecto>>(), ratio_of::<Common<Centi, Hecto>>());
        assert_eq!(ratio_of::<CommonOf<Pico, Giga>>(), ratio_of::<Common<Pico, Giga>>());
        assert_eq!(ratio_of::<CommonOf<Tera, Peta>>(), ratio_of::<Common<Tera, Peta>>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Division / transforms
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn divide_basics() {
        assert_eq!(divide((1, 1), (1, 1_000)), (1_000, 1));
        assert_eq!(divide((1, 1_000), (1, 1)), (1, 1_000));
        assert_eq!(divide((10, 1), (1, 10)), (100, 1));
        assert_eq!(divide((2, 3), (4, 9)), (3, 2));
    }

    #[test]
    fn divide_cross_cancels_large_prefixes() {
        assert_eq!(
            Transform::<Exa, Peta>::RATIO,
            (1_000, 1),
            "exa/peta must not overflow through 10^18 * 10^15"
        );
        assert_eq!(checked_divide((1_000_000_000_000_000_000, 1), (1, 1_000_000_000_000_000_000)), None);
    }

    #[test]
    fn transform_between_prefixes() {
        assert_eq!(Transform::<Milli, One>::RATIO, (1, 1_000));
        assert_eq!(Transform::<One, Milli>::RATIO, (1_000, 1));
        assert_eq!(Transform::<Kilo, Kilo>::RATIO, (1, 1));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn reduction_ignores_common_factors(n in 1u64..1_000_000, d in 1u64..1_000_000, k in 1u64..1_000) {
            prop_assert_eq!(reduce(n, d), reduce(k * n, k * d));
        }

        #[test]
        fn reduced_terms_are_coprime(n in 1u64..1_000_000, d in 1u64..1_000_000) {
            let (rn, rd) = reduce(n, d);
            prop_assert_eq!(gcd(rn, rd), 1);
            prop_assert_eq!(rn as u128 * d as u128, rd as u128 * n as u128);
        }

        #[test]
        fn common_divides_both_inputs(
            a in (1u64..10_000, 1u64..10_000),
            b in (1u64..10_000, 1u64..10_000),
        ) {
            let a = reduce(a.0, a.1);
            let b = reduce(b.0, b.1);
            let c = common(a, b);
            // a / c and b / c are whole numbers.
            prop_assert_eq!(divide(a, c).1, 1);
            prop_assert_eq!(divide(b, c).1, 1);
        }

        #[test]
        fn common_is_symmetric(
            a in (1u64..10_000, 1u64..10_000),
            b in (1u64..10_000, 1u64..10_000),
        ) {
            let a = reduce(a.0, a.1);
            let b = reduce(b.0, b.1);
            prop_assert_eq!(common(a, b), common(b, a));
        }

        #[test]
        fn divide_then_inverse_is_one(a in (1u64..100_000, 1u64..100_000)) {
            let a = reduce(a.0, a.1);
            prop_assert_eq!(divide(a, a), (1, 1));
        }
    }
}
