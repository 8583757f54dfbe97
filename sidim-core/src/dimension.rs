//! Dimension vectors and their algebra.
//!
//! A dimension is a vector of seven integer exponents, one per SI base dimension, in this order:
//! length, mass, time, electric current, thermodynamic temperature, amount of substance and luminous
//! intensity. Each exponent is a [`typenum`] integer, so the vector lives entirely in the type system:
//!
//! - two quantities share a dimension iff their `Dim<..>` types are identical;
//! - [`DimensionMul`], [`DimensionDiv`] and [`DimensionInv`] compute new vectors at compile time.
//!
//! `typenum` integers have a single canonical form, so every composition that lands on the same
//! exponents lands on the same type:
//!
//! ```rust
//! use core::any::TypeId;
//! use sidim_core::dimension::{Area, DimProduct, Length};
//!
//! assert_eq!(TypeId::of::<DimProduct<Length, Length>>(), TypeId::of::<Area>());
//! ```
//!
//! Angle and solid angle have no base dimension of their own in the SI, so [`Angle`] and
//! [`SolidAngle`] are both [`Dimensionless`]. A plane angle can therefore be added to a solid angle.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Neg, Sub};
use typenum::{Diff, Integer, Negate, Sum, P1, Z0};

/// Symbols of the base units, indexed like [`Dimension::EXPONENTS`].
///
/// Mass is counted in grams: a scale ratio of one on the mass axis is one gram.
pub const BASE_SYMBOLS: [&str; 7] = ["m", "g", "s", "A", "K", "mol", "cd"];

/// Marker trait for dimension vectors.
///
/// Implemented by every [`Dim`] whose parameters are `typenum` integers.
pub trait Dimension: Copy + Debug + 'static {
    /// Exponents of the seven base dimensions.
    const EXPONENTS: [i32; 7];

    /// Whether every exponent is zero.
    const IS_DIMENSIONLESS: bool = {
        let mut i = 0;
        let mut zero = true;
        while i < 7 {
            zero = zero && Self::EXPONENTS[i] == 0;
            i += 1;
        }
        zero
    };
}

/// Type-level dimension vector `L^l · M^m · T^t · I^i · Θ^k · N^n · J^j`.
pub struct Dim<L, M, T, I, K, N, J>(PhantomData<(L, M, T, I, K, N, J)>);

impl<L, M, T, I, K, N, J> Clone for Dim<L, M, T, I, K, N, J> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, M, T, I, K, N, J> Copy for Dim<L, M, T, I, K, N, J> {}

impl<L, M, T, I, K, N, J> Debug for Dim<L, M, T, I, K, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    K: Integer,
    N: Integer,
    J: Integer,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dim{:?}", <Self as Dimension>::EXPONENTS)
    }
}

impl<L, M, T, I, K, N, J> Dimension for Dim<L, M, T, I, K, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    K: Integer,
    N: Integer,
    J: Integer,
{
    const EXPONENTS: [i32; 7] = [L::I32, M::I32, T::I32, I::I32, K::I32, N::I32, J::I32];
}

/// Dimension of a product: component-wise sum of exponents.
pub trait DimensionMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a quotient: component-wise difference of exponents.
pub trait DimensionDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a reciprocal: component-wise negation of exponents.
pub trait DimensionInv: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// `A · B`.
pub type DimProduct<A, B> = <A as DimensionMul<B>>::Output;
/// `A / B`.
pub type DimQuotient<A, B> = <A as DimensionDiv<B>>::Output;
/// `1 / A`.
pub type DimInverse<A> = <A as DimensionInv>::Output;

impl<L1, M1, T1, I1, K1, N1, J1, L2, M2, T2, I2, K2, N2, J2>
    DimensionMul<Dim<L2, M2, T2, I2, K2, N2, J2>> for Dim<L1, M1, T1, I1, K1, N1, J1>
where
    L1: Integer + Add<L2>,
    M1: Integer + Add<M2>,
    T1: Integer + Add<T2>,
    I1: Integer + Add<I2>,
    K1: Integer + Add<K2>,
    N1: Integer + Add<N2>,
    J1: Integer + Add<J2>,
    L2: Integer,
    M2: Integer,
    T2: Integer,
    I2: Integer,
    K2: Integer,
    N2: Integer,
    J2: Integer,
    Sum<L1, L2>: Integer,
    Sum<M1, M2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<I1, I2>: Integer,
    Sum<K1, K2>: Integer,
    Sum<N1, N2>: Integer,
    Sum<J1, J2>: Integer,
{
    type Output = Dim<
        Sum<L1, L2>,
        Sum<M1, M2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<K1, K2>,
        Sum<N1, N2>,
        Sum<J1, J2>,
    >;
}

impl<L1, M1, T1, I1, K1, N1, J1, L2, M2, T2, I2, K2, N2, J2>
    DimensionDiv<Dim<L2, M2, T2, I2, K2, N2, J2>> for Dim<L1, M1, T1, I1, K1, N1, J1>
where
    L1: Integer + Sub<L2>,
    M1: Integer + Sub<M2>,
    T1: Integer + Sub<T2>,
    I1: Integer + Sub<I2>,
    K1: Integer + Sub<K2>,
    N1: Integer + Sub<N2>,
    J1: Integer + Sub<J2>,
    L2: Integer,
    M2: Integer,
    T2: Integer,
    I2: Integer,
    K2: Integer,
    N2: Integer,
    J2: Integer,
    Diff<L1, L2>: Integer,
    Diff<M1, M2>: Integer,
    Diff<T1, T2>: Integer,
    Diff<I1, I2>: Integer,
    Diff<K1, K2>: Integer,
    Diff<N1, N2>: Integer,
    Diff<J1, J2>: Integer,
{
    type Output = Dim<
        Diff<L1, L2>,
        Diff<M1, M2>,
        Diff<T1, T2>,
        Diff<I1, I2>,
        Diff<K1, K2>,
        Diff<N1, N2>,
        Diff<J1, J2>,
    >;
}

impl<L, M, T, I, K, N, J> DimensionInv for Dim<L, M, T, I, K, N, J>
where
    L: Integer + Neg,
    M: Integer + Neg,
    T: Integer + Neg,
    I: Integer + Neg,
    K: Integer + Neg,
    N: Integer + Neg,
    J: Integer + Neg,
    Negate<L>: Integer,
    Negate<M>: Integer,
    Negate<T>: Integer,
    Negate<I>: Integer,
    Negate<K>: Integer,
    Negate<N>: Integer,
    Negate<J>: Integer,
{
    type Output = Dim<Negate<L>, Negate<M>, Negate<T>, Negate<I>, Negate<K>, Negate<N>, Negate<J>>;
}

/// Writes ` m^2·g·s^-2`-style symbols for a non-zero exponent vector; writes nothing otherwise.
pub(crate) fn write_symbol(f: &mut Formatter<'_>, exponents: &[i32; 7]) -> fmt::Result {
    let mut separator = " ";
    for (symbol, &exponent) in BASE_SYMBOLS.iter().zip(exponents.iter()) {
        if exponent == 0 {
            continue;
        }
        f.write_str(separator)?;
        f.write_str(symbol)?;
        if exponent != 1 {
            write!(f, "^{}", exponent)?;
        }
        separator = "·";
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// All exponents zero.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (`m`).
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (`g`).
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (`s`).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (`A`).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (`K`).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (`mol`).
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (`cd`).
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

/// Plane angle. Indistinguishable from [`Dimensionless`] and [`SolidAngle`].
pub type Angle = Dimensionless;
/// Solid angle. Indistinguishable from [`Dimensionless`] and [`Angle`].
pub type SolidAngle = Dimensionless;

// ─────────────────────────────────────────────────────────────────────────────
// Derived dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// `m^2`
pub type Area = DimProduct<Length, Length>;
/// `m^3`
pub type Volume = DimProduct<Area, Length>;
/// `m·s^-1`
pub type Velocity = DimQuotient<Length, Time>;
/// `m·s^-2`
pub type Acceleration = DimQuotient<Velocity, Time>;
/// `s^-1`
pub type Frequency = DimInverse<Time>;
/// `m·g·s^-2`
pub type Force = DimProduct<Mass, Acceleration>;
/// `m^-1·g·s^-2`
pub type Pressure = DimQuotient<Force, Area>;
/// `m^2·g·s^-2`
pub type Energy = DimProduct<Force, Length>;
/// `m^2·g·s^-3`
pub type Power = DimQuotient<Energy, Time>;
/// `s·A`
pub type ElectricCharge = DimProduct<Time, Current>;
/// `m^2·g·s^-3·A^-1`
pub type Voltage = DimQuotient<Power, Current>;
/// `m^-2·g^-1·s^4·A^2`
pub type Capacitance = DimQuotient<ElectricCharge, Voltage>;
/// `m^2·g·s^-3·A^-2`
pub type ElectricResistance = DimQuotient<Voltage, Current>;
/// `m^-2·g^-1·s^3·A^2`
pub type ElectricalConductance = DimQuotient<Current, Voltage>;
/// `m^2·g·s^-2·A^-1`
pub type MagneticFlux = DimProduct<Voltage, Time>;
/// `g·s^-2·A^-1`
pub type MagneticFluxDensity = DimQuotient<MagneticFlux, Area>;
/// `m^2·g·s^-2·A^-2`
pub type Inductance = DimQuotient<MagneticFlux, Current>;
/// `cd` (candela times a dimensionless steradian)
pub type LuminousFlux = DimProduct<LuminousIntensity, SolidAngle>;
/// `m^-2·cd`
pub type Illuminance = DimQuotient<LuminousFlux, Area>;
/// `s^-1`, identical to [`Frequency`].
pub type Radioactivity = DimInverse<Time>;
/// `m^2·s^-2`
pub type AbsorbedDose = DimQuotient<Energy, Mass>;
/// `m^2·s^-2`, identical to [`AbsorbedDose`].
pub type EquivalentDose = DimQuotient<Energy, Mass>;
/// `s^-1·mol`
pub type CatalyticActivity = DimQuotient<Amount, Time>;
