//! Quantity type and its implementations.

use crate::dimension::{
    write_symbol, DimInverse, DimProduct, DimQuotient, Dimension, DimensionDiv, DimensionInv,
    DimensionMul,
};
use crate::ratio::{write_scale, Common, CommonOf, CommonScale, Scale, Transform};
use crate::representation::{ImplicitFrom, Promote, Promoted, Representation};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A count of `R` in units of `S` of the physical dimension `D`.
///
/// Only the count is stored; the scale and the dimension live in the type, so a
/// `Quantity` has the size of its representation.
///
/// Quantities of equal dimension can be compared, added and subtracted even when their
/// representation or scale differ. Both operands are first brought to the common
/// representation ([`Promote`]) and the common scale ([`CommonScale`]), which is also the type
/// of the result. Any two quantities whose scales have a common scale can be multiplied or
/// divided; the dimensions combine.
///
/// # Examples
///
/// ```rust
/// use sidim_core::dimension::Length;
/// use sidim_core::ratio::{Milli, One};
/// use sidim_core::Quantity;
///
/// let a = Quantity::<i32, Milli, Length>::new(1);
/// let b = Quantity::<u32, One, Length>::new(1);
/// let sum = a + b;
/// assert_eq!(sum.count(), 1001_u32);
/// assert_eq!(sum, Quantity::<u32, Milli, Length>::new(1001));
/// ```
pub struct Quantity<R: Representation, S: Scale, D: Dimension>(R, PhantomData<(S, D)>);

impl<R: Representation, S: Scale, D: Dimension> Quantity<R, S, D> {
    /// Creates a quantity holding `count` units of `S`.
    ///
    /// ```rust
    /// use sidim_core::units::length::Kilometers;
    /// let d = Kilometers::<i32>::new(3);
    /// assert_eq!(d.count(), 3);
    /// ```
    #[inline]
    pub const fn new(count: R) -> Self {
        Self(count, PhantomData)
    }

    /// Returns the stored count, expressed in the declared scale.
    #[inline]
    pub const fn count(self) -> R {
        self.0
    }

    /// The scale of this type as a reduced `(numerator, denominator)` pair.
    ///
    /// ```rust
    /// use sidim_core::units::length::Millimeters;
    /// assert_eq!(Millimeters::<i32>::ratio(), (1, 1_000));
    /// ```
    #[inline]
    pub const fn ratio() -> (u64, u64) {
        (S::NUM, S::DEN)
    }

    /// The dimension of this type as exponents of `m g s A K mol cd`.
    #[inline]
    pub const fn exponents() -> [i32; 7] {
        D::EXPONENTS
    }

    /// Converts to another representation and scale of the same dimension.
    ///
    /// The count is multiplied by the transform factor between the two scales in the common
    /// representation of source and destination, then cast into `R2`. Integer destinations
    /// truncate toward zero, so converting to a coarser scale may lose the whole value.
    ///
    /// ```rust
    /// use sidim_core::units::length::{Meters, Millimeters};
    /// use sidim_core::ratio::One;
    ///
    /// let small = Millimeters::<i32>::new(100);
    /// assert_eq!(small.convert::<i32, One>().count(), 0);
    ///
    /// let one = Meters::<f64>::new(1.5);
    /// let truncated: Millimeters<i64> = one.convert();
    /// assert_eq!(truncated.count(), 1_500);
    /// ```
    #[inline]
    pub fn convert<R2, S2>(self) -> Quantity<R2, S2, D>
    where
        R: Promote<R2>,
        R2: Representation,
        S2: Scale,
    {
        Quantity::new(self.count_in::<Promoted<R, R2>, S2>().cast())
    }

    /// Like [`convert`](Self::convert), but only where the representation change cannot turn a
    /// floating-point count into an integer one.
    ///
    /// ```rust
    /// use sidim_core::units::length::{Meters, Millimeters};
    ///
    /// let m = Meters::<i32>::new(2);
    /// let mm: Millimeters<f64> = m.to();
    /// assert_eq!(mm.count(), 2_000.0);
    /// ```
    ///
    /// ```compile_fail
    /// use sidim_core::units::length::{Meters, Millimeters};
    ///
    /// let m = Meters::<f64>::new(2.0);
    /// let mm: Millimeters<i32> = m.to();
    /// ```
    #[inline]
    pub fn to<R2, S2>(self) -> Quantity<R2, S2, D>
    where
        R: Promote<R2>,
        R2: ImplicitFrom<R>,
        S2: Scale,
    {
        self.convert()
    }

    /// Converts to another scale, keeping the representation.
    ///
    /// ```rust
    /// use sidim_core::units::length::Kilometers;
    /// use sidim_core::ratio::One;
    ///
    /// let km = Kilometers::<i64>::new(3);
    /// assert_eq!(km.rescale::<One>().count(), 3_000);
    /// ```
    #[inline]
    pub fn rescale<S2: Scale>(self) -> Quantity<R, S2, D> {
        Quantity::new(self.count_in::<R, S2>())
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use sidim_core::units::length::Meters;
    /// assert_eq!(Meters::<i32>::new(-10).abs().count(), 10);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        if self.0 < R::zero() {
            -self
        } else {
            self
        }
    }

    /// Returns the smaller of two quantities of the same type.
    ///
    /// If the counts are unordered (NaN), `self` is returned.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities of the same type.
    ///
    /// If the counts are unordered (NaN), `self` is returned.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// The count cast into `C` and rescaled from `S` to `S2`.
    #[inline]
    fn count_in<C: Representation, S2: Scale>(self) -> C {
        let (num, den) = Transform::<S, S2>::RATIO;
        self.0.cast::<C>().rescale(num, den)
    }

    /// Brings `self` and `other` to their common representation and to the [`Common`] scale.
    ///
    /// This works for any two scales, including ratios with no [`CommonScale`] impl, whose
    /// quantities cannot be added directly.
    ///
    /// ```rust
    /// use sidim_core::dimension::Length;
    /// use sidim_core::ratio::Ratio;
    /// use sidim_core::Quantity;
    ///
    /// let thirds = Quantity::<i32, Ratio<1, 3>, Length>::new(1);
    /// let halves = Quantity::<i32, Ratio<1, 2>, Length>::new(1);
    /// let (a, b) = thirds.with_common(halves);
    /// assert_eq!((a + b).count(), 5);
    /// ```
    #[inline]
    pub fn with_common<R2, S2>(
        self,
        other: Quantity<R2, S2, D>,
    ) -> (
        Quantity<Promoted<R, R2>, Common<S, S2>, D>,
        Quantity<Promoted<R, R2>, Common<S, S2>, D>,
    )
    where
        R: Promote<R2>,
        R2: Representation,
        S2: Scale,
    {
        let (lhs, rhs) = self.common_counts(other);
        (Quantity::new(lhs), Quantity::new(rhs))
    }

    /// Both counts in the common representation and scale of `self` and `other`.
    #[inline]
    fn common_counts<R2, S2>(
        self,
        other: Quantity<R2, S2, D>,
    ) -> (Promoted<R, R2>, Promoted<R, R2>)
    where
        R: Promote<R2>,
        R2: Representation,
        S2: Scale,
    {
        (
            self.count_in::<Promoted<R, R2>, Common<S, S2>>(),
            other.count_in::<Promoted<R, R2>, Common<S, S2>>(),
        )
    }
}

impl<R: Representation, S: Scale, D: Dimension> Clone for Quantity<R, S, D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Representation, S: Scale, D: Dimension> Copy for Quantity<R, S, D> {}

impl<R: Representation, S: Scale, D: Dimension> Default for Quantity<R, S, D> {
    /// A zero count.
    #[inline]
    fn default() -> Self {
        Self::new(<R as Zero>::zero())
    }
}

impl<R: Representation, S: Scale, D: Dimension> Debug for Quantity<R, S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("count", &self.0)
            .field("ratio", &(S::NUM, S::DEN))
            .field("exponents", &D::EXPONENTS)
            .finish()
    }
}

impl<R: Representation, S: Scale, D: Dimension> Display for Quantity<R, S, D> {
    /// Formats as `count`, then the scale when it is not one, then the dimension symbol:
    /// `5 m·s^-1`, `1001 (1/1000) m`, `3`. Width and precision apply to the count.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)?;
        write_scale(f, S::NUM, S::DEN)?;
        write_symbol(f, &D::EXPONENTS)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<R1, S1, R2, S2, D> PartialEq<Quantity<R2, S2, D>> for Quantity<R1, S1, D>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn eq(&self, other: &Quantity<R2, S2, D>) -> bool {
        let (lhs, rhs) = self.common_counts(*other);
        lhs == rhs
    }
}

impl<R1, S1, R2, S2, D> PartialOrd<Quantity<R2, S2, D>> for Quantity<R1, S1, D>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<R2, S2, D>) -> Option<Ordering> {
        let (lhs, rhs) = self.common_counts(*other);
        lhs.partial_cmp(&rhs)
    }

    #[inline]
    fn lt(&self, other: &Quantity<R2, S2, D>) -> bool {
        let (lhs, rhs) = self.common_counts(*other);
        lhs < rhs
    }

    #[inline]
    fn le(&self, other: &Quantity<R2, S2, D>) -> bool {
        self.lt(other) || self.eq(other)
    }

    #[inline]
    fn gt(&self, other: &Quantity<R2, S2, D>) -> bool {
        let (lhs, rhs) = self.common_counts(*other);
        rhs < lhs
    }

    #[inline]
    fn ge(&self, other: &Quantity<R2, S2, D>) -> bool {
        self.gt(other) || self.eq(other)
    }
}

impl<R, S, D> Eq for Quantity<R, S, D>
where
    R: Promote<R> + Eq,
    S: Scale,
    D: Dimension,
{
}

impl<R, S, D> Ord for Quantity<R, S, D>
where
    R: Promote<R> + Ord,
    S: Scale,
    D: Dimension,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<R: Representation + Hash, S: Scale, D: Dimension> Hash for Quantity<R, S, D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<R1, S1, R2, S2, D> Add<Quantity<R2, S2, D>> for Quantity<R1, S1, D>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
    D: Dimension,
{
    type Output = Quantity<Promoted<R1, R2>, CommonOf<S1, S2>, D>;

    #[inline]
    fn add(self, rhs: Quantity<R2, S2, D>) -> Self::Output {
        let lhs = self.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>();
        Quantity::new(lhs.wrapping_add(rhs.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>()))
    }
}

impl<R1, S1, R2, S2, D> Sub<Quantity<R2, S2, D>> for Quantity<R1, S1, D>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
    D: Dimension,
{
    type Output = Quantity<Promoted<R1, R2>, CommonOf<S1, S2>, D>;

    #[inline]
    fn sub(self, rhs: Quantity<R2, S2, D>) -> Self::Output {
        let lhs = self.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>();
        Quantity::new(lhs.wrapping_sub(rhs.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>()))
    }
}

impl<R: Representation, S: Scale, D: Dimension> AddAssign for Quantity<R, S, D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl<R: Representation, S: Scale, D: Dimension> SubAssign for Quantity<R, S, D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl<R: Representation, S: Scale, D: Dimension> Neg for Quantity<R, S, D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.0.wrapping_neg())
    }
}

/// Both counts are brought to the common representation and the common scale, and their
/// product is reported at that scale.
impl<R1, S1, D1, R2, S2, D2> Mul<Quantity<R2, S2, D2>> for Quantity<R1, S1, D1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
    D1: DimensionMul<D2>,
    D2: Dimension,
{
    type Output = Quantity<Promoted<R1, R2>, CommonOf<S1, S2>, DimProduct<D1, D2>>;

    #[inline]
    fn mul(self, rhs: Quantity<R2, S2, D2>) -> Self::Output {
        let lhs = self.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>();
        Quantity::new(lhs.wrapping_mul(rhs.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>()))
    }
}

/// Both counts are brought to the common representation and the common scale, and their
/// quotient is reported at that scale.
///
/// Integer division wraps like the other operators (`MIN / -1` is `MIN`); division by a zero
/// count panics.
impl<R1, S1, D1, R2, S2, D2> Div<Quantity<R2, S2, D2>> for Quantity<R1, S1, D1>
where
    R1: Promote<R2>,
    R2: Representation,
    S1: CommonScale<S2>,
    S2: Scale,
    D1: DimensionDiv<D2>,
    D2: Dimension,
{
    type Output = Quantity<Promoted<R1, R2>, CommonOf<S1, S2>, DimQuotient<D1, D2>>;

    #[inline]
    fn div(self, rhs: Quantity<R2, S2, D2>) -> Self::Output {
        let lhs = self.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>();
        Quantity::new(lhs.wrapping_div(rhs.count_in::<Promoted<R1, R2>, CommonOf<S1, S2>>()))
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<R, S, D> Mul<$t> for Quantity<R, S, D>
            where
                R: Promote<$t>,
                S: Scale,
                D: Dimension,
            {
                type Output = Quantity<Promoted<R, $t>, S, D>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    let lhs: Promoted<R, $t> = self.0.cast();
                    Quantity::new(lhs.wrapping_mul(rhs.cast::<Promoted<R, $t>>()))
                }
            }

            impl<R, S, D> Mul<Quantity<R, S, D>> for $t
            where
                $t: Promote<R>,
                R: Representation,
                S: Scale,
                D: Dimension,
            {
                type Output = Quantity<Promoted<$t, R>, S, D>;

                #[inline]
                fn mul(self, rhs: Quantity<R, S, D>) -> Self::Output {
                    let lhs: Promoted<$t, R> = self.cast();
                    Quantity::new(lhs.wrapping_mul(rhs.0.cast::<Promoted<$t, R>>()))
                }
            }

            impl<R, S, D> Div<$t> for Quantity<R, S, D>
            where
                R: Promote<$t>,
                S: Scale,
                D: Dimension,
            {
                type Output = Quantity<Promoted<R, $t>, S, D>;

                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    let lhs: Promoted<R, $t> = self.0.cast();
                    Quantity::new(lhs.wrapping_div(rhs.cast::<Promoted<R, $t>>()))
                }
            }

            impl<R, S, D> Div<Quantity<R, S, D>> for $t
            where
                $t: Promote<R>,
                R: Representation,
                S: Scale,
                D: DimensionInv,
            {
                type Output = Quantity<Promoted<$t, R>, S, DimInverse<D>>;

                #[inline]
                fn div(self, rhs: Quantity<R, S, D>) -> Self::Output {
                    let lhs: Promoted<$t, R> = self.cast();
                    Quantity::new(lhs.wrapping_div(rhs.0.cast::<Promoted<$t, R>>()))
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<R, S, D> Serialize for Quantity<R, S, D>
where
    R: Representation + Serialize,
    S: Scale,
    D: Dimension,
{
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R, S, D> Deserialize<'de> for Quantity<R, S, D>
where
    R: Representation + Deserialize<'de>,
    S: Scale,
    D: Dimension,
{
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let count = R::deserialize(deserializer)?;
        Ok(Quantity::new(count))
    }
}

/// Serde helper module for serializing quantities together with their scale and dimension.
///
/// Use this with the `#[serde(with = "...")]` attribute when the serialized form has to be
/// self-describing. `ratio` and `exponents` are checked against the target type when present.
///
/// # Examples
///
/// ```rust
/// use sidim_core::units::length::{Kilometers, Meters};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Route {
///     #[serde(with = "sidim_core::serde_with_scale")]
///     total: Kilometers<f64>, // {"count":12.5,"ratio":[1000,1],"exponents":[1,0,0,0,0,0,0]}
///
///     leg: Meters<f64>, // 800.0
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_scale {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity` as a struct with `count`, `ratio` and `exponents` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"count": 1001, "ratio": [1, 1000], "exponents": [1, 0, 0, 0, 0, 0, 0]}
    /// ```
    pub fn serialize<R, S, D, Ser>(
        quantity: &Quantity<R, S, D>,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error>
    where
        R: Representation + Serialize,
        S: Scale,
        D: Dimension,
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 3)?;
        state.serialize_field("count", &quantity.count())?;
        state.serialize_field("ratio", &[S::NUM, S::DEN])?;
        state.serialize_field("exponents", &D::EXPONENTS)?;
        state.end()
    }

    /// Deserializes a `Quantity` from a struct with `count` and optionally `ratio` and
    /// `exponents` fields.
    ///
    /// A ratio is accepted if it reduces to the target scale; exponents must match exactly.
    pub fn deserialize<'de, R, S, D, De>(deserializer: De) -> Result<Quantity<R, S, D>, De::Error>
    where
        R: Representation + Deserialize<'de>,
        S: Scale,
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Count,
            Ratio,
            Exponents,
        }

        struct QuantityVisitor<R, S, D>(PhantomData<(R, S, D)>);

        impl<'de, R, S, D> Visitor<'de> for QuantityVisitor<R, S, D>
        where
            R: Representation + Deserialize<'de>,
            S: Scale,
            D: Dimension,
        {
            type Value = Quantity<R, S, D>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with count, ratio and exponents fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<R, S, D>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut count: Option<R> = None;
                let mut ratio: Option<[u64; 2]> = None;
                let mut exponents: Option<[i32; 7]> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Count => {
                            if count.is_some() {
                                return Err(de::Error::duplicate_field("count"));
                            }
                            count = Some(map.next_value()?);
                        }
                        Field::Ratio => {
                            if ratio.is_some() {
                                return Err(de::Error::duplicate_field("ratio"));
                            }
                            ratio = Some(map.next_value()?);
                        }
                        Field::Exponents => {
                            if exponents.is_some() {
                                return Err(de::Error::duplicate_field("exponents"));
                            }
                            exponents = Some(map.next_value()?);
                        }
                    }
                }

                let count = count.ok_or_else(|| de::Error::missing_field("count"))?;

                if let Some([num, den]) = ratio {
                    if crate::ratio::checked_reduce(num, den) != Some((S::NUM, S::DEN)) {
                        return Err(de::Error::custom(format_args!(
                            "scale mismatch: expected {}/{}, found {}/{}",
                            S::NUM,
                            S::DEN,
                            num,
                            den
                        )));
                    }
                }

                if let Some(found) = exponents {
                    if found != D::EXPONENTS {
                        return Err(de::Error::custom(format_args!(
                            "dimension mismatch: expected {:?}, found {:?}",
                            D::EXPONENTS,
                            found
                        )));
                    }
                }

                Ok(Quantity::new(count))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["count", "ratio", "exponents"],
            QuantityVisitor(PhantomData),
        )
    }
}
