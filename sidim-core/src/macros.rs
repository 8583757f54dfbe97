//! Macros for defining scale aliases, conversions and common scales.

/// Generates `From` implementations between every pair of the listed scales.
///
/// The representation may change along the way as long as [`ImplicitFrom`](crate::ImplicitFrom)
/// allows it. Prefix the list with `<D>` to make the impls generic over the dimension, or with a
/// concrete dimension and `=>` to restrict them to it.
///
/// ```rust,ignore
/// impl_scale_conversions!(<D> Milli, One, Kilo);
/// impl_scale_conversions!(Time => One, Minute, Hour);
/// impl_scale_conversions!(Time => [Minute, Hour] with [Milli, One, Kilo]);
/// ```
///
/// The `with` form pairs every scale of the first list with every scale of the second, and no
/// two scales within the same list.
#[macro_export]
macro_rules! impl_scale_conversions {
    (@cross $generics:tt $dim:ty; [$($lhs:ty),+]; $rhs:tt) => {
        $(
            $crate::impl_scale_conversions!(@row $generics $dim; $lhs; $rhs);
        )+
    };

    (@row $generics:tt $dim:ty; $lhs:ty; [$($rhs:ty),+ $(,)?]) => {
        $(
            $crate::impl_scale_conversions!(@pair $generics $dim, $lhs, $rhs);
        )+
    };

    (@pair $generics:tt $dim:ty, $from:ty, $to:ty) => {
        $crate::impl_scale_conversions!(@impl $generics $dim, $from, $to);
        $crate::impl_scale_conversions!(@impl $generics $dim, $to, $from);
    };

    (@impl [$($generics:tt)*] $dim:ty, $from:ty, $to:ty) => {
        impl<R1, R2, $($generics)*> From<$crate::Quantity<R1, $from, $dim>>
            for $crate::Quantity<R2, $to, $dim>
        where
            R1: $crate::Promote<R2>,
            R2: $crate::ImplicitFrom<R1>,
        {
            #[inline]
            fn from(value: $crate::Quantity<R1, $from, $dim>) -> Self {
                value.to()
            }
        }
    };

    // Base case: single scale, no conversions needed
    (@walk $generics:tt $dim:ty; $scale:ty) => {};

    // Recursive case: pair the first scale with all others, then recurse
    (@walk $generics:tt $dim:ty; $first:ty, $($rest:ty),+) => {
        $(
            $crate::impl_scale_conversions!(@pair $generics $dim, $first, $rest);
        )+
        $crate::impl_scale_conversions!(@walk $generics $dim; $($rest),+);
    };

    (<$dim:ident> $($scales:ty),+ $(,)?) => {
        $crate::impl_scale_conversions!(@walk [$dim: $crate::Dimension] $dim; $($scales),+);
    };

    ($dim:ty => [$($lhs:ty),+ $(,)?] with $rhs:tt) => {
        $crate::impl_scale_conversions!(@cross [] $dim; [$($lhs),+]; $rhs);
    };

    ($dim:ty => $($scales:ty),+ $(,)?) => {
        $crate::impl_scale_conversions!(@walk [] $dim; $($scales),+);
    };
}

/// Implements [`CommonScale`](crate::ratio::CommonScale) in both directions between scales.
///
/// A plain list must run from the finest scale to the coarsest, each one a whole multiple of every
/// scale before it; each pair then meets at the finer scale. This is checked while building.
///
/// The `with` form pairs every scale of the first list with every scale of the second, and the
/// common scale is the reduced [`Ratio`](crate::ratio::Ratio) of [`Common`](crate::ratio::Common).
/// An explicit pair names its output.
///
/// ```rust,ignore
/// impl_common_scale!(Milli, One, Kilo);
/// impl_common_scale!([Minute, Hour] with [Milli, One, Kilo]);
/// impl_common_scale!(Fortnight, Week => Week);
/// ```
#[macro_export]
macro_rules! impl_common_scale {
    (@impl $a:ty, $b:ty => $out:ty) => {
        impl $crate::ratio::CommonScale<$b> for $a {
            type Output = $out;
        }

        impl $crate::ratio::CommonScale<$a> for $b {
            type Output = $out;
        }
    };

    (@computed $a:ty, $b:ty) => {
        $crate::impl_common_scale!(
            @impl $a, $b => $crate::ratio::Ratio<
                {
                    $crate::ratio::common(
                        (<$a as $crate::Scale>::NUM, <$a as $crate::Scale>::DEN),
                        (<$b as $crate::Scale>::NUM, <$b as $crate::Scale>::DEN),
                    )
                    .0
                },
                {
                    $crate::ratio::common(
                        (<$a as $crate::Scale>::NUM, <$a as $crate::Scale>::DEN),
                        (<$b as $crate::Scale>::NUM, <$b as $crate::Scale>::DEN),
                    )
                    .1
                },
            >
        );
    };

    (@row $lhs:ty; [$($rhs:ty),+ $(,)?]) => {
        $(
            $crate::impl_common_scale!(@computed $lhs, $rhs);
        )+
    };

    (@finer $fine:ty, $coarse:ty) => {
        const _: () = {
            let (num, den) = $crate::ratio::common(
                (<$fine as $crate::Scale>::NUM, <$fine as $crate::Scale>::DEN),
                (<$coarse as $crate::Scale>::NUM, <$coarse as $crate::Scale>::DEN),
            );
            assert!(
                num == <$fine as $crate::Scale>::NUM && den == <$fine as $crate::Scale>::DEN,
                "scales must be listed from finest to coarsest"
            );
        };
        $crate::impl_common_scale!(@impl $fine, $coarse => $fine);
    };

    (@walk $scale:ty) => {};

    (@walk $first:ty, $($rest:ty),+) => {
        $(
            $crate::impl_common_scale!(@finer $first, $rest);
        )+
        $crate::impl_common_scale!(@walk $($rest),+);
    };

    ([$($lhs:ty),+ $(,)?] with $rhs:tt) => {
        $(
            $crate::impl_common_scale!(@row $lhs; $rhs);
        )+
    };

    ($a:ty, $b:ty => $out:ty) => {
        $crate::impl_common_scale!(@impl $a, $b => $out);
    };

    ($($scales:ty),+ $(,)?) => {
        $crate::impl_common_scale!(@walk $($scales),+);
    };
}

/// Declares the SI prefix ladder of a dimension as plural aliases defaulting to `i32`.
///
/// Takes the generic alias of the dimension (`Alias<R, S>`), the unit name used in the docs, and the
/// seventeen alias names from atto to exa, with the unprefixed unit in the middle.
#[macro_export]
macro_rules! prefix_ladder {
    (@alias $generic:ident, $name:ident, $scale:ty, $doc:expr) => {
        #[doc = $doc]
        pub type $name<R = i32> = $generic<R, $scale>;
    };

    (
        $generic:ident, $unit:literal;
        $atto:ident, $femto:ident, $pico:ident, $nano:ident, $micro:ident, $milli:ident,
        $centi:ident, $deci:ident, $one:ident, $deca:ident, $hecto:ident, $kilo:ident,
        $mega:ident, $giga:ident, $tera:ident, $peta:ident, $exa:ident $(,)?
    ) => {
        $crate::prefix_ladder!(@alias $generic, $atto, $crate::ratio::Atto, concat!("Atto", $unit, "s (`10^-18`)."));
        $crate::prefix_ladder!(@alias $generic, $femto, $crate::ratio::Femto, concat!("Femto", $unit, "s (`10^-15`)."));
        $crate::prefix_ladder!(@alias $generic, $pico, $crate::ratio::Pico, concat!("Pico", $unit, "s (`10^-12`)."));
        $crate::prefix_ladder!(@alias $generic, $nano, $crate::ratio::Nano, concat!("Nano", $unit, "s (`10^-9`)."));
        $crate::prefix_ladder!(@alias $generic, $micro, $crate::ratio::Micro, concat!("Micro", $unit, "s (`10^-6`)."));
        $crate::prefix_ladder!(@alias $generic, $milli, $crate::ratio::Milli, concat!("Milli", $unit, "s (`10^-3`)."));
        $crate::prefix_ladder!(@alias $generic, $centi, $crate::ratio::Centi, concat!("Centi", $unit, "s (`10^-2`)."));
        $crate::prefix_ladder!(@alias $generic, $deci, $crate::ratio::Deci, concat!("Deci", $unit, "s (`10^-1`)."));
        $crate::prefix_ladder!(@alias $generic, $one, $crate::ratio::One, concat!("Whole ", $unit, "s."));
        $crate::prefix_ladder!(@alias $generic, $deca, $crate::ratio::Deca, concat!("Deca", $unit, "s (`10^1`)."));
        $crate::prefix_ladder!(@alias $generic, $hecto, $crate::ratio::Hecto, concat!("Hecto", $unit, "s (`10^2`)."));
        $crate::prefix_ladder!(@alias $generic, $kilo, $crate::ratio::Kilo, concat!("Kilo", $unit, "s (`10^3`)."));
        $crate::prefix_ladder!(@alias $generic, $mega, $crate::ratio::Mega, concat!("Mega", $unit, "s (`10^6`)."));
        $crate::prefix_ladder!(@alias $generic, $giga, $crate::ratio::Giga, concat!("Giga", $unit, "s (`10^9`)."));
        $crate::prefix_ladder!(@alias $generic, $tera, $crate::ratio::Tera, concat!("Tera", $unit, "s (`10^12`)."));
        $crate::prefix_ladder!(@alias $generic, $peta, $crate::ratio::Peta, concat!("Peta", $unit, "s (`10^15`)."));
        $crate::prefix_ladder!(@alias $generic, $exa, $crate::ratio::Exa, concat!("Exa", $unit, "s (`10^18`)."));
    };
}
