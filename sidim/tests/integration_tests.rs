//! Integration-level tests for the `sidim` facade crate.

use sidim::dimension::{self, Dimensionless};
use sidim::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use core::time::Duration;
use proptest::prelude::*;

/// Dimensionless quantity with a free representation and scale.
type Unit<R = i32, S = One> = Quantity<R, S, Dimensionless>;

fn exponents_of<R: Representation, S: sidim::Scale, D: Dimension>(_: Quantity<R, S, D>) -> [i32; 7] {
    D::EXPONENTS
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_is_zero() {
    assert_eq!(Unit::<i32>::default().count(), 0);
    assert_eq!(Unit::<f32, Milli>::default().count(), 0.0);
}

#[test]
fn counts_survive_construction() {
    for v in [i32::MIN, 0, i32::MAX] {
        assert_eq!(Unit::<i32>::new(v).count(), v);
    }
    for v in [f32::MIN_POSITIVE, 0.0, f32::MAX] {
        assert_eq!(Unit::<f32>::new(v).count(), v);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn equality() {
    assert!(Unit::<i32>::default() == Unit::<i32>::default());
    assert!(Unit::<i32>::new(1) == Unit::<i32>::new(1));
    assert!(Unit::<i32, Milli>::new(3) == Unit::<i32, Milli>::new(3));
    assert!(Unit::<i32, Deca>::new(1) == Unit::<i32>::new(10));
    assert!(Unit::<u32>::default() == Unit::<i32>::default());
    assert!(Unit::<f64>::new(0.1) == Unit::<f64>::new(0.1));

    assert!(!(Unit::<i32>::default() == Unit::<i32>::new(1)));
    assert!(!(Unit::<i32, Deci>::new(3) == Unit::<i32, Milli>::new(3)));
    assert!(!(Unit::<i32, Deca>::new(1) == Unit::<i32>::new(1)));
    assert!(!(Unit::<f64>::new(0.1) == Unit::<f64>::new(0.2)));
}

#[test]
fn inequality() {
    assert!(Unit::<i32>::new(1) != Unit::<i32>::new(0));
    assert!(Unit::<i32, Deci>::new(3) != Unit::<i32, Milli>::new(3));
    assert!(Unit::<i32, Deca>::new(1) != Unit::<i32>::new(1));
    assert!(Unit::<f64>::new(0.1) != Unit::<f64>::new(0.2));

    assert!(!(Unit::<i32, Deca>::new(1) != Unit::<i32>::new(10)));
    assert!(!(Unit::<u32>::default() != Unit::<i32>::default()));
}

#[test]
fn greater_than() {
    assert!(Unit::<i32>::new(1) > Unit::<i32>::new(0));
    assert!(Unit::<i32, Deci>::new(3) > Unit::<i32, Milli>::new(3));
    assert!(Unit::<i32, Deca>::new(1) > Unit::<i32>::new(1));
    assert!(Unit::<f64>::new(0.3) > Unit::<f64>::new(0.2));

    assert!(!(Unit::<i32>::new(0) > Unit::<i32>::new(1)));
    assert!(!(Unit::<i32, Milli>::new(3) > Unit::<i32, Deci>::new(3)));
    assert!(!(Unit::<i32>::new(1) > Unit::<i32, Deca>::new(1)));
    assert!(!(Unit::<f64>::new(0.2) > Unit::<f64>::new(0.3)));
}

#[test]
fn greater_or_equal() {
    assert!(Unit::<i32>::default() >= Unit::<i32>::default());
    assert!(Unit::<i32>::new(1) >= Unit::<i32>::new(1));
    assert!(Unit::<i32, Deci>::new(3) >= Unit::<i32, Milli>::new(3));
    assert!(Unit::<i32, Deca>::new(1) >= Unit::<i32>::new(1));

    assert!(!(Unit::<i32>::new(0) >= Unit::<i32>::new(1)));
    assert!(!(Unit::<i32, Milli>::new(3) >= Unit::<i32, Deci>::new(3)));
    assert!(!(Unit::<f64>::new(0.2) >= Unit::<f64>::new(0.3)));
}

#[test]
fn less_than() {
    assert!(Unit::<i32>::new(0) < Unit::<i32>::new(1));
    assert!(Unit::<i32, Milli>::new(3) < Unit::<i32, Deci>::new(3));
    assert!(Unit::<i32>::new(1) < Unit::<i32, Deca>::new(1));
    assert!(Unit::<f64>::new(0.2) < Unit::<f64>::new(0.3));

    assert!(!(Unit::<i32>::new(1) < Unit::<i32>::new(0)));
    assert!(!(Unit::<i32, Deci>::new(3) < Unit::<i32, Milli>::new(3)));
    assert!(!(Unit::<i32, Deca>::new(1) < Unit::<i32>::new(1)));
}

#[test]
fn less_or_equal() {
    assert!(Unit::<i32>::default() <= Unit::<i32>::default());
    assert!(Unit::<i32>::new(0) <= Unit::<i32>::new(1));
    assert!(Unit::<i32, Milli>::new(3) <= Unit::<i32, Deci>::new(3));
    assert!(Unit::<i32>::new(1) <= Unit::<i32, Deca>::new(1));

    assert!(!(Unit::<i32>::new(1) <= Unit::<i32>::new(0)));
    assert!(!(Unit::<i32, Deca>::new(1) <= Unit::<i32>::new(1)));
    assert!(!(Unit::<f64>::new(0.3) <= Unit::<f64>::new(0.2)));
}

#[test]
fn comparing_across_prefix_ladder() {
    assert!(Kilometers::<i64>::new(1) > Meters::<i64>::new(999));
    assert_eq!(Kilometers::<i64>::new(1), Millimeters::<i64>::new(1_000_000));
    assert!(Nanoseconds::<u64>::new(1_000_001) > Milliseconds::<u64>::new(1));
    assert_eq!(Kilograms::<i32>::new(2), Grams::<i32>::new(2_000));
    assert_eq!(Tonnes::<i32>::new(1), Kilograms::<i32>::new(1_000));
}

// ─────────────────────────────────────────────────────────────────────────────
// Addition and subtraction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn same_representation_and_scale() {
    assert_eq!(Unit::<i32>::new(1) + Unit::<i32>::new(1), Unit::<i32>::new(2));
    assert_eq!(Unit::<u32>::new(1) - Unit::<u32>::new(1), Unit::<u32>::new(0));
}

#[test]
fn different_representation_same_scale() {
    assert_eq!(Unit::<i32>::new(1) + Unit::<u32>::new(1), Unit::<u32>::new(2));
    assert_eq!(Unit::<u32>::new(1) + Unit::<f64>::new(1.0), Unit::<f64>::new(2.0));
    assert_eq!(Unit::<f32>::new(1.0) + Unit::<f64>::new(1.0), Unit::<f64>::new(2.0));
    assert_eq!(Unit::<i32>::new(1) - Unit::<u32>::new(1), Unit::<u32>::new(0));
    assert_eq!(Unit::<f32>::new(1.0) - Unit::<f64>::new(1.0), Unit::<f64>::new(0.0));
}

#[test]
fn different_representation_and_scale() {
    assert_eq!(
        Unit::<i32, Milli>::new(1) + Unit::<u32>::new(1),
        Unit::<u32, Milli>::new(1_001)
    );
    assert_eq!(
        Unit::<u32, Deca>::new(1) + Unit::<f64, Deci>::new(1.0),
        Unit::<f64>::new(10.1)
    );
    assert_eq!(
        Unit::<i32, Milli>::new(1) - Unit::<u32>::new(1),
        Unit::<i32, Milli>::new(-999)
    );
    assert_eq!(
        Unit::<u32, Deca>::new(1) - Unit::<f64, Deci>::new(1.0),
        Unit::<f64>::new(9.9)
    );
}

#[test]
fn result_lands_on_the_finer_scale() {
    let sum = Kilometers::<i32>::new(2) + Meters::<i32>::new(500);
    assert_eq!(sum.count(), 2_500);
    assert_eq!(exponents_of(sum), [1, 0, 0, 0, 0, 0, 0]);

    let span = Hours::<i64>::new(1) + Minutes::<i64>::new(30);
    assert_eq!(span.count(), 90);
    assert_eq!(span, Seconds::<i64>::new(5_400));
}

#[test]
fn custom_ratios_meet_on_their_common_scale() {
    type Thirds = Quantity<i32, Ratio<1, 3>, dimension::Length>;
    type Halves = Quantity<i32, Ratio<1, 2>, dimension::Length>;

    let (thirds, halves) = Thirds::new(1).with_common(Halves::new(1));
    let sum = thirds + halves;
    assert_eq!(sum.count(), 5);
    assert_eq!(sum, Quantity::<i32, Ratio<5, 6>, dimension::Length>::new(1));
}

#[test]
fn results_are_the_named_alias_types() {
    let mut odometer = Meters::<i32>::new(0);
    for _ in 0..3 {
        odometer = odometer + Meters::<i32>::new(250);
    }
    assert_eq!(odometer.count(), 750);

    let trimmed: Millimeters<u32> = Millimeters::<i32>::new(1) + Meters::<u32>::new(1);
    assert_eq!(trimmed.count(), 1_001);
    let area: SquareMeters<i32> = Meters::<i32>::new(2) * Meters::<i32>::new(4);
    assert_eq!(area.count(), 8);
    let pause: Minutes<i64> = Hours::<i64>::new(1) - Minutes::<i64>::new(5);
    assert_eq!(pause.count(), 55);
    let precise: Milliseconds<i64> = Minutes::<i64>::new(1) + Milliseconds::<i64>::new(1);
    assert_eq!(precise.count(), 60_001);
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplication and division
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn multiplication() {
    let area = Meters::<i32>::new(2) * Meters::<i32>::new(4);
    assert_eq!(area.count(), 8);
    assert_eq!(area, SquareMeters::<i32>::new(8));

    let mixed = Meters::<i32>::new(2) * Quantity::<i32, One, dimension::Mass>::new(-4);
    assert_eq!(mixed.count(), -8);
    assert_eq!(exponents_of(mixed), [1, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn division() {
    let ratio = Meters::<f64>::new(2.0) / Meters::<f64>::new(4.0);
    assert_relative_eq!(ratio.count(), 0.5);
    assert_eq!(exponents_of(ratio), [0; 7]);

    let mixed = Meters::<f64>::new(2.0) / Quantity::<f64, One, dimension::Mass>::new(-4.0);
    assert_relative_eq!(mixed.count(), -0.5);
    assert_eq!(exponents_of(mixed), [1, -1, 0, 0, 0, 0, 0]);
}

#[test]
fn integer_division_wraps_like_the_other_operators() {
    let most_negative = Meters::<i32>::new(i32::MIN);
    assert_eq!((most_negative / Meters::<i32>::new(-1)).count(), i32::MIN);
    assert_eq!((most_negative / -1_i32).count(), i32::MIN);
    assert_eq!((i64::MIN / Seconds::<i64>::new(-1)).count(), i64::MIN);
}

#[test]
fn named_units_compose() {
    assert_eq!(Newtons::<i32>::new(2) * Meters::<i32>::new(3), Joules::<i32>::new(6));
    assert_eq!(Joules::<i32>::new(10) / Seconds::<i32>::new(2), Watts::<i32>::new(5));
    assert_eq!(
        Kilograms::<i32>::new(2) * Acceleration::<i32>::new(3),
        Newtons::<i32>::new(6)
    );
    assert_eq!(Volts::<i64>::new(12) / Amperes::<i64>::new(4), Ohms::<i64>::new(3));
    assert_eq!(Seconds::<i32>::new(3) * Amperes::<i32>::new(2), Coulombs::<i32>::new(6));

    let frequency = 1.0_f64 / Seconds::<f64>::new(0.5);
    assert_eq!(frequency, Hertz::<f64>::new(2.0));
}

#[test]
fn scalars_keep_the_dimension() {
    let leg = Kilometers::<i32>::new(3) * 2_i32;
    assert_eq!(leg, Kilometers::<i32>::new(6));
    let half = leg / 4.0_f64;
    assert_relative_eq!(half.count(), 1.5);
    assert_eq!(Kilometers::<f64>::ratio(), (1_000, 1));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conversion_between_ratios() {
    let mm: Millimeters<i32> = Meters::<i32>::new(1).into();
    assert_eq!(mm.count(), 1_000);

    let m = Millimeters::<i32>::new(100).convert::<i32, One>();
    assert_eq!(m.count(), 0);
}

#[test]
fn conversion_widens_and_narrows() {
    let km: Kilometers<f64> = Meters::<i32>::new(1_500).to();
    assert_abs_diff_eq!(km.count(), 1.5, epsilon = 1e-12);

    let m: Meters<i16> = Kilometers::<f64>::new(1.25).convert();
    assert_eq!(m.count(), 1_250);
}

#[test]
fn civil_time_units() {
    let minutes: Minutes<i64> = Hours::<i32>::new(2).into();
    assert_eq!(minutes.count(), 120);
    assert_eq!(Days::<i64>::new(1).rescale::<One>().count(), 86_400);
    assert_eq!(Weeks::<i32>::new(1), Days::<i32>::new(7));
    assert_eq!(Days::<i32>::ratio(), (86_400, 1));

    let ms: Milliseconds<i64> = Minutes::<i64>::new(1).into();
    assert_eq!(ms.count(), 60_000);
    let us: Microseconds<i64> = Days::<i32>::new(1).into();
    assert_eq!(us.count(), 86_400_000_000);
    let hours: Hours<u32> = Kiloseconds::<u32>::new(36).into();
    assert_eq!(hours.count(), 10);
}

// ─────────────────────────────────────────────────────────────────────────────
// Aliases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn base_aliases_carry_their_dimension() {
    assert_eq!(Length::<i32>::exponents(), [1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(Mass::<i32>::exponents(), [0, 1, 0, 0, 0, 0, 0]);
    assert_eq!(Time::<i32>::exponents(), [0, 0, 1, 0, 0, 0, 0]);
    assert_eq!(Current::<i32>::exponents(), [0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(Temperature::<i32>::exponents(), [0, 0, 0, 0, 1, 0, 0]);
    assert_eq!(Amount::<i32>::exponents(), [0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(LuminousIntensity::<i32>::exponents(), [0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn base_aliases_accept_any_scale() {
    assert_eq!(Length::<i32, Milli>::ratio(), (1, 1_000));
    assert_eq!(Mass::<i32, Deca>::ratio(), (10, 1));
    assert_eq!(Time::<i32, Exa>::ratio(), (1_000_000_000_000_000_000, 1));
    assert_eq!(Current::<i32, Atto>::ratio(), (1, 1_000_000_000_000_000_000));
    assert_eq!(Temperature::<i32, Hecto>::ratio(), (100, 1));
    assert_eq!(Amount::<i32, Tera>::ratio(), (1_000_000_000_000, 1));
    assert_eq!(LuminousIntensity::<i32, Nano>::ratio(), (1, 1_000_000_000));
}

#[test]
fn mass_counts_grams() {
    assert_eq!(Grams::<i32>::ratio(), (1, 1));
    assert_eq!(Mass::<i32>::ratio(), (1_000, 1));
    assert_eq!(Newtons::<i32>::ratio(), (1_000, 1));
    assert_eq!(Farads::<i32>::ratio(), (1, 1_000));
}

#[test]
fn derived_aliases_carry_their_dimension() {
    assert_eq!(Velocity::<i32>::exponents(), [1, 0, -1, 0, 0, 0, 0]);
    assert_eq!(Pressure::<i32>::exponents(), [-1, 1, -2, 0, 0, 0, 0]);
    assert_eq!(Capacitance::<i32>::exponents(), [-2, -1, 4, 2, 0, 0, 0]);
    assert_eq!(Illuminance::<i32>::exponents(), [-2, 0, 0, 0, 0, 0, 1]);
    assert_eq!(CatalyticActivity::<i32>::exponents(), [0, 0, -1, 0, 0, 1, 0]);
    assert_eq!(Radians::<i32>::exponents(), [0; 7]);
    assert_eq!(Steradians::<i32>::exponents(), Radians::<i32>::exponents());
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn display() {
    assert_eq!(MetersPerSecond::<i32>::new(5).to_string(), "5 m·s^-1");
    assert_eq!(Millimeters::<u32>::new(1_001).to_string(), "1001 (1/1000) m");
    assert_eq!(Newtons::<i32>::new(5).to_string(), "5 (1000) m·g·s^-2");
    assert_eq!(Minutes::<i32>::new(3).to_string(), "3 (60) s");
    assert_eq!(Unit::<i32>::new(3).to_string(), "3");
}

// ─────────────────────────────────────────────────────────────────────────────
// Duration interop
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn duration_round_trip() {
    let timeout = Milliseconds::<u64>::new(1_500);
    let duration = timeout.to_duration().unwrap();
    assert_eq!(duration, Duration::from_millis(1_500));

    let back = Milliseconds::<u64>::from_duration(duration).unwrap();
    assert_eq!(back, timeout);

    let coarse = Seconds::<f64>::from_duration(duration).unwrap();
    assert_relative_eq!(coarse.count(), 1.5);
}

#[test]
fn duration_errors() {
    assert_eq!(
        Seconds::<i32>::new(-1).to_duration(),
        Err(DurationError::Negative)
    );
    assert_eq!(
        Seconds::<u8>::from_duration(Duration::from_secs(300)).map(|q| q.count()),
        Err(DurationError::Overflow)
    );
}

#[test]
fn raw_parts_bridge_foreign_clocks() {
    let ticks = Quantity::<u32, Ratio<1, 90_000>, dimension::Time>::new(180_000);
    let (count, num, den) = ticks.into_raw_parts();
    assert_eq!((count, num, den), (180_000, 1, 90_000));

    let ms = Milliseconds::<u32>::from_raw_parts(count, num, den).unwrap();
    assert_eq!(ms.count(), 2_000);
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn addition_commutes_across_scales(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let lhs = Meters::<i64>::new(a) + Millimeters::<i64>::new(b);
        let rhs = Millimeters::<i64>::new(b) + Meters::<i64>::new(a);
        prop_assert_eq!(lhs, rhs);
        prop_assert_eq!(lhs.count(), a * 1_000 + b);
    }

    #[test]
    fn coarse_conversion_truncates_toward_zero(v in any::<i32>()) {
        let m = Millimeters::<i32>::new(v).convert::<i32, One>();
        prop_assert_eq!(m.count(), v / 1_000);
    }

    #[test]
    fn velocity_times_time_is_length(d in 1.0f64..1e6, t in 1.0f64..1e6) {
        let v = Meters::<f64>::new(d) / Seconds::<f64>::new(t);
        let back = v * Seconds::<f64>::new(t);
        prop_assert_eq!(exponents_of(back), [1, 0, 0, 0, 0, 0, 0]);
        prop_assert!((back.count() - d).abs() <= d * 1e-12);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        depth: Millimeters<i64>,
        #[serde(with = "sidim::serde_with_scale")]
        elapsed: Minutes<u32>,
    }

    #[test]
    fn mixed_fields() {
        let sample = Sample {
            depth: Millimeters::new(1_250),
            elapsed: Minutes::new(3),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(
            json,
            r#"{"depth":1250,"elapsed":{"count":3,"ratio":[60,1],"exponents":[0,0,1,0,0,0,0]}}"#
        );
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn rejects_wrong_scale() {
        let json = r#"{"depth":1,"elapsed":{"count":3,"ratio":[3600,1]}}"#;
        let err = serde_json::from_str::<Sample>(json).unwrap_err();
        assert!(err.to_string().contains("scale mismatch"));
    }
}
