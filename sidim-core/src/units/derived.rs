//! Derived-dimension aliases.
//!
//! Every alias is generic over representation and scale, with the scale defaulting to `1/1`,
//! the product of the base units as counted here (meter, gram, second, ampere, kelvin, mole,
//! candela). Because the mass axis counts grams, the coherent SI unit of a dimension involving
//! mass sits at another scale; the named SI units below account for that:
//!
//! ```rust
//! use sidim_core::units::derived::{Acceleration, Newtons};
//! use sidim_core::units::mass::Kilograms;
//!
//! let weight = Kilograms::<f64>::new(2.0) * Acceleration::<f64>::new(9.8);
//! assert_eq!(weight, Newtons::<f64>::new(19.6));
//! ```

use crate::ratio::{Kilo, Milli, One};
use crate::{dimension, Quantity};

/// An area counted in `S` square meters.
pub type Area<R, S = One> = Quantity<R, S, dimension::Area>;
/// A volume counted in `S` cubic meters.
pub type Volume<R, S = One> = Quantity<R, S, dimension::Volume>;
/// A velocity counted in `S` meters per second.
pub type Velocity<R, S = One> = Quantity<R, S, dimension::Velocity>;
/// An acceleration counted in `S` meters per second squared.
pub type Acceleration<R, S = One> = Quantity<R, S, dimension::Acceleration>;
/// A frequency counted in `S` hertz.
pub type Frequency<R, S = One> = Quantity<R, S, dimension::Frequency>;
/// A force counted in `S` gram meters per second squared.
pub type Force<R, S = One> = Quantity<R, S, dimension::Force>;
/// A pressure counted in `S` grams per meter per second squared.
pub type Pressure<R, S = One> = Quantity<R, S, dimension::Pressure>;
/// An energy counted in `S` gram square meters per second squared.
pub type Energy<R, S = One> = Quantity<R, S, dimension::Energy>;
/// A power counted in `S` gram square meters per second cubed.
pub type Power<R, S = One> = Quantity<R, S, dimension::Power>;
/// An electric charge counted in `S` coulombs.
pub type ElectricCharge<R, S = One> = Quantity<R, S, dimension::ElectricCharge>;
/// A voltage, scale relative to the base units.
pub type Voltage<R, S = One> = Quantity<R, S, dimension::Voltage>;
/// A capacitance, scale relative to the base units.
pub type Capacitance<R, S = One> = Quantity<R, S, dimension::Capacitance>;
/// An electric resistance, scale relative to the base units.
pub type ElectricResistance<R, S = One> = Quantity<R, S, dimension::ElectricResistance>;
/// An electrical conductance, scale relative to the base units.
pub type ElectricalConductance<R, S = One> = Quantity<R, S, dimension::ElectricalConductance>;
/// A magnetic flux, scale relative to the base units.
pub type MagneticFlux<R, S = One> = Quantity<R, S, dimension::MagneticFlux>;
/// A magnetic flux density, scale relative to the base units.
pub type MagneticFluxDensity<R, S = One> = Quantity<R, S, dimension::MagneticFluxDensity>;
/// An inductance, scale relative to the base units.
pub type Inductance<R, S = One> = Quantity<R, S, dimension::Inductance>;
/// A luminous flux counted in `S` lumens.
pub type LuminousFlux<R, S = One> = Quantity<R, S, dimension::LuminousFlux>;
/// An illuminance counted in `S` lux.
pub type Illuminance<R, S = One> = Quantity<R, S, dimension::Illuminance>;
/// A radioactivity counted in `S` becquerels.
pub type Radioactivity<R, S = One> = Quantity<R, S, dimension::Radioactivity>;
/// An absorbed dose counted in `S` grays.
pub type AbsorbedDose<R, S = One> = Quantity<R, S, dimension::AbsorbedDose>;
/// An equivalent dose counted in `S` sieverts.
pub type EquivalentDose<R, S = One> = Quantity<R, S, dimension::EquivalentDose>;
/// A catalytic activity counted in `S` katals.
pub type CatalyticActivity<R, S = One> = Quantity<R, S, dimension::CatalyticActivity>;
/// A plane angle counted in `S` radians. Indistinguishable from any other dimensionless quantity.
pub type Angle<R, S = One> = Quantity<R, S, dimension::Angle>;
/// A solid angle counted in `S` steradians. Indistinguishable from any other dimensionless quantity.
pub type SolidAngle<R, S = One> = Quantity<R, S, dimension::SolidAngle>;

// Named SI units.

/// Square meters.
pub type SquareMeters<R = i32> = Area<R>;
/// Cubic meters.
pub type CubicMeters<R = i32> = Volume<R>;
/// Meters per second.
pub type MetersPerSecond<R = i32> = Velocity<R>;
/// Hertz.
pub type Hertz<R = i32> = Frequency<R>;
/// Newtons (`kg·m·s^-2`).
pub type Newtons<R = i32> = Force<R, Kilo>;
/// Pascals (`kg·m^-1·s^-2`).
pub type Pascals<R = i32> = Pressure<R, Kilo>;
/// Joules (`kg·m^2·s^-2`).
pub type Joules<R = i32> = Energy<R, Kilo>;
/// Watts (`kg·m^2·s^-3`).
pub type Watts<R = i32> = Power<R, Kilo>;
/// Coulombs.
pub type Coulombs<R = i32> = ElectricCharge<R>;
/// Volts (`kg·m^2·s^-3·A^-1`).
pub type Volts<R = i32> = Voltage<R, Kilo>;
/// Farads (`kg^-1·m^-2·s^4·A^2`).
pub type Farads<R = i32> = Capacitance<R, Milli>;
/// Ohms (`kg·m^2·s^-3·A^-2`).
pub type Ohms<R = i32> = ElectricResistance<R, Kilo>;
/// Siemens (`kg^-1·m^-2·s^3·A^2`).
pub type Siemens<R = i32> = ElectricalConductance<R, Milli>;
/// Webers (`kg·m^2·s^-2·A^-1`).
pub type Webers<R = i32> = MagneticFlux<R, Kilo>;
/// Teslas (`kg·s^-2·A^-1`).
pub type Teslas<R = i32> = MagneticFluxDensity<R, Kilo>;
/// Henries (`kg·m^2·s^-2·A^-2`).
pub type Henries<R = i32> = Inductance<R, Kilo>;
/// Lumens.
pub type Lumens<R = i32> = LuminousFlux<R>;
/// Lux.
pub type Lux<R = i32> = Illuminance<R>;
/// Becquerels.
pub type Becquerels<R = i32> = Radioactivity<R>;
/// Grays (`J/kg`, the kilograms cancel).
pub type Grays<R = i32> = AbsorbedDose<R>;
/// Sieverts.
pub type Sieverts<R = i32> = EquivalentDose<R>;
/// Katals.
pub type Katals<R = i32> = CatalyticActivity<R>;
/// Radians.
pub type Radians<R = i32> = Angle<R>;
/// Steradians.
pub type Steradians<R = i32> = SolidAngle<R>;
