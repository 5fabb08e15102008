//! Unit-tagged quantities for photometric reference data
//!
//! Band constants and measurements arrive either as bare numbers or as values
//! tagged with a unit. [`Quantity`] carries the tag at runtime so that
//! dimensional mistakes (a mass handed in as a wavelength, a flux handed in
//! as a magnitude) are caught when the value enters the library. Validated
//! wavelengths are stored as `uom` lengths.

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};
use uom::si::length::{angstrom, meter, micrometer, nanometer};

use crate::error::{FilterError, Result};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Constants in CGS units
pub struct CGS {}

impl CGS {
    /// 1 Jansky in CGS units
    /// Units: 1e-23 erg s⁻¹ cm⁻² Hz⁻¹
    pub const JANSKY_IN_CGS: f64 = 1e-23;

    /// 1 Jansky in SI units
    /// Units: 1e-26 W m⁻² Hz⁻¹
    pub const JANSKY_IN_SI: f64 = 1e-26;
}

/// Physical dimension of a [`Unit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    SpectralFluxDensity,
    Magnitude,
    Mass,
    Time,
    Dimensionless,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::SpectralFluxDensity => "spectral flux density",
            Dimension::Magnitude => "magnitude",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::Dimensionless => "dimensionless",
        };
        f.write_str(name)
    }
}

/// Units understood by the library
///
/// Every unit belongs to one [`Dimension`] and has a linear scale to that
/// dimension's base unit (metre, jansky, kilogram, second). Magnitudes are
/// logarithmic and only convert to themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Angstrom,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Jansky,
    MilliJansky,
    MicroJansky,
    /// erg s⁻¹ cm⁻² Hz⁻¹
    ErgPerSecondCm2Hz,
    /// W m⁻² Hz⁻¹
    WattPerM2Hz,
    Magnitude,
    Kilogram,
    Gram,
    Second,
    Dimensionless,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Angstrom
            | Unit::Nanometer
            | Unit::Micrometer
            | Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter => Dimension::Length,
            Unit::Jansky
            | Unit::MilliJansky
            | Unit::MicroJansky
            | Unit::ErgPerSecondCm2Hz
            | Unit::WattPerM2Hz => Dimension::SpectralFluxDensity,
            Unit::Magnitude => Dimension::Magnitude,
            Unit::Kilogram | Unit::Gram => Dimension::Mass,
            Unit::Second => Dimension::Time,
            Unit::Dimensionless => Dimension::Dimensionless,
        }
    }

    /// Multiplier taking a value in this unit to the dimension's base unit
    fn scale_to_base(&self) -> f64 {
        match self {
            Unit::Angstrom => 1e-10,
            Unit::Nanometer => 1e-9,
            Unit::Micrometer => 1e-6,
            Unit::Millimeter => 1e-3,
            Unit::Centimeter => 1e-2,
            Unit::Meter => 1.0,
            Unit::Jansky => 1.0,
            Unit::MilliJansky => 1e-3,
            Unit::MicroJansky => 1e-6,
            Unit::ErgPerSecondCm2Hz => 1.0 / CGS::JANSKY_IN_CGS,
            Unit::WattPerM2Hz => 1.0 / CGS::JANSKY_IN_SI,
            Unit::Magnitude => 1.0,
            Unit::Kilogram => 1.0,
            Unit::Gram => 1e-3,
            Unit::Second => 1.0,
            Unit::Dimensionless => 1.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Angstrom => "Angstrom",
            Unit::Nanometer => "nm",
            Unit::Micrometer => "um",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Jansky => "Jy",
            Unit::MilliJansky => "mJy",
            Unit::MicroJansky => "uJy",
            Unit::ErgPerSecondCm2Hz => "erg / (s cm2 Hz)",
            Unit::WattPerM2Hz => "W / (m2 Hz)",
            Unit::Magnitude => "mag",
            Unit::Kilogram => "kg",
            Unit::Gram => "g",
            Unit::Second => "s",
            Unit::Dimensionless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A scalar tagged with a unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn jansky(value: f64) -> Self {
        Self::new(value, Unit::Jansky)
    }

    pub fn millijansky(value: f64) -> Self {
        Self::new(value, Unit::MilliJansky)
    }

    pub fn magnitude(value: f64) -> Self {
        Self::new(value, Unit::Magnitude)
    }

    pub fn angstrom(value: f64) -> Self {
        Self::new(value, Unit::Angstrom)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    pub fn is_flux_density(&self) -> bool {
        self.dimension() == Dimension::SpectralFluxDensity
    }

    pub fn is_magnitude(&self) -> bool {
        self.dimension() == Dimension::Magnitude
    }

    pub fn is_length(&self) -> bool {
        self.dimension() == Dimension::Length
    }

    /// Express this quantity in another unit of the same dimension
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::TypeMismatch`] if `unit` has a different dimension.
    pub fn to(&self, unit: Unit) -> Result<Quantity> {
        if self.dimension() != unit.dimension() {
            return Err(FilterError::TypeMismatch {
                expected: unit.dimension(),
                actual: self.dimension(),
            });
        }
        let value = self.value * self.unit.scale_to_base() / unit.scale_to_base();
        Ok(Quantity::new(value, unit))
    }

    /// Numeric value after conversion to `unit`
    pub fn value_in(&self, unit: Unit) -> Result<f64> {
        Ok(self.to(unit)?.value)
    }

    /// Convert a length-dimensioned quantity to a `uom` length
    pub fn to_length(&self) -> Result<Length> {
        Ok(Length::new::<meter>(self.value_in(Unit::Meter)?))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == Unit::Dimensionless {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;

    fn mul(self, unit: Unit) -> Quantity {
        Quantity::new(self, unit)
    }
}

/// Input that may or may not already carry a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bare(f64),
    Tagged(Quantity),
}

impl Value {
    /// Attach `unit` to bare numbers, leaving tagged values untouched
    pub fn tagged_or(&self, unit: Unit) -> Quantity {
        match *self {
            Value::Bare(v) => Quantity::new(v, unit),
            Value::Tagged(q) => q,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Bare(value)
    }
}

impl From<Quantity> for Value {
    fn from(quantity: Quantity) -> Self {
        Value::Tagged(quantity)
    }
}

/// Output scale for flux densities produced by conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FluxScale {
    Jansky,
    #[default]
    MilliJansky,
}

impl FluxScale {
    pub fn unit(&self) -> Unit {
        match self {
            FluxScale::Jansky => Unit::Jansky,
            FluxScale::MilliJansky => Unit::MilliJansky,
        }
    }
}

/// Extension trait for length conversions commonly used for filter curves
pub trait LengthExt {
    /// Create length from angstroms
    fn from_angstroms(a: f64) -> Self;

    /// Get length in angstroms
    fn as_angstroms(&self) -> f64;

    /// Create length from nanometers
    fn from_nanometers(nm: f64) -> Self;

    /// Get length in nanometers
    fn as_nanometers(&self) -> f64;

    /// Get length in micrometers
    fn as_micrometers(&self) -> f64;
}

impl LengthExt for Length {
    fn from_angstroms(a: f64) -> Self {
        Length::new::<angstrom>(a)
    }

    fn as_angstroms(&self) -> f64 {
        self.get::<angstrom>()
    }

    fn from_nanometers(nm: f64) -> Self {
        Length::new::<nanometer>(nm)
    }

    fn as_nanometers(&self) -> f64 {
        self.get::<nanometer>()
    }

    fn as_micrometers(&self) -> f64 {
        self.get::<micrometer>()
    }
}
