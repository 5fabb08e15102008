//! Photometric band (filter) reference constants

use crate::error::{FilterError, Result};
use crate::units::{Dimension, Length, LengthExt, Quantity, Unit};

/// A single photometric filter
///
/// Holds the mean wavelength, effective bandwidth and the flux density
/// corresponding to magnitude zero. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    name: String,
    wavelength: Length,
    bandwidth: Length,
    /// Zero point flux density, always stored in jansky
    zero_point: Quantity,
}

impl Band {
    /// Create a band from unit-tagged constants
    ///
    /// # Arguments
    ///
    /// * `name` - Canonical name of the band, e.g. `SDSS_u`
    /// * `wavelength` - Mean wavelength, any length unit
    /// * `bandwidth` - Effective bandwidth, any length unit
    /// * `zero_point` - Flux density of a magnitude zero source, any flux density unit
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidUnit`] naming the offending field if a
    /// value does not have the expected dimension, or
    /// [`FilterError::InvalidZeroPoint`] if the zero point is not a positive,
    /// finite flux density.
    pub fn new(
        name: impl Into<String>,
        wavelength: Quantity,
        bandwidth: Quantity,
        zero_point: Quantity,
    ) -> Result<Self> {
        let wavelength = wavelength
            .to_length()
            .map_err(|_| invalid_unit("wavelength", Dimension::Length, &wavelength))?;
        let bandwidth = bandwidth
            .to_length()
            .map_err(|_| invalid_unit("bandwidth", Dimension::Length, &bandwidth))?;
        let zero_point = zero_point.to(Unit::Jansky).map_err(|_| {
            invalid_unit("zero point", Dimension::SpectralFluxDensity, &zero_point)
        })?;

        let name = name.into();
        if !valid_zero_point(zero_point.value()) {
            return Err(FilterError::InvalidZeroPoint {
                band: name,
                value: zero_point.value(),
            });
        }

        Ok(Self {
            name,
            wavelength,
            bandwidth,
            zero_point,
        })
    }

    /// Create a band from angstrom and jansky values
    ///
    /// The reference tables are published in these units. Only the zero point
    /// is checked, and only in debug builds.
    pub fn from_angstrom_jansky(
        name: impl Into<String>,
        wavelength_a: f64,
        bandwidth_a: f64,
        zero_point_jy: f64,
    ) -> Self {
        debug_assert!(
            valid_zero_point(zero_point_jy),
            "zero point must be positive and finite, got {zero_point_jy} Jy"
        );
        Self {
            name: name.into(),
            wavelength: Length::from_angstroms(wavelength_a),
            bandwidth: Length::from_angstroms(bandwidth_a),
            zero_point: Quantity::jansky(zero_point_jy),
        }
    }

    /// Canonical band name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mean wavelength
    pub fn wavelength(&self) -> Length {
        self.wavelength
    }

    /// Effective bandwidth
    pub fn bandwidth(&self) -> Length {
        self.bandwidth
    }

    /// Zero point flux density in jansky
    pub fn zero_point(&self) -> Quantity {
        self.zero_point
    }

    pub(crate) fn zero_point_jy(&self) -> f64 {
        self.zero_point.value()
    }
}

fn valid_zero_point(zero_point_jy: f64) -> bool {
    zero_point_jy.is_finite() && zero_point_jy > 0.0
}

fn invalid_unit(field: &'static str, expected: Dimension, got: &Quantity) -> FilterError {
    FilterError::InvalidUnit {
        field,
        expected,
        unit: got.unit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_band_normalizes_units() {
        let band = Band::new(
            "SDSS_u",
            356.18 * Unit::Nanometer,
            558.4 * Unit::Angstrom,
            1_568_500.0 * Unit::MilliJansky,
        )
        .unwrap();

        assert_eq!(band.name(), "SDSS_u");
        assert_relative_eq!(band.wavelength().as_angstroms(), 3561.8, epsilon = 1e-9);
        assert_relative_eq!(band.bandwidth().as_angstroms(), 558.4, epsilon = 1e-9);
        assert_eq!(band.zero_point().unit(), Unit::Jansky);
        assert_relative_eq!(band.zero_point().value(), 1568.5, epsilon = 1e-9);
    }

    #[test]
    fn test_band_accepts_cgs_zero_point() {
        let band = Band::new(
            "flat",
            5500.0 * Unit::Angstrom,
            1000.0 * Unit::Angstrom,
            3631e-23 * Unit::ErgPerSecondCm2Hz,
        )
        .unwrap();
        assert_relative_eq!(band.zero_point().value(), 3631.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_as_wavelength_is_rejected() {
        let err = Band::new(
            "bad",
            2.0 * Unit::Kilogram,
            558.4 * Unit::Angstrom,
            1568.5 * Unit::Jansky,
        )
        .unwrap_err();

        assert_eq!(
            err,
            FilterError::InvalidUnit {
                field: "wavelength",
                expected: Dimension::Length,
                unit: Unit::Kilogram,
            }
        );
    }

    #[test]
    fn test_bandwidth_and_zero_point_dimensions_checked() {
        let bandwidth = Band::new(
            "bad",
            3561.8 * Unit::Angstrom,
            1.0 * Unit::Second,
            1568.5 * Unit::Jansky,
        );
        assert!(matches!(
            bandwidth,
            Err(FilterError::InvalidUnit { field: "bandwidth", .. })
        ));

        let zero_point = Band::new(
            "bad",
            3561.8 * Unit::Angstrom,
            558.4 * Unit::Angstrom,
            10.0 * Unit::Magnitude,
        );
        assert!(matches!(
            zero_point,
            Err(FilterError::InvalidUnit { field: "zero point", .. })
        ));
    }

    #[test]
    fn test_zero_point_must_be_positive_and_finite() {
        for zp in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = Band::new(
                "Z",
                5000.0 * Unit::Angstrom,
                100.0 * Unit::Angstrom,
                zp * Unit::Jansky,
            )
            .unwrap_err();
            assert!(
                matches!(&err, FilterError::InvalidZeroPoint { band, .. } if band == "Z"),
                "zero point {zp} gave {err:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "zero point must be positive")]
    #[cfg(debug_assertions)]
    fn test_typed_constructor_asserts_zero_point() {
        Band::from_angstrom_jansky("Z", 5000.0, 100.0, 0.0);
    }

    #[test]
    fn test_from_angstrom_jansky_matches_validated_constructor() {
        let direct = Band::from_angstrom_jansky("I1", 35572.6, 6836.2, 277.2);
        let validated = Band::new(
            "I1",
            Quantity::angstrom(35572.6),
            Quantity::angstrom(6836.2),
            Quantity::jansky(277.2),
        )
        .unwrap();

        assert_eq!(direct.name(), validated.name());
        assert_relative_eq!(
            direct.wavelength().as_angstroms(),
            validated.wavelength().as_angstroms(),
            max_relative = 1e-12
        );
        assert_eq!(direct.zero_point(), validated.zero_point());
    }
}
