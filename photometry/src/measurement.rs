//! Single photometric measurements
//!
//! A [`Photometry`] point stores its value and uncertainty in whichever
//! representation it was observed in (flux density or magnitude) and converts
//! to the other one on every request. Nothing is cached, so a registry that
//! gains filter sets later is always consulted afresh.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::telescope_for_band;
use crate::error::{FilterError, Result};
use crate::manager::FilterSetManager;
use crate::units::{Dimension, FluxScale, Length, Quantity, Unit, Value};

/// Representation a measurement was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementKind {
    FluxDensity,
    Magnitude,
}

impl MeasurementKind {
    fn dimension(&self) -> Dimension {
        match self {
            MeasurementKind::FluxDensity => Dimension::SpectralFluxDensity,
            MeasurementKind::Magnitude => Dimension::Magnitude,
        }
    }
}

/// A single photometric point
#[derive(Debug, Clone)]
pub struct Photometry<'a> {
    band: String,
    /// Filter set holding `band`, if the band is in the reverse lookup
    telescope: Option<&'static str>,
    value: Quantity,
    error: Quantity,
    kind: MeasurementKind,
    valid: bool,
    manager: &'a FilterSetManager,
}

impl Photometry<'static> {
    /// Create a measurement that converts through the built-in registry
    ///
    /// See [`Photometry::with_manager`] for argument handling.
    pub fn new(
        band: impl Into<String>,
        value: impl Into<Value>,
        error: impl Into<Value>,
        valid: bool,
        unit: Option<Unit>,
    ) -> Result<Self> {
        Photometry::with_manager(FilterSetManager::builtin(), band, value, error, valid, unit)
    }
}

impl<'a> Photometry<'a> {
    /// Create a measurement bound to `manager`
    ///
    /// # Arguments
    ///
    /// * `manager` - Registry used for zero point lookups
    /// * `band` - Canonical band name, e.g. `SDSS_u`
    /// * `value` - Flux density or magnitude, tagged or bare
    /// * `error` - Uncertainty of `value`, tagged or bare
    /// * `valid` - Whether the point should be used
    /// * `unit` - Unit applied to whichever of `value`/`error` is bare
    ///
    /// # Errors
    ///
    /// * [`FilterError::AmbiguousUnit`] if a bare number is given without `unit`
    /// * [`FilterError::NotFluxOrMagnitude`] if a value is neither a flux density nor a magnitude
    /// * [`FilterError::MixedKind`] if value and error differ in kind
    ///
    /// An unrecognized band is not an error: a warning is logged and later
    /// conversions fail with [`FilterError::UnresolvedBand`].
    pub fn with_manager(
        manager: &'a FilterSetManager,
        band: impl Into<String>,
        value: impl Into<Value>,
        error: impl Into<Value>,
        valid: bool,
        unit: Option<Unit>,
    ) -> Result<Self> {
        let band = band.into();
        let telescope = telescope_for_band(&band);
        if telescope.is_none() {
            warn!(
                "Unrecognized band name {band}. \
                 Will not be able to convert between flux density and magnitude."
            );
        }

        let (value, kind) = resolve("value", value.into(), unit)?;
        let (error, error_kind) = resolve("error", error.into(), unit)?;
        if kind != error_kind {
            return Err(FilterError::MixedKind {
                value: kind.dimension(),
                error: error_kind.dimension(),
            });
        }

        Ok(Self {
            band,
            telescope,
            value,
            error,
            kind,
            valid,
            manager,
        })
    }

    pub fn band(&self) -> &str {
        &self.band
    }

    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Unit the value was recorded in
    pub fn units(&self) -> Unit {
        self.value.unit()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_validity(&mut self, valid: bool) {
        self.valid = valid;
    }

    /// Filter set the band belongs to
    pub fn telescope(&self) -> Result<&'static str> {
        self.telescope
            .ok_or_else(|| FilterError::UnresolvedBand(self.band.clone()))
    }

    /// Mean wavelength of the band
    pub fn wavelength(&self) -> Result<Length> {
        self.manager.wavelength(self.telescope()?, &self.band)
    }

    /// Value as a flux density, converted to mJy if recorded as a magnitude
    pub fn flux(&self) -> Result<Quantity> {
        match self.kind {
            MeasurementKind::FluxDensity => Ok(self.value),
            MeasurementKind::Magnitude => self.manager.magnitude_to_flux(
                self.telescope()?,
                &self.band,
                self.value,
                FluxScale::MilliJansky,
            ),
        }
    }

    /// Value as a magnitude
    pub fn magnitude(&self) -> Result<Quantity> {
        match self.kind {
            MeasurementKind::Magnitude => Ok(self.value),
            MeasurementKind::FluxDensity => self.manager.flux_to_magnitude(
                self.telescope()?,
                &self.band,
                self.value,
                FluxScale::MilliJansky,
            ),
        }
    }

    /// Uncertainty as a flux density
    ///
    /// A magnitude error `σm` becomes `F * (10^(σm / 2.5) - 1)`.
    pub fn error(&self) -> Result<Quantity> {
        match self.kind {
            MeasurementKind::FluxDensity => Ok(self.error),
            MeasurementKind::Magnitude => {
                let flux = self.flux()?;
                let noise_to_signal = 10f64.powf(self.error.value() / 2.5) - 1.0;
                Ok(Quantity::new(flux.value() * noise_to_signal, flux.unit()))
            }
        }
    }

    /// Uncertainty as a magnitude
    ///
    /// A flux error `σF` becomes `2.5 * log10(1 + σF / F)`.
    pub fn error_as_magnitude(&self) -> Result<Quantity> {
        match self.kind {
            MeasurementKind::Magnitude => Ok(self.error),
            MeasurementKind::FluxDensity => {
                let flux_jy = self.value.value_in(Unit::Jansky)?;
                if !(flux_jy.is_finite() && flux_jy > 0.0) {
                    return Err(FilterError::NonPositiveFlux(flux_jy));
                }
                let noise_to_signal = self.error.value_in(Unit::Jansky)? / flux_jy;
                Ok(Quantity::magnitude(2.5 * (1.0 + noise_to_signal).log10()))
            }
        }
    }

    /// Flux density in mJy as a plain number
    pub fn millijansky_value(&self) -> Result<f64> {
        self.flux()?.value_in(Unit::MilliJansky)
    }

    /// Flux density uncertainty in mJy as a plain number
    pub fn millijansky_error(&self) -> Result<f64> {
        self.error()?.value_in(Unit::MilliJansky)
    }
}

/// Attach a unit if needed and classify the value as flux density or magnitude
fn resolve(
    field: &'static str,
    value: Value,
    unit: Option<Unit>,
) -> Result<(Quantity, MeasurementKind)> {
    let quantity = match (value, unit) {
        (Value::Tagged(q), _) => q,
        (Value::Bare(v), Some(unit)) => Quantity::new(v, unit),
        (Value::Bare(_), None) => return Err(FilterError::AmbiguousUnit { field }),
    };

    match quantity.dimension() {
        Dimension::SpectralFluxDensity => Ok((quantity, MeasurementKind::FluxDensity)),
        Dimension::Magnitude => Ok((quantity, MeasurementKind::Magnitude)),
        _ => Err(FilterError::NotFluxOrMagnitude {
            field,
            unit: quantity.unit(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MIPS1, SDSS_G, SDSS_U};
    use crate::units::LengthExt;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude_point_converts_to_flux() {
        let p = Photometry::new(
            SDSS_U,
            Quantity::magnitude(10.0),
            Quantity::magnitude(0.1),
            true,
            None,
        )
        .unwrap();

        assert_eq!(p.kind(), MeasurementKind::Magnitude);
        assert_eq!(p.units(), Unit::Magnitude);
        assert_eq!(p.magnitude().unwrap(), Quantity::magnitude(10.0));

        let flux = p.flux().unwrap();
        assert_eq!(flux.unit(), Unit::MilliJansky);
        assert_relative_eq!(flux.value(), 156.85, max_relative = 1e-12);
        assert_relative_eq!(p.millijansky_value().unwrap(), 156.85, max_relative = 1e-12);
    }

    #[test]
    fn test_flux_point_converts_to_magnitude() {
        let p = Photometry::new(SDSS_U, 156.85, 15.685, true, Some(Unit::MilliJansky)).unwrap();

        assert_eq!(p.kind(), MeasurementKind::FluxDensity);
        assert_eq!(p.flux().unwrap(), Quantity::millijansky(156.85));
        assert_relative_eq!(p.magnitude().unwrap().value(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.millijansky_error().unwrap(), 15.685, epsilon = 1e-12);
    }

    #[test]
    fn test_flux_error_to_magnitude_error() {
        let p = Photometry::new(
            SDSS_G,
            Quantity::jansky(2.0),
            Quantity::millijansky(200.0),
            true,
            None,
        )
        .unwrap();

        let expected = 2.5 * 1.1f64.log10();
        assert_relative_eq!(p.error_as_magnitude().unwrap().value(), expected, epsilon = 1e-12);
        assert_eq!(p.error().unwrap(), Quantity::millijansky(200.0));
    }

    #[test]
    fn test_magnitude_error_to_flux_error() {
        let p = Photometry::new(SDSS_U, 10.0, 0.1, true, Some(Unit::Magnitude)).unwrap();

        let expected = 156.85 * (10f64.powf(0.1 / 2.5) - 1.0);
        let err = p.error().unwrap();
        assert_eq!(err.unit(), Unit::MilliJansky);
        assert_relative_eq!(err.value(), expected, max_relative = 1e-12);
        assert_relative_eq!(p.millijansky_error().unwrap(), expected, max_relative = 1e-12);
        assert_eq!(p.error_as_magnitude().unwrap(), Quantity::magnitude(0.1));
    }

    #[test]
    fn test_error_conversions_are_inverse() {
        let mag_point = Photometry::new(MIPS1, 4.0, 0.05, true, Some(Unit::Magnitude)).unwrap();
        let flux = mag_point.flux().unwrap();
        let flux_err = mag_point.error().unwrap();

        let flux_point = Photometry::new(MIPS1, flux, flux_err, true, None).unwrap();
        assert_relative_eq!(
            flux_point.error_as_magnitude().unwrap().value(),
            0.05,
            epsilon = 1e-12
        );
        assert_relative_eq!(flux_point.magnitude().unwrap().value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_kind_rejected() {
        let err = Photometry::new(
            SDSS_U,
            Quantity::magnitude(10.0),
            Quantity::millijansky(1.0),
            true,
            None,
        )
        .unwrap_err();

        assert_eq!(
            err,
            FilterError::MixedKind {
                value: Dimension::Magnitude,
                error: Dimension::SpectralFluxDensity,
            }
        );
    }

    #[test]
    fn test_bare_value_without_unit_is_ambiguous() {
        let err = Photometry::new(SDSS_U, 10.0, Quantity::magnitude(0.1), true, None).unwrap_err();
        assert_eq!(err, FilterError::AmbiguousUnit { field: "value" });

        let err = Photometry::new(SDSS_U, Quantity::magnitude(10.0), 0.1, true, None).unwrap_err();
        assert_eq!(err, FilterError::AmbiguousUnit { field: "error" });
    }

    #[test]
    fn test_tagged_values_take_precedence_over_unit() {
        let p = Photometry::new(
            SDSS_U,
            Quantity::jansky(1.0),
            0.01,
            true,
            Some(Unit::Jansky),
        )
        .unwrap();
        assert_eq!(p.error().unwrap(), Quantity::jansky(0.01));

        let mixed = Photometry::new(
            SDSS_U,
            Quantity::magnitude(1.0),
            0.01,
            true,
            Some(Unit::Jansky),
        );
        assert!(matches!(mixed, Err(FilterError::MixedKind { .. })));
    }

    #[test]
    fn test_other_dimensions_rejected() {
        let err = Photometry::new(SDSS_U, 10.0, 1.0, true, Some(Unit::Angstrom)).unwrap_err();
        assert_eq!(
            err,
            FilterError::NotFluxOrMagnitude {
                field: "value",
                unit: Unit::Angstrom,
            }
        );
        assert!(err.to_string().contains("flux density or a magnitude"));
    }

    #[test]
    fn test_unknown_band_degrades_conversions() {
        let mut p = Photometry::new(
            "u",
            Quantity::magnitude(10.0),
            Quantity::magnitude(0.1),
            true,
            None,
        )
        .unwrap();

        assert_eq!(p.band(), "u");
        assert_eq!(p.magnitude().unwrap(), Quantity::magnitude(10.0));
        assert_eq!(p.error_as_magnitude().unwrap(), Quantity::magnitude(0.1));
        assert_eq!(p.flux().unwrap_err(), FilterError::UnresolvedBand("u".to_string()));
        assert!(matches!(p.error(), Err(FilterError::UnresolvedBand(_))));
        assert!(matches!(p.wavelength(), Err(FilterError::UnresolvedBand(_))));

        p.set_validity(false);
        assert!(!p.is_valid());
    }

    #[test]
    fn test_wavelength_and_telescope() {
        let p = Photometry::new("sdss_u", 1.0, 0.1, true, Some(Unit::Jansky)).unwrap();
        assert_eq!(p.telescope().unwrap(), "SDSS");
        assert_relative_eq!(p.wavelength().unwrap().as_angstroms(), 3561.8, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_flux_has_no_magnitude_error() {
        let p = Photometry::new(SDSS_U, 0.0, 1.0, false, Some(Unit::MilliJansky)).unwrap();
        assert!(matches!(p.error_as_magnitude(), Err(FilterError::NonPositiveFlux(_))));
        assert!(matches!(p.magnitude(), Err(FilterError::NonPositiveFlux(_))));
    }

    #[test]
    fn test_custom_manager_is_consulted() {
        use crate::band::Band;
        use crate::catalog::SDSS;
        use crate::filter_set::FilterSet;

        let mut fsm = FilterSetManager::empty();
        fsm.add_filter_sets([FilterSet::with_bands(
            SDSS,
            [Band::from_angstrom_jansky(SDSS_U, 3561.8, 558.4, 1000.0)],
        )]);

        let p = Photometry::with_manager(&fsm, SDSS_U, 0.0, 0.1, true, Some(Unit::Magnitude))
            .unwrap();
        assert_relative_eq!(p.millijansky_value().unwrap(), 1_000_000.0, max_relative = 1e-12);

        let missing =
            Photometry::with_manager(&fsm, MIPS1, 0.0, 0.1, true, Some(Unit::Magnitude)).unwrap();
        assert!(matches!(missing.flux(), Err(FilterError::UnknownFilterSet(_))));
    }
}
