//! Registry of filter sets and magnitude/flux density conversion
//!
//! Magnitudes follow the zero point convention `m = -2.5 log10(F / F0)`,
//! where `F0` is the band's zero point flux density. The two conversions are
//! exact inverses of each other up to floating point rounding.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{debug, trace, warn};
use once_cell::sync::Lazy;

use crate::band::Band;
use crate::catalog::builtin_filter_sets;
use crate::error::{FilterError, Result};
use crate::filter_set::FilterSet;
use crate::units::{FluxScale, Length, Quantity, Unit, Value};

static BUILTIN: Lazy<FilterSetManager> = Lazy::new(FilterSetManager::new);

/// Owns every known filter set, indexed case insensitively by name and alias
#[derive(Debug, Clone)]
pub struct FilterSetManager {
    filter_sets: Vec<FilterSet>,
    /// Lowercased name or alias to index into `filter_sets`
    index: BTreeMap<String, usize>,
}

impl Default for FilterSetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSetManager {
    /// Registry populated with the built-in catalog
    pub fn new() -> Self {
        let mut manager = Self::empty();
        manager.add_filter_sets(builtin_filter_sets());
        manager
    }

    /// Registry with no filter sets
    pub fn empty() -> Self {
        Self {
            filter_sets: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Shared registry holding the built-in catalog
    pub fn builtin() -> &'static FilterSetManager {
        &BUILTIN
    }

    /// Register filter sets, replacing any already stored under the same name
    ///
    /// Only a canonical name identifies the set to replace. A canonical name
    /// always wins over an alias, and an alias already claimed by another set
    /// is skipped with a warning.
    pub fn add_filter_sets(&mut self, filter_sets: impl IntoIterator<Item = FilterSet>) {
        for set in filter_sets {
            let key = set.name().to_lowercase();
            debug!("Registered filter set {} ({} bands)", set.name(), set.len());
            match self
                .filter_sets
                .iter()
                .position(|s| s.name().to_lowercase() == key)
            {
                Some(slot) => {
                    debug!("Replacing filter set {}", self.filter_sets[slot].name());
                    self.filter_sets[slot] = set;
                }
                None => self.filter_sets.push(set),
            }
        }
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, set) in self.filter_sets.iter().enumerate() {
            self.index.insert(set.name().to_lowercase(), slot);
        }
        for (slot, set) in self.filter_sets.iter().enumerate() {
            for alias in set.aliases() {
                match self.index.entry(alias.to_lowercase()) {
                    Entry::Vacant(entry) => {
                        entry.insert(slot);
                    }
                    Entry::Occupied(entry) if *entry.get() != slot => {
                        warn!(
                            "Alias {alias} of filter set {} is already used by {}, ignoring it",
                            set.name(),
                            self.filter_sets[*entry.get()].name()
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }
    }

    /// Look up a filter set by name or alias, ignoring case
    pub fn filter_set(&self, name: &str) -> Result<&FilterSet> {
        self.index
            .get(&name.to_lowercase())
            .map(|&slot| &self.filter_sets[slot])
            .ok_or_else(|| FilterError::UnknownFilterSet(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    /// Canonical names of all stored filter sets, in registration order
    pub fn filter_set_names(&self) -> Vec<&str> {
        self.filter_sets.iter().map(FilterSet::name).collect()
    }

    /// Lowercased band keys of one filter set
    pub fn band_names(&self, filter_set: &str) -> Result<Vec<&str>> {
        Ok(self.filter_set(filter_set)?.band_names())
    }

    pub fn band(&self, filter_set: &str, band: &str) -> Result<&Band> {
        self.filter_set(filter_set)?.get(band)
    }

    /// Zero point flux density of a band, in jansky
    pub fn zero_point(&self, filter_set: &str, band: &str) -> Result<Quantity> {
        Ok(self.band(filter_set, band)?.zero_point())
    }

    /// Mean wavelength of a band
    pub fn wavelength(&self, filter_set: &str, band: &str) -> Result<Length> {
        Ok(self.band(filter_set, band)?.wavelength())
    }

    /// Effective bandwidth of a band
    pub fn bandwidth(&self, filter_set: &str, band: &str) -> Result<Length> {
        Ok(self.band(filter_set, band)?.bandwidth())
    }

    /// Convert a magnitude to a flux density
    ///
    /// `F = F0 * 10^(-m / 2.5)`
    ///
    /// # Arguments
    ///
    /// * `filter_set` - Telescope / filter set name, e.g. `"Sloan"` or `"2MASS"`
    /// * `band` - Band name within the set, e.g. `"SDSS_u"`
    /// * `magnitude` - Bare number or magnitude-tagged quantity
    /// * `scale` - Unit of the returned flux density
    ///
    /// # Errors
    ///
    /// Lookup failures, or [`FilterError::TypeMismatch`] if `magnitude` is
    /// tagged with a non-magnitude unit.
    pub fn magnitude_to_flux(
        &self,
        filter_set: &str,
        band: &str,
        magnitude: impl Into<Value>,
        scale: FluxScale,
    ) -> Result<Quantity> {
        let zp_jy = self.band(filter_set, band)?.zero_point_jy();
        let mag = magnitude.into().tagged_or(Unit::Magnitude).value_in(Unit::Magnitude)?;

        let flux = Quantity::jansky(zp_jy * 10f64.powf(mag / -2.5)).to(scale.unit())?;
        trace!("{filter_set}/{band}: {mag} mag -> {flux} (zero point {zp_jy} Jy)");
        Ok(flux)
    }

    /// Convert a flux density to a magnitude
    ///
    /// `m = -2.5 * log10(F / F0)`
    ///
    /// A tagged `flux` is converted to jansky from whatever flux density unit
    /// it carries and `scale` is ignored. A bare number is read in `scale`.
    ///
    /// # Errors
    ///
    /// Lookup failures, [`FilterError::TypeMismatch`] if `flux` is tagged with
    /// a unit that is not a flux density, or [`FilterError::NonPositiveFlux`]
    /// if the flux has no finite magnitude.
    pub fn flux_to_magnitude(
        &self,
        filter_set: &str,
        band: &str,
        flux: impl Into<Value>,
        scale: FluxScale,
    ) -> Result<Quantity> {
        let zp_jy = self.band(filter_set, band)?.zero_point_jy();
        let flux_jy = flux.into().tagged_or(scale.unit()).value_in(Unit::Jansky)?;

        if !(flux_jy.is_finite() && flux_jy > 0.0) {
            return Err(FilterError::NonPositiveFlux(flux_jy));
        }

        let mag = -2.5 * (flux_jy / zp_jy).log10();
        trace!("{filter_set}/{band}: {flux_jy} Jy -> {mag} mag (zero point {zp_jy} Jy)");
        Ok(Quantity::magnitude(mag))
    }
}
