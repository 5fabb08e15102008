//! Named collections of bands belonging to one instrument or survey

use std::collections::BTreeMap;

use log::debug;

use crate::band::Band;
use crate::error::{FilterError, Result};

/// A full set of filters, e.g. Sloan u, g, r, i, z
///
/// Bands are keyed by their lowercased name, so lookups are case insensitive.
/// Adding a band whose key already exists replaces the earlier band.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSet {
    name: String,
    aliases: Vec<String>,
    bands: BTreeMap<String, Band>,
}

impl FilterSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            bands: BTreeMap::new(),
        }
    }

    pub fn with_bands(name: impl Into<String>, bands: impl IntoIterator<Item = Band>) -> Self {
        let mut set = Self::new(name);
        set.add_bands(bands);
        set
    }

    /// Additional name the registry will accept for this set
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Add one or more bands, keyed by their lowercased names
    pub fn add_bands(&mut self, bands: impl IntoIterator<Item = Band>) {
        for band in bands {
            let key = band.name().to_lowercase();
            self.insert(key, band);
        }
    }

    /// Look up a band by name, ignoring case
    pub fn get(&self, band_name: &str) -> Result<&Band> {
        self.bands
            .get(&band_name.to_lowercase())
            .ok_or_else(|| FilterError::UnknownBand {
                filter_set: self.name.clone(),
                band: band_name.to_string(),
            })
    }

    /// Store `band` under `band_name`, returning the band it replaced
    ///
    /// The key is taken from `band_name`, not from the band itself.
    pub fn set(&mut self, band_name: &str, band: Band) -> Option<Band> {
        self.insert(band_name.to_lowercase(), band)
    }

    pub fn contains(&self, band_name: &str) -> bool {
        self.bands.contains_key(&band_name.to_lowercase())
    }

    /// Lowercased keys of all stored bands, in sorted order
    pub fn band_names(&self) -> Vec<&str> {
        self.bands.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        self.bands.values()
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    fn insert(&mut self, key: String, band: Band) -> Option<Band> {
        let previous = self.bands.insert(key, band);
        if let Some(prev) = &previous {
            debug!("Filter set {}: replaced band {}", self.name, prev.name());
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sloan_u() -> Band {
        Band::from_angstrom_jansky("SDSS_u", 3561.8, 558.4, 1568.5)
    }

    fn sloan_g() -> Band {
        Band::from_angstrom_jansky("SDSS_g", 4718.9, 1158.4, 3965.9)
    }

    #[test]
    fn test_lookup_ignores_case() {
        let set = FilterSet::with_bands("SDSS", [sloan_u(), sloan_g()]);

        let lower = set.get("sdss_u").unwrap();
        let upper = set.get("SDSS_U").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.name(), "SDSS_u");
        assert!(set.contains("Sdss_G"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_band() {
        let set = FilterSet::with_bands("SDSS", [sloan_u()]);
        let err = set.get("SDSS_q").unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownBand {
                filter_set: "SDSS".to_string(),
                band: "SDSS_q".to_string(),
            }
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut set = FilterSet::new("SDSS");
        set.add_bands([sloan_u()]);
        set.add_bands([Band::from_angstrom_jansky("sdss_U", 3500.0, 500.0, 1500.0)]);

        assert_eq!(set.len(), 1);
        let band = set.get("SDSS_u").unwrap();
        assert_eq!(band.name(), "sdss_U");
        assert_eq!(band.zero_point_jy(), 1500.0);
    }

    #[test]
    fn test_set_replaces_under_given_key() {
        let mut set = FilterSet::with_bands("SDSS", [sloan_u()]);

        let replaced = set.set("SDSS_U", sloan_g());
        assert_eq!(replaced.map(|b| b.name().to_string()), Some("SDSS_u".to_string()));
        assert_eq!(set.get("sdss_u").unwrap().name(), "SDSS_g");

        assert!(set.set("extra", sloan_u()).is_none());
        assert_eq!(set.band_names(), vec!["extra", "sdss_u"]);
    }

    #[test]
    fn test_aliases_and_empty() {
        let set = FilterSet::new("SDSS").with_alias("Sloan");
        assert_eq!(set.aliases(), &["Sloan".to_string()]);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
