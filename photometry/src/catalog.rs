//! Built-in filter sets and band reference data
//!
//! Mean wavelengths and effective bandwidths are in angstrom, zero points in
//! jansky, taken from the SVO filter profile service
//! (<http://svo2.cab.inta-csic.es/theory/fps/>).

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::band::Band;
use crate::filter_set::FilterSet;

// Filter set (telescope) names
pub const SDSS: &str = "SDSS";
pub const SLOAN: &str = "Sloan";
pub const GAIA2: &str = "GAIA2";
pub const GAIA: &str = "GAIA";
pub const GAIA2R: &str = "GAIA2r";
pub const TWOMASS: &str = "2MASS";
pub const SPITZER: &str = "Spitzer";
pub const HERSCHEL: &str = "Herschel";
pub const WISE: &str = "WISE";
/// Best guess at the Bessell set used by common SED fitting grids; the
/// filters differ slightly between telescopes.
pub const GENERIC: &str = "Generic";

// Sloan Digital Sky Survey
pub const SDSS_U: &str = "SDSS_u";
pub const SDSS_G: &str = "SDSS_g";
pub const SDSS_R: &str = "SDSS_r";
pub const SDSS_I: &str = "SDSS_i";
pub const SDSS_Z: &str = "SDSS_z";

// Bessell UBVRI
pub const BESSELL_U: &str = "BU";
pub const BESSELL_B: &str = "BB";
pub const BESSELL_V: &str = "BV";
pub const BESSELL_R: &str = "BR";
pub const BESSELL_I: &str = "BI";

// Gaia DR2
pub const GAIA_G2: &str = "GAIA_G2";
pub const GAIA_BP2: &str = "GAIA_BP2";
pub const GAIA_RP2: &str = "GAIA_RP2";

// Gaia DR2, revised passbands
pub const GAIA_G2R: &str = "GAIA_G2r";
pub const GAIA_BP2R: &str = "GAIA_BP2r";
pub const GAIA_RP2R: &str = "GAIA_RP2r";

// 2MASS
pub const TWOMASS_J: &str = "2J";
pub const TWOMASS_H: &str = "2H";
pub const TWOMASS_K: &str = "2K";

// Spitzer IRAC and MIPS
pub const IRAC1: &str = "I1";
pub const IRAC2: &str = "I2";
pub const IRAC3: &str = "I3";
pub const IRAC4: &str = "I4";
pub const MIPS1: &str = "M1";
pub const MIPS2: &str = "M2";
pub const MIPS3: &str = "M3";

// Herschel PACS
pub const PACS_B: &str = "PACS1";
pub const PACS_G: &str = "PACS2";
pub const PACS_R: &str = "PACS3";

// WISE
pub const WISE1: &str = "WISE1";
pub const WISE2: &str = "WISE2";
pub const WISE3: &str = "WISE3";
pub const WISE4: &str = "WISE4";

type Row = (&'static str, f64, f64, f64);

/// (band, wavelength Å, bandwidth Å, zero point Jy)
const SLOAN_BANDS: &[Row] = &[
    (SDSS_U, 3561.8, 558.4, 1568.5),
    (SDSS_G, 4718.9, 1158.4, 3965.9),
    (SDSS_R, 6185.2, 1111.2, 3162.0),
    (SDSS_I, 7499.7, 1044.6, 2602.0),
    (SDSS_Z, 8961.5, 1124.6, 2244.7),
];

const BESSELL_BANDS: &[Row] = &[
    (BESSELL_U, 3605.1, 640.4, 1803.1),
    (BESSELL_B, 4400.0, 900.0, 4000.0),
    (BESSELL_V, 5312.1, 893.1, 3579.8),
    (BESSELL_R, 6575.9, 1591.0, 2971.4),
    (BESSELL_I, 8059.9, 1495.1, 2405.3),
];

const GAIA2_BANDS: &[Row] = &[
    (GAIA_BP2, 5279.9, 2347.4, 3534.7),
    (GAIA_G2, 6742.5, 4183.0, 3296.2),
    (GAIA_RP2, 7883.7, 2756.8, 2620.3),
];

const GAIA2R_BANDS: &[Row] = &[
    (GAIA_BP2R, 5278.6, 2279.4, 3393.3),
    (GAIA_G2R, 6773.7, 4358.4, 2835.1),
    (GAIA_RP2R, 7919.1, 2943.7, 2485.1),
];

const TWOMASS_BANDS: &[Row] = &[
    (TWOMASS_J, 12350.0, 1624.1, 1594.0),
    (TWOMASS_H, 16620.0, 2509.4, 1024.0),
    (TWOMASS_K, 21590.0, 2618.9, 666.8),
];

const SPITZER_BANDS: &[Row] = &[
    (IRAC1, 35572.6, 6836.2, 277.2),
    (IRAC2, 45049.3, 8649.9, 179.0),
    (IRAC3, 57385.7, 12561.2, 113.8),
    (IRAC4, 79273.7, 25288.5, 62.0),
    (MIPS1, 238433.1, 52963.2, 7.1),
    (MIPS2, 725555.3, 213015.3, 0.8),
    (MIPS3, 1569627.1, 357530.2, 0.2),
];

const HERSCHEL_BANDS: &[Row] = &[
    (PACS_B, 719334.2, 214148.9, 0.8),
    (PACS_G, 1026174.6, 312860.0, 0.4),
    (PACS_R, 1671355.3, 697595.3, 0.1),
];

const WISE_BANDS: &[Row] = &[
    (WISE1, 33526.0, 6626.4, 309.5),
    (WISE2, 46028.0, 10422.7, 171.8),
    (WISE3, 115608.0, 55055.7, 31.7),
    (WISE4, 220883.0, 41016.8, 8.4),
];

/// Every built-in set: (name, aliases, bands)
const CATALOG: &[(&str, &[&str], &[Row])] = &[
    (SDSS, &[SLOAN], SLOAN_BANDS),
    (GAIA2, &[GAIA], GAIA2_BANDS),
    (GAIA2R, &[], GAIA2R_BANDS),
    (GENERIC, &[], BESSELL_BANDS),
    (TWOMASS, &[], TWOMASS_BANDS),
    (SPITZER, &[], SPITZER_BANDS),
    (HERSCHEL, &[], HERSCHEL_BANDS),
    (WISE, &[], WISE_BANDS),
];

/// Band name (lowercased) to the name of the built-in set containing it
static BAND_TELESCOPES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    CATALOG
        .iter()
        .flat_map(|(set, _, rows)| rows.iter().map(move |row| (row.0.to_lowercase(), *set)))
        .collect()
});

/// Canonical band names in catalog order
static VALID_BANDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    CATALOG
        .iter()
        .flat_map(|(_, _, rows)| rows.iter().map(|row| row.0))
        .collect()
});

/// Build fresh copies of all built-in filter sets
pub fn builtin_filter_sets() -> Vec<FilterSet> {
    CATALOG
        .iter()
        .map(|(name, aliases, rows)| {
            let bands = rows
                .iter()
                .map(|&(band, wave, width, zp)| Band::from_angstrom_jansky(band, wave, width, zp));
            aliases
                .iter()
                .fold(FilterSet::with_bands(*name, bands), |set, alias| {
                    set.with_alias(*alias)
                })
        })
        .collect()
}

/// Name of the built-in filter set that contains `band_name`, ignoring case
pub fn telescope_for_band(band_name: &str) -> Option<&'static str> {
    BAND_TELESCOPES.get(&band_name.to_lowercase()).copied()
}

/// All band names known to the reverse lookup
pub fn valid_bands() -> &'static [&'static str] {
    &VALID_BANDS
}
