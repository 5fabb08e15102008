//! Photometric filter sets and magnitude/flux density conversion
//!
//! Survey catalogs report brightness either as magnitudes or as flux
//! densities, each relative to per-band reference constants. This crate keeps
//! a registry of filter sets (one per telescope or instrument) whose bands
//! carry a mean wavelength, an effective bandwidth and a zero point flux
//! density, and converts between the two representations with
//! `m = -2.5 log10(F / F0)`.
//!
//! ```
//! use photometry::{catalog, FilterSetManager, FluxScale};
//!
//! let fsm = FilterSetManager::new();
//! let flux = fsm
//!     .magnitude_to_flux(catalog::SLOAN, catalog::SDSS_U, 10.0, FluxScale::MilliJansky)
//!     .unwrap();
//! assert!((flux.value() - 156.85).abs() < 1e-9);
//! ```

pub mod band;
pub mod catalog;
pub mod error;
pub mod filter_set;
pub mod manager;
pub mod measurement;
pub mod units;

pub use band::Band;
pub use catalog::{telescope_for_band, valid_bands};
pub use error::{FilterError, Result};
pub use filter_set::FilterSet;
pub use manager::FilterSetManager;
pub use measurement::{MeasurementKind, Photometry};
pub use units::{Dimension, FluxScale, Length, LengthExt, Quantity, Unit, Value, CGS};
