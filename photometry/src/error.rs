//! Errors raised by filter lookups, unit validation and measurement conversion

use thiserror::Error;

use crate::units::{Dimension, Unit};

/// Errors that can occur while building bands or converting photometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("{field} must have units of {expected}, got {unit}")]
    InvalidUnit {
        field: &'static str,
        expected: Dimension,
        unit: Unit,
    },

    #[error("{field} must be a spectral flux density or a magnitude, got {unit}")]
    NotFluxOrMagnitude { field: &'static str, unit: Unit },

    #[error("Zero point of band {band} must be positive and finite, got {value} Jy")]
    InvalidZeroPoint { band: String, value: f64 },

    #[error("Unknown filter set: {0}")]
    UnknownFilterSet(String),

    #[error("Unknown band {band} in filter set {filter_set}")]
    UnknownBand { filter_set: String, band: String },

    #[error("Expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: Dimension,
        actual: Dimension,
    },

    #[error("{field} is a bare number and no unit was supplied")]
    AmbiguousUnit { field: &'static str },

    #[error("Value is a {value} but error is a {error}")]
    MixedKind { value: Dimension, error: Dimension },

    #[error("Band {0} has no known filter set, cannot convert between flux density and magnitude")]
    UnresolvedBand(String),

    #[error("Flux density must be positive and finite to have a magnitude, got {0} Jy")]
    NonPositiveFlux(f64),
}

pub type Result<T> = std::result::Result<T, FilterError>;
