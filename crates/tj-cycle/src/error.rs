//! Formula library errors.

use thiserror::Error;

/// Result type for formula evaluation.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors raised by the formula set.
///
/// Division by zero and similar degenerate inputs are not errors here: they
/// produce `inf`/`NaN` exactly as the IEEE arithmetic of the formula does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Altitude above the modelled ISA range.
    #[error("altitude {altitude} m exceeds {max} m")]
    AltitudeOutOfRange { altitude: f64, max: f64 },

    /// Parameter bundle with the wrong number of elements.
    #[error("{formula} expects {expected} parameters, bundle has {got}")]
    Arity {
        formula: &'static str,
        expected: usize,
        got: usize,
    },

    /// Catalog lookup with an unknown formula name.
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },
}
