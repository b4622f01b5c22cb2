//! Fluid property errors.

use scp_core::{CoreError, Real};
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while configuring a fluid or loading its tables.
///
/// Out-of-range property queries are not errors; they are clamped and
/// reported as [`crate::RangeWarning`]s.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Temperature limits are inverted or empty.
    #[error("Invalid temperature bounds: t_min ({t_min}) must be less than t_max ({t_max})")]
    InvalidTemperatureBounds { t_min: Real, t_max: Real },

    /// Concentration limits are inverted or empty.
    #[error("Invalid concentration bounds: c_min ({c_min}) must be less than c_max ({c_max})")]
    InvalidConcentrationBounds { c_min: Real, c_max: Real },

    /// Coefficient table has no rows.
    #[error("Coefficient table is empty")]
    EmptyCoefficients,

    /// Coefficient table row does not follow the triangular shape.
    #[error("Coefficient table row {row} has {found} entries, expected {expected}")]
    MalformedCoefficients {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// No catalog entry matches the requested name.
    #[error("Unknown fluid: {name}")]
    UnknownFluid { name: String },

    /// Property name could not be parsed.
    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    /// A serialized fluid definition could not be read.
    #[error("Invalid fluid definition: {message}")]
    Definition { message: String },

    /// Sweep request cannot produce a temperature grid.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FluidError {
    /// True for the construction-time bound violations.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            FluidError::InvalidTemperatureBounds { .. }
                | FluidError::InvalidConcentrationBounds { .. }
        )
    }
}

impl From<serde_yaml::Error> for FluidError {
    fn from(err: serde_yaml::Error) -> Self {
        FluidError::Definition {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FluidError {
    fn from(err: serde_json::Error) -> Self {
        FluidError::Definition {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::InvalidTemperatureBounds {
            t_min: 50.0,
            t_max: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("t_min (50)"));
        assert!(msg.contains("t_max (10)"));

        let err = FluidError::MalformedCoefficients {
            row: 2,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn configuration_errors_are_flagged() {
        assert!(
            FluidError::InvalidConcentrationBounds {
                c_min: 0.6,
                c_max: 0.0
            }
            .is_configuration()
        );
        assert!(
            !FluidError::UnknownFluid {
                name: "brine".into()
            }
            .is_configuration()
        );
    }

    #[test]
    fn core_error_is_transparent() {
        let err: FluidError = CoreError::NonFinite {
            what: "concentration",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err.to_string(), "Non-finite numeric value for concentration: NaN");
    }
}
