//! Range guard: bound validation and the clamp-and-warn policy.
//!
//! Bounds are checked once, when a fluid is configured, and an inverted pair
//! is a hard [`FluidError`]. Query values are never rejected: anything outside
//! the validated interval is pulled back onto the nearest bound and the
//! excursion is described by a [`RangeWarning`]. The functions here only
//! return the warning; reporting it is up to the caller (see
//! [`Clamped::report`]).

use core::fmt;

use scp_core::Real;

use crate::error::{FluidError, FluidResult};

/// A validated closed interval `[min, max]` with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Limits {
    min: Real,
    max: Real,
}

impl Limits {
    pub fn min(&self) -> Real {
        self.min
    }

    pub fn max(&self) -> Real {
        self.max
    }

    pub fn contains(&self, value: Real) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Same interval with a raised lower bound; fails if that empties it.
    pub(crate) fn with_min(self, min: Real) -> FluidResult<Self> {
        validate_temperature_bounds(min, self.max)
    }

    pub(crate) fn clamp_temperature(&self, value: Real) -> Clamped {
        self.clamp(value, Quantity::Temperature)
    }

    pub(crate) fn clamp_concentration(&self, value: Real) -> Clamped {
        self.clamp(value, Quantity::Concentration)
    }

    fn clamp(&self, value: Real, quantity: Quantity) -> Clamped {
        if value < self.min {
            Clamped::warned(value, self.min, quantity, Bound::Lower)
        } else if value > self.max {
            Clamped::warned(value, self.max, quantity, Bound::Upper)
        } else {
            Clamped::exact(value)
        }
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

/// The clamped input axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Temperature,
    Concentration,
}

impl Quantity {
    pub fn label(self) -> &'static str {
        match self {
            Quantity::Temperature => "temperature",
            Quantity::Concentration => "concentration",
        }
    }
}

/// Which side of the interval was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Lower,
    Upper,
}

/// Advisory record of an out-of-range input that was clamped.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct RangeWarning {
    pub quantity: Quantity,
    /// Value the caller asked for.
    pub requested: Real,
    /// Bound the value was clamped to.
    pub limit: Real,
    pub bound: Bound,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.bound {
            Bound::Lower => "greater",
            Bound::Upper => "less",
        };
        write!(
            f,
            "{} must be {} than {:.2}; resetting {:.2} to {:.2}",
            self.quantity.label(),
            relation,
            self.limit,
            self.requested,
            self.limit
        )
    }
}

/// A clamped value together with the warning produced while clamping it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub value: Real,
    pub warning: Option<RangeWarning>,
}

impl Clamped {
    fn exact(value: Real) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    fn warned(requested: Real, limit: Real, quantity: Quantity, bound: Bound) -> Self {
        Self {
            value: limit,
            warning: Some(RangeWarning {
                quantity,
                requested,
                limit,
                bound,
            }),
        }
    }

    /// Log the warning, if any, against `fluid` and return the clamped value.
    pub fn report(self, fluid: &str) -> Real {
        if let Some(warning) = &self.warning {
            tracing::warn!(
                fluid,
                quantity = warning.quantity.label(),
                requested = warning.requested,
                clamped_to = warning.limit,
                "Fluid \"{fluid}\": {warning}"
            );
        }
        self.value
    }
}

fn validate_bounds(min: Real, max: Real) -> bool {
    // Written as `min < max` so NaN on either side is rejected.
    min < max
}

/// Validate a temperature interval, in degrees Celsius.
pub fn validate_temperature_bounds(t_min: Real, t_max: Real) -> FluidResult<Limits> {
    if !validate_bounds(t_min, t_max) {
        return Err(FluidError::InvalidTemperatureBounds { t_min, t_max });
    }
    Ok(Limits {
        min: t_min,
        max: t_max,
    })
}

/// Validate a concentration interval (fraction or percent, fluid-specific).
pub fn validate_concentration_bounds(c_min: Real, c_max: Real) -> FluidResult<Limits> {
    if !validate_bounds(c_min, c_max) {
        return Err(FluidError::InvalidConcentrationBounds { c_min, c_max });
    }
    Ok(Limits {
        min: c_min,
        max: c_max,
    })
}

/// Clamp a temperature into `[t_min, t_max]`.
///
/// A NaN input compares false against both bounds and is passed through.
pub fn clamp_temperature(value: Real, t_min: Real, t_max: Real) -> Clamped {
    Limits {
        min: t_min,
        max: t_max,
    }
    .clamp(value, Quantity::Temperature)
}

/// Clamp a concentration into `[c_min, c_max]`.
pub fn clamp_concentration(value: Real, c_min: Real, c_max: Real) -> Clamped {
    Limits {
        min: c_min,
        max: c_max,
    }
    .clamp(value, Quantity::Concentration)
}
