//! Temperature sweeps for property tables.

use scp_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::{FluidError, FluidResult};
use crate::fluid::Fluid;
use crate::property::Property;
use crate::range::RangeWarning;

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Evenly spaced temperatures from `start` to `end` inclusive, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSweep {
    pub start: Real,
    pub end: Real,
    pub points: usize,
}

impl TemperatureSweep {
    pub fn new(start: Real, end: Real, points: usize) -> FluidResult<Self> {
        let sweep = Self { start, end, points };
        sweep.validate()?;
        Ok(sweep)
    }

    /// Sweep spanning a fluid's full temperature range.
    pub fn over(fluid: &Fluid, points: usize) -> FluidResult<Self> {
        Self::new(fluid.t_min(), fluid.t_max(), points)
    }

    pub fn validate(&self) -> FluidResult<()> {
        ensure_finite(self.start, "sweep start")?;
        ensure_finite(self.end, "sweep end")?;
        if self.points < 2 {
            return Err(FluidError::InvalidSweep {
                what: "need at least 2 points",
            });
        }
        if self.points > MAX_SWEEP_POINTS {
            return Err(FluidError::InvalidSweep {
                what: "too many points",
            });
        }
        Ok(())
    }

    /// Temperatures of the sweep; the last point is exactly `end`.
    pub fn temperatures(&self) -> Vec<Real> {
        let last = self.points.saturating_sub(1);
        let step = (self.end - self.start) / last.max(1) as Real;
        (0..self.points)
            .map(|i| {
                if i == last {
                    self.end
                } else {
                    self.start + step * i as Real
                }
            })
            .collect()
    }
}

/// One row of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Requested temperature [°C]
    pub temperature: Real,
    pub value: Real,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<RangeWarning>,
}

impl Fluid {
    /// Evaluate `property` at every temperature of `sweep`.
    ///
    /// Points outside the fluid's limits are clamped; their warnings are
    /// attached to the point rather than logged.
    pub fn sweep(
        &self,
        property: Property,
        sweep: &TemperatureSweep,
    ) -> FluidResult<Vec<SweepPoint>> {
        sweep.validate()?;
        Ok(sweep
            .temperatures()
            .into_iter()
            .map(|temperature| {
                let mut eval = self.evaluate(property, temperature);
                SweepPoint {
                    temperature,
                    value: eval.value,
                    warning: eval.warnings.pop(),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Water;

    #[test]
    fn temperatures_are_evenly_spaced() {
        let sweep = TemperatureSweep::new(0.0, 100.0, 5).unwrap();
        assert_eq!(sweep.temperatures(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn descending_sweeps_are_allowed() {
        let sweep = TemperatureSweep::new(40.0, 0.0, 3).unwrap();
        assert_eq!(sweep.temperatures(), vec![40.0, 20.0, 0.0]);
    }

    #[test]
    fn rejects_degenerate_sweeps() {
        assert!(matches!(
            TemperatureSweep::new(0.0, 10.0, 1).unwrap_err(),
            FluidError::InvalidSweep { .. }
        ));
        assert!(matches!(
            TemperatureSweep::new(Real::NAN, 10.0, 4).unwrap_err(),
            FluidError::Core(_)
        ));
    }

    #[test]
    fn rejects_oversized_sweeps() {
        assert!(TemperatureSweep::new(0.0, 10.0, MAX_SWEEP_POINTS).is_ok());
        assert!(matches!(
            TemperatureSweep::new(0.0, 10.0, MAX_SWEEP_POINTS + 1).unwrap_err(),
            FluidError::InvalidSweep { .. }
        ));
        assert!(TemperatureSweep::new(0.0, 10.0, usize::MAX).is_err());

        // A sweep assembled field by field is checked again before it runs.
        let fluid = Fluid::builder(Water).build().unwrap();
        let sweep = TemperatureSweep {
            start: 0.0,
            end: 10.0,
            points: usize::MAX,
        };
        assert!(fluid.sweep(Property::Density, &sweep).is_err());
    }

    #[test]
    fn sweep_matches_point_queries() {
        let fluid = Fluid::builder(Water).build().unwrap();
        let sweep = TemperatureSweep::new(10.0, 90.0, 9).unwrap();
        let rows = fluid.sweep(Property::Density, &sweep).unwrap();
        assert_eq!(rows.len(), 9);
        for row in &rows {
            assert_eq!(row.value, fluid.density(row.temperature));
            assert!(row.warning.is_none());
        }
        // Water is densest near 4 °C, so density falls across this range.
        assert!(rows.windows(2).all(|w| w[1].value < w[0].value));
    }

    #[test]
    fn sweep_flags_clamped_points() {
        let fluid = Fluid::builder(Water).build().unwrap();
        let sweep = TemperatureSweep::new(-10.0, 110.0, 3).unwrap();
        let rows = fluid.sweep(Property::Viscosity, &sweep).unwrap();
        assert!(rows[0].warning.is_some());
        assert!(rows[1].warning.is_none());
        assert!(rows[2].warning.is_some());
        assert_eq!(rows[2].value, fluid.viscosity(100.0));
    }

    #[test]
    fn full_range_sweep() {
        let fluid = Fluid::builder(Water).build().unwrap();
        let sweep = TemperatureSweep::over(&fluid, 11).unwrap();
        let temps = sweep.temperatures();
        assert_eq!(temps[0], 0.0);
        assert_eq!(temps[10], 100.0);
    }
}
