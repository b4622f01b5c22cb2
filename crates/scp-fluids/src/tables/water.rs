use scp_core::Real;

use crate::coefficients::{CoefficientMatrix, PropertyFit};
use crate::model::FluidProperties;

// Cubic fits to CoolProp liquid water at 101325 Pa, 1 to 99 °C.
// Largest deviation is 0.52 % (viscosity); the others stay under 0.06 %.

static VISCOSITY: PropertyFit = PropertyFit::exponential(CoefficientMatrix::temperature_only([
    -6.331209e+00,
    -3.256375e-02,
    2.129416e-04,
    -7.208251e-07,
]));

static SPECIFIC_HEAT: PropertyFit = PropertyFit::linear(CoefficientMatrix::temperature_only([
    4.215904e+03,
    -2.205964e+00,
    3.648127e-02,
    -1.459974e-04,
]));

static DENSITY: PropertyFit = PropertyFit::linear(CoefficientMatrix::temperature_only([
    9.999984e+02,
    1.810890e-02,
    -5.914331e-03,
    1.580306e-05,
]));

static CONDUCTIVITY: PropertyFit = PropertyFit::linear(CoefficientMatrix::temperature_only([
    5.561892e-01,
    2.375844e-03,
    -1.557380e-05,
    3.943222e-08,
]));

/// Liquid water between 0 and 100 °C.
#[derive(Debug, Clone, Copy, Default)]
pub struct Water;

impl FluidProperties for Water {
    fn name(&self) -> &str {
        "Water"
    }

    fn viscosity_coefficients(&self) -> &PropertyFit {
        &VISCOSITY
    }

    fn specific_heat_coefficients(&self) -> &PropertyFit {
        &SPECIFIC_HEAT
    }

    fn density_coefficients(&self) -> &PropertyFit {
        &DENSITY
    }

    fn conductivity_coefficients(&self) -> &PropertyFit {
        &CONDUCTIVITY
    }

    fn temperature_limits(&self) -> (Real, Real) {
        (0.0, 100.0)
    }
}
