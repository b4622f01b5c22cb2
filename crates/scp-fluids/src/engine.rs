//! Polynomial property engine.
//!
//! Stateless numeric routines shared by every fluid. Nothing here validates
//! its inputs: temperatures and concentrations are expected to have passed
//! through the range guard already.

use scp_core::Real;

use crate::coefficients::CoefficientMatrix;
use crate::range::{Clamped, Limits};

/// Concentration below which a mixture freezes like the pure solvent.
pub const FREEZE_THRESHOLD: Real = 0.05;

/// Evaluate `Σ_i Σ_j coefficients[i][j] · concentration^i · temperature^j`.
///
/// Powers are built by repeated multiplication starting from `1.0`, so every
/// zero-power term is exactly one (including `0^0`).
pub fn evaluate_property(
    coefficients: &CoefficientMatrix,
    temperature: Real,
    concentration: Real,
) -> Real {
    let mut sum = 0.0;
    let mut c_pow = 1.0;
    for row in coefficients.rows() {
        let mut t_pow = 1.0;
        for &coefficient in row {
            sum += coefficient * c_pow * t_pow;
            t_pow *= temperature;
        }
        c_pow *= concentration;
    }
    sum
}

/// Evaluate the one-dimensional polynomial `Σ_k coefficients[k] · x^k`.
pub fn evaluate_polynomial(coefficients: &[Real], x: Real) -> Real {
    let mut sum = 0.0;
    let mut x_pow = 1.0;
    for &coefficient in coefficients {
        sum += coefficient * x_pow;
        x_pow *= x;
    }
    sum
}

/// Prandtl number, `cp · μ / k`. Not guarded against `k == 0`.
#[inline]
pub fn derive_prandtl(specific_heat: Real, viscosity: Real, conductivity: Real) -> Real {
    specific_heat * viscosity / conductivity
}

/// Thermal diffusivity, `k / (ρ · cp)` in m²/s. Not guarded against zero.
#[inline]
pub fn derive_thermal_diffusivity(conductivity: Real, density: Real, specific_heat: Real) -> Real {
    conductivity / (density * specific_heat)
}

/// Freeze point of a mixture, in °C.
///
/// Below `threshold` the result is exactly `0.0` and the concentration is not
/// checked. Otherwise the concentration is clamped into `limits` and the
/// freeze curve is evaluated there; the returned [`Clamped`] carries the
/// clamping warning, if one was raised.
pub fn evaluate_freeze_point(
    coefficients: &[Real],
    concentration: Real,
    limits: &Limits,
    threshold: Real,
) -> Clamped {
    if concentration < threshold {
        return Clamped {
            value: 0.0,
            warning: None,
        };
    }
    let clamped = limits.clamp_concentration(concentration);
    Clamped {
        value: evaluate_polynomial(coefficients, clamped.value),
        warning: clamped.warning,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::range::validate_concentration_bounds;
    use proptest::prelude::*;

    fn coefficient() -> impl Strategy<Value = Real> {
        -1.0e4_f64..1.0e4
    }

    proptest! {
        #[test]
        fn origin_is_constant_term(
            r0 in prop::array::uniform4(coefficient()),
            r1 in prop::array::uniform3(coefficient()),
            r2 in prop::array::uniform2(coefficient()),
            r3 in prop::array::uniform1(coefficient()),
        ) {
            let m = CoefficientMatrix::triangular(r0, r1, r2, r3);
            prop_assert_eq!(evaluate_property(&m, 0.0, 0.0), r0[0]);
        }

        #[test]
        fn low_concentration_freezes_at_zero(
            coeffs in prop::collection::vec(coefficient(), 0..6),
            x in -1.0_f64..FREEZE_THRESHOLD,
        ) {
            let limits = validate_concentration_bounds(0.0, 0.6).unwrap();
            let result = evaluate_freeze_point(&coeffs, x, &limits, FREEZE_THRESHOLD);
            prop_assert_eq!(result.value, 0.0);
        }
    }
}
