//! Fluid property provider trait.

use scp_core::Real;

use crate::coefficients::PropertyFit;

/// Data provider for one concentration-based fluid.
///
/// A provider only hands out its name, its fitted tables and the bounds the
/// tables were fitted over. All evaluation, clamping and derived quantities
/// live in [`crate::Fluid`], which depends on this trait alone.
///
/// Implementations must be thread-safe (Send + Sync) so a fluid can be shared
/// read-only between threads.
pub trait FluidProperties: Send + Sync {
    /// Fluid name (for diagnostics/logging).
    fn name(&self) -> &str;

    /// Dynamic viscosity fit [Pa·s].
    fn viscosity_coefficients(&self) -> &PropertyFit;

    /// Specific heat fit [J/(kg·K)].
    fn specific_heat_coefficients(&self) -> &PropertyFit;

    /// Density fit [kg/m³].
    fn density_coefficients(&self) -> &PropertyFit;

    /// Thermal conductivity fit [W/(m·K)].
    fn conductivity_coefficients(&self) -> &PropertyFit;

    /// Temperature interval the tables were fitted over, `(t_min, t_max)` in °C.
    fn temperature_limits(&self) -> (Real, Real);

    /// Concentration interval, `(c_min, c_max)`.
    ///
    /// `None` for a pure fluid, which is always evaluated at concentration 0.
    fn concentration_limits(&self) -> Option<(Real, Real)> {
        None
    }

    /// Freeze curve `t_f(c) = Σ a_k · c^k` in °C, if the fluid has one.
    fn freeze_point_coefficients(&self) -> Option<&[Real]> {
        None
    }
}
