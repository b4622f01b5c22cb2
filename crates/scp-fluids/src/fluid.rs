//! Configured fluid instances.
//!
//! A [`Fluid`] is built in two phases. [`FluidBuilder`] validates the bounds,
//! clamps the concentration and evaluates the freeze curve; only then is the
//! immutable `Fluid` assembled, with `t_min = max(configured t_min, t_freeze)`.
//! Every query afterwards is a pure function of temperature.

use core::fmt;
use std::sync::Arc;

use scp_core::units::{
    Conductivity, Density, DynVisc, SpecHeatCapacity, Temperature, degc, j_per_kg_k, kg_per_m3,
    pa_s, to_degc, w_per_m_k,
};
use scp_core::{Real, ensure_finite};

use crate::catalog;
use crate::coefficients::PropertyFit;
use crate::engine::{
    FREEZE_THRESHOLD, derive_prandtl, derive_thermal_diffusivity, evaluate_freeze_point,
};
use crate::error::FluidResult;
use crate::model::FluidProperties;
use crate::property::Property;
use crate::range::{
    Clamped, Limits, RangeWarning, validate_concentration_bounds, validate_temperature_bounds,
};

/// Two-phase construction of a [`Fluid`].
pub struct FluidBuilder {
    provider: Arc<dyn FluidProperties>,
    concentration: Real,
    temperature_limits: Option<(Real, Real)>,
    concentration_limits: Option<(Real, Real)>,
}

impl FluidBuilder {
    pub fn new(provider: impl FluidProperties + 'static) -> Self {
        Self::from_shared(Arc::new(provider))
    }

    pub fn from_shared(provider: Arc<dyn FluidProperties>) -> Self {
        Self {
            provider,
            concentration: 0.0,
            temperature_limits: None,
            concentration_limits: None,
        }
    }

    /// Mixture concentration, in the provider's concentration units.
    ///
    /// Ignored for fluids without a concentration axis.
    pub fn concentration(mut self, concentration: Real) -> Self {
        self.concentration = concentration;
        self
    }

    /// Override the provider's temperature limits (°C).
    pub fn temperature_limits(mut self, t_min: Real, t_max: Real) -> Self {
        self.temperature_limits = Some((t_min, t_max));
        self
    }

    /// Override the provider's concentration limits.
    pub fn concentration_limits(mut self, c_min: Real, c_max: Real) -> Self {
        self.concentration_limits = Some((c_min, c_max));
        self
    }

    /// Validate everything and freeze the instance.
    ///
    /// Inverted bounds and a non-finite concentration are fatal. An
    /// out-of-range concentration is clamped, logged, and kept in
    /// [`Fluid::construction_warnings`].
    pub fn build(self) -> FluidResult<Fluid> {
        ensure_finite(self.concentration, "concentration")?;
        let provider = self.provider;
        let name = provider.name().to_string();

        let (t_min, t_max) = self
            .temperature_limits
            .unwrap_or_else(|| provider.temperature_limits());
        let mut temperature = validate_temperature_bounds(t_min, t_max)?;

        let concentration_limits = self
            .concentration_limits
            .or_else(|| provider.concentration_limits())
            .map(|(c_min, c_max)| validate_concentration_bounds(c_min, c_max))
            .transpose()?;

        let mut construction_warnings = Vec::new();
        let mut record = |clamped: Clamped| {
            construction_warnings.extend(clamped.warning);
            clamped.report(&name)
        };

        let concentration = match &concentration_limits {
            Some(limits) => record(limits.clamp_concentration(self.concentration)),
            None => {
                if self.concentration != 0.0 {
                    tracing::debug!(
                        fluid = %name,
                        concentration = self.concentration,
                        "pure fluid, ignoring concentration"
                    );
                }
                0.0
            }
        };

        let t_freeze = match (provider.freeze_point_coefficients(), &concentration_limits) {
            (Some(curve), Some(limits)) => Some(record(evaluate_freeze_point(
                curve,
                concentration,
                limits,
                FREEZE_THRESHOLD,
            ))),
            _ => None,
        };

        if let Some(t_freeze) = t_freeze {
            if t_freeze > temperature.min() {
                temperature = temperature.with_min(t_freeze)?;
            }
        }

        tracing::debug!(
            fluid = %name,
            concentration,
            t_min = temperature.min(),
            t_max = temperature.max(),
            "configured fluid"
        );

        Ok(Fluid {
            provider,
            temperature,
            concentration_limits,
            concentration,
            t_freeze,
            construction_warnings,
        })
    }
}

/// A property value and the range warnings raised while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Real,
    pub warnings: Vec<RangeWarning>,
}

/// All properties at one temperature.
#[derive(Clone, Debug)]
pub struct PropertyPack {
    /// Temperature the pack was evaluated at, after clamping
    pub temperature: Temperature,
    pub viscosity: DynVisc,
    pub specific_heat: SpecHeatCapacity,
    pub density: Density,
    pub conductivity: Conductivity,
    /// Prandtl number (dimensionless)
    pub prandtl: Real,
    /// Thermal diffusivity [m²/s]
    pub thermal_diffusivity: Real,
}

impl fmt::Display for PropertyPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={:.2} C, mu={:.4e} Pa-s, cp={:.1} J/kg-K, rho={:.2} kg/m3, ",
            to_degc(self.temperature),
            self.viscosity.value,
            self.specific_heat.value,
            self.density.value,
        )?;
        write!(
            f,
            "k={:.4} W/m-K, Pr={:.3}, alpha={:.4e} m2/s",
            self.conductivity.value, self.prandtl, self.thermal_diffusivity
        )
    }
}

/// An immutable, configured fluid.
///
/// Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct Fluid {
    provider: Arc<dyn FluidProperties>,
    temperature: Limits,
    concentration_limits: Option<Limits>,
    concentration: Real,
    t_freeze: Option<Real>,
    construction_warnings: Vec<RangeWarning>,
}

impl fmt::Debug for Fluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fluid")
            .field("name", &self.name())
            .field("temperature", &self.temperature)
            .field("concentration_limits", &self.concentration_limits)
            .field("concentration", &self.concentration)
            .field("t_freeze", &self.t_freeze)
            .finish()
    }
}

impl Fluid {
    pub fn builder(provider: impl FluidProperties + 'static) -> FluidBuilder {
        FluidBuilder::new(provider)
    }

    /// Build a catalog fluid by name or alias at the given concentration.
    pub fn by_name(name: &str, concentration: Real) -> FluidResult<Self> {
        catalog::find(name)?
            .kind
            .builder()
            .concentration(concentration)
            .build()
    }

    pub fn name(&self) -> &str {
        self.provider.name()
    }

    /// Instance concentration, after clamping.
    pub fn concentration(&self) -> Real {
        self.concentration
    }

    /// Effective temperature limits, including the freeze point floor.
    pub fn temperature_limits(&self) -> Limits {
        self.temperature
    }

    pub fn t_min(&self) -> Real {
        self.temperature.min()
    }

    pub fn t_max(&self) -> Real {
        self.temperature.max()
    }

    pub fn concentration_limits(&self) -> Option<Limits> {
        self.concentration_limits
    }

    /// Warnings raised while the instance was built.
    pub fn construction_warnings(&self) -> &[RangeWarning] {
        &self.construction_warnings
    }

    /// Freeze point for the instance concentration, in °C.
    ///
    /// Fluids without a freeze curve report their lower temperature limit.
    pub fn freeze_point(&self) -> Real {
        self.t_freeze.unwrap_or(self.temperature.min())
    }

    /// Freeze point at another concentration, clamped like any other input.
    pub fn freeze_point_at(&self, concentration: Real) -> Real {
        match self.freeze_curve(concentration) {
            Some(clamped) => clamped.report(self.name()),
            None => self.temperature.min(),
        }
    }

    fn freeze_curve(&self, concentration: Real) -> Option<Clamped> {
        let curve = self.provider.freeze_point_coefficients()?;
        let limits = self.concentration_limits.as_ref()?;
        Some(evaluate_freeze_point(
            curve,
            concentration,
            limits,
            FREEZE_THRESHOLD,
        ))
    }

    /// Clamp a temperature into this fluid's limits without logging.
    pub fn clamp_temperature(&self, temperature: Real) -> Clamped {
        self.temperature.clamp_temperature(temperature)
    }

    fn checked(&self, temperature: Real) -> Real {
        self.clamp_temperature(temperature).report(self.name())
    }

    fn fit_at(&self, fit: &PropertyFit, temperature: Real) -> Real {
        fit.evaluate(temperature, self.concentration)
    }

    fn viscosity_at(&self, t: Real) -> Real {
        self.fit_at(self.provider.viscosity_coefficients(), t)
    }

    fn specific_heat_at(&self, t: Real) -> Real {
        self.fit_at(self.provider.specific_heat_coefficients(), t)
    }

    fn density_at(&self, t: Real) -> Real {
        self.fit_at(self.provider.density_coefficients(), t)
    }

    fn conductivity_at(&self, t: Real) -> Real {
        self.fit_at(self.provider.conductivity_coefficients(), t)
    }

    fn prandtl_at(&self, t: Real) -> Real {
        derive_prandtl(
            self.specific_heat_at(t),
            self.viscosity_at(t),
            self.conductivity_at(t),
        )
    }

    fn thermal_diffusivity_at(&self, t: Real) -> Real {
        derive_thermal_diffusivity(
            self.conductivity_at(t),
            self.density_at(t),
            self.specific_heat_at(t),
        )
    }

    /// Value of `property` at an already clamped temperature.
    fn value_at(&self, property: Property, t: Real) -> Real {
        match property {
            Property::Viscosity => self.viscosity_at(t),
            Property::SpecificHeat => self.specific_heat_at(t),
            Property::Density => self.density_at(t),
            Property::Conductivity => self.conductivity_at(t),
            Property::Prandtl => self.prandtl_at(t),
            Property::ThermalDiffusivity => self.thermal_diffusivity_at(t),
            Property::FreezePoint => self.freeze_point(),
        }
    }

    /// Dynamic viscosity [Pa·s] at `temperature` °C.
    pub fn viscosity(&self, temperature: Real) -> Real {
        self.viscosity_at(self.checked(temperature))
    }

    pub fn mu(&self, temperature: Real) -> Real {
        self.viscosity(temperature)
    }

    /// Specific heat [J/(kg·K)] at `temperature` °C.
    pub fn specific_heat(&self, temperature: Real) -> Real {
        self.specific_heat_at(self.checked(temperature))
    }

    pub fn cp(&self, temperature: Real) -> Real {
        self.specific_heat(temperature)
    }

    /// Density [kg/m³] at `temperature` °C.
    pub fn density(&self, temperature: Real) -> Real {
        self.density_at(self.checked(temperature))
    }

    pub fn rho(&self, temperature: Real) -> Real {
        self.density(temperature)
    }

    /// Thermal conductivity [W/(m·K)] at `temperature` °C.
    pub fn conductivity(&self, temperature: Real) -> Real {
        self.conductivity_at(self.checked(temperature))
    }

    pub fn k(&self, temperature: Real) -> Real {
        self.conductivity(temperature)
    }

    /// Prandtl number `cp · μ / k` at `temperature` °C.
    pub fn prandtl(&self, temperature: Real) -> Real {
        self.prandtl_at(self.checked(temperature))
    }

    pub fn pr(&self, temperature: Real) -> Real {
        self.prandtl(temperature)
    }

    /// Thermal diffusivity `k / (ρ · cp)` [m²/s] at `temperature` °C.
    pub fn thermal_diffusivity(&self, temperature: Real) -> Real {
        self.thermal_diffusivity_at(self.checked(temperature))
    }

    pub fn alpha(&self, temperature: Real) -> Real {
        self.thermal_diffusivity(temperature)
    }

    /// Evaluate any property, logging range warnings like the named accessors.
    pub fn value(&self, property: Property, temperature: Real) -> Real {
        match property {
            Property::FreezePoint => self.freeze_point(),
            _ => self.value_at(property, self.checked(temperature)),
        }
    }

    /// Evaluate any property and return its warnings instead of logging them.
    ///
    /// `FreezePoint` ignores the temperature.
    pub fn evaluate(&self, property: Property, temperature: Real) -> Evaluation {
        if property == Property::FreezePoint {
            return Evaluation {
                value: self.freeze_point(),
                warnings: Vec::new(),
            };
        }
        let clamped = self.clamp_temperature(temperature);
        Evaluation {
            value: self.value_at(property, clamped.value),
            warnings: clamped.warning.into_iter().collect(),
        }
    }

    /// Every property at one temperature, base quantities typed.
    pub fn property_pack(&self, temperature: Real) -> PropertyPack {
        let t = self.checked(temperature);
        let viscosity = self.viscosity_at(t);
        let specific_heat = self.specific_heat_at(t);
        let density = self.density_at(t);
        let conductivity = self.conductivity_at(t);
        PropertyPack {
            temperature: degc(t),
            viscosity: pa_s(viscosity),
            specific_heat: j_per_kg_k(specific_heat),
            density: kg_per_m3(density),
            conductivity: w_per_m_k(conductivity),
            prandtl: derive_prandtl(specific_heat, viscosity, conductivity),
            thermal_diffusivity: derive_thermal_diffusivity(conductivity, density, specific_heat),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::tables::{EthylAlcohol, Water};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn aliases_match_named_accessors(frac in 0.0_f64..=1.0) {
            let fluid = Fluid::builder(Water).build().unwrap();
            let t = fluid.t_min() + frac * (fluid.t_max() - fluid.t_min());
            prop_assert_eq!(fluid.mu(t), fluid.viscosity(t));
            prop_assert_eq!(fluid.cp(t), fluid.specific_heat(t));
            prop_assert_eq!(fluid.rho(t), fluid.density(t));
            prop_assert_eq!(fluid.k(t), fluid.conductivity(t));
        }

        #[test]
        fn prandtl_is_the_primitive_ratio(x in 0.0_f64..0.6, frac in 0.0_f64..=1.0) {
            let fluid = Fluid::builder(EthylAlcohol).concentration(x).build().unwrap();
            let t = fluid.t_min() + frac * (fluid.t_max() - fluid.t_min());
            prop_assert_eq!(
                fluid.prandtl(t),
                fluid.specific_heat(t) * fluid.viscosity(t) / fluid.conductivity(t)
            );
        }

        #[test]
        fn queries_never_leave_the_limits(t in -200.0_f64..200.0) {
            let fluid = Fluid::builder(Water).build().unwrap();
            let clamped = fluid.clamp_temperature(t).value;
            prop_assert!(fluid.temperature_limits().contains(clamped));
            prop_assert_eq!(fluid.density(t), fluid.density(clamped));
        }
    }
}
