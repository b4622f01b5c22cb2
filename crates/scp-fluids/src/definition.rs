//! Serialized fluid definitions and catalog selectors.
//!
//! A [`FluidDefinition`] carries a complete set of tables as data, so a fluid
//! missing from the catalog can be described in YAML or JSON and evaluated by
//! the same engine. Coefficient shapes are checked while deserializing; bound
//! ordering is checked when the fluid is built.
//!
//! ```yaml
//! name: Brine
//! temperature_limits: [-20.0, 40.0]
//! concentration_limits: [0.0, 0.3]
//! viscosity:
//!   form: exponential
//!   coefficients: [[-6.3, -0.03, 0.0002, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0], [0.0]]
//! # specific_heat, density and conductivity follow the same layout
//! freeze_point: [0.0, -60.0]
//! ```

use scp_core::Real;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, FluidKind};
use crate::coefficients::PropertyFit;
use crate::error::FluidResult;
use crate::fluid::{Fluid, FluidBuilder};
use crate::model::FluidProperties;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluidDefinition {
    pub name: String,
    /// `(t_min, t_max)` in °C.
    pub temperature_limits: (Real, Real),
    /// `(c_min, c_max)`; omit for a pure fluid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_limits: Option<(Real, Real)>,
    pub viscosity: PropertyFit,
    pub specific_heat: PropertyFit,
    pub density: PropertyFit,
    pub conductivity: PropertyFit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze_point: Option<Vec<Real>>,
}

impl FluidDefinition {
    pub fn from_yaml_str(yaml: &str) -> FluidResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> FluidResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_yaml_string(&self) -> FluidResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn builder(self) -> FluidBuilder {
        FluidBuilder::new(self)
    }
}

impl FluidProperties for FluidDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn viscosity_coefficients(&self) -> &PropertyFit {
        &self.viscosity
    }

    fn specific_heat_coefficients(&self) -> &PropertyFit {
        &self.specific_heat
    }

    fn density_coefficients(&self) -> &PropertyFit {
        &self.density
    }

    fn conductivity_coefficients(&self) -> &PropertyFit {
        &self.conductivity
    }

    fn temperature_limits(&self) -> (Real, Real) {
        self.temperature_limits
    }

    fn concentration_limits(&self) -> Option<(Real, Real)> {
        self.concentration_limits
    }

    fn freeze_point_coefficients(&self) -> Option<&[Real]> {
        self.freeze_point.as_deref()
    }
}

/// Selects a built-in fluid, e.g. `{ fluid: ethyl_alcohol, concentration: 0.3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidSpec {
    pub fluid: FluidKind,
    #[serde(default)]
    pub concentration: Real,
}

impl FluidSpec {
    pub fn new(fluid: FluidKind, concentration: Real) -> Self {
        Self {
            fluid,
            concentration,
        }
    }

    /// Parse a catalog name or alias.
    pub fn named(name: &str, concentration: Real) -> FluidResult<Self> {
        Ok(Self::new(catalog::find(name)?.kind, concentration))
    }

    pub fn build(&self) -> FluidResult<Fluid> {
        self.fluid
            .builder()
            .concentration(self.concentration)
            .build()
    }
}
