//! Property selector used by the generic evaluation entry points.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FluidError;

/// Every quantity a fluid can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Viscosity,
    SpecificHeat,
    Density,
    Conductivity,
    Prandtl,
    ThermalDiffusivity,
    FreezePoint,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Viscosity,
        Property::SpecificHeat,
        Property::Density,
        Property::Conductivity,
        Property::Prandtl,
        Property::ThermalDiffusivity,
        Property::FreezePoint,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Property::Viscosity => "viscosity",
            Property::SpecificHeat => "specific_heat",
            Property::Density => "density",
            Property::Conductivity => "conductivity",
            Property::Prandtl => "prandtl",
            Property::ThermalDiffusivity => "thermal_diffusivity",
            Property::FreezePoint => "freeze_point",
        }
    }

    /// Short symbol accepted as an alias.
    pub fn symbol(self) -> &'static str {
        match self {
            Property::Viscosity => "mu",
            Property::SpecificHeat => "cp",
            Property::Density => "rho",
            Property::Conductivity => "k",
            Property::Prandtl => "pr",
            Property::ThermalDiffusivity => "alpha",
            Property::FreezePoint => "t_freeze",
        }
    }

    pub fn units(self) -> &'static str {
        match self {
            Property::Viscosity => "Pa-s",
            Property::SpecificHeat => "J/kg-K",
            Property::Density => "kg/m3",
            Property::Conductivity => "W/m-K",
            Property::Prandtl => "-",
            Property::ThermalDiffusivity => "m2/s",
            Property::FreezePoint => "C",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = s.trim().to_ascii_lowercase().replace('-', "_");
        Property::ALL
            .into_iter()
            .find(|p| p.name() == query || p.symbol() == query)
            .ok_or_else(|| FluidError::UnknownProperty { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_symbols() {
        assert_eq!("viscosity".parse::<Property>().unwrap(), Property::Viscosity);
        assert_eq!("mu".parse::<Property>().unwrap(), Property::Viscosity);
        assert_eq!("Specific-Heat".parse::<Property>().unwrap(), Property::SpecificHeat);
        assert_eq!(" alpha ".parse::<Property>().unwrap(), Property::ThermalDiffusivity);
        assert_eq!("pr".parse::<Property>().unwrap(), Property::Prandtl);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "enthalpy".parse::<Property>().unwrap_err();
        assert_eq!(
            err,
            FluidError::UnknownProperty {
                name: "enthalpy".into()
            }
        );
    }

    #[test]
    fn names_round_trip_through_display() {
        for p in Property::ALL {
            assert_eq!(p.to_string().parse::<Property>().unwrap(), p);
        }
    }

    #[test]
    fn units_match_display_labels() {
        assert_eq!(Property::Viscosity.units(), "Pa-s");
        assert_eq!(Property::ThermalDiffusivity.units(), "m2/s");
        assert_eq!(Property::Prandtl.units(), "-");
    }
}
