//! Built-in coefficient tables.
//!
//! Each fluid is a unit struct implementing [`FluidProperties`] over
//! `static` tables. Temperatures are in °C, concentrations are mass
//! fractions, and viscosity fits are expressed as `ln(μ / Pa·s)`.
//!
//! [`FluidProperties`]: crate::FluidProperties

mod ethyl_alcohol;
mod water;

pub use ethyl_alcohol::EthylAlcohol;
pub use water::Water;
