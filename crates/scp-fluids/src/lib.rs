//! scp-fluids: fast curve-fit properties for secondary coolants.
//!
//! Provides:
//! - Range guard (bound validation, clamp-and-warn policy)
//! - Polynomial property engine over triangular coefficient tables
//! - `FluidProperties` trait for table providers
//! - Built-in water and ethyl alcohol-water tables
//! - Serialized fluid definitions for user-supplied tables
//!
//! # Architecture
//!
//! Providers only hold data (name, bounds, tables). [`Fluid`] owns the
//! evaluation policy: it is built once through [`FluidBuilder`], which fixes
//! the concentration and raises `t_min` to the freeze point, and afterwards
//! every query clamps its temperature and evaluates
//! `Σ a_ij · c^i · T^j`. Out-of-range inputs never fail; they are clamped and
//! reported through `tracing` (or returned, via [`Fluid::evaluate`]).
//!
//! # Example
//!
//! ```
//! use scp_fluids::Fluid;
//!
//! let water = Fluid::by_name("water", 0.0).unwrap();
//! let mu = water.viscosity(25.0);
//! assert!((mu - 8.9e-4).abs() < 2e-5);
//!
//! let blend = Fluid::by_name("ethanol", 0.3).unwrap();
//! assert!(blend.t_min() < -15.0);
//! println!("Pr = {:.2}", blend.prandtl(10.0));
//! ```

pub mod catalog;
pub mod coefficients;
pub mod definition;
pub mod engine;
pub mod error;
pub mod fluid;
pub mod model;
pub mod property;
pub mod range;
pub mod sweeps;
pub mod tables;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, FluidKind, catalog, filter_catalog};
pub use coefficients::{CoefficientMatrix, FitForm, ORDER, PropertyFit};
pub use definition::{FluidDefinition, FluidSpec};
pub use engine::{
    FREEZE_THRESHOLD, derive_prandtl, derive_thermal_diffusivity, evaluate_freeze_point,
    evaluate_polynomial, evaluate_property,
};
pub use error::{FluidError, FluidResult};
pub use fluid::{Evaluation, Fluid, FluidBuilder, PropertyPack};
pub use model::FluidProperties;
pub use property::Property;
pub use range::{
    Bound, Clamped, Limits, Quantity, RangeWarning, clamp_concentration, clamp_temperature,
    validate_concentration_bounds, validate_temperature_bounds,
};
pub use sweeps::{MAX_SWEEP_POINTS, SweepPoint, TemperatureSweep};
pub use tables::{EthylAlcohol, Water};
