//! # Materials
//!
//! Material definitions for reinforced-concrete sections.
//!
//! - [`ConcreteProperty`] - compressive strength, ultimate strain, modulus
//! - [`SteelProperty`] - yield strength and modulus with a derived yield strain
//! - [`ReinforcementBar`] - one longitudinal bar positioned on the section
//!
//! Layout helpers ([`circular_layout`], [`rectangular_layout`]) build the
//! usual symmetric bar arrangements from a bar count and diameter.
//!
//! ## Example
//!
//! ```rust
//! use column_core::materials::{ConcreteProperty, SteelProperty, rectangular_layout};
//!
//! let concrete = ConcreteProperty::new(30.0, 0.003, 25_742.0);
//! let steel = SteelProperty::new(420.0, 200_000.0);
//! let bars = rectangular_layout(400.0, 600.0, 40.0, 8, 20.0);
//!
//! assert_eq!(bars.len(), 8);
//! assert!(concrete.validate().is_ok() && steel.validate().is_ok());
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::{ConcreteProperty, DEFAULT_ULTIMATE_STRAIN};
pub use reinforcement::{
    bar_area_mm2, circular_layout, rectangular_layout, total_area_mm2, ReinforcementBar,
    SteelProperty, DEFAULT_STEEL_MODULUS_MPA,
};
