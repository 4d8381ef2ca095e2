//! Concrete material properties.
//!
//! The compressive strength field holds whatever the selected design code
//! expects as input: the specified strength f'c for ACI 318, the design
//! strength Rb for TCVN 5574, or fcd for Eurocode 2.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default ultimate compressive strain (ACI 318 value)
pub const DEFAULT_ULTIMATE_STRAIN: f64 = 0.003;

/// Concrete properties used by the section evaluator.
///
/// ## JSON Example
///
/// ```json
/// { "strength_mpa": 30.0, "ultimate_strain": 0.003, "elastic_modulus_mpa": 25742.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperty {
    /// Compressive strength (MPa): f'c, Rb or fcd depending on the code
    pub strength_mpa: f64,

    /// Ultimate compressive strain at the extreme fibre (e.g. 0.003 ACI, 0.0035 EC2)
    #[serde(default = "default_ultimate_strain")]
    pub ultimate_strain: f64,

    /// Elastic modulus Ec (MPa)
    #[serde(default)]
    pub elastic_modulus_mpa: f64,
}

fn default_ultimate_strain() -> f64 {
    DEFAULT_ULTIMATE_STRAIN
}

impl ConcreteProperty {
    /// Create concrete properties from strength, ultimate strain and modulus.
    pub fn new(strength_mpa: f64, ultimate_strain: f64, elastic_modulus_mpa: f64) -> Self {
        ConcreteProperty {
            strength_mpa,
            ultimate_strain,
            elastic_modulus_mpa,
        }
    }

    /// Concrete with the ACI 318 normal-weight modulus Ec = 4700·√f'c.
    ///
    /// ```rust
    /// use column_core::materials::ConcreteProperty;
    ///
    /// let c30 = ConcreteProperty::with_aci_modulus(30.0);
    /// assert!((c30.elastic_modulus_mpa - 25742.96).abs() < 0.01);
    /// ```
    pub fn with_aci_modulus(strength_mpa: f64) -> Self {
        ConcreteProperty::new(
            strength_mpa,
            DEFAULT_ULTIMATE_STRAIN,
            4700.0 * strength_mpa.max(0.0).sqrt(),
        )
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.strength_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "concrete.strength_mpa",
                self.strength_mpa.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if self.ultimate_strain <= 0.0 || self.ultimate_strain > 0.01 {
            return Err(CalcError::invalid_input(
                "concrete.ultimate_strain",
                self.ultimate_strain.to_string(),
                "Ultimate strain must be between 0 and 0.01",
            ));
        }
        if self.elastic_modulus_mpa < 0.0 {
            return Err(CalcError::invalid_input(
                "concrete.elastic_modulus_mpa",
                self.elastic_modulus_mpa.to_string(),
                "Elastic modulus cannot be negative",
            ));
        }
        Ok(())
    }
}

impl Default for ConcreteProperty {
    fn default() -> Self {
        ConcreteProperty::new(0.0, DEFAULT_ULTIMATE_STRAIN, 0.0)
    }
}
