//! # Design Codes
//!
//! Everything that differs between design standards lives behind the
//! [`DesignCode`] trait, so the section evaluator stays code-agnostic:
//! material stress laws, the equivalent stress-block factors, and the
//! capacity-reduction factor.
//!
//! ## Available Codes
//!
//! | Selector | Standard | Reduction approach |
//! |---|---|---|
//! | [`DesignCodeKind::Aci318`] | ACI 318-25 | φ applied to nominal strength |
//! | [`DesignCodeKind::Tcvn5574`] | TCVN 5574:2018 | design strengths Rb, Rs entered directly |
//! | [`DesignCodeKind::Eurocode2`] | EN 1992-1-1 | partial factors on fcd, fyd |
//!
//! ## Example
//!
//! ```rust
//! use column_core::codes::DesignCodeKind;
//!
//! let code = DesignCodeKind::Aci318.strategy();
//! assert_eq!(code.reduction_factor(0.010, 420.0), 0.90);
//! assert!(!code.is_material_factor_based());
//! ```

pub mod aci318;
pub mod eurocode2;
pub mod tcvn5574;

pub use aci318::Aci318;
pub use eurocode2::Eurocode2;
pub use tcvn5574::Tcvn5574;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteProperty, SteelProperty};

/// Code-specific formulas used by the section evaluator.
///
/// Sign convention: positive strain and stress are compression.
///
/// Implementations hold no mutable state and are shared by reference
/// between any number of analyzers.
pub trait DesignCode: Send + Sync + std::fmt::Debug {
    /// Display name, e.g. "ACI 318-25 (USA)"
    fn name(&self) -> &'static str;

    /// Map the user-entered concrete strength to the value used internally.
    fn design_concrete_strength(&self, input_fc: f64) -> f64;

    /// Map the user-entered steel yield strength to the value used internally.
    fn design_steel_yield(&self, input_fy: f64) -> f64;

    /// Concrete stress at `strain`; zero for strain ≤ 0 (no tension).
    fn concrete_stress(&self, strain: f64, concrete: &ConcreteProperty) -> f64;

    /// Steel stress at `strain`, elastic–perfectly-plastic by default.
    fn steel_stress(&self, strain: f64, steel: &SteelProperty) -> f64 {
        elastic_plastic_stress(strain, steel)
    }

    /// Equivalent stress block factors `(intensity, depth)`.
    ///
    /// The block stress is `intensity × design strength` and its depth is
    /// `a = depth × c`.
    fn stress_block_factors(&self, concrete: &ConcreteProperty) -> (f64, f64);

    /// Capacity-reduction factor for a given net tensile strain (positive = tension).
    fn reduction_factor(&self, net_tensile_strain: f64, yield_strength_mpa: f64) -> f64;

    /// True when strength reduction is already built into the material inputs.
    fn is_material_factor_based(&self) -> bool;
}

/// Elastic–perfectly-plastic steel law: σ = sign(ε)·min(|ε|·Es, fy).
pub fn elastic_plastic_stress(strain: f64, steel: &SteelProperty) -> f64 {
    let stress = (strain.abs() * steel.elastic_modulus_mpa()).min(steel.yield_strength_mpa());
    if strain >= 0.0 {
        stress
    } else {
        -stress
    }
}

static ACI318: Aci318 = Aci318;
static TCVN5574: Tcvn5574 = Tcvn5574;
static EUROCODE2: Eurocode2 = Eurocode2;

/// Selector for the supported design codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesignCodeKind {
    /// ACI 318-25 (USA)
    #[default]
    #[serde(rename = "ACI318")]
    Aci318,
    /// TCVN 5574:2018 (Vietnam)
    #[serde(rename = "TCVN5574")]
    Tcvn5574,
    /// Eurocode 2, EN 1992-1-1
    #[serde(rename = "EC2")]
    Eurocode2,
}

impl DesignCodeKind {
    pub const ALL: [DesignCodeKind; 3] = [
        DesignCodeKind::Aci318,
        DesignCodeKind::Tcvn5574,
        DesignCodeKind::Eurocode2,
    ];

    /// Parse the integer code selector used by legacy input files
    /// (0 = ACI 318, 1 = TCVN 5574, 2 = Eurocode 2).
    pub fn from_index(index: i64) -> CalcResult<Self> {
        match index {
            0 => Ok(DesignCodeKind::Aci318),
            1 => Ok(DesignCodeKind::Tcvn5574),
            2 => Ok(DesignCodeKind::Eurocode2),
            _ => Err(CalcError::invalid_input(
                "design_code",
                index.to_string(),
                "Design code index must be 0 (ACI 318), 1 (TCVN 5574) or 2 (Eurocode 2)",
            )),
        }
    }

    /// Integer selector for legacy input files.
    pub fn index(&self) -> i64 {
        match self {
            DesignCodeKind::Aci318 => 0,
            DesignCodeKind::Tcvn5574 => 1,
            DesignCodeKind::Eurocode2 => 2,
        }
    }

    /// Shared, stateless strategy instance for this code.
    pub fn strategy(&self) -> &'static dyn DesignCode {
        match self {
            DesignCodeKind::Aci318 => &ACI318,
            DesignCodeKind::Tcvn5574 => &TCVN5574,
            DesignCodeKind::Eurocode2 => &EUROCODE2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.strategy().name()
    }
}

impl std::fmt::Display for DesignCodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steel_law_is_symmetric() {
        let steel = SteelProperty::new(420.0, 200_000.0);
        assert!((elastic_plastic_stress(0.001, &steel) - 200.0).abs() < 1e-9);
        assert!((elastic_plastic_stress(-0.001, &steel) + 200.0).abs() < 1e-9);
        assert_eq!(elastic_plastic_stress(0.01, &steel), 420.0);
        assert_eq!(elastic_plastic_stress(-0.01, &steel), -420.0);
        assert_eq!(elastic_plastic_stress(0.0, &steel), 0.0);
    }

    #[test]
    fn test_every_code_shares_steel_law() {
        let steel = SteelProperty::new(500.0, 200_000.0);
        for kind in DesignCodeKind::ALL {
            let code = kind.strategy();
            assert!((code.steel_stress(0.0015, &steel) - 300.0).abs() < 1e-9);
            assert_eq!(code.steel_stress(-0.005, &steel), -500.0);
        }
    }

    #[test]
    fn test_concrete_carries_no_tension() {
        let concrete = ConcreteProperty::new(30.0, 0.003, 25_742.0);
        for kind in DesignCodeKind::ALL {
            let code = kind.strategy();
            assert_eq!(code.concrete_stress(-0.001, &concrete), 0.0);
            assert_eq!(code.concrete_stress(0.0, &concrete), 0.0);
            assert!(code.concrete_stress(0.002, &concrete) > 0.0);
        }
    }

    #[test]
    fn test_input_strengths_pass_through() {
        for kind in DesignCodeKind::ALL {
            let code = kind.strategy();
            assert_eq!(code.design_concrete_strength(32.0), 32.0);
            assert_eq!(code.design_steel_yield(420.0), 420.0);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for kind in DesignCodeKind::ALL {
            assert_eq!(DesignCodeKind::from_index(kind.index()).unwrap(), kind);
        }
        let err = DesignCodeKind::from_index(3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&DesignCodeKind::Eurocode2).unwrap();
        assert_eq!(json, "\"EC2\"");
        let parsed: DesignCodeKind = serde_json::from_str("\"TCVN5574\"").unwrap();
        assert_eq!(parsed, DesignCodeKind::Tcvn5574);
    }

    #[test]
    fn test_material_factor_flags() {
        assert!(!DesignCodeKind::Aci318.strategy().is_material_factor_based());
        assert!(DesignCodeKind::Tcvn5574.strategy().is_material_factor_based());
        assert!(DesignCodeKind::Eurocode2.strategy().is_material_factor_based());
    }
}
