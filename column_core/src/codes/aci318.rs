//! ACI 318-25 strength design.
//!
//! - Whitney equivalent stress block, intensity 0.85 and depth factor β1
//!   (Table 22.2.2.4.3)
//! - Nominal strengths reduced by φ based on the net tensile strain of the
//!   extreme tension steel (Table 21.2.2), tied columns
//! - f'c and fy are used as entered

use super::DesignCode;
use crate::materials::ConcreteProperty;

/// ACI 318-25 (USA)
#[derive(Debug, Clone, Copy, Default)]
pub struct Aci318;

impl Aci318 {
    /// Stress block intensity factor (0.85 f'c)
    pub const INTENSITY: f64 = 0.85;
    /// β1 upper value, for f'c ≤ 28 MPa
    pub const BETA1_MAX: f64 = 0.85;
    /// β1 lower bound
    pub const BETA1_MIN: f64 = 0.65;
    /// φ for compression-controlled tied sections
    pub const PHI_COMPRESSION: f64 = 0.65;
    /// φ for tension-controlled sections
    pub const PHI_TENSION: f64 = 0.90;
    /// Steel modulus assumed when deriving εty from fy (MPa)
    pub const ASSUMED_STEEL_MODULUS_MPA: f64 = 200_000.0;
    /// Strain span of the transition zone above εty
    pub const TRANSITION_STRAIN: f64 = 0.003;

    /// β1 = 0.85 − 0.05·(f'c − 28)/7, limited to [0.65, 0.85].
    pub fn beta1(fc_mpa: f64) -> f64 {
        let beta1 = if fc_mpa > 28.0 {
            Self::BETA1_MAX - 0.05 * (fc_mpa - 28.0) / 7.0
        } else {
            Self::BETA1_MAX
        };
        beta1.max(Self::BETA1_MIN)
    }
}

impl DesignCode for Aci318 {
    fn name(&self) -> &'static str {
        "ACI 318-25 (USA)"
    }

    fn design_concrete_strength(&self, input_fc: f64) -> f64 {
        input_fc
    }

    fn design_steel_yield(&self, input_fy: f64) -> f64 {
        input_fy
    }

    fn concrete_stress(&self, strain: f64, concrete: &ConcreteProperty) -> f64 {
        if strain <= 0.0 {
            return 0.0;
        }
        Self::INTENSITY * concrete.strength_mpa
    }

    fn stress_block_factors(&self, concrete: &ConcreteProperty) -> (f64, f64) {
        (Self::INTENSITY, Self::beta1(concrete.strength_mpa))
    }

    fn reduction_factor(&self, net_tensile_strain: f64, yield_strength_mpa: f64) -> f64 {
        let ty = yield_strength_mpa / Self::ASSUMED_STEEL_MODULUS_MPA;
        if net_tensile_strain <= ty {
            return Self::PHI_COMPRESSION;
        }
        if net_tensile_strain >= ty + Self::TRANSITION_STRAIN {
            return Self::PHI_TENSION;
        }
        // Transition zone
        Self::PHI_COMPRESSION
            + (Self::PHI_TENSION - Self::PHI_COMPRESSION) * (net_tensile_strain - ty)
                / Self::TRANSITION_STRAIN
    }

    fn is_material_factor_based(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1() {
        assert_eq!(Aci318::beta1(21.0), 0.85);
        assert_eq!(Aci318::beta1(28.0), 0.85);
        assert!((Aci318::beta1(35.0) - 0.80).abs() < 1e-12);
        assert!((Aci318::beta1(30.0) - (0.85 - 0.05 * 2.0 / 7.0)).abs() < 1e-12);
        assert!((Aci318::beta1(56.0) - 0.65).abs() < 1e-12);
        assert_eq!(Aci318::beta1(80.0), 0.65);
    }

    #[test]
    fn test_stress_block() {
        let concrete = ConcreteProperty::new(35.0, 0.003, 27_800.0);
        let (alpha, beta) = Aci318.stress_block_factors(&concrete);
        assert_eq!(alpha, 0.85);
        assert!((beta - 0.80).abs() < 1e-12);
        assert!((Aci318.concrete_stress(0.001, &concrete) - 29.75).abs() < 1e-12);
    }

    #[test]
    fn test_reduction_factor_endpoints() {
        let fy = 420.0;
        let ty = fy / 200_000.0;
        assert_eq!(Aci318.reduction_factor(0.0, fy), 0.65);
        assert_eq!(Aci318.reduction_factor(ty, fy), 0.65);
        assert_eq!(Aci318.reduction_factor(ty + 0.003, fy), 0.90);
        assert_eq!(Aci318.reduction_factor(0.02, fy), 0.90);
    }

    #[test]
    fn test_reduction_factor_transition_is_linear() {
        let fy = 420.0;
        let ty = fy / 200_000.0;
        let mid = Aci318.reduction_factor(ty + 0.0015, fy);
        assert!((mid - 0.775).abs() < 1e-12);

        let quarter = Aci318.reduction_factor(ty + 0.00075, fy);
        assert!((quarter - (0.65 + 0.25 * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_reduction_factor_continuous_at_boundaries() {
        let fy = 500.0;
        let ty = fy / 200_000.0;
        let eps = 1e-12;
        assert!((Aci318.reduction_factor(ty + eps, fy) - 0.65).abs() < 1e-6);
        assert!((Aci318.reduction_factor(ty + 0.003 - eps, fy) - 0.90).abs() < 1e-6);
    }
}
