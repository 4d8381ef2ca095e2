//! TCVN 5574:2018 (Vietnam).
//!
//! Design strengths Rb and Rs are entered directly as the material
//! strengths, so no reduction is applied to the section output. The
//! equivalent rectangular block (clause 8.1.2.3) uses the full Rb over a
//! depth of 0.8·x for ordinary concrete up to B60.

use super::DesignCode;
use crate::materials::ConcreteProperty;

/// TCVN 5574:2018
#[derive(Debug, Clone, Copy, Default)]
pub struct Tcvn5574;

impl Tcvn5574 {
    pub const INTENSITY: f64 = 1.0;
    pub const DEPTH_FACTOR: f64 = 0.8;
}

impl DesignCode for Tcvn5574 {
    fn name(&self) -> &'static str {
        "TCVN 5574:2018 (Vietnam)"
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
        concrete.strength_mpa
    }

    fn stress_block_factors(&self, _concrete: &ConcreteProperty) -> (f64, f64) {
        (Self::INTENSITY, Self::DEPTH_FACTOR)
    }

    fn reduction_factor(&self, _net_tensile_strain: f64, _yield_strength_mpa: f64) -> f64 {
        1.0
    }

    fn is_material_factor_based(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_uses_full_rb() {
        let concrete = ConcreteProperty::new(17.0, 0.0035, 30_000.0);
        assert_eq!(Tcvn5574.stress_block_factors(&concrete), (1.0, 0.8));
        assert_eq!(Tcvn5574.concrete_stress(0.002, &concrete), 17.0);
    }

    #[test]
    fn test_no_output_reduction() {
        assert_eq!(Tcvn5574.reduction_factor(0.0, 350.0), 1.0);
        assert_eq!(Tcvn5574.reduction_factor(0.05, 350.0), 1.0);
    }
}
