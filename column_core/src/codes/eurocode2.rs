//! Eurocode 2, EN 1992-1-1.
//!
//! Partial factors are applied to the inputs: the concrete strength is fcd
//! and the steel strength fyd. The rectangular stress distribution of
//! clause 3.1.7(3) uses η = 1.0 and λ = 0.8, valid for fck ≤ 50 MPa. Since
//! only fcd is known here, the high-strength reductions of η and λ are not
//! applied.

use super::DesignCode;
use crate::materials::ConcreteProperty;

/// Eurocode 2 (EN 1992-1-1)
#[derive(Debug, Clone, Copy, Default)]
pub struct Eurocode2;

impl Eurocode2 {
    /// η, effective strength factor
    pub const ETA: f64 = 1.0;
    /// λ, effective height factor
    pub const LAMBDA: f64 = 0.8;
}

impl DesignCode for Eurocode2 {
    fn name(&self) -> &'static str {
        "Eurocode 2 (EN 1992-1-1)"
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
        (Self::ETA, Self::LAMBDA)
    }

    fn reduction_factor(&self, _net_tensile_strain: f64, _yield_strength_mpa: f64) -> f64 {
        1.0
    }

    fn is_material_factor_based(&self) -> bool {
        true
    }
}
