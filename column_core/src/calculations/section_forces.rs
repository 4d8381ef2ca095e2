//! # Section Forces by Strain Compatibility
//!
//! [`ColumnAnalyzer`] evaluates the nominal axial force and moment a
//! reinforced-concrete section develops for an assumed neutral-axis depth.
//!
//! ## Assumptions
//!
//! - Plane sections remain plane: strain varies linearly with depth and
//!   reaches the ultimate concrete strain at the extreme compression face
//! - Concrete carries no tension; compression is an equivalent rectangular
//!   stress block supplied by the design code
//! - Steel is elastic–perfectly-plastic; concrete displaced by bars is not
//!   deducted
//! - Bending about the x axis only, compression face at `+y`
//!
//! ## Sign Convention
//!
//! Compression is positive. The moment is taken about the section centroid
//! and is positive when the compression face is on the `+y` side.
//!
//! ## Example
//!
//! ```rust
//! use column_core::calculations::ColumnAnalyzer;
//! use column_core::codes::DesignCodeKind;
//! use column_core::materials::{circular_layout, ConcreteProperty, SteelProperty};
//! use column_core::section::SectionGeometry;
//!
//! let mut analyzer = ColumnAnalyzer::new(
//!     ConcreteProperty::new(30.0, 0.003, 25_742.0),
//!     SteelProperty::new(420.0, 200_000.0),
//!     SectionGeometry::circular(500.0),
//!     DesignCodeKind::Aci318.strategy(),
//! );
//! analyzer.add_bars(circular_layout(500.0, 40.0, 10, 16.0));
//!
//! let point = analyzer.calculate_section_forces(300.0);
//! println!("Pn = {:.0} kN, Mn = {:.0} kNm, phi = {:.2}",
//!     point.axial_force_kn, point.moment_knm, point.reduction_factor);
//! ```

use serde::{Deserialize, Serialize};

use crate::codes::DesignCode;
use crate::materials::{total_area_mm2, ConcreteProperty, ReinforcementBar, SteelProperty};
use crate::section::{circular_compression_zone, rectangular_area, SectionGeometry, SectionShape};
use crate::solver::SolverConfig;
use crate::units::{KilonewtonMeters, Kilonewtons, Megapascals, Millimeters, NewtonMillimeters, Newtons, SqMm};

/// Neutral-axis depths at or below this value (mm) are treated as pure tension
pub const PURE_TENSION_DEPTH_MM: f64 = 1e-5;

/// Net tensile strain reported for the pure-tension case (unbounded tension)
pub const UNBOUNDED_TENSILE_STRAIN: f64 = 999.0;

/// Reduction factor used for pure tension by codes that reduce output strength
pub const PURE_TENSION_PHI: f64 = 0.90;

/// One point of the section response at a given neutral-axis depth.
///
/// ## JSON Example
///
/// ```json
/// {
///   "neutral_axis_mm": 300.0,
///   "axial_force_kn": 3050.2,
///   "moment_knm": 301.7,
///   "reduction_factor": 0.65,
///   "design_axial_kn": 1982.6,
///   "design_moment_knm": 196.1,
///   "net_tensile_strain": 0.00075
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Neutral-axis depth c from the extreme compression face (mm)
    pub neutral_axis_mm: f64,
    /// Nominal axial force Pn, compression positive (kN)
    pub axial_force_kn: f64,
    /// Nominal moment Mn about the centroid (kNm)
    pub moment_knm: f64,
    /// Capacity-reduction factor φ
    pub reduction_factor: f64,
    /// Design axial force φPn (kN)
    pub design_axial_kn: f64,
    /// Design moment φMn (kNm)
    pub design_moment_knm: f64,
    /// Net tensile strain εt at the extreme tension bar (0 when all bars are compressed)
    pub net_tensile_strain: f64,
}

impl AnalysisResult {
    fn new(
        neutral_axis_mm: f64,
        axial: Kilonewtons,
        moment: KilonewtonMeters,
        reduction_factor: f64,
        net_tensile_strain: f64,
    ) -> Self {
        AnalysisResult {
            neutral_axis_mm,
            axial_force_kn: axial.value(),
            moment_knm: moment.value(),
            reduction_factor,
            design_axial_kn: reduction_factor * axial.value(),
            design_moment_knm: reduction_factor * moment.value(),
            net_tensile_strain,
        }
    }
}

/// Strain-compatibility analyzer for one column section.
///
/// Holds the materials, geometry and bar layout, and borrows a stateless
/// design-code strategy that must outlive it.
#[derive(Debug, Clone)]
pub struct ColumnAnalyzer<'a> {
    concrete: ConcreteProperty,
    steel: SteelProperty,
    geometry: SectionGeometry,
    bars: Vec<ReinforcementBar>,
    code: &'a dyn DesignCode,
    solver: SolverConfig,
}

impl<'a> ColumnAnalyzer<'a> {
    /// Create an analyzer with no bars.
    pub fn new(
        concrete: ConcreteProperty,
        steel: SteelProperty,
        geometry: SectionGeometry,
        code: &'a dyn DesignCode,
    ) -> Self {
        ColumnAnalyzer {
            concrete,
            steel,
            geometry,
            bars: Vec::new(),
            code,
            solver: SolverConfig::default(),
        }
    }

    /// Override the root-finder settings used by the axial-load inversion.
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Append one bar; insertion order is preserved.
    pub fn add_bar(&mut self, bar: ReinforcementBar) {
        self.bars.push(bar);
    }

    /// Append several bars in order.
    pub fn add_bars(&mut self, bars: impl IntoIterator<Item = ReinforcementBar>) {
        self.bars.extend(bars);
    }

    /// Remove all bars.
    pub fn clear_bars(&mut self) {
        self.bars.clear();
    }

    pub fn bars(&self) -> &[ReinforcementBar] {
        &self.bars
    }

    pub fn concrete(&self) -> &ConcreteProperty {
        &self.concrete
    }

    pub fn steel(&self) -> &SteelProperty {
        &self.steel
    }

    pub fn geometry(&self) -> &SectionGeometry {
        &self.geometry
    }

    pub fn code(&self) -> &'a dyn DesignCode {
        self.code
    }

    pub fn solver_config(&self) -> SolverConfig {
        self.solver
    }

    /// Nominal concentric compression capacity
    /// P₀ = α·fc·Ag + ΣAs·fy (kN), the limit of the response as c → ∞.
    pub fn pure_compression_capacity_kn(&self) -> f64 {
        let fc = self.code.design_concrete_strength(self.concrete.strength_mpa);
        let fy = self.code.design_steel_yield(self.steel.yield_strength_mpa());
        let (intensity, _) = self.code.stress_block_factors(&self.concrete);

        let concrete = Megapascals(intensity * fc) * SqMm(self.geometry.gross_area_mm2());
        let steel = Megapascals(fy) * SqMm(total_area_mm2(&self.bars));
        Kilonewtons::from(concrete + steel).value()
    }

    /// Nominal concentric tension capacity −ΣAs·fy (kN).
    pub fn pure_tension_capacity_kn(&self) -> f64 {
        let fy = self.code.design_steel_yield(self.steel.yield_strength_mpa());
        Kilonewtons::from(Megapascals(-fy) * SqMm(total_area_mm2(&self.bars))).value()
    }

    /// Section forces for an assumed neutral-axis depth `c` (mm).
    ///
    /// Never fails. Depths at or below [`PURE_TENSION_DEPTH_MM`] return the
    /// pure-tension state, which sidesteps the `(c − d)/c` strain term.
    pub fn calculate_section_forces(&self, neutral_axis_mm: f64) -> AnalysisResult {
        let c = neutral_axis_mm;

        let fc_design = self.code.design_concrete_strength(self.concrete.strength_mpa);
        let fy_design = self.code.design_steel_yield(self.steel.yield_strength_mpa());

        if c <= PURE_TENSION_DEPTH_MM {
            return self.pure_tension_state(c, fy_design);
        }

        // === Concrete stress block ===

        let (intensity, depth_factor) = self.code.stress_block_factors(&self.concrete);
        let extreme = self.geometry.extreme_dimension_mm();
        let a = (depth_factor * c).min(extreme);
        let block_stress = Megapascals(intensity * fc_design);

        let (concrete_force, concrete_moment) = match self.geometry.shape {
            SectionShape::Rectangular => {
                let force = block_stress * SqMm(rectangular_area(self.geometry.width_mm, a));
                let lever_arm = Millimeters(self.geometry.height_mm / 2.0 - a / 2.0);
                (force, force * lever_arm)
            }
            SectionShape::Circular => {
                let (area, offset) = circular_compression_zone(self.geometry.width_mm, a);
                let force = block_stress * SqMm(area);
                (force, force * Millimeters(offset))
            }
        };

        // === Reinforcement ===

        let y_top = extreme / 2.0;
        let mut steel_force = Newtons(0.0);
        let mut steel_moment = NewtonMillimeters(0.0);
        let mut min_strain = f64::INFINITY;

        for bar in &self.bars {
            let depth = y_top - bar.y_mm;
            let strain = self.concrete.ultimate_strain * (c - depth) / c;
            let stress = Megapascals(self.code.steel_stress(strain, &self.steel));

            let force = stress * SqMm(bar.area_mm2);
            steel_force = steel_force + force;
            steel_moment = steel_moment + force * Millimeters(bar.y_mm);
            min_strain = min_strain.min(strain);
        }

        // Only tension counts; no bars or all bars compressed gives zero
        let net_tensile_strain = if min_strain < 0.0 { -min_strain } else { 0.0 };

        // φ uses the entered fy, not the code-adjusted value
        let phi = self
            .code
            .reduction_factor(net_tensile_strain, self.steel.yield_strength_mpa());

        AnalysisResult::new(
            c,
            (concrete_force + steel_force).into(),
            (concrete_moment + steel_moment).into(),
            phi,
            net_tensile_strain,
        )
    }

    /// Every bar yields in tension; concrete contributes nothing.
    fn pure_tension_state(&self, c: f64, fy_design: f64) -> AnalysisResult {
        let stress = Megapascals(-fy_design);
        let (force, moment) = self.bars.iter().fold(
            (Newtons(0.0), NewtonMillimeters(0.0)),
            |(p, m), bar| {
                let force = stress * SqMm(bar.area_mm2);
                (p + force, m + force * Millimeters(bar.y_mm))
            },
        );

        let phi = if self.code.is_material_factor_based() {
            1.0
        } else {
            PURE_TENSION_PHI
        };

        AnalysisResult::new(c, force.into(), moment.into(), phi, UNBOUNDED_TENSILE_STRAIN)
    }
}
