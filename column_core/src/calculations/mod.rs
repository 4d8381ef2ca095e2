//! # Structural Calculations
//!
//! Short-column capacity by strain compatibility. Everything is driven by a
//! [`ColumnAnalyzer`], which owns the section description and borrows a
//! design-code strategy:
//!
//! - [`section_forces`] - Pn, Mn and φ for one neutral-axis depth
//! - [`interaction`] - the P–M interaction diagram over a fixed depth schedule
//! - [`neutral_axis`] - the neutral-axis depth that carries a given axial load
//! - [`capacity`] - safety factors of load cases against the design envelope
//!
//! All result types are JSON-serializable. Forces are reported in kN and
//! moments in kNm; depths and coordinates are in mm.

pub mod capacity;
pub mod interaction;
pub mod neutral_axis;
pub mod section_forces;

// Re-export commonly used types
pub use capacity::{check_load_cases, safety_factor, LoadCheck, UNBOUNDED_SAFETY_FACTOR};
pub use interaction::{max_design_moment, neutral_axis_schedule, DEFAULT_DIAGRAM_POINTS};
pub use section_forces::{
    AnalysisResult, ColumnAnalyzer, PURE_TENSION_DEPTH_MM, UNBOUNDED_TENSILE_STRAIN,
};
