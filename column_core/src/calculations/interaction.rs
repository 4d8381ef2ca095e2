//! # Interaction Diagram
//!
//! Samples the P–M response of a section over a fixed schedule of
//! neutral-axis depths, running from deep compression to pure tension.
//!
//! For a section of extreme dimension `h` and `n` requested points the
//! depths are:
//!
//! 1. `100·h` and `2·h` (near pure compression)
//! 2. `max(h·(1.1 − i/n), 1 mm)` for `i = 0..=n`
//! 3. `0.001` (near pure tension)
//!
//! giving `n + 4` points. The diagram is returned in schedule order; no
//! deduplication or sorting is applied.

use log::debug;

use super::section_forces::{AnalysisResult, ColumnAnalyzer};

/// Default number of interior points requested for a diagram
pub const DEFAULT_DIAGRAM_POINTS: usize = 60;

/// Neutral-axis depth used for the last, near-pure-tension point (mm)
pub const NEAR_TENSION_DEPTH_MM: f64 = 0.001;

/// Smallest depth of the interpolated part of the schedule (mm)
pub const MIN_SCHEDULE_DEPTH_MM: f64 = 1.0;

/// Neutral-axis depths sampled for a diagram with `num_points` interior points.
///
/// `num_points == 0` is treated as 1 so the schedule never divides by zero.
pub fn neutral_axis_schedule(extreme_dimension_mm: f64, num_points: usize) -> Vec<f64> {
    let h = extreme_dimension_mm;
    let n = num_points.max(1);

    let mut depths = Vec::with_capacity(n + 4);
    depths.push(h * 100.0);
    depths.push(h * 2.0);
    depths.extend(
        (0..=n).map(|i| (h * (1.1 - i as f64 / n as f64)).max(MIN_SCHEDULE_DEPTH_MM)),
    );
    depths.push(NEAR_TENSION_DEPTH_MM);
    depths
}

impl ColumnAnalyzer<'_> {
    /// Section forces at every depth of [`neutral_axis_schedule`].
    pub fn generate_interaction_diagram(&self, num_points: usize) -> Vec<AnalysisResult> {
        let extreme = self.geometry().extreme_dimension_mm();
        let schedule = neutral_axis_schedule(extreme, num_points);
        debug!(
            "interaction diagram: {} points over h = {} mm ({})",
            schedule.len(),
            extreme,
            self.code().name()
        );

        schedule
            .into_iter()
            .map(|c| self.calculate_section_forces(c))
            .collect()
    }
}

/// The point with the largest design moment, if any.
pub fn max_design_moment(diagram: &[AnalysisResult]) -> Option<&AnalysisResult> {
    diagram
        .iter()
        .max_by(|a, b| a.design_moment_knm.total_cmp(&b.design_moment_knm))
}
