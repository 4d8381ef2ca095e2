//! # Load Checks Against the Design Envelope
//!
//! A load point (|Mu|, Pu) is compared with the design interaction curve
//! (φMn, φPn) by casting a ray from the origin through the load and finding
//! where it crosses the curve. The safety factor `k` is the ratio of the
//! distance to the crossing over the distance to the load, so `k ≥ 1`
//! means the load lies inside the envelope.
//!
//! ## Example
//!
//! ```rust
//! use column_core::calculations::capacity::check_load_cases;
//! use column_core::loads::LoadCase;
//! use column_core::project::ColumnProject;
//!
//! let project = ColumnProject::sample();
//! let analyzer = project.analyzer();
//! let diagram = analyzer.generate_interaction_diagram(60);
//!
//! let checks = check_load_cases(&diagram, &[LoadCase::new("Service", 1000.0, 50.0)]);
//! assert!(checks[0].passes);
//! ```

use serde::{Deserialize, Serialize};

use super::section_forces::AnalysisResult;
use crate::loads::LoadCase;

/// Safety factor reported for a load at the origin
pub const UNBOUNDED_SAFETY_FACTOR: f64 = 999.0;

/// Loads closer to the origin than this (in kN / kNm space) count as zero
const ZERO_LOAD_DISTANCE: f64 = 1e-3;

/// Ray and segment treated as parallel below this determinant
const PARALLEL_DETERMINANT: f64 = 1e-9;

/// Components below this are treated as zero when recovering k
const ZERO_COMPONENT: f64 = 1e-4;

/// Outcome of checking one load case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCheck {
    pub label: String,
    pub axial_kn: f64,
    pub moment_knm: f64,
    /// Capacity over demand along the load ray; `None` when the ray misses the curve
    pub safety_factor: Option<f64>,
    /// True when a safety factor exists and is at least 1
    pub passes: bool,
}

/// Safety factor of `load` against the design curve of `diagram`.
///
/// Every consecutive pair of diagram points forms one segment of the curve.
/// When the ray crosses more than one segment the largest positive `k` is
/// kept.
pub fn safety_factor(load: &LoadCase, diagram: &[AnalysisResult]) -> Option<f64> {
    let target_m = load.moment_knm.abs();
    let target_p = load.axial_kn;

    if target_m.hypot(target_p) < ZERO_LOAD_DISTANCE {
        return Some(UNBOUNDED_SAFETY_FACTOR);
    }

    let mut best: Option<f64> = None;

    for pair in diagram.windows(2) {
        let (x1, y1) = (pair[0].design_moment_knm, pair[0].design_axial_kn);
        let (x2, y2) = (pair[1].design_moment_knm, pair[1].design_axial_kn);
        let dx = x2 - x1;
        let dy = y2 - y1;

        // k·M = x1 + t·dx, k·P = y1 + t·dy
        let det = target_p * dx - target_m * dy;
        if det.abs() < PARALLEL_DETERMINANT {
            continue;
        }

        let t = (target_m * y1 - target_p * x1) / det;
        if !(0.0..=1.0).contains(&t) {
            continue;
        }

        let k = if target_m > ZERO_COMPONENT {
            (x1 + t * dx) / target_m
        } else if target_p.abs() > ZERO_COMPONENT {
            (y1 + t * dy) / target_p
        } else {
            0.0
        };

        if k > 0.0 && best.map_or(true, |b| k > b) {
            best = Some(k);
        }
    }

    best
}

/// Check every load case against the diagram, preserving input order.
pub fn check_load_cases(diagram: &[AnalysisResult], loads: &[LoadCase]) -> Vec<LoadCheck> {
    loads
        .iter()
        .map(|load| {
            let k = safety_factor(load, diagram);
            LoadCheck {
                label: load.label.clone(),
                axial_kn: load.axial_kn,
                moment_knm: load.moment_knm,
                safety_factor: k,
                passes: k.is_some_and(|k| k >= 1.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(m: f64, p: f64) -> AnalysisResult {
        AnalysisResult {
            neutral_axis_mm: 0.0,
            axial_force_kn: p,
            moment_knm: m,
            reduction_factor: 1.0,
            design_axial_kn: p,
            design_moment_knm: m,
            net_tensile_strain: 0.0,
        }
    }

    /// Diamond envelope through (0, 1000), (100, 0), (0, -500)
    fn diamond() -> Vec<AnalysisResult> {
        vec![point(0.0, 1000.0), point(100.0, 0.0), point(0.0, -500.0)]
    }

    #[test]
    fn test_pure_moment_load() {
        let k = safety_factor(&LoadCase::new("M", 0.0, 50.0), &diamond()).unwrap();
        assert!((k - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_moment_uses_magnitude() {
        let k = safety_factor(&LoadCase::new("M", 0.0, -25.0), &diamond()).unwrap();
        assert!((k - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_axial_only_load() {
        let k = safety_factor(&LoadCase::new("P", 2000.0, 0.0), &diamond()).unwrap();
        assert!((k - 0.5).abs() < 1e-12);

        let k = safety_factor(&LoadCase::new("T", -250.0, 0.0), &diamond()).unwrap();
        assert!((k - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_combined_load() {
        // Ray M = P/10 meets M/100 + P/1000 = 1 at P = 500, M = 50
        let k = safety_factor(&LoadCase::new("PM", 250.0, 25.0), &diamond()).unwrap();
        assert!((k - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_origin_is_unbounded() {
        let k = safety_factor(&LoadCase::new("zero", 0.0, 0.0), &diamond());
        assert_eq!(k, Some(UNBOUNDED_SAFETY_FACTOR));
    }

    #[test]
    fn test_miss_returns_none() {
        assert_eq!(safety_factor(&LoadCase::new("P", 100.0, 10.0), &[]), None);
        // A curve entirely in compression cannot be reached by a tension ray
        let upper = vec![point(0.0, 1000.0), point(100.0, 500.0)];
        assert_eq!(safety_factor(&LoadCase::new("T", -100.0, 0.0), &upper), None);
    }

    #[test]
    fn test_check_load_cases() {
        let loads = vec![
            LoadCase::new("inside", 250.0, 25.0),
            LoadCase::new("outside", 2000.0, 0.0),
        ];
        let checks = check_load_cases(&diamond(), &loads);
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].label, "inside");
        assert!(checks[0].passes);
        assert!(!checks[1].passes);
        assert_eq!(checks[1].axial_kn, 2000.0);
    }

    #[test]
    fn test_missing_factor_fails() {
        let checks = check_load_cases(&[], &[LoadCase::new("x", 10.0, 1.0)]);
        assert_eq!(checks[0].safety_factor, None);
        assert!(!checks[0].passes);
    }
}
