//! Factored load cases checked against a column's capacity envelope.
//!
//! A [`LoadCase`] is one ultimate-limit-state action pair: a factored axial
//! force and a factored bending moment about the section's x axis. Load
//! factoring and combination happen upstream; the values here are used as
//! entered.
//!
//! # Example
//!
//! ```
//! use column_core::loads::LoadCase;
//!
//! let case = LoadCase::new("Combo1", 3500.0, 50.0);
//! assert!(case.validate().is_ok());
//! assert_eq!(case.eccentricity_mm(), Some(50.0 / 3500.0 * 1000.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Factored axial force and moment for one loading scenario.
///
/// Compression is positive. The sign of the moment is kept as entered;
/// capacity checks use its magnitude.
///
/// # JSON Format
/// ```json
/// {
///   "label": "Combo2",
///   "axial_kn": 1500.0,
///   "moment_knm": 300.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// User-provided label for this load case
    pub label: String,

    /// Factored axial force Pu (kN), compression positive
    pub axial_kn: f64,

    /// Factored moment Mu (kNm)
    pub moment_knm: f64,
}

impl LoadCase {
    pub fn new(label: impl Into<String>, axial_kn: f64, moment_knm: f64) -> Self {
        LoadCase {
            label: label.into(),
            axial_kn,
            moment_knm,
        }
    }

    /// Eccentricity e = |Mu| / Pu (mm), `None` when the axial force is zero.
    pub fn eccentricity_mm(&self) -> Option<f64> {
        if self.axial_kn == 0.0 {
            return None;
        }
        Some(self.moment_knm.abs() / self.axial_kn.abs() * 1000.0)
    }

    /// Validate the load case
    ///
    /// Both actions must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.axial_kn.is_finite() {
            return Err(CalcError::invalid_input(
                "axial_kn",
                self.axial_kn.to_string(),
                format!("Axial force of '{}' must be a finite number", self.label),
            ));
        }
        if !self.moment_knm.is_finite() {
            return Err(CalcError::invalid_input(
                "moment_knm",
                self.moment_knm.to_string(),
                format!("Moment of '{}' must be a finite number", self.label),
            ));
        }
        Ok(())
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed", 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_case_new() {
        let case = LoadCase::new("Combo2", 1500.0, 300.0);
        assert_eq!(case.label, "Combo2");
        assert_eq!(case.axial_kn, 1500.0);
        assert_eq!(case.moment_knm, 300.0);
    }

    #[test]
    fn test_eccentricity() {
        let case = LoadCase::new("e", 200.0, -100.0);
        assert_eq!(case.eccentricity_mm(), Some(500.0));
        assert_eq!(LoadCase::new("p0", 0.0, 10.0).eccentricity_mm(), None);
    }

    #[test]
    fn test_validation() {
        assert!(LoadCase::new("ok", -300.0, 0.0).validate().is_ok());
        assert!(LoadCase::new("nan", f64::NAN, 0.0).validate().is_err());
        assert!(LoadCase::new("inf", 0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_default() {
        let case = LoadCase::default();
        assert_eq!(case.label, "Unnamed");
        assert_eq!(case.axial_kn, 0.0);
    }

    #[test]
    fn test_serialization() {
        let case = LoadCase::new("Combo3", 200.0, 100.0);
        let json = serde_json::to_string(&case).unwrap();
        assert!(json.contains("\"axial_kn\":200.0"));
        let roundtrip: LoadCase = serde_json::from_str(&json).unwrap();
        assert_eq!(case, roundtrip);
    }
}
