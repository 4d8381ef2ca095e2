//! # Section Geometry
//!
//! Cross-section shape and the geometric formulas the evaluator needs for
//! the concrete compression zone.
//!
//! ## Notation
//!
//! - `b` = width of a rectangular section
//! - `h` = height of a rectangular section (bending direction)
//! - `D`, `R` = diameter and radius of a circular section
//! - `a` = depth of the equivalent rectangular stress block, measured from
//!   the extreme compression face
//!
//! All lengths are in millimetres. The section centroid is the origin and
//! `+y` points toward the compression face.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default clear cover (mm), used for drawings only
pub const DEFAULT_COVER_MM: f64 = 30.0;

/// Cross-section shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SectionShape {
    /// Rectangle b × h
    #[default]
    Rectangular,
    /// Circle of diameter D
    Circular,
}

impl SectionShape {
    pub const ALL: [SectionShape; 2] = [SectionShape::Rectangular, SectionShape::Circular];

    /// Parse the legacy integer encoding (0 = rectangular, 1 = circular).
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(SectionShape::Rectangular),
            1 => Some(SectionShape::Circular),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionShape::Rectangular => "Rectangular",
            SectionShape::Circular => "Circular",
        }
    }
}

/// Section geometry.
///
/// For circular sections `width_mm` is the diameter and `height_mm` is
/// ignored by every formula.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "Circular", "width_mm": 500.0, "height_mm": 0.0, "cover_mm": 40.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Shape tag
    pub shape: SectionShape,
    /// Width b, or diameter D when circular (mm)
    pub width_mm: f64,
    /// Height h in the bending direction; unused when circular (mm)
    #[serde(default)]
    pub height_mm: f64,
    /// Clear cover (mm), presentational only
    #[serde(default = "default_cover")]
    pub cover_mm: f64,
}

fn default_cover() -> f64 {
    DEFAULT_COVER_MM
}

impl SectionGeometry {
    /// Rectangular section b × h.
    pub fn rectangular(width_mm: f64, height_mm: f64) -> Self {
        SectionGeometry {
            shape: SectionShape::Rectangular,
            width_mm,
            height_mm,
            cover_mm: DEFAULT_COVER_MM,
        }
    }

    /// Circular section of diameter D.
    pub fn circular(diameter_mm: f64) -> Self {
        SectionGeometry {
            shape: SectionShape::Circular,
            width_mm: diameter_mm,
            height_mm: 0.0,
            cover_mm: DEFAULT_COVER_MM,
        }
    }

    /// Builder-style cover override.
    pub fn with_cover(mut self, cover_mm: f64) -> Self {
        self.cover_mm = cover_mm;
        self
    }

    /// Depth of the section in the bending direction: h, or D when circular.
    pub fn extreme_dimension_mm(&self) -> f64 {
        match self.shape {
            SectionShape::Rectangular => self.height_mm,
            SectionShape::Circular => self.width_mm,
        }
    }

    /// Gross concrete area Ag (mm²).
    pub fn gross_area_mm2(&self) -> f64 {
        match self.shape {
            SectionShape::Rectangular => rectangular_area(self.width_mm, self.height_mm),
            SectionShape::Circular => circular_area(self.width_mm),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.width_mm <= 0.0 {
            let field = match self.shape {
                SectionShape::Rectangular => "geometry.width_mm",
                SectionShape::Circular => "geometry.width_mm (diameter)",
            };
            return Err(CalcError::invalid_input(
                field,
                self.width_mm.to_string(),
                "Section dimension must be positive",
            ));
        }
        if self.shape == SectionShape::Rectangular && self.height_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.height_mm",
                self.height_mm.to_string(),
                "Height must be positive for rectangular sections",
            ));
        }
        if self.cover_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "geometry.cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Area of a rectangle b × h.
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Area of a circle of diameter D, πD²/4.
#[inline]
pub fn circular_area(diameter: f64) -> f64 {
    PI * diameter * diameter / 4.0
}

/// Compression zone of a circular section cut by a stress block of depth `a`.
///
/// ```text
///          ___
///       .'  θ  '.        ─┬─ compression face
///      /─────────\        │ a
///     |     +     |      ─┴─
///      \         /
///       '.__ __.'
/// ```
///
/// Returns `(area, offset)` where `offset` is the distance from the section
/// centre to the centroid of the compressed segment, positive toward the
/// compression face.
///
/// # Formula
///
/// θ = 2·acos((R − a)/R),
/// A = ½R²(θ − sin θ),
/// offset = ⅔R³ sin³(θ/2) / A
///
/// # Saturation
///
/// - `a ≥ D`: the whole circle, `(πR², 0)`
/// - `a ≤ 0`: nothing compressed, `(0, −R)`
/// - the acos argument is clamped to [−1, 1]
pub fn circular_compression_zone(diameter: f64, a: f64) -> (f64, f64) {
    let r = diameter / 2.0;
    if a >= diameter {
        return (PI * r * r, 0.0);
    }
    if a <= 0.0 {
        return (0.0, -r);
    }

    let cos_half = ((r - a) / r).clamp(-1.0, 1.0);
    let theta = 2.0 * cos_half.acos();
    let area = 0.5 * r * r * (theta - theta.sin());
    let first_moment = (2.0 / 3.0) * r.powi(3) * (theta / 2.0).sin().powi(3);

    (area, first_moment / area)
}
