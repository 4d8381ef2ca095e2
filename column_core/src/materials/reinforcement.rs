//! Reinforcing steel properties, individual bars, and standard bar layouts.
//!
//! ## Coordinates
//!
//! Bar positions are measured from the section centroid in millimetres.
//! `+y` points toward the extreme compression face, so a bar at `y = h/2`
//! sits on the compression face and a bar at `y = -h/2` on the tension face.
//!
//! ## Example
//!
//! ```rust
//! use column_core::materials::{circular_layout, SteelProperty};
//!
//! let steel = SteelProperty::new(420.0, 200_000.0);
//! assert!((steel.yield_strain() - 0.0021).abs() < 1e-12);
//!
//! // 10 bars of 16 mm in a 500 mm round column with 40 mm clear cover
//! let bars = circular_layout(500.0, 40.0, 10, 16.0);
//! assert_eq!(bars.len(), 10);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default elastic modulus of reinforcing steel (MPa)
pub const DEFAULT_STEEL_MODULUS_MPA: f64 = 200_000.0;

/// Minimum number of bars produced by the layout generators
pub const MIN_LAYOUT_BARS: usize = 4;

/// Reinforcing steel properties.
///
/// The yield strain is derived data: it is recomputed every time the yield
/// strength or modulus changes, and on deserialization, so it can never drift
/// from `yield_strength / elastic_modulus`.
///
/// ## JSON Example
///
/// ```json
/// { "yield_strength_mpa": 420.0, "elastic_modulus_mpa": 200000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SteelPropertyInput")]
pub struct SteelProperty {
    yield_strength_mpa: f64,
    elastic_modulus_mpa: f64,
    yield_strain: f64,
}

/// Serialized form of [`SteelProperty`]; any stored yield strain is ignored.
#[derive(Deserialize)]
struct SteelPropertyInput {
    yield_strength_mpa: f64,
    #[serde(default = "default_steel_modulus")]
    elastic_modulus_mpa: f64,
}

fn default_steel_modulus() -> f64 {
    DEFAULT_STEEL_MODULUS_MPA
}

impl From<SteelPropertyInput> for SteelProperty {
    fn from(input: SteelPropertyInput) -> Self {
        SteelProperty::new(input.yield_strength_mpa, input.elastic_modulus_mpa)
    }
}

impl SteelProperty {
    /// Create steel properties; the yield strain is derived immediately.
    pub fn new(yield_strength_mpa: f64, elastic_modulus_mpa: f64) -> Self {
        let mut steel = SteelProperty {
            yield_strength_mpa,
            elastic_modulus_mpa,
            yield_strain: 0.0,
        };
        steel.update_yield_strain();
        steel
    }

    /// Yield strength fy (MPa)
    pub fn yield_strength_mpa(&self) -> f64 {
        self.yield_strength_mpa
    }

    /// Elastic modulus Es (MPa)
    pub fn elastic_modulus_mpa(&self) -> f64 {
        self.elastic_modulus_mpa
    }

    /// Yield strain εy = fy / Es
    pub fn yield_strain(&self) -> f64 {
        self.yield_strain
    }

    /// Change the yield strength and refresh the yield strain.
    pub fn set_yield_strength(&mut self, yield_strength_mpa: f64) {
        self.yield_strength_mpa = yield_strength_mpa;
        self.update_yield_strain();
    }

    /// Change the elastic modulus and refresh the yield strain.
    pub fn set_elastic_modulus(&mut self, elastic_modulus_mpa: f64) {
        self.elastic_modulus_mpa = elastic_modulus_mpa;
        self.update_yield_strain();
    }

    fn update_yield_strain(&mut self) {
        self.yield_strain = if self.elastic_modulus_mpa != 0.0 {
            self.yield_strength_mpa / self.elastic_modulus_mpa
        } else {
            0.0
        };
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.yield_strength_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel.yield_strength_mpa",
                self.yield_strength_mpa.to_string(),
                "Yield strength must be positive",
            ));
        }
        if self.elastic_modulus_mpa <= 0.0 {
            return Err(CalcError::invalid_input(
                "steel.elastic_modulus_mpa",
                self.elastic_modulus_mpa.to_string(),
                "Elastic modulus must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for SteelProperty {
    fn default() -> Self {
        SteelProperty::new(0.0, DEFAULT_STEEL_MODULUS_MPA)
    }
}

/// A single longitudinal reinforcing bar.
///
/// The diameter is carried for reports and drawings only; forces use `area_mm2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementBar {
    /// X coordinate from the section centroid (mm)
    pub x_mm: f64,
    /// Y coordinate from the section centroid, positive toward the compression face (mm)
    pub y_mm: f64,
    /// Cross-sectional area (mm²)
    pub area_mm2: f64,
    /// Nominal bar diameter (mm)
    #[serde(default)]
    pub diameter_mm: f64,
}

impl ReinforcementBar {
    /// Create a bar at (x, y) with an explicit area.
    pub fn new(x_mm: f64, y_mm: f64, area_mm2: f64, diameter_mm: f64) -> Self {
        ReinforcementBar {
            x_mm,
            y_mm,
            area_mm2,
            diameter_mm,
        }
    }

    /// Create a bar at (x, y) whose area is derived from its diameter.
    pub fn from_diameter(x_mm: f64, y_mm: f64, diameter_mm: f64) -> Self {
        ReinforcementBar::new(x_mm, y_mm, bar_area_mm2(diameter_mm), diameter_mm)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.area_mm2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "bar.area_mm2",
                self.area_mm2.to_string(),
                "Bar area must be positive",
            ));
        }
        if self.diameter_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "bar.diameter_mm",
                self.diameter_mm.to_string(),
                "Bar diameter cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Area of a round bar, π·d²/4 (mm²).
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    PI * diameter_mm * diameter_mm / 4.0
}

/// Total steel area of a bar collection (mm²).
pub fn total_area_mm2(bars: &[ReinforcementBar]) -> f64 {
    bars.iter().map(|b| b.area_mm2).sum()
}

/// Bars evenly spaced around a circle.
///
/// Bar centres lie on radius `D/2 - cover - db/2`, where `cover` is the clear
/// cover to the bar face. The first bar sits at angle 0 (positive x axis) and
/// the rest follow counter-clockwise. Fewer than four bars are bumped to four.
pub fn circular_layout(
    diameter_mm: f64,
    cover_mm: f64,
    count: usize,
    bar_diameter_mm: f64,
) -> Vec<ReinforcementBar> {
    let count = count.max(MIN_LAYOUT_BARS);
    let radius = diameter_mm / 2.0 - cover_mm - bar_diameter_mm / 2.0;
    let step = 2.0 * PI / count as f64;

    (0..count)
        .map(|i| {
            let angle = step * i as f64;
            ReinforcementBar::from_diameter(
                radius * angle.cos(),
                radius * angle.sin(),
                bar_diameter_mm,
            )
        })
        .collect()
}

/// Bars distributed around the perimeter of a rectangle.
///
/// Four corner bars are always placed. The remaining bars are split between
/// the vertical (height) faces and the horizontal (width) faces in proportion
/// to their lengths, keeping both counts even so the layout stays symmetric.
/// The total is rounded up to an even number of at least four.
///
/// Order: corners (top-right, bottom-right, top-left, bottom-left), then
/// right/left pairs up the height faces, then top/bottom pairs along the
/// width faces.
pub fn rectangular_layout(
    width_mm: f64,
    height_mm: f64,
    cover_mm: f64,
    count: usize,
    bar_diameter_mm: f64,
) -> Vec<ReinforcementBar> {
    let mut count = count.max(MIN_LAYOUT_BARS);
    if count % 2 != 0 {
        count += 1;
    }

    let edge = cover_mm + bar_diameter_mm / 2.0;
    let core_w = width_mm - 2.0 * edge;
    let core_h = height_mm - 2.0 * edge;
    let perimeter = 2.0 * (core_w + core_h);

    let remaining = count - MIN_LAYOUT_BARS;
    let mut n_h_faces = if perimeter > 0.0 {
        (remaining as f64 * core_h / perimeter).round() as usize
    } else {
        0
    };
    if n_h_faces % 2 != 0 {
        n_h_faces += 1;
    }
    let n_h_faces = n_h_faces.min(remaining);
    let mut n_w_faces = remaining - n_h_faces;
    if n_w_faces % 2 != 0 {
        n_w_faces -= 1;
    }

    let (half_w, half_h) = (core_w / 2.0, core_h / 2.0);
    let mut bars = vec![
        ReinforcementBar::from_diameter(half_w, half_h, bar_diameter_mm),
        ReinforcementBar::from_diameter(half_w, -half_h, bar_diameter_mm),
        ReinforcementBar::from_diameter(-half_w, half_h, bar_diameter_mm),
        ReinforcementBar::from_diameter(-half_w, -half_h, bar_diameter_mm),
    ];

    let per_h_face = n_h_faces / 2;
    if per_h_face > 0 {
        let spacing = core_h / (per_h_face + 1) as f64;
        for i in 1..=per_h_face {
            let y = -half_h + spacing * i as f64;
            bars.push(ReinforcementBar::from_diameter(half_w, y, bar_diameter_mm));
            bars.push(ReinforcementBar::from_diameter(-half_w, y, bar_diameter_mm));
        }
    }

    let per_w_face = n_w_faces / 2;
    if per_w_face > 0 {
        let spacing = core_w / (per_w_face + 1) as f64;
        for i in 1..=per_w_face {
            let x = -half_w + spacing * i as f64;
            bars.push(ReinforcementBar::from_diameter(x, half_h, bar_diameter_mm));
            bars.push(ReinforcementBar::from_diameter(x, -half_h, bar_diameter_mm));
        }
    }

    bars
}
