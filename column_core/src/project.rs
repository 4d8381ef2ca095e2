//! # Project Data Structures
//!
//! The `ColumnProject` struct is the root container for one column check:
//! materials, section, bar layout, design code and the load cases to test.
//! Projects serialize to human-readable JSON files.
//!
//! ## Structure
//!
//! ```text
//! ColumnProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── concrete / steel: material properties
//! ├── geometry: SectionGeometry (shape, dimensions, cover)
//! ├── bars: Vec<ReinforcementBar> (order preserved)
//! ├── design_code: DesignCodeKind
//! ├── load_cases: Vec<LoadCase>
//! └── settings: AnalysisSettings (diagram resolution, solver)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use column_core::project::ColumnProject;
//!
//! let project = ColumnProject::sample();
//! assert!(project.validate().is_ok());
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("\"design_code\": \"ACI318\""));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{ColumnAnalyzer, DEFAULT_DIAGRAM_POINTS};
use crate::codes::DesignCodeKind;
use crate::errors::{CalcError, CalcResult};
use crate::loads::LoadCase;
use crate::materials::{circular_layout, ConcreteProperty, ReinforcementBar, SteelProperty};
use crate::section::SectionGeometry;
use crate::solver::SolverConfig;

/// Current schema version for project files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to project files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProject {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    pub concrete: ConcreteProperty,

    pub steel: SteelProperty,

    pub geometry: SectionGeometry,

    /// Longitudinal bars, in the order they were entered
    #[serde(default)]
    pub bars: Vec<ReinforcementBar>,

    #[serde(default)]
    pub design_code: DesignCodeKind,

    /// Factored load cases to check against the design envelope
    #[serde(default)]
    pub load_cases: Vec<LoadCase>,

    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl ColumnProject {
    /// Create a project with no bars and no load cases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use column_core::project::ColumnProject;
    /// use column_core::codes::DesignCodeKind;
    /// use column_core::materials::{ConcreteProperty, SteelProperty};
    /// use column_core::section::SectionGeometry;
    ///
    /// let project = ColumnProject::new(
    ///     "John Doe",
    ///     "25-001",
    ///     ConcreteProperty::with_aci_modulus(35.0),
    ///     SteelProperty::new(500.0, 200_000.0),
    ///     SectionGeometry::rectangular(400.0, 600.0),
    ///     DesignCodeKind::Aci318,
    /// );
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert!(project.bars.is_empty());
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        concrete: ConcreteProperty,
        steel: SteelProperty,
        geometry: SectionGeometry,
        design_code: DesignCodeKind,
    ) -> Self {
        ColumnProject {
            meta: ProjectMetadata::new(engineer, job_id),
            concrete,
            steel,
            geometry,
            bars: Vec::new(),
            design_code,
            load_cases: Vec::new(),
            settings: AnalysisSettings::default(),
        }
    }

    /// A 500 mm circular column with 10 bars of 201 mm², f'c 30 MPa,
    /// fy 420 MPa, checked to ACI 318 under three load combinations.
    pub fn sample() -> Self {
        let diameter = 500.0;
        let cover = 40.0;
        let bar_diameter = 16.0;

        let bars = circular_layout(diameter, cover, 10, bar_diameter)
            .into_iter()
            .map(|bar| ReinforcementBar::new(bar.x_mm, bar.y_mm, 201.0, bar.diameter_mm))
            .collect();

        ColumnProject {
            meta: ProjectMetadata::new("", "SAMPLE"),
            concrete: ConcreteProperty::new(30.0, 0.003, 25_742.0),
            steel: SteelProperty::new(420.0, 200_000.0),
            geometry: SectionGeometry::circular(diameter).with_cover(cover),
            bars,
            design_code: DesignCodeKind::Aci318,
            load_cases: vec![
                LoadCase::new("Combo1", 3500.0, 50.0),
                LoadCase::new("Combo2", 1500.0, 300.0),
                LoadCase::new("Combo3", 200.0, 100.0),
            ],
            settings: AnalysisSettings::default(),
        }
    }

    /// Validate every part of the project, stopping at the first problem.
    pub fn validate(&self) -> CalcResult<()> {
        self.concrete.validate()?;
        self.steel.validate()?;
        self.geometry.validate()?;
        for bar in &self.bars {
            bar.validate()?;
        }
        for case in &self.load_cases {
            case.validate()?;
        }
        self.settings.validate()?;
        Ok(())
    }

    /// Build an analyzer for this project's section and design code.
    pub fn analyzer(&self) -> ColumnAnalyzer<'static> {
        let mut analyzer = ColumnAnalyzer::new(
            self.concrete,
            self.steel,
            self.geometry,
            self.design_code.strategy(),
        )
        .with_solver_config(self.settings.solver);
        analyzer.add_bars(self.bars.iter().copied());
        analyzer
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for ColumnProject {
    fn default() -> Self {
        ColumnProject::new(
            "",
            "",
            ConcreteProperty::default(),
            SteelProperty::default(),
            SectionGeometry::rectangular(300.0, 300.0),
            DesignCodeKind::default(),
        )
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

impl ProjectMetadata {
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        ProjectMetadata {
            version: SCHEMA_VERSION.to_string(),
            engineer: engineer.into(),
            job_id: job_id.into(),
            created: now,
            modified: now,
        }
    }
}

/// Analysis settings stored with the project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Interior points of the interaction diagram
    #[serde(default = "default_diagram_points")]
    pub diagram_points: usize,

    /// Root-finder settings for the axial-load inversion
    #[serde(default)]
    pub solver: SolverConfig,
}

fn default_diagram_points() -> usize {
    DEFAULT_DIAGRAM_POINTS
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            diagram_points: DEFAULT_DIAGRAM_POINTS,
            solver: SolverConfig::default(),
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> CalcResult<()> {
        if self.diagram_points == 0 {
            return Err(CalcError::invalid_input(
                "diagram_points",
                "0",
                "Interaction diagram needs at least one point",
            ));
        }
        if self.solver.tolerance.is_nan() || self.solver.tolerance <= 0.0 {
            return Err(CalcError::invalid_input(
                "solver.tolerance",
                self.solver.tolerance.to_string(),
                "Solver tolerance must be positive",
            ));
        }
        if self.solver.max_iterations == 0 {
            return Err(CalcError::invalid_input(
                "solver.max_iterations",
                "0",
                "Solver needs at least one iteration",
            ));
        }
        Ok(())
    }
}
