//! # column_core - Short-Column Capacity Engine
//!
//! `column_core` evaluates reinforced-concrete column sections by strain
//! compatibility: section forces for a neutral-axis depth, the P–M
//! interaction diagram, and the neutral axis that carries a given axial load.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless codes**: Design-code rules are shared strategy objects
//! - **JSON-First**: All data types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Never panics on numerics**: degenerate geometry saturates, solver
//!   failures are reported as data
//!
//! ## Quick Start
//!
//! ```rust
//! use column_core::project::ColumnProject;
//!
//! let project = ColumnProject::sample();
//! let analyzer = project.analyzer();
//!
//! let diagram = analyzer.generate_interaction_diagram(project.settings.diagram_points);
//! let state = analyzer.solve_for_load(3500.0);
//!
//! assert_eq!(diagram.len(), 64);
//! assert!((state.axial_force_kn - 3500.0).abs() < 1e-3);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container, metadata, and settings
//! - [`calculations`] - Section forces, interaction diagram, load inversion, load checks
//! - [`codes`] - ACI 318, TCVN 5574 and Eurocode 2 strategies
//! - [`materials`] - Concrete, steel and reinforcing bars
//! - [`section`] - Section shapes and compression-zone geometry
//! - [`solver`] - Brent and Newton root finders
//! - [`loads`] - Factored load cases
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves

pub mod calculations;
pub mod codes;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod project;
pub mod section;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{AnalysisResult, ColumnAnalyzer};
pub use codes::{DesignCode, DesignCodeKind};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{AnalysisSettings, ColumnProject, ProjectMetadata};
