//! Sequence coverage of experimental structures and homology models.
//!
//! Structural records list their resolved residues in group notation
//! (`"A/B=96-516, C=9-94"`). This crate turns those into
//! [`ChainGroup`](furret_core::models::ChainGroup)s and reports which share of
//! the query sequence each structure resolves.
//!
//! # Example
//!
//! ```rust
//! use furret_core::models::ChainGroup;
//! use furret_coverage::StructureCoverage;
//!
//! let chains: ChainGroup = "A=1-100, B=50-150".parse().unwrap();
//! assert_eq!(chains.covered_residues(), 150);
//! assert_eq!(chains.coverage_percent(300).unwrap(), 50.0);
//! ```
//!
//! A whole query session (one sequence, its structures and models) can be
//! read from a toml file with [`QuerySession`] and summarized with
//! [`CoverageReport`].

pub mod coverage;
pub mod errors;
pub mod models;
pub mod report;
pub mod session;

// re-exports
pub use coverage::{StructureCoverage, best_coverage, best_model};
pub use errors::{CoverageError, CoverageResult};
pub use models::{Model, QuerySequence, Structure};
pub use report::{CoverageReport, CoverageRow, EntryKind};
pub use session::QuerySession;
