//! Residue-range interval algebra for protein structure coverage.
//!
//! A structural record lists which residues of a sequence each of its chains
//! resolves, in compact group notation such as `"A/B=96-516"`. This crate
//! parses that notation into a [`ChainGroup`](models::ChainGroup), keeps the
//! ranges of every [`Chain`](models::Chain) in a sorted, disjoint, maximally
//! merged form, and merges chains together so that residues resolved by
//! several symmetric copies are counted only once.
//!
//! ## Quick Start
//!
//! ```rust
//! use furret_core::models::ChainGroup;
//!
//! let group = ChainGroup::try_from_notations(["A/B=96-516", "C=9-94"]).unwrap();
//! assert_eq!(group.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
//!
//! // residues covered by at least one chain
//! let merged = group.merged().unwrap();
//! assert_eq!(merged.len(), 86 + 421);
//! ```
//!
//! All coordinates are 1-based and both range ends are included.

pub mod errors;
pub mod models;

pub use self::errors::{ChainError, ChainResult};
