//! Sequence coverage of chain groups, and selection of the best structure.
//!
//! Coverage is the share of a sequence's residues resolved by at least one
//! chain, expressed as a percentage. Residues resolved by several chains
//! (e.g. the copies of a homo-oligomer) count once.

use furret_core::models::ChainGroup;
use log::warn;

use crate::errors::{CoverageError, CoverageResult};
use crate::models::{Model, Structure};

/// Coverage of a query sequence by a set of resolved residue ranges.
pub trait StructureCoverage {
    /// Number of distinct residues resolved by at least one chain.
    fn covered_residues(&self) -> u32;

    /// `100 * covered_residues / sequence_len`.
    ///
    /// Fails with [CoverageError::EmptySequence] when `sequence_len` is 0.
    fn coverage_percent(&self, sequence_len: usize) -> CoverageResult<f64> {
        if sequence_len == 0 {
            return Err(CoverageError::EmptySequence);
        }
        let covered = self.covered_residues();
        if covered as usize > sequence_len {
            warn!(
                "{} covered residues exceed sequence length {}",
                covered, sequence_len
            );
        }
        Ok(100.0 * f64::from(covered) / sequence_len as f64)
    }
}

impl StructureCoverage for ChainGroup {
    fn covered_residues(&self) -> u32 {
        self.merged().map_or(0, |chain| chain.len())
    }
}

///
/// Highest coverage among `structures`, with the code of the structure
/// that reaches it. Ties keep the earliest structure.
///
pub fn best_coverage(structures: &[Structure]) -> Option<(f64, &str)> {
    let mut iter = structures.iter();
    let first = iter.next()?;
    let best = iter.fold(first, |best, s| {
        if s.coverage > best.coverage { s } else { best }
    });
    Some((best.coverage, best.code.as_str()))
}

///
/// Model with the highest GMQE score. Ties keep the earliest model.
///
/// Scores must exceed -1 to count, so a NaN score never wins and a list
/// with only NaN scores has no best model.
pub fn best_model(models: &[Model]) -> Option<&Model> {
    let mut best: Option<&Model> = None;
    let mut gmqe_max = -1.0;
    for m in models {
        if m.gmqe > gmqe_max {
            best = Some(m);
            gmqe_max = m.gmqe;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuerySequence;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn sequence() -> QuerySequence {
        QuerySequence::new("P12345", &"A".repeat(400)).unwrap()
    }

    fn structure(code: &str, chains: &str, sequence: &QuerySequence) -> Structure {
        Structure::new(code, Some(chains.parse().unwrap()), sequence).unwrap()
    }

    #[rstest]
    #[case("A=1-100", 100)]
    #[case("A=1-100, B=50-150", 150)]
    #[case("A/B/C/D=1-100", 100)]
    #[case("A=1-100, A=102-110", 109)]
    #[case("", 0)]
    fn test_covered_residues(#[case] chains: &str, #[case] expected: u32) {
        let group: ChainGroup = chains.parse().unwrap();
        assert_eq!(group.covered_residues(), expected);
    }

    #[rstest]
    fn test_coverage_percent() {
        let group: ChainGroup = "A/B=1-50, C=26-100".parse().unwrap();
        assert_eq!(group.coverage_percent(400).unwrap(), 25.0);
        assert_eq!(ChainGroup::new().coverage_percent(400).unwrap(), 0.0);
    }

    #[rstest]
    fn test_coverage_percent_empty_sequence() {
        let group: ChainGroup = "A=1-50".parse().unwrap();
        assert!(matches!(
            group.coverage_percent(0),
            Err(CoverageError::EmptySequence)
        ));
    }

    #[rstest]
    fn test_best_coverage(sequence: QuerySequence) {
        let structures = vec![
            structure("1aaa", "A=1-100", &sequence),
            structure("2bbb", "A=1-200", &sequence),
            structure("3ccc", "A/B=201-400", &sequence),
        ];
        // 2bbb and 3ccc tie at 50%, the earliest wins
        assert_eq!(best_coverage(&structures), Some((50.0, "2bbb")));
        assert_eq!(best_coverage(&[]), None);
    }

    #[rstest]
    fn test_best_model(sequence: QuerySequence) {
        let models = vec![
            Model::new("1aaa.1.A", Some(1), Some(10), 0.4, &sequence).unwrap(),
            Model::new("2bbb.1.A", Some(1), Some(10), 0.9, &sequence).unwrap(),
            Model::new("3ccc.1.A", Some(1), Some(10), 0.9, &sequence).unwrap(),
        ];
        assert_eq!(best_model(&models).unwrap().template, "2bbb.1.A");
        assert!(best_model(&[]).is_none());
    }

    #[rstest]
    fn test_best_model_skips_nan_scores(sequence: QuerySequence) {
        let nan = Model::new("1aaa.1.A", Some(1), Some(10), f64::NAN, &sequence).unwrap();
        let scored = Model::new("2bbb.1.A", Some(1), Some(10), 0.2, &sequence).unwrap();

        assert!(best_model(&[nan.clone(), nan.clone()]).is_none());
        assert_eq!(best_model(&[nan, scored]).unwrap().template, "2bbb.1.A");
    }
}
