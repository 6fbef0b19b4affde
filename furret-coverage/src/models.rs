use furret_core::models::{ChainGroup, GroupNotation, ResidueRange};
use log::{debug, warn};

use crate::coverage::StructureCoverage;
use crate::errors::{CoverageError, CoverageResult};

/// Chain label used for a model whose template does not name a chain.
pub const DEFAULT_MODEL_CHAIN: &str = "SM";

fn validate_code(code: &str) -> CoverageResult<String> {
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoverageError::InvalidCode(code.to_string()));
    }
    Ok(code.to_lowercase())
}

///
/// The protein sequence that structures are measured against.
///
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySequence {
    pub accession: String,
    pub residues: String,
}

impl QuerySequence {
    ///
    /// Create a new [QuerySequence]. Both fields are lower-cased.
    ///
    /// # Arguments:
    /// - accession: database accession, letters and digits only
    /// - residues: one letter per residue, whitespace is dropped
    pub fn new(accession: &str, residues: &str) -> CoverageResult<Self> {
        let accession = validate_code(accession)?;
        let residues: String = residues.split_whitespace().collect();
        if !residues.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoverageError::InvalidSequence(residues));
        }
        Ok(QuerySequence {
            accession,
            residues: residues.to_lowercase(),
        })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

fn coverage_of(chains: Option<&ChainGroup>, sequence: &QuerySequence) -> CoverageResult<f64> {
    match chains {
        Some(group) if !group.is_empty() => group.coverage_percent(sequence.len()),
        _ => Ok(0.0),
    }
}

///
/// An experimental structure (e.g. a PDB entry) of the query sequence.
///
#[derive(Debug, Clone)]
pub struct Structure {
    pub code: String,
    pub method: Option<String>,
    pub resolution: Option<f64>,
    pub chains: Option<ChainGroup>,
    pub coverage: f64,
}

impl Structure {
    ///
    /// Create a new [Structure] and compute its coverage of `sequence`.
    ///
    /// A structure without chains covers nothing.
    pub fn new(
        code: &str,
        chains: Option<ChainGroup>,
        sequence: &QuerySequence,
    ) -> CoverageResult<Self> {
        let code = validate_code(code)?;
        let coverage = coverage_of(chains.as_ref(), sequence)?;
        if chains.is_none() {
            debug!("Structure {} has no chains, coverage is 0", code);
        }

        Ok(Structure {
            code,
            method: None,
            resolution: None,
            chains,
            coverage,
        })
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }
}

///
/// A homology model built on a template structure.
///
#[derive(Debug, Clone)]
pub struct Model {
    pub template: String,
    pub gmqe: f64,
    pub chains: Option<ChainGroup>,
    pub coverage: f64,
}

impl Model {
    ///
    /// Create a new [Model] covering residues `from..=to` of `sequence`.
    ///
    /// The range is assigned to the chain named by the third dot-separated
    /// field of the template (`"1a3n.1.A"` gives chain `A`), or to
    /// [DEFAULT_MODEL_CHAIN] otherwise. Without both bounds, or with a bound
    /// of 0, the model has no chains. Inverted bounds are an error.
    pub fn new(
        template: &str,
        from: Option<u32>,
        to: Option<u32>,
        gmqe: f64,
        sequence: &QuerySequence,
    ) -> CoverageResult<Self> {
        let chains = match (from, to) {
            (Some(from), Some(to)) if from > 0 && to > 0 => {
                let range = ResidueRange::new(from, to)?;
                let mut group = ChainGroup::new();
                group.add_notation(GroupNotation::new(
                    vec![model_chain_name(template).to_string()],
                    range,
                ));
                Some(group)
            }
            _ => {
                warn!("Model on template '{}' has no residue bounds", template);
                None
            }
        };
        let coverage = coverage_of(chains.as_ref(), sequence)?;

        Ok(Model {
            template: template.to_string(),
            gmqe,
            chains,
            coverage,
        })
    }
}

///
/// Chain label of a model template such as `"1a3n.1.A"`.
///
pub fn model_chain_name(template: &str) -> &str {
    let fields: Vec<&str> = template.split('.').collect();
    match fields.as_slice() {
        [_, _, chain] if !chain.is_empty() => *chain,
        _ => DEFAULT_MODEL_CHAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn sequence() -> QuerySequence {
        // 200 residues
        QuerySequence::new("P12345", &format!("{}AA", "MKV".repeat(66))).unwrap()
    }

    #[rstest]
    fn test_query_sequence_normalized() {
        let seq = QuerySequence::new("P69905", "MVLS PADK\nTNVK").unwrap();
        assert_eq!(seq.accession, "p69905");
        assert_eq!(seq.residues, "mvlspadktnvk");
        assert_eq!(seq.len(), 12);
    }

    #[rstest]
    #[case("P6990-5", "MVLS")]
    #[case("P69905", "MVLS1")]
    fn test_query_sequence_rejects(#[case] accession: &str, #[case] residues: &str) {
        assert!(QuerySequence::new(accession, residues).is_err());
    }

    #[rstest]
    fn test_structure_coverage(sequence: QuerySequence) {
        let chains: ChainGroup = "A/B=1-50, C=41-100".parse().unwrap();
        let structure = Structure::new("1ABC", Some(chains), &sequence)
            .unwrap()
            .with_method("X-ray")
            .with_resolution(1.8);
        assert_eq!(structure.code, "1abc");
        assert_eq!(structure.method.as_deref(), Some("X-ray"));
        assert_eq!(structure.coverage, 50.0);
    }

    #[rstest]
    fn test_structure_without_chains(sequence: QuerySequence) {
        let structure = Structure::new("1abc", None, &sequence).unwrap();
        assert_eq!(structure.coverage, 0.0);
    }

    #[rstest]
    fn test_structure_rejects_bad_code(sequence: QuerySequence) {
        let result = Structure::new("1a-c", None, &sequence);
        assert!(matches!(result, Err(CoverageError::InvalidCode(_))));
    }

    #[rstest]
    #[case("1a3n.1.A", "A")]
    #[case("1a3n.1.B", "B")]
    #[case("1a3n.1", "SM")]
    #[case("1a3n.1.A.x", "SM")]
    #[case("", "SM")]
    fn test_model_chain_name(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(model_chain_name(template), expected);
    }

    #[rstest]
    fn test_model_coverage(sequence: QuerySequence) {
        let model = Model::new("1a3n.1.B", Some(51), Some(200), 0.8, &sequence).unwrap();
        let chains = model.chains.as_ref().unwrap();
        assert_eq!(chains.names().collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(model.coverage, 75.0);
    }

    #[rstest]
    #[case(Some(51), None)]
    #[case(None, Some(200))]
    #[case(None, None)]
    #[case(Some(0), Some(5))]
    #[case(Some(3), Some(0))]
    fn test_model_without_bounds(
        sequence: QuerySequence,
        #[case] from: Option<u32>,
        #[case] to: Option<u32>,
    ) {
        let model = Model::new("1a3n.1.B", from, to, 0.8, &sequence).unwrap();
        assert!(model.chains.is_none());
        assert_eq!(model.coverage, 0.0);
    }

    #[rstest]
    fn test_model_with_inverted_bounds(sequence: QuerySequence) {
        let result = Model::new("1a3n.1.B", Some(90), Some(10), 0.8, &sequence);
        assert!(matches!(result, Err(CoverageError::Chain(_))));
    }
}
