use std::fmt::{self, Display};

use furret_core::models::ChainGroup;
use log::{debug, info};
use serde::Serialize;

use crate::coverage::{StructureCoverage, best_coverage, best_model};
use crate::errors::CoverageResult;
use crate::models::{Model, QuerySequence, Structure};
use crate::session::QuerySession;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Structure,
    Model,
}

///
/// One line of a [CoverageReport].
///
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CoverageRow {
    pub kind: EntryKind,
    /// structure code, or model template
    pub id: String,
    pub method: Option<String>,
    pub resolution: Option<f64>,
    pub chains: String,
    pub covered_residues: u32,
    pub coverage: f64,
}

///
/// Coverage of one query sequence by all of its structures and models.
///
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub accession: String,
    pub sequence_length: usize,
    pub rows: Vec<CoverageRow>,
    /// `(coverage, code)` of the best experimental structure
    pub best_structure: Option<(f64, String)>,
    /// template of the model with the highest GMQE
    pub best_model: Option<String>,
}

fn row_chains(chains: Option<&ChainGroup>) -> (String, u32) {
    chains.map_or((String::new(), 0), |g| (g.to_string(), g.covered_residues()))
}

impl CoverageReport {
    ///
    /// Build the report for a [QuerySession].
    ///
    /// Homology models are only considered when the session has no
    /// experimental structure.
    pub fn from_session(session: &QuerySession) -> CoverageResult<Self> {
        let sequence = QuerySequence::new(&session.accession, &session.sequence)?;

        let mut structures: Vec<Structure> = Vec::with_capacity(session.structures.len());
        for entry in &session.structures {
            let chains = entry
                .chains
                .as_deref()
                .map(|c| c.parse::<ChainGroup>())
                .transpose()?;
            let mut structure = Structure::new(&entry.code, chains, &sequence)?;
            structure.method = entry.method.clone();
            structure.resolution = entry.resolution;
            debug!("{}: {:.2}% coverage", structure.code, structure.coverage);
            structures.push(structure);
        }

        let mut models: Vec<Model> = Vec::new();
        if structures.is_empty() {
            for entry in &session.models {
                models.push(Model::new(
                    &entry.template,
                    entry.from,
                    entry.to,
                    entry.gmqe,
                    &sequence,
                )?);
            }
        } else if !session.models.is_empty() {
            info!(
                "Skipping {} models: {} has experimental structures",
                session.models.len(),
                sequence.accession
            );
        }

        let mut rows: Vec<CoverageRow> = Vec::with_capacity(structures.len() + models.len());
        for s in &structures {
            let (chains, covered_residues) = row_chains(s.chains.as_ref());
            rows.push(CoverageRow {
                kind: EntryKind::Structure,
                id: s.code.clone(),
                method: s.method.clone(),
                resolution: s.resolution,
                chains,
                covered_residues,
                coverage: s.coverage,
            });
        }
        for m in &models {
            let (chains, covered_residues) = row_chains(m.chains.as_ref());
            rows.push(CoverageRow {
                kind: EntryKind::Model,
                id: m.template.clone(),
                method: None,
                resolution: None,
                chains,
                covered_residues,
                coverage: m.coverage,
            });
        }

        Ok(CoverageReport {
            accession: sequence.accession.clone(),
            sequence_length: sequence.len(),
            rows,
            best_structure: best_coverage(&structures).map(|(c, code)| (c, code.to_string())),
            best_model: best_model(&models).map(|m| m.template.clone()),
        })
    }
}

impl Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\t{} residues", self.accession, self.sequence_length)?;
        for row in &self.rows {
            writeln!(
                f,
                "{:?}\t{}\t{}\t{}\t{}\t{:.2}",
                row.kind,
                row.id,
                row.method.as_deref().unwrap_or("-"),
                row.resolution.map_or("-".to_string(), |r| r.to_string()),
                row.covered_residues,
                row.coverage
            )?;
        }
        if let Some((coverage, code)) = &self.best_structure {
            writeln!(f, "best structure\t{}\t{:.2}", code, coverage)?;
        }
        if let Some(template) = &self.best_model {
            writeln!(f, "best model\t{}", template)?;
        }
        Ok(())
    }
}
