use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CoverageError, CoverageResult};

///
/// One experimental structure entry of a query session.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct StructureEntry {
    pub code: String,
    pub method: Option<String>,
    pub resolution: Option<f64>,
    /// comma-separated group notations, e.g. `"A/B=96-516, C=9-94"`
    pub chains: Option<String>,
}

///
/// One homology model entry of a query session.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct ModelEntry {
    pub template: String,
    pub from: Option<u32>,
    pub to: Option<u32>,
    #[serde(default)]
    pub gmqe: f64,
}

///
/// A saved query: one protein sequence and the structures found for it.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct QuerySession {
    pub accession: String,
    pub sequence: String,
    #[serde(default)]
    pub structures: Vec<StructureEntry>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl FromStr for QuerySession {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<&Path> for QuerySession {
    type Error = CoverageError;

    ///
    /// Read a [QuerySession] from a toml file.
    ///
    fn try_from(path: &Path) -> CoverageResult<Self> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}
