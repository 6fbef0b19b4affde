use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ChainError;
use crate::models::ResidueRange;

///
/// One entry of compact group notation: `A/B=96-516`.
///
/// Every listed chain name shares the same residue range, which is how
/// structural records describe symmetric copies of one sequence region.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GroupNotation {
    pub names: Vec<String>,
    pub range: ResidueRange,
}

impl GroupNotation {
    pub fn new(names: Vec<String>, range: ResidueRange) -> Self {
        GroupNotation { names, range }
    }
}

fn parse_bound(notation: &str, bound: &str) -> Result<u32, ChainError> {
    if bound.is_empty() || !bound.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChainError::notation(
            notation,
            format!("residue bound '{}' is not a positive integer", bound),
        ));
    }
    bound
        .parse::<u32>()
        .map_err(|e| ChainError::notation(notation, format!("residue bound '{}': {}", bound, e)))
}

impl FromStr for GroupNotation {
    type Err = ChainError;

    ///
    /// Parse `<name>[/<name>...]=<begin>-<end>`.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();

        let mut parts = notation.split('=');
        let (key, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => (key, value),
            _ => return Err(ChainError::notation(notation, "expected exactly one '='")),
        };

        let mut bounds = value.split('-');
        let (begin, end) = match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(begin), Some(end), None) => (begin, end),
            _ => return Err(ChainError::notation(notation, "expected exactly one '-'")),
        };
        let begin = parse_bound(notation, begin)?;
        let end = parse_bound(notation, end)?;
        let range = ResidueRange::new(begin, end)
            .map_err(|e| ChainError::notation(notation, e.to_string()))?;

        let names: Vec<String> = key.split('/').map(|n| n.to_string()).collect();
        if let Some(bad) = names
            .iter()
            .find(|n| n.is_empty() || !n.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(ChainError::notation(
                notation,
                format!("invalid chain name '{}'", bad),
            ));
        }

        Ok(GroupNotation { names, range })
    }
}

impl Display for GroupNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.names.join("/"), self.range)
    }
}
