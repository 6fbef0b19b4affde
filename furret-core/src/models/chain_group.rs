use std::fmt::{self, Display};
use std::str::FromStr;

use fxhash::FxHashMap as HashMap;
use log::trace;

use crate::errors::{ChainError, ChainResult};
use crate::models::{Chain, GroupNotation};

///
/// A collection of uniquely named [Chain]s, kept in insertion order.
///
/// Adding ranges for a name that is already present extends that chain
/// instead of creating a second one.
///
#[derive(Debug, Clone, Default)]
pub struct ChainGroup {
    chains: Vec<Chain>,
    index: HashMap<String, usize>,
}

impl ChainGroup {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Build a group from several notation strings like `["A/B=96-516", "C=9-94"]`.
    ///
    /// Either every string parses and the whole group is returned, or the
    /// first failure is returned and nothing is kept.
    pub fn try_from_notations<I, S>(notations: I) -> ChainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut group = ChainGroup::new();
        for notation in notations {
            group.add_from_string(notation.as_ref())?;
        }
        Ok(group)
    }

    ///
    /// Insert a chain, or merge its ranges into the chain of the same name.
    ///
    pub fn add_chain(&mut self, chain: Chain) {
        match self.index.get(chain.name()) {
            Some(&i) => self.chains[i].add_ranges(chain.ranges().iter().copied()),
            None => {
                self.index.insert(chain.name().to_string(), self.chains.len());
                self.chains.push(chain);
            }
        }
    }

    ///
    /// Parse one notation string and apply its range to every listed chain.
    ///
    pub fn add_from_string(&mut self, notation: &str) -> ChainResult<()> {
        let parsed: GroupNotation = notation.parse()?;
        self.add_notation(parsed);
        Ok(())
    }

    pub fn add_notation(&mut self, notation: GroupNotation) {
        trace!("Adding {} to chain group", notation);
        let range = notation.range;
        for name in notation.names {
            self.add_chain(Chain::new(name, [range]));
        }
    }

    ///
    /// Iterate over chain names in insertion order.
    ///
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.chains.iter().map(Chain::name)
    }

    pub fn get(&self, name: &str) -> Option<&Chain> {
        self.index.get(name).map(|&i| &self.chains[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chain> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    ///
    /// Combine every chain into one, counting each residue once.
    ///
    /// The merged chain is named by concatenating all member names, and its
    /// ranges are the reduced union of every member's ranges. Returns `None`
    /// for an empty group.
    pub fn merged(&self) -> Option<Chain> {
        if self.chains.is_empty() {
            return None;
        }
        let name: String = self.names().collect();
        let ranges = self
            .chains
            .iter()
            .flat_map(|c| c.ranges().iter().copied());
        Some(Chain::new(name, ranges))
    }
}

impl PartialEq for ChainGroup {
    fn eq(&self, other: &Self) -> bool {
        self.chains == other.chains
    }
}

impl Eq for ChainGroup {}

impl FromStr for ChainGroup {
    type Err = ChainError;

    ///
    /// Parse a comma-separated list of notations, e.g. `"A/B=96-516, C=9-94"`.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainGroup::try_from_notations(s.split(',').filter(|n| !n.trim().is_empty()))
    }
}

/// Comma-separated notations, one per range. Chains without ranges have no
/// notation and are left out, so parsing the output back drops them.
impl Display for ChainGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notations: Vec<String> = self
            .chains
            .iter()
            .flat_map(|c| c.notations())
            .map(|n| n.to_string())
            .collect();
        write!(f, "{}", notations.join(", "))
    }
}

impl<'a> IntoIterator for &'a ChainGroup {
    type Item = &'a Chain;
    type IntoIter = std::slice::Iter<'a, Chain>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}
