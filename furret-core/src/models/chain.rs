use std::fmt::{self, Display};

use crate::models::{GroupNotation, ResidueRange};

///
/// A named set of residue ranges, e.g. one polymer chain of a structure.
///
/// Ranges are always kept in reduced form: sorted, disjoint, and with at
/// least one missing residue between neighbours.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chain {
    name: String,
    ranges: Vec<ResidueRange>,
}

impl Chain {
    ///
    /// Create a new [Chain] and reduce its ranges.
    ///
    /// # Arguments:
    /// - name: chain label
    /// - ranges: any number of ranges, in any order, possibly overlapping
    pub fn new<N, R>(name: N, ranges: R) -> Self
    where
        N: Into<String>,
        R: IntoIterator<Item = ResidueRange>,
    {
        let mut chain = Chain {
            name: name.into(),
            ranges: ranges.into_iter().collect(),
        };
        chain.reduce();
        chain
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &[ResidueRange] {
        &self.ranges
    }

    ///
    /// Add more ranges to the chain, merging them with the existing ones.
    ///
    pub fn add_ranges<R>(&mut self, ranges: R)
    where
        R: IntoIterator<Item = ResidueRange>,
    {
        self.ranges.extend(ranges);
        self.reduce();
    }

    ///
    /// Total number of distinct residues covered by the chain
    ///
    pub fn len(&self) -> u32 {
        self.ranges.iter().map(ResidueRange::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    ///
    /// One [GroupNotation] per range, e.g. `A=1-10`, `A=20-30`.
    ///
    pub fn notations(&self) -> impl Iterator<Item = GroupNotation> + '_ {
        self.ranges
            .iter()
            .map(|r| GroupNotation::new(vec![self.name.clone()], *r))
    }

    /// Sort, then fold left: each range is merged with the last accumulated
    /// one, and whatever comes back is pushed again.
    fn reduce(&mut self) {
        if self.ranges.len() < 2 {
            return;
        }
        self.ranges.sort_unstable();

        let mut reduced: Vec<ResidueRange> = Vec::with_capacity(self.ranges.len());
        for r in self.ranges.drain(..) {
            match reduced.pop() {
                Some(last) => reduced.extend(r.union(&last)),
                None => reduced.push(r),
            }
        }
        self.ranges = reduced;
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranges: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}={}", self.name, ranges.join(","))
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a ResidueRange;
    type IntoIter = std::slice::Iter<'a, ResidueRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::collections::HashSet;

    fn range(begin: u32, end: u32) -> ResidueRange {
        ResidueRange::new(begin, end).unwrap()
    }

    fn make_ranges(pairs: &[(u32, u32)]) -> Vec<ResidueRange> {
        pairs.iter().map(|&(b, e)| range(b, e)).collect()
    }

    fn brute_force_count(pairs: &[(u32, u32)]) -> u32 {
        let residues: HashSet<u32> = pairs.iter().flat_map(|&(b, e)| b..=e).collect();
        residues.len() as u32
    }

    #[rstest]
    fn test_single_range() {
        let chain = Chain::new("A", [range(96, 516)]);
        assert_eq!(chain.name(), "A");
        assert_eq!(chain.ranges(), &[range(96, 516)]);
        assert_eq!(chain.len(), 421);
    }

    #[rstest]
    fn test_empty_chain() {
        let chain = Chain::new("A", Vec::new());
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.to_string(), "A=");
    }

    #[rstest]
    fn test_reduce_unsorted_input() {
        let chain = Chain::new("A", make_ranges(&[(50, 60), (1, 5), (6, 10), (30, 40), (35, 45)]));
        assert_eq!(chain.ranges(), make_ranges(&[(1, 10), (30, 45), (50, 60)]).as_slice());
    }

    #[rstest]
    fn test_reduce_keeps_gap_of_one_residue() {
        // residue 6 is missing, so the ranges stay apart
        let chain = Chain::new("A", make_ranges(&[(1, 5), (7, 10)]));
        assert_eq!(chain.ranges().len(), 2);
        assert_eq!(chain.len(), 9);
    }

    #[rstest]
    fn test_reduce_nested_and_duplicate() {
        let chain = Chain::new("A", make_ranges(&[(1, 100), (20, 30), (1, 100), (100, 100)]));
        assert_eq!(chain.ranges(), &[range(1, 100)]);
    }

    #[rstest]
    fn test_add_ranges_matches_construction() {
        let mut chain = Chain::new("A", make_ranges(&[(96, 516)]));
        chain.add_ranges([range(510, 520), range(1, 10)]);

        let expected = Chain::new("A", make_ranges(&[(1, 10), (510, 520), (96, 516)]));
        assert_eq!(chain, expected);
        assert_eq!(chain.ranges(), make_ranges(&[(1, 10), (96, 520)]).as_slice());
    }

    #[rstest]
    fn test_add_no_ranges_is_idempotent() {
        let mut chain = Chain::new("A", make_ranges(&[(1, 5), (8, 12), (20, 30)]));
        let before = chain.clone();
        chain.add_ranges(Vec::new());
        assert_eq!(chain, before);
    }

    #[rstest]
    fn test_equality_needs_same_name() {
        let a = Chain::new("A", [range(1, 5)]);
        let b = Chain::new("B", [range(1, 5)]);
        assert_ne!(a, b);
    }

    #[rstest]
    #[case(&[(1, 5), (6, 10)])]
    #[case(&[(1, 5), (7, 10)])]
    #[case(&[(10, 20), (1, 3), (2, 12), (40, 41), (43, 43), (42, 42)])]
    #[case(&[(5, 5), (3, 3), (4, 4), (1, 1)])]
    #[case(&[(1, 1000), (200, 300), (999, 1500), (1502, 1600)])]
    fn test_reduce_is_maximal_and_exact(#[case] pairs: &[(u32, u32)]) {
        let chain = Chain::new("X", make_ranges(pairs));

        for pair in chain.ranges().windows(2) {
            assert!(pair[0].precedes(&pair[1]));
            // at least one residue missing between neighbours
            assert!(pair[1].begin() - pair[0].end() > 1);
        }
        assert_eq!(chain.len(), brute_force_count(pairs));
    }

    #[rstest]
    fn test_display_and_notations() {
        let chain = Chain::new("B", make_ranges(&[(600, 700), (96, 516)]));
        assert_eq!(chain.to_string(), "B=96-516,600-700");

        let notations: Vec<String> = chain.notations().map(|n| n.to_string()).collect();
        assert_eq!(notations, vec!["B=96-516", "B=600-700"]);
    }
}
