use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::RangeInclusive;

use crate::errors::{ChainError, ChainResult};

/// Represent a closed range of residues `[begin, end]`.
/// Positions are 1-based and both ends are included.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResidueRange {
    begin: u32,
    end: u32,
}

/// Outcome of [ResidueRange::union]: either one merged range, or the two
/// inputs in ascending order when a gap separates them.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Union {
    Merged(ResidueRange),
    Disjoint(ResidueRange, ResidueRange),
}

impl ResidueRange {
    ///
    /// Create a new [ResidueRange].
    ///
    /// # Arguments:
    /// - begin: first residue, must be at least 1
    /// - end: last residue, must not precede `begin`
    pub fn new(begin: u32, end: u32) -> ChainResult<Self> {
        if begin == 0 || begin > end {
            return Err(ChainError::InvalidRange { begin, end });
        }
        Ok(ResidueRange { begin, end })
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    ///
    /// Number of residues spanned by the range
    ///
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.end - self.begin + 1
    }

    /// Iterate over every residue position in the range.
    pub fn residues(&self) -> RangeInclusive<u32> {
        self.begin..=self.end
    }

    /// True when `other` lies entirely inside this range.
    pub fn contains(&self, other: &ResidueRange) -> bool {
        self.begin <= other.begin && self.end >= other.end
    }

    /// True when `self` sorts strictly before `other`.
    #[inline]
    pub fn precedes(&self, other: &ResidueRange) -> bool {
        self < other
    }

    /// True when `self` sorts strictly after `other`.
    #[inline]
    pub fn follows(&self, other: &ResidueRange) -> bool {
        self > other
    }

    ///
    /// Merge two ranges when they overlap or touch.
    ///
    /// Ranges are mergeable when the later one begins no more than one
    /// residue after the earlier one ends, so `1-5` and `6-10` give `1-10`
    /// while `1-5` and `7-10` stay apart. The result does not depend on
    /// which range the method is called on.
    pub fn union(&self, other: &ResidueRange) -> Union {
        let (first, second) = if self <= other {
            (*self, *other)
        } else {
            (*other, *self)
        };

        if second.begin.saturating_sub(first.end) <= 1 {
            Union::Merged(ResidueRange {
                begin: first.begin,
                end: first.end.max(second.end),
            })
        } else {
            Union::Disjoint(first, second)
        }
    }
}

impl Ord for ResidueRange {
    #[inline]
    fn cmp(&self, other: &ResidueRange) -> Ordering {
        match self.begin.cmp(&other.begin) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl PartialOrd for ResidueRange {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<(u32, u32)> for ResidueRange {
    type Error = ChainError;

    fn try_from(value: (u32, u32)) -> ChainResult<Self> {
        ResidueRange::new(value.0, value.1)
    }
}

impl Display for ResidueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

impl Union {
    pub fn is_merged(&self) -> bool {
        matches!(self, Union::Merged(_))
    }
}

impl IntoIterator for Union {
    type Item = ResidueRange;
    type IntoIter = std::iter::Chain<std::iter::Once<ResidueRange>, std::option::IntoIter<ResidueRange>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Union::Merged(r) => std::iter::once(r).chain(None),
            Union::Disjoint(first, second) => std::iter::once(first).chain(Some(second)),
        }
    }
}
