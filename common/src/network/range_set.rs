//! # IP Address Range Set
//!
//! Keeps ranges as a minimal, sorted, disjoint run. Every [`IpRangeSet::add`]
//! leaves the set fully coalesced: no two ranges overlap and no two ranges
//! are adjacent, so the set can be inspected at any point of a build.
//!
//! Insertion is a linear scan with fold-on-overlap. Sets in this domain hold
//! tens to hundreds of ranges, so no interval tree is used.

use crate::network::address::Address;
use crate::network::range::IpRange;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpRangeSet {
    /// Sorted by `begin`, pairwise non-overlapping and non-adjacent.
    ranges: Vec<IpRange>,
}

impl IpRangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `range`, folding in every existing range it overlaps or touches.
    ///
    /// When a fold happens, the existing range is the incumbent and keeps its
    /// scan parameters. A single insertion may bridge several existing ranges.
    pub fn add(&mut self, range: IpRange) {
        let mut candidate = range;
        let mut idx = 0;

        while idx < self.ranges.len() {
            let existing = &self.ranges[idx];

            if candidate.comes_before(existing) && !candidate.is_adjacent_to(existing) {
                // Everything left of idx is already folded into candidate or strictly before it.
                self.ranges.insert(idx, candidate);
                return;
            }

            if existing.is_combinable(&candidate) {
                let existing = self.ranges.remove(idx);
                candidate = existing.combine(&candidate);
                continue;
            }

            idx += 1;
        }

        self.ranges.push(candidate);
    }

    /// The canonical ranges in ascending order.
    pub fn ranges(&self) -> &[IpRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IpRange> {
        self.ranges.iter()
    }

    pub fn into_vec(self) -> Vec<IpRange> {
        self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, address: &Address) -> bool {
        let idx = self.ranges.partition_point(|range| range.end() < *address);
        self.ranges
            .get(idx)
            .is_some_and(|range| range.contains(address))
    }
}

impl Extend<IpRange> for IpRangeSet {
    fn extend<I: IntoIterator<Item = IpRange>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl FromIterator<IpRange> for IpRangeSet {
    fn from_iter<I: IntoIterator<Item = IpRange>>(iter: I) -> Self {
        let mut set = IpRangeSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a IpRangeSet {
    type Item = &'a IpRange;
    type IntoIter = std::slice::Iter<'a, IpRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
