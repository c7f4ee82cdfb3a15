//! # Range Aggregator
//!
//! Rewrites a [`Definition`] into its minimal form and estimates the number
//! of addresses it covers.
//!
//! Specifics and include ranges form one pool; exclude ranges form a second,
//! independent pool that is only ever used for containment. A fresh
//! [`IpRangeSet`] is built for each pool on every call.

use discogen_common::discovery::{
    Definition, DiscoveryConfiguration, ExcludeRange, IncludeRange, Specific,
};
use discogen_common::network::range::IpRange;
use discogen_common::network::range_set::IpRangeSet;

/// Replaces the definition's specifics, include ranges and exclude ranges
/// with their canonical, ascending form.
///
/// Single-address results become specifics, everything wider stays a range.
/// Entries whose end precedes their begin, or that mix address families,
/// produce nothing.
pub fn merge(definition: &mut Definition) {
    let includes: IpRangeSet = definition
        .include_ranges
        .iter()
        .filter_map(|range| range.to_ip_range().ok())
        .chain(definition.specifics.iter().map(Specific::to_ip_range))
        .collect();
    let excludes = exclude_set(definition);

    let (singles, ranges): (Vec<IpRange>, Vec<IpRange>) = includes
        .into_vec()
        .into_iter()
        .partition(IpRange::is_singleton);

    definition.specifics = singles.into_iter().map(Specific::from_range).collect();
    definition.include_ranges = ranges.into_iter().map(IncludeRange::from_range).collect();
    definition.exclude_ranges = excludes
        .into_vec()
        .into_iter()
        .map(ExcludeRange::from_range)
        .collect();
}

/// Counts the include-range and specific addresses not covered by an exclude range.
///
/// This is a local estimate: include URLs are not followed, and a specific
/// that also falls inside an include range is counted twice unless the
/// definition was merged first. Totals saturate at `u128::MAX`, which is one
/// short of the full IPv6 space.
pub fn estimate_total_addresses(definition: &Definition) -> u128 {
    let excludes = exclude_set(definition);

    let from_ranges = definition
        .include_ranges
        .iter()
        .filter_map(|range| range.to_ip_range().ok())
        .map(|range| range.len().saturating_sub(excluded_within(&excludes, &range)));

    let from_specifics = definition
        .specifics
        .iter()
        .filter(|specific| !excludes.contains(&specific.address()))
        .map(|_| 1);

    from_ranges
        .chain(from_specifics)
        .fold(0, u128::saturating_add)
}

pub fn merge_configuration(configuration: &mut DiscoveryConfiguration) {
    for definition in &mut configuration.definitions {
        merge(definition);
    }
}

pub fn estimate_configuration(configuration: &DiscoveryConfiguration) -> u128 {
    configuration
        .definitions
        .iter()
        .map(estimate_total_addresses)
        .fold(0, u128::saturating_add)
}

fn exclude_set(definition: &Definition) -> IpRangeSet {
    definition
        .exclude_ranges
        .iter()
        .filter_map(|range| range.to_ip_range().ok())
        .collect()
}

/// Exclusions are disjoint once they sit in a set, so their overlaps add up.
fn excluded_within(excludes: &IpRangeSet, range: &IpRange) -> u128 {
    excludes
        .iter()
        .map(|exclude| range.overlap_len(exclude))
        .fold(0, u128::saturating_add)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
