//! # IP Address Range
//!
//! A closed interval `[begin, end]` of addresses within one family, plus the
//! scan parameters that travel with it.
//!
//! The ordering predicates here are only meant for placing a range inside an
//! [`IpRangeSet`](crate::network::range_set::IpRangeSet): two overlapping
//! ranges neither come before nor after each other.

use std::fmt;
use std::net::IpAddr;

use crate::error::RangeError;
use crate::network::address::Address;

/// Scan settings attached to a range. Opaque to every comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScanParams {
    pub location: Option<String>,
    pub retries: Option<u32>,
    pub timeout: Option<u32>,
    pub foreign_source: Option<String>,
}

/// Represents a continuous range of addresses, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpRange {
    begin: Address,
    end: Address,
    params: ScanParams,
}

impl IpRange {
    /// Builds a range, refusing mixed families and ranges that end before they begin.
    pub fn new(begin: Address, end: Address, params: ScanParams) -> Result<Self, RangeError> {
        if begin.family() != end.family() {
            return Err(RangeError::FamilyMismatch {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        if end < begin {
            return Err(RangeError::EmptyRange {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { begin, end, params })
    }

    pub fn from_ips(begin: IpAddr, end: IpAddr, params: ScanParams) -> Result<Self, RangeError> {
        Self::new(Address::from(begin), Address::from(end), params)
    }

    pub fn single(address: Address, params: ScanParams) -> Self {
        Self {
            begin: address,
            end: address,
            params,
        }
    }

    pub fn begin(&self) -> Address {
        self.begin
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn params(&self) -> &ScanParams {
        &self.params
    }

    pub fn into_params(self) -> ScanParams {
        self.params
    }

    pub fn is_singleton(&self) -> bool {
        self.begin == self.end
    }

    /// Number of addresses covered.
    ///
    /// The full IPv6 space holds 2^128 addresses, one more than `u128` can
    /// represent, so `::` through `ffff:...:ffff` reports `u128::MAX`.
    pub fn len(&self) -> u128 {
        (self.end.value() - self.begin.value()).saturating_add(1)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.begin <= *address && *address <= self.end
    }

    pub fn overlaps(&self, other: &IpRange) -> bool {
        self.contains(&other.begin)
            || self.contains(&other.end)
            || other.contains(&self.begin)
            || other.contains(&self.end)
    }

    pub fn comes_before(&self, other: &IpRange) -> bool {
        self.end < other.begin
    }

    pub fn comes_after(&self, other: &IpRange) -> bool {
        self.begin > other.end
    }

    /// True when the two ranges touch with no address between them.
    pub fn is_adjacent_to(&self, other: &IpRange) -> bool {
        self.comes_immediately_before(other) || self.comes_immediately_after(other)
    }

    pub fn is_combinable(&self, other: &IpRange) -> bool {
        self.overlaps(other) || self.is_adjacent_to(other)
    }

    /// Spans both ranges. Scan parameters are taken from `self`, the incumbent.
    pub fn combine(&self, other: &IpRange) -> IpRange {
        IpRange {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
            params: self.params.clone(),
        }
    }

    /// Number of addresses shared with `other`.
    pub fn overlap_len(&self, other: &IpRange) -> u128 {
        let begin = self.begin.max(other.begin);
        let end = self.end.min(other.end);
        if begin.family() != end.family() || end < begin {
            return 0;
        }
        (end.value() - begin.value()).saturating_add(1)
    }

    fn comes_immediately_before(&self, other: &IpRange) -> bool {
        self.comes_before(other) && self.end.successor() == Some(other.begin)
    }

    fn comes_immediately_after(&self, other: &IpRange) -> bool {
        self.comes_after(other) && self.begin.predecessor() == Some(other.end)
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.begin, self.end)
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
