use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::network::address::{self, Address};
use crate::network::range::{IpRange, ScanParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "@key")]
    pub key: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detector {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@class-name")]
    pub class_name: String,
    #[serde(rename = "parameter", default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detectors {
    #[serde(rename = "detector", default)]
    pub detectors: Vec<Detector>,
}

/// A single address to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specific {
    #[serde(rename = "@location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "@retries", default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(rename = "@timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@foreign-source", default, skip_serializing_if = "Option::is_none")]
    pub foreign_source: Option<String>,
    #[serde(rename = "$text")]
    pub ip: IpAddr,
}

impl Specific {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            location: None,
            retries: None,
            timeout: None,
            foreign_source: None,
            ip,
        }
    }

    pub fn params(&self) -> ScanParams {
        ScanParams {
            location: self.location.clone(),
            retries: self.retries,
            timeout: self.timeout,
            foreign_source: self.foreign_source.clone(),
        }
    }

    pub fn address(&self) -> Address {
        Address::from(self.ip)
    }

    pub fn to_ip_range(&self) -> IpRange {
        IpRange::single(self.address(), self.params())
    }

    /// Builds a specific from the first address of `range`.
    pub fn from_range(range: IpRange) -> Self {
        let ip = range.begin().ip();
        let params = range.into_params();
        Self {
            location: params.location,
            retries: params.retries,
            timeout: params.timeout,
            foreign_source: params.foreign_source,
            ip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeRange {
    #[serde(rename = "@location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "@retries", default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(rename = "@timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@foreign-source", default, skip_serializing_if = "Option::is_none")]
    pub foreign_source: Option<String>,
    pub begin: IpAddr,
    pub end: IpAddr,
}

impl IncludeRange {
    pub fn new(begin: IpAddr, end: IpAddr) -> Self {
        Self {
            location: None,
            retries: None,
            timeout: None,
            foreign_source: None,
            begin,
            end,
        }
    }

    pub fn params(&self) -> ScanParams {
        ScanParams {
            location: self.location.clone(),
            retries: self.retries,
            timeout: self.timeout,
            foreign_source: self.foreign_source.clone(),
        }
    }

    pub fn contains(&self, address: &Address) -> bool {
        Address::from(self.begin) <= *address && *address <= Address::from(self.end)
    }

    pub fn to_ip_range(&self) -> Result<IpRange, RangeError> {
        IpRange::from_ips(self.begin, self.end, self.params())
    }

    pub fn from_range(range: IpRange) -> Self {
        let (begin, end) = (range.begin().ip(), range.end().ip());
        let params = range.into_params();
        Self {
            location: params.location,
            retries: params.retries,
            timeout: params.timeout,
            foreign_source: params.foreign_source,
            begin,
            end,
        }
    }
}

/// A range removed from discovery. Only the location is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeRange {
    #[serde(rename = "@location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub begin: IpAddr,
    pub end: IpAddr,
}

impl ExcludeRange {
    pub fn new(begin: IpAddr, end: IpAddr) -> Self {
        Self {
            location: None,
            begin,
            end,
        }
    }

    pub fn contains(&self, address: &Address) -> bool {
        Address::from(self.begin) <= *address && *address <= Address::from(self.end)
    }

    pub fn to_ip_range(&self) -> Result<IpRange, RangeError> {
        let params = ScanParams {
            location: self.location.clone(),
            ..ScanParams::default()
        };
        IpRange::from_ips(self.begin, self.end, params)
    }

    pub fn from_range(range: IpRange) -> Self {
        let (begin, end) = (range.begin().ip(), range.end().ip());
        Self {
            location: range.into_params().location,
            begin,
            end,
        }
    }
}

/// Points the discovery daemon to an external list of addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeUrl {
    #[serde(rename = "@location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "@retries", default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(rename = "@timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@foreign-source", default, skip_serializing_if = "Option::is_none")]
    pub foreign_source: Option<String>,
    #[serde(rename = "$text")]
    pub url: String,
}

/// One discovery definition: what to probe, what to skip and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "@location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "@retries", default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(rename = "@timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@foreign-source", default, skip_serializing_if = "Option::is_none")]
    pub foreign_source: Option<String>,
    #[serde(rename = "@chunkSize", default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detectors: Option<Detectors>,
    #[serde(rename = "specific", default, skip_serializing_if = "Vec::is_empty")]
    pub specifics: Vec<Specific>,
    #[serde(rename = "include-range", default, skip_serializing_if = "Vec::is_empty")]
    pub include_ranges: Vec<IncludeRange>,
    #[serde(rename = "exclude-range", default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ranges: Vec<ExcludeRange>,
    #[serde(rename = "include-url", default, skip_serializing_if = "Vec::is_empty")]
    pub include_urls: Vec<IncludeUrl>,
}

impl Definition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single address. Malformed literals are refused and nothing is added.
    pub fn add_specific(&mut self, literal: &str) -> Result<(), RangeError> {
        let address = address::parse_address(literal)?;
        self.specifics.push(Specific::new(address.ip()));
        Ok(())
    }

    pub fn add_include_range(&mut self, begin: &str, end: &str) -> Result<(), RangeError> {
        let range = parse_range(begin, end)?;
        self.include_ranges.push(IncludeRange::from_range(range));
        Ok(())
    }

    pub fn add_exclude_range(&mut self, begin: &str, end: &str) -> Result<(), RangeError> {
        let range = parse_range(begin, end)?;
        self.exclude_ranges.push(ExcludeRange::from_range(range));
        Ok(())
    }

    /// Includes the usable hosts of `cidr`.
    ///
    /// Blocks without usable hosts (/31, /32, /127, /128) return
    /// [`RangeError::EmptyRange`] and add nothing.
    pub fn include_cidr(&mut self, cidr: &str) -> Result<(), RangeError> {
        let range = usable_range(cidr)?;
        self.include_ranges.push(IncludeRange::from_range(range));
        Ok(())
    }

    /// Excludes the usable hosts of `cidr`. Same rules as [`Definition::include_cidr`].
    pub fn exclude_cidr(&mut self, cidr: &str) -> Result<(), RangeError> {
        let range = usable_range(cidr)?;
        self.exclude_ranges.push(ExcludeRange::from_range(range));
        Ok(())
    }

    pub fn add_include_url(&mut self, url: &str) {
        self.include_urls.push(IncludeUrl {
            location: None,
            retries: None,
            timeout: None,
            foreign_source: None,
            url: url.to_string(),
        });
    }

    pub fn include_ranges_contain(&self, address: &Address) -> bool {
        self.include_ranges.iter().any(|range| range.contains(address))
    }

    pub fn exclude_ranges_contain(&self, address: &Address) -> bool {
        self.exclude_ranges.iter().any(|range| range.contains(address))
    }

    /// Sorts specifics by address and ranges by their first address.
    pub fn sort(&mut self) {
        self.specifics.sort_by_key(Specific::address);
        self.include_ranges
            .sort_by_key(|range| Address::from(range.begin));
        self.exclude_ranges
            .sort_by_key(|range| Address::from(range.begin));
    }
}

fn parse_range(begin: &str, end: &str) -> Result<IpRange, RangeError> {
    let begin = address::parse_address(begin)?;
    let end = address::parse_address(end)?;
    IpRange::new(begin, end, ScanParams::default())
}

fn usable_range(cidr: &str) -> Result<IpRange, RangeError> {
    let (begin, end) = address::cidr_to_range(cidr)?;
    IpRange::new(begin, end, ScanParams::default())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn include_cidr_adds_usable_range() {
        let mut def = Definition::new();
        def.include_cidr("192.168.0.0/24").unwrap();
        assert_eq!(def.include_ranges.len(), 1);
        assert_eq!(def.include_ranges[0].begin, ip("192.168.0.1"));
        assert_eq!(def.include_ranges[0].end, ip("192.168.0.254"));
    }

    #[test]
    fn include_cidr_refuses_blocks_without_hosts() {
        let mut def = Definition::new();
        assert!(matches!(
            def.include_cidr("10.0.0.1/32"),
            Err(RangeError::EmptyRange { .. })
        ));
        assert!(matches!(
            def.exclude_cidr("10.0.0.0/31"),
            Err(RangeError::EmptyRange { .. })
        ));
        assert!(def.include_ranges.is_empty());
        assert!(def.exclude_ranges.is_empty());
    }

    #[test]
    fn exclude_ranges_contain() {
        let mut def = Definition::new();
        def.exclude_cidr("192.168.0.0/24").unwrap();
        def.exclude_cidr("192.168.1.0/24").unwrap();
        assert!(def.exclude_ranges_contain(&addr("192.168.0.1")));
        assert!(def.exclude_ranges_contain(&addr("192.168.1.10")));
        assert!(!def.exclude_ranges_contain(&addr("172.16.1.1")));
        assert!(!def.exclude_ranges_contain(&addr("192.168.0.0")));
    }

    #[test]
    fn include_ranges_contain() {
        let mut def = Definition::new();
        def.include_cidr("192.168.0.0/24").unwrap();
        def.include_cidr("192.168.1.0/24").unwrap();
        assert!(def.include_ranges_contain(&addr("192.168.0.1")));
        assert!(def.include_ranges_contain(&addr("192.168.1.10")));
        assert!(!def.include_ranges_contain(&addr("172.16.1.1")));
    }

    #[test]
    fn add_specific_refuses_bad_literals() {
        let mut def = Definition::new();
        def.add_specific("192.168.0.1").unwrap();
        def.add_specific("192.168.0.2").unwrap();
        assert_eq!(
            def.add_specific("192.400.0.1"),
            Err(RangeError::InvalidAddress("192.400.0.1".into()))
        );
        assert_eq!(def.specifics.len(), 2);
    }

    #[test]
    fn add_ranges() {
        let mut def = Definition::new();
        def.add_include_range("192.168.0.10", "192.168.0.20").unwrap();
        def.add_exclude_range("192.168.0.10", "192.168.0.20").unwrap();
        assert!(def.add_include_range("192.168.0.20", "192.168.0.10").is_err());
        assert!(def.add_exclude_range("192.168.0.10", "nope").is_err());
        assert_eq!(def.include_ranges.len(), 1);
        assert_eq!(def.exclude_ranges.len(), 1);
    }

    #[test]
    fn add_include_url() {
        let mut def = Definition::new();
        def.add_include_url("file:/tmp/ip-list.txt");
        assert_eq!(def.include_urls.len(), 1);
        assert_eq!(def.include_urls[0].url, "file:/tmp/ip-list.txt");
    }

    #[test]
    fn sort_orders_by_address_value() {
        let mut def = Definition::new();
        for literal in ["192.168.0.10", "192.168.0.2", "172.16.20.2", "172.16.16.2"] {
            def.add_specific(literal).unwrap();
        }
        def.add_include_range("10.0.0.50", "10.0.0.60").unwrap();
        def.add_include_range("9.0.0.1", "9.0.0.2").unwrap();
        def.sort();

        let order: Vec<IpAddr> = def.specifics.iter().map(|s| s.ip).collect();
        assert_eq!(
            order,
            vec![
                ip("172.16.16.2"),
                ip("172.16.20.2"),
                ip("192.168.0.2"),
                ip("192.168.0.10")
            ]
        );
        assert_eq!(def.include_ranges[0].begin, ip("9.0.0.1"));
    }

    #[test]
    fn conversions_carry_params() {
        let specific = Specific {
            location: Some("Branch".into()),
            retries: Some(3),
            timeout: Some(500),
            foreign_source: Some("Stores".into()),
            ip: ip("10.1.1.1"),
        };
        let range = specific.to_ip_range();
        assert!(range.is_singleton());
        assert_eq!(range.params(), &specific.params());
        assert_eq!(Specific::from_range(range), specific);

        let exclude = ExcludeRange {
            location: Some("Branch".into()),
            begin: ip("10.1.1.1"),
            end: ip("10.1.1.9"),
        };
        let range = exclude.to_ip_range().unwrap();
        assert_eq!(range.params().location.as_deref(), Some("Branch"));
        assert_eq!(ExcludeRange::from_range(range), exclude);
    }
}
