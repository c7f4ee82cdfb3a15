//! Accumulates one [`Definition`] from raw source entries.
//!
//! Specifics go through two filters before they are added: a run-scoped
//! blacklist and the exclude ranges recorded so far. Exclusions therefore
//! only affect specifics that arrive after them.

use std::collections::HashSet;

use discogen_common::discovery::{Definition, Specific};
use discogen_common::network::address::{self, Address};
use tracing::{debug, info, warn};

/// What happened to a candidate specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecificOutcome {
    Added,
    Invalid,
    Blacklisted,
    Excluded,
}

#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    definition: Definition,
    blacklist: HashSet<Address>,
}

impl DefinitionBuilder {
    pub fn new(definition: Definition) -> Self {
        Self {
            definition,
            blacklist: HashSet::new(),
        }
    }

    /// Returns `true` when the block contributed a range.
    pub fn include_cidr(&mut self, cidr: &str) -> bool {
        debug!("including CIDR {cidr}");
        match self.definition.include_cidr(cidr) {
            Ok(()) => true,
            Err(e) => {
                warn!("ignore: cannot include {cidr}: {e}");
                false
            }
        }
    }

    /// Returns `true` when the block contributed a range.
    pub fn exclude_cidr(&mut self, cidr: &str) -> bool {
        debug!("excluding CIDR {cidr}");
        match self.definition.exclude_cidr(cidr) {
            Ok(()) => true,
            Err(e) => {
                warn!("ignore: cannot exclude {cidr}: {e}");
                false
            }
        }
    }

    /// Returns `true` when the literal is a valid address.
    pub fn blacklist(&mut self, literal: &str) -> bool {
        match address::parse_address(literal) {
            Ok(address) => {
                debug!("excluding IP {address}");
                self.blacklist.insert(address);
                true
            }
            Err(e) => {
                warn!("ignore: {e}");
                false
            }
        }
    }

    pub fn add_specific(&mut self, literal: &str) -> SpecificOutcome {
        let Ok(address) = address::parse_address(literal) else {
            debug!("ignore: {literal} is not an IP address");
            return SpecificOutcome::Invalid;
        };

        if self.blacklist.contains(&address) {
            info!("ignore: IP {address} is blacklisted");
            return SpecificOutcome::Blacklisted;
        }

        if self.definition.exclude_ranges_contain(&address) {
            info!("ignore: IP {address} is part of exclude ranges");
            return SpecificOutcome::Excluded;
        }

        debug!("adding IP {address}");
        self.definition.specifics.push(Specific::new(address.ip()));
        SpecificOutcome::Added
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn finish(self) -> Definition {
        self.definition
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_specific_filters_in_order() {
        let mut builder = DefinitionBuilder::default();
        assert!(builder.exclude_cidr("10.0.0.0/24"));
        assert!(builder.blacklist("10.0.1.7"));

        assert_eq!(builder.add_specific("not-an-ip"), SpecificOutcome::Invalid);
        assert_eq!(builder.add_specific("10.0.1.7"), SpecificOutcome::Blacklisted);
        assert_eq!(builder.add_specific("10.0.0.7"), SpecificOutcome::Excluded);
        assert_eq!(builder.add_specific("10.0.1.8"), SpecificOutcome::Added);

        let definition = builder.finish();
        assert_eq!(definition.specifics.len(), 1);
        assert_eq!(definition.exclude_ranges.len(), 1);
    }

    #[test]
    fn blacklist_matches_normalized_addresses() {
        let mut builder = DefinitionBuilder::default();
        assert!(builder.blacklist("2001:0db8::0001"));
        assert!(!builder.blacklist("2001:db8::zz"));
        assert_eq!(builder.add_specific("2001:db8::1"), SpecificOutcome::Blacklisted);
    }

    #[test]
    fn mapped_exclude_block_filters_plain_ipv4_specifics() {
        let mut builder = DefinitionBuilder::default();
        assert!(builder.exclude_cidr("::ffff:10.0.0.0/120"));
        assert_eq!(builder.add_specific("10.0.0.5"), SpecificOutcome::Excluded);
        assert_eq!(builder.add_specific("::ffff:10.0.0.6"), SpecificOutcome::Excluded);
        assert_eq!(builder.add_specific("10.0.1.5"), SpecificOutcome::Added);
    }

    #[test]
    fn cidr_failures_add_nothing() {
        let mut builder = DefinitionBuilder::default();
        assert!(!builder.include_cidr("10.0.0.1/32"));
        assert!(!builder.include_cidr("garbage"));
        assert!(builder.include_cidr("10.0.0.0/30"));
        assert_eq!(builder.definition().include_ranges.len(), 1);
    }
}
