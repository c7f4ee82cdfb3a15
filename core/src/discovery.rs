//! # Discovery Configuration Assembly
//!
//! Implements the "generate" use case: read every configured source into the
//! base configuration's definition, then canonicalize it.
//!
//! Sources are processed in a fixed order so that exclusions are known before
//! specifics are admitted:
//! 1. include CIDRs, 2. exclude CIDRs, 3. exclude list (blacklist),
//! 4. include list, 5. DNS export, 6. NNMi hex export.

use std::path::Path;

use discogen_common::config::{Config, base_configuration};
use discogen_common::discovery::DiscoveryConfiguration;
use tracing::{info, warn};

use crate::aggregator;
use crate::builder::{DefinitionBuilder, SpecificOutcome};
use crate::sources;

/// Counts of what a run admitted, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblySummary {
    pub cidrs_included: usize,
    pub cidrs_excluded: usize,
    pub blacklisted: usize,
    pub specifics_added: usize,
    pub specifics_skipped: usize,
}

pub fn assemble(cfg: &Config) -> anyhow::Result<(DiscoveryConfiguration, AssemblySummary)> {
    let mut configuration = base_configuration();
    let mut builder = DefinitionBuilder::new(configuration.definitions.pop().unwrap_or_default());
    let mut summary = AssemblySummary::default();

    if let Some(path) = &cfg.include_cidr {
        let content = open("Include CIDR", path)?;
        summary.cidrs_included = sources::entries(&content)
            .filter(|cidr| builder.include_cidr(cidr))
            .count();
    }

    if let Some(path) = &cfg.exclude_cidr {
        let content = open("Exclude CIDR", path)?;
        summary.cidrs_excluded = sources::entries(&content)
            .filter(|cidr| builder.exclude_cidr(cidr))
            .count();
    }

    if let Some(path) = &cfg.exclude_list {
        let content = open("Exclude List", path)?;
        summary.blacklisted = sources::entries(&content)
            .filter(|literal| builder.blacklist(literal))
            .count();
    }

    if let Some(path) = &cfg.include_list {
        let content = open("Include List", path)?;
        for literal in sources::entries(&content) {
            tally(&mut summary, builder.add_specific(literal));
        }
    }

    if let Some(path) = &cfg.include_dns {
        let content = open("DNS File", path)?;
        for literal in sources::dns_addresses(&content) {
            tally(&mut summary, builder.add_specific(literal));
        }
    }

    if let Some(path) = &cfg.include_nnmi_hex {
        let content = open("NNMi Hex File", path)?;
        for line in sources::entries(&content) {
            match sources::decode_nnmi_hex(line) {
                Some(ip) => tally(&mut summary, builder.add_specific(&ip.to_string())),
                None => {
                    warn!("ignore: cannot decode NNMi entry '{line}'");
                    summary.specifics_skipped += 1;
                }
            }
        }
    }

    let mut definition = builder.finish();
    aggregator::merge(&mut definition);
    configuration.add_definition(definition);

    Ok((configuration, summary))
}

fn open(label: &str, path: &Path) -> anyhow::Result<String> {
    info!("Processing {label} {}", path.display());
    sources::read_source(path)
}

fn tally(summary: &mut AssemblySummary, outcome: SpecificOutcome) {
    match outcome {
        SpecificOutcome::Added => summary.specifics_added += 1,
        _ => summary.specifics_skipped += 1,
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
