#![cfg(test)]
use std::net::Ipv4Addr;

use discogen_common::config::base_configuration;
use discogen_common::discovery::{Definition, DiscoveryConfiguration};
use discogen_core::aggregator::{estimate_configuration, estimate_total_addresses, merge};
use discogen_core::xml::{from_xml, to_xml};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const BASE: u32 = 0x0A00_0000; // 10.0.0.0
const SPAN: u32 = 1024;

enum Entry {
    Include(u32, u32),
    Exclude(u32, u32),
    Specific(u32),
}

/*************************************************************
                 Merge and estimate together
**************************************************************/

#[test]
fn merged_document_does_not_depend_on_entry_order() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut entries = random_entries(&mut rng, 40);
        let expected = render(&entries)?;

        for _ in 0..5 {
            entries.shuffle(&mut rng);
            assert_eq!(render(&entries)?, expected);
        }
    }
    Ok(())
}

#[test]
fn merge_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let mut once = definition(&random_entries(&mut rng, 40));
        merge(&mut once);
        let mut twice = once.clone();
        merge(&mut twice);
        assert_eq!(once, twice);
    }
}

#[test]
fn estimate_counts_included_minus_excluded() {
    let mut rng = StdRng::seed_from_u64(31337);

    for _ in 0..25 {
        let entries = random_entries(&mut rng, 30);

        let mut included = vec![false; SPAN as usize];
        let mut excluded = vec![false; SPAN as usize];
        for entry in &entries {
            match *entry {
                Entry::Include(b, e) => included[b as usize..=e as usize].fill(true),
                Entry::Exclude(b, e) => excluded[b as usize..=e as usize].fill(true),
                Entry::Specific(a) => included[a as usize] = true,
            }
        }
        let expected = included
            .iter()
            .zip(&excluded)
            .filter(|(inc, exc)| **inc && !**exc)
            .count() as u128;

        let mut def = definition(&entries);
        merge(&mut def);
        assert_eq!(estimate_total_addresses(&def), expected);
    }
}

#[test]
fn xml_round_trip_keeps_the_estimate() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(5);
    let mut cfg = base_configuration();
    cfg.definitions[0] = definition(&random_entries(&mut rng, 50));
    merge(&mut cfg.definitions[0]);

    let parsed: DiscoveryConfiguration = from_xml(&to_xml(&cfg)?)?;
    assert_eq!(estimate_configuration(&parsed), estimate_configuration(&cfg));
    assert_eq!(parsed, cfg);
    Ok(())
}

#[test]
fn mixed_families_estimate_independently() {
    let mut def = Definition::new();
    def.include_cidr("10.0.0.0/24").unwrap();
    def.include_cidr("2001:db8::/120").unwrap();
    def.exclude_cidr("2001:db8::/124").unwrap();
    def.add_specific("::ffff:10.0.0.1").unwrap();
    merge(&mut def);

    assert_eq!(def.include_ranges.len(), 2);
    assert!(def.specifics.is_empty());
    assert_eq!(estimate_total_addresses(&def), 254 + 254 - 14);
}

/*************************************************************
                         Helpers
**************************************************************/

fn random_entries(rng: &mut StdRng, count: usize) -> Vec<Entry> {
    (0..count)
        .map(|_| {
            let begin = rng.random_range(0..SPAN);
            let end = (begin + rng.random_range(0..32)).min(SPAN - 1);
            match rng.random_range(0..4) {
                0 => Entry::Exclude(begin, end),
                1 => Entry::Specific(begin),
                _ => Entry::Include(begin, end),
            }
        })
        .collect()
}

fn definition(entries: &[Entry]) -> Definition {
    let mut def = Definition::new();
    for entry in entries {
        match *entry {
            Entry::Include(b, e) => def.add_include_range(&ip(b), &ip(e)).unwrap(),
            Entry::Exclude(b, e) => def.add_exclude_range(&ip(b), &ip(e)).unwrap(),
            Entry::Specific(a) => def.add_specific(&ip(a)).unwrap(),
        }
    }
    def
}

fn render(entries: &[Entry]) -> anyhow::Result<String> {
    let mut cfg = base_configuration();
    cfg.definitions[0] = definition(entries);
    merge(&mut cfg.definitions[0]);
    to_xml(&cfg)
}

fn ip(offset: u32) -> String {
    Ipv4Addr::from(BASE + offset).to_string()
}
