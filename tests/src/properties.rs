#![cfg(test)]
use discogen_common::network::address::{Address, Family};
use discogen_common::network::range::{IpRange, ScanParams};
use discogen_common::network::range_set::IpRangeSet;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const BASE: u128 = 0x0A00_0000; // 10.0.0.0
const SPAN: u128 = 1024;

/*************************************************************
                  Interval set invariants
**************************************************************/

#[test]
fn insertion_order_does_not_change_the_result() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..50 {
        let mut ranges = random_ranges(&mut rng, 40);
        let expected = bounds(&ranges.iter().cloned().collect());

        for _ in 0..10 {
            ranges.shuffle(&mut rng);
            let set: IpRangeSet = ranges.iter().cloned().collect();
            assert_eq!(bounds(&set), expected);
        }
    }
}

#[test]
fn result_is_sorted_disjoint_and_non_adjacent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let set: IpRangeSet = random_ranges(&mut rng, 60).into_iter().collect();
        for pair in set.ranges().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                b.begin().value() > a.end().value() + 1,
                "{a} and {b} should have been fused"
            );
        }
    }
}

#[test]
fn invariants_hold_after_every_insertion() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..20 {
        let mut set = IpRangeSet::new();
        let mut inserted: Vec<IpRange> = Vec::new();

        for range in random_ranges(&mut rng, 40) {
            set.add(range.clone());
            inserted.push(range);

            for pair in set.ranges().windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(
                    b.begin().value() > a.end().value() + 1,
                    "{a} and {b} left unfused after {} insertions",
                    inserted.len()
                );
            }

            for seen in &inserted {
                for value in seen.begin().value()..=seen.end().value() {
                    let address = v4(value);
                    assert!(set.contains(&address), "{address} lost after insertion");
                }
            }
        }
    }
}

#[test]
fn coverage_matches_the_union_of_inputs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..25 {
        let ranges = random_ranges(&mut rng, 30);

        let mut covered = vec![false; SPAN as usize];
        for range in &ranges {
            for value in range.begin().value()..=range.end().value() {
                covered[(value - BASE) as usize] = true;
            }
        }

        let set: IpRangeSet = ranges.into_iter().collect();
        for (offset, expected) in covered.iter().enumerate() {
            let address = v4(BASE + offset as u128);
            assert_eq!(set.contains(&address), *expected, "mismatch at {address}");
        }

        let total: u128 = set.iter().map(IpRange::len).sum();
        assert_eq!(total, covered.iter().filter(|c| **c).count() as u128);
    }
}

#[test]
fn families_stay_apart_in_any_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let top_v4 = Family::V4.max_value();

    let mut ranges = vec![
        range(v4(top_v4 - 1), v4(top_v4)),
        range(v6(0), v6(1)),
        range(v6(2), v6(9)),
        range(v4(0), v4(0)),
    ];
    for _ in 0..10 {
        ranges.shuffle(&mut rng);
        let set: IpRangeSet = ranges.iter().cloned().collect();
        let families: Vec<Family> = set.iter().map(|r| r.begin().family()).collect();
        assert_eq!(families, vec![Family::V4, Family::V4, Family::V6]);
        assert_eq!(set.ranges()[2].len(), 10);
    }
}

/*************************************************************
                        Generators
**************************************************************/

fn random_ranges(rng: &mut StdRng, count: usize) -> Vec<IpRange> {
    (0..count)
        .map(|_| {
            let begin = rng.random_range(0..SPAN);
            let width = if rng.random_bool(0.3) { 0 } else { rng.random_range(0..24) };
            let end = (begin + width).min(SPAN - 1);
            range(v4(BASE + begin), v4(BASE + end))
        })
        .collect()
}

fn bounds(set: &IpRangeSet) -> Vec<(Address, Address)> {
    set.iter().map(|r| (r.begin(), r.end())).collect()
}

fn range(begin: Address, end: Address) -> IpRange {
    IpRange::new(begin, end, ScanParams::default()).unwrap()
}

fn v4(value: u128) -> Address {
    Address::new(value, Family::V4).unwrap()
}

fn v6(value: u128) -> Address {
    Address::new(value, Family::V6).unwrap()
}
