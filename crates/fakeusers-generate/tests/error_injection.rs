use std::collections::BTreeMap;

use fakeusers_core::{DIGITS, GenerationParams, Record, Region};
use fakeusers_generate::GenerationEngine;
use fakeusers_generate::corruption::{Corruption, ErrorInjector};

fn engine(region: Region, error_rate: f64, seed: &str, page_size: u32) -> GenerationEngine {
    let params = GenerationParams::new(region, error_rate, seed, page_size).expect("params");
    GenerationEngine::new(params).expect("engine")
}

fn mean_corruptions(region: Region, error_rate: f64) -> f64 {
    let mut records = 0_u64;
    let mut corruptions = 0_u64;
    for seed in 0..50 {
        let (_, report) = engine(region, error_rate, &format!("seed-{seed}"), 100)
            .page_with_report(0)
            .expect("page");
        records += report.records;
        corruptions += report.corruptions_drawn;
    }
    corruptions as f64 / records as f64
}

#[test]
fn mean_error_count_converges_to_rate() {
    for (region, rate) in [
        (Region::Usa, 2.5),
        (Region::Poland, 0.3),
        (Region::Ukraine, 7.75),
    ] {
        let mean = mean_corruptions(region, rate);
        assert!(
            (mean - rate).abs() < 0.05,
            "{region}: expected mean near {rate}, got {mean}"
        );
    }
}

#[test]
fn zero_rate_changes_nothing() {
    let mean = mean_corruptions(Region::Usa, 0.0);
    assert_eq!(mean, 0.0);
}

/// Characters present in `after` more often than in `before`.
fn inserted_chars(before: &str, after: &str) -> Vec<char> {
    let mut counts: BTreeMap<char, i64> = BTreeMap::new();
    for c in after.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in before.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts
        .into_iter()
        .filter(|(_, surplus)| *surplus > 0)
        .map(|(c, _)| c)
        .collect()
}

#[test]
fn inserted_characters_come_from_the_field_alphabet() {
    for region in Region::ALL {
        let clean = engine(region, 0.0, "alphabet", 50).page(1).expect("clean page");
        let noisy = engine(region, 20.0, "alphabet", 50).page(1).expect("noisy page");
        let alphabet = region.profile().alphabet;
        for (before, after) in clean.iter().zip(&noisy) {
            for c in inserted_chars(&before.full_name, &after.full_name) {
                assert!(alphabet.contains(c), "{region}: {c:?} in name");
            }
            for c in inserted_chars(&before.address, &after.address) {
                assert!(alphabet.contains(c), "{region}: {c:?} in address");
            }
            for c in inserted_chars(&before.phone, &after.phone) {
                assert!(DIGITS.contains(c), "{region}: {c:?} in phone");
            }
        }
    }
}

#[test]
fn heavy_corruption_of_short_fields_never_fails() {
    let injector = ErrorInjector::new(Region::Poland.profile(), 200.0);
    for seed in 0..100 {
        let mut record = Record {
            number: 9,
            id: "fixed".to_string(),
            full_name: String::new(),
            address: "a".to_string(),
            phone: String::new(),
        };
        let log = injector.inject(&mut record, seed);
        assert_eq!(log.len(), 200);
        let inserts = log
            .iter()
            .filter(|entry| entry.kind == Corruption::Insert)
            .count();
        let total_len = record.full_name.chars().count()
            + record.address.chars().count()
            + record.phone.chars().count();
        assert!(total_len <= 1 + inserts);
        assert_eq!(record.id, "fixed");
    }
}

#[test]
fn noop_corruptions_are_still_counted() {
    let injector = ErrorInjector::new(Region::Usa.profile(), 50.0);
    let mut record = Record {
        number: 1,
        id: "x".to_string(),
        full_name: String::new(),
        address: String::new(),
        phone: String::new(),
    };
    let log = injector.inject(&mut record, 1234);
    assert_eq!(log.len(), 50);
    assert!(log.iter().any(|entry| !entry.applied));
    assert!(log.iter().any(|entry| entry.applied));
}
