use fakeusers_core::{GenerationParams, PageRange, Region};
use fakeusers_generate::{GenerationEngine, generate_page};

fn engine(region: Region, error_rate: f64, seed: &str, page_size: u32) -> GenerationEngine {
    let params = GenerationParams::new(region, error_rate, seed, page_size).expect("params");
    GenerationEngine::new(params).expect("engine")
}

#[test]
fn generation_is_deterministic_for_every_region() {
    for region in Region::ALL {
        for error_rate in [0.0, 0.5, 3.0, 12.25] {
            let a = generate_page(region, error_rate, "abc", 7, 20).expect("page A");
            let b = generate_page(region, error_rate, "abc", 7, 20).expect("page B");
            assert_eq!(a, b, "{region} at {error_rate}");
        }
    }
}

#[test]
fn serialized_pages_are_byte_identical() {
    let a = generate_page(Region::Poland, 2.5, "seed", 3, 20).expect("page A");
    let b = generate_page(Region::Poland, 2.5, "seed", 3, 20).expect("page B");
    let a = serde_json::to_vec(&a).expect("serialize A");
    let b = serde_json::to_vec(&b).expect("serialize B");
    assert_eq!(a, b);
}

#[test]
fn direct_page_matches_sequential_scroll() {
    let page_size = 10;
    let target = 5;
    let scrolled = engine(Region::Usa, 1.5, "scroll", page_size)
        .pages(PageRange::new(0, target).expect("range"))
        .expect("pages");

    let direct = engine(Region::Usa, 1.5, "scroll", page_size)
        .page(target)
        .expect("page");

    let start = (target * page_size) as usize;
    assert_eq!(&scrolled[start..start + page_size as usize], direct.as_slice());
}

#[test]
fn request_order_does_not_matter() {
    let engine = engine(Region::Ukraine, 4.0, "order", 20);
    let forward: Vec<_> = (0..5).map(|page| engine.page(page).expect("page")).collect();
    let mut backward: Vec<_> = (0..5).rev().map(|page| engine.page(page).expect("page")).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn numbers_are_sequential_across_pages() {
    let records = engine(Region::Poland, 0.0, "numbers", 20)
        .pages(PageRange::new(0, 4).expect("range"))
        .expect("pages");
    let numbers: Vec<u64> = records.iter().map(|record| record.number).collect();
    assert_eq!(numbers, (1..=100).collect::<Vec<_>>());
}

#[test]
fn different_seeds_give_different_pages() {
    let a = generate_page(Region::Usa, 0.0, "alpha", 0, 20).expect("page A");
    let b = generate_page(Region::Usa, 0.0, "beta", 0, 20).expect("page B");
    assert_ne!(a, b);
}

#[test]
fn ids_are_unique_within_a_page() {
    let records = generate_page(Region::Usa, 0.0, "ids", 0, 200).expect("page");
    let ids: std::collections::HashSet<_> = records.iter().map(|record| &record.id).collect();
    assert_eq!(ids.len(), records.len());
}

#[test]
fn clean_pages_use_region_phone_prefix() {
    let expectations = [
        (Region::Usa, "+1 "),
        (Region::Poland, "+48 "),
        (Region::Ukraine, "+380 "),
    ];
    for (region, prefix) in expectations {
        let records = generate_page(region, 0.0, "phones", 0, 20).expect("page");
        for record in &records {
            assert!(record.phone.starts_with(prefix), "{region}: {}", record.phone);
            assert_eq!(
                record.phone.chars().count(),
                region.profile().phone_mask.chars().count()
            );
        }
    }
}

#[test]
fn clean_fields_are_never_empty() {
    for region in Region::ALL {
        for record in generate_page(region, 0.0, "fields", 2, 50).expect("page") {
            assert!(!record.full_name.is_empty());
            assert!(!record.address.is_empty());
            assert!(!record.address.contains('{'), "{}", record.address);
        }
    }
}
