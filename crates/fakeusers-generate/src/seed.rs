//! Mixing of user seeds with page coordinates.
//!
//! All arithmetic is wrapping 32-bit so the same inputs give the same seeds on
//! every platform and in every process.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Stable 32-bit FNV-1a hash of the seed's UTF-8 bytes.
pub fn hash_seed(seed: &str) -> i32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in seed.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash as i32
}

/// Seed for the page-level text source: `hash(seed) + page * page_size`.
pub fn page_seed(seed: &str, page: u32, page_size: u32) -> i32 {
    let offset = page.wrapping_mul(page_size) as i32;
    hash_seed(seed).wrapping_add(offset)
}

/// Seed for one record's corruption stream: `page_seed + local_index`.
pub fn record_seed(page_seed: i32, local_index: u32) -> i32 {
    page_seed.wrapping_add(local_index as i32)
}

/// Widen a 32-bit seed into the `u64` that `SeedableRng::seed_from_u64` takes.
pub(crate) fn rng_seed(seed: i32) -> u64 {
    u64::from(seed as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_fnv1a_reference_values() {
        assert_eq!(hash_seed("") as u32, 0x811c_9dc5);
        assert_eq!(hash_seed("a") as u32, 0xe40c_292c);
        assert_eq!(hash_seed("foobar") as u32, 0xbf9c_f968);
    }

    #[test]
    fn hash_is_stable_across_calls() {
        assert_eq!(hash_seed("abc"), hash_seed("abc"));
        assert_ne!(hash_seed("abc"), hash_seed("abd"));
    }

    #[test]
    fn page_seed_offsets_by_page_times_size() {
        let base = hash_seed("abc");
        assert_eq!(page_seed("abc", 0, 20), base);
        assert_eq!(page_seed("abc", 3, 20), base.wrapping_add(60));
    }

    #[test]
    fn record_seeds_are_contiguous_across_pages() {
        let last_of_first = record_seed(page_seed("abc", 0, 20), 19);
        let first_of_second = record_seed(page_seed("abc", 1, 20), 0);
        assert_eq!(last_of_first.wrapping_add(1), first_of_second);
    }

    #[test]
    fn seed_arithmetic_wraps_instead_of_overflowing() {
        let seed = page_seed("abc", u32::MAX, u32::MAX);
        assert_eq!(record_seed(i32::MAX, 1), i32::MIN);
        assert_eq!(seed, page_seed("abc", u32::MAX, u32::MAX));
    }

    #[test]
    fn rng_seed_preserves_bit_pattern() {
        assert_eq!(rng_seed(-1), u64::from(u32::MAX));
        assert_eq!(rng_seed(42), 42);
    }
}
