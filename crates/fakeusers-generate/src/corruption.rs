//! Seeded typo injection.
//!
//! Each record gets its own ChaCha8 stream derived from its record seed, so
//! the corruptions of one record never depend on any other record.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use fakeusers_core::{DIGITS, Record, RecordField, RegionProfile};

use crate::seed::rng_seed;

/// Stream id reserved for corruption draws. Keeps a record stream distinct
/// from a page stream seeded with the same integer.
const CORRUPTION_STREAM: u64 = 1;

/// Character-level mutation applied to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Corruption {
    Delete,
    Insert,
    Swap,
}

impl Corruption {
    pub const ALL: [Corruption; 3] = [Self::Delete, Self::Insert, Self::Swap];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::Swap => "swap",
        }
    }

    /// Mutate `value` in place. Returns `false` when the operation does not
    /// apply (delete on empty, swap on fewer than two chars); no randomness
    /// is drawn in that case.
    pub fn apply<R: Rng + ?Sized>(self, value: &mut String, alphabet: &[char], rng: &mut R) -> bool {
        match self {
            Self::Delete => delete_char(value, rng),
            Self::Insert => insert_char(value, alphabet, rng),
            Self::Swap => swap_adjacent(value, rng),
        }
    }
}

fn delete_char<R: Rng + ?Sized>(value: &mut String, rng: &mut R) -> bool {
    let len = value.chars().count();
    if len == 0 {
        return false;
    }
    let index = rng.random_range(0..len);
    match value.char_indices().nth(index) {
        Some((offset, _)) => {
            value.remove(offset);
            true
        }
        None => false,
    }
}

fn insert_char<R: Rng + ?Sized>(value: &mut String, alphabet: &[char], rng: &mut R) -> bool {
    if alphabet.is_empty() {
        return false;
    }
    let len = value.chars().count();
    let index = rng.random_range(0..=len);
    let symbol = alphabet[rng.random_range(0..alphabet.len())];
    let offset = value
        .char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(value.len());
    value.insert(offset, symbol);
    true
}

fn swap_adjacent<R: Rng + ?Sized>(value: &mut String, rng: &mut R) -> bool {
    let mut chars: Vec<char> = value.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    let index = rng.random_range(0..chars.len() - 1);
    chars.swap(index, index + 1);
    *value = chars.into_iter().collect();
    true
}

/// One drawn corruption and whether it changed the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedCorruption {
    pub field: RecordField,
    pub kind: Corruption,
    pub applied: bool,
}

/// Fresh RNG for one record's corruptions.
pub fn corruption_rng(record_seed: i32) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(rng_seed(record_seed));
    rng.set_stream(CORRUPTION_STREAM);
    rng
}

/// `floor(rate)` plus one more with probability `fract(rate)`.
///
/// The coin is drawn even for whole rates so the rest of the stream does not
/// shift with the rate's fractional part.
pub fn sample_error_count<R: Rng + ?Sized>(error_rate: f64, rng: &mut R) -> u32 {
    let whole = error_rate.max(0.0).floor();
    let coin: f64 = rng.random();
    let extra = coin < error_rate - whole;
    whole as u32 + u32::from(extra)
}

/// Applies a region's typo model to records.
#[derive(Debug, Clone)]
pub struct ErrorInjector {
    error_rate: f64,
    text_alphabet: Vec<char>,
    digit_alphabet: Vec<char>,
}

impl ErrorInjector {
    pub fn new(profile: &RegionProfile, error_rate: f64) -> Self {
        Self {
            error_rate,
            text_alphabet: profile.alphabet.chars().collect(),
            digit_alphabet: DIGITS.chars().collect(),
        }
    }

    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Alphabet used for insertions into `field`.
    pub fn alphabet(&self, field: RecordField) -> &[char] {
        match field {
            RecordField::FullName | RecordField::Address => &self.text_alphabet,
            RecordField::Phone => &self.digit_alphabet,
        }
    }

    /// Corrupt `record` in place with the stream for `record_seed`.
    ///
    /// Corruptions compound: each one sees the field as left by the previous.
    /// `number` and `id` are never touched.
    pub fn inject(&self, record: &mut Record, record_seed: i32) -> Vec<AppliedCorruption> {
        let mut rng = corruption_rng(record_seed);
        let count = sample_error_count(self.error_rate, &mut rng);
        let mut log = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let field = RecordField::ALL[rng.random_range(0..RecordField::ALL.len())];
            let kind = Corruption::ALL[rng.random_range(0..Corruption::ALL.len())];
            let applied = kind.apply(record.field_mut(field), self.alphabet(field), &mut rng);
            log.push(AppliedCorruption {
                field,
                kind,
                applied,
            });
        }
        log
    }
}
