use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, SecondaryAddress, StateAbbr, StateName, StreetName, ZipCode,
};
use fake::faker::name::raw::Name;
use fake::faker::number::raw::NumberWithFormat;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Builder;

use crate::errors::GenerationError;
use crate::faker_rs::locales::{LocaleKey, LocaleTables};
use crate::seed::rng_seed;

/// Seeded, locale-aware supplier of realistic field text.
///
/// Every call advances the underlying stream, so a fixed seed and a fixed
/// call order always reproduce the same values.
pub trait TextSource {
    fn full_name(&mut self) -> String;
    fn street_address(&mut self) -> String;
    fn street_name(&mut self) -> String;
    fn building_number(&mut self) -> String;
    fn secondary_address(&mut self) -> String;
    fn city(&mut self) -> String;
    fn state(&mut self) -> String;
    fn state_abbr(&mut self) -> String;
    fn zip_code(&mut self) -> String;
    /// Fill a mask where `#` is any digit and `^` a non-zero digit.
    fn phone_number(&mut self, mask: &str) -> String;
    /// Uniform index in `0..len`. Always consumes one draw, even when
    /// `len <= 1` and the answer is fixed.
    fn choose_index(&mut self, len: usize) -> usize;
    /// Uniform integer in `lo..=hi`. Always consumes one draw.
    fn random_int(&mut self, lo: u32, hi: u32) -> u32;
    fn random_guid(&mut self) -> String;
}

/// [`TextSource`] backed by `fake` for `en_US` and embedded tables otherwise.
pub struct SeededFaker {
    locale: LocaleKey,
    rng: ChaCha8Rng,
}

impl SeededFaker {
    pub fn new(locale: LocaleKey, seed: i32) -> Self {
        Self {
            locale,
            rng: ChaCha8Rng::seed_from_u64(rng_seed(seed)),
        }
    }

    pub fn for_locale(locale: &str, seed: i32) -> Result<Self, GenerationError> {
        let key = LocaleKey::parse(locale)
            .ok_or_else(|| GenerationError::UnsupportedLocale(locale.to_string()))?;
        Ok(Self::new(key, seed))
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    fn fill_mask(&mut self, mask: &str) -> String {
        NumberWithFormat(EN, mask).fake_with_rng(&mut self.rng)
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn pick_pair(
        &mut self,
        items: &'static [(&'static str, &'static str)],
    ) -> (&'static str, &'static str) {
        items.choose(&mut self.rng).copied().unwrap_or(("", ""))
    }

    fn pick_mask(&mut self, masks: &'static [&'static str]) -> String {
        let mask = self.pick(masks);
        self.fill_mask(mask)
    }

    fn tabled_full_name(&mut self, tables: &'static LocaleTables) -> String {
        let feminine = self.rng.random_bool(0.5);
        let first = if feminine {
            self.pick(tables.female_first_names)
        } else {
            self.pick(tables.male_first_names)
        };
        let (masculine_last, feminine_last) = self.pick_pair(tables.last_names);
        let last = if feminine {
            feminine_last
        } else {
            masculine_last
        };
        format!("{first} {last}")
    }
}

impl TextSource for SeededFaker {
    fn full_name(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.tabled_full_name(tables),
            None => Name(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn street_address(&mut self) -> String {
        match self.locale.tables() {
            Some(_) => {
                let street = self.street_name();
                let building = self.building_number();
                format!("{street} {building}")
            }
            None => {
                let building = self.building_number();
                let street = self.street_name();
                format!("{building} {street}")
            }
        }
    }

    fn street_name(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick(tables.street_names).to_string(),
            None => StreetName(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn building_number(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick_mask(tables.building_masks),
            None => BuildingNumber(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn secondary_address(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick_mask(tables.secondary_masks),
            None => SecondaryAddress(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn city(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick(tables.cities).to_string(),
            None => CityName(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn state(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick_pair(tables.states).0.to_string(),
            None => StateName(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn state_abbr(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.pick_pair(tables.states).1.to_string(),
            None => StateAbbr(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn zip_code(&mut self) -> String {
        match self.locale.tables() {
            Some(tables) => self.fill_mask(tables.zip_mask),
            None => ZipCode(EN).fake_with_rng(&mut self.rng),
        }
    }

    fn phone_number(&mut self, mask: &str) -> String {
        self.fill_mask(mask)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }

    fn random_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi.max(lo))
    }

    fn random_guid(&mut self) -> String {
        let mut bytes = [0_u8; 16];
        self.rng.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}
