use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Alphabet used for every corruption of a phone number.
pub const DIGITS: &str = "0123456789";

const USA_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const POLAND_ALPHABET: &str =
    "AĄBCĆDEĘFGHIJKLŁMNŃOÓPRSŚTUWYZŹŻabcdefghijklmnoprstuwyzźżąćęłńóś";
const UKRAINE_ALPHABET: &str =
    "АБВГҐДЕЄЖЗИІЇЙКЛМНОПРСТУФХЦЧШЩЬЮЯабвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Supported regions. Each maps to exactly one static [`RegionProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Region {
    #[serde(rename = "USA")]
    Usa,
    Poland,
    Ukraine,
}

/// Locale, phone mask, address templates and typo alphabet for one region.
///
/// Address templates are plain strings with `{placeholder}` tokens that the
/// generator fills from its seeded text source. Phone masks use `#` for any
/// digit and `^` for a non-zero digit.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionProfile {
    pub region: Region,
    pub locale: &'static str,
    pub phone_mask: &'static str,
    pub address_templates: &'static [&'static str],
    pub alphabet: &'static str,
}

static USA: RegionProfile = RegionProfile {
    region: Region::Usa,
    locale: "en_US",
    phone_mask: "+1 ###-###-####",
    address_templates: &[
        "{street_address}, {city}, {state_abbr} {zip_code}",
        "{building_number} {street_name}, Apt. {int:1-999}, {city}, {state_abbr} {zip_code}",
        "P.O. Box {int:1000-9999}, {city}, {state_abbr} {zip_code}",
        "{street_address}, {secondary_address}, {city}, {state} {zip_code}",
    ],
    alphabet: USA_ALPHABET,
};

static POLAND: RegionProfile = RegionProfile {
    region: Region::Poland,
    locale: "pl",
    phone_mask: "+48 ## ### ## ##",
    address_templates: &[
        "{street_name} {building_number}, {zip_code} {city}",
        "{street_name} {building_number}/{int:1-100}, {zip_code} {city}",
        "{street_name} {building_number}, m. {int:1-100}, {zip_code} {city}",
        "{city}, {street_name} {building_number}, {zip_code} {state}",
    ],
    alphabet: POLAND_ALPHABET,
};

static UKRAINE: RegionProfile = RegionProfile {
    region: Region::Ukraine,
    locale: "uk",
    phone_mask: "+380 ## ### ## ##",
    address_templates: &[
        "{street_name}, {building_number}, {city}, {state_abbr} обл., {zip_code}",
        "{street_name}, буд. {building_number}, кв. {int:1-100}, м. {city}, {state_abbr} обл., {zip_code}",
        "{city}, {street_name} {building_number}, {zip_code}",
        "{state_abbr} обл., м. {city}, {street_name}, {building_number}",
    ],
    alphabet: UKRAINE_ALPHABET,
};

impl Region {
    pub const ALL: [Region; 3] = [Region::Usa, Region::Poland, Region::Ukraine];

    pub fn profile(self) -> &'static RegionProfile {
        match self {
            Self::Usa => &USA,
            Self::Poland => &POLAND,
            Self::Ukraine => &UKRAINE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Poland => "Poland",
            Self::Ukraine => "Ukraine",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Accepts the display name or the ISO country code, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "usa" | "us" => Ok(Self::Usa),
            "poland" | "pl" => Ok(Self::Poland),
            "ukraine" | "ua" => Ok(Self::Ukraine),
            _ => Err(Error::UnsupportedRegion(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes() {
        assert_eq!("USA".parse::<Region>(), Ok(Region::Usa));
        assert_eq!("pl".parse::<Region>(), Ok(Region::Poland));
        assert_eq!(" Ukraine ".parse::<Region>(), Ok(Region::Ukraine));
        assert_eq!("UA".parse::<Region>(), Ok(Region::Ukraine));
    }

    #[test]
    fn rejects_unknown_region() {
        let err = "Germany".parse::<Region>().unwrap_err();
        assert_eq!(err, Error::UnsupportedRegion("Germany".to_string()));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn every_profile_is_complete() {
        for region in Region::ALL {
            let profile = region.profile();
            assert_eq!(profile.region, region);
            assert!(!profile.address_templates.is_empty());
            assert!(!profile.alphabet.is_empty());
            assert!(profile.phone_mask.contains('#'));
        }
    }

    #[test]
    fn alphabets_have_no_duplicates() {
        for region in Region::ALL {
            let chars: Vec<char> = region.profile().alphabet.chars().collect();
            let unique: std::collections::BTreeSet<char> = chars.iter().copied().collect();
            assert_eq!(chars.len(), unique.len(), "{region}");
        }
    }
}
