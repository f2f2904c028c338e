//! Structurally valid records from a seeded text source.

use fakeusers_core::{Error as CoreError, Record, RegionProfile};

use crate::errors::GenerationError;
use crate::faker_rs::{SeededFaker, TextSource};

/// A `{...}` token inside an address template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    StreetAddress,
    StreetName,
    BuildingNumber,
    SecondaryAddress,
    City,
    State,
    StateAbbr,
    ZipCode,
    /// `int:LO-HI`, inclusive.
    RandomInt { lo: u32, hi: u32 },
}

impl Placeholder {
    pub fn parse(token: &str) -> Result<Self, CoreError> {
        let placeholder = match token {
            "street_address" => Self::StreetAddress,
            "street_name" => Self::StreetName,
            "building_number" => Self::BuildingNumber,
            "secondary_address" => Self::SecondaryAddress,
            "city" => Self::City,
            "state" => Self::State,
            "state_abbr" => Self::StateAbbr,
            "zip_code" => Self::ZipCode,
            other => return parse_random_int(other),
        };
        Ok(placeholder)
    }

    fn render<S: TextSource + ?Sized>(self, source: &mut S) -> String {
        match self {
            Self::StreetAddress => source.street_address(),
            Self::StreetName => source.street_name(),
            Self::BuildingNumber => source.building_number(),
            Self::SecondaryAddress => source.secondary_address(),
            Self::City => source.city(),
            Self::State => source.state(),
            Self::StateAbbr => source.state_abbr(),
            Self::ZipCode => source.zip_code(),
            Self::RandomInt { lo, hi } => source.random_int(lo, hi).to_string(),
        }
    }
}

fn parse_random_int(token: &str) -> Result<Placeholder, CoreError> {
    let invalid = || CoreError::InvalidTemplate(format!("unknown placeholder '{{{token}}}'"));
    let bounds = token.strip_prefix("int:").ok_or_else(invalid)?;
    let (lo, hi) = bounds.split_once('-').ok_or_else(invalid)?;
    let lo: u32 = lo.trim().parse().map_err(|_| invalid())?;
    let hi: u32 = hi.trim().parse().map_err(|_| invalid())?;
    if lo > hi {
        return Err(CoreError::InvalidTemplate(format!(
            "placeholder '{{{token}}}' has lower bound above upper bound"
        )));
    }
    Ok(Placeholder::RandomInt { lo, hi })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder),
}

/// Parsed address template, filled left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> AddressTemplate<'a> {
    pub fn parse(template: &'a str) -> Result<Self, CoreError> {
        let mut segments = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            let (literal, tail) = rest.split_at(open);
            if literal.contains('}') {
                return Err(CoreError::InvalidTemplate(format!(
                    "unmatched '}}' in '{template}'"
                )));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal));
            }
            let close = tail.find('}').ok_or_else(|| {
                CoreError::InvalidTemplate(format!("unclosed placeholder in '{template}'"))
            })?;
            let token = &tail[1..close];
            segments.push(Segment::Placeholder(Placeholder::parse(token)?));
            rest = &tail[close + 1..];
        }
        if rest.contains('}') {
            return Err(CoreError::InvalidTemplate(format!(
                "unmatched '}}' in '{template}'"
            )));
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }
        Ok(Self { segments })
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    pub fn render<S: TextSource + ?Sized>(&self, source: &mut S) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => out.push_str(&placeholder.render(source)),
            }
        }
        out
    }
}

/// Builds uncorrupted pages for one region.
#[derive(Debug, Clone)]
pub struct RecordSynthesizer {
    profile: &'static RegionProfile,
    templates: Vec<AddressTemplate<'static>>,
}

impl RecordSynthesizer {
    pub fn new(profile: &'static RegionProfile) -> Result<Self, GenerationError> {
        if profile.address_templates.is_empty() {
            return Err(CoreError::InvalidTemplate(format!(
                "region {} has no address templates",
                profile.region
            ))
            .into());
        }
        let templates = profile
            .address_templates
            .iter()
            .map(|template| AddressTemplate::parse(*template))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { profile, templates })
    }

    pub fn profile(&self) -> &'static RegionProfile {
        self.profile
    }

    /// Synthesize a page from a fresh text source seeded with `page_seed`.
    pub fn synthesize_page(
        &self,
        page: u32,
        page_size: u32,
        page_seed: i32,
    ) -> Result<Vec<Record>, GenerationError> {
        let mut source = SeededFaker::for_locale(self.profile.locale, page_seed)?;
        Ok(self.synthesize(&mut source, page, page_size))
    }

    /// Draw `page_size` records from `source`.
    ///
    /// Per record the source is advanced in a fixed order: id, full name,
    /// template choice and its placeholders, phone.
    pub fn synthesize<S: TextSource + ?Sized>(
        &self,
        source: &mut S,
        page: u32,
        page_size: u32,
    ) -> Vec<Record> {
        let first_number = u64::from(page) * u64::from(page_size) + 1;
        (0..page_size)
            .map(|index| {
                let id = source.random_guid();
                let full_name = source.full_name();
                let address = self.address(source);
                let phone = source.phone_number(self.profile.phone_mask);
                Record {
                    number: first_number + u64::from(index),
                    id,
                    full_name,
                    address,
                    phone,
                }
            })
            .collect()
    }

    fn address<S: TextSource + ?Sized>(&self, source: &mut S) -> String {
        let index = source.choose_index(self.templates.len());
        self.templates
            .get(index)
            .map(|template| template.render(source))
            .unwrap_or_default()
    }
}
