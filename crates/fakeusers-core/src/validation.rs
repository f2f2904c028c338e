use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::error::{Error, Result};
use crate::region::Region;

/// Upper bound on the expected corruption count per record.
pub const MAX_ERROR_RATE: f64 = 1000.0;

/// Inputs shared by every page of one generation stream.
///
/// Construct with [`GenerationParams::new`] to get validated values; the
/// fields stay public so callers can build them from configuration and run
/// [`GenerationParams::validate`] themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub region: Region,
    /// Expected number of corruptions per record; may be fractional.
    pub error_rate: f64,
    pub seed: String,
    pub page_size: u32,
}

impl GenerationParams {
    pub fn new(
        region: Region,
        error_rate: f64,
        seed: impl Into<String>,
        page_size: u32,
    ) -> Result<Self> {
        let params = Self {
            region,
            error_rate,
            seed: seed.into(),
            page_size,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parameters with the default page size.
    pub fn with_default_page_size(
        region: Region,
        error_rate: f64,
        seed: impl Into<String>,
    ) -> Result<Self> {
        Self::new(region, error_rate, seed, DEFAULT_PAGE_SIZE)
    }

    /// Reject values that would produce a garbage page.
    pub fn validate(&self) -> Result<()> {
        if !self.error_rate.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "error_rate must be a finite number, got {}",
                self.error_rate
            )));
        }
        if self.error_rate < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "error_rate must be >= 0, got {}",
                self.error_rate
            )));
        }
        if self.error_rate > MAX_ERROR_RATE {
            return Err(Error::InvalidParameter(format!(
                "error_rate must be <= {MAX_ERROR_RATE}, got {}",
                self.error_rate
            )));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidParameter(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inclusive range of page indexes for bulk export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRange")]
pub struct PageRange {
    from: u32,
    to: u32,
}

#[derive(Deserialize)]
struct RawPageRange {
    from: u32,
    to: u32,
}

impl TryFrom<RawPageRange> for PageRange {
    type Error = Error;

    fn try_from(raw: RawPageRange) -> Result<Self> {
        Self::new(raw.from, raw.to)
    }
}

impl PageRange {
    pub fn new(from: u32, to: u32) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidParameter(format!(
                "from_page ({from}) must not exceed to_page ({to})"
            )));
        }
        Ok(Self { from, to })
    }

    pub fn single(page: u32) -> Self {
        Self {
            from: page,
            to: page,
        }
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    pub fn page_count(&self) -> u64 {
        u64::from(self.to - self.from) + 1
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.from..=self.to
    }
}
