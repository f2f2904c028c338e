//! Core contracts for fakeusers.
//!
//! This crate defines the record shape, the static region profile table and
//! the validated generation parameters shared by the generator and the CLI.

pub mod error;
pub mod record;
pub mod region;
pub mod validation;

pub use error::{Error, Result};
pub use record::{CSV_HEADER, Record, RecordField};
pub use region::{DIGITS, Region, RegionProfile};
pub use validation::{GenerationParams, MAX_ERROR_RATE, PageRange};

/// Number of records per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
