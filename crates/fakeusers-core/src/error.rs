use thiserror::Error;

/// Core error type shared across fakeusers crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The region tag does not name one of the supported profiles.
    #[error("unsupported region: {0}")]
    UnsupportedRegion(String),
    /// A generation parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// An address template could not be parsed.
    #[error("invalid address template: {0}")]
    InvalidTemplate(String),
}

/// Convenience alias for results returned by fakeusers crates.
pub type Result<T> = std::result::Result<T, Error>;
