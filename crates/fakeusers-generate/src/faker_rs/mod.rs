//! Seeded realistic-text source used by the record synthesizer.

pub mod adapter;
pub mod locales;

pub use adapter::{SeededFaker, TextSource};
pub use locales::LocaleKey;
