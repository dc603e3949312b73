//! Romanized Nepali to Devanagari transliteration.
//!
//! - [`symbols`]: immutable vowel, consonant, vowel-sign, cluster and
//!   exception tables
//! - [`converter`]: word and text conversion plus the convert-as-you-type
//!   trigger
//! - [`settings`]: TOML-backed conversion options

pub mod converter;
pub mod options;
pub mod settings;
pub mod symbols;
pub mod unicode;

pub use converter::{Transliterator, TriggerResult};
pub use options::{ConvertOptions, OptionsPatch};
pub use symbols::SymbolTables;
