//! Romanized-to-Devanagari conversion.
//!
//! Words are matched against the whole-word exception table, otherwise run
//! through a longest-match composition over the symbol tables that decides
//! between inherent vowel, vowel sign, and half form for every consonant.
//! Free text is split into tokens first so that spacing, digits and
//! punctuation survive unchanged.

mod compose;
pub mod explain;
mod tokenize;
mod trigger;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use tracing::{debug, debug_span};

use crate::options::{ConvertOptions, OptionsPatch};
use crate::settings::settings;
use crate::symbols::SymbolTables;

pub use compose::ComposeRule;
pub use explain::{ComposeStep, WordExplanation};
pub use tokenize::{tokenize, Token, Tokens};
pub use trigger::TriggerResult;

/// Converts Romanized Nepali to Devanagari.
///
/// Holds only a reference to the (immutable) symbol tables and a set of
/// option flags; every conversion is a pure function of its input and the
/// current options. Changing options needs `&mut self`; share one instance
/// per editing session rather than across threads.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    tables: &'t SymbolTables,
    options: ConvertOptions,
}

impl Default for Transliterator<'static> {
    /// Global tables with the options from [`settings()`].
    fn default() -> Self {
        Self::new(settings().conversion)
    }
}

impl Transliterator<'static> {
    /// Converter over the embedded default tables.
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_tables(SymbolTables::global(), options)
    }
}

impl<'t> Transliterator<'t> {
    pub fn with_tables(tables: &'t SymbolTables, options: ConvertOptions) -> Self {
        Self { tables, options }
    }

    pub fn tables(&self) -> &'t SymbolTables {
        self.tables
    }

    /// Snapshot of the current options.
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: ConvertOptions) {
        self.options = options;
    }

    /// Merge a partial set of option changes into the current options.
    pub fn update_options(&mut self, patch: &OptionsPatch) {
        self.options.merge(patch);
    }

    /// Convert a single word.
    ///
    /// The word is trimmed and, unless case-sensitive matching is on,
    /// lowercased. Empty or whitespace-only input is returned unchanged.
    pub fn convert_word(&self, word: &str) -> String {
        if word.trim().is_empty() {
            return word.to_string();
        }
        let normalized = self.normalize(word);
        if let Some(mapped) = self.exception(&normalized) {
            debug!(word = %normalized, "whole-word exception");
            return mapped.to_string();
        }
        compose::compose(self.tables, &normalized)
    }

    /// Convert free text, keeping every non-word character in place.
    pub fn convert_text(&self, text: &str) -> String {
        let _span = debug_span!("convert_text", len = text.len()).entered();
        let mut out = String::with_capacity(text.len() * 3);
        let mut words = 0usize;
        for token in tokenize(text) {
            match token {
                Token::Word(word) => {
                    words += 1;
                    out.push_str(&self.convert_word(word));
                }
                Token::Punctuation(c) if !self.options.preserve_punctuation => {
                    match self.tables.punctuation_for(c) {
                        Some(mapped) => out.push_str(mapped),
                        None => out.push(c),
                    }
                }
                other => other.push_to(&mut out),
            }
        }
        debug!(words);
        out
    }

    fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        let trimmed = word.trim();
        if self.options.case_sensitive {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(trimmed.to_lowercase())
        }
    }

    fn exception(&self, normalized: &str) -> Option<&'t str> {
        if !self.options.enable_exceptions {
            return None;
        }
        self.tables.exception(normalized)
    }
}
