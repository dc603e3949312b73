//! Romanized-to-Devanagari symbol tables.
//!
//! The tables are embedded as TOML, parsed once on first use and never
//! mutated afterwards, so a single `&'static SymbolTables` is shared by every
//! converter in the process.

mod config;
mod table;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

pub use config::{SymbolTableError, MAX_KEY_LEN};

use config::parse_symbol_toml;
use table::DEFAULT_TOML;

/// Immutable lookup tables consumed by the composition algorithm.
#[derive(Debug)]
pub struct SymbolTables {
    vowels: BTreeMap<String, String>,
    consonants: BTreeMap<String, String>,
    half_consonants: BTreeMap<String, String>,
    vowel_signs: BTreeMap<String, String>,
    clusters: BTreeMap<String, String>,
    exceptions: BTreeMap<String, String>,
    punctuation: BTreeMap<char, String>,
    halant: char,
    inherent: char,
    /// Every char that appears in a vowel-sign value.
    sign_glyphs: BTreeSet<char>,
    max_unit_len: usize,
    max_sign_len: usize,
}

impl SymbolTables {
    /// Get or initialize the process-wide tables built from the embedded TOML.
    pub fn global() -> &'static SymbolTables {
        static INSTANCE: OnceLock<SymbolTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            SymbolTables::from_toml(DEFAULT_TOML).expect("embedded symbol TOML must be valid")
        })
    }

    /// Returns the embedded default table TOML.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Build a table set from TOML text, validating every invariant.
    pub fn from_toml(toml_str: &str) -> Result<Self, SymbolTableError> {
        let config = parse_symbol_toml(toml_str)?;

        // Validation guarantees both are exactly one char.
        let halant = config.halant.chars().next().unwrap_or('\u{094D}');
        let inherent = config.inherent.chars().next().unwrap_or('a');

        let half_consonants = config
            .consonants
            .iter()
            .map(|(key, base)| (key.clone(), format!("{base}{halant}")))
            .collect();
        let sign_glyphs = config
            .vowel_signs
            .values()
            .flat_map(|sign| sign.chars())
            .collect();
        let punctuation = config
            .punctuation
            .into_iter()
            .filter_map(|(key, value)| key.chars().next().map(|c| (c, value)))
            .collect();

        let max_unit_len = config
            .vowels
            .keys()
            .chain(config.consonants.keys())
            .chain(config.clusters.keys())
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(1);
        let max_sign_len = config
            .vowel_signs
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(1);

        Ok(SymbolTables {
            vowels: config.vowels,
            consonants: config.consonants,
            half_consonants,
            vowel_signs: config.vowel_signs,
            clusters: config.clusters,
            exceptions: config.exceptions,
            punctuation,
            halant,
            inherent,
            sign_glyphs,
            max_unit_len,
            max_sign_len,
        })
    }

    pub fn vowels(&self) -> &BTreeMap<String, String> {
        &self.vowels
    }

    pub fn consonants(&self) -> &BTreeMap<String, String> {
        &self.consonants
    }

    /// Base consonants with the halant appended.
    pub fn half_consonants(&self) -> &BTreeMap<String, String> {
        &self.half_consonants
    }

    pub fn vowel_signs(&self) -> &BTreeMap<String, String> {
        &self.vowel_signs
    }

    pub fn clusters(&self) -> &BTreeMap<String, String> {
        &self.clusters
    }

    pub fn exceptions(&self) -> &BTreeMap<String, String> {
        &self.exceptions
    }

    pub fn punctuation(&self) -> &BTreeMap<char, String> {
        &self.punctuation
    }

    /// The vowel-suppression mark (्).
    pub fn halant(&self) -> char {
        self.halant
    }

    /// Key that keeps a consonant's inherent vowel without adding a sign.
    pub fn inherent(&self) -> char {
        self.inherent
    }

    pub fn vowel(&self, key: &str) -> Option<&str> {
        self.vowels.get(key).map(String::as_str)
    }

    pub fn consonant(&self, key: &str) -> Option<&str> {
        self.consonants.get(key).map(String::as_str)
    }

    pub fn half_consonant(&self, key: &str) -> Option<&str> {
        self.half_consonants.get(key).map(String::as_str)
    }

    pub fn vowel_sign(&self, key: &str) -> Option<&str> {
        self.vowel_signs.get(key).map(String::as_str)
    }

    pub fn cluster(&self, key: &str) -> Option<&str> {
        self.clusters.get(key).map(String::as_str)
    }

    pub fn exception(&self, word: &str) -> Option<&str> {
        self.exceptions.get(word).map(String::as_str)
    }

    pub fn punctuation_for(&self, c: char) -> Option<&str> {
        self.punctuation.get(&c).map(String::as_str)
    }

    /// True if `c` is part of some vowel sign (e.g. ा, ी, ृ).
    pub fn is_sign_glyph(&self, c: char) -> bool {
        self.sign_glyphs.contains(&c)
    }

    /// Longest vowel, consonant or cluster key, in chars.
    pub fn max_unit_len(&self) -> usize {
        self.max_unit_len
    }

    /// Longest vowel-sign key, in chars.
    pub fn max_sign_len(&self) -> usize {
        self.max_sign_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_exact() {
        let t = SymbolTables::global();
        assert_eq!(t.vowel("a"), Some("अ"));
        assert_eq!(t.vowel("aa"), Some("आ"));
        assert_eq!(t.vowel("au"), Some("औ"));
    }

    #[test]
    fn test_consonant_exact() {
        let t = SymbolTables::global();
        assert_eq!(t.consonant("k"), Some("क"));
        assert_eq!(t.consonant("chh"), Some("छ"));
        assert_eq!(t.consonant("Th"), Some("ठ"));
        assert_eq!(t.consonant("th"), Some("थ"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let t = SymbolTables::global();
        assert_eq!(t.consonant("xyz"), None);
        assert_eq!(t.vowel("k"), None);
        assert_eq!(t.cluster(""), None);
    }

    #[test]
    fn test_half_consonants_derived() {
        let t = SymbolTables::global();
        assert_eq!(t.half_consonants().len(), t.consonants().len());
        assert_eq!(t.half_consonant("k"), Some("क्"));
        assert_eq!(t.half_consonant("sh"), Some("श्"));
        for (key, half) in t.half_consonants() {
            let base = t.consonant(key).unwrap();
            assert_eq!(*half, format!("{base}{}", t.halant()));
        }
    }

    #[test]
    fn test_halant_and_inherent() {
        let t = SymbolTables::global();
        assert_eq!(t.halant(), '\u{094D}');
        assert_eq!(t.inherent(), 'a');
        assert_eq!(t.vowel_sign("a"), None);
    }

    #[test]
    fn test_sign_glyphs() {
        let t = SymbolTables::global();
        assert!(t.is_sign_glyph('ा'));
        assert!(t.is_sign_glyph('ृ'));
        assert!(!t.is_sign_glyph('क'));
        assert!(!t.is_sign_glyph(t.halant()));
    }

    #[test]
    fn test_key_lengths() {
        let t = SymbolTables::global();
        assert_eq!(t.max_unit_len(), 4);
        assert_eq!(t.max_sign_len(), 2);
        assert!(t.max_unit_len() <= MAX_KEY_LEN);
    }

    #[test]
    fn test_clusters() {
        let t = SymbolTables::global();
        assert_eq!(t.cluster("ksh"), Some("क्ष"));
        assert_eq!(t.cluster("shri"), Some("श्री"));
        assert_eq!(t.consonant("ksh"), None);
    }

    #[test]
    fn test_exceptions_are_normalized() {
        let t = SymbolTables::global();
        assert!(!t.exceptions().is_empty());
        for key in t.exceptions().keys() {
            assert_eq!(key, &key.trim().to_lowercase());
        }
        assert_eq!(t.exception("ram"), Some("राम"));
    }

    #[test]
    fn test_unit_tables_do_not_conflict() {
        let t = SymbolTables::global();
        for (key, value) in t.clusters() {
            if let Some(other) = t.consonant(key).or(t.vowel(key)) {
                assert_eq!(other, value, "conflict for {key}");
            }
        }
        for (key, value) in t.consonants() {
            if let Some(other) = t.vowel(key) {
                assert_eq!(other, value, "conflict for {key}");
            }
        }
    }

    #[test]
    fn test_punctuation() {
        let t = SymbolTables::global();
        assert_eq!(t.punctuation_for('.'), Some("।"));
        assert_eq!(t.punctuation_for(','), None);
    }

    #[test]
    fn test_default_toml_roundtrip() {
        let t = SymbolTables::from_toml(SymbolTables::default_toml()).unwrap();
        assert_eq!(t.vowels().len(), SymbolTables::global().vowels().len());
    }
}
