use std::collections::BTreeMap;

use serde::Deserialize;

/// Longest key accepted in the composition tables (exceptions are unbounded).
pub const MAX_KEY_LEN: usize = 4;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SymbolConfig {
    pub halant: String,
    pub inherent: String,
    pub vowels: BTreeMap<String, String>,
    pub consonants: BTreeMap<String, String>,
    pub vowel_signs: BTreeMap<String, String>,
    #[serde(default)]
    pub clusters: BTreeMap<String, String>,
    #[serde(default)]
    pub exceptions: BTreeMap<String, String>,
    #[serde(default)]
    pub punctuation: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SymbolTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid key in [{table}]: {key:?}")]
    InvalidKey { table: &'static str, key: String },
    #[error("key in [{table}] exceeds the maximum key length: {key}")]
    KeyTooLong { table: &'static str, key: String },
    #[error("empty value in [{table}] for key: {key}")]
    EmptyValue { table: &'static str, key: String },
    #[error("exception key must be lowercase and trimmed: {0:?}")]
    UnnormalizedException(String),
    #[error("key {key:?} maps to {first:?} in [{first_table}] but {second:?} in [{second_table}]")]
    Conflict {
        key: String,
        first_table: &'static str,
        first: String,
        second_table: &'static str,
        second: String,
    },
    #[error("halant must be a single character, got {0:?}")]
    InvalidHalant(String),
    #[error("inherent vowel key must be a single ASCII letter, got {0:?}")]
    InvalidInherent(String),
}

/// Parse and validate symbol-table TOML.
pub(crate) fn parse_symbol_toml(toml_str: &str) -> Result<SymbolConfig, SymbolTableError> {
    let config: SymbolConfig =
        toml::from_str(toml_str).map_err(|e| SymbolTableError::Parse(e.to_string()))?;

    if config.halant.chars().count() != 1 {
        return Err(SymbolTableError::InvalidHalant(config.halant.clone()));
    }
    let mut inherent = config.inherent.chars();
    match (inherent.next(), inherent.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {}
        _ => return Err(SymbolTableError::InvalidInherent(config.inherent.clone())),
    }

    let composable = [
        ("vowels", &config.vowels),
        ("consonants", &config.consonants),
        ("vowel_signs", &config.vowel_signs),
        ("clusters", &config.clusters),
    ];
    for (name, table) in composable {
        if table.is_empty() && name != "clusters" {
            return Err(SymbolTableError::Empty(name));
        }
        for (key, value) in table {
            validate_entry(name, key, value)?;
            if key.chars().count() > MAX_KEY_LEN {
                return Err(SymbolTableError::KeyTooLong {
                    table: name,
                    key: key.clone(),
                });
            }
        }
    }

    for (key, value) in &config.exceptions {
        validate_entry("exceptions", key, value)?;
        if key.to_lowercase() != *key {
            return Err(SymbolTableError::UnnormalizedException(key.clone()));
        }
    }

    for (key, value) in &config.punctuation {
        let mut chars = key.chars();
        let single_punct = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_ascii_punctuation()
        );
        if !single_punct {
            return Err(SymbolTableError::InvalidKey {
                table: "punctuation",
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(SymbolTableError::EmptyValue {
                table: "punctuation",
                key: key.clone(),
            });
        }
    }

    // Vowel signs share keys with vowels by construction, so only the
    // standalone unit tables are checked against each other.
    check_disjoint(("clusters", &config.clusters), ("consonants", &config.consonants))?;
    check_disjoint(("clusters", &config.clusters), ("vowels", &config.vowels))?;
    check_disjoint(("consonants", &config.consonants), ("vowels", &config.vowels))?;

    Ok(config)
}

fn validate_entry(table: &'static str, key: &str, value: &str) -> Result<(), SymbolTableError> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SymbolTableError::InvalidKey {
            table,
            key: key.to_string(),
        });
    }
    if value.is_empty() {
        return Err(SymbolTableError::EmptyValue {
            table,
            key: key.to_string(),
        });
    }
    Ok(())
}

fn check_disjoint(
    (first_table, first): (&'static str, &BTreeMap<String, String>),
    (second_table, second): (&'static str, &BTreeMap<String, String>),
) -> Result<(), SymbolTableError> {
    for (key, a) in first {
        if let Some(b) = second.get(key) {
            if a != b {
                return Err(SymbolTableError::Conflict {
                    key: key.clone(),
                    first_table,
                    first: a.clone(),
                    second_table,
                    second: b.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
halant = "्"
inherent = "a"

[vowels]
a = "अ"

[consonants]
k = "क"

[vowel_signs]
i = "ि"
"#;

    #[test]
    fn parse_minimal_toml() {
        let config = parse_symbol_toml(MINIMAL).unwrap();
        assert_eq!(config.vowels["a"], "अ");
        assert_eq!(config.consonants["k"], "क");
        assert!(config.clusters.is_empty());
        assert!(config.exceptions.is_empty());
    }

    #[test]
    fn parse_default_toml() {
        let config = parse_symbol_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(config.consonants.len() >= 33, "got {}", config.consonants.len());
        assert!(config.exceptions.contains_key("ram"));
    }

    #[test]
    fn error_empty_vowels() {
        let toml = MINIMAL.replace("a = \"अ\"\n", "");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::Empty("vowels")));
    }

    #[test]
    fn error_non_letter_key() {
        let toml = format!("{MINIMAL}\n[clusters]\n\"k1\" = \"क\"\n");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::InvalidKey { table: "clusters", .. }));
    }

    #[test]
    fn error_key_too_long() {
        let toml = format!("{MINIMAL}\n[clusters]\nkshya = \"क्ष्य\"\n");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::KeyTooLong { .. }));
    }

    #[test]
    fn error_empty_value() {
        let toml = MINIMAL.replace("k = \"क\"", "k = \"\"");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::EmptyValue { table: "consonants", .. }));
    }

    #[test]
    fn error_uppercase_exception() {
        let toml = format!("{MINIMAL}\n[exceptions]\nRam = \"राम\"\n");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::UnnormalizedException(_)));
    }

    #[test]
    fn error_conflicting_unit() {
        let toml = format!("{MINIMAL}\n[clusters]\nk = \"क्ष\"\n");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("\"k\""));
        assert!(matches!(err, SymbolTableError::Conflict { .. }));
    }

    #[test]
    fn same_key_same_value_is_not_a_conflict() {
        let toml = format!("{MINIMAL}\n[clusters]\nk = \"क\"\n");
        assert!(parse_symbol_toml(&toml).is_ok());
    }

    #[test]
    fn error_bad_halant() {
        let toml = MINIMAL.replace("halant = \"्\"", "halant = \"\"");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::InvalidHalant(_)));
    }

    #[test]
    fn error_bad_punctuation_key() {
        let toml = format!("{MINIMAL}\n[punctuation]\n\"..\" = \"।\"\n");
        let err = parse_symbol_toml(&toml).unwrap_err();
        assert!(matches!(err, SymbolTableError::InvalidKey { table: "punctuation", .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_symbol_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SymbolTableError::Parse(_)));
    }
}
