//! Global settings loaded from TOML.
//!
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//! - `load_settings(path)` reads a user file for per-run overrides
//!
//! Every key in `[conversion]` is optional; missing keys keep the
//! [`ConvertOptions`] defaults.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::{ConvertOptions, OptionsPatch};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub conversion: ConvertOptions,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    conversion: OptionsPatch,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    Ok(Settings {
        conversion: ConvertOptions::default().merged(&raw.conversion),
    })
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_settings_toml(&content)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.conversion, ConvertOptions::default());
    }

    #[test]
    fn global_settings_match_defaults() {
        assert_eq!(settings().conversion, ConvertOptions::default());
        assert!(std::ptr::eq(settings(), settings()));
    }

    #[test]
    fn partial_section_patches_defaults() {
        let toml = r#"
[conversion]
case_sensitive = true
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.conversion.case_sensitive);
        assert!(s.conversion.trigger_on_space);
        assert!(s.conversion.enable_exceptions);
    }

    #[test]
    fn empty_document_is_defaults() {
        let s = parse_settings_toml("").unwrap();
        assert_eq!(s.conversion, ConvertOptions::default());
    }

    #[test]
    fn error_unknown_key() {
        let toml = r#"
[conversion]
convert_digits = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().contains("convert_digits"));
    }

    #[test]
    fn error_wrong_type() {
        let toml = r#"
[conversion]
trigger_on_space = "yes"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[conversion]\npreserve_punctuation = false").unwrap();
        let s = load_settings(file.path()).unwrap();
        assert!(!s.conversion.preserve_punctuation);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
