use serde::{Deserialize, Serialize};

/// Conversion flags owned by a [`Transliterator`](crate::converter::Transliterator).
///
/// Each flag is consulted at exactly one decision point:
/// - `trigger_on_space`: whether the insertion trigger converts the word
///   before the cursor.
/// - `case_sensitive`: whether words are lowercased before lookup.
/// - `preserve_punctuation`: whether punctuation passes through untouched
///   or is mapped to its Devanagari form (e.g. `.` → `।`).
/// - `enable_exceptions`: whether the whole-word exception table is
///   consulted before composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    pub trigger_on_space: bool,
    pub case_sensitive: bool,
    pub preserve_punctuation: bool,
    pub enable_exceptions: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            trigger_on_space: true,
            case_sensitive: false,
            preserve_punctuation: true,
            enable_exceptions: true,
        }
    }
}

impl ConvertOptions {
    /// Apply every field set in `patch`, leaving the others untouched.
    pub fn merge(&mut self, patch: &OptionsPatch) {
        if let Some(v) = patch.trigger_on_space {
            self.trigger_on_space = v;
        }
        if let Some(v) = patch.case_sensitive {
            self.case_sensitive = v;
        }
        if let Some(v) = patch.preserve_punctuation {
            self.preserve_punctuation = v;
        }
        if let Some(v) = patch.enable_exceptions {
            self.enable_exceptions = v;
        }
    }

    pub fn merged(mut self, patch: &OptionsPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// A partial set of option changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsPatch {
    pub trigger_on_space: Option<bool>,
    pub case_sensitive: Option<bool>,
    pub preserve_punctuation: Option<bool>,
    pub enable_exceptions: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ConvertOptions::default();
        assert!(o.trigger_on_space);
        assert!(!o.case_sensitive);
        assert!(o.preserve_punctuation);
        assert!(o.enable_exceptions);
    }

    #[test]
    fn merge_only_touches_set_fields() {
        let patch = OptionsPatch {
            case_sensitive: Some(true),
            enable_exceptions: Some(false),
            ..Default::default()
        };
        let o = ConvertOptions::default().merged(&patch);
        assert!(o.trigger_on_space);
        assert!(o.case_sensitive);
        assert!(o.preserve_punctuation);
        assert!(!o.enable_exceptions);
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = OptionsPatch::default();
        let o = ConvertOptions {
            trigger_on_space: false,
            ..Default::default()
        };
        assert_eq!(o.merged(&patch), o);
    }
}
