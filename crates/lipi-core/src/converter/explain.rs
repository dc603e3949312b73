use serde::Serialize;
use tracing::debug_span;

use super::compose::{compose_with, ComposeRule};
use super::Transliterator;

/// Diagnostic breakdown of a single word conversion.
#[derive(Debug, Clone, Serialize)]
pub struct WordExplanation {
    pub input: String,
    /// The word after trimming and case folding.
    pub normalized: String,
    /// True if the whole-word exception table produced the output.
    pub exception: bool,
    /// Composition steps; empty when an exception matched.
    pub steps: Vec<ComposeStep>,
    pub output: String,
}

/// One unit consumed by the composition algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeStep {
    /// Char offsets into the normalized word.
    pub start: usize,
    pub end: usize,
    pub input: String,
    pub output: String,
    pub rule: ComposeRule,
}

impl Transliterator<'_> {
    /// Convert a word and record how each part of it was resolved.
    ///
    /// `output` always equals `convert_word(word)`.
    pub fn explain_word(&self, word: &str) -> WordExplanation {
        let _span = debug_span!("explain_word", len = word.len()).entered();
        if word.trim().is_empty() {
            return WordExplanation {
                input: word.to_string(),
                normalized: word.to_string(),
                exception: false,
                steps: Vec::new(),
                output: word.to_string(),
            };
        }

        let normalized = self.normalize(word).into_owned();
        if let Some(mapped) = self.exception(&normalized) {
            return WordExplanation {
                input: word.to_string(),
                normalized,
                exception: true,
                steps: Vec::new(),
                output: mapped.to_string(),
            };
        }

        let chars: Vec<char> = normalized.chars().collect();
        let mut steps = Vec::new();
        let mut output = String::new();
        compose_with(self.tables, &normalized, |start, end, glyphs, rule| {
            output.push_str(glyphs);
            steps.push(ComposeStep {
                start,
                end,
                input: chars[start..end].iter().collect(),
                output: glyphs.to_string(),
                rule,
            });
        });

        WordExplanation {
            input: word.to_string(),
            normalized,
            exception: false,
            steps,
            output,
        }
    }
}
