use serde::Serialize;

use crate::symbols::SymbolTables;

/// The rule that produced one composition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeRule {
    /// Cluster whose output already ends in a vowel sign (e.g. `shri` → श्री).
    Cluster,
    /// Standalone vowel glyph.
    Vowel,
    /// Consonant (or cluster) followed by a vowel sign.
    VowelSign,
    /// Consonant followed by the inherent-vowel key, which adds nothing.
    Inherent,
    /// Consonant before another consonant: halant appended.
    HalfForm,
    /// Consonant at the end of the word or before an unmapped character.
    Bare,
    /// Character outside the tables, copied unchanged.
    PassThrough,
}

/// Longest-match unit at a position.
#[derive(Debug, Clone, Copy)]
enum Unit<'t> {
    Cluster(&'t str),
    Consonant(&'t str),
    Vowel(&'t str),
}

/// Compose one normalized word into Devanagari.
pub(crate) fn compose(tables: &SymbolTables, word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 3);
    compose_with(tables, word, |_, _, glyphs, _| out.push_str(glyphs));
    out
}

/// Run the composition algorithm, reporting each step as
/// `(start, end, output, rule)` with char offsets into `word`.
///
/// Every input char ends up in exactly one step, in order.
pub(crate) fn compose_with<F>(tables: &SymbolTables, word: &str, mut emit: F)
where
    F: FnMut(usize, usize, &str, ComposeRule),
{
    let chars: Vec<char> = word.chars().collect();
    let mut key = String::with_capacity(4 * tables.max_unit_len());
    let mut scratch = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let Some((len, unit)) = longest_unit(tables, &chars, pos, &mut key) else {
            scratch.clear();
            scratch.push(chars[pos]);
            emit(pos, pos + 1, &scratch, ComposeRule::PassThrough);
            pos += 1;
            continue;
        };
        let next = pos + len;

        pos = match unit {
            Unit::Vowel(glyph) => {
                emit(pos, next, glyph, ComposeRule::Vowel);
                next
            }
            Unit::Cluster(glyphs) if ends_with_sign(tables, glyphs) => {
                emit(pos, next, glyphs, ComposeRule::Cluster);
                next
            }
            Unit::Cluster(base) | Unit::Consonant(base) => {
                let (end, rule) = resolve_consonant(tables, &chars, next, &mut key);
                scratch.clear();
                scratch.push_str(base);
                match rule {
                    ConsonantForm::WithSign(sign) => scratch.push_str(sign),
                    ConsonantForm::Half => scratch.push(tables.halant()),
                    ConsonantForm::Inherent | ConsonantForm::Bare => {}
                }
                emit(pos, end, &scratch, rule.into());
                end
            }
        };
    }
}

#[derive(Debug, Clone, Copy)]
enum ConsonantForm<'t> {
    WithSign(&'t str),
    Inherent,
    Half,
    Bare,
}

impl From<ConsonantForm<'_>> for ComposeRule {
    fn from(form: ConsonantForm<'_>) -> Self {
        match form {
            ConsonantForm::WithSign(_) => ComposeRule::VowelSign,
            ConsonantForm::Inherent => ComposeRule::Inherent,
            ConsonantForm::Half => ComposeRule::HalfForm,
            ConsonantForm::Bare => ComposeRule::Bare,
        }
    }
}

/// Decide how a consonant whose key ends at `next` is rendered, and where
/// the step ends.
///
/// Order: vowel sign, inherent vowel, half form before a consonant-like
/// unit, bare consonant. A consonant pair with no cluster entry therefore
/// always becomes half + (whatever the second consonant resolves to).
fn resolve_consonant<'t>(
    tables: &'t SymbolTables,
    chars: &[char],
    next: usize,
    key: &mut String,
) -> (usize, ConsonantForm<'t>) {
    if let Some((len, sign)) = vowel_sign_at(tables, chars, next, key) {
        return (next + len, ConsonantForm::WithSign(sign));
    }
    if chars.get(next) == Some(&tables.inherent()) {
        return (next + 1, ConsonantForm::Inherent);
    }
    match longest_unit(tables, chars, next, key) {
        Some((_, Unit::Consonant(_) | Unit::Cluster(_))) => (next, ConsonantForm::Half),
        _ => (next, ConsonantForm::Bare),
    }
}

/// Longest vowel/consonant/cluster key starting at `pos`. At equal length
/// clusters win over consonants, consonants over vowels.
fn longest_unit<'t>(
    tables: &'t SymbolTables,
    chars: &[char],
    pos: usize,
    key: &mut String,
) -> Option<(usize, Unit<'t>)> {
    let remaining = chars.len().saturating_sub(pos);
    for len in (1..=tables.max_unit_len().min(remaining)).rev() {
        fill_key(key, &chars[pos..pos + len]);
        if let Some(glyphs) = tables.cluster(key) {
            return Some((len, Unit::Cluster(glyphs)));
        }
        if let Some(glyph) = tables.consonant(key) {
            return Some((len, Unit::Consonant(glyph)));
        }
        if let Some(glyph) = tables.vowel(key) {
            return Some((len, Unit::Vowel(glyph)));
        }
    }
    None
}

/// Longest vowel-sign key starting at `pos`.
fn vowel_sign_at<'t>(
    tables: &'t SymbolTables,
    chars: &[char],
    pos: usize,
    key: &mut String,
) -> Option<(usize, &'t str)> {
    let remaining = chars.len().saturating_sub(pos);
    for len in (1..=tables.max_sign_len().min(remaining)).rev() {
        fill_key(key, &chars[pos..pos + len]);
        if let Some(sign) = tables.vowel_sign(key) {
            return Some((len, sign));
        }
    }
    None
}

fn fill_key(key: &mut String, chars: &[char]) {
    key.clear();
    key.extend(chars);
}

fn ends_with_sign(tables: &SymbolTables, glyphs: &str) -> bool {
    glyphs.chars().last().is_some_and(|c| tables.is_sign_glyph(c))
}
