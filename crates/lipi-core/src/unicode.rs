//! Character classification for Romanized input.

/// Punctuation characters emitted as single-character tokens by the text
/// splitter.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '-', '/', '|',
];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Characters that make up a word for the insertion trigger: ASCII letters,
/// digits and underscore. Already-converted Devanagari is never picked up
/// again.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_punctuation('.'));
        assert!(is_punctuation('|'));
        assert!(!is_punctuation(' '));
        assert!(!is_punctuation('@'));
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('क'));
    }
}
