use crate::unicode::is_punctuation;

/// One piece of free text, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of alphabetic characters.
    Word(&'a str),
    /// Single character from the fixed punctuation set.
    Punctuation(char),
    /// Single whitespace character.
    Space(char),
    /// Any other single character (digits, symbols, marks).
    Other(char),
}

impl Token<'_> {
    /// Append the token's source text unchanged.
    pub fn push_to(&self, out: &mut String) {
        match *self {
            Token::Word(w) => out.push_str(w),
            Token::Punctuation(c) | Token::Space(c) | Token::Other(c) => out.push(c),
        }
    }
}

/// Split text into word, punctuation, space and other tokens. Concatenating
/// the tokens reproduces `text` exactly.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let first = self.rest.chars().next()?;
        if first.is_alphabetic() {
            let end = self
                .rest
                .char_indices()
                .find(|&(_, c)| !c.is_alphabetic())
                .map_or(self.rest.len(), |(i, _)| i);
            let (word, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(Token::Word(word));
        }

        self.rest = &self.rest[first.len_utf8()..];
        Some(if is_punctuation(first) {
            Token::Punctuation(first)
        } else if first.is_whitespace() {
            Token::Space(first)
        } else {
            Token::Other(first)
        })
    }
}
