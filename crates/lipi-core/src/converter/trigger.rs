use tracing::debug;

use crate::unicode::is_word_char;

use super::Transliterator;

/// Text and cursor after a convert-as-you-type trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerResult {
    pub text: String,
    /// Cursor position in chars.
    pub cursor: usize,
}

impl Transliterator<'_> {
    /// Handle a space typed at `cursor` (a char offset) in `text`.
    ///
    /// With `trigger_on_space` off, the text is returned as-is and the
    /// cursor advances by one; inserting the space is left to the caller.
    /// Otherwise the run of word characters ending at the cursor is
    /// converted and a single space inserted after it. A cursor past the
    /// end of the text is clamped to the end.
    pub fn handle_insertion_trigger(&self, text: &str, cursor: usize) -> TriggerResult {
        let chars: Vec<char> = text.chars().collect();
        let cursor = cursor.min(chars.len());

        if !self.options.trigger_on_space {
            return TriggerResult {
                text: text.to_string(),
                cursor: cursor + 1,
            };
        }

        let start = chars[..cursor]
            .iter()
            .rposition(|&c| !is_word_char(c))
            .map_or(0, |i| i + 1);

        let before: String = chars[..start].iter().collect();
        let after: String = chars[cursor..].iter().collect();
        let converted = if start < cursor {
            let run: String = chars[start..cursor].iter().collect();
            let converted = self.convert_word(&run);
            debug!(run = %run, converted = %converted, "trigger converted word");
            converted
        } else {
            String::new()
        };

        let new_cursor = start + converted.chars().count() + 1;
        let mut out = String::with_capacity(text.len() + converted.len() + 1);
        out.push_str(&before);
        out.push_str(&converted);
        out.push(' ');
        out.push_str(&after);

        TriggerResult {
            text: out,
            cursor: new_cursor,
        }
    }
}
