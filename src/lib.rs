//! Romanized Nepali to Devanagari conversion for editors and tools.
//!
//! Re-exports the `lipi-core` API and adds optional trace output (enable the
//! `trace` feature and call [`init_tracing`]).

mod trace_init;

pub use lipi_core::{converter, options, settings, symbols, unicode};
pub use lipi_core::{ConvertOptions, OptionsPatch, SymbolTables, Transliterator, TriggerResult};

pub use trace_init::init_tracing;

/// Convert free text with the default tables and options.
pub fn convert_text(text: &str) -> String {
    Transliterator::default().convert_text(text)
}

/// Convert one word with the default tables and options.
pub fn convert_word(word: &str) -> String {
    Transliterator::default().convert_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_converts() {
        assert_eq!(convert_word("mero"), "मेरो");
        assert_eq!(convert_text("mero ghar."), "मेरो घर.");
    }

    #[test]
    fn init_tracing_is_idempotent() {
        let dir = std::env::temp_dir();
        init_tracing(&dir);
        init_tracing(&dir);
    }
}
