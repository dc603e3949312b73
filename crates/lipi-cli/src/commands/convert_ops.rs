use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;

use lipi_engine::settings::{load_settings, settings, SettingsError};
use lipi_engine::{ConvertOptions, OptionsPatch, Transliterator};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One converted line for `--json` output.
#[derive(Debug, Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    output: String,
}

/// Options from `config` (or the global settings) with `patch` applied.
pub fn resolve_options(
    config: Option<&str>,
    patch: &OptionsPatch,
) -> Result<ConvertOptions, CliError> {
    let base = match config {
        Some(path) => load_settings(Path::new(path))?.conversion,
        None => settings().conversion,
    };
    Ok(base.merged(patch))
}

/// Convert each line from `reader`, writing one result per line.
pub fn convert_lines<R: BufRead, W: Write>(
    t: &Transliterator<'_>,
    reader: R,
    out: &mut W,
    json: bool,
) -> Result<usize, CliError> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        write_converted(t, &line, out, json)?;
        count += 1;
    }
    Ok(count)
}

/// Convert each argument as free text.
pub fn convert_args<W: Write>(
    t: &Transliterator<'_>,
    inputs: &[String],
    out: &mut W,
    json: bool,
) -> Result<(), CliError> {
    for input in inputs {
        write_converted(t, input, out, json)?;
    }
    Ok(())
}

fn write_converted<W: Write>(
    t: &Transliterator<'_>,
    input: &str,
    out: &mut W,
    json: bool,
) -> Result<(), CliError> {
    let output = t.convert_text(input);
    if json {
        serde_json::to_writer(&mut *out, &ConvertRecord { input, output })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{output}")?;
    }
    Ok(())
}

/// Print the composition steps for a word.
pub fn explain_word<W: Write>(
    t: &Transliterator<'_>,
    word: &str,
    out: &mut W,
    json: bool,
) -> Result<(), CliError> {
    let e = t.explain_word(word);
    if json {
        serde_json::to_writer_pretty(&mut *out, &e)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "input:      {:?}", e.input)?;
    writeln!(out, "normalized: {:?}", e.normalized)?;
    if e.exception {
        writeln!(out, "exception:  {}", e.output)?;
        return Ok(());
    }
    for step in &e.steps {
        writeln!(
            out,
            "  [{:>2}..{:<2}] {:<6} -> {:<8} {:?}",
            step.start, step.end, step.input, step.output, step.rule
        )?;
    }
    writeln!(out, "output:     {}", e.output)?;
    Ok(())
}

/// Replay `keys` as if typed into an empty editor, firing the insertion
/// trigger on every space. Returns the final text and cursor.
pub fn simulate_typing(t: &Transliterator<'_>, keys: &str) -> (String, usize) {
    let mut text = String::new();
    let mut cursor = 0usize;
    for key in keys.chars() {
        if key == ' ' {
            let r = t.handle_insertion_trigger(&text, cursor);
            text = r.text;
            cursor = r.cursor;
            if !t.options().trigger_on_space {
                // The trigger leaves inserting the space to the editor.
                insert_at(&mut text, cursor - 1, ' ');
            }
        } else {
            insert_at(&mut text, cursor, key);
            cursor += 1;
        }
    }
    (text, cursor)
}

fn insert_at(text: &mut String, char_pos: usize, c: char) {
    let byte_pos = text
        .char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(i, _)| i);
    text.insert(byte_pos, c);
}
