use std::io::{self, BufWriter, Write};

use clap::{Args, Parser, Subcommand};

use lipi_cli::commands::{config_ops, convert_ops};
use lipi_cli::die;
use lipi_engine::{OptionsPatch, Transliterator};

#[derive(Parser)]
#[command(name = "lipitool", about = "Romanized Nepali to Devanagari converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert free text (arguments, or stdin line by line)
    Convert {
        /// Text to convert; reads stdin when omitted
        text: Vec<String>,
        #[command(flatten)]
        opts: OptionArgs,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a single word
    Word {
        word: String,
        #[command(flatten)]
        opts: OptionArgs,
    },
    /// Show how each part of a word is composed
    Explain {
        word: String,
        #[command(flatten)]
        opts: OptionArgs,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay keystrokes through the convert-on-space trigger
    Type {
        keys: String,
        #[command(flatten)]
        opts: OptionArgs,
    },
    /// Print the embedded symbol tables
    TablesExport,
    /// Validate a symbol table TOML file
    TablesValidate { file: String },
    /// Print the default settings
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate { file: String },
}

#[derive(Args)]
struct OptionArgs {
    /// Settings TOML file
    #[arg(long)]
    config: Option<String>,
    /// Match uppercase keys (T, D, N, Sh, ...) instead of lowercasing
    #[arg(long)]
    case_sensitive: bool,
    /// Skip the whole-word exception table
    #[arg(long)]
    no_exceptions: bool,
    /// Map punctuation to Devanagari (. -> ।)
    #[arg(long)]
    danda: bool,
    /// Do not convert on space in `type`
    #[arg(long)]
    no_trigger: bool,
}

impl OptionArgs {
    fn patch(&self) -> OptionsPatch {
        OptionsPatch {
            trigger_on_space: self.no_trigger.then_some(false),
            case_sensitive: self.case_sensitive.then_some(true),
            preserve_punctuation: self.danda.then_some(false),
            enable_exceptions: self.no_exceptions.then_some(false),
        }
    }

    fn transliterator(&self) -> Transliterator<'static> {
        let options = die!(
            convert_ops::resolve_options(self.config.as_deref(), &self.patch()),
            "Error loading settings: {}"
        );
        Transliterator::new(options)
    }
}

fn main() {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Convert { text, opts, json } => {
            let t = opts.transliterator();
            if text.is_empty() {
                let stdin = io::stdin();
                die!(
                    convert_ops::convert_lines(&t, stdin.lock(), &mut out, json),
                    "Error: {}"
                );
            } else {
                die!(
                    convert_ops::convert_args(&t, &text, &mut out, json),
                    "Error: {}"
                );
            }
        }
        Command::Word { word, opts } => {
            let t = opts.transliterator();
            die!(writeln!(out, "{}", t.convert_word(&word)), "Error: {}");
        }
        Command::Explain { word, opts, json } => {
            let t = opts.transliterator();
            die!(
                convert_ops::explain_word(&t, &word, &mut out, json),
                "Error: {}"
            );
        }
        Command::Type { keys, opts } => {
            let t = opts.transliterator();
            let (text, cursor) = convert_ops::simulate_typing(&t, &keys);
            die!(
                writeln!(out, "{text}\ncursor: {cursor}"),
                "Error: {}"
            );
        }
        Command::TablesExport => config_ops::tables_export(),
        Command::TablesValidate { file } => config_ops::tables_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }

    die!(out.flush(), "Error: {}");
}
